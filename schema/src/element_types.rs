use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Elemental typing carried by moves and species.
///
/// Types are tracked as metadata only; no effectiveness multiplier is
/// applied to damage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum ElementalType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Poison,
    Flying,
    Ground,
    Rock,
    Bug,
    Psychic,
    Steel,
}
