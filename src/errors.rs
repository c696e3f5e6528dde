use schema::DefinitionError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a player action was turned away. Rejections never change battle
/// state; they are reported and the battle carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ActionError {
    /// The battle is not waiting for player input, or a combatant is down.
    #[error("no action can be taken right now")]
    NoOp,
    /// Move slot index is out of bounds for the active combatant.
    #[error("no move in slot {0}")]
    UnknownMove(usize),
    /// The item id is not in the inventory or none are left.
    #[error("no {0} left in the bag")]
    UnknownItem(String),
    /// Items cannot be used on a fainted combatant.
    #[error("the item has no valid target")]
    TargetInvalid,
    /// The opponent has already fainted.
    #[error("there is nothing to catch")]
    NothingToCatch,
    /// The party has no one to switch in.
    #[error("there is no other combatant to switch to")]
    NoAlternateCombatant,
}

/// Errors raised while loading or validating a roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse roster: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error(transparent)]
    Definition(#[from] DefinitionError),
    #[error("roster has no species to encounter")]
    EmptyEncounterTable,
}

/// Type alias for results of player actions
pub type ActionResult<T> = Result<T, ActionError>;

/// Type alias for results of roster loading
pub type RosterResult<T> = Result<T, RosterError>;
