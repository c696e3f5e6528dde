use schema::{DefinitionError, ElementalType, MoveDefinition, SpeciesTemplate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A battle participant stamped from a [`SpeciesTemplate`].
///
/// `current_hp` is kept within `[0, max_hp]` by every mutator, and the move
/// list is never empty. Deserialized combatants are checked the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CombatantRecord")]
pub struct Combatant {
    pub name: String,       // Species name if no nickname
    pub species: String,    // Name of the template this was stamped from
    pub image_ref: String,
    current_hp: u16,
    max_hp: u16,
    moves: Vec<Arc<MoveDefinition>>, // Shared with the template, never mutated
    pub types: Vec<ElementalType>,
}

/// Serialized shape of a [`Combatant`], checked before conversion.
#[derive(Deserialize)]
struct CombatantRecord {
    name: String,
    species: String,
    image_ref: String,
    current_hp: u16,
    max_hp: u16,
    moves: Vec<Arc<MoveDefinition>>,
    types: Vec<ElementalType>,
}

impl TryFrom<CombatantRecord> for Combatant {
    type Error = DefinitionError;

    fn try_from(record: CombatantRecord) -> Result<Self, Self::Error> {
        let reason = if record.max_hp == 0 {
            Some("max HP must be positive")
        } else if record.current_hp > record.max_hp {
            Some("current HP exceeds max HP")
        } else if record.moves.is_empty() {
            Some("a combatant needs at least one move")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(DefinitionError::InvalidTemplate {
                name: record.name,
                reason: reason.to_string(),
            });
        }
        for move_def in &record.moves {
            move_def.validate()?;
        }

        Ok(Combatant {
            name: record.name,
            species: record.species,
            image_ref: record.image_ref,
            current_hp: record.current_hp,
            max_hp: record.max_hp,
            moves: record.moves,
            types: record.types,
        })
    }
}

impl Combatant {
    /// Create a fresh combatant at full HP.
    ///
    /// The template is re-validated here since templates can arrive through
    /// deserialization without passing their constructor.
    pub fn instantiate(
        template: &SpeciesTemplate,
        name_override: Option<&str>,
    ) -> Result<Self, DefinitionError> {
        template.validate()?;

        Ok(Combatant {
            name: name_override.unwrap_or(&template.name).to_string(),
            species: template.name.clone(),
            image_ref: template.image_ref.clone(),
            current_hp: template.max_hp,
            max_hp: template.max_hp,
            moves: template.moves.clone(),
            types: template.types.clone(),
        })
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }

    /// Remaining HP as a fraction of max HP, in `[0.0, 1.0]`.
    pub fn hp_fraction(&self) -> f64 {
        self.current_hp as f64 / self.max_hp as f64
    }

    pub fn moves(&self) -> &[Arc<MoveDefinition>] {
        &self.moves
    }

    pub fn get_move(&self, move_index: usize) -> Option<&Arc<MoveDefinition>> {
        self.moves.get(move_index)
    }

    /// Apply damage, stopping at zero. Returns true if this knocked it out.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        let was_standing = !self.is_defeated();
        self.current_hp = self.current_hp.saturating_sub(damage);
        was_standing && self.is_defeated()
    }

    /// Restore HP up to max. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp);
        self.current_hp.saturating_sub(before)
    }

    /// Set HP directly, clamped to max.
    pub fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.max_hp);
    }

    pub fn set_hp_to_max(&mut self) {
        self.current_hp = self.max_hp;
    }
}
