use crate::ElementalType;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised when a definition record has nonsensical bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("move `{name}` must have a positive base power")]
    InvalidMove { name: String },
    #[error("item `{name}` must heal a positive amount")]
    InvalidItem { name: String },
    #[error("species template `{name}` is invalid: {reason}")]
    InvalidTemplate { name: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDefinition {
    pub name: String,
    pub base_power: u16,
    pub elemental_type: ElementalType,
}

impl MoveDefinition {
    pub fn new(
        name: impl Into<String>,
        base_power: u16,
        elemental_type: ElementalType,
    ) -> Result<Arc<Self>, DefinitionError> {
        let move_def = Self {
            name: name.into(),
            base_power,
            elemental_type,
        };
        move_def.validate()?;
        Ok(Arc::new(move_def))
    }

    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.base_power == 0 {
            return Err(DefinitionError::InvalidMove {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Template a combatant is stamped from. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesTemplate {
    pub name: String,
    pub max_hp: u16,
    #[serde(default)]
    pub image_ref: String,
    pub moves: Vec<Arc<MoveDefinition>>,
    pub types: Vec<ElementalType>,
}

impl SpeciesTemplate {
    pub fn new(
        name: impl Into<String>,
        max_hp: u16,
        image_ref: impl Into<String>,
        moves: Vec<Arc<MoveDefinition>>,
        types: Vec<ElementalType>,
    ) -> Result<Self, DefinitionError> {
        let template = Self {
            name: name.into(),
            max_hp,
            image_ref: image_ref.into(),
            moves,
            types,
        };
        template.validate()?;
        Ok(template)
    }

    /// Checks the bounds a combatant needs to take part in a battle.
    /// Templates that arrive through deserialization skip `new`, so loaders
    /// call this explicitly.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.max_hp == 0 {
            return Err(self.invalid("max HP must be positive"));
        }
        if self.moves.is_empty() {
            return Err(self.invalid("at least one move is required"));
        }
        for move_def in &self.moves {
            move_def.validate()?;
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> DefinitionError {
        DefinitionError::InvalidTemplate {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

/// An inventory entry. `remaining_count` is the only mutable part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub name: String,
    pub heal_amount: u16,
    pub remaining_count: u32,
}

impl ItemDefinition {
    pub fn new(
        name: impl Into<String>,
        heal_amount: u16,
        remaining_count: u32,
    ) -> Result<Self, DefinitionError> {
        let item = Self {
            name: name.into(),
            heal_amount,
            remaining_count,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.heal_amount == 0 {
            return Err(DefinitionError::InvalidItem {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    pub fn in_stock(&self) -> bool {
        self.remaining_count > 0
    }
}
