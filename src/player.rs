use serde::{Deserialize, Serialize};

/// A single decision from the player, as data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    // The index refers to the move's position in the active combatant's move list.
    Attack { move_index: usize },

    // The id refers to an inventory key, e.g. "potion".
    UseItem { item_id: String },

    AttemptCatch,

    SwitchActive,
}

impl PlayerAction {
    pub fn attack(move_index: usize) -> Self {
        PlayerAction::Attack { move_index }
    }

    pub fn use_item(item_id: impl Into<String>) -> Self {
        PlayerAction::UseItem {
            item_id: item_id.into(),
        }
    }
}
