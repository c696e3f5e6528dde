use crate::combatant::Combatant;
use crate::inventory::Inventory;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Copy)]
pub enum BattlePhase {
    AwaitingPlayerAction,
    ResolvingPlayerAction,
    ResolvingOpponentAction,
    PlayerDefeated, // No recovery; the battle must be restarted
    BattleWon,      // Opponent fainted or caught, replacement pending
}

/// Running tally across every opponent this battle has faced.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BattleRecord {
    pub opponents_defeated: u32,
    pub opponents_caught: Vec<String>,
    pub encounters: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleState {
    pub player: Combatant,
    pub opponent: Combatant,
    pub inventory: Inventory,
    pub phase: BattlePhase,
    pub actions_enabled: bool,
    pub record: BattleRecord,
}

impl BattleState {
    pub fn new(player: Combatant, opponent: Combatant, inventory: Inventory) -> Self {
        Self {
            player,
            opponent,
            inventory,
            phase: BattlePhase::AwaitingPlayerAction,
            actions_enabled: true,
            record: BattleRecord {
                encounters: 1,
                ..BattleRecord::default()
            },
        }
    }

    /// True when a player decision would be accepted right now.
    pub fn accepting_actions(&self) -> bool {
        self.actions_enabled && self.phase == BattlePhase::AwaitingPlayerAction
    }

    pub fn either_defeated(&self) -> bool {
        self.player.is_defeated() || self.opponent.is_defeated()
    }

    pub fn is_player_defeated(&self) -> bool {
        self.phase == BattlePhase::PlayerDefeated
    }
}
