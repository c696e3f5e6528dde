use crate::errors::ActionError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Which battle slot a combatant occupies.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Attacks
    DamageDealt {
        source: String,
        target: String,
        target_side: Side,
        move_name: String,
        amount: u16,
    },
    Fainted {
        combatant: String,
        side: Side,
    },
    BlackedOut {
        combatant: String,
    },

    // Items
    Healed {
        combatant: String,
        item: String,
        amount: u16,
    },

    // Capture
    CaptureAttempted {
        opponent: String,
        chance: f64,
    },
    CaptureResult {
        opponent: String,
        success: bool,
    },

    // Encounters
    OpponentAppeared {
        opponent: String,
        max_hp: u16,
    },

    // Presentation state
    ActionsEnabledChanged {
        enabled: bool,
    },
    HpChanged {
        combatant: String,
        side: Side,
        current_hp: u16,
        max_hp: u16,
    },

    // Rejections
    ActionRejected {
        reason: ActionError,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable log line.
    /// Returns None for silent events that only drive rendering.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::DamageDealt {
                source,
                target,
                target_side,
                move_name,
                amount,
            } => {
                let attacker = Self::side_prefix(target_side.opposite(), source);
                let defender = Self::side_prefix(*target_side, target);
                Some(format!(
                    "{} used {}! {} took {} damage!",
                    attacker, move_name, defender, amount
                ))
            }
            BattleEvent::Fainted { combatant, side } => {
                Some(format!("{} fainted!", Self::side_prefix(*side, combatant)))
            }
            BattleEvent::BlackedOut { .. } => {
                Some("You have no more usable combatants! You blacked out!".to_string())
            }
            BattleEvent::Healed {
                combatant,
                item,
                amount,
            } => Some(format!(
                "Used a {}! {} recovered {} HP!",
                item, combatant, amount
            )),
            BattleEvent::CaptureAttempted { .. } => Some("You threw a ball!".to_string()),
            BattleEvent::CaptureResult { opponent, success } => {
                if *success {
                    Some(format!("Gotcha! {} was caught!", opponent))
                } else {
                    Some(format!("Oh no! The wild {} broke free!", opponent))
                }
            }
            BattleEvent::OpponentAppeared { opponent, .. } => {
                Some(format!("A wild {} appeared!", opponent))
            }
            BattleEvent::ActionsEnabledChanged { .. } => None,
            BattleEvent::HpChanged { .. } => None,
            BattleEvent::ActionRejected { reason } => Some(Self::format_rejection(reason)),
        }
    }

    // --- Private Helper Functions ---

    fn side_prefix(side: Side, name: &str) -> String {
        match side {
            Side::Player => name.to_string(),
            Side::Opponent => format!("The wild {}", name),
        }
    }

    fn format_rejection(reason: &ActionError) -> String {
        match reason {
            ActionError::UnknownItem(item_id) => format!("You don't have any {} left!", item_id),
            ActionError::TargetInvalid => "It won't have any effect.".to_string(),
            ActionError::NothingToCatch => "There's nothing to catch!".to_string(),
            ActionError::NoAlternateCombatant => {
                "There's no one else to switch to!".to_string()
            }
            ActionError::NoOp | ActionError::UnknownMove(_) => "But nothing happened!".to_string(),
        }
    }
}

/// Receives every event the engine emits, in order.
///
/// Presentation layers implement this to render HP bars, logs and button
/// state; the engine never reads anything back from them.
pub trait BattleObserver {
    fn on_event(&mut self, event: &BattleEvent);
}

impl<T: BattleObserver> BattleObserver for Rc<RefCell<T>> {
    fn on_event(&mut self, event: &BattleEvent) {
        self.borrow_mut().on_event(event);
    }
}

/// Event bus for collecting battle events in emission order.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Remove and return everything collected so far.
    pub fn drain(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Formatted text of every non-silent event, in order.
    pub fn formatted(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl BattleObserver for EventBus {
    fn on_event(&mut self, event: &BattleEvent) {
        self.push(event.clone());
    }
}

impl std::fmt::Display for EventBus {
    /// Format the EventBus for printing. Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}
