// In: src/lib.rs

//! Pocket Battle Engine
//!
//! A turn-based wild encounter battle: the player's combatant trades
//! attacks with a wild opponent, heals from a shared bag, and throws balls
//! to catch it. The engine is pure state-machine logic; rendering belongs
//! to whoever subscribes to its events.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod combatant;
pub mod errors;
pub mod inventory;
pub mod player;
pub mod roster;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pocket-battle` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the immutable definition records.
pub use schema::{DefinitionError, ElementalType, ItemDefinition, MoveDefinition, SpeciesTemplate};

// --- From this crate's modules (`src/`) ---

// Core battle engine and state.
pub use battle::action_queue::DeferredTask;
pub use battle::engine::BattleEngine;
pub use battle::events::{BattleEvent, BattleObserver, EventBus, Side};
pub use battle::rng::{RandomSource, ScriptedRng, SeededRng};
pub use battle::state::{BattlePhase, BattleRecord, BattleState};

// Core runtime types for a battle.
pub use combatant::Combatant;
pub use inventory::Inventory;
pub use player::PlayerAction;
pub use roster::Roster;

// Crate-specific error and result types.
pub use errors::{ActionError, ActionResult, RosterError, RosterResult};
