use crate::battle::encounter::EncounterGenerator;
use crate::battle::engine::BattleEngine;
use crate::battle::events::BattleEvent;
use crate::battle::rng::ScriptedRng;
use crate::battle::state::BattleState;
use crate::combatant::Combatant;
use crate::inventory::Inventory;
use crate::roster::Roster;
use schema::{ElementalType, ItemDefinition, MoveDefinition, SpeciesTemplate};
use std::collections::BTreeMap;

/// Roll that yields zero damage variance.
pub const NO_VARIANCE: f64 = 0.5;

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```ignore
/// let opponent = TestCombatantBuilder::new("Wildling", 70)
///     .with_move("Scratch", 14)
///     .with_hp(1)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    name: String,
    max_hp: u16,
    moves: Vec<(String, u16)>,
    current_hp: Option<u16>,
}

impl TestCombatantBuilder {
    pub fn new(name: &str, max_hp: u16) -> Self {
        Self {
            name: name.to_string(),
            max_hp,
            moves: Vec::new(),
            current_hp: None,
        }
    }

    pub fn with_move(mut self, name: &str, base_power: u16) -> Self {
        self.moves.push((name.to_string(), base_power));
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> Combatant {
        let mut moves = self.moves;
        if moves.is_empty() {
            moves.push(("Tackle".to_string(), 14));
        }
        let moves = moves
            .into_iter()
            .map(|(name, power)| MoveDefinition::new(name, power, ElementalType::Normal).unwrap())
            .collect();

        let template =
            SpeciesTemplate::new(self.name, self.max_hp, "", moves, vec![ElementalType::Normal])
                .unwrap();
        let mut combatant = Combatant::instantiate(&template, None).unwrap();
        if let Some(hp) = self.current_hp {
            combatant.set_hp(hp);
        }
        combatant
    }
}

/// A bag holding three 20 HP potions.
pub fn test_inventory() -> Inventory {
    let mut items = BTreeMap::new();
    items.insert(
        "potion".to_string(),
        ItemDefinition::new("Potion", 20, 3).unwrap(),
    );
    Inventory::new(items)
}

/// Standard player combatant: 100 HP, a single 16-power move.
pub fn default_player() -> Combatant {
    TestCombatantBuilder::new("Hero", 100)
        .with_move("Quick Attack", 16)
        .build()
}

/// Standard opponent: 70 HP, a single 14-power move.
pub fn default_opponent() -> Combatant {
    TestCombatantBuilder::new("Wildling", 70)
        .with_move("Scratch", 14)
        .build()
}

pub fn create_test_battle(player: Combatant, opponent: Combatant) -> BattleState {
    BattleState::new(player, opponent, test_inventory())
}

/// Creates an engine over `state` whose random draws replay `rng_values`.
/// Replacement opponents come from the built-in encounter table.
pub fn create_test_engine(state: BattleState, rng_values: Vec<f64>) -> BattleEngine {
    let encounters = EncounterGenerator::new(Roster::builtin().encounters).unwrap();
    BattleEngine::from_state(state, encounters, Box::new(ScriptedRng::new(rng_values)))
}

/// Count events matching a predicate.
pub fn count_events(engine: &BattleEngine, predicate: impl Fn(&BattleEvent) -> bool) -> usize {
    engine.events().iter().filter(|event| predicate(event)).count()
}
