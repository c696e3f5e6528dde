//! A module for defining AI behaviors for battle opponents.

use crate::battle::rng::RandomSource;
use crate::combatant::Combatant;

/// A trait for any system that can pick the opponent's move.
/// This provides a common interface for different AI strategies.
pub trait Behavior {
    /// Returns the index of the move `attacker` should use against `defender`.
    fn choose_move(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
        rng: &mut dyn RandomSource,
    ) -> usize;
}

/// Picks uniformly among the attacker's moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMoveBehavior;

impl Behavior for RandomMoveBehavior {
    fn choose_move(
        &self,
        attacker: &Combatant,
        _defender: &Combatant,
        rng: &mut dyn RandomSource,
    ) -> usize {
        rng.pick_index(attacker.moves().len(), "opponent move selection")
    }
}
