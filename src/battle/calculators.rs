use crate::battle::rng::RandomSource;
use crate::combatant::Combatant;
use schema::MoveDefinition;

/// Damage swings up to this far either side of a move's base power.
pub const DAMAGE_VARIANCE: f64 = 3.0;
/// Lowest capture probability, even for an untouched opponent.
pub const MIN_CATCH_CHANCE: f64 = 0.05;
/// Capture probability of an opponent on its last sliver of HP.
pub const MAX_CATCH_CHANCE: f64 = 0.5;

/// Roll damage for a move: base power plus a uniform variance in
/// `[-3, +3)`, rounded, and never below 1.
pub fn compute_damage(move_def: &MoveDefinition, rng: &mut dyn RandomSource) -> u16 {
    let variance = rng.uniform(-DAMAGE_VARIANCE, DAMAGE_VARIANCE, "damage variance");
    let damage = (move_def.base_power as f64 + variance).round().max(1.0);
    damage.min(u16::MAX as f64) as u16
}

/// Knock `amount` HP off the target, stopping at zero. Returns true if the
/// hit made it faint.
pub fn apply_damage(target: &mut Combatant, amount: u16) -> bool {
    target.take_damage(amount)
}

/// Restore up to `amount` HP. Returns the amount actually restored.
pub fn apply_heal(target: &mut Combatant, amount: u16) -> u16 {
    target.heal(amount)
}

/// Capture probability for the opponent. Falls as remaining HP rises and
/// stays within `[0.05, 0.5]`.
pub fn compute_catch_chance(opponent: &Combatant) -> f64 {
    let hp_fraction = opponent.hp_fraction().clamp(0.0, 1.0);
    (MAX_CATCH_CHANCE * (1.0 - hp_fraction)).max(MIN_CATCH_CHANCE)
}

/// Roll for capture success. Returns true if the capture succeeds.
pub fn roll_capture(chance: f64, rng: &mut dyn RandomSource) -> bool {
    rng.next_unit("capture roll") < chance
}

/// Get a descriptive capture chance category for menus.
pub fn describe_catch_chance(chance: f64) -> &'static str {
    match chance {
        c if c >= 0.45 => "Excellent",
        c if c >= 0.35 => "Very Good",
        c if c >= 0.25 => "Good",
        c if c >= 0.15 => "Fair",
        c if c > MIN_CATCH_CHANCE => "Poor",
        _ => "Very Poor",
    }
}
