use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every random decision in a battle: damage variance, opponent
/// move choice, capture rolls and encounter selection.
///
/// Each draw names its `reason` so scripted sources can report what a test
/// consumed.
pub trait RandomSource {
    /// A uniform value in `[0.0, 1.0)`.
    fn next_unit(&mut self, reason: &str) -> f64;

    /// A uniform value in `[min, max)`.
    fn uniform(&mut self, min: f64, max: f64, reason: &str) -> f64 {
        min + (max - min) * self.next_unit(reason)
    }

    /// A uniform index into a collection of `len` elements. `len` must be non-zero.
    fn pick_index(&mut self, len: usize, reason: &str) -> usize {
        let index = (self.next_unit(reason) * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }
}

/// Seedable generator for real battles. Two generators built from the same
/// seed replay the same battle.
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: StdRng,
}

impl SeededRng {
    /// Without a seed, one is drawn from the thread RNG and can be read back
    /// with [`SeededRng::seed`].
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn next_unit(&mut self, _reason: &str) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of outcomes in order.
///
/// # Panics
///
/// Panics when asked for more values than were scripted, naming the draw
/// that ran dry.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    outcomes: Vec<f64>,
    index: usize,
}

impl ScriptedRng {
    pub fn new(outcomes: Vec<f64>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// Number of outcomes drawn so far.
    pub fn consumed(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.len() - self.index
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self, reason: &str) -> f64 {
        if self.index >= self.outcomes.len() {
            panic!(
                "ScriptedRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }
}
