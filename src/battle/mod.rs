pub mod action_queue;
pub mod ai;
pub mod calculators;
pub mod encounter;
pub mod engine;
pub mod events;
pub mod rng;
pub mod state;

#[cfg(test)]
mod tests;
