use std::collections::VecDeque;
use std::time::Duration;

/// Follow-up steps the engine schedules behind a player action.
/// They run strictly after the triggering action and before any new
/// player input is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// The opponent picks a move and attacks.
    OpponentTurn,

    /// The Encounter Generator replaces a fainted or caught opponent.
    SpawnOpponent,
}

impl DeferredTask {
    /// How long a front-end may wait before running this task so the log
    /// reads naturally. The engine itself never sleeps.
    pub fn presentation_delay(self) -> Duration {
        match self {
            DeferredTask::OpponentTurn => Duration::from_millis(1000),
            DeferredTask::SpawnOpponent => Duration::from_millis(1500),
        }
    }
}

/// Single ordered timeline of deferred tasks.
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    tasks: VecDeque<DeferredTask>,
}

impl DeferredQueue {
    /// Creates a new, empty queue.
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Adds a task to the end of the timeline.
    pub fn schedule(&mut self, task: DeferredTask) {
        self.tasks.push_back(task);
    }

    /// Removes and returns the next task to be executed.
    pub fn pop_next(&mut self) -> Option<DeferredTask> {
        self.tasks.pop_front()
    }

    pub fn peek(&self) -> Option<DeferredTask> {
        self.tasks.front().copied()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
