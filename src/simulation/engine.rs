//! High-level run state of the engine
//!
//! `Stopped` is the initial state. `start`/`stop` move between the two states
//! and are no-ops when already there.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Stopped, // ticks leave particle state untouched
    Running, // each tick performs exactly one step
}

impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}
