use std::time::Duration;

use chordmatch::{ChordDef, MissPolicy};
use serde::Serialize;

use crate::{
    Action,
    defaults::{self, JUMP_BACK_DEBOUNCE_MS, JUMP_LEN, STEP_LEN, WINDOW_MS},
};

/// A chord and the action it triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    /// Keystrokes that trigger the action.
    pub chord: ChordDef,
    /// Short human-readable description.
    pub desc: String,
    /// What to do when the chord completes.
    pub action: Action,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Distance for single-step scrolls (h/j/k/l).
    pub step: i64,
    /// Distance for half-page scrolls.
    pub jump: i64,
    /// Maximum gap between keystrokes of one chord.
    pub window: Duration,
    /// Minimum gap between two saves of the jump-back position.
    pub jump_back_debounce: Duration,
    /// Handling of keystrokes that match nothing mid-chord.
    pub miss_policy: MissPolicy,
    /// Bindings in priority order; the first completed chord wins.
    pub bindings: Vec<Binding>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: STEP_LEN,
            jump: JUMP_LEN,
            window: Duration::from_millis(WINDOW_MS),
            jump_back_debounce: Duration::from_millis(JUMP_BACK_DEBOUNCE_MS),
            miss_policy: MissPolicy::default(),
            bindings: defaults::default_bindings(),
        }
    }
}
