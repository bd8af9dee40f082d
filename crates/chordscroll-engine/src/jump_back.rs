use std::time::{Duration, Instant};

use tracing::trace;

/// Remembers one earlier scroll position for the jump-back toggle.
///
/// A burst of scrolls saves only the position from before the burst: a new
/// position is recorded only when more than `debounce` has passed since the
/// previous save.
#[derive(Debug, Clone)]
pub struct JumpBack {
    saved: Option<(i64, i64)>,
    last_save: Option<Instant>,
    debounce: Duration,
}

impl JumpBack {
    /// Create an empty memory.
    pub fn new(debounce: Duration) -> Self {
        Self {
            saved: None,
            last_save: None,
            debounce,
        }
    }

    /// The remembered position, if any.
    pub fn saved(&self) -> Option<(i64, i64)> {
        self.saved
    }

    /// Change the debounce, keeping the remembered position.
    pub fn set_debounce(&mut self, debounce: Duration) {
        self.debounce = debounce;
    }

    /// Record `pos` as the jump-back target unless a save happened within the
    /// debounce. Returns true when `pos` was recorded.
    pub fn mark(&mut self, pos: (i64, i64), now: Instant) -> bool {
        if let Some(last) = self.last_save {
            if now.saturating_duration_since(last) <= self.debounce {
                return false;
            }
        }
        trace!(x = pos.0, y = pos.1, "jump_back_saved");
        self.saved = Some(pos);
        self.last_save = Some(now);
        true
    }

    /// Swap `current` with the remembered position and return where to go.
    ///
    /// With nothing remembered yet, `current` is stored and `None` returned.
    pub fn toggle(&mut self, current: (i64, i64), now: Instant) -> Option<(i64, i64)> {
        let target = self.saved.replace(current);
        self.last_save = Some(now);
        target
    }
}
