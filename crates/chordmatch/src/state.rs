use std::time::{Duration, Instant};

use keycode::{Combo, combo_eq};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::ChordDef;

/// Maximum gap between consecutive keystrokes of one chord.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(200);

/// What to do when a keystroke matches nothing while a chord is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    /// Leave the cursor where it is until the timing window expires.
    Keep,
    /// Drop partial progress and treat the keystroke as the start of a new chord.
    #[default]
    Reset,
}

/// Result of testing one keystroke against one chord definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The keystroke is not the combination expected at the cursor.
    Miss,
    /// The keystroke matched and the chord has further keystrokes to go.
    Advanced,
    /// The keystroke finished the chord; the cursor is back at zero.
    Complete,
}

/// Result of offering one keystroke to an ordered list of chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// No chord advanced or completed.
    Miss,
    /// At least one chord advanced and none completed.
    Pending,
    /// The chord at this position completed.
    Complete(usize),
}

/// Progress through the registered chords.
///
/// The cursor is shared by every definition tested in a pass, so definitions
/// that share a prefix are disambiguated by the order in which they are tried.
#[derive(Debug, Clone)]
pub struct MatcherState {
    /// Index of the next combination expected.
    cursor: usize,
    /// When the cursor last advanced.
    last_advance: Option<Instant>,
    /// Progress older than this is discarded.
    window: Duration,
}

impl Default for MatcherState {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl MatcherState {
    /// Create a state at cursor zero with the given timing window.
    pub fn new(window: Duration) -> Self {
        Self {
            cursor: 0,
            last_advance: None,
            window,
        }
    }

    /// Index of the next combination expected.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The timing window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// When the cursor last advanced, if ever.
    pub fn last_advance(&self) -> Option<Instant> {
        self.last_advance
    }

    /// Forget any partial progress.
    pub fn reset(&mut self) {
        if self.cursor != 0 {
            trace!(cursor = self.cursor, "chord_reset");
        }
        self.cursor = 0;
    }

    /// Reset the cursor if the timing window has elapsed since the last advance.
    ///
    /// Idempotent for a given `now`: the timestamp only moves on a successful
    /// advance, so calling this once per definition within one event is harmless.
    pub fn expire(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_advance else {
            return false;
        };
        if self.cursor == 0 || now.saturating_duration_since(last) < self.window {
            return false;
        }
        trace!(
            cursor = self.cursor,
            elapsed_ms = now.saturating_duration_since(last).as_millis() as u64,
            "chord_expired"
        );
        self.cursor = 0;
        true
    }

    /// Test `observed` against `wanted` at the current cursor.
    ///
    /// A miss changes nothing. A match records `now` and advances the cursor;
    /// reaching the end of `wanted` resets the cursor and reports completion.
    /// An absent `observed` (unknown key) always misses.
    pub fn step(&mut self, observed: Option<&Combo>, wanted: &ChordDef, now: Instant) -> Step {
        self.expire(now);
        if !combo_eq(wanted.get(self.cursor), observed) {
            return Step::Miss;
        }
        self.last_advance = Some(now);
        self.cursor += 1;
        if self.cursor == wanted.len() {
            self.cursor = 0;
            debug!(chord = %wanted, "chord_complete");
            return Step::Complete;
        }
        trace!(chord = %wanted, cursor = self.cursor, "chord_advance");
        Step::Advanced
    }

    /// Returns true when `observed` completes `wanted`.
    pub fn try_match(&mut self, observed: Option<&Combo>, wanted: &ChordDef, now: Instant) -> bool {
        self.step(observed, wanted, now) == Step::Complete
    }

    /// Offer `observed` to `chords` in order; the first completion wins.
    ///
    /// Under [`MissPolicy::Reset`], a keystroke that matches nothing while a
    /// chord is in progress drops that progress and is offered once more from
    /// cursor zero.
    pub fn dispatch<'a, I>(
        &mut self,
        observed: Option<&Combo>,
        chords: I,
        policy: MissPolicy,
        now: Instant,
    ) -> Dispatch
    where
        I: IntoIterator<Item = &'a ChordDef>,
        I::IntoIter: Clone,
    {
        let chords = chords.into_iter();
        self.expire(now);
        let started_at = self.cursor;
        let result = self.pass(observed, chords.clone(), now);
        if result == Dispatch::Miss && started_at != 0 && policy == MissPolicy::Reset {
            trace!(cursor = started_at, "full miss mid-chord, retrying from start");
            self.reset();
            return self.pass(observed, chords, now);
        }
        result
    }

    /// One pass over `chords` at the shared cursor.
    fn pass<'a>(
        &mut self,
        observed: Option<&Combo>,
        chords: impl Iterator<Item = &'a ChordDef>,
        now: Instant,
    ) -> Dispatch {
        let mut advanced = false;
        for (index, chord) in chords.enumerate() {
            match self.step(observed, chord, now) {
                Step::Complete => return Dispatch::Complete(index),
                Step::Advanced => advanced = true,
                Step::Miss => {}
            }
        }
        if advanced {
            Dispatch::Pending
        } else {
            Dispatch::Miss
        }
    }
}
