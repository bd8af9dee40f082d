//! chordscroll Engine
//!
//! The engine turns keyboard events into scroll effects:
//! - skips events aimed at editable elements
//! - feeds each keystroke through the chord matcher, in binding order
//! - applies the bound scroll action and suppresses the event
//! - keeps the jump-back position
//!
//! The main type is [`Dispatcher`]; [`SharedDispatcher`] wraps one for hosts
//! that deliver events from more than one thread.
use std::{
    path::Path,
    sync::Arc,
    time::{Duration, Instant},
};

mod error;
mod event;
mod jump_back;
mod viewport;

// Timing constant for warning threshold
const KEY_PROC_WARN_MS: u64 = 5;

use chordmatch::{Dispatch, MatcherState};
use config::{Action, Config};
use keycode::Combo;
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

pub use error::{Error, Result};
pub use event::{Element, KeyEvent, is_editable};
pub use jump_back::JumpBack;
pub use viewport::{PageViewport, Viewport};

/// What the dispatcher did with one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The event targeted an editable element and was left alone.
    Editable,
    /// No chord advanced or completed.
    Unmapped,
    /// A chord advanced and awaits further keystrokes.
    Pending,
    /// The binding at `index` completed and its action ran.
    Fired {
        /// Position of the binding in the table.
        index: usize,
        /// The action that ran.
        action: Action,
    },
}

/// Routes keystrokes through the chord matcher and applies bound actions.
///
/// Owns the matcher state, so all chord progress is serialised through
/// `&mut self`.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Active configuration; bindings are tried in order.
    config: Config,
    /// Shared chord cursor and last-advance timestamp.
    matcher: MatcherState,
    /// Remembered position for the jump-back toggle.
    jump_back: JumpBack,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Dispatcher {
    /// Create a dispatcher for `config`.
    pub fn new(config: Config) -> Self {
        Self {
            matcher: MatcherState::new(config.window),
            jump_back: JumpBack::new(config.jump_back_debounce),
            config,
        }
    }

    /// Load configuration (explicit path, user file, or defaults) and build a dispatcher.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Ok(Self::new(config::load(explicit)?))
    }

    /// Install a new configuration. Partial chord progress is discarded; the
    /// jump-back position is kept.
    pub fn set_config(&mut self, config: Config) {
        self.matcher = MatcherState::new(config.window);
        self.jump_back.set_debounce(config.jump_back_debounce);
        self.config = config;
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current chord progress.
    pub fn matcher(&self) -> &MatcherState {
        &self.matcher
    }

    /// The jump-back memory.
    pub fn jump_back(&self) -> &JumpBack {
        &self.jump_back
    }

    /// Handle a key-down event at the current time.
    pub fn handle<V: Viewport + ?Sized>(&mut self, ev: &mut KeyEvent, view: &mut V) -> Outcome {
        self.handle_at(ev, view, Instant::now())
    }

    /// Handle a key-down event observed at `now`.
    ///
    /// When a binding fires, its action is applied to `view` and the event's
    /// default action and propagation are suppressed.
    pub fn handle_at<V: Viewport + ?Sized>(
        &mut self,
        ev: &mut KeyEvent,
        view: &mut V,
        now: Instant,
    ) -> Outcome {
        let start = Instant::now();
        if ev.targets_editable() {
            trace!(key_code = ev.key_code, "event targets editable element");
            return Outcome::Editable;
        }
        let observed = ev.combo();
        let outcome = self.match_event(observed.as_ref(), now);
        if let Outcome::Fired { index, action } = outcome {
            debug!(
                "chord fired: {} -> {:?}",
                self.config.bindings[index].chord, action
            );
            self.apply(action, view, now);
            ev.prevent_default();
            ev.stop_propagation();
        }

        let elapsed = start.elapsed();
        if elapsed > Duration::from_millis(KEY_PROC_WARN_MS) {
            warn!("Key processing took {:?} for code {}", elapsed, ev.key_code);
        }
        outcome
    }

    /// Run the keystroke through the binding table, honouring the miss policy.
    fn match_event(&mut self, observed: Option<&Combo>, now: Instant) -> Outcome {
        let chords = self.config.bindings.iter().map(|b| &b.chord);
        match self
            .matcher
            .dispatch(observed, chords, self.config.miss_policy, now)
        {
            Dispatch::Complete(index) => Outcome::Fired {
                index,
                action: self.config.bindings[index].action,
            },
            Dispatch::Pending => Outcome::Pending,
            Dispatch::Miss => Outcome::Unmapped,
        }
    }

    /// Perform `action` against `view`.
    fn apply<V: Viewport + ?Sized>(&mut self, action: Action, view: &mut V, now: Instant) {
        let (x, y) = view.offset();
        match action.delta(self.config.step, self.config.jump) {
            Some((dx, dy)) => {
                self.jump_back.mark((x, y), now);
                view.scroll_to(x.saturating_add(dx), y.saturating_add(dy));
            }
            None => match self.jump_back.toggle((x, y), now) {
                Some((tx, ty)) => view.scroll_to(tx, ty),
                None => debug!("jump back: no saved position yet"),
            },
        }
        trace!(from = ?(x, y), to = ?view.offset(), "scrolled");
    }
}

/// A cloneable, thread-safe handle to a [`Dispatcher`].
///
/// Each event is handled under one lock acquisition, so cursor reads and
/// writes from concurrent event sources never interleave.
#[derive(Clone, Debug, Default)]
pub struct SharedDispatcher {
    /// The guarded dispatcher.
    inner: Arc<Mutex<Dispatcher>>,
}

impl SharedDispatcher {
    /// Wrap a dispatcher.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dispatcher)),
        }
    }

    /// Handle a key-down event at the current time.
    pub fn handle<V: Viewport + ?Sized>(&self, ev: &mut KeyEvent, view: &mut V) -> Outcome {
        self.inner.lock().handle(ev, view)
    }

    /// Handle a key-down event observed at `now`.
    pub fn handle_at<V: Viewport + ?Sized>(
        &self,
        ev: &mut KeyEvent,
        view: &mut V,
        now: Instant,
    ) -> Outcome {
        self.inner.lock().handle_at(ev, view, now)
    }

    /// Install a new configuration.
    pub fn set_config(&self, config: Config) {
        self.inner.lock().set_config(config);
    }

    /// Current chord cursor.
    pub fn cursor(&self) -> usize {
        self.inner.lock().matcher().cursor()
    }
}
