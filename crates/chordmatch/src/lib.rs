//! Chord recognition for keystroke streams.
//!
//! A [`ChordDef`] is an ordered list of key combinations. A [`MatcherState`]
//! tracks progress through whichever definitions are being attempted, using a
//! single cursor shared by all of them, and forgets that progress when the
//! timing window between keystrokes elapses.
mod chord;
mod error;
mod state;

pub use chord::ChordDef;
pub use error::ChordError;
pub use state::{DEFAULT_WINDOW, Dispatch, MatcherState, MissPolicy, Step};
