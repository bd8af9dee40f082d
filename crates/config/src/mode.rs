//! Scroll actions bound to chords.

use serde::{Deserialize, Serialize};

/// Actions that can be triggered by a completed chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Scroll left by one step
    Left,
    /// Scroll down by one step
    Down,
    /// Scroll up by one step
    Up,
    /// Scroll right by one step
    Right,
    /// Scroll up by the jump length
    HalfPageUp,
    /// Scroll down by the jump length
    HalfPageDown,
    /// Scroll to the top of the page
    Top,
    /// Scroll to the bottom of the page
    Bottom,
    /// Scroll by an explicit (x, y) delta. Example: scroll(0, 120).
    Scroll(i64, i64),
    /// Swap the current position with the remembered one
    JumpBack,
}

impl Action {
    /// The scroll delta for this action, or `None` for actions that are not
    /// relative scrolls.
    ///
    /// `Top` and `Bottom` use `i64::MAX` and rely on the viewport clamping.
    pub fn delta(self, step: i64, jump: i64) -> Option<(i64, i64)> {
        match self {
            Self::Left => Some((-step, 0)),
            Self::Down => Some((0, step)),
            Self::Up => Some((0, -step)),
            Self::Right => Some((step, 0)),
            Self::HalfPageUp => Some((0, -jump)),
            Self::HalfPageDown => Some((0, jump)),
            Self::Top => Some((0, -i64::MAX)),
            Self::Bottom => Some((0, i64::MAX)),
            Self::Scroll(dx, dy) => Some((dx, dy)),
            Self::JumpBack => None,
        }
    }
}
