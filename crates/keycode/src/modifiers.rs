use serde::{Deserialize, Serialize};

use crate::Key;

/// Modifier flags carried by a browser keyboard event.
///
/// Modifiers are compared by value; there is no bitmask meaning attached.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// `altKey`
    Alt,
    /// `ctrlKey`
    Ctrl,
    /// `metaKey`
    Meta,
    /// `shiftKey`
    Shift,
}

impl From<Modifier> for Key {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Alt => Key::Alt,
            Modifier::Ctrl => Key::Control,
            Modifier::Meta => Key::Meta,
            Modifier::Shift => Key::Shift,
        }
    }
}

impl TryFrom<Key> for Modifier {
    type Error = ();
    fn try_from(k: Key) -> Result<Self, Self::Error> {
        match k {
            Key::Alt => Ok(Modifier::Alt),
            Key::Control => Ok(Modifier::Ctrl),
            Key::Meta => Ok(Modifier::Meta),
            Key::Shift => Ok(Modifier::Shift),
            _ => Err(()),
        }
    }
}

impl Modifier {
    /// All modifiers in canonical display order.
    pub const ALL: [Self; 4] = [Self::Ctrl, Self::Alt, Self::Shift, Self::Meta];

    /// Parses a modifier specification string via key specs, then converts.
    ///
    /// Accepts the same case-insensitive names and aliases as `Key::from_spec`
    /// (ctrl, alt, opt, meta, cmd, super, shift). Non-modifier keys fail.
    pub fn from_spec(s: &str) -> Option<Self> {
        Key::from_spec(s).and_then(|k| Self::try_from(k).ok())
    }

    /// Returns the canonical lowercase spec string for this modifier.
    pub fn to_spec(self) -> &'static str {
        match self {
            Self::Alt => "alt",
            Self::Ctrl => "ctrl",
            Self::Meta => "meta",
            Self::Shift => "shift",
        }
    }

    /// Position of this modifier in canonical display order.
    pub(crate) fn order(self) -> usize {
        match self {
            Self::Ctrl => 0,
            Self::Alt => 1,
            Self::Shift => 2,
            Self::Meta => 3,
        }
    }
}
