use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Key, Modifier};

/// A single keystroke: a set of held modifiers plus exactly one key.
///
/// Equality is set equality; the order in which modifiers were added or
/// written in a spec string never matters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Combo {
    /// Modifier keys held down for this keystroke.
    pub modifiers: HashSet<Modifier>,
    /// The key that was pressed.
    pub key: Key,
}

impl Combo {
    /// A combo with no modifiers.
    pub fn key(key: Key) -> Self {
        Self {
            modifiers: HashSet::new(),
            key,
        }
    }

    /// A combo from a modifier list and key. Repeated modifiers collapse.
    pub fn new(modifiers: impl IntoIterator<Item = Modifier>, key: Key) -> Self {
        Self {
            modifiers: modifiers.into_iter().collect(),
            key,
        }
    }

    /// Builds the combo observed for a keyboard event.
    ///
    /// Returns `None` when the key code is not one we know, which callers treat
    /// as a keystroke that cannot match anything.
    pub fn from_flags(alt: bool, ctrl: bool, meta: bool, shift: bool, code: u16) -> Option<Self> {
        let key = Key::from_code(code)?;
        let flags = [
            (alt, Modifier::Alt),
            (ctrl, Modifier::Ctrl),
            (meta, Modifier::Meta),
            (shift, Modifier::Shift),
        ];
        Some(Self::new(
            flags.into_iter().filter(|(on, _)| *on).map(|(_, m)| m),
            key,
        ))
    }

    /// Number of elements in the combination: modifiers plus the key.
    pub fn len(&self) -> usize {
        self.modifiers.len() + 1
    }

    /// A combo always holds a key, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Parses a combo specification of the form "ctrl+shift+k".
    ///
    /// - Case-insensitive for both modifiers and the key.
    /// - Components are separated by "+"; the last component is always the key.
    /// - A modifier may appear at most once.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key = Key::from_spec(parts.pop()?)?;
        let mut modifiers = HashSet::new();
        for part in parts {
            if part.is_empty() {
                return None;
            }
            if !modifiers.insert(Modifier::from_spec(part)?) {
                return None;
            }
        }
        Some(Self { modifiers, key })
    }

    /// Returns the canonical string form, modifiers in ctrl, alt, shift, meta order.
    pub fn to_string_canonical(&self) -> String {
        let mut mods: Vec<Modifier> = self.modifiers.iter().copied().collect();
        mods.sort_by_key(|m| m.order());
        let mut out: Vec<String> = mods.iter().map(|m| m.to_spec().to_string()).collect();
        out.push(self.key.to_spec());
        out.join("+")
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_canonical())
    }
}

impl FromStr for Combo {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid key combination '{}'", s))
    }
}

impl Serialize for Combo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_canonical())
    }
}

impl<'de> Deserialize<'de> for Combo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Compares a wanted combination against an observed one.
///
/// Returns false when either side is absent or the sizes differ. Otherwise
/// returns true iff every element of `observed` is present in `wanted`; with
/// equal sizes this is set equality.
pub fn combo_eq(wanted: Option<&Combo>, observed: Option<&Combo>) -> bool {
    let (Some(wanted), Some(observed)) = (wanted, observed) else {
        return false;
    };
    if wanted.len() != observed.len() {
        return false;
    }
    observed.key == wanted.key
        && observed
            .modifiers
            .iter()
            .all(|m| wanted.modifiers.contains(m))
}
