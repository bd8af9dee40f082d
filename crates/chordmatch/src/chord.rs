use std::{fmt, str::FromStr};

use keycode::Combo;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::ChordError;

/// An ordered, non-empty sequence of combinations typed one after another.
///
/// Written as whitespace-separated combo specs, e.g. `"g g"` or `"ctrl+u"`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChordDef {
    /// Combinations in the order they must be typed.
    combos: Vec<Combo>,
}

impl ChordDef {
    /// Build a definition from its combinations.
    pub fn new(combos: Vec<Combo>) -> Result<Self, ChordError> {
        if combos.is_empty() {
            return Err(ChordError::Empty);
        }
        Ok(Self { combos })
    }

    /// A definition consisting of a single keystroke.
    pub fn single(combo: Combo) -> Self {
        Self {
            combos: vec![combo],
        }
    }

    /// Extend this chord with one more keystroke.
    pub fn then(mut self, combo: Combo) -> Self {
        self.combos.push(combo);
        self
    }

    /// Parse a whitespace-separated chord spec such as `"g g"` or `"shift+g"`.
    pub fn parse(s: &str) -> Result<Self, ChordError> {
        let combos = s
            .split_whitespace()
            .map(|part| {
                Combo::parse(part).ok_or_else(|| ChordError::InvalidCombo {
                    spec: part.to_string(),
                    chord: s.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(combos)
    }

    /// Number of keystrokes in this chord.
    pub fn len(&self) -> usize {
        self.combos.len()
    }

    /// Definitions are never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    /// The combination expected at `index`, if the chord is that long.
    pub fn get(&self, index: usize) -> Option<&Combo> {
        self.combos.get(index)
    }

    /// Iterate the combinations in order.
    pub fn combos(&self) -> impl Iterator<Item = &Combo> {
        self.combos.iter()
    }
}

impl fmt::Display for ChordDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.combos.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl From<Combo> for ChordDef {
    fn from(combo: Combo) -> Self {
        Self::single(combo)
    }
}

impl FromStr for ChordDef {
    type Err = ChordError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ChordDef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChordDef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
