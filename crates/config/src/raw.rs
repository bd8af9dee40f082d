use std::{
    path::Path,
    time::{Duration, Instant},
};

use chordmatch::{ChordDef, Dispatch, MatcherState, MissPolicy};
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::{
    Action, Binding, Config, Error,
    defaults::{
        default_jump, default_jump_back_debounce_ms, default_step, default_window_ms,
    },
};

/// One binding as written in the file: `("g g", "Top of page", top)`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawBinding(pub String, pub String, pub Action);

/// Configuration as read from disk, before chord specs are parsed and checked.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawConfig {
    #[serde(default = "default_step")]
    pub step: i64,
    #[serde(default = "default_jump")]
    pub jump: i64,
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    #[serde(default = "default_jump_back_debounce_ms")]
    pub jump_back_debounce_ms: u64,
    #[serde(default)]
    pub miss_policy: MissPolicy,
    /// When present, replaces the built-in binding table entirely.
    #[serde(default, deserialize_with = "de_some_bindings")]
    pub bindings: Option<Vec<RawBinding>>,
}

// Helper: a present `bindings` list is written bare, without `Some(..)`.
fn de_some_bindings<'de, D>(deserializer: D) -> Result<Option<Vec<RawBinding>>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<RawBinding>::deserialize(deserializer).map(Some)
}

impl RawConfig {
    /// Parse chords, apply defaults, and validate into a final `Config`.
    pub fn into_config(self, path: Option<&Path>) -> Result<Config, Error> {
        if self.step <= 0 {
            return Err(Error::validation(
                path,
                format!("step must be positive, got {}", self.step),
            ));
        }
        if self.jump <= 0 {
            return Err(Error::validation(
                path,
                format!("jump must be positive, got {}", self.jump),
            ));
        }
        if self.window_ms == 0 {
            return Err(Error::validation(path, "window_ms must be positive"));
        }

        let bindings = match self.bindings {
            None => crate::defaults::default_bindings(),
            Some(raw) => {
                let mut out: Vec<Binding> = Vec::with_capacity(raw.len());
                for RawBinding(spec, desc, action) in raw {
                    let chord = ChordDef::parse(&spec)
                        .map_err(|e| Error::validation(path, e.to_string()))?;
                    if out.iter().any(|b| b.chord == chord) {
                        return Err(Error::validation(
                            path,
                            format!("Duplicate binding for chord '{}'", chord),
                        ));
                    }
                    out.push(Binding {
                        chord,
                        desc,
                        action,
                    });
                }
                out
            }
        };
        warn_unreachable(&bindings, self.miss_policy);

        Ok(Config {
            step: self.step,
            jump: self.jump,
            window: Duration::from_millis(self.window_ms),
            jump_back_debounce: Duration::from_millis(self.jump_back_debounce_ms),
            miss_policy: self.miss_policy,
            bindings,
        })
    }
}

/// Bindings whose own keystrokes, typed without pause from a fresh state, do
/// not fire them. Each entry pairs the binding's index with the binding that
/// fires instead, if any.
///
/// With a shared cursor a one-keystroke prefix listed earlier completes first,
/// while a longer prefix advances alongside the longer chord and lets it
/// complete early, so it is the shorter binding that loses.
pub(crate) fn unreachable(
    bindings: &[Binding],
    policy: MissPolicy,
) -> Vec<(usize, Option<usize>)> {
    let now = Instant::now();
    bindings
        .iter()
        .enumerate()
        .filter_map(|(i, binding)| {
            let mut state = MatcherState::default();
            let fired = binding.chord.combos().find_map(|combo| {
                let chords = bindings.iter().map(|b| &b.chord);
                match state.dispatch(Some(combo), chords, policy, now) {
                    Dispatch::Complete(j) => Some(j),
                    Dispatch::Pending | Dispatch::Miss => None,
                }
            });
            (fired != Some(i)).then_some((i, fired))
        })
        .collect()
}

/// Log every binding that [`unreachable`] reports.
fn warn_unreachable(bindings: &[Binding], policy: MissPolicy) {
    for (i, fired) in unreachable(bindings, policy) {
        match fired {
            Some(j) => warn!(
                "binding '{}' is unreachable: typing it fires '{}'",
                bindings[i].chord, bindings[j].chord
            ),
            None => warn!(
                "binding '{}' is unreachable: typing it fires nothing",
                bindings[i].chord
            ),
        }
    }
}
