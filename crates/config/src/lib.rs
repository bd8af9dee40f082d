//! Configuration for chordscroll: scroll lengths, chord timing, and the ordered
//! table of chord bindings.
#![allow(missing_docs)]

use std::{
    env,
    path::{Path, PathBuf},
};

mod defaults;
mod error;
mod keys;
mod loader;
mod mode;
mod raw;

#[cfg(test)]
mod test_parse;

pub use chordmatch::MissPolicy;
pub use error::Error;
pub use keys::{Binding, Config};
pub use loader::{load, load_from_path, load_from_str};
pub use mode::Action;

/// Determine the preferred user config path (`~/.chordscroll/config.ron`).
pub fn default_config_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".chordscroll");
    p.push("config.ron");
    p
}

/// Resolve the effective config path using the default policy.
///
/// Policy:
/// 1) Use `explicit` when provided.
/// 2) Else use `~/.chordscroll/config.ron` when it exists.
/// 3) Else `None`, meaning the built-in defaults apply.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let preferred = default_config_path();
    preferred.exists().then_some(preferred)
}
