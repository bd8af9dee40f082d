//! Parse and load user configuration.

use std::{ffi::OsStr, fs, path::Path};

use tracing::debug;

use crate::{Config, Error, raw::RawConfig, resolve_config_path};

/// Parse a configuration from RON text. `path` is used for error reporting only.
pub fn load_from_str(text: &str, path: Option<&Path>) -> Result<Config, Error> {
    let raw: RawConfig = ron::from_str(text).map_err(|e| Error::Parse {
        path: path.map(Path::to_path_buf),
        message: e.to_string(),
    })?;
    raw.into_config(path)
}

/// Load a fully resolved `Config` from a RON file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config, Error> {
    if path.extension() != Some(OsStr::new("ron")) {
        return Err(Error::Read {
            path: Some(path.to_path_buf()),
            message: "Unsupported config format (expected a .ron file)".to_string(),
        });
    }
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    let cfg = load_from_str(&text, Some(path))?;
    debug!(
        "loaded config from {} ({} bindings)",
        path.display(),
        cfg.bindings.len()
    );
    Ok(cfg)
}

/// Load the effective configuration: the explicit path, else the user file,
/// else the built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, Error> {
    match resolve_config_path(explicit) {
        Some(path) => load_from_path(&path),
        None => {
            debug!("no config file found, using built-in bindings");
            Ok(Config::default())
        }
    }
}
