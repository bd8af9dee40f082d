//! Timed keystroke scripts for `chordscroll replay`.
//!
//! One event per line: `<delay-ms> <combo> [@target]`. The delay is measured
//! from the previous event and may carry a leading `+`. Blank lines and lines
//! starting with `#` are skipped. Targets: `@input`, `@textarea`, `@select`,
//! `@editable` (a contentEditable div), `@div`.

use std::time::Duration;

use chordscroll_engine::{Element, KeyEvent};
use keycode::Combo;
use thiserror::Error;

/// A script line that could not be understood.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    /// 1-based line number.
    pub line: usize,
    /// What was wrong with it.
    pub message: String,
}

/// One scripted keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEvent {
    /// 1-based source line.
    pub line: usize,
    /// Gap since the previous event.
    pub delay: Duration,
    /// The combination as written.
    pub combo: Combo,
    /// Propagation path, target first.
    pub path: Vec<Element>,
}

impl ScriptEvent {
    /// Build the key event this line describes.
    pub fn key_event(&self) -> KeyEvent {
        KeyEvent::from_combo(&self.combo).with_path(self.path.clone())
    }
}

/// Propagation path for a `@target` annotation.
fn target_path(name: &str) -> Option<Vec<Element>> {
    let target = match name {
        "input" => Element::new("INPUT"),
        "textarea" => Element::new("TEXTAREA"),
        "select" => Element::new("SELECT"),
        "editable" => Element::new("DIV").content_editable("true"),
        "div" => Element::new("DIV"),
        _ => return None,
    };
    Some(vec![target, Element::new("BODY"), Element::new("HTML")])
}

/// Parse a whole script.
pub fn parse(text: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut out = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let err = |message: String| ScriptError { line, message };
        let mut parts = trimmed.split_whitespace();
        let (Some(delay), Some(combo)) = (parts.next(), parts.next()) else {
            return Err(err("expected '<delay-ms> <combo> [@target]'".to_string()));
        };
        let delay: u64 = delay
            .trim_start_matches('+')
            .parse()
            .map_err(|_| err(format!("invalid delay '{}'", delay)))?;
        let combo = Combo::parse(combo).ok_or_else(|| err(format!("invalid combo '{}'", combo)))?;
        let path = match parts.next() {
            None => vec![Element::new("BODY"), Element::new("HTML")],
            Some(t) => t
                .strip_prefix('@')
                .and_then(target_path)
                .ok_or_else(|| err(format!("unknown target '{}'", t)))?,
        };
        if let Some(extra) = parts.next() {
            return Err(err(format!("unexpected '{}'", extra)));
        }
        out.push(ScriptEvent {
            line,
            delay: Duration::from_millis(delay),
            combo,
            path,
        });
    }
    Ok(out)
}
