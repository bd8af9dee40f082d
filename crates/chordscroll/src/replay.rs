//! Replay a keystroke script against a simulated page.

use std::{fmt, time::Instant};

use chordscroll_engine::{Dispatcher, Outcome, PageViewport, Viewport};
use config::Config;
use tracing::debug;

use crate::script::ScriptEvent;

/// Simulated page geometry and starting offset.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    /// Viewport width.
    pub width: i64,
    /// Viewport height.
    pub height: i64,
    /// Content width.
    pub content_width: i64,
    /// Content height.
    pub content_height: i64,
    /// Initial scroll offset.
    pub start: (i64, i64),
}

/// What happened for one scripted keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayLine {
    /// Script line number.
    pub line: usize,
    /// Milliseconds since the first event.
    pub at_ms: u64,
    /// The keystroke, canonical form.
    pub combo: String,
    /// Dispatcher outcome.
    pub outcome: Outcome,
    /// Description of the fired binding, if any.
    pub desc: Option<String>,
    /// Viewport offset after the event.
    pub offset: (i64, i64),
    /// Whether the event's default action was suppressed.
    pub suppressed: bool,
}

impl fmt::Display for ReplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match (&self.outcome, &self.desc) {
            (Outcome::Fired { .. }, Some(desc)) => format!("fired '{}'", desc),
            (Outcome::Fired { action, .. }, None) => format!("fired {:?}", action),
            (Outcome::Pending, _) => "pending".to_string(),
            (Outcome::Unmapped, _) => "unmapped".to_string(),
            (Outcome::Editable, _) => "ignored (editable)".to_string(),
        };
        write!(
            f,
            "{:>6}ms  {:<10} {:<24} ({}, {}){}",
            self.at_ms,
            self.combo,
            what,
            self.offset.0,
            self.offset.1,
            if self.suppressed { "  [suppressed]" } else { "" }
        )
    }
}

/// Run `events` through a dispatcher built from `config`.
pub fn replay(config: Config, events: &[ScriptEvent], page: Page) -> Vec<ReplayLine> {
    let mut dispatcher = Dispatcher::new(config);
    let mut view = PageViewport::new(
        page.width,
        page.height,
        page.content_width,
        page.content_height,
    );
    view.scroll_to(page.start.0, page.start.1);

    let base = Instant::now();
    let mut now = base;
    let mut out = Vec::with_capacity(events.len());
    for ev in events {
        now += ev.delay;
        let mut key_event = ev.key_event();
        let outcome = dispatcher.handle_at(&mut key_event, &mut view, now);
        let desc = match outcome {
            Outcome::Fired { index, .. } => dispatcher
                .config()
                .bindings
                .get(index)
                .map(|b| b.desc.clone()),
            _ => None,
        };
        debug!(line = ev.line, ?outcome, "replayed");
        out.push(ReplayLine {
            line: ev.line,
            at_ms: u64::try_from(now.duration_since(base).as_millis()).unwrap_or(u64::MAX),
            combo: ev.combo.to_string(),
            outcome,
            desc,
            offset: view.offset(),
            suppressed: key_event.default_prevented(),
        });
    }
    out
}
