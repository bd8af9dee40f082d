// Defaults and constants for chordscroll configuration

use keycode::{Combo, Key, Modifier};

use crate::{Action, Binding};
use chordmatch::ChordDef;

pub(crate) const STEP_LEN: i64 = 50;
pub(crate) const JUMP_LEN: i64 = STEP_LEN * 10;
pub(crate) const WINDOW_MS: u64 = 1000 / 5;
pub(crate) const JUMP_BACK_DEBOUNCE_MS: u64 = 500;

// Serde default functions
pub(crate) const fn default_step() -> i64 {
    STEP_LEN
}
pub(crate) const fn default_jump() -> i64 {
    JUMP_LEN
}
pub(crate) const fn default_window_ms() -> u64 {
    WINDOW_MS
}
pub(crate) const fn default_jump_back_debounce_ms() -> u64 {
    JUMP_BACK_DEBOUNCE_MS
}

/// Shorthand for a binding whose chord is a single keystroke.
fn one(combo: Combo, desc: &str, action: Action) -> Binding {
    Binding {
        chord: ChordDef::single(combo),
        desc: desc.to_string(),
        action,
    }
}

/// The built-in binding table, in priority order.
pub(crate) fn default_bindings() -> Vec<Binding> {
    let g = Combo::key(Key::G);
    let quote = Combo::key(Key::Quote);
    vec![
        one(Combo::key(Key::H), "Scroll left", Action::Left),
        one(Combo::key(Key::J), "Scroll down", Action::Down),
        one(Combo::key(Key::K), "Scroll up", Action::Up),
        one(Combo::key(Key::L), "Scroll right", Action::Right),
        Binding {
            chord: ChordDef::single(g.clone()).then(g),
            desc: "Top of page".to_string(),
            action: Action::Top,
        },
        one(
            Combo::new([Modifier::Shift], Key::G),
            "Bottom of page",
            Action::Bottom,
        ),
        one(
            Combo::new([Modifier::Ctrl], Key::U),
            "Half page up",
            Action::HalfPageUp,
        ),
        one(
            Combo::new([Modifier::Ctrl], Key::D),
            "Half page down",
            Action::HalfPageDown,
        ),
        Binding {
            chord: ChordDef::single(quote.clone()).then(quote),
            desc: "Jump back".to_string(),
            action: Action::JumpBack,
        },
    ]
}
