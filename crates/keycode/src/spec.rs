use crate::Key;

// Central mapping between enum variants and spec strings for shorthand/non-name specs.
macro_rules! key_spec_map {
    ($m:ident, $arg:tt) => {
        $m! { $arg,
            Digit0 => "0",
            Digit1 => "1",
            Digit2 => "2",
            Digit3 => "3",
            Digit4 => "4",
            Digit5 => "5",
            Digit6 => "6",
            Digit7 => "7",
            Digit8 => "8",
            Digit9 => "9",
            Minus => "-",
            Equal => "=",
            LeftBracket => "[",
            RightBracket => "]",
            Backslash => "\\",
            Semicolon => ";",
            Quote => "'",
            Comma => ",",
            Period => ".",
            Slash => "/",
            Grave => "`",
        }
    };
}

macro_rules! to_spec_match {
    ( $key:expr, $( $k:ident => $s:expr, )* ) => {
        match $key {
            $( Key::$k => $s, )*
            _ => $key.name(),
        }
    }
}

macro_rules! from_spec_match {
    ( $s:expr, $( $k:ident => $v:expr, )* ) => {{
        match $s {
            $( $v => Some(Key::$k), )*
            _ => None,
        }
    }}
}

// Aliases that only apply to parsing specs (not emitted by to_spec).
macro_rules! key_spec_aliases {
    ($m:ident, $arg:expr) => {
        $m! { $arg,
            // modifier keys
            Control => "ctrl",
            Alt => "opt",
            Alt => "option",
            Meta => "cmd",
            Meta => "command",
            Meta => "super",
            CapsLock => "caps",

            Return => "enter",
            Return => "ret",
            Delete => "del",
            Escape => "esc",
            ContextMenu => "menu",

            LeftArrow => "left",
            RightArrow => "right",
            UpArrow => "up",
            DownArrow => "down",
            PageUp => "pgup",
            PageDown => "pgdn",
        }
    };
}

/// Parses a key specification into a `Key`.
///
/// First tries a case-insensitive enum name (via `Key::from_name`), then the
/// symbol shorthands in `key_spec_map`, then the alias words.
pub fn from_spec(s: &str) -> Option<Key> {
    if let Some(k) = Key::from_name(s) {
        return Some(k);
    }
    if let some @ Some(_) = key_spec_map!(from_spec_match, s) {
        return some;
    }
    let lowered = s.to_ascii_lowercase();
    key_spec_aliases!(from_spec_match, lowered.as_str())
}

/// Returns the key specification string for a `Key`.
pub fn to_spec(key: Key) -> String {
    let s = key_spec_map!(to_spec_match, key);
    s.to_ascii_lowercase()
}

impl Key {
    /// Parses a key specification string into a `Key`.
    ///
    /// Accepts enum variant names case-insensitively, the symbol shorthands for
    /// digits and punctuation (`0`-`9`, `-`, `=`, `[`, `]`, `\\`, `;`, `'`, `,`,
    /// `.`, `/`, `` ` ``), and alias words such as esc, enter, ctrl, cmd, left,
    /// pgdn. Returns `None` if no mapping matches.
    pub fn from_spec(s: &str) -> Option<Self> {
        from_spec(s)
    }

    /// Returns the key specification string for this `Key`.
    ///
    /// Digits and punctuation emit their symbol; everything else emits the
    /// lowercased variant name.
    pub fn to_spec(self) -> String {
        to_spec(self)
    }
}
