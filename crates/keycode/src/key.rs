use serde::{Deserialize, Serialize};

/// Declares the `Key` enum together with its code and name lookup tables.
macro_rules! define_keys {
    ( $( $name:ident = $code:literal, )* ) => {
        /// A physical key, identified by its browser `keyCode`.
        ///
        /// Discriminants are the exact codes delivered in `KeyboardEvent.keyCode`.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
        #[repr(u16)]
        #[allow(missing_docs)]
        pub enum Key {
            $( $name = $code, )*
        }

        impl Key {
            /// Every known key, in ascending code order.
            pub const ALL: &'static [Key] = &[ $( Key::$name, )* ];

            /// Looks up a `Key` from a browser key code.
            pub fn from_code(code: u16) -> Option<Self> {
                match code {
                    $( $code => Some(Key::$name), )*
                    _ => None,
                }
            }

            /// Returns the enum variant name (e.g. `"PageDown"`).
            pub fn name(self) -> &'static str {
                match self {
                    $( Key::$name => stringify!($name), )*
                }
            }

            /// Case-insensitive lookup by enum variant name.
            pub fn from_name(s: &str) -> Option<Self> {
                $(
                    if s.eq_ignore_ascii_case(stringify!($name)) {
                        return Some(Key::$name);
                    }
                )*
                None
            }
        }
    };
}

define_keys! {
    Backspace = 8,
    Tab = 9,
    Return = 13,
    Shift = 16,
    Control = 17,
    Alt = 18,
    Pause = 19,
    CapsLock = 20,
    Escape = 27,
    Space = 32,
    PageUp = 33,
    PageDown = 34,
    End = 35,
    Home = 36,
    LeftArrow = 37,
    UpArrow = 38,
    RightArrow = 39,
    DownArrow = 40,
    Insert = 45,
    Delete = 46,
    Digit0 = 48,
    Digit1 = 49,
    Digit2 = 50,
    Digit3 = 51,
    Digit4 = 52,
    Digit5 = 53,
    Digit6 = 54,
    Digit7 = 55,
    Digit8 = 56,
    Digit9 = 57,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    Meta = 91,
    ContextMenu = 93,
    F1 = 112,
    F2 = 113,
    F3 = 114,
    F4 = 115,
    F5 = 116,
    F6 = 117,
    F7 = 118,
    F8 = 119,
    F9 = 120,
    F10 = 121,
    F11 = 122,
    F12 = 123,
    Semicolon = 186,
    Equal = 187,
    Comma = 188,
    Minus = 189,
    Period = 190,
    Slash = 191,
    Grave = 192,
    LeftBracket = 219,
    Backslash = 220,
    RightBracket = 221,
    Quote = 222,
}

impl Key {
    /// Returns the browser key code for this key.
    pub const fn code(self) -> u16 {
        self as u16
    }
}

impl TryFrom<u16> for Key {
    type Error = ();
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_code(value).ok_or(())
    }
}

impl From<Key> for u16 {
    fn from(k: Key) -> Self {
        k.code()
    }
}
