//! keycode: Browser key codes, modifiers and key combinations.
//!
//! - `Key`: Enum of the `KeyboardEvent.keyCode` values we recognise.
//! - `Modifier`: The four modifier flags carried by a keyboard event.
//! - `Combo`: One keystroke, a modifier set plus exactly one key.
//! - `combo_eq`: Order-independent comparison of an observed combo against a
//!   wanted one.
//!
//! Key codes are positional identifiers as reported by the browser; no layout
//! translation is attempted.

mod key;
pub use key::Key;

mod spec;

mod modifiers;
pub use modifiers::Modifier;

mod combo;
pub use combo::{Combo, combo_eq};
