//! Keyboard events as delivered by the host page.

use keycode::{Combo, Modifier};

/// One node on an event's propagation path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// DOM `nodeName`, e.g. `"INPUT"` or `"DIV"`.
    pub node_name: String,
    /// DOM `contentEditable` attribute value, when known.
    pub content_editable: Option<String>,
}

impl Element {
    /// An element with the given node name and no contentEditable attribute.
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
            content_editable: None,
        }
    }

    /// Set the contentEditable attribute.
    pub fn content_editable(mut self, value: impl Into<String>) -> Self {
        self.content_editable = Some(value.into());
        self
    }
}

/// Node names that accept text input.
const EDITABLE_NODES: [&str; 3] = ["INPUT", "TEXTAREA", "SELECT"];

/// Returns true when `el` accepts typed text, so keystrokes aimed at it must
/// be left alone.
pub fn is_editable(el: &Element) -> bool {
    el.content_editable.as_deref() == Some("true")
        || EDITABLE_NODES
            .iter()
            .any(|n| el.node_name.eq_ignore_ascii_case(n))
}

/// A key-down event.
///
/// `path` runs from the target element outwards through its ancestors. The
/// suppression flags are set by the dispatcher when a chord fires; the host
/// forwards them to `preventDefault` / `stopPropagation`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// `altKey`
    pub alt: bool,
    /// `ctrlKey`
    pub ctrl: bool,
    /// `metaKey`
    pub meta: bool,
    /// `shiftKey`
    pub shift: bool,
    /// `keyCode`
    pub key_code: u16,
    /// Target element followed by its ancestors.
    pub path: Vec<Element>,
    /// Set when the browser's default handling must be suppressed.
    default_prevented: bool,
    /// Set when the event must not propagate further.
    propagation_stopped: bool,
}

impl KeyEvent {
    /// A bare event for `key_code` with no modifiers and an empty path.
    pub fn new(key_code: u16) -> Self {
        Self {
            key_code,
            ..Self::default()
        }
    }

    /// An event carrying exactly the modifiers and key of `combo`.
    pub fn from_combo(combo: &Combo) -> Self {
        let has = |m: Modifier| combo.modifiers.contains(&m);
        Self {
            alt: has(Modifier::Alt),
            ctrl: has(Modifier::Ctrl),
            meta: has(Modifier::Meta),
            shift: has(Modifier::Shift),
            key_code: combo.key.code(),
            ..Self::default()
        }
    }

    /// Replace the propagation path.
    pub fn with_path(mut self, path: Vec<Element>) -> Self {
        self.path = path;
        self
    }

    /// The observed combination, or `None` for an unrecognised key code.
    pub fn combo(&self) -> Option<Combo> {
        Combo::from_flags(self.alt, self.ctrl, self.meta, self.shift, self.key_code)
    }

    /// True when the target or any ancestor is editable.
    pub fn targets_editable(&self) -> bool {
        self.path.iter().any(is_editable)
    }

    /// Suppress the browser's default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop further propagation of this event.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether `prevent_default` was called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether `stop_propagation` was called.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
