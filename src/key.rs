//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es under a single action and
//! carries the short help text a host can show for it. Components expose their
//! bindings through the [`KeyMap`] trait.
//!
//! ```rust
//! use quelea_remote_widgets::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let down = Binding::new(vec![KeyCode::Char('s'), KeyCode::Down]).with_help("s/↓", "down");
//!
//! let msg = KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE };
//! assert!(down.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key together with the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Required modifiers. `SHIFT` is ignored when comparing character keys.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        // Shifted characters already arrive as their uppercase code.
        let held = if matches!(msg.key, KeyCode::Char(_)) {
            msg.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            msg.modifiers
        };
        held == self.modifiers
    }
}

/// Help text shown for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"↑/w"`.
    pub key: String,
    /// What the binding does, e.g. `"up"`.
    pub desc: String,
}

/// A named set of keys that trigger the same action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help label and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Replaces the keys of this binding.
    pub fn set_keys<K: Into<KeyPress>>(&mut self, keys: Vec<K>) {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns `true` unless the binding was disabled or has no keys.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// The keys this binding reacts to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Reports whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Reports whether `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Components implement this to describe their bindings to a help view.
pub trait KeyMap {
    /// The most important bindings, shown on a single line.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
