//! Key bindings for listbox navigation.
//!
//! The defaults follow the remote-control page: `w` moves the selection up and
//! `s` moves it down. The arrow keys do the same, and `enter` activates the
//! selected row the way a double click does.
//!
//! ```rust
//! use quelea_remote_widgets::listbox::ListboxKeyMap;
//! use quelea_remote_widgets::key::KeyMap;
//!
//! let keymap = ListboxKeyMap::default();
//! assert_eq!(keymap.short_help().len(), 3);
//! ```

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings used by the listbox while it has focus.
#[derive(Debug, Clone)]
pub struct ListboxKeyMap {
    /// Move selection up one row.
    pub cursor_up: key::Binding,
    /// Move selection down one row.
    pub cursor_down: key::Binding,
    /// Activate the selected row.
    pub activate: key::Binding,
}

impl Default for ListboxKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Char('w'), KeyCode::Up])
                .with_help("↑/w", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Char('s'), KeyCode::Down])
                .with_help("↓/s", "down"),
            activate: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "open"),
        }
    }
}

impl key::KeyMap for ListboxKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.activate]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.cursor_up, &self.cursor_down], vec![&self.activate]]
    }
}
