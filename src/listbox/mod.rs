//! Selectable listbox with keyboard and mouse navigation.
//!
//! This module exposes a generic `Model<I: Item>`: a scrollable list of
//! labeled rows with a single selection. It is the component the remote
//! control uses for the schedule, song search results and Bible passages.
//!
//! ## Behavior
//!
//! - [`Model::populate`] replaces every row and reports the new count
//! - a click selects a row; `w`/`↑` and `s`/`↓` move the selection while the
//!   listbox is focused, stopping at the first and last row
//! - the selected row is kept inside the viewport
//! - a double click (or `enter`) runs the double-click hook
//!
//! The selection is stored as an item id. Rendering derives the highlighted
//! row from it, so repopulating, scrolling and navigation all agree on what is
//! selected.
//!
//! ## Bubbletea integration
//!
//! `Model` implements `bubbletea_rs::Model`. Key messages are handled only
//! while focused; `crossterm::event::MouseEvent` values forwarded as messages
//! are handled regardless of focus.
//!
//! ```
//! use quelea_remote_widgets::listbox::{ListItem, Model};
//! use quelea_remote_widgets::Component;
//! use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut list = Model::new(|_: Option<&ListItem<u32>>| {});
//! list.populate(vec![ListItem::new(1, "Verse 1"), ListItem::new(2, "Chorus")]);
//! list.click_row(0);
//! list.focus();
//!
//! list.update(Box::new(KeyMsg { key: KeyCode::Char('s'), modifiers: KeyModifiers::NONE }));
//! assert_eq!(list.selected_index(), Some(1));
//! ```

pub mod keys;
pub mod style;

mod model;
mod mouse;
mod rendering;
mod types;


pub use keys::ListboxKeyMap;
pub use model::Model;
pub use mouse::MouseResult;
pub use style::ListboxStyles;
pub use types::{CountCallback, Direction, Item, ItemResolver, ListItem, SelectionCallback};

use crate::{key, Component};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::MouseEvent;

impl<I: Item> Component for Model<I> {
    /// Starts handling keyboard navigation.
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    /// Stops handling keyboard navigation. The selection is kept.
    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl<I: Item> key::KeyMap for Model<I> {
    fn short_help(&self) -> Vec<&key::Binding> {
        self.keymap.short_help()
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        self.keymap.full_help()
    }
}

impl<I> BubbleTeaModel for Model<I>
where
    I: Item + Send + 'static,
    I::Id: Send,
{
    /// Creates an empty listbox whose selection callback does nothing.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(|_| {}), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(mouse) = msg.downcast_ref::<MouseEvent>() {
            self.handle_mouse(mouse);
            return None;
        }
        if !self.focus {
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.cursor_up.matches(key_msg) {
                self.navigate(Direction::Up);
            } else if self.keymap.cursor_down.matches(key_msg) {
                self.navigate(Direction::Down);
            } else if self.keymap.activate.matches(key_msg) {
                self.double_click();
            }
        }
        None
    }

    /// Renders the visible rows followed by the status bar, if enabled.
    fn view(&self) -> String {
        let rows = self.view_rows();
        let status = self.view_status();
        if status.is_empty() {
            rows
        } else {
            format!("{rows}\n{status}")
        }
    }
}
