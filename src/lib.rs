#![warn(missing_docs)]

//! # quelea-remote-widgets
//!
//! Terminal UI components for the Quelea remote-control client, built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) and styled with
//! lipgloss.
//!
//! ## Overview
//!
//! Each component follows the Elm Architecture with `init()`, `update()` and
//! `view()`, so it can be embedded in any bubbletea-rs model. The main
//! component is the [`listbox`]: a scrollable, single-selection list used for
//! the schedule, song search results and Bible passages.
//!
//! ## Focus Management
//!
//! Components implement [`Component`]. Keyboard input only reaches a focused
//! component, so a screen can show several lists without them all reacting to
//! the same key press:
//!
//! ```rust
//! use quelea_remote_widgets::prelude::*;
//!
//! let mut schedule = Listbox::new(|_: Option<&ListItem>| {});
//! let mut results = Listbox::new(|_: Option<&ListItem>| {});
//!
//! schedule.focus();
//! assert!(schedule.focused());
//! assert!(!results.focused());
//!
//! schedule.blur();
//! results.focus();
//! assert!(results.focused());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use quelea_remote_widgets::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct Remote {
//!     schedule: Listbox<ListItem>,
//! }
//!
//! impl Model for Remote {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut schedule = Listbox::new(|_: Option<&ListItem>| {}).with_height(8);
//!         schedule.populate(vec![
//!             ListItem::new(1, "Amazing Grace"),
//!             ListItem::new(2, "Be Thou My Vision"),
//!         ]);
//!         let cmd = schedule.focus();
//!         (Self { schedule }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.schedule.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.schedule.view()
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! Components emit `tracing` events (list creation, populate, selection,
//! double click). The crate never installs a subscriber; the host
//! application decides where they go.

pub mod error;
pub mod key;
pub mod listbox;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component receives keyboard input; a blurred one ignores it but
/// keeps its state.
///
/// - `focus()` sets the focused state and may return a command to run
/// - `blur()` clears the focused state
/// - `focused()` reports the current state
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use error::ListboxError;
pub use key::{matches, Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use listbox::Model as Listbox;
pub use listbox::{Direction, Item, ListItem, ListboxKeyMap, ListboxStyles, MouseResult};

/// Prelude module for convenient imports.
///
/// ```rust
/// use quelea_remote_widgets::prelude::*;
///
/// let list: Listbox<ListItem<u32>> = Listbox::new(|_| {});
/// assert!(list.is_empty());
/// ```
pub mod prelude {
    pub use crate::error::ListboxError;
    pub use crate::key::{matches, Binding, Help as KeyHelp, KeyMap, KeyPress};
    pub use crate::listbox::Model as Listbox;
    pub use crate::listbox::{
        Direction, Item, ListItem, ListboxKeyMap, ListboxStyles, MouseResult,
    };
    pub use crate::Component;
}
