//! Core types and traits for the listbox.
//!
//! - [`Item`]: anything with a stable id and a display label
//! - [`ListItem`]: the ready-made `{ id, label }` item
//! - [`Direction`]: keyboard navigation direction
//! - callback aliases used by the model

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for values that can be shown as rows in a listbox.
///
/// The id identifies an item across repopulates and must be unique within one
/// item set. The label is display text only.
///
/// # Examples
///
/// ```
/// use quelea_remote_widgets::listbox::Item;
///
/// #[derive(Clone)]
/// struct Song {
///     number: u32,
///     title: String,
/// }
///
/// impl Item for Song {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.number
///     }
///
///     fn label(&self) -> String {
///         format!("{}. {}", self.number, self.title)
///     }
/// }
/// ```
pub trait Item: Clone {
    /// Identifier type of the item.
    type Id: Clone + Eq + Hash + Debug;

    /// Returns the item's identifier.
    fn id(&self) -> Self::Id;

    /// Returns the text rendered for the item's row.
    fn label(&self) -> String;
}

/// Simple item made of an id and a label.
///
/// ```
/// use quelea_remote_widgets::listbox::{Item, ListItem};
///
/// let item = ListItem::new(7, "Amazing Grace");
/// assert_eq!(item.id(), 7);
/// assert_eq!(item.label(), "Amazing Grace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListItem<Id = u64> {
    /// Unique identifier.
    pub id: Id,
    /// Display text.
    pub label: String,
}

impl<Id> ListItem<Id> {
    /// Creates a new item.
    pub fn new(id: Id, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

impl<Id> Display for ListItem<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl<Id: Clone + Eq + Hash + Debug> Item for ListItem<Id> {
    type Id = Id;

    fn id(&self) -> Id {
        self.id.clone()
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// Direction for [`Model::navigate`](super::Model::navigate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the first row.
    Up,
    /// Towards the last row.
    Down,
}

/// Called with the current selection whenever it changes.
pub type SelectionCallback<I> = Box<dyn FnMut(Option<&I>) + Send>;

/// Called with the number of rows after every populate.
pub type CountCallback = Box<dyn FnMut(usize) + Send>;

/// Looks up items the listbox does not hold itself.
pub type ItemResolver<I> = Box<dyn Fn(&<I as Item>::Id) -> Option<I> + Send>;
