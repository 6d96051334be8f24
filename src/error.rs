//! Error types returned by the widgets.

use thiserror::Error;

/// Errors reported by the [`listbox`](crate::listbox) component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListboxError {
    /// `set_selection` was asked for an id that no row carries.
    #[error("no row in the listbox has id {id}")]
    UnknownId {
        /// Debug rendering of the requested id.
        id: String,
    },
}
