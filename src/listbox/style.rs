//! Styling for the listbox.
//!
//! The defaults mirror the remote page: a green highlight with white text for
//! the selected row, plain rows otherwise, and subdued text for the status bar
//! and the empty-list message. All colors adapt to light and dark terminals.
//!
//! ```rust
//! use quelea_remote_widgets::listbox::ListboxStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListboxStyles::default();
//! styles.selected_row = Style::new().bold(true).reverse(true);
//! ```

use lipgloss_extras::prelude::*;

/// Ellipsis appended to labels that do not fit the listbox width.
pub const ELLIPSIS: &str = "…";

/// Styles for every element the listbox renders.
#[derive(Debug, Clone)]
pub struct ListboxStyles {
    /// Unselected row.
    pub row: Style,
    /// The selected row.
    pub selected_row: Style,
    /// The `No items.` line of an empty list.
    pub no_items: Style,
    /// The status bar below the rows.
    pub status_bar: Style,
}

impl Default for ListboxStyles {
    fn default() -> Self {
        Self {
            row: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .padding(0, 1, 0, 1),
            selected_row: Style::new()
                .background(Color::from("#4CAF50"))
                .foreground(Color::from("#FFFFFF"))
                .padding(0, 1, 0, 1),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            status_bar: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
        }
    }
}
