//! View rendering for the listbox.
//!
//! Only the rows inside the viewport (`offset .. offset + height`) are drawn.
//! Labels wider than the listbox are cut and end with an ellipsis.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::style::ELLIPSIS;
use super::types::Item;
use super::Model;

// Left and right padding of the default row styles.
const ROW_PADDING: usize = 2;

impl<I: Item> Model<I> {
    pub(super) fn view_rows(&self) -> String {
        if self.is_empty() {
            return self.styles.no_items.render("No items.");
        }

        let selected = self.selected_index();
        let max_label = self.width.saturating_sub(ROW_PADDING);
        self.labels
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.height)
            .map(|(index, label)| {
                let label = truncate(label, max_label);
                if Some(index) == selected {
                    self.styles.selected_row.render(&label)
                } else {
                    self.styles.row.render(&label)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(super) fn view_status(&self) -> String {
        if !self.show_status_bar {
            return String::new();
        }
        let singular = self.status_item_singular.as_deref().unwrap_or("item");
        let plural = self.status_item_plural.as_deref().unwrap_or("items");
        let noun = if self.len() == 1 { singular } else { plural };
        let status = match self.selected_index() {
            Some(index) => format!("{}/{} {}", index + 1, self.len(), noun),
            None => format!("{} {}", self.len(), noun),
        };
        self.styles.status_bar.render(&status)
    }
}

fn truncate(label: &str, max: usize) -> String {
    if label.width() <= max {
        return label.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let budget = max - ELLIPSIS.width();
    let mut out = String::new();
    let mut used = 0;
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn test_truncate_keeps_short_labels() {
        assert_eq!(truncate("Amazing Grace", 20), "Amazing Grace");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("How Great Thou Art", 8), "How Gre…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_characters() {
        // Each CJK character is two columns wide.
        assert_eq!(truncate("主啊我讚美你", 5), "主啊…");
    }
}
