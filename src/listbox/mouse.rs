//! Pointer handling for the listbox.
//!
//! Mouse events arrive with absolute terminal coordinates. The model maps them
//! to rows using the origin set with [`Model::set_origin`] and the current
//! scroll offset. Pointer input is accepted whether or not the listbox has
//! keyboard focus.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::types::Item;
use super::Model;

const WHEEL_STEP: isize = 3;

/// What a mouse event did to the listbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseResult {
    /// A row was clicked and selected.
    Selected(usize),
    /// A row was double-clicked.
    Activated(usize),
    /// The viewport scrolled.
    Scrolled,
    /// The event did not concern the listbox.
    Ignored,
}

impl<I: Item> Model<I> {
    /// Handles a mouse event.
    ///
    /// - left press on a row selects it, like [`click_row`](Self::click_row)
    /// - a second left press on the same row within the double-click interval
    ///   also runs the double-click hook
    /// - the wheel scrolls the viewport without changing the selection
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> MouseResult {
        self.handle_mouse_at(event, Instant::now())
    }

    pub(super) fn handle_mouse_at(&mut self, event: &MouseEvent, now: Instant) -> MouseResult {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(index) = self.row_at(event.column, event.row) else {
                    return MouseResult::Ignored;
                };
                let repeated = matches!(
                    self.last_press,
                    Some((last, at)) if last == index
                        && now.saturating_duration_since(at) <= self.double_click_interval
                );
                self.click_row(index);
                if repeated {
                    self.last_press = None;
                    self.double_click();
                    MouseResult::Activated(index)
                } else {
                    self.last_press = Some((index, now));
                    MouseResult::Selected(index)
                }
            }
            MouseEventKind::ScrollUp if self.contains(event.column, event.row) => {
                self.scroll_by(-WHEEL_STEP);
                MouseResult::Scrolled
            }
            MouseEventKind::ScrollDown if self.contains(event.column, event.row) => {
                self.scroll_by(WHEEL_STEP);
                MouseResult::Scrolled
            }
            _ => MouseResult::Ignored,
        }
    }

    /// Row under the screen cell `(x, y)`, if any.
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        let index = self.offset + usize::from(y - self.origin.1);
        (index < self.len()).then_some(index)
    }

    fn contains(&self, x: u16, y: u16) -> bool {
        let (ox, oy) = (usize::from(self.origin.0), usize::from(self.origin.1));
        let (x, y) = (usize::from(x), usize::from(y));
        x >= ox && x < ox + self.width && y >= oy && y < oy + self.height
    }
}
