//! Main Model struct and core functionality for the listbox.
//!
//! The model owns the row labels, the position→id and id→item mappings that
//! are rebuilt on every populate, and the explicit selection state: the
//! selected row position together with its id. The highlighted row is always
//! derived from `selected`, never the other way round.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use super::keys::ListboxKeyMap;
use super::style::ListboxStyles;
use super::types::{CountCallback, Direction, Item, ItemResolver, SelectionCallback};
use crate::error::ListboxError;

const DEFAULT_WIDTH: usize = 40;
const DEFAULT_HEIGHT: usize = 10;
const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(400);

/// A scrollable, single-selection list of labeled items.
///
/// The listbox renders one row per item, tracks at most one selected row by
/// position and id, and reports changes through callbacks:
///
/// - the **selection callback** fires after a click, after every keyboard
///   navigation attempt (including attempts stopped at the first or last row)
/// - the **count callback** fires after every [`populate`](Self::populate)
///   with the new number of rows
/// - the **double-click hook** fires on a double click or the activate key
///
/// Keyboard input is only handled while the listbox is focused (see
/// [`Component`](crate::Component)), so several lists can share a screen.
///
/// # Examples
///
/// ```
/// use quelea_remote_widgets::listbox::{Direction, ListItem, Model};
///
/// let mut list = Model::new(|selection: Option<&ListItem>| {
///     if let Some(item) = selection {
///         println!("selected {}", item.label);
///     }
/// });
///
/// list.populate(vec![
///     ListItem::new(1, "A"),
///     ListItem::new(2, "B"),
///     ListItem::new(3, "C"),
/// ]);
/// assert!(list.selection().is_none());
///
/// list.click_row(1);
/// list.navigate(Direction::Down);
/// assert_eq!(list.selection(), Some(ListItem::new(3, "C")));
/// ```
pub struct Model<I: Item> {
    pub(super) labels: Vec<String>,
    pub(super) row_ids: Vec<I::Id>,
    pub(super) by_id: HashMap<I::Id, I>,
    pub(super) selected: Option<(usize, I::Id)>,

    // Viewport
    pub(super) offset: usize,
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) origin: (u16, u16),

    pub(super) focus: bool,
    pub(super) retain_selection: bool,

    // Status bar
    pub(super) show_status_bar: bool,
    pub(super) status_item_singular: Option<String>,
    pub(super) status_item_plural: Option<String>,

    pub(super) keymap: ListboxKeyMap,
    pub(super) styles: ListboxStyles,

    // Pointer
    pub(super) last_press: Option<(usize, Instant)>,
    pub(super) double_click_interval: Duration,

    on_selection_change: SelectionCallback<I>,
    on_count_change: Option<CountCallback>,
    on_double_click: Option<SelectionCallback<I>>,
    resolver: Option<ItemResolver<I>>,
}

impl<I: Item> Model<I> {
    /// Creates an empty, unfocused listbox.
    ///
    /// `on_selection_change` receives the selected item (or `None`) every time
    /// the selection is changed by a click or by navigation.
    pub fn new<F>(on_selection_change: F) -> Self
    where
        F: FnMut(Option<&I>) + Send + 'static,
    {
        tracing::info!("listbox created");
        Self {
            labels: Vec::new(),
            row_ids: Vec::new(),
            by_id: HashMap::new(),
            selected: None,
            offset: 0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            origin: (0, 0),
            focus: false,
            retain_selection: false,
            show_status_bar: false,
            status_item_singular: None,
            status_item_plural: None,
            keymap: ListboxKeyMap::default(),
            styles: ListboxStyles::default(),
            last_press: None,
            double_click_interval: DOUBLE_CLICK_INTERVAL,
            on_selection_change: Box::new(on_selection_change),
            on_count_change: None,
            on_double_click: None,
            resolver: None,
        }
    }

    /// Sets the callback that receives the row count after every populate.
    pub fn with_count_callback<F>(mut self, f: F) -> Self
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.on_count_change = Some(Box::new(f));
        self
    }

    /// Sets a resolver for ids the listbox does not hold an item for.
    ///
    /// [`selection`](Self::selection) consults it only when the internal
    /// id→item map misses, which is the case for every row supplied through
    /// [`populate_rows`](Self::populate_rows).
    pub fn with_resolver<F>(mut self, f: F) -> Self
    where
        F: Fn(&I::Id) -> Option<I> + Send + 'static,
    {
        self.resolver = Some(Box::new(f));
        self
    }

    /// Sets the hook run on a double click or the activate key.
    pub fn with_double_click<F>(mut self, f: F) -> Self
    where
        F: FnMut(Option<&I>) + Send + 'static,
    {
        self.on_double_click = Some(Box::new(f));
        self
    }

    /// Sets the number of visible rows. At least one row is always shown.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height.max(1);
        self.clamp_offset();
        self
    }

    /// Sets the width in columns that labels are truncated to.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: ListboxKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: ListboxStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Keeps the selected id across [`populate`](Self::populate) when the new
    /// item set still contains it. Off by default: every populate starts a
    /// fresh list.
    pub fn with_retain_selection(mut self, retain: bool) -> Self {
        self.retain_selection = retain;
        self
    }

    /// Shows or hides the status bar under the rows.
    pub fn with_status_bar(mut self, show: bool) -> Self {
        self.show_status_bar = show;
        self
    }

    /// Sets the nouns the status bar uses, e.g. `("song", "songs")`.
    pub fn with_status_item_name(mut self, singular: &str, plural: &str) -> Self {
        self.status_item_singular = Some(singular.to_string());
        self.status_item_plural = Some(plural.to_string());
        self
    }

    /// Sets the time within which two presses on a row count as a double click.
    pub fn with_double_click_interval(mut self, interval: Duration) -> Self {
        self.double_click_interval = interval;
        self
    }

    /// Sets the screen position of the first row's top-left cell.
    ///
    /// Mouse events carry absolute coordinates; the origin maps them to rows.
    pub fn set_origin(&mut self, x: u16, y: u16) {
        self.origin = (x, y);
    }

    /// Sets the viewport size, keeping the selected row visible.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height.max(1);
        self.clamp_offset();
        if let Some(index) = self.selected_index() {
            self.scroll_into_view(index);
        }
    }

    /// Replaces every row with `items`, in order.
    ///
    /// Clears the previous rows, the position→id and id→item mappings and the
    /// selection, then rebuilds them from `items` and reports `items.len()` to
    /// the count callback. Duplicate ids are logged; the later item wins in the
    /// id→item map while every row is still rendered.
    pub fn populate(&mut self, items: Vec<I>) {
        tracing::debug!(count = items.len(), "populating listbox");
        let previous = self.clear_rows();

        for item in items {
            let id = item.id();
            self.labels.push(item.label());
            self.row_ids.push(id.clone());
            if self.by_id.insert(id.clone(), item).is_some() {
                tracing::warn!(id = ?id, "duplicate item id in listbox; the later item wins");
            }
        }

        self.finish_populate(previous);
    }

    /// Replaces every row with `(id, label)` pairs, without full items.
    ///
    /// The id→item map stays empty, so [`selection`](Self::selection) resolves
    /// the selected id through the resolver set with
    /// [`with_resolver`](Self::with_resolver). Otherwise this behaves like
    /// [`populate`](Self::populate).
    pub fn populate_rows(&mut self, rows: Vec<(I::Id, String)>) {
        tracing::debug!(count = rows.len(), "populating listbox rows");
        let previous = self.clear_rows();

        let mut seen = HashSet::new();
        for (id, label) in rows {
            if !seen.insert(id.clone()) {
                tracing::warn!(id = ?id, "duplicate item id in listbox");
            }
            self.labels.push(label);
            self.row_ids.push(id);
        }

        self.finish_populate(previous);
    }

    fn clear_rows(&mut self) -> Option<I::Id> {
        let previous = self.selected.take().map(|(_, id)| id);
        self.labels.clear();
        self.row_ids.clear();
        self.by_id.clear();
        self.offset = 0;
        self.last_press = None;
        previous
    }

    fn finish_populate(&mut self, previous: Option<I::Id>) {
        if self.retain_selection {
            if let Some(id) = previous {
                if let Some(index) = self.first_row_of(&id) {
                    self.selected = Some((index, id));
                    self.scroll_into_view(index);
                }
            }
        }
        self.update_count(self.labels.len());
    }

    fn first_row_of(&self, id: &I::Id) -> Option<usize> {
        self.row_ids.iter().position(|r| r == id)
    }

    /// Returns the selected item.
    ///
    /// The id→item map built by the last populate is consulted first, then the
    /// resolver if one was set. Returns `None` when nothing is selected.
    pub fn selection(&self) -> Option<I> {
        let (_, id) = self.selected.as_ref()?;
        self.by_id
            .get(id)
            .cloned()
            .or_else(|| self.resolver.as_ref().and_then(|resolve| resolve(id)))
    }

    /// Selects the first row whose id equals `item`'s id and scrolls it into
    /// view.
    ///
    /// `None` is a no-op. The selection callback is not invoked.
    ///
    /// # Errors
    ///
    /// Returns [`ListboxError::UnknownId`] when no row carries the id; the
    /// current selection is left untouched.
    pub fn set_selection(&mut self, item: Option<&I>) -> Result<(), ListboxError> {
        let Some(item) = item else {
            return Ok(());
        };
        let id = item.id();
        let Some(index) = self.first_row_of(&id) else {
            tracing::debug!(id = ?id, "selection target is not in the listbox");
            return Err(ListboxError::UnknownId {
                id: format!("{id:?}"),
            });
        };
        tracing::debug!(id = ?id, index, "set selection");
        self.selected = Some((index, id));
        self.scroll_into_view(index);
        Ok(())
    }

    /// Moves the selection one row up or down.
    ///
    /// Movement is by row position, so rows sharing an id are stepped through
    /// like any other. Without a selection this does nothing. At the first row
    /// (going up) or the last row (going down) the selection stays put. In every other case
    /// the selection callback fires afterwards, even when the selection did
    /// not move.
    pub fn navigate(&mut self, direction: Direction) {
        let Some(index) = self.selected_index() else {
            return;
        };
        let target = match direction {
            Direction::Up => index.saturating_sub(1),
            Direction::Down => (index + 1).min(self.row_ids.len().saturating_sub(1)),
        };
        if target != index {
            self.selected = Some((target, self.row_ids[target].clone()));
        }
        self.scroll_into_view(target);
        self.trigger_selection_change();
    }

    /// Selects the row at `index` as a pointer click does and fires the
    /// selection callback.
    ///
    /// Returns `false`, changing nothing, when `index` is past the last row.
    pub fn click_row(&mut self, index: usize) -> bool {
        let Some(id) = self.row_ids.get(index) else {
            return false;
        };
        self.selected = Some((index, id.clone()));
        self.scroll_into_view(index);
        self.trigger_selection_change();
        true
    }

    /// Runs the double-click hook with the current selection.
    pub fn double_click(&mut self) {
        tracing::info!("listbox double click");
        let current = self.selection();
        if let Some(hook) = self.on_double_click.as_mut() {
            hook(current.as_ref());
        }
    }

    /// Reports `count` to the count callback, if one was set.
    pub fn update_count(&mut self, count: usize) {
        if let Some(callback) = self.on_count_change.as_mut() {
            callback(count);
        }
        tracing::debug!(count, "updated listbox item count");
    }

    /// Clears the selection without firing the selection callback.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Position of the selected row, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.as_ref().map(|(index, _)| *index)
    }

    /// Id mapped to the row at `index` by the last populate.
    pub fn row_id(&self, index: usize) -> Option<&I::Id> {
        self.row_ids.get(index)
    }

    /// Row labels in display order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Index of the first visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of visible rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width labels are truncated to.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The active key bindings.
    pub fn keymap(&self) -> &ListboxKeyMap {
        &self.keymap
    }

    /// Scrolls the viewport by `rows` without touching the selection.
    pub fn scroll_by(&mut self, rows: isize) {
        self.offset = self.offset.saturating_add_signed(rows);
        self.clamp_offset();
    }

    pub(super) fn scroll_into_view(&mut self, index: usize) {
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.height {
            self.offset = index + 1 - self.height;
        }
    }

    fn clamp_offset(&mut self) {
        let max = self.labels.len().saturating_sub(self.height);
        self.offset = self.offset.min(max);
    }

    pub(super) fn trigger_selection_change(&mut self) {
        let current = self.selection();
        (self.on_selection_change)(current.as_ref());
    }
}
