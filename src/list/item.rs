//! Item shape and normalization.
//!
//! Every cell of the list holds an [`Item`]: a display value plus a mark
//! flag. Raw values coming from the host or a data provider are normalized
//! into this shape on the way in, so the rest of the widget never deals
//! with bare values.

use std::fmt::{self, Display};

/// One list entry: a value to render and a mark flag.
///
/// The value is immutable once the item is created; only the mark flag is
/// toggled afterwards, by [`Model::mark_item`] or by provider feedback.
///
/// [`Model::mark_item`]: super::Model::mark_item
///
/// # Examples
///
/// ```rust
/// use slotlist::list::Item;
///
/// let plain: Item<i32> = 42.into();
/// assert!(!plain.marked);
///
/// let marked = Item::new("done").with_marked(true);
/// assert!(marked.marked);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<V> {
    /// The cell value to render.
    pub value: V,
    /// Whether the cell renders in the marked style.
    pub marked: bool,
}

impl<V> Item<V> {
    /// Wraps a raw value into an unmarked item.
    pub fn new(value: V) -> Self {
        Self {
            value,
            marked: false,
        }
    }

    /// Sets the mark flag (builder pattern).
    pub fn with_marked(mut self, marked: bool) -> Self {
        self.marked = marked;
        self
    }
}

impl<V> From<V> for Item<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<V: Display> Display for Item<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Normalizes a sequence of raw values or pre-shaped items.
///
/// Anything convertible into an [`Item`] is accepted: bare values become
/// unmarked items, items pass through with their mark flag intact.
///
/// ```rust
/// use slotlist::list::{normalize, Item};
///
/// let items = normalize(vec![10, 20, 30]);
/// assert_eq!(items.len(), 3);
/// assert!(items.iter().all(|item| !item.marked));
/// ```
pub fn normalize<V, T: Into<Item<V>>>(raw: impl IntoIterator<Item = T>) -> Vec<Item<V>> {
    raw.into_iter().map(Into::into).collect()
}
