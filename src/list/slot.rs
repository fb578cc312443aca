//! The slot registry and the pluggable slot renderer.
//!
//! A list renders into exactly `size` fixed slots. Slots are reused across
//! window shifts: a shift repaints them in place, it never recreates them.
//! Each slot is either bound to a data index or a stub with cleared
//! content. Focus and mark are style bits on the slot itself, so the focus
//! bookkeeping is decoupled from any particular rendering surface.

use super::Item;
use std::fmt::Display;

/// One fixed rendering target of the visible window.
#[derive(Debug, Clone, Default)]
pub struct Slot {
    /// Absolute data index this slot is bound to, `None` for a stub.
    pub index: Option<usize>,
    /// Rendered cell content, empty for a stub.
    pub content: String,
    /// Whether the bound item is marked.
    pub marked: bool,
    /// Whether this slot holds the input focus.
    pub focused: bool,
}

impl Slot {
    /// Returns whether the slot is bound to a data index.
    pub fn is_bound(&self) -> bool {
        self.index.is_some()
    }

    /// Binds the slot to a data index with freshly rendered content.
    pub(super) fn bind(&mut self, index: usize, content: String, marked: bool) {
        self.index = Some(index);
        self.content = content;
        self.marked = marked;
    }

    /// Clears the slot back to a stub. The focus bit is left alone; focus
    /// belongs to the slot, not to the data behind it.
    pub(super) fn clear(&mut self) {
        self.index = None;
        self.content.clear();
        self.marked = false;
    }
}

/// Paints one visible slot from its backing item.
///
/// The default implementation projects the item value as text. Hosts plug
/// in their own renderer for richer cells; the renderer only produces the
/// cell content, styling for focus/mark state is applied by the list view.
///
/// # Examples
///
/// ```rust
/// use slotlist::list::{Item, SlotRenderer};
///
/// struct Numbered;
///
/// impl SlotRenderer<String> for Numbered {
///     fn render(&self, slot: usize, item: &Item<String>) -> String {
///         format!("{}. {}", slot + 1, item.value)
///     }
/// }
/// ```
pub trait SlotRenderer<V>: Send + Sync {
    /// Renders the content for the slot at `slot` from `item`.
    fn render(&self, slot: usize, item: &Item<V>) -> String;
}

/// Default renderer: the item value via its `Display` impl.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl<V: Display> SlotRenderer<V> for TextRenderer {
    fn render(&self, _slot: usize, item: &Item<V>) -> String {
        item.value.to_string()
    }
}

impl<V, F> SlotRenderer<V> for F
where
    F: Fn(usize, &Item<V>) -> String + Send + Sync,
{
    fn render(&self, slot: usize, item: &Item<V>) -> String {
        self(slot, item)
    }
}
