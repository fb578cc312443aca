//! Focus management: which slot holds input focus.
//!
//! At most one slot is focused at a time. Focus is a property of the slot,
//! not of the data behind it, so a window shift leaves the focused slot in
//! place while the item under it changes.

use super::events::Event;
use super::model::Model;
use std::fmt::Display;

impl<V: Display + Clone + Send + Sync + 'static> Model<V> {
    /// Moves input focus to the given slot.
    ///
    /// No-op returning `false` when the slot is already focused or out of
    /// range. Otherwise the previously focused slot (if any) is blurred
    /// with an [`Event::Blur`], the new slot gets the focus style bit, and
    /// [`Event::Focus`] plus [`Event::Selection`] are emitted.
    pub fn focus_slot(&mut self, slot: usize) -> bool {
        debug_assert!(slot < self.size, "slot out of range");
        if slot >= self.size || self.focused == Some(slot) {
            return false;
        }

        let prev = self.focused;
        if let Some(prev_slot) = prev {
            self.slots[prev_slot].focused = false;
            self.emit(Event::Blur { slot: prev_slot });
        }

        self.focused = Some(slot);
        self.slots[slot].focused = true;
        self.emit(Event::Focus { prev, curr: slot });
        self.emit(Event::Selection { slot });
        true
    }

    /// Removes focus from the given slot.
    ///
    /// Clears the focus reference when the slot was the focused one, and
    /// always clears the slot's focus style bit and emits [`Event::Blur`].
    /// Returns `false` only for an out-of-range slot.
    pub fn blur_slot(&mut self, slot: usize) -> bool {
        if slot >= self.size {
            return false;
        }

        if self.focused == Some(slot) {
            self.focused = None;
        }
        self.slots[slot].focused = false;
        self.emit(Event::Blur { slot });
        true
    }

    /// Focuses the item at an absolute data index, shifting the window
    /// when the target lies outside it.
    ///
    /// A target beyond the window becomes the last slot; a target before
    /// the window becomes the first slot. A target inside the window is
    /// focused in place (rendering window 0 first if nothing has been
    /// rendered yet).
    pub fn focus_index(&mut self, index: usize) {
        let view = self.view_index.unwrap_or(0);

        if index >= view + self.size {
            let target = index.min(self.data.len().saturating_sub(1));
            self.render_view((target + 1).saturating_sub(self.size));
            self.focus_slot(self.size - 1);
        } else if index < view {
            self.render_view(index);
            self.focus_slot(0);
        } else {
            if self.view_index.is_none() {
                self.render_view(0);
            }
            self.focus_slot(index - view);
        }
    }
}
