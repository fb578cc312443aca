//! A focusable, windowed list component.
//!
//! The list shows a fixed number of slots over an ordered collection and
//! moves a focus cursor through them. Arrow keys step the focus, shifting
//! the window when the focus would leave it; page keys jump a window at a
//! time; home/end jump to the boundaries. The collection can live entirely
//! in the list, or a [`DataProvider`] can feed it page by page, in which
//! case boundary moves turn into asynchronous fetches. An optional
//! [`ScrollSync`] adapter keeps an external scrollbar in lockstep.
//!
//! State transitions are reported as [`Event`]s the host drains with
//! [`Model::take_events`].
//!
//! # Examples
//!
//! Plain local data:
//!
//! ```rust
//! use slotlist::list::{Direction, Model};
//!
//! let mut list = Model::new(vec!["alpha", "beta", "gamma", "delta"], 2)
//!     .with_focus_index(0);
//!
//! list.navigate(Direction::Down);
//! assert_eq!(list.selected_item().map(|i| i.value), Some("beta"));
//! ```
//!
//! Inside a program, the component handles key messages itself:
//!
//! ```rust,no_run
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use slotlist::list::Model;
//!
//! struct App {
//!     list: Model<String>,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let list = Model::new(vec!["one".to_string(), "two".to_string()], 5);
//!         (App { list }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.list.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.list.view()
//!     }
//! }
//! ```
//!
//! [`DataProvider`]: crate::provider::DataProvider
//! [`ScrollSync`]: crate::scrollbar::ScrollSync

mod events;
mod focus;
mod item;
mod keys;
mod model;
mod navigate;
mod slot;
mod style;

#[cfg(test)]
mod tests;

pub use events::Event;
pub use item::{normalize, Item};
pub use keys::{Direction, NavKeyMap, Orientation};
pub use model::{Model, SetData};
pub use slot::{Slot, SlotRenderer, TextRenderer};
pub use style::ListStyles;

use crate::key::{Binding, KeyMap};
use crate::provider::{PageErrorMsg, PageMsg};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::fmt::Display;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Slot count used when the component is constructed by the runtime.
const DEFAULT_SIZE: usize = 5;

impl<V: Display + Clone + Send + Sync + 'static> Model<V> {
    /// Handles a runtime message.
    ///
    /// Provider page and error messages addressed to this instance are
    /// applied; key messages matching the keymap drive navigation and
    /// activation. Anything else is ignored.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(page_msg) = msg.downcast_ref::<PageMsg<V>>() {
            if page_msg.id == self.id {
                self.apply_page(page_msg.request, &page_msg.page);
            }
            return None;
        }
        if let Some(err_msg) = msg.downcast_ref::<PageErrorMsg>() {
            if err_msg.id == self.id {
                self.apply_page_error(&err_msg.error);
            }
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.accept.matches(key_msg) {
                if let (Some(slot), Some(index)) = (self.focused, self.focused_index()) {
                    self.emit(Event::ItemActivated { slot, index });
                }
                return None;
            }
            if let Some(direction) = self.keymap.direction_for(key_msg) {
                return self.navigate(direction);
            }
        }

        None
    }

    /// Renders the window as styled cells joined along the layout axis.
    pub fn view(&self) -> String {
        let mut cells = Vec::with_capacity(self.size);
        for slot in &self.slots {
            let style = self
                .styles
                .for_state(slot.is_bound(), slot.focused, slot.marked);
            cells.push(style.render(&self.fit_cell(&slot.content)));
        }
        match self.orientation {
            Orientation::Vertical => cells.join("\n"),
            Orientation::Horizontal => cells.join(" "),
        }
    }

    /// Pads or truncates rendered content to the configured cell width,
    /// measured in display columns with ANSI sequences ignored. A zero
    /// width yields empty cells.
    fn fit_cell(&self, content: &str) -> String {
        let Some(width) = self.cell_width else {
            return content.to_string();
        };
        if width == 0 {
            return String::new();
        }

        let plain = strip_ansi_escapes::strip_str(content);
        let current = plain.width();
        if current <= width {
            let mut out = content.to_string();
            out.push_str(&" ".repeat(width - current));
            return out;
        }

        let mut out = String::new();
        let mut used = 0;
        for ch in plain.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width + 1 > width {
                break;
            }
            used += ch_width;
            out.push(ch);
        }
        out.push('…');
        used += 1;
        out.push_str(&" ".repeat(width.saturating_sub(used)));
        out
    }
}

impl<V: Display + Clone + Send + Sync + 'static> BubbleTeaModel for Model<V> {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Vec::<Item<V>>::new(), DEFAULT_SIZE), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}

impl<V> KeyMap for Model<V> {
    fn short_help(&self) -> Vec<&Binding> {
        self.keymap.short_help()
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        self.keymap.full_help()
    }
}
