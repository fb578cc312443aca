//! A focusable, windowed list widget for terminal applications built on
//! [`bubbletea_rs`].
//!
//! The crate centers on [`list::Model`], a component that renders a fixed
//! window of slots over an ordered collection and moves a focus cursor
//! through it under keyboard control. Around it sit:
//!
//! - [`key`]: key bindings with help metadata, shared by every keymap.
//! - [`provider`]: the paged data source trait and the async fetch
//!   plumbing that turns boundary moves into runtime commands.
//! - [`scrollbar`]: a small adapter trait for keeping an external
//!   scrollbar in sync with the window position.
//!
//! # Quick start
//!
//! ```rust
//! use slotlist::list::{Direction, Event, Model};
//!
//! let mut list = Model::new(vec![10, 20, 30, 40, 50, 60, 70], 3)
//!     .with_focus_index(0);
//! list.take_events();
//!
//! list.navigate(Direction::End);
//! assert_eq!(list.selected_item().map(|i| i.value), Some(70));
//! assert_eq!(list.view_index(), Some(4));
//! ```
//!
//! Within a program the component is driven by messages: feed it
//! [`bubbletea_rs::KeyMsg`] values via `update`, return the command from
//! [`list::Model::init_cmd`] out of your `init` when a provider is
//! attached, and render with `view`. State transitions are reported as
//! [`list::Event`] values drained with [`list::Model::take_events`].

pub mod key;
pub mod list;
pub mod provider;
pub mod scrollbar;

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::list::{
        Direction, Event, Item, ListStyles, Model, NavKeyMap, Orientation, SetData, Slot,
        SlotRenderer, TextRenderer,
    };
    pub use crate::provider::{DataProvider, Page, PageRequest, ProviderError};
    pub use crate::scrollbar::{ScrollInit, ScrollSync};
}
