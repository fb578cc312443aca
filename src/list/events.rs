//! Notifications emitted by the list.
//!
//! The widget records every externally visible transition as an [`Event`]
//! in an internal queue; the host drains the queue with
//! [`Model::take_events`] after feeding input. This replaces an inherited
//! event-emitter base class with plain data the host can match on.
//!
//! [`Model::take_events`]: super::Model::take_events

use super::keys::Direction;

/// A notification produced by a list operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The visible window shifted. `prev` is `None` on the first render.
    WindowMoved {
        /// Window position before the shift.
        prev: Option<usize>,
        /// Window position after the shift.
        curr: usize,
    },
    /// A slot became the current selection reference.
    ///
    /// Emitted on focus changes and after every window rebuild. After a
    /// rebuild this names the last slot the rebuild loop touched, not
    /// necessarily the focused one.
    Selection {
        /// The referenced slot.
        slot: usize,
    },
    /// Input focus moved to a slot.
    Focus {
        /// Previously focused slot, if any.
        prev: Option<usize>,
        /// Newly focused slot.
        curr: usize,
    },
    /// A slot lost focus or had its focus style cleared.
    Blur {
        /// The affected slot.
        slot: usize,
    },
    /// The accept key was pressed while a bound slot was focused.
    ItemActivated {
        /// The focused slot.
        slot: usize,
        /// Absolute data index of the activated item.
        index: usize,
    },
    /// Navigation hit a boundary with no cycling and no provider page to
    /// fetch. A normal terminal state, not an error.
    Overflow {
        /// The direction that could not be followed.
        direction: Direction,
        /// The list's cycle setting at the time.
        cycle: bool,
    },
    /// A provider page was received and applied.
    DataReceived,
    /// A provider request failed; no state was changed.
    DataError {
        /// The provider's failure description.
        message: String,
    },
}
