//! Scrollbar synchronization contract.
//!
//! The list does not render a scrollbar itself; it keeps an external one
//! informed. The host hands the widget an adapter implementing
//! [`ScrollSync`]; the list calls [`init`] whenever the total size, page
//! size or initial position changes (on every data load) and [`scroll_to`]
//! after every successful window render.
//!
//! [`init`]: ScrollSync::init
//! [`scroll_to`]: ScrollSync::scroll_to

/// Parameters for (re)initializing a scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollInit {
    /// Total number of scrollable positions (full collection size).
    pub real_size: usize,
    /// Number of positions visible at once.
    pub view_size: usize,
    /// Initial absolute position.
    pub value: usize,
}

/// External scrollbar kept in lockstep with the list's window position.
///
/// The adapter stays owned by the host; the list only issues the two
/// documented calls and reads [`real_size`] to decide whether a re-init is
/// needed when a data provider reports a new total.
///
/// [`real_size`]: ScrollSync::real_size
pub trait ScrollSync: Send + Sync {
    /// Reconfigures the scrollbar for a new collection geometry.
    fn init(&mut self, init: ScrollInit);

    /// Moves the scrollbar to the given absolute position.
    fn scroll_to(&mut self, position: usize);

    /// The total size the scrollbar was last initialized with.
    fn real_size(&self) -> usize;
}
