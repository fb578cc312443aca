//! The list model: state aggregate, construction, and window rendering.

use super::events::Event;
use super::item::{normalize, Item};
use super::keys::{NavKeyMap, Orientation};
use super::slot::{Slot, SlotRenderer, TextRenderer};
use super::style::ListStyles;
use crate::provider::{fetch_cmd, DataProvider, PageRequest};
use crate::scrollbar::{ScrollInit, ScrollSync};
use bubbletea_rs::Cmd;
use std::fmt::Display;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

// Instance ids route provider messages back to the list that issued them.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Positioning options for [`Model::set_data`].
///
/// Mirrors the optional `view_index`/`focus_index` pair of construction:
/// when a focus index is given it wins and the window is shifted to show
/// it; otherwise the window is rendered at `view_index` (default 0) with
/// no focus.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetData {
    /// Window position to render when no focus index is given.
    pub view_index: Option<usize>,
    /// Absolute index to focus after the data swap.
    pub focus_index: Option<usize>,
}

/// A focusable, windowed list.
///
/// The model owns an ordered collection of [`Item`]s and renders a fixed
/// window of `size` slots into it. Directional input moves the focused
/// slot, shifts the window, wraps around (`cycle`) or asks an attached
/// [`DataProvider`] for the adjacent page. An attached [`ScrollSync`] is
/// kept in lockstep with the window position.
///
/// # Examples
///
/// ```rust
/// use slotlist::list::{Direction, Event, Model};
///
/// let mut list = Model::new(vec![10, 20, 30, 40, 50], 3);
/// list.focus_index(0);
/// list.take_events();
///
/// list.navigate(Direction::Down);
/// assert_eq!(list.focused_index(), Some(1));
/// ```
pub struct Model<V> {
    pub(super) data: Vec<Item<V>>,
    pub(super) size: usize,
    pub(super) view_index: Option<usize>,
    pub(super) orientation: Orientation,
    pub(super) cycle: bool,
    pub(super) slots: Vec<Slot>,
    pub(super) focused: Option<usize>,
    pub(super) renderer: Box<dyn SlotRenderer<V>>,
    pub(super) provider: Option<Arc<dyn DataProvider<V>>>,
    pub(super) scroll: Option<Box<dyn ScrollSync>>,
    pub(super) keymap: NavKeyMap,
    pub(super) styles: ListStyles,
    pub(super) cell_width: Option<usize>,
    pub(super) events: Vec<Event>,
    pub(super) id: i64,
}

impl<V: Display + Clone + Send + Sync + 'static> Model<V> {
    /// Creates a list showing `size` slots over the given items.
    ///
    /// Raw values and pre-shaped items are both accepted. With non-empty
    /// items the first window is rendered immediately; positioning can be
    /// adjusted with [`with_view_index`](Self::with_view_index) and
    /// [`with_focus_index`](Self::with_focus_index).
    pub fn new<T: Into<Item<V>>>(items: impl IntoIterator<Item = T>, size: usize) -> Self {
        debug_assert!(size > 0, "slot count must be positive");
        let size = size.max(1);

        let mut model = Self {
            data: Vec::new(),
            size,
            view_index: None,
            orientation: Orientation::default(),
            cycle: false,
            slots: vec![Slot::default(); size],
            focused: None,
            renderer: Box::new(TextRenderer),
            provider: None,
            scroll: None,
            keymap: NavKeyMap::default(),
            styles: ListStyles::default(),
            cell_width: None,
            events: Vec::new(),
            id: next_id(),
        };

        let items = normalize(items);
        if !items.is_empty() {
            model.set_data(items, SetData::default());
        }
        model
    }

    /// Sets a custom slot renderer (builder pattern). Repaints the current
    /// window so already-bound slots pick up the new projection.
    pub fn with_renderer(mut self, renderer: impl SlotRenderer<V> + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self.repaint();
        self
    }

    /// Sets the layout axis (builder pattern).
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enables or disables wrap-around navigation (builder pattern).
    pub fn with_cycle(mut self, cycle: bool) -> Self {
        self.cycle = cycle;
        self
    }

    /// Sets the slot styles (builder pattern).
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: NavKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Pads or truncates every rendered cell to this display width
    /// (builder pattern).
    pub fn with_cell_width(mut self, width: usize) -> Self {
        self.cell_width = Some(width);
        self
    }

    /// Attaches a scrollbar adapter (builder pattern). With data already
    /// present the scrollbar is initialized right away.
    pub fn with_scroll(mut self, scroll: Box<dyn ScrollSync>) -> Self {
        self.scroll = Some(scroll);
        if !self.data.is_empty() {
            self.sync_scroll_geometry(self.view_index.unwrap_or(0));
        }
        self
    }

    /// Attaches a paged data provider (builder pattern). The initial page
    /// load is issued separately via [`init_cmd`](Self::init_cmd).
    pub fn with_provider(mut self, provider: Arc<dyn DataProvider<V>>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Renders the window at the given position (builder pattern).
    /// Only meaningful once data is present.
    pub fn with_view_index(mut self, index: usize) -> Self {
        if !self.data.is_empty() {
            self.render_view(index);
        }
        self
    }

    /// Focuses the item at the given absolute index (builder pattern),
    /// shifting the window as needed. Only meaningful once data is
    /// present.
    pub fn with_focus_index(mut self, index: usize) -> Self {
        if !self.data.is_empty() {
            self.focus_index(index);
        }
        self
    }

    /// The command that performs the initial provider load, if a provider
    /// is attached and idle. Return it from the host's `init`.
    pub fn init_cmd(&self) -> Option<Cmd> {
        let provider = self.provider.as_ref()?;
        if provider.blocked() {
            return None;
        }
        Some(fetch_cmd(provider.clone(), PageRequest::Init, self.id))
    }

    /// Replaces the data wholesale and re-renders.
    ///
    /// The current focus is blurred, the window position is reset, the
    /// scrollbar is re-initialized, and the window is rebuilt: at the
    /// requested focus position when `opts.focus_index` is given (and data
    /// is non-empty), otherwise at `opts.view_index` (default 0).
    pub fn set_data<T: Into<Item<V>>>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        opts: SetData,
    ) {
        self.data = normalize(items);
        self.view_index = None;

        if let Some(slot) = self.focused {
            self.blur_slot(slot);
        }

        self.sync_scroll_geometry(opts.view_index.unwrap_or(0));

        match opts.focus_index {
            Some(focus) if !self.data.is_empty() => self.focus_index(focus),
            _ => {
                self.render_view(opts.view_index.unwrap_or(0));
            }
        }
    }

    /// Draws the visible window starting at the given absolute index.
    ///
    /// No-op returning `false` when the window already sits at `index`.
    /// Otherwise every slot is repainted in place: bound to its data index
    /// when an item exists there, cleared to a stub when the window runs
    /// past the end of data. The upper bound is deliberately not clamped;
    /// a window fully past the end renders all stubs.
    ///
    /// Emits [`Event::WindowMoved`] and [`Event::Selection`] (referencing
    /// the last slot the rebuild loop touched) and forwards the new
    /// absolute position to an attached scrollbar.
    pub fn render_view(&mut self, index: usize) -> bool {
        if self.view_index == Some(index) {
            return false;
        }

        let prev = self.view_index;
        self.view_index = Some(index);

        let mut abs = index;
        let mut last_slot = 0;
        for slot_idx in 0..self.size {
            match self.data.get(abs) {
                Some(item) => {
                    let marked = item.marked;
                    let content = self.renderer.render(slot_idx, item);
                    self.slots[slot_idx].bind(abs, content, marked);
                }
                None => self.slots[slot_idx].clear(),
            }
            last_slot = slot_idx;
            abs += 1;
        }

        self.emit(Event::WindowMoved { prev, curr: index });
        self.emit(Event::Selection { slot: last_slot });

        let position = match &self.provider {
            Some(provider) => provider.head() + provider.pos(),
            None => index,
        };
        if let Some(scroll) = self.scroll.as_mut() {
            scroll.scroll_to(position);
        }

        true
    }

    /// Sets the mark flag of the item bound to the given slot and updates
    /// the slot's style bit. Returns `false` for a stub or out-of-range
    /// slot.
    pub fn mark_item(&mut self, slot: usize, state: bool) -> bool {
        debug_assert!(slot < self.size, "slot out of range");
        let Some(index) = self.slots.get(slot).and_then(|s| s.index) else {
            return false;
        };

        self.data[index].marked = state;
        self.slots[slot].marked = state;
        true
    }

    /// Changes the number of visible slots, rebuilding the slot registry
    /// and repainting the window. Focus does not survive the rebuild.
    pub fn set_size(&mut self, size: usize) {
        debug_assert!(size > 0, "slot count must be positive");
        let size = size.max(1);
        if size == self.size {
            return;
        }

        if let Some(slot) = self.focused {
            self.blur_slot(slot);
        }
        self.size = size;
        self.slots = vec![Slot::default(); size];
        self.repaint();
    }

    /// Changes the layout axis.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Enables or disables wrap-around navigation.
    pub fn set_cycle(&mut self, cycle: bool) {
        self.cycle = cycle;
    }

    /// Forces a rebuild of the current window.
    fn repaint(&mut self) {
        if let Some(index) = self.view_index.take() {
            self.render_view(index);
        }
    }

    /// (Re)initializes an attached scrollbar for the current geometry.
    ///
    /// With a provider the geometry comes from the provider, and the
    /// scrollbar is only re-initialized when the reported total changed.
    pub(super) fn sync_scroll_geometry(&mut self, value: usize) {
        let Some(scroll) = self.scroll.as_mut() else {
            return;
        };
        match &self.provider {
            Some(provider) => {
                if scroll.real_size() != provider.max_count() {
                    scroll.init(ScrollInit {
                        real_size: provider.max_count(),
                        view_size: provider.view_size(),
                        value: provider.head() + provider.pos(),
                    });
                }
            }
            None => scroll.init(ScrollInit {
                real_size: self.data.len(),
                view_size: self.size,
                value,
            }),
        }
    }

    pub(super) fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Drains and returns the queued notifications.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Number of locally held items.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of visible slots.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current window position, `None` before the first render.
    pub fn view_index(&self) -> Option<usize> {
        self.view_index
    }

    /// The layout axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether wrap-around navigation is enabled.
    pub fn cycle(&self) -> bool {
        self.cycle
    }

    /// The focused slot, if any.
    pub fn focused_slot(&self) -> Option<usize> {
        self.focused
    }

    /// Absolute data index of the focused slot, if a bound slot is
    /// focused.
    pub fn focused_index(&self) -> Option<usize> {
        self.focused.and_then(|slot| self.slots[slot].index)
    }

    /// The item behind the focused slot, if any.
    pub fn selected_item(&self) -> Option<&Item<V>> {
        self.focused_index().and_then(|index| self.data.get(index))
    }

    /// The slot at the given position.
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// All locally held items.
    pub fn items(&self) -> &[Item<V>] {
        &self.data
    }

    /// Instance id used to route provider messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The key bindings in use.
    pub fn keymap(&self) -> &NavKeyMap {
        &self.keymap
    }
}
