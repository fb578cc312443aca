//! Directional navigation and provider page handling.
//!
//! A single-step move walks the focused slot through the window and only
//! shifts the window when the focus would leave it. At a data boundary the
//! move escalates: ask the provider for the adjacent page, or wrap when
//! cycling is on, or record an overflow and stay put.

use super::events::Event;
use super::keys::{Direction, Orientation};
use super::model::{Model, SetData};
use crate::provider::{fetch_cmd, Page, PageRequest, ProviderError};
use bubbletea_rs::Cmd;
use std::fmt::Display;

impl<V: Display + Clone + Send + Sync + 'static> Model<V> {
    /// Applies one directional input.
    ///
    /// Directions on the wrong axis and moves on an empty list are
    /// ignored. Returns a command when the move needs a provider fetch;
    /// every local move completes synchronously and returns `None`.
    pub fn navigate(&mut self, direction: Direction) -> Option<Cmd> {
        if self.data.is_empty() {
            return None;
        }
        if let Some(axis) = direction.required_axis() {
            if axis != self.orientation {
                return None;
            }
        }

        match direction {
            Direction::Up | Direction::Left => self.step_backward(direction),
            Direction::Down | Direction::Right => self.step_forward(direction),
            Direction::PageUp => self.page_backward(),
            Direction::PageDown => self.page_forward(),
            Direction::Home => self.go_home(),
            Direction::End => self.go_end(),
        }
    }

    /// Translates a wheel tick into a single-step move on the current
    /// axis. Positive deltas scroll backward, matching wheel-up.
    pub fn handle_wheel(&mut self, delta: i32) -> Option<Cmd> {
        if delta == 0 {
            return None;
        }
        let direction = match (self.orientation, delta > 0) {
            (Orientation::Vertical, true) => Direction::Up,
            (Orientation::Vertical, false) => Direction::Down,
            (Orientation::Horizontal, true) => Direction::Left,
            (Orientation::Horizontal, false) => Direction::Right,
        };
        self.navigate(direction)
    }

    fn step_backward(&mut self, direction: Direction) -> Option<Cmd> {
        if let (Some(slot), Some(abs)) = (self.focused, self.focused_index()) {
            if abs > 0 {
                if slot == 0 {
                    // Focus stays on the first slot; the window slides
                    // under it.
                    let view = self.view_index.unwrap_or(0);
                    self.render_view(view.saturating_sub(1));
                } else {
                    self.focus_slot(slot - 1);
                }
                return None;
            }
        }

        if self.provider.is_some() {
            return self.request_page(PageRequest::Backward);
        }
        if self.cycle {
            return self.navigate(Direction::End);
        }
        self.emit(Event::Overflow {
            direction,
            cycle: self.cycle,
        });
        None
    }

    fn step_forward(&mut self, direction: Direction) -> Option<Cmd> {
        if let (Some(slot), Some(abs)) = (self.focused, self.focused_index()) {
            if abs + 1 < self.data.len() {
                if slot + 1 == self.size {
                    let view = self.view_index.unwrap_or(0);
                    self.render_view(view + 1);
                } else {
                    self.focus_slot(slot + 1);
                }
                return None;
            }
        }

        if self.provider.is_some() {
            return self.request_page(PageRequest::Forward);
        }
        if self.cycle {
            return self.navigate(Direction::Home);
        }
        self.emit(Event::Overflow {
            direction,
            cycle: self.cycle,
        });
        None
    }

    fn page_backward(&mut self) -> Option<Cmd> {
        if self.provider.is_some() {
            return self.request_page(PageRequest::PageBackward);
        }

        let view = self.view_index.unwrap_or(0);
        if view < self.size {
            self.render_view(0);
        } else {
            self.render_view(view - self.size + 1);
        }
        self.focus_slot(0);
        None
    }

    fn page_forward(&mut self) -> Option<Cmd> {
        if self.provider.is_some() {
            return self.request_page(PageRequest::PageForward);
        }

        if self.data.len() > self.size {
            let view = self.view_index.unwrap_or(0);
            if view + self.size * 2 > self.data.len() {
                self.render_view(self.data.len() - self.size);
            } else {
                self.render_view(view + self.size - 1);
            }
            self.focus_slot(self.size - 1);
        } else {
            self.focus_slot(self.data.len() - 1);
        }
        None
    }

    fn go_home(&mut self) -> Option<Cmd> {
        if self.provider.is_some() {
            return self.request_page(PageRequest::Home);
        }

        self.render_view(0);
        self.focus_slot(0);
        None
    }

    fn go_end(&mut self) -> Option<Cmd> {
        if self.provider.is_some() {
            return self.request_page(PageRequest::End);
        }

        if self.data.len() > self.size {
            self.render_view(self.data.len() - self.size);
            self.focus_slot(self.size - 1);
        } else {
            self.focus_slot(self.data.len() - 1);
        }
        None
    }

    /// Issues a provider fetch unless the provider reports itself busy.
    /// A blocked provider silently swallows the move.
    fn request_page(&mut self, request: PageRequest) -> Option<Cmd> {
        let provider = self.provider.as_ref()?;
        if provider.blocked() {
            return None;
        }
        Some(fetch_cmd(provider.clone(), request, self.id))
    }

    /// Installs a fetched page and positions focus.
    ///
    /// The provider may pin the focus via [`Page::pos`]; otherwise the
    /// request kind decides: single-step moves keep the previous absolute
    /// focus, backward jumps land on the first slot, forward jumps on the
    /// last bound one, and the initial load renders without focus.
    pub(super) fn apply_page(&mut self, request: PageRequest, page: &Page<V>) {
        let focus_index = match page.pos {
            Some(pos) => Some(pos),
            None => match request {
                PageRequest::Init => None,
                PageRequest::Backward | PageRequest::Forward => self.focused_index(),
                PageRequest::PageBackward | PageRequest::Home => Some(0),
                PageRequest::PageForward | PageRequest::End => {
                    Some(page.items.len().min(self.size).saturating_sub(1))
                }
            },
        };

        self.set_data(
            page.items.clone(),
            SetData {
                view_index: None,
                focus_index,
            },
        );
        self.emit(Event::DataReceived);
    }

    /// Records a failed provider request. Window, focus and data are left
    /// untouched.
    pub(super) fn apply_page_error(&mut self, error: &ProviderError) {
        self.emit(Event::DataError {
            message: error.message.clone(),
        });
    }
}
