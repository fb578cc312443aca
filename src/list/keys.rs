//! Key bindings and the directional input alphabet.
//!
//! Arrow keys are axis-gated: a vertical list ignores left/right, a
//! horizontal one ignores up/down. Instead of encoding that in dispatch
//! control flow, every direction declares which axis it requires via
//! [`Direction::required_axis`] and the navigation code consults that
//! table before acting.

use crate::key::{self, Binding, KeyMap};
use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// The axis a list is laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Slots stack top to bottom; up/down are the primary keys.
    #[default]
    Vertical,
    /// Slots run left to right; left/right are the primary keys.
    Horizontal,
}

/// A directional navigation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Primary backward on the vertical axis.
    Up,
    /// Primary forward on the vertical axis.
    Down,
    /// Primary backward on the horizontal axis.
    Left,
    /// Primary forward on the horizontal axis.
    Right,
    /// One page backward, axis-independent.
    PageUp,
    /// One page forward, axis-independent.
    PageDown,
    /// Jump to the start, axis-independent.
    Home,
    /// Jump to the end, axis-independent.
    End,
}

impl Direction {
    /// The orientation a list must have for this direction to apply, or
    /// `None` when the direction is axis-independent.
    pub fn required_axis(self) -> Option<Orientation> {
        match self {
            Direction::Up | Direction::Down => Some(Orientation::Vertical),
            Direction::Left | Direction::Right => Some(Orientation::Horizontal),
            Direction::PageUp | Direction::PageDown | Direction::Home | Direction::End => None,
        }
    }
}

/// Key bindings for list navigation and activation.
#[derive(Debug, Clone)]
pub struct NavKeyMap {
    /// Primary backward on the vertical axis.
    pub up: Binding,
    /// Primary forward on the vertical axis.
    pub down: Binding,
    /// Primary backward on the horizontal axis.
    pub left: Binding,
    /// Primary forward on the horizontal axis.
    pub right: Binding,
    /// One page backward.
    pub page_up: Binding,
    /// One page forward.
    pub page_down: Binding,
    /// Jump to the first item.
    pub home: Binding,
    /// Jump to the last item.
    pub end: Binding,
    /// Activate the focused item.
    pub accept: Binding,
}

impl Default for NavKeyMap {
    fn default() -> Self {
        Self {
            up: Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            down: Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
            left: Binding::new(vec![KeyCode::Left]).with_help("←", "left"),
            right: Binding::new(vec![KeyCode::Right]).with_help("→", "right"),
            page_up: key::new_binding(vec![
                key::with_keys_str(&["pgup"]),
                key::with_help("pgup", "page back"),
            ]),
            page_down: key::new_binding(vec![
                key::with_keys_str(&["pgdown"]),
                key::with_help("pgdn", "page forward"),
            ]),
            home: Binding::new(vec![KeyCode::Home]).with_help("home", "go to start"),
            end: Binding::new(vec![KeyCode::End]).with_help("end", "go to end"),
            accept: Binding::new(vec![KeyCode::Enter]).with_help("enter", "activate"),
        }
    }
}

impl NavKeyMap {
    /// Maps a key message to its direction, if any direction is bound to
    /// it. Axis gating happens later, in navigation dispatch.
    pub fn direction_for(&self, msg: &KeyMsg) -> Option<Direction> {
        if self.up.matches(msg) {
            Some(Direction::Up)
        } else if self.down.matches(msg) {
            Some(Direction::Down)
        } else if self.left.matches(msg) {
            Some(Direction::Left)
        } else if self.right.matches(msg) {
            Some(Direction::Right)
        } else if self.page_up.matches(msg) {
            Some(Direction::PageUp)
        } else if self.page_down.matches(msg) {
            Some(Direction::PageDown)
        } else if self.home.matches(msg) {
            Some(Direction::Home)
        } else if self.end.matches(msg) {
            Some(Direction::End)
        } else {
            None
        }
    }
}

impl KeyMap for NavKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.up, &self.down, &self.accept]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.up, &self.down, &self.left, &self.right],
            vec![&self.page_up, &self.page_down, &self.home, &self.end],
            vec![&self.accept],
        ]
    }
}
