//! Visual styles for list slots.
//!
//! Styling covers the four visual states of a slot: normal, focused,
//! marked, and stub. Defaults use adaptive colors so they read well on
//! both light and dark terminals. The content itself comes from the slot
//! renderer; these styles wrap it.
//!
//! # Examples
//!
//! ```rust
//! use slotlist::list::ListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.focused = Style::new().reverse(true).bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Styles applied to a slot depending on its state.
///
/// Focus takes precedence over mark when both bits are set.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// A bound slot with neither focus nor mark.
    pub item: Style,
    /// The slot holding input focus.
    pub focused: Style,
    /// A bound slot whose item carries the mark flag.
    pub marked: Style,
    /// A slot with no backing data.
    pub stub: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        Self {
            item: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            focused: Style::new()
                .bold(true)
                .foreground(AdaptiveColor {
                    Light: "#ee6ff8",
                    Dark: "#ee6ff8",
                })
                .reverse(true),
            marked: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#3c763d",
                Dark: "#04b575",
            }),
            stub: Style::new().foreground(AdaptiveColor {
                Light: "#a49fa5",
                Dark: "#777777",
            }),
        }
    }
}

impl ListStyles {
    /// Picks the style for a slot from its state bits.
    pub fn for_state(&self, bound: bool, focused: bool, marked: bool) -> &Style {
        if !bound {
            &self.stub
        } else if focused {
            &self.focused
        } else if marked {
            &self.marked
        } else {
            &self.item
        }
    }
}
