//! Type-safe key bindings for widget navigation.
//!
//! A [`Binding`] couples one or more key presses with help text and an
//! enabled/disabled flag. Widgets collect their bindings in a keymap struct
//! and implement the [`KeyMap`] trait so hosts can render contextual help.
//!
//! # Examples
//!
//! ```rust
//! use slotlist::key::{self, Binding};
//! use crossterm::event::KeyCode;
//!
//! let accept = Binding::new(vec![KeyCode::Enter]).with_help("enter", "activate item");
//! let quit = key::new_binding(vec![
//!     key::with_keys_str(&["q", "ctrl+c"]),
//!     key::with_help("q", "quit"),
//! ]);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text shown for a binding: the key label and a short description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"↑/k"`.
    pub key: String,
    /// What the key does, e.g. `"move up"`.
    pub desc: String,
}

/// A key binding: the set of key presses that trigger it, its help text,
/// and whether it is currently enabled.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from plain key codes with no modifiers.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().map(KeyPress::from).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Creates a binding from key presses that may carry modifiers.
    pub fn with_presses(keys: Vec<KeyPress>) -> Self {
        Self {
            keys,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the key presses bound to this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the given key message triggers this binding.
    ///
    /// A press recorded without modifiers matches regardless of the
    /// modifiers in the message, so `Char('G')` still matches when the
    /// terminal reports a shift modifier.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled()
            && self.keys.iter().any(|press| {
                press.code == msg.key
                    && (press.mods == KeyModifiers::NONE || press.mods == msg.modifiers)
            })
    }
}

/// An option applied by [`new_binding`] while constructing a [`Binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Creates a binding from a list of options.
///
/// ```rust
/// use slotlist::key;
///
/// let b = key::new_binding(vec![
///     key::with_keys_str(&["pgup", "b"]),
///     key::with_help("pgup/b", "previous page"),
/// ]);
/// assert!(b.enabled());
/// ```
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Binding option: set the keys from string names.
///
/// Recognized names: single characters, `up`, `down`, `left`, `right`,
/// `pgup`, `pgdown`, `home`, `end`, `enter`, `esc`, `tab`, `space`,
/// `backspace`, `delete`, and `ctrl+`/`alt+`/`shift+` combinations.
/// Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let presses: Vec<KeyPress> = keys.iter().filter_map(|name| parse_key(name)).collect();
    Box::new(move |binding: &mut Binding| binding.keys = presses)
}

/// Binding option: set the keys from explicit key presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |binding: &mut Binding| binding.keys = keys)
}

/// Binding option: set the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |binding: &mut Binding| binding.help = help)
}

/// Binding option: create the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|binding: &mut Binding| binding.disabled = true)
}

/// Reports whether the message triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|binding| binding.matches(msg))
}

fn parse_key(name: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut rest = name;

    loop {
        if let Some(stripped) = rest.strip_prefix("ctrl+") {
            mods |= KeyModifiers::CONTROL;
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("alt+") {
            mods |= KeyModifiers::ALT;
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("shift+") {
            mods |= KeyModifiers::SHIFT;
            rest = stripped;
        } else {
            break;
        }
    }

    let code = match rest {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        _ => {
            let mut chars = rest.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(KeyPress { code, mods })
}

/// Trait for keymap structs that expose their bindings for help rendering.
pub trait KeyMap {
    /// The most important bindings, shown in compact help.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns for expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn plain_binding_matches_code() {
        let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
        assert!(b.matches(&key(KeyCode::Up)));
        assert!(b.matches(&key(KeyCode::Char('k'))));
        assert!(!b.matches(&key(KeyCode::Down)));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]);
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter)));
    }

    #[test]
    fn parses_modifier_combos() {
        let b = new_binding(vec![with_keys_str(&["ctrl+c"])]);
        let msg = KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert!(b.matches(&msg));
        assert!(!b.matches(&key(KeyCode::Char('c'))));
    }

    #[test]
    fn parses_named_keys() {
        let b = new_binding(vec![with_keys_str(&["pgup", "home", "bogus-name"])]);
        assert_eq!(b.keys().len(), 2);
        assert!(b.matches(&key(KeyCode::PageUp)));
        assert!(b.matches(&key(KeyCode::Home)));
    }

    #[test]
    fn modifierless_press_matches_any_modifiers() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        let shifted = KeyMsg {
            key: KeyCode::Char('G'),
            modifiers: KeyModifiers::SHIFT,
        };
        assert!(b.matches(&shifted));
    }
}
