//! The raw input actions a backend feeds to the game.

use crate::io::XY;

/// A key which can be pressed or released in an [`Action`].
///
/// This is deliberately the short list a terminal actually delivers for this game; anything else comes through as
/// [`Action::Unknown`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Char(char),
    F(usize),
    Enter,
    Escape,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Shift,
    Ctrl,
    Alt,
}

/// A mouse button which can be pressed or released in an [`Action`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    ScrollUp,
    ScrollDown,
}

/// One thing the player did, as reported by the [`IoSystem`][super::sys::IoSystem].
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum Action {
    /// A key was pressed. Note this theoretically handles modifiers by sending them when they're pressed, but
    /// depending on the input mechanism it may only be able to send them when a non-modifier key is pressed.
    KeyPress { key: Key },
    /// A key was let go. Same caveat about modifiers as [`Action::KeyPress`].
    KeyRelease { key: Key },
    /// A mouse button was pressed at the given cell.
    MousePress { pos: XY, button: MouseButton },
    /// A mouse button was released at the given cell.
    MouseRelease { pos: XY, button: MouseButton },
    /// The mouse has moved to a new cell, possibly while holding a button.
    MouseMove { pos: XY },
    /// The render target requested a redraw, e.g. because the terminal was resized.
    Redraw,
    /// The player asked the program to end externally, e.g. by closing the terminal.
    Closed,
    /// Some unknown input was received, with a description of what it was.
    Unknown(String),
    /// Trying to read input led to some kind of error, with a description.
    Error(String),
}

impl Action {
    /// The screen position of mouse events, or `None` for everything else.
    pub fn position(&self) -> Option<XY> {
        match self {
            Self::MouseMove { pos } => Some(*pos),
            Self::MousePress { pos, .. } => Some(*pos),
            Self::MouseRelease { pos, .. } => Some(*pos),
            _ => None,
        }
    }
}
