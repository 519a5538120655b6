//! Keyboard Module - the three-command editing surface.
//!
//! Exactly three commands are recognized: escape (exit drawing), undo
//! (remove the newest event of the newest path, "z") and clear (reset the
//! store, "x"). Every other key maps to `None` and is ignored.

use crossterm::event::KeyCode;

/// An editing command from the keyboard surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    /// Exit the Drawing state without deleting anything.
    Escape,
    /// Remove the newest event of the newest path.
    Undo,
    /// Empty the store.
    Clear,
}

impl EditorKey {
    /// Map a plain character to a command (`z` = undo, `x` = clear).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'z' => Some(Self::Undo),
            'x' => Some(Self::Clear),
            _ => None,
        }
    }

    /// Map a crossterm key code to a command; everything unrecognized is
    /// `None`.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Esc => Some(Self::Escape),
            KeyCode::Char(c) => Self::from_char(c),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
