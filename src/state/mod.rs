//! Interaction state: pointer/keyboard events and the editing state machine.

pub mod interaction;
pub mod keyboard;
pub mod pointer;

pub use interaction::{Editor, HoverPreview, InteractionState};
pub use keyboard::EditorKey;
pub use pointer::{PointerAction, PointerEvent};
