//! Pointer Module - pointer event types.
//!
//! Device-pixel pointer events consumed by the interaction state machine.
//! Coordinates outside the bounded grid square are ignored by every
//! interaction rule (the grid mapper decides), so events can be forwarded
//! unfiltered from the host.

use crate::types::PixelPoint;

/// Pointer action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
}

/// A pointer event in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Action type (down, move, up).
    pub action: PointerAction,
    /// Device pixel position.
    pub position: PixelPoint,
}

impl PointerEvent {
    /// Create a pointer event.
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self {
            action,
            position: PixelPoint::new(x, y),
        }
    }

    /// Create a pointer-down event.
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, x, y)
    }

    /// Create a pointer-move event.
    pub fn move_to(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    /// Create a pointer-up event.
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, x, y)
    }
}

// =============================================================================
// TESTS
// =============================================================================
