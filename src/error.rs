//! Error types.
//!
//! The engine itself is infallible: invalid edits are absorbed as typed
//! no-ops and degenerate geometry is `None`. The only fallible surface is a
//! render adapter talking to a real device.

use thiserror::Error;

/// Failure while executing drawing primitives on a backend.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The terminal (or other writer) rejected output.
    #[error("render output failed: {0}")]
    Io(#[from] std::io::Error),
}
