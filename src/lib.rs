//! # worldline-tui
//!
//! Interactive spacetime-diagram engine for the terminal.
//!
//! Worldlines live on an integer lattice of (space, time) events. The engine
//! owns the geometry (proper time, simultaneity hyperplanes, light cones, a
//! sweeping pulse) and the editing state machine (draw, drag, resume, undo);
//! a host loop owns the terminal, the clock and the key routing.
//!
//! ## Architecture
//!
//! Rendering is purely derived. Every frame the host recomputes a primitive
//! list from the current state and replays it on an adapter:
//! ```text
//! WorldlineStore + Editor → compose_frame → [Primitive] → RenderAdapter
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, LatticePoint, PixelPoint, the palette)
//! - [`grid`] - The lattice: pixel/coordinate mapping and snapping
//! - [`path`] - One worldline: ordered events, proper time, hyperplanes
//! - [`store`] - The collection of worldlines, color cycling, undo
//! - [`state`] - Pointer/keyboard events and the interaction machine
//! - [`geometry`] - Light cones and the sweeping simultaneity pulse
//! - [`renderer`] - Frame composition and the adapter seam

pub mod error;
pub mod geometry;
pub mod grid;
pub mod path;
pub mod renderer;
pub mod state;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::RenderError;

pub use grid::{
    DEFAULT_CANVAS_SIZE, DEFAULT_CIRCLE_DIAMETER, DEFAULT_GRID_LINES, GridSpec,
};

pub use path::{AppendOutcome, Path, SweepIntersection, proper_time};

pub use store::{ResumePolicy, UndoOutcome, WorldlineStore};

pub use state::{
    Editor, EditorKey, HoverPreview, InteractionState, PointerAction, PointerEvent,
};

pub use geometry::{
    DEFAULT_SWEEP_STEP, LightCone, SimultaneityLine, SweepState, collect_intersections,
    light_cone,
};

pub use renderer::{
    CollectAdapter, Primitive, RenderAdapter, render_frame,
    frame::{OverlayFlags, compose_frame},
    terminal::TerminalAdapter,
};
