//! Core types for worldline-tui.
//!
//! Coordinate spaces and colors that everything builds on. Two coordinate
//! spaces flow through the engine:
//!
//! - **lattice** coordinates: integer `(space, time)` pairs on the bounded
//!   grid, time increasing upward;
//! - **pixel** coordinates: device positions from the pointer surface and
//!   consumed by render adapters, y increasing downward.
//!
//! [`crate::grid::GridSpec`] owns the conversion (including the vertical
//! flip) between the two.

// =============================================================================
// COLOR
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Integer channels for exact comparison. Alpha 255 = fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Check if color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
}

// =============================================================================
// WORLDLINE PALETTE
// =============================================================================

/// Worldline colors, assigned by creation index modulo the palette length.
pub const PALETTE: [Rgba; 9] = [
    Rgba::rgb(255, 0, 0),     // red
    Rgba::rgb(0, 0, 255),     // blue
    Rgba::rgb(0, 128, 0),     // green
    Rgba::rgb(128, 0, 128),   // purple
    Rgba::rgb(255, 165, 0),   // orange
    Rgba::rgb(255, 192, 203), // pink
    Rgba::rgb(165, 42, 42),   // brown
    Rgba::rgb(255, 127, 80),  // coral
    Rgba::rgb(0, 255, 255),   // cyan
];

/// Alpha used for the translucent palette variants (light cones, markers).
pub const TRANSLUCENT_ALPHA: u8 = 64;

/// Opaque worldline color for a creation index.
pub fn palette_color(index: usize) -> Rgba {
    PALETTE[index % PALETTE.len()]
}

/// Translucent worldline color for a creation index.
pub fn palette_color_translucent(index: usize) -> Rgba {
    palette_color(index).with_alpha(TRANSLUCENT_ALPHA)
}

// =============================================================================
// LATTICE COORDINATES
// =============================================================================

/// A discrete event position on the space/time lattice.
///
/// Both axes are bounded to `[0, extent]`; time increases upward on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticePoint {
    pub space: i32,
    pub time: i32,
}

impl LatticePoint {
    /// Create a lattice point.
    pub const fn new(space: i32, time: i32) -> Self {
        Self { space, time }
    }
}

/// A continuous position in lattice units (interpolated sweep markers,
/// simultaneity-line endpoints).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatticeVec {
    pub space: f64,
    pub time: f64,
}

impl LatticeVec {
    /// Create a continuous lattice position.
    pub const fn new(space: f64, time: f64) -> Self {
        Self { space, time }
    }
}

impl From<LatticePoint> for LatticeVec {
    fn from(p: LatticePoint) -> Self {
        Self::new(f64::from(p.space), f64::from(p.time))
    }
}

// =============================================================================
// PIXEL COORDINATES
// =============================================================================

/// A device pixel position (pointer surface, render primitives).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    /// Create a pixel position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// TESTS
// =============================================================================
