//! Grid Mapper - pixel to lattice coordinate conversion
//!
//! Pure and stateless: a [`GridSpec`] is fixed at construction and every
//! conversion is a deterministic function of its three parameters. The grid
//! is a bounded square of `lines x lines` cells, inset by `padding` pixels
//! on every side.
//!
//! Screen convention: time increases upward, so pixel rows are flipped when
//! converting (`time = extent - row`). Diagram correctness depends on this.
//!
//! # API
//!
//! - `pixel_to_lattice` - bounds-checked conversion, `None` outside the grid
//! - `snap_to_lattice` - nearest lattice point (round-half-up per axis)
//! - `lattice_to_pixel` / `lattice_vec_to_pixel` - inverse mapping

use crate::types::{LatticePoint, LatticeVec, PixelPoint};

/// Default number of grid cells per axis.
pub const DEFAULT_GRID_LINES: u32 = 24;

/// Default pixel size of the square drawing surface.
pub const DEFAULT_CANVAS_SIZE: f32 = 600.0;

/// Default event circle diameter; the grid is inset by half of it.
pub const DEFAULT_CIRCLE_DIAMETER: f32 = 15.0;

/// Fixed-spacing square lattice bounded to `[0, extent]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    lines: u32,
    spacing: f32,
    padding: f32,
}

impl GridSpec {
    /// Create a grid with `lines` cells per axis, `spacing` pixels per cell
    /// and a `padding` pixel inset.
    pub fn new(lines: u32, spacing: f32, padding: f32) -> Self {
        Self {
            lines,
            spacing,
            padding,
        }
    }

    /// The standard diagram grid: 24 cells on a 600px canvas, inset by half
    /// an event circle so boundary events stay fully visible.
    pub fn standard() -> Self {
        let padding = DEFAULT_CIRCLE_DIAMETER / 2.0;
        let size = DEFAULT_CANVAS_SIZE - 2.0 * padding;
        Self::new(DEFAULT_GRID_LINES, size / DEFAULT_GRID_LINES as f32, padding)
    }

    /// Highest lattice coordinate on either axis.
    pub fn extent(&self) -> i32 {
        self.lines as i32
    }

    /// Pixels per lattice cell.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Pixel inset of the grid square.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Pixel side length of the grid square.
    pub fn size(&self) -> f32 {
        self.lines as f32 * self.spacing
    }

    /// Whether a lattice point lies on the bounded grid.
    pub fn contains(&self, point: LatticePoint) -> bool {
        point.space >= 0
            && point.space <= self.extent()
            && point.time >= 0
            && point.time <= self.extent()
    }

    /// Convert a device pixel position to its nearest lattice point, or
    /// `None` if the pixel falls outside the bounded grid square.
    pub fn pixel_to_lattice(&self, pixel: PixelPoint) -> Option<LatticePoint> {
        let x = pixel.x - self.padding;
        let y = pixel.y - self.padding;

        if x < 0.0 || x > self.size() || y < 0.0 || y > self.size() {
            return None;
        }

        Some(self.snap_to_lattice(pixel))
    }

    /// Snap a pixel position to the nearest lattice point, rounding each
    /// axis independently (half rounds up) and clamping to the grid bounds.
    pub fn snap_to_lattice(&self, pixel: PixelPoint) -> LatticePoint {
        let x = pixel.x - self.padding;
        let y = pixel.y - self.padding;

        let col = (x / self.spacing).round() as i32;
        let row = (y / self.spacing).round() as i32;

        LatticePoint::new(
            col.clamp(0, self.extent()),
            // Row 0 is the top of the grid, which is the maximum time.
            (self.extent() - row).clamp(0, self.extent()),
        )
    }

    /// Pixel position of a lattice point.
    pub fn lattice_to_pixel(&self, point: LatticePoint) -> PixelPoint {
        PixelPoint::new(
            self.padding + point.space as f32 * self.spacing,
            self.padding + (self.extent() - point.time) as f32 * self.spacing,
        )
    }

    /// Pixel position of a continuous lattice position.
    pub fn lattice_vec_to_pixel(&self, point: LatticeVec) -> PixelPoint {
        PixelPoint::new(
            self.padding + point.space as f32 * self.spacing,
            self.padding + (f64::from(self.extent()) - point.time) as f32 * self.spacing,
        )
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::standard()
    }
}

// =============================================================================
// TESTS
// =============================================================================
