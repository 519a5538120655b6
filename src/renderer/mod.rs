//! Renderer - drawing primitives and the adapter seam.
//!
//! The engine never touches pixels. Each frame it composes a list of
//! [`Primitive`] values ([`frame::compose_frame`]) and hands it to a
//! [`RenderAdapter`], which executes them on whatever surface it owns. A
//! [`CollectAdapter`] records primitives for tests; [`terminal`] executes
//! them in a crossterm terminal.

pub mod frame;
pub mod terminal;

use crate::error::RenderError;
use crate::types::{PixelPoint, Rgba};

// =============================================================================
// PRIMITIVES
// =============================================================================

/// One drawing operation, in device pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Filled circle.
    Circle {
        center: PixelPoint,
        diameter: f32,
        color: Rgba,
    },
    /// Stroked line segment with an optional `[dash, gap]` pattern.
    Line {
        from: PixelPoint,
        to: PixelPoint,
        color: Rgba,
        width: f32,
        dash: Option<[f32; 2]>,
    },
    /// Filled polygon from a vertex list.
    Polygon {
        vertices: Vec<PixelPoint>,
        color: Rgba,
    },
    /// Text at a position.
    Text {
        position: PixelPoint,
        content: String,
        color: Rgba,
    },
}

// =============================================================================
// ADAPTER SEAM
// =============================================================================

/// Executes drawing primitives. Implemented by render backends; consumed,
/// never called into, by the geometry engine.
pub trait RenderAdapter {
    /// Filled circle at a point.
    fn circle(&mut self, center: PixelPoint, diameter: f32, color: Rgba)
    -> Result<(), RenderError>;

    /// Stroked line segment.
    fn line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        color: Rgba,
        width: f32,
        dash: Option<[f32; 2]>,
    ) -> Result<(), RenderError>;

    /// Filled polygon.
    fn polygon(&mut self, vertices: &[PixelPoint], color: Rgba) -> Result<(), RenderError>;

    /// Text at a position.
    fn text(&mut self, position: PixelPoint, content: &str, color: Rgba)
    -> Result<(), RenderError>;
}

/// Replay a composed frame onto an adapter.
pub fn render_frame<A: RenderAdapter + ?Sized>(
    adapter: &mut A,
    primitives: &[Primitive],
) -> Result<(), RenderError> {
    for primitive in primitives {
        match primitive {
            Primitive::Circle {
                center,
                diameter,
                color,
            } => adapter.circle(*center, *diameter, *color)?,
            Primitive::Line {
                from,
                to,
                color,
                width,
                dash,
            } => adapter.line(*from, *to, *color, *width, *dash)?,
            Primitive::Polygon { vertices, color } => adapter.polygon(vertices, *color)?,
            Primitive::Text {
                position,
                content,
                color,
            } => adapter.text(*position, content, *color)?,
        }
    }
    Ok(())
}

// =============================================================================
// COLLECT ADAPTER
// =============================================================================

/// An adapter that records every primitive it receives. For tests and for
/// hosts that want to post-process a frame.
#[derive(Debug, Clone, Default)]
pub struct CollectAdapter {
    /// Primitives in submission order.
    pub primitives: Vec<Primitive>,
}

impl CollectAdapter {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything collected so far.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

impl RenderAdapter for CollectAdapter {
    fn circle(
        &mut self,
        center: PixelPoint,
        diameter: f32,
        color: Rgba,
    ) -> Result<(), RenderError> {
        self.primitives.push(Primitive::Circle {
            center,
            diameter,
            color,
        });
        Ok(())
    }

    fn line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        color: Rgba,
        width: f32,
        dash: Option<[f32; 2]>,
    ) -> Result<(), RenderError> {
        self.primitives.push(Primitive::Line {
            from,
            to,
            color,
            width,
            dash,
        });
        Ok(())
    }

    fn polygon(&mut self, vertices: &[PixelPoint], color: Rgba) -> Result<(), RenderError> {
        self.primitives.push(Primitive::Polygon {
            vertices: vertices.to_vec(),
            color,
        });
        Ok(())
    }

    fn text(
        &mut self,
        position: PixelPoint,
        content: &str,
        color: Rgba,
    ) -> Result<(), RenderError> {
        self.primitives.push(Primitive::Text {
            position,
            content: content.to_string(),
            color,
        });
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
