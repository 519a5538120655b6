//! Terminal render adapter - executes primitives in a crossterm terminal.
//!
//! Pure primitive execution: no editing or geometry logic lives here. Pixel
//! coordinates are scaled to terminal cells (two columns and one row per
//! lattice cell, so the diagram stays roughly square in a typical font),
//! lines are rasterized with Bresenham, polygons as outlines, circles as a
//! single glyph.
//!
//! The adapter also translates crossterm input events into the engine's
//! pointer events, since only it knows the cell scale.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use crossterm::queue;
use crossterm::style::{Color, Print, SetForegroundColor};

use crate::error::RenderError;
use crate::grid::GridSpec;
use crate::renderer::RenderAdapter;
use crate::state::pointer::PointerEvent;
use crate::types::{PixelPoint, Rgba};

const EVENT_GLYPH: char = '●';
const LINE_GLYPH: char = '·';

/// Executes drawing primitives on a terminal writer.
#[derive(Debug)]
pub struct TerminalAdapter<W: Write> {
    out: W,
    cell_width: f32,
    cell_height: f32,
}

impl<W: Write> TerminalAdapter<W> {
    /// Create an adapter scaled so one lattice cell of `grid` maps to two
    /// terminal columns and one row.
    pub fn new(out: W, grid: &GridSpec) -> Self {
        Self {
            out,
            cell_width: grid.spacing() / 2.0,
            cell_height: grid.spacing(),
        }
    }

    /// Flush buffered output to the terminal.
    pub fn flush(&mut self) -> Result<(), RenderError> {
        self.out.flush()?;
        Ok(())
    }

    /// Consume the adapter and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// The engine pixel position at a terminal cell, for feeding crossterm
    /// mouse coordinates back into the grid mapper.
    pub fn pixel_at_cell(&self, column: u16, row: u16) -> PixelPoint {
        PixelPoint::new(
            f32::from(column) * self.cell_width,
            f32::from(row) * self.cell_height,
        )
    }

    /// Translate a crossterm mouse event into a pointer event. Only the
    /// left button edits; everything else is `None`.
    pub fn pointer_event(&self, mouse: &MouseEvent) -> Option<PointerEvent> {
        let position = self.pixel_at_cell(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(PointerEvent::down(position.x, position.y))
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                Some(PointerEvent::move_to(position.x, position.y))
            }
            MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::up(position.x, position.y)),
            _ => None,
        }
    }

    fn cell(&self, pixel: PixelPoint) -> (i32, i32) {
        (
            (pixel.x / self.cell_width).round() as i32,
            (pixel.y / self.cell_height).round() as i32,
        )
    }

    fn put(&mut self, column: i32, row: i32, glyph: char, color: Rgba) -> Result<(), RenderError> {
        if column < 0 || row < 0 || column > i32::from(u16::MAX) || row > i32::from(u16::MAX) {
            return Ok(());
        }
        queue!(
            self.out,
            MoveTo(column as u16, row as u16),
            SetForegroundColor(terminal_color(color)),
            Print(glyph),
        )?;
        Ok(())
    }

    // Bresenham between two cells; `dash` is an [on, off] cell count.
    fn stroke(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        color: Rgba,
        dash: Option<(u32, u32)>,
    ) -> Result<(), RenderError> {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut step: u32 = 0;

        loop {
            let visible = match dash {
                Some((on, off)) => step % (on + off) < on,
                None => true,
            };
            if visible {
                self.put(x, y, LINE_GLYPH, color)?;
            }
            if (x, y) == to {
                return Ok(());
            }
            step += 1;
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x += sx;
            }
            if doubled <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn dash_cells(&self, dash: Option<[f32; 2]>) -> Option<(u32, u32)> {
        dash.map(|[on, off]| {
            let scale = self.cell_width.min(self.cell_height);
            (
                ((on / scale).round() as u32).max(1),
                ((off / scale).round() as u32).max(1),
            )
        })
    }
}

impl<W: Write> RenderAdapter for TerminalAdapter<W> {
    fn circle(
        &mut self,
        center: PixelPoint,
        _diameter: f32,
        color: Rgba,
    ) -> Result<(), RenderError> {
        let (column, row) = self.cell(center);
        self.put(column, row, EVENT_GLYPH, color)
    }

    fn line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        color: Rgba,
        _width: f32,
        dash: Option<[f32; 2]>,
    ) -> Result<(), RenderError> {
        let dash = self.dash_cells(dash);
        let (from, to) = (self.cell(from), self.cell(to));
        self.stroke(from, to, color, dash)
    }

    fn polygon(&mut self, vertices: &[PixelPoint], color: Rgba) -> Result<(), RenderError> {
        if vertices.len() < 2 {
            return Ok(());
        }
        for window in vertices.windows(2) {
            self.stroke(self.cell(window[0]), self.cell(window[1]), color, None)?;
        }
        // Closing edge.
        self.stroke(
            self.cell(vertices[vertices.len() - 1]),
            self.cell(vertices[0]),
            color,
            None,
        )
    }

    fn text(
        &mut self,
        position: PixelPoint,
        content: &str,
        color: Rgba,
    ) -> Result<(), RenderError> {
        let (column, row) = self.cell(position);
        if column < 0 || row < 0 {
            return Ok(());
        }
        queue!(
            self.out,
            MoveTo(column as u16, row as u16),
            SetForegroundColor(terminal_color(color)),
            Print(content),
        )?;
        Ok(())
    }
}

// Terminals have no alpha channel; translucency dims toward black instead.
fn terminal_color(color: Rgba) -> Color {
    let scale = f32::from(color.a) / 255.0;
    Color::Rgb {
        r: (f32::from(color.r) * scale) as u8,
        g: (f32::from(color.g) * scale) as u8,
        b: (f32::from(color.b) * scale) as u8,
    }
}

// =============================================================================
// TESTS
// =============================================================================
