//! Frame composition - from engine state to a primitive list.
//!
//! Pure derivation, recomputed every frame: the store, the interaction
//! machine's hover preview, the overlay configuration and the sweep state go
//! in, an ordered list of [`Primitive`] values comes out. Draw order matches
//! the source diagram: grid, worldlines, hyperplanes, pulse, hover.

use bitflags::bitflags;

use crate::geometry::pulse::{SweepState, collect_intersections};
use crate::geometry::simultaneity::SimultaneityLine;
use crate::geometry::light_cone::light_cone;
use crate::grid::GridSpec;
use crate::path::Path;
use crate::renderer::Primitive;
use crate::state::interaction::{Editor, HoverPreview};
use crate::store::WorldlineStore;
use crate::types::{PixelPoint, Rgba};

bitflags! {
    /// Per-frame overlay configuration, supplied by the host's control
    /// surface. An explicit value every frame instead of reactive toggles.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OverlayFlags: u8 {
        /// Dashed hyperplanes of simultaneity per event.
        const HYPERPLANES = 1 << 0;
        /// Light cone on hovered events.
        const LIGHT_CONES = 1 << 1;
        /// The sweeping simultaneity pulse.
        const PULSE = 1 << 2;
        /// Proper-time labels at segment midpoints.
        const INTERVALS = 1 << 3;
    }
}

/// Stroke width of worldline segments.
pub const WORLDLINE_WIDTH: f32 = 3.0;

/// Stroke width of grid lines.
pub const GRID_LINE_WIDTH: f32 = 1.0;

/// Event circle diameter.
pub const EVENT_DIAMETER: f32 = 15.0;

/// Dash pattern of hyperplane lines.
pub const HYPERPLANE_DASH: [f32; 2] = [5.0, 15.0];

/// Dash pattern of the sweep pulse line.
pub const PULSE_DASH: [f32; 2] = [2.0, 4.0];

/// Compose one frame.
///
/// `hover` is the current pointer position if the host has one; the sweep
/// state is only consulted when the PULSE overlay is enabled.
pub fn compose_frame(
    store: &WorldlineStore,
    editor: &Editor,
    hover: Option<PixelPoint>,
    overlays: OverlayFlags,
    sweep: &SweepState,
    grid: &GridSpec,
) -> Vec<Primitive> {
    let mut out = Vec::new();

    push_grid(&mut out, grid);

    for path in store.paths() {
        push_worldline(&mut out, path, grid);
        if overlays.contains(OverlayFlags::HYPERPLANES) {
            push_hyperplanes(&mut out, path, grid);
        }
        if overlays.contains(OverlayFlags::INTERVALS) {
            push_interval_labels(&mut out, path, grid);
        }
    }

    if overlays.contains(OverlayFlags::PULSE) {
        push_pulse(&mut out, store, sweep, grid);
    }

    if let Some(pixel) = hover {
        push_hover(&mut out, editor.hover(pixel, store, grid), overlays, grid);
    }

    out
}

fn push_grid(out: &mut Vec<Primitive>, grid: &GridSpec) {
    use crate::types::LatticePoint;

    for i in 0..=grid.extent() {
        out.push(Primitive::Line {
            from: grid.lattice_to_pixel(LatticePoint::new(i, 0)),
            to: grid.lattice_to_pixel(LatticePoint::new(i, grid.extent())),
            color: Rgba::BLACK,
            width: GRID_LINE_WIDTH,
            dash: None,
        });
        out.push(Primitive::Line {
            from: grid.lattice_to_pixel(LatticePoint::new(0, i)),
            to: grid.lattice_to_pixel(LatticePoint::new(grid.extent(), i)),
            color: Rgba::BLACK,
            width: GRID_LINE_WIDTH,
            dash: None,
        });
    }
}

fn push_worldline(out: &mut Vec<Primitive>, path: &Path, grid: &GridSpec) {
    for window in path.events().windows(2) {
        out.push(Primitive::Line {
            from: grid.lattice_to_pixel(window[0]),
            to: grid.lattice_to_pixel(window[1]),
            color: path.color(),
            width: WORLDLINE_WIDTH,
            dash: None,
        });
    }
    for event in path.events() {
        out.push(Primitive::Circle {
            center: grid.lattice_to_pixel(*event),
            diameter: EVENT_DIAMETER,
            color: path.color(),
        });
    }
}

fn push_hyperplanes(out: &mut Vec<Primitive>, path: &Path, grid: &GridSpec) {
    for index in 0..path.len() {
        if let Some(line) = path.simultaneity_line(index, grid.extent()) {
            out.push(dashed_line(&line, path.color(), HYPERPLANE_DASH, grid));
        }
    }
}

fn push_interval_labels(out: &mut Vec<Primitive>, path: &Path, grid: &GridSpec) {
    let intervals = path.proper_time_intervals();
    for (window, interval) in path.events().windows(2).zip(intervals) {
        let a = grid.lattice_to_pixel(window[0]);
        let b = grid.lattice_to_pixel(window[1]);
        out.push(Primitive::Text {
            position: PixelPoint::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0),
            content: match interval {
                Some(tau) => format!("{tau:.2}"),
                None => "NA".to_string(),
            },
            color: path.color(),
        });
    }
}

fn push_pulse(out: &mut Vec<Primitive>, store: &WorldlineStore, sweep: &SweepState, grid: &GridSpec) {
    for (index, hit) in collect_intersections(store, sweep, grid.extent()) {
        let Some(path) = store.path(index) else {
            continue;
        };
        if let Some(line) = hit.line {
            out.push(dashed_line(&line, path.color(), PULSE_DASH, grid));
        }
        out.push(Primitive::Circle {
            center: grid.lattice_vec_to_pixel(hit.point),
            diameter: EVENT_DIAMETER * 0.6,
            color: path.color_translucent(),
        });
    }
}

fn push_hover(out: &mut Vec<Primitive>, preview: HoverPreview, overlays: OverlayFlags, grid: &GridSpec) {
    match preview {
        HoverPreview::None => {}
        HoverPreview::NextEvent { point, color } => {
            out.push(Primitive::Circle {
                center: grid.lattice_to_pixel(point),
                diameter: EVENT_DIAMETER,
                color,
            });
        }
        HoverPreview::LightCone { point, color } => {
            if !overlays.contains(OverlayFlags::LIGHT_CONES) {
                return;
            }
            let cone = light_cone(point, grid.extent());
            for wedge in [cone.future, cone.past] {
                if wedge.len() < 3 {
                    continue;
                }
                out.push(Primitive::Polygon {
                    vertices: wedge.iter().map(|v| grid.lattice_to_pixel(*v)).collect(),
                    color,
                });
            }
        }
        HoverPreview::RubberBand {
            point,
            color,
            prev,
            next,
        } => {
            let target = grid.lattice_to_pixel(point);
            for neighbor in [prev, next].into_iter().flatten() {
                out.push(Primitive::Line {
                    from: grid.lattice_to_pixel(neighbor),
                    to: target,
                    color,
                    width: WORLDLINE_WIDTH,
                    dash: None,
                });
            }
            out.push(Primitive::Circle {
                center: target,
                diameter: EVENT_DIAMETER,
                color,
            });
        }
    }
}

fn dashed_line(line: &SimultaneityLine, color: Rgba, dash: [f32; 2], grid: &GridSpec) -> Primitive {
    Primitive::Line {
        from: grid.lattice_vec_to_pixel(line.a),
        to: grid.lattice_vec_to_pixel(line.b),
        color,
        width: WORLDLINE_WIDTH,
        dash: Some(dash),
    }
}

// =============================================================================
// TESTS
// =============================================================================
