//! Light cone wedges clipped to the grid.
//!
//! From any lattice point, light (speed 1) travels along 45-degree rays.
//! The future and past wedges are the regions causally reachable from / to
//! the point, clipped so they never exceed the bounded grid square: each ray
//! stops at the nearest grid edge along either axis, and the wedge closes
//! along the time boundary it ran into.

use crate::types::LatticePoint;

/// The clipped future and past wedges of a lattice point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightCone {
    /// Wedge of points reachable at speed <= 1 (time above the apex).
    pub future: Vec<LatticePoint>,
    /// Wedge of points that can reach the apex (time below it).
    pub past: Vec<LatticePoint>,
}

/// Compute both wedges for a lattice point on a grid of the given extent.
///
/// Each wedge is a polygon: the apex, the clipped end of each 45-degree ray,
/// and (when a ray is cut by a space boundary first) the corners where the
/// wedge meets the time boundary. Consecutive duplicate vertices from fully
/// degenerate edges are removed, so a centered cone collapses to a triangle.
pub fn light_cone(point: LatticePoint, extent: i32) -> LightCone {
    let to_left = point.space;
    let to_right = extent - point.space;
    let to_top = extent - point.time;
    let to_bottom = point.time;

    LightCone {
        future: wedge(point, to_left, to_right, to_top, 1),
        past: wedge(point, to_left, to_right, to_bottom, -1),
    }
}

/// One wedge: `dir` is +1 toward the future, -1 toward the past.
fn wedge(apex: LatticePoint, to_left: i32, to_right: i32, to_edge: i32, dir: i32) -> Vec<LatticePoint> {
    let left_reach = to_left.min(to_edge);
    let right_reach = to_right.min(to_edge);

    let mut vertices = vec![
        apex,
        LatticePoint::new(apex.space - left_reach, apex.time + dir * left_reach),
        LatticePoint::new(apex.space - left_reach, apex.time + dir * to_edge),
        LatticePoint::new(apex.space + right_reach, apex.time + dir * to_edge),
        LatticePoint::new(apex.space + right_reach, apex.time + dir * right_reach),
    ];
    vertices.dedup();
    vertices
}

// =============================================================================
// TESTS
// =============================================================================
