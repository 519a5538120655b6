//! Hyperplane-of-simultaneity construction.
//!
//! For a worldline segment with velocity below light speed, the line of
//! simultaneity in its instantaneous rest frame is the mirror image of the
//! segment across the local 45-degree light line (c = 1, so light lines
//! bisect the axes). This module does the reflection and clips the
//! resulting infinite line to the bounded grid square.

use crate::types::LatticeVec;

/// A simultaneity line clipped to the grid, in lattice coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimultaneityLine {
    /// Endpoint on the grid boundary in one direction.
    pub a: LatticeVec,
    /// Endpoint on the grid boundary in the other direction.
    pub b: LatticeVec,
}

/// Whether a segment separation is timelike (strictly inside the light
/// cone). Light-speed separations (`|ds| == |dt|`) are excluded: a null
/// segment has no rest frame.
pub fn is_timelike(dspace: i32, dtime: i32) -> bool {
    dspace.abs() < dtime.abs()
}

/// Reflect a segment direction across the nearest 45-degree light line.
///
/// `theta = atan2(dtime, dspace)` is bucketed into its enclosing quadrant to
/// pick the bisector `b`, then reflected: `theta - 2 * (theta - b)`. Returns
/// the hyperplane angle in degrees.
pub fn reflect_across_light_line(dspace: f64, dtime: f64) -> f64 {
    let theta = dtime.atan2(dspace).to_degrees();

    let bisector = if theta <= 0.0 && theta > -90.0 {
        -45.0
    } else if theta <= -90.0 && theta >= -180.0 {
        -135.0
    } else if theta >= 0.0 && theta < 90.0 {
        45.0
    } else {
        135.0
    };

    theta - 2.0 * (theta - bisector)
}

/// Build the simultaneity line through `anchor` for a segment direction,
/// extended to the grid boundary in both directions.
pub fn hyperplane_through(
    anchor: LatticeVec,
    dspace: f64,
    dtime: f64,
    extent: i32,
) -> SimultaneityLine {
    let angle = reflect_across_light_line(dspace, dtime).to_radians();
    clip_to_grid(anchor, angle.cos(), angle.sin(), extent)
}

/// Clip the infinite line `anchor + t * (dx, dy)` to the `[0, extent]`
/// square. Degenerates to a zero-length line when the anchor lies outside
/// the square.
pub fn clip_to_grid(anchor: LatticeVec, dx: f64, dy: f64, extent: i32) -> SimultaneityLine {
    const EPS: f64 = 1e-9;
    let max = f64::from(extent);

    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;

    for (origin, dir) in [(anchor.space, dx), (anchor.time, dy)] {
        if dir.abs() < EPS {
            if origin < 0.0 || origin > max {
                return SimultaneityLine { a: anchor, b: anchor };
            }
        } else {
            let t_a = (0.0 - origin) / dir;
            let t_b = (max - origin) / dir;
            t_min = t_min.max(t_a.min(t_b));
            t_max = t_max.min(t_a.max(t_b));
        }
    }

    if t_min > t_max {
        return SimultaneityLine { a: anchor, b: anchor };
    }

    SimultaneityLine {
        a: LatticeVec::new(anchor.space + t_min * dx, anchor.time + t_min * dy),
        b: LatticeVec::new(anchor.space + t_max * dx, anchor.time + t_max * dy),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_timelike_excludes_light_speed() {
        assert!(is_timelike(0, 4));
        assert!(is_timelike(2, -3));
        assert!(!is_timelike(3, 3));
        assert!(!is_timelike(-3, 3));
        assert!(!is_timelike(5, 1));
        assert!(!is_timelike(0, 0));
    }

    #[test]
    fn test_at_rest_segment_reflects_to_horizontal() {
        // A vertical (at rest) worldline's simultaneity plane is horizontal:
        // theta = 90, bisector 135, reflected to 180.
        assert!(close(reflect_across_light_line(0.0, 1.0), 180.0));
    }

    #[test]
    fn test_reflection_slope_equals_velocity() {
        // Velocity v = ds/dt maps to a simultaneity slope of v (c = 1).
        for (ds, dt) in [(1.0, 2.0), (-1.0, 3.0), (2.0, 5.0)] {
            let angle = reflect_across_light_line(ds, dt).to_radians();
            let slope = angle.sin() / angle.cos();
            assert!(close(slope, ds / dt), "slope {slope} for v {}", ds / dt);
        }
    }

    #[test]
    fn test_light_line_reflects_onto_itself() {
        assert!(close(reflect_across_light_line(1.0, 1.0), 45.0));
        assert!(close(reflect_across_light_line(-1.0, 1.0), 135.0));
    }

    #[test]
    fn test_clip_horizontal_line_spans_grid() {
        let line = clip_to_grid(LatticeVec::new(5.0, 7.0), 1.0, 0.0, 24);
        assert_eq!(line.a, LatticeVec::new(0.0, 7.0));
        assert_eq!(line.b, LatticeVec::new(24.0, 7.0));
    }

    #[test]
    fn test_clip_sloped_line_hits_time_boundary() {
        // Unit-slope line through the center leaves through the corners.
        let line = clip_to_grid(
            LatticeVec::new(12.0, 12.0),
            std::f64::consts::FRAC_1_SQRT_2,
            std::f64::consts::FRAC_1_SQRT_2,
            24,
        );
        assert!(close(line.a.space, 0.0) && close(line.a.time, 0.0));
        assert!(close(line.b.space, 24.0) && close(line.b.time, 24.0));
    }

    #[test]
    fn test_clip_anchor_outside_degenerates() {
        let anchor = LatticeVec::new(30.0, 5.0);
        let line = clip_to_grid(anchor, 0.0, 1.0, 24);
        assert_eq!(line.a, anchor);
        assert_eq!(line.b, anchor);
    }

    #[test]
    fn test_hyperplane_through_anchor_is_collinear() {
        let anchor = LatticeVec::new(10.0, 10.0);
        let line = hyperplane_through(anchor, 1.0, 3.0, 24);
        // The anchor lies on the clipped line.
        let cross = (line.b.space - line.a.space) * (anchor.time - line.a.time)
            - (line.b.time - line.a.time) * (anchor.space - line.a.space);
        assert!(cross.abs() < 1e-9);
    }
}
