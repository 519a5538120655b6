//! Path - a single worldline entity.
//!
//! A path owns a time-ascending sequence of events and derives everything
//! relativistic from it: proper-time intervals under the flat Minkowski
//! metric, simultaneity lines per event, and the intersection with the
//! animated sweep coordinate. Mutations re-establish sortedness instead of
//! assuming it from append order; every invalid mutation is absorbed as a
//! typed no-op.
//!
//! # API
//!
//! - `append_event` - insert or signal a coincident event
//! - `move_event` - drag one event, collision-checked
//! - `proper_time_intervals` / `total_proper_time` / `elapsed_proper_time`
//! - `simultaneity_line` - hyperplane of simultaneity for one event
//! - `sweep_intersection` - where the sweeping "now" crosses this worldline

use crate::geometry::simultaneity::{self, SimultaneityLine, is_timelike};
use crate::types::{LatticePoint, LatticeVec, Rgba, palette_color, palette_color_translucent};

/// Result of [`Path::append_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Inserted; the event now sits at this index in time order.
    Appended(usize),
    /// The candidate coincides with an existing event at this index. The
    /// caller should convert the interaction into a drag on that event.
    Coincident(usize),
}

/// Where the sweep coordinate crosses a worldline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepIntersection {
    /// Spatial position interpolated along the straddling segment.
    pub point: LatticeVec,
    /// Simultaneity line through the point, oriented by the segment's
    /// velocity. `None` when the straddling segment is not timelike.
    pub line: Option<SimultaneityLine>,
}

/// An ordered worldline of lattice events.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    events: Vec<LatticePoint>,
    color: Rgba,
    color_translucent: Rgba,
}

impl Path {
    /// Create a path with a single origin event. Colors are assigned from
    /// the creation index modulo the palette.
    pub fn new(origin: LatticePoint, color_index: usize) -> Self {
        Self {
            events: vec![origin],
            color: palette_color(color_index),
            color_translucent: palette_color_translucent(color_index),
        }
    }

    /// The events in ascending time order.
    pub fn events(&self) -> &[LatticePoint] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the path has no events left.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Event at `index`, if present.
    pub fn event(&self, index: usize) -> Option<LatticePoint> {
        self.events.get(index).copied()
    }

    /// The newest event in time order.
    pub fn last_event(&self) -> Option<LatticePoint> {
        self.events.last().copied()
    }

    /// Opaque worldline color.
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Translucent variant (light cones, sweep markers).
    pub fn color_translucent(&self) -> Rgba {
        self.color_translucent
    }

    /// Index of an event with exactly these coordinates.
    pub fn index_of(&self, point: LatticePoint) -> Option<usize> {
        self.events.iter().position(|e| *e == point)
    }

    /// Insert a new event, keeping events sorted ascending by time.
    ///
    /// If the candidate coincides with an existing event the insert is
    /// rejected and [`AppendOutcome::Coincident`] names the match; a
    /// duplicate is never silently created.
    pub fn append_event(&mut self, candidate: LatticePoint) -> AppendOutcome {
        if let Some(existing) = self.index_of(candidate) {
            return AppendOutcome::Coincident(existing);
        }

        self.events.push(candidate);
        self.sort_events();
        tracing::trace!(?candidate, events = self.events.len(), "event appended");
        AppendOutcome::Appended(self.index_of(candidate).unwrap_or(self.events.len() - 1))
    }

    /// Move the event at `index` to `candidate` and return its index after
    /// re-sorting, so a caller's selection stays valid.
    ///
    /// Rejected (returns the unchanged index) when the candidate would
    /// collide with any other event of the path - this covers both the
    /// zero-length-segment case (adjacent neighbor) and the duplicate case.
    pub fn move_event(&mut self, index: usize, candidate: LatticePoint) -> usize {
        let Some(current) = self.event(index) else {
            return index;
        };
        if current == candidate {
            return index;
        }
        if self
            .events
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && *e == candidate)
        {
            return index;
        }

        self.events[index] = candidate;
        self.sort_events();
        self.index_of(candidate).unwrap_or(index)
    }

    /// Remove and return the newest event.
    pub(crate) fn pop_event(&mut self) -> Option<LatticePoint> {
        self.events.pop()
    }

    // Stable, so events sharing a time coordinate keep insertion order.
    fn sort_events(&mut self) {
        self.events.sort_by_key(|e| e.time);
    }

    // -------------------------------------------------------------------------
    // PROPER TIME
    // -------------------------------------------------------------------------

    /// Proper-time interval of each consecutive segment, `None` for
    /// spacelike and light-speed segments. Pure and idempotent; recomputed
    /// per frame rather than cached across mutations.
    pub fn proper_time_intervals(&self) -> Vec<Option<f64>> {
        self.events
            .windows(2)
            .map(|w| proper_time(w[0], w[1]))
            .collect()
    }

    /// Sum of the defined proper-time intervals.
    pub fn total_proper_time(&self) -> f64 {
        self.proper_time_intervals().into_iter().flatten().sum()
    }

    /// Proper time accumulated below the sweep coordinate: full intervals
    /// for segments entirely below it, plus the linear fraction of the
    /// straddling segment.
    pub fn elapsed_proper_time(&self, sweep: f64) -> f64 {
        let mut elapsed = 0.0;
        for w in self.events.windows(2) {
            let Some(tau) = proper_time(w[0], w[1]) else {
                continue;
            };
            let t0 = f64::from(w[0].time);
            let t1 = f64::from(w[1].time);
            if sweep >= t1 {
                elapsed += tau;
            } else if sweep > t0 {
                // Timelike guarantees t1 > t0.
                elapsed += tau * (sweep - t0) / (t1 - t0);
            }
        }
        elapsed
    }

    // -------------------------------------------------------------------------
    // SIMULTANEITY
    // -------------------------------------------------------------------------

    /// The hyperplane of simultaneity anchored at one event, clipped to the
    /// grid, or `None` when the event has no timelike neighbor.
    ///
    /// The causal neighbor is the previous event (the next one for the first
    /// event); when that segment is not timelike and a timelike alternate
    /// neighbor exists, the alternate is used instead.
    pub fn simultaneity_line(&self, index: usize, extent: i32) -> Option<SimultaneityLine> {
        let anchor = self.event(index)?;
        let neighbor = self.timelike_neighbor(index)?;

        let dspace = f64::from(neighbor.space - anchor.space);
        let dtime = f64::from(neighbor.time - anchor.time);
        Some(simultaneity::hyperplane_through(
            anchor.into(),
            dspace,
            dtime,
            extent,
        ))
    }

    fn timelike_neighbor(&self, index: usize) -> Option<LatticePoint> {
        let anchor = self.event(index)?;
        let primary = if index == 0 {
            self.event(1)
        } else {
            self.event(index - 1)
        };
        let alternate = if index == 0 { None } else { self.event(index + 1) };

        [primary, alternate]
            .into_iter()
            .flatten()
            .find(|n| is_timelike(n.space - anchor.space, n.time - anchor.time))
    }

    // -------------------------------------------------------------------------
    // SWEEP
    // -------------------------------------------------------------------------

    /// Where the sweeping simultaneity coordinate crosses this worldline.
    ///
    /// `None` when the path has fewer than two events or the sweep lies
    /// outside its time range. The spatial coordinate is interpolated
    /// linearly along the first segment whose time span straddles the sweep;
    /// the attached line uses the same reflection construction as
    /// [`Path::simultaneity_line`], oriented by that segment's velocity.
    pub fn sweep_intersection(&self, sweep: f64, extent: i32) -> Option<SweepIntersection> {
        if self.events.len() < 2 {
            return None;
        }

        for w in self.events.windows(2) {
            let t0 = f64::from(w[0].time);
            let t1 = f64::from(w[1].time);
            if t1 <= t0 || sweep < t0 || sweep > t1 {
                continue;
            }

            let fraction = (sweep - t0) / (t1 - t0);
            let dspace = f64::from(w[1].space - w[0].space);
            let point = LatticeVec::new(f64::from(w[0].space) + fraction * dspace, sweep);

            let line = is_timelike(w[1].space - w[0].space, w[1].time - w[0].time).then(|| {
                simultaneity::hyperplane_through(point, dspace, t1 - t0, extent)
            });

            return Some(SweepIntersection { point, line });
        }

        None
    }
}

/// Proper-time interval of a single segment.
///
/// `None` for spacelike separations (`|ds| > |dt|`) and for the light-speed
/// boundary (`|ds| == |dt|`), which is excluded from proper-time assignment:
/// treating it as timelike would silently assign finite proper time to
/// light-speed separations.
pub fn proper_time(a: LatticePoint, b: LatticePoint) -> Option<f64> {
    let ds = i64::from(b.space - a.space).abs();
    let dt = i64::from(b.time - a.time).abs();
    if ds >= dt {
        return None;
    }
    Some(((dt * dt - ds * ds) as f64).sqrt())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn p(space: i32, time: i32) -> LatticePoint {
        LatticePoint::new(space, time)
    }

    fn path_of(points: &[(i32, i32)]) -> Path {
        let mut path = Path::new(p(points[0].0, points[0].1), 0);
        for &(s, t) in &points[1..] {
            path.append_event(p(s, t));
        }
        path
    }

    // -------------------------------------------------------------------------
    // Proper time
    // -------------------------------------------------------------------------

    #[test]
    fn test_timelike_interval() {
        assert_eq!(proper_time(p(0, 0), p(0, 4)), Some(4.0));
        assert_eq!(proper_time(p(0, 0), p(3, 5)), Some(4.0));
    }

    #[test]
    fn test_spacelike_interval_undefined() {
        assert_eq!(proper_time(p(0, 0), p(5, 1)), None);
        assert_eq!(proper_time(p(0, 0), p(2, 0)), None);
    }

    #[test]
    fn test_light_speed_boundary_undefined() {
        assert_eq!(proper_time(p(0, 0), p(3, 3)), None);
        assert_eq!(proper_time(p(0, 0), p(-3, 3)), None);
    }

    #[test]
    fn test_intervals_idempotent() {
        let path = path_of(&[(0, 0), (1, 3), (5, 4), (5, 9)]);
        let first = path.proper_time_intervals();
        let second = path.proper_time_intervals();
        assert_eq!(first, second);
        assert_eq!(first, vec![Some(8.0_f64.sqrt()), None, Some(5.0)]);
    }

    #[test]
    fn test_total_skips_undefined() {
        let path = path_of(&[(0, 0), (0, 4), (5, 5)]);
        assert_eq!(path.total_proper_time(), 4.0);
    }

    // -------------------------------------------------------------------------
    // Ordering and mutation
    // -------------------------------------------------------------------------

    #[test]
    fn test_append_resorts_by_time() {
        // Appending below the existing events splices, never trails.
        let path = path_of(&[(0, 5), (2, 1), (1, 3)]);
        assert_eq!(path.events(), &[p(2, 1), p(1, 3), p(0, 5)]);
    }

    #[test]
    fn test_append_coincident_signals_match() {
        let mut path = path_of(&[(0, 0), (0, 4)]);
        assert_eq!(path.append_event(p(0, 4)), AppendOutcome::Coincident(1));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_append_reports_spliced_index() {
        let mut path = path_of(&[(0, 0), (0, 6)]);
        assert_eq!(path.append_event(p(1, 3)), AppendOutcome::Appended(1));
    }

    #[test]
    fn test_equal_time_events_keep_insertion_order() {
        let path = path_of(&[(0, 0), (4, 2), (1, 2)]);
        assert_eq!(path.events(), &[p(0, 0), p(4, 2), p(1, 2)]);
        // The equal-time segment is spacelike.
        assert_eq!(path.proper_time_intervals()[1], None);
    }

    #[test]
    fn test_move_onto_other_event_rejected() {
        let mut path = path_of(&[(0, 0), (0, 4)]);
        let index = path.move_event(0, p(0, 4));
        assert_eq!(index, 0);
        assert_eq!(path.event(0), Some(p(0, 0)));
    }

    #[test]
    fn test_move_returns_post_sort_index() {
        let mut path = path_of(&[(0, 0), (1, 4), (2, 8)]);
        // Drag the first event above the others.
        let index = path.move_event(0, p(0, 10));
        assert_eq!(index, 2);
        assert_eq!(path.events(), &[p(1, 4), p(2, 8), p(0, 10)]);
    }

    #[test]
    fn test_move_out_of_range_is_noop() {
        let mut path = path_of(&[(0, 0)]);
        assert_eq!(path.move_event(7, p(1, 1)), 7);
        assert_eq!(path.events(), &[p(0, 0)]);
    }

    // -------------------------------------------------------------------------
    // Simultaneity
    // -------------------------------------------------------------------------

    #[test]
    fn test_at_rest_simultaneity_is_horizontal() {
        let path = path_of(&[(5, 2), (5, 8)]);
        let line = path.simultaneity_line(1, 24).unwrap();
        assert!((line.a.time - 8.0).abs() < 1e-9);
        assert!((line.b.time - 8.0).abs() < 1e-9);
        assert!((line.a.space - 0.0).abs() < 1e-9);
        assert!((line.b.space - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_first_event_uses_next_neighbor() {
        let path = path_of(&[(5, 2), (5, 8)]);
        assert!(path.simultaneity_line(0, 24).is_some());
    }

    #[test]
    fn test_spacelike_segment_falls_back_to_timelike_neighbor() {
        // Segment 0-1 is spacelike, segment 1-2 is timelike: event 1 falls
        // back to its next neighbor.
        let path = path_of(&[(0, 0), (6, 1), (6, 5)]);
        assert!(path.simultaneity_line(1, 24).is_some());
        // Event 0 has only the spacelike neighbor.
        assert_eq!(path.simultaneity_line(0, 24), None);
    }

    #[test]
    fn test_isolated_event_has_no_line() {
        let path = path_of(&[(3, 3)]);
        assert_eq!(path.simultaneity_line(0, 24), None);
    }

    #[test]
    fn test_light_speed_segment_has_no_line() {
        let path = path_of(&[(0, 0), (4, 4)]);
        assert_eq!(path.simultaneity_line(0, 24), None);
        assert_eq!(path.simultaneity_line(1, 24), None);
    }

    // -------------------------------------------------------------------------
    // Sweep
    // -------------------------------------------------------------------------

    #[test]
    fn test_sweep_interpolates_space() {
        let path = path_of(&[(0, 0), (4, 8)]);
        let hit = path.sweep_intersection(4.0, 24).unwrap();
        assert!((hit.point.space - 2.0).abs() < 1e-9);
        assert!((hit.point.time - 4.0).abs() < 1e-9);
        assert!(hit.line.is_some());
    }

    #[test]
    fn test_sweep_outside_range_is_none() {
        let path = path_of(&[(0, 2), (0, 6)]);
        assert_eq!(path.sweep_intersection(1.0, 24), None);
        assert_eq!(path.sweep_intersection(7.0, 24), None);
    }

    #[test]
    fn test_sweep_single_event_is_none() {
        let path = path_of(&[(0, 2)]);
        assert_eq!(path.sweep_intersection(2.0, 24), None);
    }

    #[test]
    fn test_sweep_over_light_speed_segment_has_marker_only() {
        let path = path_of(&[(0, 0), (6, 6)]);
        let hit = path.sweep_intersection(3.0, 24).unwrap();
        assert!((hit.point.space - 3.0).abs() < 1e-9);
        assert_eq!(hit.line, None);
    }

    #[test]
    fn test_elapsed_proper_time_monotonic() {
        let path = path_of(&[(0, 0), (1, 4), (1, 10)]);
        let mut previous = -1.0;
        for step in 0..=20 {
            let sweep = step as f64 * 0.5;
            let elapsed = path.elapsed_proper_time(sweep);
            assert!(elapsed >= previous, "elapsed dipped at sweep {sweep}");
            previous = elapsed;
        }
        assert!((path.elapsed_proper_time(10.0) - path.total_proper_time()).abs() < 1e-9);
    }
}
