//! Simultaneity Pulse - the continuously sweeping "now".
//!
//! One scalar time coordinate is decremented by a fixed step each animation
//! tick and wraps back to the grid maximum once it passes the minimum. Each
//! frame, every worldline is asked where the sweep crosses it; the resulting
//! markers and lines are purely observational - the pulse never mutates the
//! store.

use crate::path::SweepIntersection;
use crate::store::WorldlineStore;

/// Default sweep decrement per tick, in lattice time units.
pub const DEFAULT_SWEEP_STEP: f64 = 0.05;

/// The animated sweep coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepState {
    time: f64,
    step: f64,
    max: f64,
}

impl SweepState {
    /// Start a sweep at the top of a grid with the default step.
    pub fn new(extent: i32) -> Self {
        Self::with_step(extent, DEFAULT_SWEEP_STEP)
    }

    /// Start a sweep with a custom per-tick step.
    pub fn with_step(extent: i32, step: f64) -> Self {
        let max = f64::from(extent);
        Self { time: max, step, max }
    }

    /// Current sweep time coordinate.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advance one animation tick: decrement, wrapping to the grid maximum
    /// when the coordinate passes below the minimum.
    pub fn tick(&mut self) {
        self.time -= self.step;
        if self.time < 0.0 {
            self.time = self.max;
        }
    }

    /// Restart from the grid maximum.
    pub fn reset(&mut self) {
        self.time = self.max;
    }
}

/// Collect the sweep intersection of every path that the current sweep
/// coordinate crosses, tagged with the path's creation index.
pub fn collect_intersections(
    store: &WorldlineStore,
    sweep: &SweepState,
    extent: i32,
) -> Vec<(usize, SweepIntersection)> {
    store
        .paths()
        .iter()
        .enumerate()
        .filter_map(|(index, path)| {
            path.sweep_intersection(sweep.time(), extent)
                .map(|hit| (index, hit))
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LatticePoint;

    #[test]
    fn test_tick_decrements() {
        let mut sweep = SweepState::with_step(24, 0.5);
        assert_eq!(sweep.time(), 24.0);
        sweep.tick();
        assert_eq!(sweep.time(), 23.5);
    }

    #[test]
    fn test_wraps_below_minimum() {
        let mut sweep = SweepState::with_step(10, 3.0);
        for _ in 0..3 {
            sweep.tick();
        }
        assert_eq!(sweep.time(), 1.0);
        sweep.tick();
        assert_eq!(sweep.time(), 10.0);
    }

    #[test]
    fn test_collect_skips_paths_out_of_range() {
        let mut store = WorldlineStore::new();
        let low = store.create_path(LatticePoint::new(0, 0));
        if let Some(path) = store.path_mut(low) {
            path.append_event(LatticePoint::new(0, 4));
        }
        let high = store.create_path(LatticePoint::new(5, 20));
        if let Some(path) = store.path_mut(high) {
            path.append_event(LatticePoint::new(5, 24));
        }

        let mut sweep = SweepState::with_step(24, 22.0);
        sweep.tick(); // 2.0, inside the low path only

        let hits = collect_intersections(&store, &sweep, 24);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, low);
        assert!((hits[0].1.point.time - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_collect_never_mutates() {
        let mut store = WorldlineStore::new();
        let index = store.create_path(LatticePoint::new(0, 0));
        if let Some(path) = store.path_mut(index) {
            path.append_event(LatticePoint::new(1, 6));
        }
        let before = store.clone();

        let sweep = SweepState::new(24);
        let _ = collect_intersections(&store, &sweep, 24);
        assert_eq!(store.paths().len(), before.paths().len());
        assert_eq!(store.path(index).map(|p| p.events().to_vec()),
                   before.path(index).map(|p| p.events().to_vec()));
    }
}
