//! Relativistic overlay geometry.
//!
//! - [`simultaneity`] - hyperplane reflection construction and grid clipping
//! - [`light_cone`] - clipped future/past wedge polygons
//! - [`pulse`] - the sweeping simultaneity animation

pub mod light_cone;
pub mod pulse;
pub mod simultaneity;

pub use light_cone::{LightCone, light_cone};
pub use pulse::{DEFAULT_SWEEP_STEP, SweepState, collect_intersections};
pub use simultaneity::{SimultaneityLine, hyperplane_through, is_timelike, reflect_across_light_line};
