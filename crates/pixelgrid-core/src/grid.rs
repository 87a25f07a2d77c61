// File: crates/pixelgrid-core/src/grid.rs
// Summary: Simple sample layout helpers.

use crate::scale::NormalizedAxis;

/// `steps` evenly spaced values over `start..=end`; one step yields `[start]`.
pub fn linspace(start: f32, end: f32, steps: usize) -> Vec<f32> {
    NormalizedAxis::new(start, end, steps).iter().collect()
}
