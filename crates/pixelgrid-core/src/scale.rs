// File: crates/pixelgrid-core/src/scale.rs
// Summary: Per-axis mapping between sample index and normalized coordinate.

/// Normalized coordinate along one axis, nominally in [-1.0, +1.0].
pub type Coord = f32;

/// Evenly spaced samples spanning the closed interval `start..=end`.
///
/// `start` may be greater than `end`; the vertical axis runs from `+1.0` at
/// row 0 (visual top) down to `-1.0` at the last row because storage is
/// indexed top-down while `+y` is up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedAxis {
    pub start: Coord,
    pub end: Coord,
    pub samples: usize,
}

impl NormalizedAxis {
    pub const fn new(start: Coord, end: Coord, samples: usize) -> Self {
        Self { start, end, samples }
    }

    /// Left-to-right: index 0 is `-1.0`, the last index is `+1.0`.
    pub const fn horizontal(samples: usize) -> Self {
        Self::new(-1.0, 1.0, samples)
    }

    /// Top-to-bottom: index 0 is `+1.0`, the last index is `-1.0`.
    pub const fn vertical(samples: usize) -> Self {
        Self::new(1.0, -1.0, samples)
    }

    /// Distance between neighbouring samples; `0.0` for a single-sample axis.
    #[inline]
    pub fn step(&self) -> Coord {
        if self.samples <= 1 {
            return 0.0;
        }
        (self.end - self.start) / (self.samples - 1) as Coord
    }

    /// Coordinate of sample `i`.
    ///
    /// Multiplicative rather than accumulated so large axes don't drift; the
    /// last sample is pinned to `end`. A single-sample axis sits at `start`.
    #[inline]
    pub fn at(&self, i: usize) -> Coord {
        if self.samples <= 1 || i == 0 {
            return self.start;
        }
        if i == self.samples - 1 {
            return self.end;
        }
        self.start + i as Coord * self.step()
    }

    /// Nearest sample index for `coord`, clamped onto the axis.
    pub fn index_of(&self, coord: Coord) -> usize {
        if self.samples <= 1 {
            return 0;
        }
        let t = (coord - self.start) / self.step();
        let last = (self.samples - 1) as Coord;
        // NaN falls through clamp and saturates to 0 on the cast
        t.round().clamp(0.0, last) as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.samples).map(move |i| self.at(i))
    }
}
