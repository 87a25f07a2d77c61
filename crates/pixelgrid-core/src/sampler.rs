// File: crates/pixelgrid-core/src/sampler.rs
// Summary: Fixed-size color grid filled by sampling a function over normalized coordinates.

use crate::colorizer::Colorizer;
use crate::scale::{Coord, NormalizedAxis};
use crate::types::{ColorValue, GridDimensions, Rgb, GRID_HEIGHT, GRID_WIDTH};

/// The default panel: 5x5 RGB cells.
pub type PixelGrid = GridSampler<Rgb, GRID_WIDTH, GRID_HEIGHT>;

/// A `W` x `H` grid of colors stored inline, row-major, row 0 at the visual top.
///
/// Cells are sampled at x in [-1, +1] left to right and y in [+1, -1] top to
/// bottom, so `(-1, -1)` is the bottom-left cell and `(+1, +1)` the top-right.
/// Each axis is normalized on its own; non-square grids are not aspect-corrected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSampler<C, const W: usize, const H: usize> {
    pixels: [[C; W]; H],
}

/// Where a single cell is sampled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
    /// Position in the flat buffer: `row * W + col`.
    pub index: usize,
    pub x: Coord,
    pub y: Coord,
}

impl<C, const W: usize, const H: usize> GridSampler<C, W, H> {
    const NON_EMPTY: () = assert!(W >= 1 && H >= 1, "grid must be at least 1x1");

    const X_AXIS: NormalizedAxis = NormalizedAxis::horizontal(W);
    const Y_AXIS: NormalizedAxis = NormalizedAxis::vertical(H);

    pub const fn width(&self) -> usize { W }
    pub const fn height(&self) -> usize { H }
    pub const fn len(&self) -> usize { W * H }
    pub const fn is_empty(&self) -> bool { false }

    pub const fn dimensions(&self) -> GridDimensions {
        GridDimensions { width: W, height: H }
    }

    /// Flat row-major view, `W * H` long, for handing to an output driver.
    pub fn pixels(&self) -> &[C] {
        self.pixels.as_flattened()
    }

    pub fn rows(&self) -> &[[C; W]; H] {
        &self.pixels
    }

    /// Normalized coordinate the cell at `(row, col)` is sampled at.
    pub fn coordinate(row: usize, col: usize) -> (Coord, Coord) {
        (Self::X_AXIS.at(col), Self::Y_AXIS.at(row))
    }

    /// Every cell's sample position, in scan order.
    pub fn coordinates() -> impl Iterator<Item = CellCoord> {
        (0..H).flat_map(|row| {
            (0..W).map(move |col| {
                let (x, y) = Self::coordinate(row, col);
                CellCoord { row, col, index: row * W + col, x, y }
            })
        })
    }
}

impl<C: ColorValue, const W: usize, const H: usize> GridSampler<C, W, H> {
    /// Grid with every cell set to `C::NEUTRAL`.
    pub fn new() -> Self {
        Self::filled(C::NEUTRAL)
    }

    pub fn filled(color: C) -> Self {
        let () = Self::NON_EMPTY;
        Self { pixels: [[color; W]; H] }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<C> {
        self.pixels.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Overwrite every cell with `f(x, y)`.
    ///
    /// `f` runs exactly `W * H` times: rows top to bottom, columns left to right
    /// within a row. Cells are written as they are sampled, so if `f` panics the
    /// cells before it hold new values and the rest keep old ones; use
    /// [`try_fill_from_fn`](Self::try_fill_from_fn) for an all-or-nothing fill.
    pub fn fill_from_fn<F>(&mut self, mut f: F)
    where
        F: FnMut(Coord, Coord) -> C,
    {
        log::trace!("fill {}x{} grid", W, H);
        for (row, cells) in self.pixels.iter_mut().enumerate() {
            let y = Self::Y_AXIS.at(row);
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = f(Self::X_AXIS.at(col), y);
            }
        }
    }

    /// [`fill_from_fn`](Self::fill_from_fn) driven by a [`Colorizer`].
    pub fn fill_with<Z>(&mut self, colorizer: &mut Z)
    where
        Z: Colorizer<C> + ?Sized,
    {
        self.fill_from_fn(|x, y| <Z as Colorizer<C>>::color_at(colorizer, x, y));
    }

    /// Fallible fill. Stops at the first error and returns it as-is; the grid
    /// keeps its previous contents unless every cell succeeded.
    pub fn try_fill_from_fn<F, E>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(Coord, Coord) -> Result<C, E>,
    {
        log::trace!("try_fill {}x{} grid", W, H);
        let mut staged = self.pixels;
        for (row, cells) in staged.iter_mut().enumerate() {
            let y = Self::Y_AXIS.at(row);
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = f(Self::X_AXIS.at(col), y)?;
            }
        }
        self.pixels = staged;
        Ok(())
    }
}

impl<C: ColorValue, const W: usize, const H: usize> Default for GridSampler<C, W, H> {
    fn default() -> Self {
        Self::new()
    }
}
