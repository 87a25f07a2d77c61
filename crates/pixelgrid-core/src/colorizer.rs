// File: crates/pixelgrid-core/src/colorizer.rs
// Summary: Colorizer trait (per-coordinate color source) and a few built-in patterns.

use crate::scale::Coord;
use crate::types::Rgb;

/// Produces the color for one normalized coordinate.
///
/// Any `FnMut(f32, f32) -> C` closure is a colorizer; the structs below cover
/// the common test patterns.
pub trait Colorizer<C> {
    fn color_at(&mut self, x: Coord, y: Coord) -> C;
}

impl<C, F> Colorizer<C> for F
where
    F: FnMut(Coord, Coord) -> C,
{
    fn color_at(&mut self, x: Coord, y: Coord) -> C {
        self(x, y)
    }
}

/// Maps [-1, 1] onto [0, 1].
#[inline]
fn unit(v: Coord) -> f32 {
    ((v + 1.0) * 0.5).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solid(pub Rgb);

impl Colorizer<Rgb> for Solid {
    fn color_at(&mut self, _x: Coord, _y: Coord) -> Rgb { self.0 }
}

/// `left` at x = -1 through `right` at x = +1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalGradient {
    pub left: Rgb,
    pub right: Rgb,
}

impl Colorizer<Rgb> for HorizontalGradient {
    fn color_at(&mut self, x: Coord, _y: Coord) -> Rgb {
        self.left.lerp(self.right, unit(x))
    }
}

/// `bottom` at y = -1 through `top` at y = +1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalGradient {
    pub bottom: Rgb,
    pub top: Rgb,
}

impl Colorizer<Rgb> for VerticalGradient {
    fn color_at(&mut self, _x: Coord, y: Coord) -> Rgb {
        self.bottom.lerp(self.top, unit(y))
    }
}

/// `center` at the origin fading to `edge` at distance 1 and beyond.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Radial {
    pub center: Rgb,
    pub edge: Rgb,
}

impl Colorizer<Rgb> for Radial {
    fn color_at(&mut self, x: Coord, y: Coord) -> Rgb {
        self.center.lerp(self.edge, x.hypot(y))
    }
}

/// Alternating squares, `cells` bands per axis; `a` holds the bottom-left band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checker {
    pub a: Rgb,
    pub b: Rgb,
    pub cells: usize,
}

impl Colorizer<Rgb> for Checker {
    fn color_at(&mut self, x: Coord, y: Coord) -> Rgb {
        let n = self.cells.max(1);
        let band = |v: Coord| -> usize { ((unit(v) * n as f32) as usize).min(n - 1) };
        if (band(x) + band(y)) % 2 == 0 { self.a } else { self.b }
    }
}

/// One color per quadrant. Handy for spotting a flipped axis: the top-left
/// cell of a correctly oriented grid shows `top_left`.
/// Points on an axis line count toward the right / top side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadrants {
    pub top_left: Rgb,
    pub top_right: Rgb,
    pub bottom_left: Rgb,
    pub bottom_right: Rgb,
}

impl Default for Quadrants {
    fn default() -> Self {
        Self {
            top_left: Rgb::RED,
            top_right: Rgb::GREEN,
            bottom_left: Rgb::BLUE,
            bottom_right: Rgb::YELLOW,
        }
    }
}

impl Colorizer<Rgb> for Quadrants {
    fn color_at(&mut self, x: Coord, y: Coord) -> Rgb {
        match (x >= 0.0, y >= 0.0) {
            (false, true) => self.top_left,
            (true, true) => self.top_right,
            (false, false) => self.bottom_left,
            (true, false) => self.bottom_right,
        }
    }
}
