// File: crates/pixelgrid-core/src/types.rs
// Summary: Shared types and constants (default grid size, color values).

/// Default grid width in cells.
pub const GRID_WIDTH: usize = 5;
/// Default grid height in cells.
pub const GRID_HEIGHT: usize = 5;

/// Channel level of the neutral fill color (mid-brightness, not black).
pub const NEUTRAL_LEVEL: u8 = 64;

/// A storable color value for one grid cell.
///
/// The sampler only copies these around; `NEUTRAL` is what a fresh grid holds
/// before the first fill.
pub trait ColorValue: Copy {
    const NEUTRAL: Self;
}

/// Three 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same level on every channel.
    pub const fn splat(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Pack as `0x00RRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn from_u32(v: u32) -> Self {
        Self { r: (v >> 16) as u8, g: (v >> 8) as u8, b: v as u8 }
    }

    /// Per-channel linear interpolation; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round() as u8 };
        Rgb { r: mix(self.r, other.r), g: mix(self.g, other.g), b: mix(self.b, other.b) }
    }
}

impl ColorValue for Rgb {
    const NEUTRAL: Self = Rgb::splat(NEUTRAL_LEVEL);
}

/// Packed `0x00RRGGBB`.
impl ColorValue for u32 {
    const NEUTRAL: Self = Rgb::splat(NEUTRAL_LEVEL).to_u32();
}

impl ColorValue for [u8; 3] {
    const NEUTRAL: Self = [NEUTRAL_LEVEL; 3];
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(v: [u8; 3]) -> Self {
        Rgb::new(v[0], v[1], v[2])
    }
}

impl From<Rgb> for u32 {
    fn from(c: Rgb) -> Self {
        c.to_u32()
    }
}

/// Fixed width/height of a grid, in cells.
/// Contract: both fields are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDimensions {
    pub width: usize,
    pub height: usize,
}

impl GridDimensions {
    pub const fn cells(&self) -> usize { self.width * self.height }
}
