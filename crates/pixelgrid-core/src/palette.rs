// File: crates/pixelgrid-core/src/palette.rs
// Summary: Named pattern presets built from the stock colorizers.

use crate::colorizer::{Checker, Colorizer, HorizontalGradient, Quadrants, Radial, Solid, VerticalGradient};
use crate::scale::Coord;
use crate::types::{ColorValue, Rgb};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PatternKind {
    Solid(Solid),
    Horizontal(HorizontalGradient),
    Vertical(VerticalGradient),
    Radial(Radial),
    Checker(Checker),
    Quadrants(Quadrants),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pattern {
    pub name: &'static str,
    pub kind: PatternKind,
}

impl Colorizer<Rgb> for Pattern {
    fn color_at(&mut self, x: Coord, y: Coord) -> Rgb {
        match &mut self.kind {
            PatternKind::Solid(p) => p.color_at(x, y),
            PatternKind::Horizontal(p) => p.color_at(x, y),
            PatternKind::Vertical(p) => p.color_at(x, y),
            PatternKind::Radial(p) => p.color_at(x, y),
            PatternKind::Checker(p) => p.color_at(x, y),
            PatternKind::Quadrants(p) => p.color_at(x, y),
        }
    }
}

impl Pattern {
    pub fn neutral() -> Self {
        Self { name: "neutral", kind: PatternKind::Solid(Solid(Rgb::NEUTRAL)) }
    }

    pub fn sunset() -> Self {
        Self {
            name: "sunset",
            kind: PatternKind::Vertical(VerticalGradient {
                bottom: Rgb::new(0x2a, 0x0a, 0x4a),
                top: Rgb::new(0xff, 0x8c, 0x1a),
            }),
        }
    }

    pub fn ocean() -> Self {
        Self {
            name: "ocean",
            kind: PatternKind::Horizontal(HorizontalGradient {
                left: Rgb::new(0x00, 0x2b, 0x36),
                right: Rgb::new(0x26, 0x8b, 0xd2),
            }),
        }
    }

    pub fn spotlight() -> Self {
        Self {
            name: "spotlight",
            kind: PatternKind::Radial(Radial { center: Rgb::WHITE, edge: Rgb::BLACK }),
        }
    }

    pub fn checker() -> Self {
        Self {
            name: "checker",
            kind: PatternKind::Checker(Checker { a: Rgb::BLACK, b: Rgb::WHITE, cells: 5 }),
        }
    }

    pub fn quadrants() -> Self {
        Self { name: "quadrants", kind: PatternKind::Quadrants(Quadrants::default()) }
    }
}

/// Return a list of built-in pattern presets.
pub fn presets() -> Vec<Pattern> {
    vec![
        Pattern::neutral(),
        Pattern::sunset(),
        Pattern::ocean(),
        Pattern::spotlight(),
        Pattern::checker(),
        Pattern::quadrants(),
    ]
}

/// Find a preset by its `name`, ignoring ASCII case.
pub fn find(name: &str) -> Option<Pattern> {
    presets().into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
