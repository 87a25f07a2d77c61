// File: crates/pixelgrid-core/tests/colorizers.rs
// Purpose: Validate fills driven by colorizers and palette presets (orientation on the panel).

use pixelgrid_core::colorizer::{Colorizer, Quadrants, Solid};
use pixelgrid_core::{palette, GridSampler, PixelGrid, Rgb};

#[test]
fn quadrants_land_in_the_right_corners() {
    let mut g = PixelGrid::new();
    let q = Quadrants::default();
    g.fill_with(&mut Quadrants::default());
    assert_eq!(g.get(0, 0), Some(q.top_left));
    assert_eq!(g.get(0, 4), Some(q.top_right));
    assert_eq!(g.get(4, 0), Some(q.bottom_left));
    assert_eq!(g.get(4, 4), Some(q.bottom_right));
}

#[test]
fn trait_objects_fill_like_closures() {
    let mut boxed: Box<dyn Colorizer<Rgb>> = Box::new(Solid(Rgb::BLUE));
    let mut g = PixelGrid::new();
    g.fill_with(boxed.as_mut());
    assert!(g.pixels().iter().all(|&c| c == Rgb::BLUE));
}

#[test]
fn sunset_is_brighter_on_top() {
    let mut g = GridSampler::<Rgb, 3, 3>::new();
    let mut p = palette::find("sunset").expect("preset");
    g.fill_with(&mut p);
    let top = g.get(0, 1).expect("top");
    let bottom = g.get(2, 1).expect("bottom");
    assert!(top.r > bottom.r);
}

#[test]
fn every_preset_overwrites_the_panel() {
    let stale = Rgb::new(1, 2, 3);
    for mut p in palette::presets() {
        let mut g = PixelGrid::filled(stale);
        g.fill_with(&mut p);
        assert!(g.pixels().iter().all(|&c| c != stale), "{} left a stale cell", p.name);
    }
}

#[test]
fn spotlight_peaks_at_the_center() {
    let mut g = PixelGrid::new();
    g.fill_with(&mut palette::Pattern::spotlight());
    assert_eq!(g.get(2, 2), Some(Rgb::WHITE));
    assert_eq!(g.get(0, 0), Some(Rgb::BLACK));
}
