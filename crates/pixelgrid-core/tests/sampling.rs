// File: crates/pixelgrid-core/tests/sampling.rs
// Purpose: Validate coordinate mapping, scan order, and overwrite behavior of fill_from_fn.

use pixelgrid_core::grid::linspace;
use pixelgrid_core::{GridDimensions, GridSampler, PixelGrid, Rgb};

const EPS: f32 = 1e-6;

/// Fill a grid and record every (x, y) handed to the callback, in call order.
fn record<const W: usize, const H: usize>() -> Vec<(f32, f32)> {
    let mut seen = Vec::new();
    let mut g = GridSampler::<u32, W, H>::new();
    g.fill_from_fn(|x, y| {
        seen.push((x, y));
        0
    });
    seen
}

fn close(a: (f32, f32), b: (f32, f32)) -> bool {
    (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS
}

#[test]
fn calls_once_per_cell() {
    assert_eq!(record::<5, 5>().len(), 25);
    assert_eq!(record::<2, 2>().len(), 4);
    assert_eq!(record::<7, 3>().len(), 21);
    assert_eq!(record::<16, 9>().len(), 144);
}

#[test]
fn five_by_five_corners_and_center() {
    let seen = record::<5, 5>();
    let at = |row: usize, col: usize| seen[row * 5 + col];
    assert!(close(at(0, 0), (-1.0, 1.0)));
    assert!(close(at(0, 4), (1.0, 1.0)));
    assert!(close(at(4, 0), (-1.0, -1.0)));
    assert!(close(at(4, 4), (1.0, -1.0)));
    assert!(close(at(2, 2), (0.0, 0.0)));
}

#[test]
fn x_increases_along_rows_and_y_decreases_down_columns() {
    const W: usize = 8;
    const H: usize = 6;
    let seen = record::<W, H>();
    for row in 0..H {
        for col in 1..W {
            assert!(seen[row * W + col].0 > seen[row * W + col - 1].0, "x at ({row},{col})");
        }
    }
    for col in 0..W {
        for row in 1..H {
            assert!(seen[row * W + col].1 < seen[(row - 1) * W + col].1, "y at ({row},{col})");
        }
    }
}

#[test]
fn row_is_constant_y_and_column_is_constant_x() {
    const W: usize = 4;
    const H: usize = 3;
    let seen = record::<W, H>();
    for row in 0..H {
        assert!(seen[row * W..(row + 1) * W].iter().all(|p| p.1 == seen[row * W].1));
    }
    for col in 0..W {
        assert!((0..H).all(|row| seen[row * W + col].0 == seen[col].0));
    }
}

#[test]
fn non_square_axes_normalize_independently() {
    let seen = record::<3, 5>();
    let xs: Vec<f32> = seen[..3].iter().map(|p| p.0).collect();
    assert_eq!(xs, linspace(-1.0, 1.0, 3));
    assert_eq!(xs, vec![-1.0, 0.0, 1.0]);
    let ys: Vec<f32> = (0..5).map(|row| seen[row * 3].1).collect();
    assert_eq!(ys, linspace(1.0, -1.0, 5));
    assert_eq!(ys, vec![1.0, 0.5, 0.0, -0.5, -1.0]);
}

#[test]
fn single_column_samples_at_left_edge() {
    let seen = record::<1, 4>();
    assert_eq!(seen.len(), 4);
    assert!(seen.iter().all(|p| p.0 == -1.0));
    assert_eq!(seen.first().map(|p| p.1), Some(1.0));
    assert_eq!(seen.last().map(|p| p.1), Some(-1.0));
}

#[test]
fn single_row_samples_at_top_edge() {
    let seen = record::<6, 1>();
    assert_eq!(seen.len(), 6);
    assert!(seen.iter().all(|p| p.1 == 1.0));
    assert_eq!(seen.first().map(|p| p.0), Some(-1.0));
    assert_eq!(seen.last().map(|p| p.0), Some(1.0));
}

#[test]
fn one_by_one_grid() {
    assert_eq!(record::<1, 1>(), vec![(-1.0, 1.0)]);
}

#[test]
fn fresh_grid_is_neutral() {
    let g = PixelGrid::new();
    assert_eq!(g.width(), 5);
    assert_eq!(g.height(), 5);
    assert_eq!(g.pixels().len(), 25);
    assert_eq!(g.dimensions(), GridDimensions { width: 5, height: 5 });
    assert_eq!(g.dimensions().cells(), 25);
    assert_eq!(g.len(), 25);
    assert!(g.pixels().iter().all(|&c| c == Rgb::splat(64)));
    assert_eq!(PixelGrid::default(), g);
}

#[test]
fn constant_fill_overwrites_every_cell() {
    let mut g = PixelGrid::new();
    g.fill_from_fn(|x, y| Rgb::new((x * 100.0) as u8, (y * 100.0) as u8, 7));
    g.fill_from_fn(|_, _| Rgb::RED);
    assert!(g.pixels().iter().all(|&c| c == Rgb::RED));
}

#[test]
fn pure_fill_is_idempotent() {
    let f = |x: f32, y: f32| Rgb::new(((x + 1.0) * 100.0) as u8, ((y + 1.0) * 100.0) as u8, 0);
    let mut g = PixelGrid::new();
    g.fill_from_fn(f);
    let first = g.clone();
    g.fill_from_fn(f);
    assert_eq!(g, first);
}

#[test]
fn buffer_index_matches_row_major_scan() {
    let mut g = GridSampler::<u32, 4, 3>::new();
    let mut n = 0u32;
    g.fill_from_fn(|_, _| {
        n += 1;
        n
    });
    assert_eq!(g.pixels(), &(1..=12).collect::<Vec<u32>>()[..]);
    assert_eq!(g.get(1, 2), Some(7));
    assert_eq!(g.rows()[2], [9, 10, 11, 12]);
}

#[test]
fn coordinates_agree_with_fill() {
    let seen = record::<5, 4>();
    let coords: Vec<(f32, f32)> = GridSampler::<u32, 5, 4>::coordinates().map(|c| (c.x, c.y)).collect();
    assert_eq!(seen, coords);
}
