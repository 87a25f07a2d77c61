// File: crates/demo/src/main.rs
// Summary: Demo samples a named pattern onto the 5x5 panel, writes a PNG preview and optional CSV cell dump.

use anyhow::{Context, Result};
use pixelgrid_core::palette::{self, Pattern};
use pixelgrid_core::{encode_frame, PixelGrid};
use pixelgrid_render_skia::SkiaRenderer;
use std::path::{Path, PathBuf};

struct Args {
    pattern: String,
    out_dir: PathBuf,
    csv: bool,
    list: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args(std::env::args().skip(1))?;

    if args.list {
        for p in palette::presets() {
            println!("{}", p.name);
        }
        return Ok(());
    }

    let mut pattern = palette::find(&args.pattern).with_context(|| {
        format!("unknown pattern '{}' (try --list)", args.pattern)
    })?;
    log::info!("sampling pattern '{}'", pattern.name);

    let mut grid = PixelGrid::new();
    grid.fill_with(&mut pattern);

    let frame = encode_frame(&grid)?;
    println!("Frame ({} bytes): {:02x?}", frame.len(), frame);

    let png = out_path(&args.out_dir, &pattern, "png");
    SkiaRenderer::default().write_png(&grid, &png)?;
    println!("Wrote {}", png.display());

    if args.csv {
        let csv_path = out_path(&args.out_dir, &pattern, "csv");
        write_cells_csv(&grid, &csv_path)
            .with_context(|| format!("failed to write CSV '{}'", csv_path.display()))?;
        println!("Wrote {}", csv_path.display());
    }
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        pattern: "quadrants".to_string(),
        out_dir: PathBuf::from("target/out"),
        csv: false,
        list: false,
    };
    while let Some(a) = it.next() {
        match a.as_str() {
            "--out" => {
                let dir = it.next().context("--out needs a directory")?;
                args.out_dir = PathBuf::from(dir);
            }
            "--csv" => args.csv = true,
            "--list" => args.list = true,
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag}"),
            name => args.pattern = name.to_string(),
        }
    }
    Ok(args)
}

/// Produce output file name like <dir>/grid_<pattern>.<ext>
fn out_path(dir: &Path, pattern: &Pattern, ext: &str) -> PathBuf {
    dir.join(format!("grid_{}.{}", pattern.name, ext))
}

/// One row per cell in scan order: where it was sampled and what it holds.
fn write_cells_csv(grid: &PixelGrid, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["row", "col", "index", "x", "y", "r", "g", "b"])?;
    for cell in PixelGrid::coordinates() {
        let c = grid.pixels()[cell.index];
        wtr.write_record(&[
            cell.row.to_string(),
            cell.col.to_string(),
            cell.index.to_string(),
            format!("{:.3}", cell.x),
            format!("{:.3}", cell.y),
            c.r.to_string(),
            c.g.to_string(),
            c.b.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
