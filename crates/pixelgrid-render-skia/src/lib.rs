// File: crates/pixelgrid-render-skia/src/lib.rs
// Summary: Headless preview of a sampled grid using Skia CPU raster surfaces; RGBA8 and PNG output.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use pixelgrid_core::{GridSampler, Rgb};
use skia_safe as skia;

/// Layout of the preview image, in pixels.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Side of one square cell.
    pub cell_px: i32,
    /// Space between neighbouring cells.
    pub gap_px: i32,
    /// Border around the whole panel.
    pub padding: i32,
    pub background: skia::Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_px: 48,
            gap_px: 6,
            padding: 12,
            background: skia::Color::from_argb(255, 18, 18, 20), // near-black
        }
    }
}

impl RenderOptions {
    /// Output size for a `width` x `height` grid; errors if a side is zero or
    /// does not fit an `i32` surface.
    pub fn surface_size(&self, width: usize, height: usize) -> Result<(i32, i32)> {
        anyhow::ensure!(width >= 1 && height >= 1, "grid must be at least 1x1, got {width}x{height}");
        let span = |n: usize| -> Option<i32> {
            let n = i32::try_from(n).ok()?;
            let cells = n.checked_mul(self.cell_px)?;
            let gaps = (n - 1).checked_mul(self.gap_px)?;
            self.padding.checked_mul(2)?.checked_add(cells)?.checked_add(gaps)
        };
        match (span(width), span(height)) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => anyhow::bail!("{width}x{height} grid is too large to render"),
        }
    }

    /// Top-left corner of the cell at `(row, col)`.
    pub fn cell_origin(&self, row: usize, col: usize) -> (i32, i32) {
        let pitch = self.cell_px + self.gap_px;
        (self.padding + col as i32 * pitch, self.padding + row as i32 * pitch)
    }
}

/// RGBA8 pixels plus `(width, height, stride)`.
pub type Rgba8 = (Vec<u8>, u32, u32, usize);

/// Rasterize a row-major cell buffer and read it back as unpremultiplied RGBA8.
pub fn render_to_rgba8(pixels: &[Rgb], width: usize, height: usize, opts: &RenderOptions) -> Result<Rgba8> {
    anyhow::ensure!(
        width.checked_mul(height) == Some(pixels.len()),
        "buffer holds {} cells, expected {}x{}",
        pixels.len(),
        width,
        height
    );
    anyhow::ensure!(opts.cell_px > 0, "cell_px must be positive");
    anyhow::ensure!(opts.gap_px >= 0 && opts.padding >= 0, "gap and padding must be non-negative");

    let (w, h) = opts.surface_size(width, height)?;
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;

    {
        let canvas = surface.canvas();
        canvas.clear(opts.background);
        draw_cells(canvas, pixels, width, opts);
    }

    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut out = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut out, stride, (0, 0)) {
        anyhow::bail!("reading back {w}x{h} surface failed");
    }
    log::debug!("rendered {}x{} grid to {}x{} rgba", width, height, w, h);
    Ok((out, w as u32, h as u32, stride))
}

/// Render and encode as PNG in memory.
pub fn render_to_png_bytes(pixels: &[Rgb], width: usize, height: usize, opts: &RenderOptions) -> Result<Vec<u8>> {
    let (rgba, w, h, _) = render_to_rgba8(pixels, width, height, opts)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| anyhow::anyhow!("rgba buffer does not match {w}x{h}"))?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encode PNG failed")?;
    Ok(bytes)
}

/// Render the buffer to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(
    pixels: &[Rgb],
    width: usize,
    height: usize,
    opts: &RenderOptions,
    output_png_path: impl AsRef<Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(pixels, width, height, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Convenience wrapper holding options for repeated grid previews.
pub struct SkiaRenderer {
    pub opts: RenderOptions,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self { Self { opts } }

    pub fn rgba8<const W: usize, const H: usize>(&self, grid: &GridSampler<Rgb, W, H>) -> Result<Rgba8> {
        render_to_rgba8(grid.pixels(), W, H, &self.opts)
    }

    pub fn png_bytes<const W: usize, const H: usize>(&self, grid: &GridSampler<Rgb, W, H>) -> Result<Vec<u8>> {
        render_to_png_bytes(grid.pixels(), W, H, &self.opts)
    }

    pub fn write_png<const W: usize, const H: usize>(
        &self,
        grid: &GridSampler<Rgb, W, H>,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        render_to_png(grid.pixels(), W, H, &self.opts, path)
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}

// ---- helpers ----------------------------------------------------------------

fn draw_cells(canvas: &skia::Canvas, pixels: &[Rgb], width: usize, opts: &RenderOptions) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(false);
    paint.set_style(skia::paint::Style::Fill);

    let side = opts.cell_px as f32;
    for (i, c) in pixels.iter().enumerate() {
        let (x, y) = opts.cell_origin(i / width, i % width);
        paint.set_color(skia::Color::from_rgb(c.r, c.g, c.b));
        canvas.draw_rect(skia::Rect::from_xywh(x as f32, y as f32, side, side), &paint);
    }
}
