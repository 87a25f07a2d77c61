// File: crates/pixelgrid-core/src/frame.rs
// Summary: Byte frame for output drivers: `[width, height, r, g, b, r, g, b, ...]`, row-major.

use thiserror::Error;

use crate::sampler::GridSampler;
use crate::types::Rgb;

/// Bytes preceding the pixel data.
pub const HEADER_LEN: usize = 2;
/// Bytes per encoded cell.
pub const BYTES_PER_CELL: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("frame declares a zero dimension")]
    ZeroDimension,
    #[error("grid {width}x{height} does not fit a one-byte frame header")]
    DimensionTooLarge { width: usize, height: usize },
    #[error("{extra} unexpected bytes after frame")]
    TrailingBytes { extra: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHeader {
    pub width: u8,
    pub height: u8,
}

impl FrameHeader {
    pub const fn cells(&self) -> usize { self.width as usize * self.height as usize }
    pub const fn frame_len(&self) -> usize { HEADER_LEN + self.cells() * BYTES_PER_CELL }
}

/// Serialize a grid into a freshly allocated frame.
pub fn encode_frame<const W: usize, const H: usize>(
    grid: &GridSampler<Rgb, W, H>,
) -> Result<Vec<u8>, FrameError> {
    let (width, height) = match (u8::try_from(W), u8::try_from(H)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(FrameError::DimensionTooLarge { width: W, height: H }),
    };
    let header = FrameHeader { width, height };
    let mut out = Vec::with_capacity(header.frame_len());
    out.push(width);
    out.push(height);
    for c in grid.pixels() {
        out.extend_from_slice(&[c.r, c.g, c.b]);
    }
    log::debug!("encoded {}x{} frame ({} bytes)", W, H, out.len());
    Ok(out)
}

/// Parse a frame produced by [`encode_frame`]; the length must match exactly.
pub fn decode_frame(bytes: &[u8]) -> Result<(FrameHeader, Vec<Rgb>), FrameError> {
    let &[width, height, ..] = bytes else {
        return Err(FrameError::Truncated { expected: HEADER_LEN, actual: bytes.len() });
    };
    let header = FrameHeader { width, height };
    if width == 0 || height == 0 {
        return Err(FrameError::ZeroDimension);
    }
    let expected = header.frame_len();
    if bytes.len() < expected {
        return Err(FrameError::Truncated { expected, actual: bytes.len() });
    }
    if bytes.len() > expected {
        return Err(FrameError::TrailingBytes { extra: bytes.len() - expected });
    }
    let pixels = bytes[HEADER_LEN..]
        .chunks_exact(BYTES_PER_CELL)
        .map(|c| Rgb::new(c[0], c[1], c[2]))
        .collect();
    Ok((header, pixels))
}
