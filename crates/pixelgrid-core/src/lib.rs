// File: crates/pixelgrid-core/src/lib.rs
// Summary: Core library entry point; exports the grid sampler, color values, and frame encoding.

pub mod types;
pub mod scale;
pub mod grid;
pub mod sampler;
pub mod colorizer;
pub mod palette;
pub mod frame;

pub use types::{ColorValue, GridDimensions, Rgb, GRID_HEIGHT, GRID_WIDTH};
pub use scale::{Coord, NormalizedAxis};
pub use sampler::{CellCoord, GridSampler, PixelGrid};
pub use colorizer::Colorizer;
pub use palette::{Pattern, PatternKind};
pub use frame::{decode_frame, encode_frame, FrameError, FrameHeader};
