//! Rendering module for brix.
//!
//! This module owns the image pipeline: palette quantization, tile
//! tinting, mosaic composition and PNG output.

mod mosaic;
mod overlay;
mod png;
mod quantize;
mod texture;

pub use mosaic::{compose, render_mosaic, Mosaic, UsageStats, NO_MATCH_KEY};
pub use overlay::{overlay_effect, tint_tile};
pub use png::{decode_image, read_image, write_png};
pub use quantize::{colour_table, grid_size, quantize_image, BrickGrid, TABLE_LEN};
pub use texture::Texture;
