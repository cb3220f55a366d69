//! brix - Brick mosaic renderer
//!
//! A library for converting raster photos into stylized brick mosaics:
//! a grid of uniformly sized tiles, each tinted to one colour from a fixed
//! named palette, with a stud texture overlay per tile.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod render;
pub mod types;

pub use error::{BrixError, Result};
pub use manifest::{Manifest, DEFAULT_LENGTH, MANIFEST_FILENAME};
pub use render::{
    colour_table, compose, decode_image, grid_size, overlay_effect, quantize_image, read_image,
    render_mosaic, tint_tile, write_png, BrickGrid, Mosaic, Texture, UsageStats, NO_MATCH_KEY,
    TABLE_LEN,
};
pub use types::{BrickCode, Catalog, Colour, Palette, MERGED_PALETTE};
