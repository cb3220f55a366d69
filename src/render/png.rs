//! Image decoding and lossless PNG output for composed mosaics.

use std::path::Path;

use image::RgbImage;

use crate::error::{BrixError, Result};

/// Decode raw image bytes into a three-channel raster.
///
/// Any common raster format is accepted; the bytes are fully materialized
/// by the caller before this runs. Corrupt or unrecognized data is an
/// invalid-input failure, not a crash.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage> {
    let image = image::load_from_memory(bytes).map_err(|e| BrixError::InvalidInput {
        message: format!("could not decode image: {}", e),
        help: Some("Supply a PNG, JPEG, GIF, BMP or WebP image".to_string()),
    })?;
    Ok(image.to_rgb8())
}

/// Read and decode an image file.
pub fn read_image(path: &Path) -> Result<RgbImage> {
    let bytes = std::fs::read(path).map_err(|e| BrixError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;
    decode_image(&bytes)
}

/// Write a composed canvas to a PNG file.
pub fn write_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| BrixError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}
