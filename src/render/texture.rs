//! The brick tile texture.
//!
//! One fixed reference image, decoded at startup, defines the per-cell tile
//! size for every mosaic composed during the process lifetime.

use std::path::Path;

use image::RgbImage;

use crate::error::{BrixError, Result};

/// The default tile shipped with the binary: a 24x24 shaded brick stud.
const DEFAULT_TILE: &[u8] = include_bytes!("../../assets/brick.png");

/// The fixed tile image every mosaic cell is stamped from.
///
/// Immutable once constructed; compositions borrow it read-only, so a single
/// instance can serve any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Texture {
    image: RgbImage,
}

impl Texture {
    /// Decode a texture from raw image bytes.
    ///
    /// A texture that cannot be decoded, or has a zero dimension, is a
    /// configuration error: the process should refuse to start rather than
    /// fail on every composition.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| BrixError::Config {
                message: format!("brick texture is not a decodable image: {}", e),
                help: None,
            })?
            .to_rgb8();

        Self::from_image(image)
    }

    /// Wrap an already-decoded tile image.
    pub fn from_image(image: RgbImage) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(BrixError::Config {
                message: "brick texture has a zero dimension".to_string(),
                help: None,
            });
        }
        Ok(Self { image })
    }

    /// Load a texture from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| BrixError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read texture: {}", e),
        })?;
        Self::from_bytes(&bytes)
    }

    /// The tile embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_bytes(DEFAULT_TILE)
    }

    /// Tile width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Tile height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The tile's pixel data.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_texture_decodes() {
        let texture = Texture::builtin().unwrap();
        assert_eq!((texture.width(), texture.height()), (24, 24));
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = Texture::from_bytes(b"not a png").unwrap_err();
        assert!(matches!(err, BrixError::Config { .. }));
    }

    #[test]
    fn test_from_image_rejects_zero_dimension() {
        let err = Texture::from_image(RgbImage::new(0, 8)).unwrap_err();
        assert!(matches!(err, BrixError::Config { .. }));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Texture::load(Path::new("/nonexistent/tile.png")).unwrap_err();
        assert!(matches!(err, BrixError::Io { .. }));
    }
}
