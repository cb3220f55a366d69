//! Palette quantization: grid resizing and nearest-colour remapping.
//!
//! Shrinks the source photo to a brick-count grid, then maps every pixel
//! onto a fixed 256-entry colour table built from one palette. Every cell of
//! the result is a colour present in that table, which is what lets the
//! composer resolve brick codes by exact match later.

use image::{imageops, RgbImage};

use crate::error::{BrixError, Result};
use crate::types::{Colour, Palette};

/// Fixed length of the quantization colour table.
pub const TABLE_LEN: usize = 256;

/// Flatten a palette into the fixed-length table the quantizer consumes.
///
/// Short palettes are padded by repeating the **first** colour until the
/// table reaches [`TABLE_LEN`]; longer palettes are truncated. Padding with
/// the first colour (rather than cycling) is deliberate: pixels that land on
/// a padding entry stay biased toward the palette's lead colour, and the
/// duplicates resolve to its brick code or, where the lead colour is
/// shadowed, to no code at all.
pub fn colour_table(palette: &Palette) -> Result<Vec<Colour>> {
    let first = palette.colours().next().ok_or_else(|| BrixError::Config {
        message: format!("palette '{}' has no colours", palette.name),
        help: None,
    })?;

    let mut table: Vec<Colour> = palette.colours().take(TABLE_LEN).collect();
    table.resize(TABLE_LEN, first);
    Ok(table)
}

/// Compute the brick-grid dimensions for a source image.
///
/// The longer source side becomes `length`; the shorter side scales
/// proportionally, floor-rounded, and is clamped to at least one brick so
/// extreme aspect ratios still produce a drawable grid.
pub fn grid_size(width: u32, height: u32, length: u32) -> Result<(u32, u32)> {
    if length == 0 {
        return Err(BrixError::InvalidInput {
            message: "target length must be positive".to_string(),
            help: None,
        });
    }
    if width == 0 || height == 0 {
        return Err(BrixError::InvalidInput {
            message: format!("image has a zero dimension ({}x{})", width, height),
            help: None,
        });
    }

    let (grid_w, grid_h) = if width > height {
        let h = (length as u64 * height as u64 / width as u64) as u32;
        (length, h)
    } else {
        let w = (width as u64 * length as u64 / height as u64) as u32;
        (w, length)
    };

    Ok((grid_w.max(1), grid_h.max(1)))
}

/// A raster whose pixels are all drawn from one quantization table.
#[derive(Debug, Clone)]
pub struct BrickGrid {
    image: RgbImage,
}

impl BrickGrid {
    /// Grid width in bricks.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Grid height in bricks.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The quantized colour of one cell.
    pub fn colour_at(&self, x: u32, y: u32) -> Colour {
        Colour::from_rgb(self.image.get_pixel(x, y).0)
    }

    /// Iterate cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, Colour)> + '_ {
        self.image
            .enumerate_pixels()
            .map(|(x, y, pixel)| (x, y, Colour::from_rgb(pixel.0)))
    }
}

/// Resize a source image to a brick grid and remap it onto a colour table.
///
/// Downscaling uses `imageops::thumbnail`, an area-averaging filter, so
/// shrinking a photo to a few dozen bricks does not alias.
pub fn quantize_image(image: &RgbImage, length: u32, table: &[Colour]) -> Result<BrickGrid> {
    if table.is_empty() {
        return Err(BrixError::InvalidInput {
            message: "colour table is empty".to_string(),
            help: None,
        });
    }

    let (grid_w, grid_h) = grid_size(image.width(), image.height(), length)?;
    let resized = imageops::thumbnail(image, grid_w, grid_h);

    let mut quantized = RgbImage::new(grid_w, grid_h);
    for (x, y, pixel) in resized.enumerate_pixels() {
        let nearest = nearest_colour(Colour::from_rgb(pixel.0), table);
        quantized.put_pixel(x, y, image::Rgb(nearest.to_rgb()));
    }

    Ok(BrickGrid { image: quantized })
}

/// Find the table entry closest to a colour.
fn nearest_colour(colour: Colour, table: &[Colour]) -> Colour {
    let mut best = table[0];
    let mut best_dist = u32::MAX;

    for &candidate in table {
        let dist = colour_distance(colour, candidate);
        if dist < best_dist {
            best_dist = dist;
            best = candidate;
        }
    }

    best
}

/// Weighted RGB colour distance.
///
/// Uses the low-cost approximation from https://www.compuphase.com/cmetric.htm
/// which weights channels based on the mean red value, giving better
/// perceptual results than plain Euclidean distance.
fn colour_distance(a: Colour, b: Colour) -> u32 {
    let rmean = (a.r as i32 + b.r as i32) / 2;
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;

    let r_term = ((512 + rmean) * dr * dr) >> 8;
    let g_term = 4 * dg * dg;
    let b_term = ((767 - rmean) * db * db) >> 8;

    (r_term + g_term + b_term) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Catalog, Palette};

    fn synthetic_palette(len: usize) -> Palette {
        // Codes leak intentionally; test-only palettes are tiny
        let entries: Vec<(&'static str, Colour)> = (0..len)
            .map(|i| {
                let code: &'static str = Box::leak(format!("{:03}", i + 1).into_boxed_str());
                (code, Colour::rgb(i as u8, i as u8, i as u8))
            })
            .collect();
        Palette::from_entries("synthetic", &entries)
    }

    #[test]
    fn test_colour_table_is_always_256() {
        for len in [1, 4, 256, 300] {
            let table = colour_table(&synthetic_palette(len)).unwrap();
            assert_eq!(table.len(), TABLE_LEN, "palette of {} colours", len);
        }
    }

    #[test]
    fn test_colour_table_pads_with_first_colour_only() {
        let catalog = Catalog::new().unwrap();
        let mono = catalog.palette("mono").unwrap();
        let table = colour_table(mono).unwrap();

        assert_eq!(table[0], Colour::rgb(0xf4, 0xf4, 0xf4));
        assert_eq!(table[1], Colour::rgb(0x02, 0x02, 0x02));
        // Everything past the real entries repeats the first colour
        for entry in &table[2..] {
            assert_eq!(*entry, table[0]);
        }
    }

    #[test]
    fn test_colour_table_truncates_past_256() {
        let table = colour_table(&synthetic_palette(300)).unwrap();
        assert_eq!(table[TABLE_LEN - 1], Colour::rgb(255, 255, 255));
    }

    #[test]
    fn test_colour_table_empty_palette_fails() {
        let err = colour_table(&Palette::new("empty")).unwrap_err();
        assert!(matches!(err, BrixError::Config { .. }));
    }

    #[test]
    fn test_grid_size_landscape() {
        assert_eq!(grid_size(10, 5, 4).unwrap(), (4, 2));
        assert_eq!(grid_size(1920, 1080, 100).unwrap(), (100, 56));
    }

    #[test]
    fn test_grid_size_portrait_and_square() {
        assert_eq!(grid_size(5, 10, 4).unwrap(), (2, 4));
        assert_eq!(grid_size(64, 64, 8).unwrap(), (8, 8));
    }

    #[test]
    fn test_grid_size_preserves_longer_side_exactly() {
        for (w, h, l) in [(300, 200, 48), (17, 90, 33), (1, 1, 7)] {
            let (gw, gh) = grid_size(w, h, l).unwrap();
            assert_eq!(gw.max(gh), l);
        }
    }

    #[test]
    fn test_grid_size_extreme_aspect_clamps_to_one() {
        // 1000:1 aspect at length 4 floors to zero height without the clamp
        assert_eq!(grid_size(1000, 1, 4).unwrap(), (4, 1));
    }

    #[test]
    fn test_grid_size_rejects_degenerate_input() {
        assert!(matches!(
            grid_size(0, 10, 4),
            Err(BrixError::InvalidInput { .. })
        ));
        assert!(matches!(
            grid_size(10, 0, 4),
            Err(BrixError::InvalidInput { .. })
        ));
        assert!(matches!(
            grid_size(10, 10, 0),
            Err(BrixError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_quantize_constrains_pixels_to_table() {
        let catalog = Catalog::new().unwrap();
        let table = colour_table(catalog.palette("solid").unwrap()).unwrap();

        // A noisy gradient image
        let image = RgbImage::from_fn(40, 30, |x, y| {
            image::Rgb([(x * 6) as u8, (y * 8) as u8, ((x + y) * 3) as u8])
        });

        let grid = quantize_image(&image, 10, &table).unwrap();
        assert_eq!((grid.width(), grid.height()), (10, 7));
        for (_, _, colour) in grid.cells() {
            assert!(table.contains(&colour), "{} not in table", colour);
        }
    }

    #[test]
    fn test_quantize_exact_palette_colours_survive() {
        let catalog = Catalog::new().unwrap();
        let table = colour_table(catalog.palette("mono").unwrap()).unwrap();

        let white = Colour::rgb(0xf4, 0xf4, 0xf4);
        let image = RgbImage::from_pixel(8, 8, image::Rgb(white.to_rgb()));
        let grid = quantize_image(&image, 4, &table).unwrap();

        for (_, _, colour) in grid.cells() {
            assert_eq!(colour, white);
        }
    }

    #[test]
    fn test_colour_distance_identical_is_zero() {
        let c = Colour::rgb(100, 150, 200);
        assert_eq!(colour_distance(c, c), 0);
    }

    #[test]
    fn test_nearest_colour_prefers_exact_match() {
        let table = [Colour::BLACK, Colour::rgb(128, 128, 128), Colour::WHITE];
        assert_eq!(nearest_colour(Colour::BLACK, &table), Colour::BLACK);
        assert_eq!(nearest_colour(Colour::rgb(250, 250, 250), &table), Colour::WHITE);
        assert_eq!(nearest_colour(Colour::rgb(120, 130, 125), &table), Colour::rgb(128, 128, 128));
    }
}
