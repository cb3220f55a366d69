//! Mosaic composition: grid traversal, tile tinting, usage accounting.

use std::collections::{BTreeMap, HashMap};

use image::{imageops, RgbImage};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{BrixError, Result};
use crate::types::{BrickCode, Catalog, Colour};

use super::overlay::tint_tile;
use super::png::decode_image;
use super::quantize::{colour_table, quantize_image, BrickGrid};
use super::texture::Texture;

/// Stats key for cells whose colour resolves to no brick code.
pub const NO_MATCH_KEY: &str = "no-match";

/// Per-brick-code cell counts for one composed mosaic.
///
/// Every cell is counted exactly once, unresolvable cells under the
/// `no-match` sentinel, so the total always equals the grid area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageStats {
    counts: BTreeMap<Option<BrickCode>, u64>,
}

impl UsageStats {
    /// Count one cell for a resolved code, or `None` for no match.
    fn record(&mut self, code: Option<BrickCode>) {
        *self.counts.entry(code).or_insert(0) += 1;
    }

    /// Cells resolved to a specific brick code.
    pub fn count(&self, code: BrickCode) -> u64 {
        self.counts.get(&Some(code)).copied().unwrap_or(0)
    }

    /// Cells that resolved to no brick code.
    pub fn unmatched(&self) -> u64 {
        self.counts.get(&None).copied().unwrap_or(0)
    }

    /// Total cells counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct keys (codes plus the sentinel if present).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(code, count)` pairs, the sentinel first.
    pub fn iter(&self) -> impl Iterator<Item = (Option<BrickCode>, u64)> + '_ {
        self.counts.iter().map(|(&code, &count)| (code, count))
    }
}

impl Serialize for UsageStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (code, count) in &self.counts {
            match code {
                Some(code) => map.serialize_entry(code.as_str(), count)?,
                None => map.serialize_entry(NO_MATCH_KEY, count)?,
            }
        }
        map.end()
    }
}

/// A composed mosaic: the canvas plus its usage stats.
///
/// Owned by the caller; nothing in the pipeline retains a reference.
#[derive(Debug, Clone)]
pub struct Mosaic {
    /// The composed canvas, `grid width * tile width` by
    /// `grid height * tile height` pixels.
    pub image: RgbImage,
    /// Cell counts per resolved brick code.
    pub stats: UsageStats,
}

/// Compose a quantized grid into a mosaic canvas.
///
/// Walks cells in row-major order; for each cell the texture is tinted to
/// the cell colour, pasted at the cell offset, and the resolved brick code
/// counted. Tinted tiles are cached per colour, which changes nothing about
/// the output since tinting is pure.
pub fn compose(grid: &BrickGrid, texture: &Texture, catalog: &Catalog) -> Result<Mosaic> {
    let tile_w = texture.width();
    let tile_h = texture.height();

    let canvas_w = grid.width().checked_mul(tile_w);
    let canvas_h = grid.height().checked_mul(tile_h);
    let (canvas_w, canvas_h) = match (canvas_w, canvas_h) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            return Err(BrixError::InvalidInput {
                message: format!(
                    "mosaic dimensions overflow ({}x{} bricks at {}x{} per tile)",
                    grid.width(),
                    grid.height(),
                    tile_w,
                    tile_h
                ),
                help: Some("Reduce the target length".to_string()),
            })
        }
    };

    let mut canvas = RgbImage::from_pixel(canvas_w, canvas_h, image::Rgb(Colour::WHITE.to_rgb()));
    let mut stats = UsageStats::default();
    let mut tiles: HashMap<Colour, RgbImage> = HashMap::new();

    for (x, y, colour) in grid.cells() {
        let tile = tiles
            .entry(colour)
            .or_insert_with(|| tint_tile(texture.image(), colour));
        imageops::replace(
            &mut canvas,
            tile,
            (x * tile_w) as i64,
            (y * tile_h) as i64,
        );
        stats.record(catalog.code_for_colour(colour));
    }

    Ok(Mosaic {
        image: canvas,
        stats,
    })
}

/// Run the full pipeline: decode, resize, quantize, compose.
///
/// `palette_name` is validated against the catalog even though callers are
/// expected to pass a known name.
pub fn render_mosaic(
    bytes: &[u8],
    length: u32,
    palette_name: &str,
    texture: &Texture,
    catalog: &Catalog,
) -> Result<Mosaic> {
    let palette = catalog.palette(palette_name)?;
    let table = colour_table(palette)?;
    let image = decode_image(bytes)?;
    let grid = quantize_image(&image, length, &table)?;
    compose(&grid, texture, catalog)
}
