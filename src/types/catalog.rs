//! The brick colour catalog: every named palette plus the merged view.

use std::collections::HashMap;

use crate::error::{BrixError, Result};

use super::data;
use super::{BrickCode, Colour, Palette};

/// Name of the derived union palette.
pub const MERGED_PALETTE: &str = "all";

/// Immutable registry of the named brick palettes.
///
/// Built once at startup and passed by shared reference to every consumer;
/// the merged view is computed during construction and never recomputed.
/// There is no interior mutability, so concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    palettes: Vec<Palette>,
    merged: Palette,
    names: HashMap<&'static str, &'static str>,
}

impl Catalog {
    /// Build the catalog from the built-in colour tables.
    pub fn new() -> Result<Self> {
        Self::from_palettes(
            vec![
                Palette::from_entries("solid", data::SOLID),
                Palette::from_entries("transparent", data::TRANSPARENT),
                Palette::from_entries("effects", data::EFFECTS),
                Palette::from_entries("mono", data::MONO),
            ],
            data::COLOUR_NAMES,
        )
    }

    /// Build a catalog from explicit palettes and a code-to-name table.
    ///
    /// The merged view unions the palettes in the order given; on code
    /// collisions the earliest palette wins. A code declared twice within a
    /// single palette is a data error and fails construction.
    pub fn from_palettes(
        palettes: Vec<Palette>,
        names: &[(&'static str, &'static str)],
    ) -> Result<Self> {
        for palette in &palettes {
            if let Some(code) = palette.duplicate_code() {
                return Err(BrixError::Config {
                    message: format!(
                        "palette '{}' declares brick code {} more than once",
                        palette.name, code
                    ),
                    help: None,
                });
            }
        }

        let mut merged = Palette::new(MERGED_PALETTE);
        for palette in &palettes {
            merged.merge_from(palette);
        }

        Ok(Self {
            palettes,
            merged,
            names: names.iter().copied().collect(),
        })
    }

    /// Look up a palette by name. `"all"` resolves to the merged view.
    pub fn palette(&self, name: &str) -> Result<&Palette> {
        if name == MERGED_PALETTE {
            return Ok(&self.merged);
        }
        self.palettes
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| BrixError::NotFound {
                message: format!("unknown palette '{}'", name),
                help: Some(format!("available palettes: {}", self.palette_names().join(", "))),
            })
    }

    /// The merged union of every palette.
    pub fn merged(&self) -> &Palette {
        &self.merged
    }

    /// The display name for a brick code.
    pub fn display_name(&self, code: BrickCode) -> Result<&'static str> {
        self.names
            .get(code.as_str())
            .copied()
            .ok_or_else(|| BrixError::NotFound {
                message: format!("no display name registered for brick code {}", code),
                help: None,
            })
    }

    /// Resolve an exact colour value to its brick code via the merged view.
    ///
    /// Returns `None` for colours not bound to any code, e.g. quantizer
    /// padding duplicates.
    pub fn code_for_colour(&self, colour: Colour) -> Option<BrickCode> {
        self.merged.code_for_colour(colour)
    }

    /// Names of every selectable palette, merged view last.
    pub fn palette_names(&self) -> Vec<&'static str> {
        self.palettes
            .iter()
            .map(|p| p.name)
            .chain(std::iter::once(MERGED_PALETTE))
            .collect()
    }

    /// Iterate the declared palettes (excluding the merged view).
    pub fn palettes(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }
}
