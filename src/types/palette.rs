//! Brick palettes: named, ordered code-to-colour tables.

use std::fmt;

use super::Colour;

/// Stable identifier for one brick colour (a short numeric string, e.g. `"024"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrickCode(&'static str);

impl BrickCode {
    /// Create a code from its canonical string form.
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    /// The canonical string form of the code.
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for BrickCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A named, ordered collection of brick colours.
///
/// Declaration order is meaningful: quantization tables repeat the first
/// entry as padding, and the merged catalog view gives earlier palettes
/// priority on code collisions.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Palette name
    pub name: &'static str,

    /// Entries in declaration order
    entries: Vec<(BrickCode, Colour)>,
}

impl Palette {
    /// Create a new empty palette.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// Create a palette from a static entry table, preserving its order.
    pub fn from_entries(name: &'static str, entries: &[(&'static str, Colour)]) -> Self {
        Self {
            name,
            entries: entries
                .iter()
                .map(|&(code, colour)| (BrickCode::new(code), colour))
                .collect(),
        }
    }

    /// Get a colour by brick code.
    pub fn get(&self, code: BrickCode) -> Option<Colour> {
        self.entries
            .iter()
            .find(|&&(c, _)| c == code)
            .map(|&(_, colour)| colour)
    }

    /// Find the brick code bound to an exact colour value.
    ///
    /// This is a linear scan for an exact triple match, not a nearest-colour
    /// search; it only succeeds for colours the quantizer constrained to
    /// this palette's entries.
    pub fn code_for_colour(&self, colour: Colour) -> Option<BrickCode> {
        self.entries
            .iter()
            .find(|&&(_, c)| c == colour)
            .map(|&(code, _)| code)
    }

    /// Check if the palette defines a code.
    pub fn contains(&self, code: BrickCode) -> bool {
        self.entries.iter().any(|&(c, _)| c == code)
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (BrickCode, Colour)> + '_ {
        self.entries.iter().copied()
    }

    /// Iterate colours in declaration order.
    pub fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.entries.iter().map(|&(_, colour)| colour)
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a code declared more than once, if any.
    pub fn duplicate_code(&self) -> Option<BrickCode> {
        for (i, &(code, _)) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|&(c, _)| c == code) {
                return Some(code);
            }
        }
        None
    }

    /// Merge another palette into this one.
    ///
    /// Existing entries win: merging palettes in declaration order yields a
    /// first-write-priority union.
    pub fn merge_from(&mut self, other: &Palette) {
        for (code, colour) in other.iter() {
            if !self.contains(code) {
                self.entries.push((code, colour));
            }
        }
    }
}
