//! Built-in brick colour tables.
//!
//! Codes and RGB values follow the manufacturer colour chart. Table order is
//! load-bearing: the merged view and quantization padding both depend on it.

use super::Colour;

/// Display names for every known brick code.
pub const COLOUR_NAMES: &[(&str, &str)] = &[
    ("001", "white"),
    ("005", "brick-yellow"),
    ("018", "nougat"),
    ("021", "bright red"),
    ("023", "bright blue"),
    ("024", "bright yellow"),
    ("026", "black"),
    ("028", "dark green"),
    ("037", "bright green"),
    ("038", "dark orange"),
    ("040", "transparent"),
    ("041", "transparent red"),
    ("042", "transparent light blue"),
    ("043", "transparent blue"),
    ("044", "transparent yellow"),
    ("047", "transparent flourescent reddish-orange"),
    ("048", "transparent green"),
    ("049", "transparent flourescent green"),
    ("102", "medium blue"),
    ("106", "bright orange"),
    ("111", "transparent brown"),
    ("113", "transparent medium reddish-violet"),
    ("119", "bright yellowish-green"),
    ("124", "bright reddish-violet"),
    ("126", "transparent bright bluish-violet"),
    ("131", "silver"),
    ("135", "sand blue"),
    ("138", "sand yellow"),
    ("140", "earth blue"),
    ("141", "earth green"),
    ("143", "transparent flourescent blue"),
    ("148", "metallic dark grey"),
    ("151", "sand green"),
    ("154", "dark red"),
    ("182", "transparent bright orange"),
    ("191", "flame yellowish orange"),
    ("192", "reddish brown"),
    ("194", "medium stone grey"),
    ("199", "dark stone grey"),
    ("208", "light stone grey"),
    ("212", "light royal blue"),
    ("221", "bright purple"),
    ("222", "light purple"),
    ("226", "cool yellow"),
    ("268", "medium lilac"),
    ("283", "light nougat"),
    ("294", "phosph. green"),
    ("297", "warm gold"),
    ("308", "dark brown"),
    ("311", "transparent bright green"),
    ("312", "medium nougat"),
];

/// Opaque standard bricks.
pub const SOLID: &[(&str, Colour)] = &[
    ("024", Colour::rgb(0xfe, 0xc4, 0x01)),
    ("106", Colour::rgb(0xe7, 0x64, 0x19)),
    ("021", Colour::rgb(0xde, 0x01, 0x0e)),
    ("221", Colour::rgb(0xde, 0x38, 0x8b)),
    ("023", Colour::rgb(0x01, 0x58, 0xa8)),
    ("028", Colour::rgb(0x01, 0x7c, 0x29)),
    ("119", Colour::rgb(0x95, 0xb9, 0x0c)),
    ("192", Colour::rgb(0x5c, 0x1d, 0x0d)),
    ("018", Colour::rgb(0xd6, 0x73, 0x41)),
    ("001", Colour::rgb(0xf4, 0xf4, 0xf4)),
    ("026", Colour::rgb(0x02, 0x02, 0x02)),
    ("226", Colour::rgb(0xff, 0xff, 0x99)),
    ("222", Colour::rgb(0xee, 0x9d, 0xc3)),
    ("212", Colour::rgb(0x87, 0xc0, 0xea)),
    ("037", Colour::rgb(0x01, 0x96, 0x25)),
    ("005", Colour::rgb(0xd9, 0xbb, 0x7c)),
    ("283", Colour::rgb(0xf5, 0xc1, 0x89)),
    ("208", Colour::rgb(0xe4, 0xe4, 0xda)),
    ("191", Colour::rgb(0xf4, 0x9b, 0x01)),
    ("124", Colour::rgb(0x9c, 0x01, 0xc6)),
    ("102", Colour::rgb(0x48, 0x8c, 0xc6)),
    ("135", Colour::rgb(0x5f, 0x75, 0x8c)),
    ("151", Colour::rgb(0x60, 0x82, 0x66)),
    ("138", Colour::rgb(0x8d, 0x75, 0x53)),
    ("038", Colour::rgb(0xa8, 0x3e, 0x16)),
    ("194", Colour::rgb(0x9c, 0x92, 0x91)),
    ("154", Colour::rgb(0x80, 0x09, 0x1c)),
    ("268", Colour::rgb(0x2d, 0x16, 0x78)),
    ("140", Colour::rgb(0x01, 0x26, 0x42)),
    ("141", Colour::rgb(0x01, 0x35, 0x17)),
    ("312", Colour::rgb(0xaa, 0x7e, 0x56)),
    ("199", Colour::rgb(0x4d, 0x5e, 0x57)),
    ("308", Colour::rgb(0x31, 0x10, 0x07)),
];

/// Transparent bricks.
pub const TRANSPARENT: &[(&str, Colour)] = &[
    ("044", Colour::rgb(0xf9, 0xef, 0x69)),
    ("182", Colour::rgb(0xec, 0x76, 0x0e)),
    ("047", Colour::rgb(0xe7, 0x66, 0x48)),
    ("041", Colour::rgb(0xe0, 0x2a, 0x29)),
    ("113", Colour::rgb(0xee, 0x9d, 0xc3)),
    ("126", Colour::rgb(0x9c, 0x95, 0xc7)),
    ("042", Colour::rgb(0xb6, 0xe0, 0xea)),
    ("043", Colour::rgb(0x50, 0xb1, 0xe8)),
    ("143", Colour::rgb(0xce, 0xe3, 0xf6)),
    ("048", Colour::rgb(0x63, 0xb2, 0x6e)),
    ("311", Colour::rgb(0x99, 0xff, 0x66)),
    ("049", Colour::rgb(0xf1, 0xed, 0x5b)),
    ("111", Colour::rgb(0xa6, 0x91, 0x82)),
    ("040", Colour::rgb(0xee, 0xee, 0xee)),
];

/// Metallic and phosphorescent special bricks.
pub const EFFECTS: &[(&str, Colour)] = &[
    ("131", Colour::rgb(0x8d, 0x94, 0x96)),
    ("297", Colour::rgb(0xaa, 0x7f, 0x2e)),
    ("148", Colour::rgb(0x49, 0x3f, 0x3b)),
    ("294", Colour::rgb(0xfe, 0xfc, 0xd5)),
];

/// Two-colour black and white set.
pub const MONO: &[(&str, Colour)] = &[
    ("001", Colour::rgb(0xf4, 0xf4, 0xf4)),
    ("026", Colour::rgb(0x02, 0x02, 0x02)),
];
