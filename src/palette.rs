//! Color palettes for swatch grids, and the naming of their entries.

use std::collections::HashMap;

use crate::color::model::RgbaColor;
use crate::named::{NamedColor, NamedColorCatalog};

/// Anything that can supply an ordered list of colors to a swatch grid.
pub trait ColorPalette {
    fn colors(&self) -> &[RgbaColor];

    /// The palette colors paired with unique display names.
    fn named_colors(&self) -> Vec<NamedColor> {
        resolve_palette_names(self.colors())
    }
}

/// The seven rainbow hues followed by white and black.
static BASIC_COLORS: [RgbaColor; 9] = [
    RgbaColor::rgb(0xFF, 0x00, 0x00), // red
    RgbaColor::rgb(0xFF, 0xA5, 0x00), // orange
    RgbaColor::rgb(0xFF, 0xFF, 0x00), // yellow
    RgbaColor::rgb(0x00, 0x80, 0x00), // green
    RgbaColor::rgb(0x00, 0x00, 0xFF), // blue
    RgbaColor::rgb(0x4B, 0x00, 0x82), // indigo
    RgbaColor::rgb(0xEE, 0x82, 0xEE), // violet
    RgbaColor::rgb(0xFF, 0xFF, 0xFF), // white
    RgbaColor::rgb(0x00, 0x00, 0x00), // black
];

/// A curated 7x7 grid stored row by row. Some neutrals appear twice on purpose.
static FLUENT_COLORS: [RgbaColor; 49] = [
    // reds and pinks
    RgbaColor::rgb(239, 68, 68),
    RgbaColor::rgb(244, 63, 94),
    RgbaColor::rgb(236, 72, 153),
    RgbaColor::rgb(217, 70, 239),
    RgbaColor::rgb(168, 85, 247),
    RgbaColor::rgb(139, 92, 246),
    RgbaColor::rgb(99, 102, 241),
    // blues
    RgbaColor::rgb(75, 85, 99),
    RgbaColor::rgb(59, 130, 246),
    RgbaColor::rgb(14, 165, 233),
    RgbaColor::rgb(6, 182, 212),
    RgbaColor::rgb(20, 184, 166),
    RgbaColor::rgb(16, 185, 129),
    RgbaColor::rgb(34, 197, 94),
    // greens, limes and ambers
    RgbaColor::rgb(55, 65, 81),
    RgbaColor::rgb(107, 114, 128),
    RgbaColor::rgb(132, 204, 22),
    RgbaColor::rgb(234, 179, 8),
    RgbaColor::rgb(249, 115, 22),
    RgbaColor::rgb(245, 158, 11),
    RgbaColor::rgb(234, 88, 12),
    // browns and warm neutrals
    RgbaColor::rgb(120, 113, 108),
    RgbaColor::rgb(168, 162, 158),
    RgbaColor::rgb(124, 58, 237),
    RgbaColor::rgb(22, 163, 74),
    RgbaColor::rgb(202, 138, 4),
    RgbaColor::rgb(220, 38, 38),
    RgbaColor::rgb(100, 116, 139),
    // light pastels
    RgbaColor::rgb(254, 202, 202),
    RgbaColor::rgb(254, 226, 226),
    RgbaColor::rgb(253, 230, 138),
    RgbaColor::rgb(187, 247, 208),
    RgbaColor::rgb(199, 210, 254),
    RgbaColor::rgb(191, 219, 254),
    RgbaColor::rgb(224, 231, 255),
    // desaturated grays
    RgbaColor::rgb(156, 163, 175),
    RgbaColor::rgb(229, 231, 235),
    RgbaColor::rgb(209, 213, 219),
    RgbaColor::rgb(107, 114, 128),
    RgbaColor::rgb(55, 65, 81),
    RgbaColor::rgb(31, 41, 55),
    RgbaColor::rgb(17, 24, 39),
    // extra brights
    RgbaColor::rgb(255, 255, 255),
    RgbaColor::rgb(220, 252, 231),
    RgbaColor::rgb(254, 240, 138),
    RgbaColor::rgb(253, 186, 116),
    RgbaColor::rgb(252, 165, 165),
    RgbaColor::rgb(192, 132, 252),
    RgbaColor::rgb(0, 0, 0),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BasicPalette;

impl ColorPalette for BasicPalette {
    fn colors(&self) -> &[RgbaColor] {
        &BASIC_COLORS
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FluentPalette;

impl FluentPalette {
    pub const ROWS: usize = 7;
    pub const COLUMNS: usize = 7;

    /// The grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'static [RgbaColor]> {
        FLUENT_COLORS.chunks(Self::COLUMNS)
    }
}

impl ColorPalette for FluentPalette {
    fn colors(&self) -> &[RgbaColor] {
        &FLUENT_COLORS
    }
}

/// A caller supplied palette.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomPalette {
    pub name: String,
    pub colors: Vec<RgbaColor>,
}

impl CustomPalette {
    pub fn new(name: impl Into<String>, colors: impl IntoIterator<Item = RgbaColor>) -> Self {
        Self {
            name: name.into(),
            colors: colors.into_iter().collect(),
        }
    }
}

impl ColorPalette for CustomPalette {
    fn colors(&self) -> &[RgbaColor] {
        &self.colors
    }
}

/// The built-in palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    Basic,
    #[default]
    Fluent,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 2] = [PaletteKind::Basic, PaletteKind::Fluent];

    pub fn name(self) -> &'static str {
        match self {
            PaletteKind::Basic => "Basic",
            PaletteKind::Fluent => "Fluent",
        }
    }

    pub fn colors(self) -> &'static [RgbaColor] {
        match self {
            PaletteKind::Basic => &BASIC_COLORS,
            PaletteKind::Fluent => &FLUENT_COLORS,
        }
    }
}

impl ColorPalette for PaletteKind {
    fn colors(&self) -> &[RgbaColor] {
        PaletteKind::colors(*self)
    }
}

pub fn palette_colors(kind: PaletteKind) -> &'static [RgbaColor] {
    kind.colors()
}

/// Name every color after its closest entry in the built-in catalog.
///
/// The first color to land on a name keeps it unchanged; later ones get
/// ` (2)`, ` (3)`, ... appended. The result is aligned 1:1 with `colors`.
pub fn resolve_palette_names(colors: &[RgbaColor]) -> Vec<NamedColor> {
    resolve_palette_names_with(&NamedColorCatalog::standard(), colors)
}

/// [`resolve_palette_names`] against any catalog. Colors that find no entry
/// (empty catalog) are named by their hex value.
pub fn resolve_palette_names_with(
    catalog: &NamedColorCatalog<'_>,
    colors: &[RgbaColor],
) -> Vec<NamedColor> {
    let mut name_counts: HashMap<String, usize> = HashMap::new();

    colors
        .iter()
        .map(|&color| {
            let base_name = match catalog.find_closest(color) {
                Some(closest) => closest.name.to_string(),
                None => color.to_hex(),
            };

            let count = name_counts.entry(base_name.clone()).or_insert(0);
            *count += 1;

            let name = if *count == 1 {
                base_name
            } else {
                format!("{base_name} ({count})")
            };
            NamedColor::new(name, color)
        })
        .collect()
}
