//! A fixed table of named reference colors and nearest-color search over it.
//!
//! Distances are squared Euclidean distances in RGB byte space; alpha is
//! ignored. Table order is significant: when several entries are equally close
//! the earliest one wins.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::color::model::RgbaColor;

/// A display name paired with a color.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedColor {
    pub name: Cow<'static, str>,
    pub color: RgbaColor,
}

impl NamedColor {
    pub fn new(name: impl Into<Cow<'static, str>>, color: RgbaColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub const fn new_static(name: &'static str, color: RgbaColor) -> Self {
        Self {
            name: Cow::Borrowed(name),
            color,
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

pub static NAMED_COLORS: [NamedColor; 150] = [
    // Reds and pinks
    NamedColor::new_static("Indian Red", RgbaColor::rgb(0xCD, 0x5C, 0x5C)),
    NamedColor::new_static("Light Salmon", RgbaColor::rgb(0xFF, 0xA0, 0x7A)),
    NamedColor::new_static("Dark Salmon", RgbaColor::rgb(0xE9, 0x96, 0x7A)),
    NamedColor::new_static("Salmon", RgbaColor::rgb(0xFA, 0x80, 0x72)),
    NamedColor::new_static("Crimson", RgbaColor::rgb(0xDC, 0x14, 0x3C)),
    NamedColor::new_static("Red", RgbaColor::rgb(0xFF, 0x00, 0x00)),
    NamedColor::new_static("Firebrick", RgbaColor::rgb(0xB2, 0x22, 0x22)),
    NamedColor::new_static("Dark Red", RgbaColor::rgb(0x8B, 0x00, 0x00)),
    NamedColor::new_static("Pink", RgbaColor::rgb(0xFF, 0xC0, 0xCB)),
    NamedColor::new_static("Light Pink", RgbaColor::rgb(0xFF, 0xB6, 0xC1)),
    NamedColor::new_static("Hot Pink", RgbaColor::rgb(0xFF, 0x69, 0xB4)),
    NamedColor::new_static("Deep Pink", RgbaColor::rgb(0xFF, 0x14, 0x93)),
    NamedColor::new_static("Pale Violet Red", RgbaColor::rgb(0xDB, 0x70, 0x93)),
    NamedColor::new_static("Light Coral", RgbaColor::rgb(0xF0, 0x80, 0x80)),
    NamedColor::new_static("Maroon", RgbaColor::rgb(0x80, 0x00, 0x00)),
    NamedColor::new_static("Rosy Brown", RgbaColor::rgb(0xBC, 0x8F, 0x8F)),
    NamedColor::new_static("Misty Rose", RgbaColor::rgb(0xFF, 0xE4, 0xE1)),
    NamedColor::new_static("Lavender Blush", RgbaColor::rgb(0xFF, 0xF0, 0xF5)),
    NamedColor::new_static("Medium Violet Red", RgbaColor::rgb(0xC7, 0x15, 0x85)),

    // Oranges
    NamedColor::new_static("Coral", RgbaColor::rgb(0xFF, 0x7F, 0x50)),
    NamedColor::new_static("Tomato", RgbaColor::rgb(0xFF, 0x63, 0x47)),
    NamedColor::new_static("Orange Red", RgbaColor::rgb(0xFF, 0x45, 0x00)),
    NamedColor::new_static("Dark Orange", RgbaColor::rgb(0xFF, 0x8C, 0x00)),
    NamedColor::new_static("Orange", RgbaColor::rgb(0xFF, 0xA5, 0x00)),
    NamedColor::new_static("Peach Puff", RgbaColor::rgb(0xFF, 0xDA, 0xB9)),
    NamedColor::new_static("Papaya Whip", RgbaColor::rgb(0xFF, 0xEF, 0xD5)),
    NamedColor::new_static("Sandy Brown", RgbaColor::rgb(0xF4, 0xA4, 0x60)),

    // Yellows and golds
    NamedColor::new_static("Gold", RgbaColor::rgb(0xFF, 0xD7, 0x00)),
    NamedColor::new_static("Yellow", RgbaColor::rgb(0xFF, 0xFF, 0x00)),
    NamedColor::new_static("Light Yellow", RgbaColor::rgb(0xFF, 0xFF, 0xE0)),
    NamedColor::new_static("Lemon Chiffon", RgbaColor::rgb(0xFF, 0xFA, 0xCD)),
    NamedColor::new_static("Pale Goldenrod", RgbaColor::rgb(0xEE, 0xE8, 0xAA)),
    NamedColor::new_static("Khaki", RgbaColor::rgb(0xF0, 0xE6, 0x8C)),
    NamedColor::new_static("Dark Khaki", RgbaColor::rgb(0xBD, 0xB7, 0x6B)),
    NamedColor::new_static("Mustard", RgbaColor::rgb(0xFF, 0xDB, 0x58)),
    NamedColor::new_static("Goldenrod", RgbaColor::rgb(0xDA, 0xA5, 0x20)),
    NamedColor::new_static("Dark Goldenrod", RgbaColor::rgb(0xB8, 0x86, 0x0B)),
    NamedColor::new_static("Moccasin", RgbaColor::rgb(0xFF, 0xE4, 0xB5)),
    NamedColor::new_static("Wheat", RgbaColor::rgb(0xF5, 0xDE, 0xB3)),

    // Greens
    NamedColor::new_static("Green Yellow", RgbaColor::rgb(0xAD, 0xFF, 0x2F)),
    NamedColor::new_static("Chartreuse", RgbaColor::rgb(0x7F, 0xFF, 0x00)),
    NamedColor::new_static("Lawn Green", RgbaColor::rgb(0x7C, 0xFC, 0x00)),
    NamedColor::new_static("Lime", RgbaColor::rgb(0x00, 0xFF, 0x00)),
    NamedColor::new_static("Lime Green", RgbaColor::rgb(0x32, 0xCD, 0x32)),
    NamedColor::new_static("Pale Green", RgbaColor::rgb(0x98, 0xFB, 0x98)),
    NamedColor::new_static("Light Green", RgbaColor::rgb(0x90, 0xEE, 0x90)),
    NamedColor::new_static("Medium Sea Green", RgbaColor::rgb(0x3C, 0xB3, 0x71)),
    NamedColor::new_static("Sea Green", RgbaColor::rgb(0x2E, 0x8B, 0x57)),
    NamedColor::new_static("Forest Green", RgbaColor::rgb(0x22, 0x8B, 0x22)),
    NamedColor::new_static("Green", RgbaColor::rgb(0x00, 0x80, 0x00)),
    NamedColor::new_static("Dark Green", RgbaColor::rgb(0x00, 0x64, 0x00)),
    NamedColor::new_static("Olive", RgbaColor::rgb(0x80, 0x80, 0x00)),
    NamedColor::new_static("Dark Olive Green", RgbaColor::rgb(0x55, 0x6B, 0x2F)),
    NamedColor::new_static("Aquamarine", RgbaColor::rgb(0x7F, 0xFF, 0xD4)),
    NamedColor::new_static("Mint", RgbaColor::rgb(0x3E, 0xB4, 0x89)),
    NamedColor::new_static("Jade", RgbaColor::rgb(0x00, 0xA8, 0x6B)),
    NamedColor::new_static("Emerald", RgbaColor::rgb(0x50, 0xC8, 0x78)),
    NamedColor::new_static("Celadon", RgbaColor::rgb(0xAC, 0xE1, 0xAF)),
    NamedColor::new_static("Olive Drab", RgbaColor::rgb(0x6B, 0x8E, 0x23)),
    NamedColor::new_static("Yellow Green", RgbaColor::rgb(0x9A, 0xCD, 0x32)),
    NamedColor::new_static("Spring Green", RgbaColor::rgb(0x00, 0xFF, 0x7F)),
    NamedColor::new_static("Medium Spring Green", RgbaColor::rgb(0x00, 0xFA, 0x9A)),
    NamedColor::new_static("Medium Aquamarine", RgbaColor::rgb(0x66, 0xCD, 0xAA)),
    NamedColor::new_static("Dark Sea Green", RgbaColor::rgb(0x8F, 0xBC, 0x8F)),

    // Cyans and blues
    NamedColor::new_static("Cyan", RgbaColor::rgb(0x00, 0xFF, 0xFF)),
    NamedColor::new_static("Light Cyan", RgbaColor::rgb(0xE0, 0xFF, 0xFF)),
    NamedColor::new_static("Pale Turquoise", RgbaColor::rgb(0xAF, 0xEE, 0xEE)),
    NamedColor::new_static("Turquoise", RgbaColor::rgb(0x40, 0xE0, 0xD0)),
    NamedColor::new_static("Medium Turquoise", RgbaColor::rgb(0x48, 0xD1, 0xCC)),
    NamedColor::new_static("Dark Turquoise", RgbaColor::rgb(0x00, 0xCE, 0xD1)),
    NamedColor::new_static("Cadet Blue", RgbaColor::rgb(0x5F, 0x9E, 0xA0)),
    NamedColor::new_static("Light Steel Blue", RgbaColor::rgb(0xB0, 0xC4, 0xDE)),
    NamedColor::new_static("Steel Blue", RgbaColor::rgb(0x46, 0x82, 0xB4)),
    NamedColor::new_static("Powder Blue", RgbaColor::rgb(0xB0, 0xE0, 0xE6)),
    NamedColor::new_static("Light Blue", RgbaColor::rgb(0xAD, 0xD8, 0xE6)),
    NamedColor::new_static("Sky Blue", RgbaColor::rgb(0x87, 0xCE, 0xEB)),
    NamedColor::new_static("Light Sky Blue", RgbaColor::rgb(0x87, 0xCE, 0xFA)),
    NamedColor::new_static("Deep Sky Blue", RgbaColor::rgb(0x00, 0xBF, 0xFF)),
    NamedColor::new_static("Dodger Blue", RgbaColor::rgb(0x1E, 0x90, 0xFF)),
    NamedColor::new_static("Cornflower Blue", RgbaColor::rgb(0x64, 0x95, 0xED)),
    NamedColor::new_static("Royal Blue", RgbaColor::rgb(0x41, 0x69, 0xE1)),
    NamedColor::new_static("Blue", RgbaColor::rgb(0x00, 0x00, 0xFF)),
    NamedColor::new_static("Medium Blue", RgbaColor::rgb(0x00, 0x00, 0xCD)),
    NamedColor::new_static("Dark Blue", RgbaColor::rgb(0x00, 0x00, 0x8B)),
    NamedColor::new_static("Navy", RgbaColor::rgb(0x00, 0x00, 0x80)),
    NamedColor::new_static("Midnight Blue", RgbaColor::rgb(0x19, 0x19, 0x70)),
    NamedColor::new_static("Sapphire", RgbaColor::rgb(0x0F, 0x52, 0xBA)),
    NamedColor::new_static("Light Sea Green", RgbaColor::rgb(0x20, 0xB2, 0xAA)),
    NamedColor::new_static("Teal", RgbaColor::rgb(0x00, 0x80, 0x80)),
    NamedColor::new_static("Dark Cyan", RgbaColor::rgb(0x00, 0x8B, 0x8B)),

    // Purples, violets and magentas
    NamedColor::new_static("Lavender", RgbaColor::rgb(0xE6, 0xE6, 0xFA)),
    NamedColor::new_static("Thistle", RgbaColor::rgb(0xD8, 0xBF, 0xD8)),
    NamedColor::new_static("Plum", RgbaColor::rgb(0xDD, 0xA0, 0xDD)),
    NamedColor::new_static("Violet", RgbaColor::rgb(0xEE, 0x82, 0xEE)),
    NamedColor::new_static("Orchid", RgbaColor::rgb(0xDA, 0x70, 0xD6)),
    NamedColor::new_static("Fuchsia", RgbaColor::rgb(0xFF, 0x00, 0xFF)),
    NamedColor::new_static("Magenta", RgbaColor::rgb(0xFF, 0x00, 0xFF)),
    NamedColor::new_static("Medium Orchid", RgbaColor::rgb(0xBA, 0x55, 0xD3)),
    NamedColor::new_static("Medium Purple", RgbaColor::rgb(0x93, 0x70, 0xDB)),
    NamedColor::new_static("Amethyst", RgbaColor::rgb(0x99, 0x66, 0xCC)),
    NamedColor::new_static("Blue Violet", RgbaColor::rgb(0x8A, 0x2B, 0xE2)),
    NamedColor::new_static("Dark Violet", RgbaColor::rgb(0x94, 0x00, 0xD3)),
    NamedColor::new_static("Dark Orchid", RgbaColor::rgb(0x99, 0x32, 0xCC)),
    NamedColor::new_static("Dark Magenta", RgbaColor::rgb(0x8B, 0x00, 0x8B)),
    NamedColor::new_static("Purple", RgbaColor::rgb(0x80, 0x00, 0x80)),
    NamedColor::new_static("Indigo", RgbaColor::rgb(0x4B, 0x00, 0x82)),
    NamedColor::new_static("Slate Blue", RgbaColor::rgb(0x6A, 0x5A, 0xCD)),
    NamedColor::new_static("Dark Slate Blue", RgbaColor::rgb(0x48, 0x3D, 0x8B)),
    NamedColor::new_static("Lilac", RgbaColor::rgb(0xC8, 0xA2, 0xC8)),
    NamedColor::new_static("Medium Slate Blue", RgbaColor::rgb(0x7B, 0x68, 0xEE)),
    NamedColor::new_static("Rebecca Purple", RgbaColor::rgb(0x66, 0x33, 0x99)),

    // Whites and beiges
    NamedColor::new_static("White", RgbaColor::rgb(0xFF, 0xFF, 0xFF)),
    NamedColor::new_static("Snow", RgbaColor::rgb(0xFF, 0xFA, 0xFA)),
    NamedColor::new_static("Honeydew", RgbaColor::rgb(0xF0, 0xFF, 0xF0)),
    NamedColor::new_static("Mint Cream", RgbaColor::rgb(0xF5, 0xFF, 0xFA)),
    NamedColor::new_static("Azure", RgbaColor::rgb(0xF0, 0xFF, 0xFF)),
    NamedColor::new_static("Alice Blue", RgbaColor::rgb(0xF0, 0xF8, 0xFF)),
    NamedColor::new_static("Ghost White", RgbaColor::rgb(0xF8, 0xF8, 0xFF)),
    NamedColor::new_static("Seashell", RgbaColor::rgb(0xFF, 0xF5, 0xEE)),
    NamedColor::new_static("Beige", RgbaColor::rgb(0xF5, 0xF5, 0xDC)),
    NamedColor::new_static("Old Lace", RgbaColor::rgb(0xFD, 0xF5, 0xE6)),
    NamedColor::new_static("Ivory", RgbaColor::rgb(0xFF, 0xFF, 0xF0)),
    NamedColor::new_static("Blanched Almond", RgbaColor::rgb(0xFF, 0xEB, 0xCD)),
    NamedColor::new_static("Cream", RgbaColor::rgb(0xFF, 0xFD, 0xD0)),
    NamedColor::new_static("Linen", RgbaColor::rgb(0xFA, 0xF0, 0xE6)),
    NamedColor::new_static("Antique White", RgbaColor::rgb(0xFA, 0xEB, 0xD7)),
    NamedColor::new_static("Bisque", RgbaColor::rgb(0xFF, 0xE4, 0xC4)),
    NamedColor::new_static("Navajo White", RgbaColor::rgb(0xFF, 0xDE, 0xAD)),
    NamedColor::new_static("White Smoke", RgbaColor::rgb(0xF5, 0xF5, 0xF5)),

    // Browns and grays
    NamedColor::new_static("Brown", RgbaColor::rgb(0xA5, 0x2A, 0x2A)),
    NamedColor::new_static("Sienna", RgbaColor::rgb(0xA0, 0x52, 0x2D)),
    NamedColor::new_static("Saddle Brown", RgbaColor::rgb(0x8B, 0x45, 0x13)),
    NamedColor::new_static("Ochre", RgbaColor::rgb(0xCC, 0x77, 0x22)),
    NamedColor::new_static("Chocolate", RgbaColor::rgb(0xD2, 0x69, 0x1E)),
    NamedColor::new_static("Peru", RgbaColor::rgb(0xCD, 0x85, 0x3F)),
    NamedColor::new_static("Tan", RgbaColor::rgb(0xD2, 0xB4, 0x8C)),
    NamedColor::new_static("Terracotta", RgbaColor::rgb(0xE2, 0x72, 0x5B)),
    NamedColor::new_static("Sepia", RgbaColor::rgb(0x70, 0x42, 0x14)),
    NamedColor::new_static("Slate Gray", RgbaColor::rgb(0x70, 0x80, 0x90)),
    NamedColor::new_static("Light Slate Gray", RgbaColor::rgb(0x77, 0x88, 0x99)),
    NamedColor::new_static("Dim Gray", RgbaColor::rgb(0x69, 0x69, 0x69)),
    NamedColor::new_static("Gray", RgbaColor::rgb(0x80, 0x80, 0x80)),
    NamedColor::new_static("Dark Gray", RgbaColor::rgb(0xA9, 0xA9, 0xA9)),
    NamedColor::new_static("Silver", RgbaColor::rgb(0xC0, 0xC0, 0xC0)),
    NamedColor::new_static("Light Gray", RgbaColor::rgb(0xD3, 0xD3, 0xD3)),
    NamedColor::new_static("Charcoal", RgbaColor::rgb(0x36, 0x45, 0x4F)),
    NamedColor::new_static("Burlywood", RgbaColor::rgb(0xDE, 0xB8, 0x87)),
    NamedColor::new_static("Dark Slate Gray", RgbaColor::rgb(0x2F, 0x4F, 0x4F)),
    NamedColor::new_static("Gainsboro", RgbaColor::rgb(0xDC, 0xDC, 0xDC)),
    NamedColor::new_static("Black", RgbaColor::rgb(0x00, 0x00, 0x00)),
];

/// Squared distance between the RGB parts of two colors.
#[inline]
pub fn distance_squared(a: RgbaColor, b: RgbaColor) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}

// "Dodger Blue", "dodger-blue" and "DODGERBLUE" share a key
fn name_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

static NAME_INDEX: OnceLock<HashMap<String, usize>> = OnceLock::new();

#[inline]
fn build_name_index() -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(NAMED_COLORS.len());
    for (i, entry) in NAMED_COLORS.iter().enumerate() {
        index.entry(name_key(&entry.name)).or_insert(i);
    }
    index
}

#[inline]
fn get_name_index() -> &'static HashMap<String, usize> {
    NAME_INDEX.get_or_init(build_name_index)
}

/// A read-only view over an ordered list of named colors.
#[derive(Clone, Copy, Debug)]
pub struct NamedColorCatalog<'a> {
    entries: &'a [NamedColor],
}

impl NamedColorCatalog<'static> {
    /// The built-in table of web/CSS style color names.
    pub fn standard() -> Self {
        Self::new(&NAMED_COLORS)
    }
}

impl Default for NamedColorCatalog<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> NamedColorCatalog<'a> {
    pub const fn new(entries: &'a [NamedColor]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'a [NamedColor] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry nearest to `target`, or `None` for an empty catalog.
    pub fn find_closest(&self, target: RgbaColor) -> Option<&'a NamedColor> {
        let (first, rest) = self.entries.split_first()?;

        let mut closest = first;
        let mut min_distance = distance_squared(target, first.color);
        for entry in rest {
            if min_distance == 0 {
                break;
            }
            let distance = distance_squared(target, entry.color);
            // strict comparison keeps the earliest of equally close entries
            if distance < min_distance {
                min_distance = distance;
                closest = entry;
            }
        }

        Some(closest)
    }

    /// Exact lookup ignoring case, spaces and punctuation.
    pub fn find_by_name(&self, name: &str) -> Option<&'a NamedColor> {
        if std::ptr::eq(self.entries, NAMED_COLORS.as_slice()) {
            return color_by_name(name);
        }

        let key = name_key(name);
        self.entries.iter().find(|entry| name_key(&entry.name) == key)
    }
}

/// Nearest entry of the built-in table.
pub fn find_closest_color(target: RgbaColor) -> &'static NamedColor {
    NamedColorCatalog::standard()
        .find_closest(target)
        .unwrap_or(&NAMED_COLORS[0])
}

/// Built-in entry with the given name, using a lazily built index.
pub fn color_by_name(name: &str) -> Option<&'static NamedColor> {
    get_name_index()
        .get(&name_key(name))
        .map(|&i| &NAMED_COLORS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        let red = find_closest_color(RgbaColor::rgb(255, 0, 0));
        assert_eq!(red.name, "Red");
        assert_eq!(red.color, RgbaColor::rgb(255, 0, 0));

        assert_eq!(find_closest_color(RgbaColor::BLACK).name, "Black");
        assert_eq!(find_closest_color(RgbaColor::WHITE).name, "White");
    }

    #[test]
    fn alpha_is_ignored() {
        assert_eq!(
            find_closest_color(RgbaColor::rgba(255, 0, 0, 0)).name,
            "Red"
        );
    }

    #[test]
    fn nearest_neighbour() {
        assert_eq!(find_closest_color(RgbaColor::rgb(250, 5, 5)).name, "Red");
        assert_eq!(find_closest_color(RgbaColor::rgb(2, 0, 120)).name, "Navy");
    }

    #[test]
    fn ties_resolve_to_table_order() {
        // Fuchsia and Magenta share a value, Fuchsia comes first
        assert_eq!(
            find_closest_color(RgbaColor::rgb(255, 0, 255)).name,
            "Fuchsia"
        );

        let entries = [
            NamedColor::new_static("Low", RgbaColor::rgb(0, 0, 0)),
            NamedColor::new_static("High", RgbaColor::rgb(20, 20, 20)),
        ];
        let catalog = NamedColorCatalog::new(&entries);
        let midpoint = catalog.find_closest(RgbaColor::rgb(10, 10, 10));
        assert_eq!(midpoint.map(|e| e.name.as_ref()), Some("Low"));
    }

    #[test]
    fn empty_catalog_has_no_closest() {
        let catalog = NamedColorCatalog::new(&[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.find_closest(RgbaColor::WHITE), None);
    }

    #[test]
    fn table_shape() {
        let catalog = NamedColorCatalog::standard();
        assert_eq!(catalog.len(), 150);
        assert_eq!(catalog.entries()[0].name, "Indian Red");
        assert!(catalog.entries().iter().all(|e| e.color.is_opaque()));
    }

    #[test]
    fn lookup_by_name() {
        let dodger = color_by_name("dodger-blue").map(|e| e.color);
        assert_eq!(dodger, Some(RgbaColor::rgb(0x1E, 0x90, 0xFF)));
        assert_eq!(color_by_name("DodgerBlue").map(|e| e.color), dodger);
        assert_eq!(color_by_name("magenta").map(|e| e.name.as_ref()), Some("Magenta"));
        assert_eq!(color_by_name("blurple"), None);

        let catalog = NamedColorCatalog::standard();
        assert_eq!(
            catalog.find_by_name("  light sky blue ").map(|e| e.color),
            Some(RgbaColor::rgb(0x87, 0xCE, 0xFA))
        );

        let entries = [NamedColor::new_static("Brand Teal", RgbaColor::rgb(0, 128, 128))];
        let custom = NamedColorCatalog::new(&entries);
        assert_eq!(custom.find_by_name("brand_teal").map(|e| e.name.as_ref()), Some("Brand Teal"));
        assert_eq!(custom.find_by_name("teal"), None);
    }

    #[test]
    fn distance_is_squared_euclidean() {
        assert_eq!(
            distance_squared(RgbaColor::rgb(0, 0, 0), RgbaColor::rgb(255, 255, 255)),
            3 * 255 * 255
        );
        assert_eq!(
            distance_squared(RgbaColor::rgba(1, 2, 3, 0), RgbaColor::rgba(4, 6, 3, 255)),
            25
        );
    }

    #[test]
    fn display_is_the_name() {
        assert_eq!(NamedColor::new("Custom", RgbaColor::WHITE).to_string(), "Custom");
    }
}
