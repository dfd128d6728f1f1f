//! Color model conversion and nearest named color matching.
//!
//! The core is a set of pure functions over [`RgbaColor`]: conversions to and
//! from HSV, HSL and CMYK, a string codec for `#AARRGGBB` and `rgb()`/`rgba()`
//! text, a catalog of named reference colors with nearest-match search, and
//! palettes whose entries get unique display names.
//!
//! ```
//! use chromapick::{find_closest_color, parse_color};
//!
//! let color = parse_color("rgb(250, 5, 5)").unwrap();
//! assert_eq!(color.to_hex(), "#FFFA0505");
//! assert_eq!(find_closest_color(color).name, "Red");
//! ```

pub mod color;
pub mod named;
pub mod palette;
#[cfg(feature = "settings")]
pub mod settings;
pub mod traits;

mod testing;

pub use color::{CmykColor, ColorParseError, HslColor, HsvColor, RgbaColor, parse_color, try_parse};
pub use named::{NAMED_COLORS, NamedColor, NamedColorCatalog, find_closest_color};
pub use palette::{ColorPalette, PaletteKind, palette_colors, resolve_palette_names};
