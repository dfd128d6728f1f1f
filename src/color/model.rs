// Color value types and the numeric conversions between them.
//
// RgbaColor is the canonical 8 bit representation; HSV, HSL and CMYK are
// derived on demand and converted back. Byte rounding differs per direction:
// HSV/HSL round to the nearest byte, CMYK truncates its color channels.

use std::fmt;

use crate::traits::float::Float;

/// Wrap a hue in degrees into [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can land on exactly 360.0 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}

/// An 8 bit per channel color with straight (non premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl RgbaColor {
    pub const BLACK: RgbaColor = RgbaColor::rgb(0, 0, 0);
    pub const WHITE: RgbaColor = RgbaColor::rgb(255, 255, 255);
    pub const TRANSPARENT: RgbaColor = RgbaColor::rgba(0, 0, 0, 0);

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from components in alpha-first order, matching the
    /// `#AARRGGBB` layout of [`RgbaColor::to_hex`].
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// The same color with full opacity.
    #[must_use]
    #[inline]
    pub const fn opaque(self) -> Self {
        self.with_alpha(255)
    }

    /// Translucent colors are usually drawn over a checkerboard.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    #[must_use]
    #[inline]
    pub fn into_argb(self) -> [u8; 4] {
        [self.a, self.r, self.g, self.b]
    }

    // r, g, b, a scaled into [0, 1]
    #[inline]
    fn into_unit(self) -> [f64; 4] {
        [
            f64::from_byte(self.r),
            f64::from_byte(self.g),
            f64::from_byte(self.b),
            f64::from_byte(self.a),
        ]
    }

    #[must_use]
    pub fn to_hsv(self) -> HsvColor {
        let [r, g, b, a] = self.into_unit();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;

        if chroma == 0.0 {
            return HsvColor::new(0.0, 0.0, max, a);
        }

        let sector = if max == r {
            (g - b) / chroma
        } else if max == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        let mut h = sector * 60.0;
        if h < 0.0 {
            h += 360.0;
        }
        let s = if max > 0.0 { chroma / max } else { 0.0 };

        HsvColor::new(h, s, max, a)
    }

    #[must_use]
    pub fn to_hsl(self) -> HslColor {
        let [r, g, b, a] = self.into_unit();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return HslColor::new(0.0, 0.0, l, a);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        HslColor::new(h / 6.0 * 360.0, s, l, a)
    }

    #[must_use]
    pub fn to_cmyk(self) -> CmykColor {
        let [r, g, b, a] = self.into_unit();

        let k = 1.0 - r.max(g).max(b);
        if k == 1.0 {
            return CmykColor::new(0.0, 0.0, 0.0, 1.0, a);
        }

        CmykColor::new(
            (1.0 - r - k) / (1.0 - k),
            (1.0 - g - k) / (1.0 - k),
            (1.0 - b - k) / (1.0 - k),
            k,
            a,
        )
    }

    /// `#AARRGGBB`, upper case.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }

    /// `rgb(r, g, b)`, alpha is dropped.
    #[must_use]
    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// `rgba(r, g, b, a)` with alpha as a two decimal fraction.
    #[must_use]
    pub fn to_rgba_string(self) -> String {
        format!(
            "rgba({}, {}, {}, {:.2})",
            self.r,
            self.g,
            self.b,
            f64::from_byte(self.a)
        )
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // lossless, and the format the settings store persists
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 4]> for RgbaColor {
    fn from(rgba: [u8; 4]) -> Self {
        Self::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}

impl From<(u8, u8, u8)> for RgbaColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

/// Hue, saturation, value and alpha.
///
/// `h` is in degrees within [0, 360); `s`, `v` and `a` are within [0, 1].
/// When `s` is zero the color is achromatic and `h` carries no meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HsvColor {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

impl HsvColor {
    pub const fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self { h, s, v, a }
    }

    /// The fully saturated, full value, opaque color of this hue.
    #[must_use]
    pub fn pure_hue(self) -> RgbaColor {
        HsvColor::new(self.h, 1.0, 1.0, 1.0).to_color()
    }

    #[must_use]
    pub fn to_color(self) -> RgbaColor {
        let HsvColor { h, s, v, a } = self;

        let h = normalize_hue(h) / 60.0;
        let sector = h.floor();
        let f = h - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match (sector as u8) % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        RgbaColor {
            r: r.round_to_byte(),
            g: g.round_to_byte(),
            b: b.round_to_byte(),
            a: a.round_to_byte(),
        }
    }
}

/// Hue, saturation, lightness and alpha.
///
/// Same ranges as [`HsvColor`], with `l` in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HslColor {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl HslColor {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    #[must_use]
    pub fn to_color(self) -> RgbaColor {
        let HslColor { h, s, l, a } = self;

        let (r, g, b) = if s == 0.0 {
            // achromatic
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            let h = normalize_hue(h) / 360.0;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        RgbaColor {
            r: r.round_to_byte(),
            g: g.round_to_byte(),
            b: b.round_to_byte(),
            a: a.round_to_byte(),
        }
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Cyan, magenta, yellow, key (black) and alpha, all within [0, 1].
///
/// Pure black is stored as `k = 1` with `c = m = y = 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CmykColor {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
    pub a: f64,
}

impl CmykColor {
    pub const fn new(c: f64, m: f64, y: f64, k: f64, a: f64) -> Self {
        Self { c, m, y, k, a }
    }

    #[must_use]
    pub fn to_color(self) -> RgbaColor {
        let CmykColor { c, m, y, k, a } = self;

        RgbaColor {
            r: (255.0 * (1.0 - c) * (1.0 - k)).truncate_to_byte(),
            g: (255.0 * (1.0 - m) * (1.0 - k)).truncate_to_byte(),
            b: (255.0 * (1.0 - y) * (1.0 - k)).truncate_to_byte(),
            a: a.round_to_byte(),
        }
    }
}

impl From<RgbaColor> for HsvColor {
    fn from(color: RgbaColor) -> Self {
        color.to_hsv()
    }
}

impl From<HsvColor> for RgbaColor {
    fn from(hsv: HsvColor) -> Self {
        hsv.to_color()
    }
}

impl From<RgbaColor> for HslColor {
    fn from(color: RgbaColor) -> Self {
        color.to_hsl()
    }
}

impl From<HslColor> for RgbaColor {
    fn from(hsl: HslColor) -> Self {
        hsl.to_color()
    }
}

impl From<RgbaColor> for CmykColor {
    fn from(color: RgbaColor) -> Self {
        color.to_cmyk()
    }
}

impl From<CmykColor> for RgbaColor {
    fn from(cmyk: CmykColor) -> Self {
        cmyk.to_color()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RgbaColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RgbaColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        crate::color::parse::parse_color(&text).map_err(serde::de::Error::custom)
    }
}
