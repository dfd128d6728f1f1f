//! Parsing of loosely formatted color text.
//!
//! Accepted forms, surrounding whitespace ignored:
//! * `#RGB`, `#ARGB`, `#RRGGBB`, `#AARRGGBB` (the `#` is optional, digits are case-insensitive)
//! * `rgb(r, g, b)` and `rgba(r, g, b, a)`, case-insensitive, with decimal channels
//!   in 0..=255 and an optional decimal alpha clamped into [0, 1]
//!
//! Anything else is rejected. Parsing never panics.

use thiserror::Error;

use crate::color::model::RgbaColor;
use crate::traits::float::Float;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length")]
    InvalidLength,
    #[error("invalid hex digits")]
    InvalidHex,
    #[error("invalid rgb()/rgba() function")]
    InvalidFunc,
    #[error("component out of range")]
    OutOfRange,
    #[error("invalid alpha value")]
    InvalidAlpha,
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse the digits of a hex color, without the leading `#`.
///
/// The allowed lengths are:
/// * 3: RGB, each digit doubled
/// * 4: ARGB, each digit doubled
/// * 6: RRGGBB
/// * 8: AARRGGBB
fn parse_hex(hex: &str) -> Result<RgbaColor, ColorParseError> {
    use ColorParseError::*;

    let bytes = hex.as_bytes();

    // "A" -> "AA"
    let short = |i: usize| -> Result<u8, ColorParseError> {
        nibble(bytes[i]).map(|n| n * 17).ok_or(InvalidHex)
    };
    let long = |i: usize| -> Result<u8, ColorParseError> {
        let h = nibble(bytes[i]).ok_or(InvalidHex)?;
        let l = nibble(bytes[i + 1]).ok_or(InvalidHex)?;

        Ok(h << 4 | l)
    };

    match bytes.len() {
        3 => Ok(RgbaColor::from_argb(255, short(0)?, short(1)?, short(2)?)),
        4 => Ok(RgbaColor::from_argb(
            short(0)?,
            short(1)?,
            short(2)?,
            short(3)?,
        )),
        6 => Ok(RgbaColor::from_argb(255, long(0)?, long(2)?, long(4)?)),
        8 => Ok(RgbaColor::from_argb(long(0)?, long(2)?, long(4)?, long(6)?)),
        _ => Err(InvalidLength),
    }
}

/// A decimal channel: one to three ASCII digits, at most 255.
fn parse_channel(token: &str) -> Result<u8, ColorParseError> {
    use ColorParseError::*;

    if token.is_empty() || token.len() > 3 || !token.bytes().all(|c| c.is_ascii_digit()) {
        return Err(InvalidFunc);
    }
    token.parse::<u8>().map_err(|_| OutOfRange)
}

/// A decimal alpha fraction. Values above 1 are clamped, not rejected.
fn parse_alpha(token: &str) -> Result<u8, ColorParseError> {
    use ColorParseError::*;

    if token.is_empty() || !token.bytes().all(|c| c.is_ascii_digit() || c == b'.') {
        return Err(InvalidFunc);
    }
    let alpha = token.parse::<f64>().map_err(|_| InvalidAlpha)?;

    Ok(alpha.clamp01().round_to_byte())
}

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`. Either name takes either arity.
fn parse_css_rgba(s: &str) -> Result<RgbaColor, ColorParseError> {
    use ColorParseError::*;

    let lower = s.to_ascii_lowercase();
    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|x| x.strip_suffix(')'))
        .ok_or(InvalidFunc)?;

    let nums: Vec<&str> = args.split(',').map(|t| t.trim()).collect();
    let (r, g, b, alpha) = match nums.as_slice() {
        [r, g, b] => (*r, *g, *b, None),
        [r, g, b, a] => (*r, *g, *b, Some(*a)),
        _ => return Err(InvalidFunc),
    };

    let r = parse_channel(r)?;
    let g = parse_channel(g)?;
    let b = parse_channel(b)?;
    let a = match alpha {
        Some(token) => parse_alpha(token)?,
        None => 255,
    };

    Ok(RgbaColor::from_argb(a, r, g, b))
}

pub fn parse_color(s: &str) -> Result<RgbaColor, ColorParseError> {
    use ColorParseError::*;

    let s = s.trim();
    if s.is_empty() {
        return Err(Empty);
    }

    // Hex-like
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.is_empty() && hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return parse_hex(hex);
    }
    if s.starts_with('#') {
        return Err(InvalidHex);
    }

    // CSS-like: rgb(r,g,b) / rgba(r,g,b,a[0..1])
    parse_css_rgba(s)
}

/// Parse a color, discarding the failure reason.
pub fn try_parse(s: &str) -> Option<RgbaColor> {
    parse_color(s).ok()
}

impl core::str::FromStr for RgbaColor {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for RgbaColor {
    type Error = ColorParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
