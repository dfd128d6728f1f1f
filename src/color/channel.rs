//! Editable color channels and the values a slider track needs for each.

use std::ops::RangeInclusive;

use crate::color::model::{HsvColor, RgbaColor};
use crate::traits::float::{Float, clamp_generic};

/// One component of a color that a picker lets the user edit directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    /// HSV hue in degrees.
    Hue,
    /// HSV saturation in [0, 1].
    Saturation,
    /// HSV value in [0, 1].
    Value,
    /// Opacity in [0, 1].
    Alpha,
    Red,
    Green,
    Blue,
}

/// A color at a relative position (0 to 1) along a track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: RgbaColor,
    pub offset: f64,
}

impl GradientStop {
    pub const fn new(color: RgbaColor, offset: f64) -> Self {
        Self { color, offset }
    }
}

const HUE_TRACK: [GradientStop; 7] = [
    GradientStop::new(RgbaColor::rgb(255, 0, 0), 0.0),
    GradientStop::new(RgbaColor::rgb(255, 255, 0), 0.167),
    GradientStop::new(RgbaColor::rgb(0, 255, 0), 0.333),
    GradientStop::new(RgbaColor::rgb(0, 255, 255), 0.5),
    GradientStop::new(RgbaColor::rgb(0, 0, 255), 0.667),
    GradientStop::new(RgbaColor::rgb(255, 0, 255), 0.833),
    GradientStop::new(RgbaColor::rgb(255, 0, 0), 1.0),
];

impl ColorChannel {
    pub const ALL: [ColorChannel; 7] = [
        ColorChannel::Hue,
        ColorChannel::Saturation,
        ColorChannel::Value,
        ColorChannel::Alpha,
        ColorChannel::Red,
        ColorChannel::Green,
        ColorChannel::Blue,
    ];

    pub fn range(self) -> RangeInclusive<f64> {
        use ColorChannel::*;
        match self {
            Hue => 0.0..=359.99,
            Saturation | Value | Alpha => 0.0..=1.0,
            Red | Green | Blue => 0.0..=255.0,
        }
    }

    pub fn step(self) -> f64 {
        use ColorChannel::*;
        match self {
            Red | Green | Blue => 1.0,
            Hue | Saturation | Value | Alpha => 0.01,
        }
    }

    /// Channels whose edited values are whole numbers.
    pub fn is_integral(self) -> bool {
        use ColorChannel::*;
        matches!(self, Hue | Red | Green | Blue)
    }

    /// Clamp into [`ColorChannel::range`] and round integral channels.
    ///
    /// A hue at the top of its range rounds up to 360, which the color models
    /// treat as 0.
    pub fn sanitize(self, value: f64) -> f64 {
        let range = self.range();
        let value = clamp_generic(value, *range.start(), *range.end());
        if self.is_integral() {
            value.round()
        } else {
            value
        }
    }

    /// Map a position along a track (0 = start, 1 = end) onto the channel range.
    pub fn value_from_ratio(self, ratio: f64) -> f64 {
        let range = self.range();
        let (lo, hi) = (*range.start(), *range.end());
        self.sanitize(lo + ratio.clamp01() * (hi - lo))
    }

    pub fn value_of(self, color: RgbaColor) -> f64 {
        use ColorChannel::*;
        match self {
            Hue => color.to_hsv().h,
            Saturation => color.to_hsv().s,
            Value => color.to_hsv().v,
            Alpha => f64::from_byte(color.a),
            Red => color.r as f64,
            Green => color.g as f64,
            Blue => color.b as f64,
        }
    }

    /// Replace this channel of `color` with a sanitized `value`.
    #[must_use]
    pub fn with_value(self, color: RgbaColor, value: f64) -> RgbaColor {
        use ColorChannel::*;
        let value = self.sanitize(value);
        match self {
            Hue => HsvColor {
                h: value,
                ..color.to_hsv()
            }
            .to_color(),
            Saturation => HsvColor {
                s: value,
                ..color.to_hsv()
            }
            .to_color(),
            Value => HsvColor {
                v: value,
                ..color.to_hsv()
            }
            .to_color(),
            Alpha => color.with_alpha(value.round_to_byte()),
            Red => RgbaColor {
                r: value as u8,
                ..color
            },
            Green => RgbaColor {
                g: value as u8,
                ..color
            },
            Blue => RgbaColor {
                b: value as u8,
                ..color
            },
        }
    }

    /// Read the channel from picker state held as HSV.
    ///
    /// Unlike [`ColorChannel::value_of`], hue and saturation survive
    /// achromatic colors here.
    pub fn value_of_hsv(self, hsv: HsvColor) -> f64 {
        use ColorChannel::*;
        match self {
            Hue => hsv.h,
            Saturation => hsv.s,
            Value => hsv.v,
            Alpha => hsv.a,
            Red | Green | Blue => self.value_of(hsv.to_color()),
        }
    }

    /// Replace this channel of HSV picker state with a sanitized `value`.
    ///
    /// Hue, saturation, value and alpha edits touch only their own field, so
    /// dragging value to 0 and back restores the original color. Red, green
    /// and blue edits go through [`RgbaColor`] and keep the previous hue (and
    /// saturation, at black) when the result has none of its own.
    #[must_use]
    pub fn with_hsv_value(self, hsv: HsvColor, value: f64) -> HsvColor {
        use ColorChannel::*;
        let value = self.sanitize(value);
        match self {
            Hue => HsvColor { h: value, ..hsv },
            Saturation => HsvColor { s: value, ..hsv },
            Value => HsvColor { v: value, ..hsv },
            Alpha => HsvColor { a: value, ..hsv },
            Red | Green | Blue => {
                let mut edited = self.with_value(hsv.to_color(), value).to_hsv();
                if edited.v == 0.0 {
                    edited.s = hsv.s;
                }
                if edited.s == 0.0 || edited.v == 0.0 {
                    edited.h = hsv.h;
                }
                edited
            }
        }
    }

    /// Text shown in a channel's entry box: hue as whole degrees (`"180°"`),
    /// saturation, value and alpha as whole percents (`"50%"`), red, green and
    /// blue as whole numbers.
    pub fn format_display(self, value: f64) -> String {
        use ColorChannel::*;
        match self {
            Hue => format!("{}°", value.round() as i64),
            Saturation | Value | Alpha => format!("{}%", (value * 100.0).round() as i64),
            Red | Green | Blue => format!("{}", value.round() as i64),
        }
    }

    /// Parse entry box text back into a channel value.
    ///
    /// `°` and `%` signs are ignored. Hue is clamped to [0, 360], percent
    /// channels are divided by 100 and clamped to [0, 1], byte channels are
    /// sanitized. Returns `None` for text that is not a finite number.
    pub fn parse_display(self, text: &str) -> Option<f64> {
        use ColorChannel::*;

        let cleaned = text.replace(['°', '%'], "");
        let number = cleaned.trim().parse::<f64>().ok().filter(|n| n.is_finite())?;

        Some(match self {
            Hue => clamp_generic(number, 0.0, 360.0),
            Saturation | Value | Alpha => (number / 100.0).clamp01(),
            Red | Green | Blue => self.sanitize(number),
        })
    }

    /// Gradient stops for a track editing this channel of `color`.
    pub fn gradient(self, color: RgbaColor) -> Vec<GradientStop> {
        use ColorChannel::*;

        let hsv = color.to_hsv();
        let (start, end) = match self {
            Hue => return HUE_TRACK.to_vec(),
            Saturation => (
                HsvColor::new(hsv.h, 0.0, hsv.v, 1.0).to_color(),
                HsvColor::new(hsv.h, 1.0, hsv.v, 1.0).to_color(),
            ),
            Value => (
                HsvColor::new(hsv.h, hsv.s, 0.0, 1.0).to_color(),
                HsvColor::new(hsv.h, hsv.s, 1.0, 1.0).to_color(),
            ),
            Alpha => (RgbaColor::TRANSPARENT, color.opaque()),
            Red => (
                RgbaColor::rgb(0, color.g, color.b),
                RgbaColor::rgb(255, color.g, color.b),
            ),
            Green => (
                RgbaColor::rgb(color.r, 0, color.b),
                RgbaColor::rgb(color.r, 255, color.b),
            ),
            Blue => (
                RgbaColor::rgb(color.r, color.g, 0),
                RgbaColor::rgb(color.r, color.g, 255),
            ),
        };

        vec![GradientStop::new(start, 0.0), GradientStop::new(end, 1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_approx_eq;

    #[test]
    fn ranges_and_steps() {
        assert_eq!(ColorChannel::Hue.range(), 0.0..=359.99);
        assert_eq!(ColorChannel::Alpha.range(), 0.0..=1.0);
        assert_eq!(ColorChannel::Blue.range(), 0.0..=255.0);
        assert_eq!(ColorChannel::Green.step(), 1.0);
        assert_eq!(ColorChannel::Value.step(), 0.01);
    }

    #[test]
    fn sanitize_clamps_and_rounds_integral_channels() {
        assert_eq!(ColorChannel::Red.sanitize(300.0), 255.0);
        assert_eq!(ColorChannel::Red.sanitize(12.6), 13.0);
        assert_eq!(ColorChannel::Hue.sanitize(-5.0), 0.0);
        assert_eq!(ColorChannel::Hue.sanitize(123.4), 123.0);
        assert_eq!(ColorChannel::Saturation.sanitize(0.456), 0.456);
        assert_eq!(ColorChannel::Alpha.sanitize(1.5), 1.0);
    }

    #[test]
    fn ratio_maps_onto_range() {
        assert_eq!(ColorChannel::Red.value_from_ratio(0.5), 128.0);
        assert_eq!(ColorChannel::Red.value_from_ratio(2.0), 255.0);
        assert_eq!(ColorChannel::Value.value_from_ratio(-1.0), 0.0);
        assert_approx_eq!(ColorChannel::Alpha.value_from_ratio(0.25), 0.25, 1e-12);
    }

    #[test]
    fn reads_and_writes_channels() {
        let color = RgbaColor::rgba(255, 0, 0, 51);
        assert_eq!(ColorChannel::Red.value_of(color), 255.0);
        assert_eq!(ColorChannel::Hue.value_of(color), 0.0);
        assert_approx_eq!(ColorChannel::Alpha.value_of(color), 0.2, 1e-12);

        assert_eq!(
            ColorChannel::Green.with_value(color, 77.2),
            RgbaColor::rgba(255, 77, 0, 51)
        );
        assert_eq!(
            ColorChannel::Hue.with_value(color, 120.0),
            RgbaColor::rgba(0, 255, 0, 51)
        );
        assert_eq!(
            ColorChannel::Value.with_value(color, 0.0),
            RgbaColor::rgba(0, 0, 0, 51)
        );
        assert_eq!(ColorChannel::Alpha.with_value(color, 0.5).a, 128);
    }

    #[test]
    fn hsv_state_survives_black_and_gray() {
        let red = RgbaColor::rgb(255, 0, 0).to_hsv();

        let black = ColorChannel::Value.with_hsv_value(red, 0.0);
        assert_eq!(black.to_color(), RgbaColor::BLACK);
        let restored = ColorChannel::Value.with_hsv_value(black, 1.0);
        assert_eq!(restored.to_color(), RgbaColor::rgb(255, 0, 0));

        let gray = ColorChannel::Saturation.with_hsv_value(red, 0.0);
        assert_eq!(ColorChannel::Hue.value_of_hsv(gray), 0.0);
        let green = ColorChannel::Hue.with_hsv_value(gray, 120.0);
        let green = ColorChannel::Saturation.with_hsv_value(green, 1.0);
        assert_eq!(green.to_color(), RgbaColor::rgb(0, 255, 0));

        // the stateless path loses the hue at black
        let lost = ColorChannel::Value.with_value(RgbaColor::BLACK, 1.0);
        assert_eq!(lost, RgbaColor::WHITE);
    }

    #[test]
    fn hsv_state_byte_and_alpha_edits() {
        let blue = HsvColor::new(240.0, 1.0, 1.0, 1.0);
        assert_eq!(ColorChannel::Blue.value_of_hsv(blue), 255.0);
        assert_eq!(ColorChannel::Alpha.value_of_hsv(blue), 1.0);

        let half = ColorChannel::Alpha.with_hsv_value(blue, 0.5);
        assert_eq!(half.to_color().a, 128);

        // zeroing the only lit channel keeps hue and saturation
        let dark = ColorChannel::Blue.with_hsv_value(blue, 0.0);
        assert_eq!(dark.to_color(), RgbaColor::BLACK);
        assert_eq!((dark.h, dark.s), (240.0, 1.0));

        let purple = ColorChannel::Red.with_hsv_value(blue, 255.0);
        assert_eq!(purple.to_color(), RgbaColor::rgb(255, 0, 255));
        assert_approx_eq!(purple.h, 300.0, 1e-9);
    }

    #[test]
    fn display_text_formats() {
        assert_eq!(ColorChannel::Hue.format_display(179.6), "180°");
        assert_eq!(ColorChannel::Saturation.format_display(0.5), "50%");
        assert_eq!(ColorChannel::Value.format_display(0.333), "33%");
        assert_eq!(ColorChannel::Alpha.format_display(1.0), "100%");
        assert_eq!(ColorChannel::Green.format_display(127.6), "128");
    }

    #[test]
    fn display_text_parses_back() {
        assert_eq!(ColorChannel::Hue.parse_display(" 180° "), Some(180.0));
        assert_eq!(ColorChannel::Hue.parse_display("400"), Some(360.0));
        assert_eq!(ColorChannel::Hue.parse_display("-20°"), Some(0.0));
        assert_eq!(ColorChannel::Saturation.parse_display("50%"), Some(0.5));
        assert_eq!(ColorChannel::Value.parse_display("250 %"), Some(1.0));
        assert_eq!(ColorChannel::Red.parse_display("300"), Some(255.0));
        assert_eq!(ColorChannel::Red.parse_display("12.4"), Some(12.0));

        assert_eq!(ColorChannel::Hue.parse_display(""), None);
        assert_eq!(ColorChannel::Value.parse_display("half%"), None);
        assert_eq!(ColorChannel::Saturation.parse_display("NaN"), None);
        assert_eq!(ColorChannel::Hue.parse_display("inf°"), None);
    }

    #[test]
    fn gradients_span_the_channel() {
        let hue = ColorChannel::Hue.gradient(RgbaColor::BLACK);
        assert_eq!(hue.len(), 7);
        assert_eq!(hue.first().map(|s| s.color), hue.last().map(|s| s.color));

        let color = RgbaColor::rgba(10, 20, 30, 40);
        let red = ColorChannel::Red.gradient(color);
        assert_eq!(
            red,
            vec![
                GradientStop::new(RgbaColor::rgb(0, 20, 30), 0.0),
                GradientStop::new(RgbaColor::rgb(255, 20, 30), 1.0),
            ]
        );

        let alpha = ColorChannel::Alpha.gradient(color);
        assert_eq!(alpha[0].color, RgbaColor::TRANSPARENT);
        assert_eq!(alpha[1].color, RgbaColor::rgb(10, 20, 30));

        let value = ColorChannel::Value.gradient(RgbaColor::rgb(0, 0, 128));
        assert_eq!(value[0].color, RgbaColor::BLACK);
        assert_eq!(value[1].color, RgbaColor::rgb(0, 0, 255));

        let saturation = ColorChannel::Saturation.gradient(RgbaColor::rgb(255, 0, 0));
        assert_eq!(saturation[0].color, RgbaColor::WHITE);
        assert_eq!(saturation[1].color, RgbaColor::rgb(255, 0, 0));
    }
}
