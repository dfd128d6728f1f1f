//! Monochromatic accent ramps: a base color flanked by darker shades and
//! lighter tints at fixed HSL lightness offsets.

use crate::color::model::RgbaColor;
use crate::traits::float::Float;

/// Lightness offsets applied on either side of the base color, innermost first.
const LIGHTNESS_STEPS: [f64; 3] = [0.15, 0.30, 0.45];

const LABELS: [&str; 7] = [
    "Darkest Shade",
    "Dark Shade",
    "Light Shade",
    "Base",
    "Light Tint",
    "Lighter Tint",
    "Lightest Tint",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentSwatch {
    pub label: &'static str,
    pub color: RgbaColor,
}

impl AccentSwatch {
    /// Two line tooltip text: the label, then the `#AARRGGBB` value.
    pub fn tooltip(&self) -> String {
        format!("{}\n{}", self.label, self.color.to_hex())
    }
}

/// Seven swatches ordered from darkest to lightest, base color in the middle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentRamp {
    pub swatches: [AccentSwatch; 7],
}

impl AccentRamp {
    pub const BASE_INDEX: usize = 3;

    pub fn base(&self) -> RgbaColor {
        self.swatches[Self::BASE_INDEX].color
    }

    pub fn colors(&self) -> [RgbaColor; 7] {
        self.swatches.map(|swatch| swatch.color)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AccentSwatch> {
        self.swatches.iter()
    }
}

pub fn accent_ramp(base: RgbaColor) -> AccentRamp {
    let hsl = base.to_hsl();
    let shifted = |delta: f64| hsl.with_lightness((hsl.l + delta).clamp01()).to_color();

    let [step1, step2, step3] = LIGHTNESS_STEPS;
    let colors = [
        shifted(-step3),
        shifted(-step2),
        shifted(-step1),
        // kept as is, no HSL round trip
        base,
        shifted(step1),
        shifted(step2),
        shifted(step3),
    ];

    AccentRamp {
        swatches: std::array::from_fn(|i| AccentSwatch {
            label: LABELS[i],
            color: colors[i],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_approx_eq;

    #[test]
    fn ramp_orders_shades_then_tints() {
        let base = RgbaColor::rgb(0x19, 0x76, 0xD2);
        let ramp = accent_ramp(base);

        assert_eq!(ramp.base(), base);
        let lightness: Vec<f64> = ramp.colors().iter().map(|c| c.to_hsl().l).collect();
        for pair in lightness.windows(2) {
            assert!(pair[0] < pair[1], "{lightness:?}");
        }
        assert_approx_eq!(lightness[0], base.to_hsl().l - 0.45, 0.01);
        assert_approx_eq!(lightness[6], base.to_hsl().l + 0.45, 0.01);
    }

    #[test]
    fn ramp_clamps_lightness() {
        let ramp = accent_ramp(RgbaColor::WHITE);
        assert_eq!(ramp.colors()[4..], [RgbaColor::WHITE; 3]);

        let ramp = accent_ramp(RgbaColor::BLACK);
        assert_eq!(ramp.colors()[..3], [RgbaColor::BLACK; 3]);
    }

    #[test]
    fn ramp_keeps_alpha() {
        let ramp = accent_ramp(RgbaColor::rgba(200, 50, 50, 128));
        assert!(ramp.iter().all(|swatch| swatch.color.a == 128));
    }

    #[test]
    fn labels_and_tooltips() {
        let ramp = accent_ramp(RgbaColor::rgb(255, 0, 0));
        let labels: Vec<&str> = ramp.iter().map(|swatch| swatch.label).collect();
        assert_eq!(labels, LABELS);
        assert_eq!(ramp.swatches[3].tooltip(), "Base\n#FFFF0000");
    }
}
