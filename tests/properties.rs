use chromapick::{CmykColor, HslColor, HsvColor, RgbaColor, parse_color, resolve_palette_names};
use proptest::prelude::*;

fn opaque_color() -> impl Strategy<Value = RgbaColor> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| RgbaColor::rgb(r, g, b))
}

fn any_color() -> impl Strategy<Value = RgbaColor> {
    any::<[u8; 4]>().prop_map(|[r, g, b, a]| RgbaColor::rgba(r, g, b, a))
}

// [0, 1] give or take float noise
fn unit(x: f64) -> bool {
    (-1e-9..=1.0 + 1e-9).contains(&x)
}

fn assert_within_one(actual: RgbaColor, expected: RgbaColor) -> Result<(), TestCaseError> {
    for (x, y) in [
        (actual.r, expected.r),
        (actual.g, expected.g),
        (actual.b, expected.b),
        (actual.a, expected.a),
    ] {
        prop_assert!(x.abs_diff(y) <= 1, "{actual:?} vs {expected:?}");
    }
    Ok(())
}

proptest! {
    #[test]
    fn hsv_round_trip_within_one(color in opaque_color()) {
        assert_within_one(color.to_hsv().to_color(), color)?;
    }

    #[test]
    fn hsl_round_trip_within_one(color in opaque_color()) {
        assert_within_one(color.to_hsl().to_color(), color)?;
    }

    #[test]
    fn cmyk_round_trip_within_one(color in opaque_color()) {
        assert_within_one(color.to_cmyk().to_color(), color)?;
    }

    #[test]
    fn hex_round_trip_is_exact(color in any_color()) {
        prop_assert_eq!(parse_color(&color.to_hex()), Ok(color));
    }

    #[test]
    fn rgb_string_round_trip_is_exact(color in opaque_color()) {
        prop_assert_eq!(parse_color(&color.to_rgb_string()), Ok(color));
    }

    #[test]
    fn converted_components_stay_in_range(color in any_color()) {
        let hsv = color.to_hsv();
        prop_assert!((0.0..360.0).contains(&hsv.h));
        prop_assert!(unit(hsv.s) && unit(hsv.v));

        let hsl = color.to_hsl();
        prop_assert!((0.0..360.0).contains(&hsl.h));
        prop_assert!(unit(hsl.s) && unit(hsl.l));

        let cmyk = color.to_cmyk();
        prop_assert!([cmyk.c, cmyk.m, cmyk.y, cmyk.k].into_iter().all(unit), "{cmyk:?}");
    }

    #[test]
    fn full_turn_hue_matches_zero(s in 0.0f64..=1.0, v in 0.0f64..=1.0, l in 0.0f64..=1.0) {
        prop_assert_eq!(
            HsvColor::new(360.0, s, v, 1.0).to_color(),
            HsvColor::new(0.0, s, v, 1.0).to_color()
        );
        prop_assert_eq!(
            HslColor::new(360.0, s, l, 1.0).to_color(),
            HslColor::new(0.0, s, l, 1.0).to_color()
        );
    }

    #[test]
    fn alpha_survives_every_model(color in any_color()) {
        prop_assert_eq!(color.to_hsv().to_color().a, color.a);
        prop_assert_eq!(color.to_hsl().to_color().a, color.a);
        prop_assert_eq!(CmykColor::from(color).to_color().a, color.a);
    }

    #[test]
    fn palette_names_are_unique(colors in proptest::collection::vec(opaque_color(), 0..40)) {
        let named = resolve_palette_names(&colors);
        prop_assert_eq!(named.len(), colors.len());

        let mut names: Vec<&str> = named.iter().map(|entry| entry.name.as_ref()).collect();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), colors.len());
    }
}
