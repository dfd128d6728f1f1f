//! Polar geometry of a hue/saturation color wheel.
//!
//! The wheel fills the width of its box and is centered in it. Hue is the angle
//! of a point around the center (0 degrees pointing along +x, growing towards +y),
//! saturation is its distance from the center relative to the radius.

use crate::color::model::{HsvColor, RgbaColor};
use crate::named::{NamedColor, find_closest_color};
use crate::traits::float::Float;

/// Below this distance from the center the angle is meaningless.
const CENTER_EPSILON: f32 = 0.001;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelSample {
    /// `None` at the very center, where callers keep their previous hue.
    pub hue: Option<f64>,
    pub saturation: f64,
}

/// Hue and saturation under `point` for a wheel drawn in a `width` x `height` box.
///
/// Returns `None` when the box has no width.
pub fn hue_saturation_at(point: Point, width: f32, height: f32) -> Option<WheelSample> {
    let radius = width / 2.0;
    if radius <= 0.0 {
        return None;
    }

    let dx = point.x - width / 2.0;
    let dy = point.y - height / 2.0;
    let distance = (dx * dx + dy * dy).sqrt();

    let hue = (distance > CENTER_EPSILON).then(|| {
        let degrees = (dy as f64).atan2(dx as f64).to_degrees();
        if degrees < 0.0 { degrees + 360.0 } else { degrees }
    });

    Some(WheelSample {
        hue,
        saturation: (distance / radius).clamp01() as f64,
    })
}

/// Where the thumb for `hue`/`saturation` sits inside a `width` x `height` box.
pub fn point_for(hue: f64, saturation: f64, width: f32, height: f32) -> Point {
    let radius = (width / 2.0) as f64;
    let distance = saturation.clamp01() * radius;
    let angle = hue.to_radians();

    Point::new(
        (width as f64 / 2.0 + angle.cos() * distance) as f32,
        (height as f64 / 2.0 + angle.sin() * distance) as f32,
    )
}

/// The opaque, full value color painted at a wheel position.
pub fn wheel_color(hue: f64, saturation: f64) -> RgbaColor {
    HsvColor::new(hue, saturation, 1.0, 1.0).to_color()
}

/// Name shown next to the thumb.
pub fn wheel_color_name(hue: f64, saturation: f64) -> &'static NamedColor {
    find_closest_color(wheel_color(hue, saturation))
}
