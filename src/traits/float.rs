/// Clamp a generic value between two other values.
#[inline(always)]
pub fn clamp_generic<T: PartialOrd>(x: T, lo: T, hi: T) -> T {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// A floating point trait that can be used synonymously for f32 and f64.
///
/// The color models store their components as f64, while geometry helpers
/// (wheel coordinates) work in f32 like the UI layers that call them.
pub trait Float: Copy + PartialOrd {
    const ZERO: Self;
    const ONE: Self;

    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;

    /// Normalize an 8 bit channel into [0, 1].
    fn from_byte(byte: u8) -> Self {
        Self::from_f64(byte as f64 / 255.0)
    }

    /// Clamp this Float between 0.0 and 1.0
    fn clamp01(self) -> Self {
        clamp_generic(self, Self::ZERO, Self::ONE)
    }

    /// Scale a unit value to a byte, rounding to the nearest integer.
    fn round_to_byte(self) -> u8 {
        (self.clamp01().to_f64() * 255.0 + 0.5).floor() as u8
    }

    /// Drop the fractional part of an already byte-scaled value.
    fn truncate_to_byte(self) -> u8 {
        clamp_generic(self.to_f64(), 0.0, 255.0) as u8
    }
}

impl Float for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Float for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn from_f64(x: f64) -> Self {
        x
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_generic_orders_bounds() {
        assert_eq!(clamp_generic(5, 0, 3), 3);
        assert_eq!(clamp_generic(-1.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp_generic(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn byte_scaling_rounds_and_truncates() {
        assert_eq!(0.5f64.round_to_byte(), 128);
        assert_eq!(1.0f32.round_to_byte(), 255);
        assert_eq!(2.0f64.round_to_byte(), 255);
        assert_eq!((-0.3f64).round_to_byte(), 0);

        assert_eq!(127.99f64.truncate_to_byte(), 127);
        assert_eq!(300.0f64.truncate_to_byte(), 255);
        assert_eq!(f64::from_byte(255), 1.0);
        assert_eq!(f32::from_byte(0), 0.0);
    }
}
