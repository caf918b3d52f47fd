//! Sample trait for processing `f32` and `f64` audio with the same code.

use std::ops::Mul;

/// A floating-point audio sample.
///
/// Implemented for `f32` and `f64`, so DSP code can be written once:
///
/// ```ignore
/// fn apply_gain<S: Sample>(samples: &mut [S], gain: f32) {
///     let gain = S::from_f32(gain);
///     for s in samples {
///         *s = *s * gain;
///     }
/// }
/// ```
pub trait Sample:
    Copy + Default + PartialEq + Send + Sync + Mul<Output = Self> + 'static
{
    /// Silence.
    const ZERO: Self;

    /// Convert from `f32`.
    fn from_f32(value: f32) -> Self;

    /// Convert from `f64`.
    fn from_f64(value: f64) -> Self;

    /// Convert to `f64`.
    fn to_f64(self) -> f64;
}

impl Sample for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn from_f32(value: f32) -> Self {
        value
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Sample for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn from_f32(value: f32) -> Self {
        value as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}
