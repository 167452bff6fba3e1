//! Numeric type abstractions for sliding-window computations.
//!
//! This module defines the [`RollFloat`] trait which abstracts over `f32` and `f64`
//! for generic operator implementations, and hosts the validity predicate that
//! decides whether a sample participates in a window.

use num_traits::{Float, FromPrimitive, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Trait for floating-point types used in sliding-window calculations.
///
/// This trait provides a common interface for `f32` and `f64`, enabling generic
/// implementations of the windowed operators.
///
/// # Associated Constants
///
/// - `NAN` - Not-a-number value, emitted for under-determined windows
/// - `INFINITY` - Positive infinity
/// - `NEG_INFINITY` - Negative infinity
/// - `ZERO` - Zero value
/// - `ONE` - One value
/// - `HUNDRED` - Hundred value (the RSI scale)
///
/// # Example
///
/// ```rust
/// use rollwin_core::RollFloat;
///
/// fn count_valid<T: RollFloat>(samples: &[T]) -> usize {
///     samples.iter().filter(|value| value.is_valid()).count()
/// }
///
/// assert_eq!(count_valid(&[1.0f64, f64::NAN, 3.0, f64::INFINITY]), 2);
/// ```
#[cfg(feature = "serde")]
pub trait RollFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + Serialize + DeserializeOwned + 'static
{
    /// Not-a-number value.
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Hundred value (the RSI scale).
    const HUNDRED: Self;

    /// Convert from `usize` (used for valid-count divisors).
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is valid (not NaN and not infinite).
    ///
    /// Invalid samples stand for missing data and are excluded from every
    /// window accumulator.
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

#[cfg(not(feature = "serde"))]
pub trait RollFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + 'static
{
    /// Not-a-number value.
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Hundred value (the RSI scale).
    const HUNDRED: Self;

    /// Convert from `usize` (used for valid-count divisors).
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is valid (not NaN and not infinite).
    ///
    /// Invalid samples stand for missing data and are excluded from every
    /// window accumulator.
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

impl RollFloat for f32 {
    const NAN: Self = f32::NAN;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl RollFloat for f64 {
    const NAN: Self = f64::NAN;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}
