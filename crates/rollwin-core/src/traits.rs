//! Core trait definitions for sliding-window operators.
//!
//! This module defines the calling convention every windowed statistic
//! implements, so callers can select an algorithm dynamically by name.

use crate::num::RollFloat;
use crate::series::Series;

/// Core trait for sliding-window operators.
///
/// An operator computes one output value per valid window position over an
/// input series, maintaining its accumulators incrementally as the window
/// slides (O(1) amortized per step).
///
/// # Contract
///
/// - `compute` borrows the input and allocates a fresh output per call; it
///   holds no state between calls.
/// - Degenerate input (`window == 0`, `window > data.len()`, empty or
///   too-short series) yields an empty series, never an error.
/// - A window with too few valid samples yields NaN at that position only.
///
/// # Example Implementation
///
/// ```rust
/// use rollwin_core::{RollFloat, Series, SlidingOperator};
///
/// struct WindowCount;
///
/// impl<T: RollFloat> SlidingOperator<T> for WindowCount {
///     fn name(&self) -> &'static str {
///         "count"
///     }
///
///     fn compute(&self, data: &[T], window: usize) -> Series<T> {
///         if data.is_empty() || window == 0 || window > data.len() {
///             return Series::new();
///         }
///         data.windows(window)
///             .map(|w| <T as RollFloat>::from_usize(w.iter().filter(|x| x.is_valid()).count()))
///             .collect()
///     }
/// }
///
/// let op = WindowCount;
/// let result = op.compute(&[1.0f64, f64::NAN, 3.0], 2);
/// assert_eq!(result.as_slice(), &[1.0, 1.0]);
/// ```
pub trait SlidingOperator<T: RollFloat>: Send + Sync {
    /// Stable name under which the operator registers and is looked up.
    fn name(&self) -> &'static str;

    /// Compute the statistic for every window of length `window` over `data`.
    ///
    /// Returns one value per valid window position; see the crate-level
    /// documentation of each operator for its exact output length.
    fn compute(&self, data: &[T], window: usize) -> Series<T>;
}
