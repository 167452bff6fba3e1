//! Rolling standard deviation operator.
//!
//! Population standard deviation maintained incrementally from a running
//! sum and sum of squares.

use rollwin_core::num::RollFloat;
use rollwin_core::series::Series;
use rollwin_core::traits::SlidingOperator;

/// Rolling population standard deviation over a sliding window.
///
/// Emits one value per window position (`len - window + 1` in total). Only
/// finite samples contribute to the running totals; a window with fewer
/// than two valid samples yields NaN.
///
/// # Formula
///
/// mean     = sum / valid_count
/// variance = sum_sq / valid_count - mean²
/// std      = sqrt(max(variance, 0))
///
/// The variance is floored at zero: cancellation in `E[X²] - E[X]²` can
/// leave a tiny negative value for a near-constant window.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollingStd;

impl RollingStd {
    fn window_std<T: RollFloat>(sum: T, sum_sq: T, valid_count: usize) -> T {
        // A single sample has no defined population variance
        if valid_count <= 1 {
            return T::NAN;
        }

        let n = <T as RollFloat>::from_usize(valid_count);
        let mean = sum / n;
        let variance = sum_sq / n - mean * mean;

        if variance > T::ZERO {
            variance.sqrt()
        } else {
            T::ZERO
        }
    }
}

impl<T: RollFloat> SlidingOperator<T> for RollingStd {
    fn name(&self) -> &'static str {
        "std"
    }

    fn compute(&self, data: &[T], window: usize) -> Series<T> {
        if data.is_empty() || window == 0 || window > data.len() {
            return Series::new();
        }

        let mut result = Series::with_capacity(data.len() - window + 1);

        // Seed the accumulators from the first window
        let mut sum = T::ZERO;
        let mut sum_sq = T::ZERO;
        let mut valid_count = 0usize;
        for &value in &data[..window] {
            if value.is_valid() {
                sum = sum + value;
                sum_sq = sum_sq + value * value;
                valid_count += 1;
            }
        }
        result.push(Self::window_std(sum, sum_sq, valid_count));

        // Slide: retire the sample leaving the window, admit the one entering
        for i in window..data.len() {
            let leaving = data[i - window];
            if leaving.is_valid() {
                sum = sum - leaving;
                sum_sq = sum_sq - leaving * leaving;
                valid_count -= 1;
            }
            let entering = data[i];
            if entering.is_valid() {
                sum = sum + entering;
                sum_sq = sum_sq + entering * entering;
                valid_count += 1;
            }
            result.push(Self::window_std(sum, sum_sq, valid_count));
        }

        result
    }
}
