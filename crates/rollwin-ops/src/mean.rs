//! Rolling mean operator.
//!
//! The rolling mean is the arithmetic average of the valid samples inside
//! each window position.

use rollwin_core::num::RollFloat;
use rollwin_core::series::Series;
use rollwin_core::traits::SlidingOperator;

/// Rolling arithmetic mean over a sliding window.
///
/// Emits one value per window position (`len - window + 1` in total). Only
/// finite samples contribute to the running sum and the valid-count; a
/// window without a single finite sample yields NaN.
///
/// # Formula
///
/// mean = sum(valid samples in window) / valid_count
#[derive(Debug, Clone, Copy, Default)]
pub struct RollingMean;

impl RollingMean {
    fn window_mean<T: RollFloat>(sum: T, valid_count: usize) -> T {
        if valid_count > 0 {
            sum / <T as RollFloat>::from_usize(valid_count)
        } else {
            T::NAN
        }
    }
}

impl<T: RollFloat> SlidingOperator<T> for RollingMean {
    fn name(&self) -> &'static str {
        "mean"
    }

    fn compute(&self, data: &[T], window: usize) -> Series<T> {
        if data.is_empty() || window == 0 || window > data.len() {
            return Series::new();
        }

        let mut result = Series::with_capacity(data.len() - window + 1);

        // Seed the accumulators from the first window
        let mut sum = T::ZERO;
        let mut valid_count = 0usize;
        for &value in &data[..window] {
            if value.is_valid() {
                sum = sum + value;
                valid_count += 1;
            }
        }
        result.push(Self::window_mean(sum, valid_count));

        // Slide: retire the sample leaving the window, admit the one entering
        for i in window..data.len() {
            let leaving = data[i - window];
            if leaving.is_valid() {
                sum = sum - leaving;
                valid_count -= 1;
            }
            let entering = data[i];
            if entering.is_valid() {
                sum = sum + entering;
                valid_count += 1;
            }
            result.push(Self::window_mean(sum, valid_count));
        }

        result
    }
}
