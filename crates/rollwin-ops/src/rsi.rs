//! Rolling Relative Strength Index (RSI) operator.
//!
//! RSI measures the balance of gains and losses among the first differences
//! inside each window.

use rollwin_core::num::RollFloat;
use rollwin_core::series::Series;
use rollwin_core::traits::SlidingOperator;

/// Rolling RSI over the first differences of a sliding window.
///
/// A window of `window` samples holds `window - 1` differences
/// `Δᵢ = x[i] - x[i-1]`; positive differences feed a gain-sum, the rest feed
/// a loss-sum as `-Δᵢ`. The input must span at least `window + 1` samples
/// (the first difference consumes one extra sample); the result then holds
/// `len - window + 1` values, one per window position.
///
/// A difference contributes only when both endpoints and the difference
/// itself are finite. A window without a single contributing difference
/// yields NaN.
///
/// # Formula
///
/// avg_gain = gain_sum / valid_count
/// avg_loss = loss_sum / valid_count
/// rs       = avg_loss == 0 ? 100 : avg_gain / avg_loss
/// rsi      = 100 - 100 / (1 + rs)
///
/// The `avg_loss == 0 → rs = 100` convention sidesteps the division by
/// zero; a loss-free window therefore emits `100 - 100/101`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollingRsi;

impl RollingRsi {
    /// Difference `next - prev`, when both endpoints and the difference are
    /// finite. Subtracting two finite values can still overflow to infinity.
    fn valid_change<T: RollFloat>(prev: T, next: T) -> Option<T> {
        if !prev.is_valid() || !next.is_valid() {
            return None;
        }
        let change = next - prev;
        change.is_valid().then_some(change)
    }

    fn window_rsi<T: RollFloat>(gain_sum: T, loss_sum: T, valid_count: usize) -> T {
        if valid_count == 0 {
            return T::NAN;
        }

        let n = <T as RollFloat>::from_usize(valid_count);
        let avg_gain = gain_sum / n;
        let avg_loss = loss_sum / n;

        let rs = if avg_loss == T::ZERO {
            T::HUNDRED
        } else {
            avg_gain / avg_loss
        };

        T::HUNDRED - T::HUNDRED / (T::ONE + rs)
    }
}

impl<T: RollFloat> SlidingOperator<T> for RollingRsi {
    fn name(&self) -> &'static str {
        "rsi"
    }

    fn compute(&self, data: &[T], window: usize) -> Series<T> {
        let len = data.len();
        if len < 2 || window == 0 || window > len || len < window + 1 {
            return Series::new();
        }

        let mut result = Series::with_capacity(len - window + 1);

        let mut gain_sum = T::ZERO;
        let mut loss_sum = T::ZERO;
        let mut valid_count = 0usize;

        // The first window spans samples [0, window) and holds the
        // differences at indices 1..window.
        for i in 1..window {
            if let Some(change) = Self::valid_change(data[i - 1], data[i]) {
                if change > T::ZERO {
                    gain_sum = gain_sum + change;
                } else {
                    loss_sum = loss_sum - change;
                }
                valid_count += 1;
            }
        }
        result.push(Self::window_rsi(gain_sum, loss_sum, valid_count));

        for i in window..len {
            // A window of length 1 holds no differences to retire or admit
            if window >= 2 {
                // Retire the oldest difference if it had contributed
                if let Some(change) = Self::valid_change(data[i - window], data[i - window + 1]) {
                    if change > T::ZERO {
                        gain_sum = gain_sum - change;
                    } else {
                        loss_sum = loss_sum + change;
                    }
                    valid_count -= 1;
                }
                // Admit the newest difference if it qualifies
                if let Some(change) = Self::valid_change(data[i - 1], data[i]) {
                    if change > T::ZERO {
                        gain_sum = gain_sum + change;
                    } else {
                        loss_sum = loss_sum - change;
                    }
                    valid_count += 1;
                }
            }
            result.push(Self::window_rsi(gain_sum, loss_sum, valid_count));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// RSI emitted for a loss-free window under the `rs = 100` convention.
    const RSI_NO_LOSS: f64 = 100.0 - 100.0 / 101.0;

    #[test]
    fn test_rsi_name() {
        assert_eq!(SlidingOperator::<f64>::name(&RollingRsi), "rsi");
    }

    #[test]
    fn test_rsi_basic() {
        let data = [10.0, 12.0, 14.0, 11.0, 13.0, 15.0, 12.0, 14.0, 16.0];
        let result = RollingRsi.compute(&data, 3);

        // Differences: +2 +2 -3 +2 +2 -3 +2 +2; each window holds two of them.
        // Mixed windows: avg_gain = 1, avg_loss = 1.5, rs = 2/3, rsi = 40.
        let expected = [RSI_NO_LOSS, 40.0, 40.0, RSI_NO_LOSS, 40.0, 40.0, RSI_NO_LOSS];
        assert_eq!(result.len(), expected.len());
        for (i, &want) in expected.iter().enumerate() {
            assert_relative_eq!(result[i], want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rsi_strictly_increasing() {
        let data: Vec<f64> = (0..12).map(|i| 100.0 + i as f64).collect();
        let result = RollingRsi.compute(&data, 5);

        assert_eq!(result.len(), 8);
        for &value in result.iter() {
            assert_relative_eq!(value, RSI_NO_LOSS, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rsi_strictly_decreasing_is_zero() {
        let data: Vec<f64> = (0..12).map(|i| 100.0 - i as f64).collect();
        let result = RollingRsi.compute(&data, 5);

        assert_eq!(result.len(), 8);
        for &value in result.iter() {
            assert_relative_eq!(value, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rsi_constant_series_takes_no_loss_branch() {
        // Zero-valued differences land in the loss-sum, so avg_loss == 0
        let data = [5.0; 8];
        let result = RollingRsi.compute(&data, 3);

        assert_eq!(result.len(), 6);
        for &value in result.iter() {
            assert_relative_eq!(value, RSI_NO_LOSS, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rsi_degenerate_inputs() {
        let data = [1.0, 2.0, 3.0];
        assert!(RollingRsi.compute(&data, 0).is_empty());
        assert!(RollingRsi.compute(&data, 4).is_empty());
        // No room for even one difference beyond the first window
        assert!(RollingRsi.compute(&data, 3).is_empty());

        let single = [1.0];
        assert!(RollingRsi.compute(&single, 1).is_empty());

        let empty: [f64; 0] = [];
        assert!(RollingRsi.compute(&empty, 1).is_empty());
    }

    #[test]
    fn test_rsi_window_one_is_all_nan() {
        // A one-sample window spans zero differences
        let data = [1.0, 2.0, 3.0, 4.0];
        let result = RollingRsi.compute(&data, 1);

        assert_eq!(result.len(), 4);
        assert_eq!(result.nan_count(), 4);
    }

    #[test]
    fn test_rsi_skips_differences_with_invalid_endpoints() {
        let data = [1.0, 2.0, f64::NAN, 4.0, 5.0, 3.0];
        let result = RollingRsi.compute(&data, 3);

        // Differences: +1, invalid, invalid, +1, -2
        assert_eq!(result.len(), 4);
        assert_relative_eq!(result[0], RSI_NO_LOSS, epsilon = 1e-12); // {+1}
        assert!(result[1].is_nan()); // both differences invalid
        assert_relative_eq!(result[2], RSI_NO_LOSS, epsilon = 1e-12); // {+1}
        assert_relative_eq!(result[3], 100.0 / 3.0, epsilon = 1e-12); // {+1, -2}
    }

    #[test]
    fn test_rsi_guards_overflowing_difference() {
        // f64::MAX - (-f64::MAX) overflows to infinity: both endpoints are
        // finite but the difference is not, so it must not contribute.
        let data = [-f64::MAX, f64::MAX, 1.0, 2.0, 3.0];
        let result = RollingRsi.compute(&data, 2);

        assert_eq!(result.len(), 4);
        assert!(result[0].is_nan()); // only the overflowing difference in window
        assert_relative_eq!(result[1], 0.0, epsilon = 1e-12); // pure loss: 1.0 - f64::MAX
        assert_relative_eq!(result[2], RSI_NO_LOSS, epsilon = 1e-12);
        assert_relative_eq!(result[3], RSI_NO_LOSS, epsilon = 1e-12);
    }

    #[test]
    fn test_rsi_bounds() {
        let data = [
            100.0, 110.0, 105.0, 115.0, 110.0, 120.0, 115.0, 125.0, 120.0, 130.0, 50.0, 45.0,
            40.0, 35.0, 30.0,
        ];
        let result = RollingRsi.compute(&data, 5);

        assert_eq!(result.len(), 11);
        for &value in result.iter() {
            assert!(value >= 0.0, "RSI {} should be >= 0", value);
            assert!(value <= 100.0, "RSI {} should be <= 100", value);
        }
    }
}
