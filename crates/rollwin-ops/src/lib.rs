//! # rollwin-ops
//!
//! Windowed statistic operators for the rust-rollwin library.
//!
//! This crate provides the incremental sliding-window statistics (rolling
//! mean, rolling population standard deviation and rolling RSI) plus the
//! name-based [`OperatorRegistry`] through which callers select an
//! algorithm dynamically.
//!
//! Every operator follows the same forgiving convention: degenerate input
//! yields an empty series, a window with too few valid samples yields NaN
//! at that position, and non-finite samples are excluded from the window
//! accumulators instead of poisoning them.
//!
//! # Example
//!
//! ```
//! use rollwin_core::traits::SlidingOperator;
//! use rollwin_ops::prelude::*;
//!
//! let registry = OperatorRegistry::<f64>::with_builtins();
//!
//! let mean = registry.get("mean").expect("builtin operator");
//! let result = mean.compute(&[1.0, 2.0, f64::NAN, 4.0], 2);
//!
//! assert_eq!(result.len(), 3);
//! assert_eq!(result[0], 1.5);
//! assert_eq!(result[1], 2.0); // NaN is excluded, not averaged in
//! assert_eq!(result[2], 4.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod mean;
pub mod registry;
pub mod rsi;
pub mod stddev;

pub mod prelude;

pub use prelude::*;
