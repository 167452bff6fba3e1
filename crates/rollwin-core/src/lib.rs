//! # rollwin-core
//!
//! Core types and traits for the rust-rollwin sliding-window statistics
//! library.
//!
//! This crate provides the foundational abstractions used throughout the
//! library:
//!
//! - [`RollFloat`] - Trait for numeric types (f32/f64), carrying the sample
//!   validity predicate
//! - [`Series`] - Contiguous series container for inputs and outputs
//! - [`SlidingOperator`] - The operator calling convention
//! - [`OperatorError`] - Lookup error type
//!
//! ## Feature Flags
//!
//! - `std` (default) - Enable standard library support
//! - `alloc` - Enable heap allocation without full std
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use rollwin_core::prelude::*;
//!
//! // Operator outputs are plain series; NaN marks an under-determined window
//! let output: Series<f64> = Series::from_vec(vec![1.5, f64::NAN, 3.0]);
//! assert_eq!(output.nan_count(), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod num;
pub mod prelude;
pub mod series;
pub mod traits;

// Re-export core types at crate root
pub use error::{OperatorError, Result};
pub use num::RollFloat;
pub use series::Series;
pub use traits::SlidingOperator;
