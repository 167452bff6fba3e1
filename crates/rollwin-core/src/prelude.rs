//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits from
//! rollwin-core.
//!
//! # Example
//!
//! ```rust
//! use rollwin_core::prelude::*;
//!
//! let series: Series<f64> = Series::from_vec(vec![100.0, 101.5, 99.8]);
//! assert!(!series.has_nan());
//! ```

// Core types
pub use crate::num::RollFloat;
pub use crate::series::Series;

// Error types
pub use crate::error::{OperatorError, Result};

// Traits
pub use crate::traits::SlidingOperator;
