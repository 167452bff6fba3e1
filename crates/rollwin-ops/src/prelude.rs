//! Prelude for rollwin-ops.
//!
//! This module re-exports the operator family and the registry.

pub use crate::mean::RollingMean;
pub use crate::registry::OperatorRegistry;
pub use crate::rsi::RollingRsi;
pub use crate::stddev::RollingStd;
