//! Name-based operator lookup.
//!
//! The registry is an explicit, constructed object passed to whoever needs
//! lookups; there is no hidden global. Registration is expected to finish
//! before lookups begin, which the `&mut self` / `&self` split enforces at
//! compile time.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, string::ToString, vec::Vec};

use indexmap::IndexMap;

use rollwin_core::error::{OperatorError, Result};
use rollwin_core::num::RollFloat;
use rollwin_core::traits::SlidingOperator;

use crate::mean::RollingMean;
use crate::rsi::RollingRsi;
use crate::stddev::RollingStd;

/// Registry mapping stable operator names to implementations.
///
/// Registration is explicit, and a second registration under the same name
/// replaces the first. Looking up an unknown name is an absent result, not
/// a failure; callers must check before invoking.
///
/// Backed by an `IndexMap` so that [`names`](Self::names) reports operators
/// in registration order.
///
/// # Example
///
/// ```rust
/// use rollwin_core::traits::SlidingOperator;
/// use rollwin_ops::registry::OperatorRegistry;
///
/// let registry = OperatorRegistry::<f64>::with_builtins();
///
/// let mean = registry.get("mean").expect("builtin operator");
/// let result = mean.compute(&[1.0, 2.0, 3.0, 4.0], 2);
/// assert_eq!(result.as_slice(), &[1.5, 2.5, 3.5]);
///
/// assert!(registry.get("median").is_none());
/// ```
pub struct OperatorRegistry<T: RollFloat> {
    operators: IndexMap<String, Box<dyn SlidingOperator<T>>>,
}

impl<T: RollFloat> OperatorRegistry<T> {
    /// Create a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            operators: IndexMap::new(),
        }
    }

    /// Create a registry with the builtin operators registered:
    /// `"mean"`, `"std"` and `"rsi"`.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RollingMean));
        registry.register(Box::new(RollingStd));
        registry.register(Box::new(RollingRsi));
        registry
    }

    /// Register an operator under its own reported name, replacing any
    /// previous entry under that name.
    pub fn register(&mut self, operator: Box<dyn SlidingOperator<T>>) {
        self.operators.insert(operator.name().to_string(), operator);
    }

    /// Look up an operator by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn SlidingOperator<T>> {
        self.operators.get(name).map(|operator| operator.as_ref())
    }

    /// Look up an operator by name, failing with
    /// [`OperatorError::UnknownOperator`] when it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if no operator is registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<&dyn SlidingOperator<T>> {
        self.get(name)
            .ok_or_else(|| OperatorError::UnknownOperator(name.to_string()))
    }

    /// Check whether an operator is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    /// Registered operator names, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.operators.keys().map(|name| name.as_str()).collect()
    }

    /// Number of registered operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Returns `true` if no operator is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl<T: RollFloat> Default for OperatorRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
