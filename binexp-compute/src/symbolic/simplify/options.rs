//! Configuration of the simplifier.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What constant folding does with a division or modulo operation whose divisor is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DivisionPolicy {
    /// Stop simplifying and report a [`DivisionByZero`] or [`ModuloByZero`] error.
    ///
    /// [`DivisionByZero`]: crate::symbolic::error::DivisionByZero
    /// [`ModuloByZero`]: crate::symbolic::error::ModuloByZero
    #[default]
    Error,

    /// Leave the operation unfolded and keep simplifying the rest of the tree.
    Keep,
}

/// Options that control how an expression is simplified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimplifyOptions {
    /// What to do when constant folding meets a zero divisor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub division_policy: DivisionPolicy,
}

impl SimplifyOptions {
    /// Returns the options with the given division policy.
    pub fn with_division_policy(mut self, division_policy: DivisionPolicy) -> Self {
        self.division_policy = division_policy;
        self
    }
}
