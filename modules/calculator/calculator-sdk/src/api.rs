//! Calculator API trait and types
//!
//! Contract trait and types for the calculator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Number;

/// Calculator API trait
///
/// Five pure binary operations over [`Number`]. Implementations hold no
/// state, so a single instance may be shared freely between threads.
pub trait CalculatorApi: Send + Sync {
    /// Add two numbers and return the sum.
    fn add(&self, a: Number, b: Number) -> Number;

    /// Subtract `b` from `a`.
    fn subtract(&self, a: Number, b: Number) -> Number;

    /// Multiply two numbers.
    fn multiply(&self, a: Number, b: Number) -> Number;

    /// Divide `a` by `b`.
    ///
    /// An integer quotient is kept when both operands are integers and the
    /// division is exact; otherwise the quotient is a float.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] when `b` is zero.
    fn divide(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Raise `base` to a non-negative integer `exponent`.
    fn power(&self, base: Number, exponent: u32) -> Number;
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid number: '{input}'")]
    InvalidNumber { input: String },

    #[error("exponent must be a non-negative integer, got {exponent}")]
    InvalidExponent { exponent: Number },

    #[error("unknown operation: '{name}'")]
    UnknownOperation { name: String },
}

/// One of the five calculator operations, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Lowercase name, as accepted by [`Operation::from_str`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
        }
    }

    /// Evaluate this operation on `calc`.
    ///
    /// For [`Operation::Power`] the right operand is the exponent and must be
    /// an integer in `0..=u32::MAX`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] from a zero divisor and
    /// [`CalculatorError::InvalidExponent`] for a float, negative or oversized
    /// exponent.
    pub fn apply(
        self,
        calc: &dyn CalculatorApi,
        a: Number,
        b: Number,
    ) -> Result<Number, CalculatorError> {
        match self {
            Self::Add => Ok(calc.add(a, b)),
            Self::Subtract => Ok(calc.subtract(a, b)),
            Self::Multiply => Ok(calc.multiply(a, b)),
            Self::Divide => calc.divide(a, b),
            Self::Power => {
                let exponent = match b {
                    Number::Int(value) => u32::try_from(value).ok(),
                    Number::Float(_) => None,
                }
                .ok_or(CalculatorError::InvalidExponent { exponent: b })?;
                Ok(calc.power(a, exponent))
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalculatorError::UnknownOperation { name: s.to_owned() })
    }
}
