//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator:
//! - API trait (`CalculatorApi`)
//! - Numeric value type (`Number`)
//! - Operation selector (`Operation`)
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorApi, Number};
//!
//! let calc = calculator::Calculator::new();
//! let sum = calc.add(Number::Int(5), Number::Int(3));
//! let quotient = calc.divide(Number::Int(5), Number::Int(2))?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorApi, CalculatorError, Operation};

mod number;
pub use number::Number;
