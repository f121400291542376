//! Calculator Module
//!
//! A stateless calculator performing addition, subtraction, multiplication,
//! division and exponentiation over [`Number`] values.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic and the numeric promotion rules
//!
//! The public contract (`CalculatorApi`, `Number`, `CalculatorError`) lives in
//! the `calculator-sdk` crate and is re-exported here for convenience.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[doc(hidden)]
pub mod domain;

pub use calculator_sdk::{CalculatorApi, CalculatorError, Number, Operation};
pub use domain::Service as Calculator;
