//! Domain layer for calculator module
//!
//! Contains the arithmetic business logic.

pub mod service;

pub use service::Service;
