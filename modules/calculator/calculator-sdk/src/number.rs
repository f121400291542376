//! Host-native numeric value accepted and produced by the calculator.

use std::fmt;
use std::num::FpCategory;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::CalculatorError;

/// A calculator operand or result.
///
/// Integers are kept as `i64` for as long as the result stays exact and in
/// range; everything else is carried as `f64`.
///
/// Serializes as a bare JSON number. Infinite and NaN floats have no JSON
/// number form and serialize as their `Display` string (`"inf"`, `"NaN"`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Widen to `f64`. Integers beyond 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    /// True for `0`, `0.0` and `-0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(value) => value == 0,
            Self::Float(value) => value.classify() == FpCategory::Zero,
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Int(value) => serializer.serialize_i64(value),
            Self::Float(value) if value.is_finite() => serializer.serialize_f64(value),
            Self::Float(value) => serializer.collect_str(&value),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for Number {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Self::Int(value));
        }
        trimmed
            .parse::<f64>()
            .map(Self::Float)
            .map_err(|_| CalculatorError::InvalidNumber {
                input: s.to_owned(),
            })
    }
}
