//! Domain service for calculator
//!
//! Contains the core arithmetic. Integer operands stay integers while the
//! result is exact and fits in `i64`; overflow and mixed operands are
//! computed in `f64`.

use calculator_sdk::{CalculatorApi, CalculatorError, Number};
use tracing::debug;

/// Domain service that performs calculator operations.
///
/// Holds no state; every operation is a pure function of its arguments.
#[derive(Clone, Debug, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Apply `int_op` when both operands are integers and it does not overflow,
/// otherwise fall back to `float_op` on the widened operands.
fn promote(
    a: Number,
    b: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Number {
    if let (Number::Int(x), Number::Int(y)) = (a, b)
        && let Some(value) = int_op(x, y)
    {
        return Number::Int(value);
    }
    Number::Float(float_op(a.as_f64(), b.as_f64()))
}

impl CalculatorApi for Service {
    fn add(&self, a: Number, b: Number) -> Number {
        debug!(%a, %b, "performing addition");
        promote(a, b, i64::checked_add, |x, y| x + y)
    }

    fn subtract(&self, a: Number, b: Number) -> Number {
        debug!(%a, %b, "performing subtraction");
        promote(a, b, i64::checked_sub, |x, y| x - y)
    }

    fn multiply(&self, a: Number, b: Number) -> Number {
        debug!(%a, %b, "performing multiplication");
        promote(a, b, i64::checked_mul, |x, y| x * y)
    }

    fn divide(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        debug!(%a, %b, "performing division");
        if b.is_zero() {
            return Err(CalculatorError::DivisionByZero);
        }
        // Exact integer quotients stay integral; i64::MIN / -1 overflows both
        // checks and is computed as a float.
        let exact = |x: i64, y: i64| match x.checked_rem(y) {
            Some(0) => x.checked_div(y),
            _ => None,
        };
        Ok(promote(a, b, exact, |x, y| x / y))
    }

    fn power(&self, base: Number, exponent: u32) -> Number {
        debug!(%base, exponent, "performing exponentiation");
        match base {
            Number::Int(value) => value.checked_pow(exponent).map_or_else(
                || Number::Float(base.as_f64().powf(f64::from(exponent))),
                Number::Int,
            ),
            Number::Float(value) => Number::Float(value.powf(f64::from(exponent))),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    const SAMPLES: [i64; 9] = [-1000, -17, -2, -1, 0, 1, 3, 42, 99_999];

    fn int(value: i64) -> Number {
        Number::Int(value)
    }

    fn negate(n: Number) -> Number {
        match n {
            Number::Int(v) => Number::Int(-v),
            Number::Float(v) => Number::Float(-v),
        }
    }

    #[test]
    fn test_add() {
        let calc = Service::new();
        assert_eq!(calc.add(int(5), int(3)), int(8));
        assert_eq!(calc.add(int(-1), int(1)), int(0));
        assert_eq!(calc.add(int(-1), int(-1)), int(-2));
    }

    #[test]
    fn test_subtract() {
        let calc = Service::new();
        assert_eq!(calc.subtract(int(5), int(3)), int(2));
        assert_eq!(calc.subtract(int(1), int(5)), int(-4));
        assert_eq!(calc.subtract(int(-1), int(-1)), int(0));
    }

    #[test]
    fn test_multiply() {
        let calc = Service::new();
        assert_eq!(calc.multiply(int(5), int(3)), int(15));
        assert_eq!(calc.multiply(int(-1), int(5)), int(-5));
        assert_eq!(calc.multiply(int(-1), int(-1)), int(1));
    }

    #[test]
    fn test_divide() {
        let calc = Service::new();
        assert_eq!(calc.divide(int(6), int(3)), Ok(int(2)));
        assert_eq!(calc.divide(int(5), int(2)), Ok(Number::Float(2.5)));
        assert_eq!(
            calc.divide(int(5), int(0)),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn test_power() {
        let calc = Service::new();
        assert_eq!(calc.power(int(2), 3), int(8));
        assert_eq!(calc.power(int(5), 0), int(1));
        assert_eq!(calc.power(int(5), 1), int(5));
        assert_eq!(calc.power(int(-2), 2), int(4));
        assert_eq!(calc.power(int(-2), 3), int(-8));
    }

    #[test]
    fn test_add_is_commutative_with_zero_identity() {
        let calc = Service::new();
        for a in SAMPLES {
            assert_eq!(calc.add(int(a), int(0)), int(a));
            for b in SAMPLES {
                assert_eq!(calc.add(int(a), int(b)), calc.add(int(b), int(a)));
            }
        }
    }

    #[test]
    fn test_subtract_is_anti_symmetric() {
        let calc = Service::new();
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(
                    calc.subtract(int(a), int(b)),
                    negate(calc.subtract(int(b), int(a)))
                );
            }
        }
    }

    #[test]
    fn test_multiply_by_zero_and_one() {
        let calc = Service::new();
        for a in SAMPLES {
            assert_eq!(calc.multiply(int(a), int(0)), int(0));
            assert_eq!(calc.multiply(int(a), int(1)), int(a));
        }
    }

    #[test]
    fn test_divide_by_any_zero_fails() {
        let calc = Service::new();
        for a in SAMPLES {
            for zero in [int(0), Number::Float(0.0), Number::Float(-0.0)] {
                assert_eq!(
                    calc.divide(int(a), zero),
                    Err(CalculatorError::DivisionByZero)
                );
            }
        }
        assert_eq!(
            calc.divide(Number::Float(1.5), int(0)),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn test_power_zero_and_one_exponents() {
        let calc = Service::new();
        for a in SAMPLES.into_iter().filter(|&a| a != 0) {
            assert_eq!(calc.power(int(a), 0), int(1));
        }
        for a in SAMPLES {
            assert_eq!(calc.power(int(a), 1), int(a));
        }
    }

    #[test]
    fn test_power_sign_follows_exponent_parity() {
        let calc = Service::new();
        assert_eq!(calc.power(int(-3), 4), int(81));
        assert_eq!(calc.power(int(-3), 5), int(-243));
        assert_eq!(calc.power(Number::Float(-2.0), 3), Number::Float(-8.0));
        assert_eq!(calc.power(Number::Float(-2.0), 2), Number::Float(4.0));
    }

    #[test]
    fn test_float_operands_produce_floats() {
        let calc = Service::new();
        assert_eq!(calc.add(Number::Float(1.5), int(1)), Number::Float(2.5));
        assert_eq!(calc.subtract(int(1), Number::Float(0.5)), Number::Float(0.5));
        assert_eq!(calc.multiply(Number::Float(2.0), int(3)), Number::Float(6.0));
        assert_eq!(
            calc.divide(Number::Float(6.0), int(3)),
            Ok(Number::Float(2.0))
        );
        assert_eq!(calc.power(Number::Float(1.5), 2), Number::Float(2.25));
    }

    #[test]
    fn test_integer_overflow_promotes_to_float() {
        let calc = Service::new();
        let two_pow_63 = Number::Float(2f64.powi(63));
        let two_pow_64 = Number::Float(2f64.powi(64));

        assert_eq!(calc.add(int(i64::MAX), int(1)), two_pow_63);
        assert_eq!(
            calc.subtract(int(i64::MIN), int(1)),
            Number::Float(-2f64.powi(63))
        );
        assert_eq!(calc.multiply(int(i64::MAX), int(2)), two_pow_64);
        assert_eq!(calc.divide(int(i64::MIN), int(-1)), Ok(two_pow_63));
        assert_eq!(calc.power(int(2), 64), two_pow_64);
        assert_eq!(calc.power(int(2), 62), int(1 << 62));
    }

    #[test]
    fn test_service_is_shareable() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Service>();

        let api: &dyn CalculatorApi = &Service::new();
        assert_eq!(api.add(int(2), int(2)), int(4));
    }

    #[test]
    #[traced_test]
    fn test_operations_emit_debug_events() {
        let calc = Service::new();
        let _ = calc.add(int(1), int(2));
        let _ = calc.divide(int(1), int(0));

        assert!(logs_contain("performing addition"));
        assert!(logs_contain("performing division"));
    }
}
