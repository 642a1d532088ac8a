use num_bigint::BigInt;

use crate::{
    error::Error,
    interpreter::{evaluator::core::EvalResult, value::decimal::Decimal},
};

/// Requires an operand with no fractional part and returns it as an integer.
///
/// `1.0` is accepted; `1.5` is not.
///
/// # Parameters
/// - `operation`: Name used in the error message.
/// - `value`: The operand.
///
/// # Errors
/// `Error::Domain` if the operand is not integral or has too many digits to
/// write out.
///
/// # Example
/// ```
/// use decicalc::interpreter::{evaluator::utils::integer_operand, value::decimal::Decimal};
/// use num_bigint::BigInt;
///
/// let whole: Decimal = "12.00".parse().unwrap();
/// assert_eq!(integer_operand("BitAnd", &whole).unwrap(), BigInt::from(12));
///
/// let error = integer_operand("BitAnd", &"1.5".parse().unwrap()).unwrap_err();
/// assert_eq!(error.to_string(), "BitAnd: 1.5 is not an integer");
/// ```
pub fn integer_operand(operation: &str, value: &Decimal) -> EvalResult<BigInt> {
    value.to_integer()?
         .ok_or_else(|| Error::domain(format!("{operation}: {value} is not an integer")))
}

/// Converts a binary64 result into a decimal.
///
/// # Errors
/// `Error::Domain` for NaN or an infinite result, such as `sqrt(-1)` or
/// `log(0)`.
pub fn float_result(operation: &str, value: f64) -> EvalResult<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| {
                                Error::domain(format!("{operation}: result is not a finite number"))
                            })
}
