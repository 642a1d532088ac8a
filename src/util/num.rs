use num_bigint::BigInt;
use num_traits::{Pow, Signed, ToPrimitive, Zero};

use crate::error::{Error, Result};

/// Returns `10^exponent` as an arbitrary-precision integer.
///
/// ## Example
/// ```
/// use decicalc::util::num::pow10;
/// use num_bigint::BigInt;
///
/// assert_eq!(pow10(3), BigInt::from(1000));
/// assert_eq!(pow10(0), BigInt::from(1));
/// ```
#[must_use]
pub fn pow10(exponent: u64) -> BigInt {
    Pow::pow(BigInt::from(10u8), exponent)
}

/// Counts the decimal digits in the magnitude of `value`.
///
/// Zero has one digit. The sign is ignored.
///
/// ## Example
/// ```
/// use decicalc::util::num::digit_count;
/// use num_bigint::BigInt;
///
/// assert_eq!(digit_count(&BigInt::from(0)), 1);
/// assert_eq!(digit_count(&BigInt::from(-12345)), 5);
/// ```
#[must_use]
pub fn digit_count(value: &BigInt) -> u64 {
    if value.is_zero() {
        return 1;
    }
    value.magnitude().to_str_radix(10).len() as u64
}

/// Converts an integer to `u64`, failing with a domain error that names the
/// operation when it does not fit.
///
/// ## Errors
/// Returns `Error::Domain` if `value` is negative or larger than `u64::MAX`.
pub fn bigint_to_u64_checked(value: &BigInt, what: &str) -> Result<u64> {
    value.to_u64()
         .ok_or_else(|| Error::Domain { details: format!("{what} {value} is out of range") })
}

/// Converts the magnitude of an integer to `u32`, failing with a domain
/// error when it does not fit.
///
/// ## Errors
/// Returns `Error::Domain` if `|value|` is larger than `u32::MAX`.
///
/// ## Example
/// ```
/// use decicalc::util::num::magnitude_to_u32_checked;
/// use num_bigint::BigInt;
///
/// assert_eq!(magnitude_to_u32_checked(&BigInt::from(-3), "shift amount").unwrap(), 3);
/// assert!(magnitude_to_u32_checked(&BigInt::from(1u64 << 40), "shift amount").is_err());
/// ```
pub fn magnitude_to_u32_checked(value: &BigInt, what: &str) -> Result<u32> {
    value.abs()
         .to_u32()
         .ok_or_else(|| Error::Domain { details: format!("{what} {value} is out of range") })
}
