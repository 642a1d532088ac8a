use std::{cmp::Ordering, fmt, ops};

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{
    error::{Error, Result},
    util::num::{digit_count, pow10},
};

/// Significant digits kept by inexact divisions and negative powers.
pub const PRECISION: u64 = 34;

/// An immutable arbitrary-precision decimal number with a visible scale.
///
/// Equality and ordering compare numeric value, so `1.0 == 1.00`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Decimal(BigDecimal);

impl Decimal {
    /// Builds `unscaled * 10^-scale`.
    ///
    /// ## Example
    /// ```
    /// use decicalc::interpreter::value::decimal::Decimal;
    ///
    /// assert_eq!(Decimal::new(125.into(), 2).to_string(), "1.25");
    /// assert_eq!(Decimal::new(12.into(), -2).to_string(), "1.2E+3");
    /// ```
    #[must_use]
    pub fn new(unscaled: BigInt, scale: i64) -> Self {
        Self(BigDecimal::new(unscaled, scale))
    }

    /// The additive identity, scale 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// The multiplicative identity, scale 0.
    #[must_use]
    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    /// Splits the value into its unscaled integer and its scale.
    #[must_use]
    pub fn parts(&self) -> (BigInt, i64) {
        self.0.as_bigint_and_exponent()
    }

    /// Number of digits after the decimal point. Negative for values written
    /// with a positive exponent, such as `1E+3`.
    #[must_use]
    pub fn scale(&self) -> i64 {
        self.parts().1
    }

    /// Parses a decimal literal such as `12`, `1.00`, `.5`, `1.` or `1.2E3`.
    ///
    /// The scale is the number of digits typed after the point minus the
    /// exponent, so `1.00` keeps scale 2 and `1.2E3` has scale -2.
    ///
    /// ## Errors
    /// Returns `Error::Domain` if the text is not a decimal literal or its
    /// exponent does not fit in 64 bits.
    ///
    /// ## Example
    /// ```
    /// use decicalc::interpreter::value::decimal::Decimal;
    ///
    /// assert_eq!(Decimal::parse_literal("1.00").unwrap().to_string(), "1.00");
    /// assert_eq!(Decimal::parse_literal(".1E3").unwrap().to_string(), "1E+2");
    /// assert!(Decimal::parse_literal("1.2.3").is_err());
    /// ```
    pub fn parse_literal(text: &str) -> Result<Self> {
        let malformed = || Error::domain(format!("malformed number '{text}'"));

        let (mantissa, exponent) = match text.find(['e', 'E']) {
            Some(index) => {
                let exponent = text[index + 1..].parse::<i64>().map_err(|_| malformed())?;
                (&text[..index], exponent)
            },
            None => (text, 0),
        };
        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let digits = format!("{integer}{fraction}");
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let unscaled = digits.parse::<BigInt>().map_err(|_| malformed())?;
        let fraction_len = i64::try_from(fraction.len()).map_err(|_| malformed())?;
        let scale = fraction_len.checked_sub(exponent).ok_or_else(malformed)?;

        Ok(Self::new(unscaled, scale))
    }

    /// Parses the digits of an integer literal in the given radix.
    ///
    /// Returns `None` if a digit is invalid for the radix.
    #[must_use]
    pub fn from_radix(digits: &str, radix: u32) -> Option<Self> {
        BigInt::parse_bytes(digits.as_bytes(), radix).map(|value| Self::new(value, 0))
    }

    /// Converts a binary64 result back into a decimal.
    ///
    /// Uses the shortest decimal form that round-trips to the same `f64`,
    /// strips trailing zeros and never leaves a negative scale, so `9.0`
    /// becomes `9` and `1e20` renders as a plain integer. Returns `None` for
    /// NaN and infinities.
    ///
    /// ## Example
    /// ```
    /// use decicalc::interpreter::value::decimal::Decimal;
    ///
    /// assert_eq!(Decimal::from_f64(2.0).unwrap().to_string(), "2");
    /// assert_eq!(Decimal::from_f64(-0.25).unwrap().to_string(), "-0.25");
    /// assert!(Decimal::from_f64(f64::NAN).is_none());
    /// ```
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let text = format!("{:e}", value.abs());
        let mut magnitude = Self::parse_literal(&text).ok()?.normalized();
        if magnitude.scale() < 0 {
            magnitude = Self(magnitude.0.with_scale(0));
        }
        Some(if value.is_sign_negative() { -magnitude } else { magnitude })
    }

    /// Nearest binary64 value.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    /// Returns `true` if the value is zero at any scale.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the value has no fractional part.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        let (unscaled, scale) = self.parts();
        if scale <= 0 || unscaled.is_zero() {
            return true;
        }
        let scale = scale.unsigned_abs();
        scale <= digit_count(&unscaled) && (&unscaled % pow10(scale)).is_zero()
    }

    /// Returns the value as an integer if it has no fractional part, `None`
    /// otherwise.
    ///
    /// ## Errors
    /// Returns `Error::Domain` if the integer has too many digits to write
    /// out, such as `1E9000000000000000000`.
    pub fn to_integer(&self) -> Result<Option<BigInt>> {
        if !self.is_integral() {
            return Ok(None);
        }
        let integer = if self.scale() > 0 { self.0.with_scale(0) } else { rescaled(self, 0)? };
        Ok(Some(integer.into_bigint_and_exponent().0))
    }

    /// Absolute value, same scale.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Rounds to `scale` digits after the point. A larger scale only appends
    /// zeros.
    ///
    /// ## Errors
    /// Returns `Error::Domain` if the value would need more than `u32::MAX`
    /// appended zeros.
    pub fn round_to_scale(&self, scale: i64, mode: RoundingMode) -> Result<Self> {
        if scale > self.scale() {
            return rescaled(self, scale).map(Self);
        }
        Ok(Self(self.0.with_scale_round(scale, mode)))
    }

    /// Drops the fractional part.
    ///
    /// ## Errors
    /// See [`Decimal::round_to_scale`].
    pub fn trunc(&self) -> Result<Self> {
        self.round_to_scale(0, RoundingMode::Down)
    }

    /// Largest integer not greater than the value.
    ///
    /// ## Errors
    /// See [`Decimal::round_to_scale`].
    pub fn floor(&self) -> Result<Self> {
        self.round_to_scale(0, RoundingMode::Floor)
    }

    /// Smallest integer not less than the value.
    ///
    /// ## Errors
    /// See [`Decimal::round_to_scale`].
    pub fn ceil(&self) -> Result<Self> {
        self.round_to_scale(0, RoundingMode::Ceiling)
    }

    /// Nearest integer, halves rounded away from zero.
    ///
    /// ## Errors
    /// See [`Decimal::round_to_scale`].
    pub fn round(&self) -> Result<Self> {
        self.round_to_scale(0, RoundingMode::HalfUp)
    }

    /// Removes trailing zeros from the unscaled value. Zero becomes `0`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self(self.0.normalized())
    }

    /// Removes trailing zeros while the scale stays above `preferred`.
    fn strip_zeros_to(&self, preferred: i64) -> Self {
        let (mut unscaled, mut scale) = self.parts();
        let ten = BigInt::from(10u8);
        while scale > preferred {
            let (quotient, remainder) = unscaled.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            unscaled = quotient;
            scale -= 1;
        }
        Self::new(unscaled, scale)
    }

    /// Quotient rounded to [`PRECISION`] significant digits, half-even.
    ///
    /// An exact quotient keeps as few trailing zeros as it can while its
    /// scale stays at or above `self.scale - divisor.scale`, so `1/2` is
    /// `0.5` and `1.00/2` is `0.50`.
    ///
    /// ## Errors
    /// Returns `Error::DivisionByZero` if `divisor` is zero, and
    /// `Error::Domain` if the scale of the quotient does not fit in 64 bits.
    ///
    /// ## Example
    /// ```
    /// use decicalc::interpreter::value::decimal::Decimal;
    ///
    /// let one = Decimal::from(1);
    /// assert_eq!(one.checked_div(&Decimal::from(2)).unwrap().to_string(), "0.5");
    /// assert_eq!(one.checked_div(&Decimal::from(3)).unwrap().to_string(),
    ///            "0.3333333333333333333333333333333333");
    /// assert!(one.checked_div(&Decimal::zero()).is_err());
    /// ```
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        let (dividend_unscaled, dividend_scale) = self.parts();
        let (divisor_unscaled, divisor_scale) = divisor.parts();
        if divisor_unscaled.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let preferred = dividend_scale.checked_sub(divisor_scale).ok_or_else(scale_overflow)?;
        if dividend_unscaled.is_zero() {
            return Ok(Self::new(BigInt::zero(), preferred));
        }

        let negative = dividend_unscaled.sign() != divisor_unscaled.sign();
        let dividend = dividend_unscaled.abs();
        let divisor = divisor_unscaled.abs();

        let wanted = PRECISION + 2 + digit_count(&divisor);
        let shift = wanted.saturating_sub(digit_count(&dividend));
        let shift_scale = i64::try_from(shift).map_err(|_| Error::domain("quotient is too large"))?;
        let (quotient, remainder) = (dividend * pow10(shift)).div_rem(&divisor);

        let scale = preferred.checked_add(shift_scale).ok_or_else(scale_overflow)?;
        let (magnitude, scale, exact) =
            round_significant(quotient, scale, !remainder.is_zero()).ok_or_else(scale_overflow)?;
        let result = Self::new(if negative { -magnitude } else { magnitude }, scale);

        Ok(if exact { result.strip_zeros_to(preferred) } else { result })
    }

    /// Truncated remainder: the sign follows the dividend, the scale is the
    /// larger of the two operand scales.
    ///
    /// ## Errors
    /// Returns `Error::DivisionByZero` if `divisor` is zero, and
    /// `Error::Domain` if the operand scales are too far apart.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (left, right) = aligned(self, divisor)?;
        let (left, scale) = left.into_bigint_and_exponent();
        let (right, _) = right.into_bigint_and_exponent();
        Ok(Self::new(left % right, scale))
    }

    /// Sum at the larger of the two scales, so `1.5 + 2.25` is `3.75` and
    /// `1.00 + 0` is `1.00`.
    ///
    /// ## Errors
    /// Returns `Error::Domain` if the operand scales are too far apart.
    ///
    /// ## Example
    /// ```
    /// use decicalc::interpreter::value::decimal::Decimal;
    ///
    /// let a: Decimal = "1.00".parse().unwrap();
    /// assert_eq!(a.checked_add(&Decimal::zero()).unwrap().to_string(), "1.00");
    /// ```
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        let (left, right) = aligned(self, rhs)?;
        Ok(Self(left + right))
    }

    /// Difference at the larger of the two scales.
    ///
    /// ## Errors
    /// Returns `Error::Domain` if the operand scales are too far apart.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        let (left, right) = aligned(self, rhs)?;
        Ok(Self(left - right))
    }

    /// Product at the sum of the two scales, so `1.5 * 0.02` is `0.030`.
    ///
    /// Multiplying by one keeps the other operand's scale: `1.00 * 1` is
    /// `1.00`.
    ///
    /// ## Errors
    /// Returns `Error::Domain` if the sum of the scales does not fit in 64
    /// bits.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        let (left, left_scale) = self.parts();
        let (right, right_scale) = rhs.parts();
        let scale = left_scale.checked_add(right_scale).ok_or_else(scale_overflow)?;
        Ok(Self::new(left * right, scale))
    }

    /// Exact power with a non-negative integer exponent.
    ///
    /// ## Errors
    /// Returns `Error::Domain` if the resulting scale overflows.
    ///
    /// ## Example
    /// ```
    /// use decicalc::interpreter::value::decimal::Decimal;
    ///
    /// let two = Decimal::from(2);
    /// assert_eq!(two.pow(81).unwrap().to_string(), "2417851639229258349412352");
    /// assert_eq!("1.5".parse::<Decimal>().unwrap().pow(2).unwrap().to_string(), "2.25");
    /// ```
    pub fn pow(&self, exponent: u32) -> Result<Self> {
        let (unscaled, scale) = self.parts();
        let scale = scale.checked_mul(i64::from(exponent))
                         .ok_or_else(|| Error::domain("exponent is too large"))?;
        Ok(Self::new(num_traits::pow(unscaled, exponent as usize), scale))
    }

    /// Power with an integer exponent of either sign; a negative exponent
    /// divides one by the positive power.
    ///
    /// ## Errors
    /// Returns `Error::DivisionByZero` for a negative power of zero, and
    /// `Error::Domain` for overflowing scales.
    pub fn powi(&self, exponent: i64) -> Result<Self> {
        let magnitude = u32::try_from(exponent.unsigned_abs())
            .map_err(|_| Error::domain(format!("exponent {exponent} is out of range")))?;
        let power = self.pow(magnitude)?;
        if exponent < 0 { Self::one().checked_div(&power) } else { Ok(power) }
    }
}

fn scale_overflow() -> Error {
    Error::domain("scale overflow")
}

/// Rounds `magnitude` (a non-negative integer at `scale`) to [`PRECISION`]
/// digits. `sticky` records nonzero digits already discarded below it.
/// Returns the rounded digits, their scale, and whether no information was
/// lost, or `None` if the scale overflows.
fn round_significant(magnitude: BigInt, scale: i64, sticky: bool) -> Option<(BigInt, i64, bool)> {
    let digits = digit_count(&magnitude);
    if digits <= PRECISION {
        return Some((magnitude, scale, !sticky));
    }
    let dropped = digits - PRECISION;
    let divisor = pow10(dropped);
    let (mut kept, remainder) = magnitude.div_rem(&divisor);
    let exact = remainder.is_zero() && !sticky;

    let twice = &remainder * 2u8;
    let round_up = match twice.cmp(&divisor) {
        Ordering::Greater => true,
        Ordering::Equal => sticky || kept.is_odd(),
        Ordering::Less => false,
    };
    if round_up {
        kept += 1u8;
    }

    let mut scale = scale.checked_sub(i64::try_from(dropped).ok()?)?;
    if digit_count(&kept) > PRECISION {
        kept /= 10u8;
        scale = scale.checked_sub(1)?;
    }
    Some((kept, scale, exact))
}

/// Brings both operands to the larger scale. Both sides of the result share
/// one scale, which the `BigDecimal` operators then keep.
fn aligned(left: &Decimal, right: &Decimal) -> Result<(BigDecimal, BigDecimal)> {
    let scale = left.scale().max(right.scale());
    Ok((rescaled(left, scale)?, rescaled(right, scale)?))
}

/// Raises the scale of `value` to `scale`, appending zeros to the unscaled
/// value. Fails when that would mean more than `u32::MAX` zeros.
fn rescaled(value: &Decimal, scale: i64) -> Result<BigDecimal> {
    let gap = scale.checked_sub(value.scale()).ok_or_else(scale_overflow)?;
    if !value.is_zero() && u32::try_from(gap).is_err() {
        return Err(scale_overflow());
    }
    Ok(value.0.with_scale(scale))
}

impl ops::Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl From<bool> for Decimal {
    fn from(value: bool) -> Self {
        Self::from(i64::from(value))
    }
}

impl std::str::FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (negative, literal) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let value = Self::parse_literal(literal)?;
        Ok(if negative { -value } else { value })
    }
}

/// Renders plainly when the scale is non-negative and the value is not too
/// small, otherwise in scientific form with one digit before the point and an
/// explicitly signed exponent: `1E+3`, `1.2E+3`, `1.5E-7`.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (unscaled, scale) = self.parts();
        let sign = if unscaled.sign() == Sign::Minus { "-" } else { "" };
        let coefficient = unscaled.magnitude().to_str_radix(10);

        let adjusted = coefficient.len() as i128 - 1 - i128::from(scale);

        if scale >= 0 && adjusted >= -6 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let scale = scale as usize;
            if scale == 0 {
                return write!(f, "{sign}{coefficient}");
            }
            if coefficient.len() > scale {
                let (integer, fraction) = coefficient.split_at(coefficient.len() - scale);
                return write!(f, "{sign}{integer}.{fraction}");
            }
            let zeros = "0".repeat(scale - coefficient.len());
            return write!(f, "{sign}0.{zeros}{coefficient}");
        }

        let (first, rest) = coefficient.split_at(1);
        let point = if rest.is_empty() { "" } else { "." };
        let exponent_sign = if adjusted >= 0 { "+" } else { "" };
        write!(f, "{sign}{first}{point}{rest}E{exponent_sign}{adjusted}")
    }
}
