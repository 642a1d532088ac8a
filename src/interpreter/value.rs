/// Arbitrary-precision decimal numbers.
///
/// Defines the `Decimal` type every expression evaluates to. A decimal is an
/// unscaled integer together with a scale (the number of digits after the
/// point), so `1.00` and `1` are numerically equal but render differently.
///
/// Arithmetic follows fixed scale rules: addition and subtraction keep the
/// larger scale, multiplication adds the scales, and division works to
/// [`decimal::PRECISION`] significant digits when the quotient is not exact.
pub mod decimal;
