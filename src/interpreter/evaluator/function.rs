/// The builtin registry.
///
/// Declares every builtin once, with its names, arity and implementation,
/// and applies a builtin to its argument expressions.
pub mod core;
/// Floating-point functions.
///
/// Trigonometry, hyperbolic functions, exponentials, logarithms and roots,
/// computed in binary64 and converted back to decimals. Also the exact
/// rounding functions and `abs`.
pub mod math;
/// Bitwise functions on integral operands.
pub mod bitwise;
/// `factorial` and `is_prime`.
pub mod integer;
/// The higher-order `sum` and `product`.
///
/// Both evaluate their body once per integer step with the loop variable
/// bound, so they receive their arguments unevaluated.
pub mod range;
/// `rand`/`random`.
pub mod random;
