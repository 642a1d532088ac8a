/// Parser state and the entry points.
///
/// Holds the token cursor and the read-only context used to resolve
/// identifiers, and starts descent at the lowest precedence level.
pub mod core;

/// Binary operator levels.
///
/// Implements the left-associative levels (`|`, `&`, relational, shift,
/// additive, multiplicative) and right-associative exponentiation.
pub mod binary;

/// Prefix, postfix and primary levels.
///
/// Handles prefix `!`, `-`, `~` and `√`, postfix factorial, parenthesized
/// sub-expressions, literals and identifier resolution.
pub mod unary;

/// Shared parsing helpers.
///
/// Token expectation and comma-separated argument lists.
pub mod utils;
