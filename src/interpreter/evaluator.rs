/// Core evaluation logic and context management.
///
/// Contains the `Context` that owns the constant, function and variable
/// tables, and the main evaluation dispatch.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons, shifts, powers and assignment.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical NOT and factorial.
pub mod unary;

/// Utility functions for evaluation.
///
/// Provides operand checks shared by operators and builtins.
pub mod utils;

/// Builtin functions.
///
/// Declares the closed set of builtins, their names, arities and
/// implementations, including the higher-order `sum` and `product`.
pub mod function;
