//! # decicalc
//!
//! decicalc is an arbitrary-precision decimal calculator written in Rust.
//! It tokenizes, parses and evaluates arithmetic expressions with named
//! constants, variables, a previous-result variable `Ans`, and a library of
//! builtin functions including the higher-order `sum` and `product`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The tree is built by the parser and evaluated
/// against a session context.
///
/// # Responsibilities
/// - Defines literal, variable, operator and function-call nodes.
/// - Renders trees in a fully parenthesized form for diagnostics.
pub mod ast;
/// The calculator session.
///
/// Ties parsing and evaluation together, keeps the session context between
/// calls and maintains the `Ans` variable.
pub mod calculator;
/// Provides the error type for lexing, parsing and evaluation.
///
/// Every failure is reported as one `Error` carrying a human-readable message,
/// so callers can display it directly.
pub mod error;
/// Orchestrates the process of evaluating an expression.
///
/// This module ties together lexing, parsing, evaluation and the decimal value
/// type.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Resolves identifiers against constants, builtins and variables.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric utilities.
///
/// Power-of-ten construction, digit counting and checked conversions of
/// arbitrary-precision integers into machine integers.
pub mod util;

pub use crate::{calculator::Calculator, error::Error};

/// Evaluates a single expression in a fresh session.
///
/// Variables assigned inside the expression are discarded afterwards; use a
/// [`Calculator`] to keep them.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use decicalc::evaluate;
///
/// assert_eq!(evaluate("1/2").unwrap(), "0.5");
/// assert_eq!(evaluate("2^3^4").unwrap(), "2417851639229258349412352");
///
/// // Unknown variable.
/// let error = evaluate("undefinedVar").unwrap_err();
/// assert_eq!(error.to_string(), "unknown variable 'undefinedVar'");
/// ```
pub fn evaluate(expression: &str) -> error::Result<String> {
    Calculator::new().evaluate(expression)
}
