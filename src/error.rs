use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a calculation can end in.
///
/// Lexing, parsing and evaluation all report through this single type. The
/// variant only selects the message; callers normally just display it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The lexer found a character that starts no token.
    #[error("unexpected character '{text}' at offset {offset}")]
    UnexpectedCharacter {
        /// The offending source text.
        text:   String,
        /// Byte offset into the expression.
        offset: usize,
    },
    /// A specific token was required but another one was found.
    ///
    /// Both fields are already quoted by the parser where appropriate.
    #[error("expected {expected}, got {found} instead")]
    ExpectedToken {
        /// Description of the token the parser needed.
        expected: String,
        /// Description of the token it saw.
        found:    String,
    },
    /// A token that cannot start an operand.
    #[error("unexpected {found}")]
    UnexpectedToken {
        /// Description of the token.
        found: String,
    },
    /// A variable was read before anything was assigned to it.
    #[error("unknown variable '{name}'")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// The left side of `=` was not a plain variable name.
    #[error("can't assign to {target}")]
    NotAssignable {
        /// The rendered left-hand expression.
        target: String,
    },
    /// A builtin was called with the wrong number of arguments.
    #[error("'{function}' expects {expected} argument(s), got {found}")]
    ArgumentCountMismatch {
        /// The name the function was called by.
        function: String,
        /// Human-readable arity, such as `2` or `at least 2`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// Division or remainder with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// An operand outside the domain of an operation.
    #[error("{details}")]
    Domain {
        /// What went wrong.
        details: String,
    },
}

impl Error {
    /// Shorthand for building an [`Error::Domain`].
    pub fn domain(details: impl Into<String>) -> Self {
        Self::Domain { details: details.into() }
    }
}
