use log::debug;

use crate::{
    ast::{BinaryOperator, Expr},
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::{Lexer, Token},
        parser::{binary::parse_logical_or, utils::expect},
    },
};

pub type ParseResult<T> = Result<T, Error>;

/// The state threaded through every parsing function.
///
/// Wraps the lexer cursor together with the context that decides whether an
/// identifier names a constant, a function or a variable. The context is only
/// read while parsing.
pub struct Parser<'a> {
    lexer:   Lexer<'a>,
    context: &'a Context,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned on the first token of `source`.
    ///
    /// # Errors
    /// Returns `Error::UnexpectedCharacter` if the first token is invalid.
    pub fn new(source: &'a str, context: &'a Context) -> ParseResult<Self> {
        Ok(Self { lexer: Lexer::new(source)?,
                  context })
    }

    /// The current token.
    #[must_use]
    pub const fn peek(&self) -> &Token {
        self.lexer.current()
    }

    /// Consumes the current token.
    pub fn advance(&mut self) -> ParseResult<()> {
        self.lexer.advance()
    }

    /// The context identifiers are resolved against.
    #[must_use]
    pub const fn context(&self) -> &'a Context {
        self.context
    }
}

/// Parses a complete expression and requires the input to end after it.
///
/// # Parameters
/// - `source`: The expression text.
/// - `context`: Supplies the constant and function names.
///
/// # Returns
/// The root of the expression tree.
///
/// # Errors
/// Any lexical or syntax error, including trailing input such as the second
/// operand in `1 2`.
///
/// # Example
/// ```
/// use decicalc::interpreter::{evaluator::core::Context, parser::core::parse};
///
/// let context = Context::new();
/// let tree = parse("1 + 2 * 3", &context).unwrap();
/// assert_eq!(tree.to_string(), "(1 + (2 * 3))");
///
/// let error = parse("(1", &context).unwrap_err();
/// assert_eq!(error.to_string(), "expected ')', got end of input instead");
/// ```
pub fn parse(source: &str, context: &Context) -> ParseResult<Expr> {
    let mut parser = Parser::new(source, context)?;
    let expression = parse_expression(&mut parser)?;
    expect(&mut parser, &Token::EndOfInput)?;
    debug!("parsed {source:?} as {expression}");
    Ok(expression)
}

/// Parses a full expression.
///
/// This is the lowest precedence level: an optional single assignment. The
/// left side is not checked here; assigning to anything but a variable fails
/// when the tree is evaluated.
///
/// Grammar: `expression := logical_or ("=" logical_or)?`
///
/// # Parameters
/// - `parser`: Parser positioned at the start of an expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let left = parse_logical_or(parser)?;
    if parser.peek() == &Token::Equals {
        parser.advance()?;
        let right = parse_logical_or(parser)?;
        return Ok(Expr::BinaryOp { left:  Box::new(left),
                                   op:    BinaryOperator::Assign,
                                   right: Box::new(right), });
    }
    Ok(left)
}
