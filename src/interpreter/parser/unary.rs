use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::Error,
    interpreter::{
        evaluator::function::core::Builtin,
        lexer::Token,
        parser::{
            binary::{parse_exponent, parse_relational},
            core::{ParseResult, Parser, parse_expression},
            utils::{expect, parse_comma_separated},
        },
        value::decimal::Decimal,
    },
};

/// Parses prefix logical NOT.
///
/// Sits between `&` and the relational operators, so `!a == b` negates the
/// comparison. Recursive, so `!!x` is accepted.
///
/// Grammar:
/// ```text
///     not := "!" not
///          | relational
/// ```
pub fn parse_logical_not(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    if parser.peek() == &Token::Bang {
        parser.advance()?;
        let expr = parse_logical_not(parser)?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Not,
                                  expr: Box::new(expr), });
    }
    parse_relational(parser)
}

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (rewritten as `0 - operand`)
/// - `~`  (rewritten as a call to `BitNot`)
///
/// Both recurse, so `--1` and `~~3` are accepted. Unary minus binds looser
/// than `^`, so `-10^2` is `-100`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "~") unary
///            | sqrt
/// ```
/// # Parameters
/// - `parser`: Parser positioned at the operand.
///
/// # Returns
/// The operand, wrapped in any prefix operators.
pub fn parse_unary(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    match parser.peek() {
        Token::Minus => {
            parser.advance()?;
            let expr = parse_unary(parser)?;
            Ok(Expr::BinaryOp { left:  Box::new(Expr::number(Decimal::zero())),
                                op:    BinaryOperator::Sub,
                                right: Box::new(expr), })
        },
        Token::Tilde => {
            parser.advance()?;
            let expr = parse_unary(parser)?;
            Ok(Expr::call(Builtin::BitNot, vec![expr]))
        },
        _ => parse_square_root(parser),
    }
}

/// Parses prefix `√`, as a call to `sqrt`. Recursive, so `√√16` is `2`.
///
/// Grammar: `sqrt := "√" sqrt | exponent`
pub fn parse_square_root(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    if parser.peek() == &Token::SquareRoot {
        parser.advance()?;
        let expr = parse_square_root(parser)?;
        return Ok(Expr::call(Builtin::Sqrt, vec![expr]));
    }
    parse_exponent(parser)
}

/// Parses an optional postfix factorial.
///
/// A single `!` is consumed; `5!!` is rejected rather than read as a double
/// factorial.
///
/// Grammar: `factorial := primary "!"?`
pub fn parse_factorial(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let expr = parse_primary(parser)?;
    if parser.peek() == &Token::Bang {
        parser.advance()?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Factorial,
                                  expr: Box::new(expr), });
    }
    Ok(expr)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - constants, function calls and variables
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := number
///              | identifier_or_function
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `parser`: Parser positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// `Error::UnexpectedToken` for any token that cannot start an operand,
/// including the end of input in `1+`.
pub fn parse_primary(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    match parser.peek().clone() {
        Token::LParen => parse_grouping(parser),
        Token::Number(value) => {
            parser.advance()?;
            Ok(Expr::number(value))
        },
        Token::Identifier(name) => {
            parser.advance()?;
            parse_identifier_or_function(parser, name)
        },
        token => Err(Error::UnexpectedToken { found: token.quoted() }),
    }
}

/// Parses a parenthesized sub-expression.
fn parse_grouping(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    expect(parser, &Token::LParen)?;
    let expr = parse_expression(parser)?;
    expect(parser, &Token::RParen)?;
    Ok(expr)
}

/// Resolves an identifier that has already been consumed.
///
/// In priority order the name is:
/// 1. a constant, whose literal node is substituted;
/// 2. a builtin function, which requires a parenthesized argument list;
/// 3. otherwise a variable, looked up only when evaluated.
///
/// # Errors
/// `Error::ExpectedToken` if a function name is not followed by `(`, or if
/// its argument list is malformed.
fn parse_identifier_or_function(parser: &mut Parser<'_>, name: String) -> ParseResult<Expr> {
    if let Some(constant) = parser.context().constant(&name) {
        return Ok(constant.clone());
    }
    if let Some(function) = parser.context().function(&name) {
        expect(parser, &Token::LParen)?;
        let arguments = parse_comma_separated(parser, parse_expression, &Token::RParen)?;
        return Ok(Expr::FunctionCall { name,
                                       function,
                                       arguments });
    }
    Ok(Expr::Variable { name })
}
