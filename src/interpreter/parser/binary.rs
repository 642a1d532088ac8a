use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::function::core::Builtin,
        lexer::Token,
        parser::{
            core::{ParseResult, Parser},
            unary::{parse_factorial, parse_logical_not, parse_unary},
        },
    },
};

/// Maps a token to the binary operator it denotes, if any.
///
/// `|` and `&` are not operators in the tree; they become calls to the
/// bitwise builtins.
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Equals => Some(BinaryOperator::Assign),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::ShiftLeft => Some(BinaryOperator::ShiftLeft),
        Token::ShiftRight => Some(BinaryOperator::ShiftRight),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Parses one left-associative level: operands from `parse_operand` joined by
/// any operator `accepts` admits.
fn parse_left_associative(parser: &mut Parser<'_>,
                          parse_operand: fn(&mut Parser<'_>) -> ParseResult<Expr>,
                          accepts: fn(BinaryOperator) -> bool)
                          -> ParseResult<Expr> {
    let mut left = parse_operand(parser)?;
    loop {
        if let Some(op) = token_to_binary_operator(parser.peek())
           && accepts(op)
        {
            parser.advance()?;
            let right = parse_operand(parser)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// `a | b` is built as a call to `BitOr`, so both sides are always
/// evaluated. Left-associative.
///
/// Grammar: `or := and ("|" and)*`
///
/// # Parameters
/// - `parser`: Parser positioned at the operand.
///
/// # Returns
/// A tree of `BitOr` calls.
pub fn parse_logical_or(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let mut left = parse_logical_and(parser)?;
    while parser.peek() == &Token::Pipe {
        parser.advance()?;
        let right = parse_logical_and(parser)?;
        left = Expr::call(Builtin::BitOr, vec![left, right]);
    }
    Ok(left)
}

/// Parses logical AND expressions.
///
/// `a & b` is built as a call to `BitAnd`. Left-associative, binds tighter
/// than `|`.
///
/// Grammar: `and := not ("&" not)*`
pub fn parse_logical_and(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let mut left = parse_logical_not(parser)?;
    while parser.peek() == &Token::Ampersand {
        parser.advance()?;
        let right = parse_logical_not(parser)?;
        left = Expr::call(Builtin::BitAnd, vec![left, right]);
    }
    Ok(left)
}

/// Parses relational and equality operators.
///
/// Handles `==`, `!=`, `<`, `<=`, `>`, `>=`. They chain left to right, so
/// `1 < 2 < 3` compares the `0`/`1` result of `1 < 2` with `3`.
///
/// Grammar: `relational := shift (("==" | "!=" | "<" | "<=" | ">" | ">=")
/// shift)*`
pub fn parse_relational(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    parse_left_associative(parser, parse_shift, |op| {
        matches!(op,
                 BinaryOperator::Equal
                 | BinaryOperator::NotEqual
                 | BinaryOperator::Less
                 | BinaryOperator::LessEqual
                 | BinaryOperator::Greater
                 | BinaryOperator::GreaterEqual)
    })
}

/// Parses shift expressions.
///
/// Grammar: `shift := additive (("<<" | ">>") additive)*`
pub fn parse_shift(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    parse_left_associative(parser, parse_additive, |op| {
        matches!(op, BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight)
    })
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `parser`: Parser positioned at the first operand.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    parse_left_associative(parser, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`. Operands are unary
/// expressions, so `3*-4` is accepted.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    parse_left_associative(parser, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    })
}

/// Parses exponentiation expressions.
///
/// Right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`. The exponent is
/// itself an exponent-level expression, so it cannot carry a prefix `-`
/// without parentheses: write `2^(-1)`.
///
/// The rule is: `exponent := factorial ("^" exponent)?`
///
/// # Parameters
/// - `parser`: Parser positioned at the base.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let base = parse_factorial(parser)?;
    if parser.peek() == &Token::Caret {
        parser.advance()?;
        let exponent = parse_exponent(parser)?;
        return Ok(Expr::BinaryOp { left:  Box::new(base),
                                   op:    BinaryOperator::Pow,
                                   right: Box::new(exponent), });
    }
    Ok(base)
}
