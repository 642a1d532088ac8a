use std::fmt;

use log::trace;
use logos::Logos;

use crate::{
    error::{Error, Result},
    interpreter::value::decimal::Decimal,
};

/// Represents a lexical token in an expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the calculator language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `1.00`, `.5`, `1.` or `1.2E3`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_decimal)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_decimal)]
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| Decimal::from_radix(&lex.slice()[2..], 16))]
    #[regex(r"0[bB][01]+", |lex| Decimal::from_radix(&lex.slice()[2..], 2))]
    Number(Decimal),
    /// Identifier tokens; constant, function or variable names such as `pi`,
    /// `sqrt`, `x` or `é`. The greek letters used as aliases are always
    /// single-character identifiers, so `πr` is `π` followed by `r`.
    #[regex(r"[\p{L}_&&[^πΣΠ]][\p{L}\p{N}_&&[^πΣΠ]]*", |lex| lex.slice().to_string())]
    #[regex(r"[πΣΠ∑∏]", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `~`
    #[token("~")]
    Tilde,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `√`
    #[token("√")]
    SquareRoot,
    /// Produced by [`Lexer`] once the input is exhausted.
    EndOfInput,
}

impl Token {
    /// Describes the token for an error message: operators are single-quoted,
    /// longer names such as `end of input` are left bare.
    ///
    /// # Example
    /// ```
    /// use decicalc::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::RParen.quoted(), "')'");
    /// assert_eq!(Token::ShiftLeft.quoted(), "'<<'");
    /// assert_eq!(Token::EndOfInput.quoted(), "end of input");
    /// ```
    #[must_use]
    pub fn quoted(&self) -> String {
        let text = self.to_string();
        if text.chars().count() > 2 { text } else { format!("'{text}'") }
    }

    /// Returns `true` if both tokens are of the same kind, ignoring payloads.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Number(_) => "number",
            Self::Identifier(_) => "identifier",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Tilde => "~",
            Self::Bang => "!",
            Self::Equals => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::SquareRoot => "√",
            Self::EndOfInput => "end of input",
        };
        f.write_str(text)
    }
}

/// Parses a decimal literal from the current token slice.
///
/// # Returns
/// - `Some(Decimal)`: The literal, keeping the scale it was written with.
/// - `None`: If the exponent does not fit, which the lexer reports as an
///   unexpected character.
fn parse_decimal(lex: &logos::Lexer<Token>) -> Option<Decimal> {
    Decimal::parse_literal(lex.slice()).ok()
}

/// A cursor over the tokens of one expression.
///
/// Tokens are produced lazily: the lexer only scans as far as the parser has
/// asked it to. Past the end of the input the current token stays
/// [`Token::EndOfInput`].
pub struct Lexer<'a> {
    inner:   logos::Lexer<'a, Token>,
    current: Token,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned on the first token of `source`.
    ///
    /// # Errors
    /// Returns `Error::UnexpectedCharacter` if the first token is invalid.
    ///
    /// # Example
    /// ```
    /// use decicalc::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("1 << x").unwrap();
    /// assert!(matches!(lexer.current(), Token::Number(_)));
    /// lexer.advance().unwrap();
    /// assert_eq!(lexer.current(), &Token::ShiftLeft);
    /// lexer.advance().unwrap();
    /// assert_eq!(lexer.current(), &Token::Identifier("x".to_string()));
    /// lexer.advance().unwrap();
    /// assert_eq!(lexer.current(), &Token::EndOfInput);
    /// ```
    pub fn new(source: &'a str) -> Result<Self> {
        let mut lexer = Self { inner:   Token::lexer(source),
                               current: Token::EndOfInput, };
        lexer.advance()?;
        Ok(lexer)
    }

    /// The token the parser is looking at.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Moves to the next token.
    ///
    /// # Errors
    /// Returns `Error::UnexpectedCharacter` if the input at the new position
    /// starts no valid token.
    pub fn advance(&mut self) -> Result<()> {
        self.current = match self.inner.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => {
                return Err(Error::UnexpectedCharacter { text:   self.inner.slice().to_string(),
                                                        offset: self.inner.span().start, });
            },
            None => Token::EndOfInput,
        };
        trace!("token {:?} at {:?}", self.current, self.inner.span());
        Ok(())
    }
}
