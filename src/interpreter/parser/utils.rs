use crate::{
    error::Error,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// Consumes the current token if it is of the `expected` kind.
///
/// # Errors
/// Returns `Error::ExpectedToken` naming both tokens otherwise.
pub(in crate::interpreter::parser) fn expect(parser: &mut Parser<'_>,
                                             expected: &Token)
                                             -> ParseResult<()> {
    if !parser.peek().same_kind(expected) {
        return Err(Error::ExpectedToken { expected: expected.quoted(),
                                          found:    parser.peek().quoted(), });
    }
    parser.advance()
}

/// Parses a comma-separated list of items until a closing token.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `parser`: Parser positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns an error if an item fails to parse, or if something other than a
/// comma or the closing token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    parser: &mut Parser<'_>,
    parse_item: impl Fn(&mut Parser<'_>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if parser.peek() == closing {
        parser.advance()?;
        return Ok(items);
    }
    loop {
        items.push(parse_item(parser)?);
        if parser.peek() == &Token::Comma {
            parser.advance()?;
        } else if parser.peek() == closing {
            parser.advance()?;
            break;
        } else {
            return Err(Error::ExpectedToken { expected: closing.quoted(),
                                              found:    parser.peek().quoted(), });
        }
    }
    Ok(items)
}
