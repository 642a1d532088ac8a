/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator walks the AST against a session context, applies operators
/// and builtins, and binds variables on assignment.
///
/// # Responsibilities
/// - Evaluates AST nodes to decimals.
/// - Owns the constant, function and variable tables.
/// - Reports evaluation errors such as unknown variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes expressions for the parser.
///
/// The lexer reads the raw expression text and produces tokens for numbers,
/// identifiers, operators and punctuation, one at a time, as the parser asks
/// for them.
///
/// # Responsibilities
/// - Recognizes decimal, hexadecimal and binary literals.
/// - Prefers the longest operator, so `<<` is never read as two `<`.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// One function per precedence level, from assignment down to primary
/// expressions. Identifiers are resolved to constants or builtins here;
/// anything else becomes a variable reference.
pub mod parser;
/// The value module defines the number type expressions evaluate to.
pub mod value;
