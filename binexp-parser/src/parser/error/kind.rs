use ariadne::Fmt;
use binexp_attrs::ErrorKind;
use binexp_error::{ErrorKind, EXPR};

/// The end of the input was reached where an operand was required.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "operand".fg(EXPR))],
    help = "every operator must be followed by exactly two operands",
)]
pub struct UnexpectedEof;

/// The end of the input was expected, but more tokens were found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("this {} is not part of the parsed expression", "token".fg(EXPR))],
    help = "remove the extra tokens, or add an operator in front of the expression that uses them",
)]
pub struct ExpectedEof;

/// A token in operator position is not one of the supported binary operators.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown operator `{}`", symbol),
    labels = ["this token is not a number, a variable, or an operator"],
    help = format!(
        "the supported operators are {}; numbers are digits with an optional leading `-`, and variables are made of letters only",
        "+ - * / %".fg(EXPR),
    ),
)]
pub struct UnknownOperator {
    /// The token that was found in operator position.
    pub symbol: String,
}

/// A numeric literal could not be converted to an integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid integer literal `{}`", literal),
    labels = ["this literal"],
)]
pub struct InvalidNumber {
    /// The literal that failed to parse.
    pub literal: String,
}
