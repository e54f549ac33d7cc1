//! Errors that can occur while simplifying an expression.

use ariadne::Fmt;
use binexp_attrs::ErrorKind;
use binexp_error::{ErrorKind, EXPR};

pub use binexp_error::Error;

/// A constant division had a divisor of zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = [format!("this {} divides by zero", "expression".fg(EXPR))],
    help = "the result of dividing by zero is undefined",
)]
pub struct DivisionByZero;

/// A constant modulo operation had a divisor of zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "modulo by zero",
    labels = [format!("this {} takes the remainder of a division by zero", "expression".fg(EXPR))],
    help = "the remainder of dividing by zero is undefined",
)]
pub struct ModuloByZero;
