use crate::{
    parser::{error::{kind, Error}, Parse, Parser},
    tokenizer::TokenKind,
};
use rug::Integer;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An integer literal, such as `42` or `-7`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Number {
    /// The value of the literal.
    pub value: Integer,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// Literals are compared by value only.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Number {}

impl Parse for Number {
    fn parse(input: &mut Parser<'_>) -> Result<Self, Error> {
        let token = input.next_token()?;
        if token.kind != TokenKind::Int {
            return Err(Error::new(vec![token.span], kind::InvalidNumber {
                literal: token.lexeme.to_owned(),
            }));
        }

        let value = Integer::from_str_radix(token.lexeme, 10)
            .map_err(|_| Error::new(vec![token.span.clone()], kind::InvalidNumber {
                literal: token.lexeme.to_owned(),
            }))?;
        Ok(Self { value, span: token.span })
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A variable, such as `x` or `rate`. Variables are opaque: they are never evaluated.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    /// The name of the variable.
    pub name: String,

    /// The region of the source code that this variable was parsed from.
    pub span: Range<usize>,
}

/// Variables are compared by name only.
impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Variable {}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
