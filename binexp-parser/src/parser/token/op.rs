//! Structs to help parse binary operators.

use crate::{
    parser::{
        error::{kind, Error},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinOpKind {
    /// All of the supported binary operations.
    pub const ALL: [BinOpKind; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Mod];

    /// Returns the symbol used to write the operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }

    /// Returns the operation written with the given symbol, if it is supported.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.symbol() == symbol)
    }

    /// Returns the operation corresponding to the given token kind, if the token is an operator.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Mod => Some(Self::Mod),
            _ => None,
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

/// Operators are compared by kind only.
impl PartialEq for BinOp {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for BinOp {}

impl From<BinOpKind> for BinOp {
    fn from(kind: BinOpKind) -> Self {
        Self { kind, span: 0..0 }
    }
}

impl Parse for BinOp {
    fn parse(input: &mut Parser<'_>) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = BinOpKind::from_token(token.kind).ok_or_else(|| {
            Error::new(vec![token.span.clone()], kind::UnknownOperator {
                symbol: token.lexeme.to_owned(),
            })
        })?;

        Ok(Self {
            kind,
            span: token.span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for kind in BinOpKind::ALL {
            assert_eq!(BinOpKind::from_symbol(kind.symbol()), Some(kind));
            assert_eq!(kind.to_string(), kind.symbol());
        }
        assert_eq!(BinOpKind::from_symbol("^"), None);
    }

    #[test]
    fn parse_operator() {
        let mut parser = Parser::new("  %");
        let op = parser.try_parse::<BinOp>().unwrap();
        assert_eq!(op.kind, BinOpKind::Mod);
        assert_eq!(op.span, 2..3);
    }

    #[test]
    fn reject_unknown_operator() {
        let mut parser = Parser::new("^");
        let err = parser.try_parse::<BinOp>().unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::UnknownOperator>(),
            Some(&kind::UnknownOperator { symbol: "^".to_string() }),
        );
        assert_eq!(err.spans, vec![0..1]);
    }
}
