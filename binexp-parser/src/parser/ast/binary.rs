use crate::parser::{
    ast::Node,
    error::Error,
    token::op::{BinOp, BinOpKind},
    Parse,
    Parser,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary operation, written as the operator followed by its left and right operands.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Node>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Node>,

    /// The region of the source code that this binary expression was parsed from, from the
    /// operator to the end of the right operand.
    pub span: Range<usize>,
}

/// Binary expressions are compared structurally; spans are ignored.
impl PartialEq for Binary {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.lhs == other.lhs && self.rhs == other.rhs
    }
}

impl Eq for Binary {}

impl Binary {
    /// Creates a binary expression that was not parsed from source code.
    pub fn new(kind: BinOpKind, lhs: Node, rhs: Node) -> Self {
        Self {
            lhs: Box::new(lhs),
            op: kind.into(),
            rhs: Box::new(rhs),
            span: 0..0,
        }
    }

    /// Returns the kind of operator.
    pub fn kind(&self) -> BinOpKind {
        self.op.kind
    }

    /// Consumes the binary expression, returning its operands.
    pub fn into_operands(self) -> (Node, Node) {
        (*self.lhs, *self.rhs)
    }
}

impl Parse for Binary {
    fn parse(input: &mut Parser<'_>) -> Result<Self, Error> {
        let op = input.try_parse::<BinOp>()?;
        let lhs = input.try_parse::<Node>()?;
        let rhs = input.try_parse::<Node>()?;
        let span = op.span.start..rhs.span().end;

        Ok(Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        })
    }
}
