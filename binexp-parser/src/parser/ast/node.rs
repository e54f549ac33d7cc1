use crate::{
    parser::{
        ast::{binary::Binary, literal::{Number, Variable}},
        error::Error,
        token::op::BinOpKind,
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use rug::Integer;
use std::{ops::Range, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an expression tree.
///
/// Operators exclusively own both of their operands, so a [`Node`] is always a finite tree. Leaves
/// ([`Node::Number`] and [`Node::Variable`]) have no children.
///
/// [`PartialEq`] compares the structure of two trees and ignores the source spans they were parsed
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// An integer.
    Number(Number),

    /// An opaque variable.
    Variable(Variable),

    /// A binary operation with two operands.
    Operator(Binary),
}

impl Node {
    /// Creates a number that was not parsed from source code.
    pub fn number(value: impl Into<Integer>) -> Self {
        Self::Number(Number { value: value.into(), span: 0..0 })
    }

    /// Creates a variable that was not parsed from source code.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(Variable { name: name.into(), span: 0..0 })
    }

    /// Creates a binary operation that was not parsed from source code.
    pub fn binary(kind: BinOpKind, lhs: Node, rhs: Node) -> Self {
        Self::Operator(Binary::new(kind, lhs, rhs))
    }

    /// Returns the span of the node.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Number(num) => num.span.clone(),
            Self::Variable(var) => var.span.clone(),
            Self::Operator(binary) => binary.span.clone(),
        }
    }

    /// Returns the node with its span replaced by the given span.
    pub fn with_span(mut self, span: Range<usize>) -> Self {
        match &mut self {
            Self::Number(num) => num.span = span,
            Self::Variable(var) => var.span = span,
            Self::Operator(binary) => binary.span = span,
        }
        self
    }

    /// Returns true if the node is a leaf.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Operator(_))
    }

    /// Returns the value of the node if it is a number.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Number(num) => Some(&num.value),
            _ => None,
        }
    }

    /// Returns true if the node is a number equal to the given value.
    pub fn is_integer(&self, value: i32) -> bool {
        self.as_integer().map_or(false, |n| *n == value)
    }
}

impl Parse for Node {
    fn parse(input: &mut Parser<'_>) -> Result<Self, Error> {
        match input.peek_kind()? {
            TokenKind::Int => input.try_parse::<Number>().map(Self::Number),
            TokenKind::Name => {
                let token = input.next_token()?;
                Ok(Self::Variable(Variable {
                    name: token.lexeme.to_owned(),
                    span: token.span,
                }))
            },
            _ => input.try_parse::<Binary>().map(Self::Operator),
        }
    }
}

/// Parses a node from a line of prefix-notation tokens. Tokens after the first complete
/// expression are ignored.
impl FromStr for Node {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s).try_parse()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::parser::error::kind;
    use super::*;

    #[test]
    fn parse_leaves() {
        assert_eq!("42".parse::<Node>().unwrap(), Node::number(42));
        assert_eq!("-7".parse::<Node>().unwrap(), Node::number(-7));
        assert_eq!("rate".parse::<Node>().unwrap(), Node::variable("rate"));
    }

    #[test]
    fn parse_unicode_variables() {
        let node = "+ é 0".parse::<Node>().unwrap();
        assert_eq!(node, Node::binary(BinOpKind::Add, Node::variable("é"), Node::number(0)));
        assert_eq!("λ".parse::<Node>().unwrap(), Node::variable("λ"));
    }

    #[test]
    fn parse_nested() {
        let node = "+ 1 * 0 + 7 + 5 0".parse::<Node>().unwrap();
        assert_eq!(node, Node::binary(
            BinOpKind::Add,
            Node::number(1),
            Node::binary(
                BinOpKind::Mul,
                Node::number(0),
                Node::binary(
                    BinOpKind::Add,
                    Node::number(7),
                    Node::binary(BinOpKind::Add, Node::number(5), Node::number(0)),
                ),
            ),
        ));
    }

    #[test]
    fn parse_big_integer() {
        let node = "123456789012345678901234567890".parse::<Node>().unwrap();
        assert_eq!(node.to_prefix(), "123456789012345678901234567890");
    }

    #[test]
    fn spans() {
        let node = "* x + 10 y".parse::<Node>().unwrap();
        assert_eq!(node.span(), 0..10);
        let Node::Operator(binary) = node else { panic!("expected an operator") };
        assert_eq!(binary.lhs.span(), 2..3);
        assert_eq!(binary.rhs.span(), 4..10);
    }

    #[test]
    fn span_is_not_compared() {
        let node = "x".parse::<Node>().unwrap();
        assert_eq!(node.span(), 0..1);
        assert_eq!(node.clone().with_span(5..6), node);
    }

    #[test]
    fn unknown_operator() {
        for input in ["x1 2 3", "^ 2 3", "+ 1 ++ 2 3", "1x"] {
            let err = input.parse::<Node>().unwrap_err();
            assert!(err.is::<kind::UnknownOperator>(), "{input}");
        }
    }

    #[test]
    fn integer_helpers() {
        let zero = Node::number(0);
        assert!(zero.is_integer(0));
        assert!(!zero.is_integer(1));
        assert!(!Node::variable("x").is_integer(0));
        assert!(zero.is_leaf());
        assert!(!Node::binary(BinOpKind::Add, Node::number(1), Node::number(2)).is_leaf());
    }
}
