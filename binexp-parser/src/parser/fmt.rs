//! Formatting of expression trees in prefix, infix and postfix notation.

use std::fmt::{Display, Formatter, Result};
use super::ast::Node;

/// The position of an operator relative to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `+ a b`
    Prefix,

    /// `(a + b)`, with every operation fully parenthesized.
    Infix,

    /// `a b +`
    Postfix,
}

/// A wrapper type that implements [`Display`] for a [`Node`] in the given [`Notation`].
///
/// This type is created by [`Node::display`].
pub struct NotationFormatter<'a> {
    node: &'a Node,
    notation: Notation,
}

impl NotationFormatter<'_> {
    /// Writes the node in the formatter's notation.
    fn write(&self, f: &mut Formatter, node: &Node) -> Result {
        let binary = match node {
            Node::Number(num) => return write!(f, "{}", num),
            Node::Variable(var) => return write!(f, "{}", var),
            Node::Operator(binary) => binary,
        };

        match self.notation {
            Notation::Prefix => {
                write!(f, "{} ", binary.op.kind)?;
                self.write(f, &binary.lhs)?;
                write!(f, " ")?;
                self.write(f, &binary.rhs)
            },
            Notation::Infix => {
                write!(f, "(")?;
                self.write(f, &binary.lhs)?;
                write!(f, " {} ", binary.op.kind)?;
                self.write(f, &binary.rhs)?;
                write!(f, ")")
            },
            Notation::Postfix => {
                self.write(f, &binary.lhs)?;
                write!(f, " ")?;
                self.write(f, &binary.rhs)?;
                write!(f, " {}", binary.op.kind)
            },
        }
    }
}

impl Display for NotationFormatter<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.write(f, self.node)
    }
}

/// A wrapper type that implements [`Display`] for a [`Node`] as an indented tree, one node per
/// line, with each operand indented one level deeper than its operator.
///
/// This type is created by [`Node::fmt_tree`].
pub struct TreeFormatter<'a>(&'a Node);

impl Display for TreeFormatter<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let mut stack = vec![(self.0, 0)];
        let mut first = true;
        while let Some((node, indent)) = stack.pop() {
            if !first {
                writeln!(f)?;
            }
            first = false;

            write!(f, "{:width$}", "", width = indent * 2)?;
            match node {
                Node::Number(num) => write!(f, "{}", num)?,
                Node::Variable(var) => write!(f, "{}", var)?,
                Node::Operator(binary) => {
                    write!(f, "{}", binary.op.kind)?;
                    stack.push((&*binary.rhs, indent + 1));
                    stack.push((&*binary.lhs, indent + 1));
                },
            }
        }
        Ok(())
    }
}

impl Node {
    /// Wraps the node in a [`NotationFormatter`], which implements [`Display`].
    pub fn display(&self, notation: Notation) -> NotationFormatter<'_> {
        NotationFormatter { node: self, notation }
    }

    /// Wraps the node in a [`TreeFormatter`], which implements [`Display`].
    pub fn fmt_tree(&self) -> TreeFormatter<'_> {
        TreeFormatter(self)
    }

    /// Formats the node in prefix notation: `+ a b`.
    pub fn to_prefix(&self) -> String {
        self.display(Notation::Prefix).to_string()
    }

    /// Formats the node in fully parenthesized infix notation: `(a + b)`.
    pub fn to_infix(&self) -> String {
        self.display(Notation::Infix).to_string()
    }

    /// Formats the node in postfix notation: `a b +`.
    pub fn to_postfix(&self) -> String {
        self.display(Notation::Postfix).to_string()
    }
}

/// Nodes are displayed in prefix notation, the same notation they are parsed from.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.display(Notation::Prefix).fmt(f)
    }
}
