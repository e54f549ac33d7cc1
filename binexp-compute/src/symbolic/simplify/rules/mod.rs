//! Implementation of the simplification rules.
//!
//! Each rule makes a single bottom-up pass over the whole tree: the operands of an operator are
//! rewritten first, then the rule is given the chance to rewrite the operator itself. Leaves are
//! never rewritten. A rule returns an [`Outcome`] describing whether any node of the tree was
//! changed during the pass.

pub mod add;
pub mod fold;
pub mod identity;
pub mod multiply;

use binexp_parser::parser::{ast::{Binary, Node}, token::op::BinOpKind};
use std::convert::Infallible;

/// The result of applying a rule to a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// At least one node of the tree was rewritten.
    Changed(Node),

    /// The tree was left as it was.
    Unchanged(Node),
}

impl Outcome {
    /// Returns true if the rule rewrote at least one node.
    pub fn changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    /// Returns the resulting tree.
    pub fn into_node(self) -> Node {
        match self {
            Self::Changed(node) | Self::Unchanged(node) => node,
        }
    }

    /// Returns the resulting tree, along with whether it was changed.
    pub fn into_parts(self) -> (Node, bool) {
        let changed = self.changed();
        (self.into_node(), changed)
    }

    /// Marks the outcome as changed if `changed` is true.
    fn or_changed(self, changed: bool) -> Self {
        match self {
            Self::Unchanged(node) if changed => Self::Changed(node),
            outcome => outcome,
        }
    }
}

/// Rewrites every operator of the tree bottom-up with the given rule.
///
/// The rule receives an operator whose operands have already been rewritten, and returns the
/// outcome of rewriting that operator alone. The outcome of the whole tree is
/// [`Outcome::Changed`] if any call to the rule reported a change.
pub(crate) fn rewrite_bottom_up<E, F>(node: Node, rule: &mut F) -> Result<Outcome, E>
where
    F: FnMut(Binary) -> Result<Outcome, E>,
{
    let binary = match node {
        Node::Operator(binary) => binary,
        leaf => return Ok(Outcome::Unchanged(leaf)),
    };

    let Binary { lhs, op, rhs, span } = binary;
    let (lhs, lhs_changed) = rewrite_bottom_up(*lhs, rule)?.into_parts();
    let (rhs, rhs_changed) = rewrite_bottom_up(*rhs, rule)?.into_parts();
    let binary = Binary {
        lhs: Box::new(lhs),
        op,
        rhs: Box::new(rhs),
        span,
    };

    Ok(rule(binary)?.or_changed(lhs_changed || rhs_changed))
}

/// [`rewrite_bottom_up`] for rules that cannot fail.
pub(crate) fn rewrite_bottom_up_infallible<F>(node: Node, mut rule: F) -> Outcome
where
    F: FnMut(Binary) -> Outcome,
{
    let result = rewrite_bottom_up::<Infallible, _>(node, &mut |binary| Ok(rule(binary)));
    match result {
        Ok(outcome) => outcome,
        Err(never) => match never {},
    }
}

/// If the operator is of the given kind, calls the given transformation function with it.
///
/// The transformation returns `Ok(node)` with the replacement if it applies, or hands the operator
/// back with `Err(binary)` to leave it as it is.
pub(crate) fn do_operator(
    binary: Binary,
    kind: BinOpKind,
    f: impl FnOnce(Binary) -> Result<Node, Binary>,
) -> Outcome {
    if binary.kind() != kind {
        return Outcome::Unchanged(Node::Operator(binary));
    }

    match f(binary) {
        Ok(node) => Outcome::Changed(node),
        Err(binary) => Outcome::Unchanged(Node::Operator(binary)),
    }
}
