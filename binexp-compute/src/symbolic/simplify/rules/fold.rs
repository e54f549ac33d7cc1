//! Constant folding.

use binexp_parser::parser::{ast::{Binary, Node}, token::op::BinOpKind};
use crate::{
    primitive::eval_binary,
    symbolic::{
        error::{DivisionByZero, Error, ModuloByZero},
        simplify::{options::DivisionPolicy, rules::{rewrite_bottom_up, Outcome}, step::Step},
        step_collector::StepCollector,
    },
};
use tracing::trace;

/// Evaluates a single operator whose operands are both numbers.
///
/// Returns `Ok(Ok(node))` with the folded number, `Ok(Err(binary))` if the operator cannot be
/// folded and is handed back, or an error if the divisor is zero and the policy is
/// [`DivisionPolicy::Error`].
fn fold_binary(binary: Binary, policy: DivisionPolicy) -> Result<Result<Node, Binary>, Error> {
    let (Some(lhs), Some(rhs)) = (binary.lhs.as_integer(), binary.rhs.as_integer()) else {
        return Ok(Err(binary));
    };

    match eval_binary(binary.kind(), lhs, rhs) {
        Some(value) => Ok(Ok(Node::number(value).with_span(binary.span))),
        None => match policy {
            DivisionPolicy::Error if binary.kind() == BinOpKind::Mod => {
                Err(Error::new(vec![binary.span], ModuloByZero))
            },
            DivisionPolicy::Error => Err(Error::new(vec![binary.span], DivisionByZero)),
            DivisionPolicy::Keep => {
                trace!(location = ?binary.span, "kept operation with a zero divisor");
                Ok(Err(binary))
            },
        },
    }
}

/// Replaces every operator whose operands are both numbers with the result of the operation.
///
/// `1+2 = 3`
/// `7/2 = 3`
/// `-7/2 = -4`
/// `-7%2 = 1`
///
/// Operators folded during the pass can make their parent foldable in the same pass, so an
/// operator tree made only of numbers is folded to a single number at once.
///
/// Division and modulo by zero are handled according to the given [`DivisionPolicy`].
pub fn fold_constants(
    node: Node,
    policy: DivisionPolicy,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Outcome, Error> {
    rewrite_bottom_up(node, &mut |binary: Binary| {
        let kind = binary.kind();
        match fold_binary(binary, policy)? {
            Ok(node) => {
                trace!(%kind, result = %node, "folded constant operation");
                step_collector.push(Step::FoldConstant);
                Ok(Outcome::Changed(node))
            },
            Err(binary) => Ok(Outcome::Unchanged(Node::Operator(binary))),
        }
    })
}
