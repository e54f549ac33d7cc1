//! Elimination of identity elements.

use binexp_parser::parser::{ast::Node, token::op::BinOpKind};
use crate::symbolic::{
    simplify::{rules::{do_operator, rewrite_bottom_up_infallible, Outcome}, step::Step},
    step_collector::StepCollector,
};
use tracing::trace;

/// Replaces every operator of the given kind that has the identity element `element` as one of
/// its operands with its other operand.
///
/// `op a e = a`
/// `op e a = a`
///
/// The left operand is checked first, so if both operands are the identity element, the right
/// operand is kept.
pub fn identity(
    node: Node,
    kind: BinOpKind,
    element: i32,
    step: Step,
    step_collector: &mut dyn StepCollector<Step>,
) -> Outcome {
    rewrite_bottom_up_infallible(node, |binary| {
        let outcome = do_operator(binary, kind, |binary| {
            if binary.lhs.is_integer(element) {
                Ok(*binary.rhs)
            } else if binary.rhs.is_integer(element) {
                Ok(*binary.lhs)
            } else {
                Err(binary)
            }
        });

        if outcome.changed() {
            trace!(?step, %kind, element, "eliminated identity element");
            step_collector.push(step);
        }
        outcome
    })
}
