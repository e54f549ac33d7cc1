//! Simplification rules for expressions involving multiplication.

use binexp_parser::parser::{ast::Node, token::op::BinOpKind};
use crate::symbolic::{
    simplify::{rules::{do_operator, identity::identity, rewrite_bottom_up_infallible, Outcome}, step::Step},
    step_collector::StepCollector,
};
use tracing::trace;

/// `0*a = 0`
/// `a*0 = 0`
///
/// The other operand is discarded whatever it is, including any variables it contains.
pub fn multiply_zero(node: Node, step_collector: &mut dyn StepCollector<Step>) -> Outcome {
    rewrite_bottom_up_infallible(node, |binary| {
        let outcome = do_operator(binary, BinOpKind::Mul, |binary| {
            if binary.lhs.is_integer(0) || binary.rhs.is_integer(0) {
                Ok(Node::number(0).with_span(binary.span))
            } else {
                Err(binary)
            }
        });

        if outcome.changed() {
            trace!(step = ?Step::MultiplyZero, "multiplied by zero");
            step_collector.push(Step::MultiplyZero);
        }
        outcome
    })
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(node: Node, step_collector: &mut dyn StepCollector<Step>) -> Outcome {
    identity(node, BinOpKind::Mul, 1, Step::MultiplyOne, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Applies the rule once to the parsed input, returning the result in prefix notation.
    fn apply(
        rule: fn(Node, &mut dyn StepCollector<Step>) -> Outcome,
        input: &str,
    ) -> (String, bool) {
        let node = input.parse::<Node>().unwrap();
        let (node, changed) = rule(node, &mut ()).into_parts();
        (node.to_prefix(), changed)
    }

    #[test]
    fn one_on_either_side() {
        assert_eq!(apply(multiply_one, "* x 1"), ("x".to_string(), true));
        assert_eq!(apply(multiply_one, "* 1 x"), ("x".to_string(), true));
        assert_eq!(apply(multiply_one, "* 1 * y 1"), ("y".to_string(), true));
        assert_eq!(apply(multiply_one, "/ x 1"), ("/ x 1".to_string(), false));
        assert_eq!(apply(multiply_one, "* x -1"), ("* x -1".to_string(), false));
    }

    #[test]
    fn zero_on_either_side() {
        assert_eq!(apply(multiply_zero, "* x 0"), ("0".to_string(), true));
        assert_eq!(apply(multiply_zero, "* 0 x"), ("0".to_string(), true));
        assert_eq!(apply(multiply_zero, "* + a b 0"), ("0".to_string(), true));
        assert_eq!(apply(multiply_zero, "+ 1 * 0 + 7 + 5 0"), ("+ 1 0".to_string(), true));
    }

    #[test]
    fn zero_only_for_multiplication() {
        assert_eq!(apply(multiply_zero, "/ 0 x"), ("/ 0 x".to_string(), false));
        assert_eq!(apply(multiply_zero, "% x 0"), ("% x 0".to_string(), false));
        assert_eq!(apply(multiply_zero, "* x y"), ("* x y".to_string(), false));
    }

    #[test]
    fn zero_takes_span_of_replaced_node() {
        let node = "+ a * b 0".parse::<Node>().unwrap();
        let node = multiply_zero(node, &mut ()).into_node();
        let Node::Operator(binary) = node else { panic!("expected an operator") };
        assert_eq!(binary.rhs.span(), 4..9);
    }

    #[test]
    fn steps() {
        let node = "* 0 * x 0".parse::<Node>().unwrap();
        let mut steps = Vec::new();
        multiply_zero(node, &mut steps);
        assert_eq!(steps, vec![Step::MultiplyZero, Step::MultiplyZero]);
    }
}
