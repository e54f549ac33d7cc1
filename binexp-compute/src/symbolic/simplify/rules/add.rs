//! Simplification rules for expressions involving addition.

use binexp_parser::parser::{ast::Node, token::op::BinOpKind};
use crate::symbolic::{
    simplify::{rules::{identity::identity, Outcome}, step::Step},
    step_collector::StepCollector,
};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(node: Node, step_collector: &mut dyn StepCollector<Step>) -> Outcome {
    identity(node, BinOpKind::Add, 0, Step::AddZero, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Applies the rule once to the parsed input, returning the result in prefix notation.
    fn apply(input: &str) -> (String, bool) {
        let node = input.parse::<Node>().unwrap();
        let (node, changed) = add_zero(node, &mut ()).into_parts();
        (node.to_prefix(), changed)
    }

    #[test]
    fn zero_on_either_side() {
        assert_eq!(apply("+ x 0"), ("x".to_string(), true));
        assert_eq!(apply("+ 0 x"), ("x".to_string(), true));
        assert_eq!(apply("+ 0 0"), ("0".to_string(), true));
    }

    #[test]
    fn nested_in_one_pass() {
        assert_eq!(apply("+ 0 + 0 + x 0"), ("x".to_string(), true));
        assert_eq!(apply("* + a 0 + 0 b"), ("* a b".to_string(), true));
        assert_eq!(apply("+ + 0 0 x"), ("x".to_string(), true));
    }

    #[test]
    fn other_operators_untouched() {
        assert_eq!(apply("- x 0"), ("- x 0".to_string(), false));
        assert_eq!(apply("* x 0"), ("* x 0".to_string(), false));
        assert_eq!(apply("+ x 1"), ("+ x 1".to_string(), false));
        assert_eq!(apply("x"), ("x".to_string(), false));
    }

    #[test]
    fn kept_operand_keeps_its_span() {
        let node = "+ 0 * a b".parse::<Node>().unwrap();
        let node = add_zero(node, &mut ()).into_node();
        assert_eq!(node.span(), 4..9);
    }

    #[test]
    fn steps() {
        let node = "+ 0 + x 0".parse::<Node>().unwrap();
        let mut steps = Vec::new();
        add_zero(node, &mut steps);
        assert_eq!(steps, vec![Step::AddZero, Step::AddZero]);
    }
}
