//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which applies the rules in [`rules`] to an
//! expression in multiple passes, until a whole pass changes nothing.

pub mod options;
pub mod rules;
pub mod step;

use binexp_parser::parser::ast::Node;
use crate::symbolic::{error::Error, step_collector::StepCollector};
use options::SimplifyOptions;
use step::Step;
use tracing::{field, trace, trace_span};

/// Base implementation of the simplification algorithm.
///
/// Each pass runs additive identity elimination, multiplicative identity elimination,
/// multiplication by zero and constant folding, in that order, over the whole tree. Passes are
/// repeated while any of the rules changes the tree, so the result is a fixpoint of the whole
/// rule sequence: simplifying it again returns it unchanged.
fn inner_simplify_with(
    node: Node,
    options: SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Node, Error> {
    let span = trace_span!("simplify", passes = field::Empty).entered();
    let mut node = node;
    let mut passes = 0usize;

    loop {
        passes += 1;
        let mut changed_in_this_pass = false;

        let outcome = rules::add::add_zero(node, step_collector);
        changed_in_this_pass |= outcome.changed();

        let outcome = rules::multiply::multiply_one(outcome.into_node(), step_collector);
        changed_in_this_pass |= outcome.changed();

        let outcome = rules::multiply::multiply_zero(outcome.into_node(), step_collector);
        changed_in_this_pass |= outcome.changed();

        let outcome = rules::fold::fold_constants(
            outcome.into_node(),
            options.division_policy,
            step_collector,
        )?;
        changed_in_this_pass |= outcome.changed();
        node = outcome.into_node();

        trace!(pass = passes, changed = changed_in_this_pass, "finished simplification pass");
        if !changed_in_this_pass {
            break;
        }
    }

    span.record("passes", passes);
    Ok(node)
}

/// Simplify the given expression with the default options.
///
/// Returns a [`DivisionByZero`] or [`ModuloByZero`] error if constant folding divides by zero.
///
/// [`DivisionByZero`]: crate::symbolic::error::DivisionByZero
/// [`ModuloByZero`]: crate::symbolic::error::ModuloByZero
pub fn simplify(node: Node) -> Result<Node, Error> {
    inner_simplify_with(node, SimplifyOptions::default(), &mut ())
}

/// Simplify the given expression with the given options.
pub fn simplify_with(node: Node, options: SimplifyOptions) -> Result<Node, Error> {
    inner_simplify_with(node, options, &mut ())
}

/// Simplify the given expression with the default options. The steps taken by the simplifier are
/// also collected and returned, in the order they were applied. This is useful for debugging, and
/// also for displaying the steps taken to the user.
pub fn simplify_with_steps(node: Node) -> Result<(Node, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let node = inner_simplify_with(node, SimplifyOptions::default(), &mut steps)?;
    Ok((node, steps))
}
