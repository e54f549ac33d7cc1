//! Algebraic simplification of expression trees.
//!
//! Simplification repeatedly applies a fixed sequence of rewriting rules to a [`Node`] until a
//! whole pass leaves the tree untouched:
//!
//! 1. Additive identity: `+ a 0 = a`, `+ 0 a = a`.
//! 2. Multiplicative identity: `* a 1 = a`, `* 1 a = a`.
//! 3. Multiplication by zero: `* a 0 = 0`, `* 0 a = 0`.
//! 4. Constant folding: `+ 1 2 = 3`, with `/` and `%` rounding toward negative infinity.
//!
//! Each rule rewrites operators bottom-up, so the operands of an operator are always rewritten
//! before the operator itself. Variables are opaque and are never evaluated.
//!
//! Every rule application replaces an operator with something strictly smaller, so the number of
//! nodes in the tree decreases with each change and simplification always terminates.
//!
//! ```
//! use binexp_compute::symbolic::{simplify_with_steps, Step};
//! use binexp_parser::parser::ast::Node;
//!
//! let node = "* + 2 3 + x 0".parse::<Node>().unwrap();
//! let (simplified, steps) = simplify_with_steps(node).unwrap();
//!
//! assert_eq!(simplified.to_prefix(), "* 5 x");
//! assert_eq!(steps, vec![Step::AddZero, Step::FoldConstant]);
//! ```
//!
//! [`Node`]: binexp_parser::parser::ast::Node

pub mod error;
pub mod simplify;
pub mod step_collector;

pub use simplify::{
    options::{DivisionPolicy, SimplifyOptions},
    simplify,
    simplify_with,
    simplify_with_steps,
    step::Step,
};
pub use step_collector::StepCollector;
