//! Simplification of binary expression trees parsed by [`binexp_parser`].
//!
//! ```
//! use binexp_compute::symbolic::simplify;
//! use binexp_parser::parser::ast::Node;
//!
//! let node = "+ 0 * 1 x".parse::<Node>().unwrap();
//! assert_eq!(simplify(node).unwrap().to_prefix(), "x");
//! ```

pub mod primitive;
pub mod symbolic;
