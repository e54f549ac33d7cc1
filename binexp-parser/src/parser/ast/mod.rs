//! The expression tree produced by the parser.

pub mod binary;
pub mod iter;
pub mod literal;
pub mod node;

pub use binary::Binary;
pub use iter::NodeIter;
pub use literal::{Number, Variable};
pub use node::Node;
