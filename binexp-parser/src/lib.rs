//! Parser for arithmetic expressions written in prefix notation, such as `+ x * 2 y`.
//!
//! The input is a single line of whitespace-separated tokens. Each token is a number (an optional
//! leading minus followed by digits), a variable (alphabetic characters only), or one of the five
//! binary operators `+`, `-`, `*`, `/` and `%`. Every operator is followed by its left operand and
//! then its right operand.
//!
//! ```
//! use binexp_parser::parser::{ast::Node, Parser};
//!
//! let mut parser = Parser::new("* + 1 x 3");
//! let node = parser.try_parse_full::<Node>().unwrap();
//! assert_eq!(node.to_prefix(), "* + 1 x 3");
//! assert_eq!(node.to_infix(), "((1 + x) * 3)");
//! assert_eq!(node.to_postfix(), "1 x + 3 *");
//! ```

pub mod parser;
pub mod tokenizer;
