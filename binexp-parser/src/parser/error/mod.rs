pub mod kind;

pub use binexp_error::{Error, ErrorKind};
