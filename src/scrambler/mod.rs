//! Parse instruction lines -> Fold the password through every instruction in order

mod interpreter;
mod parser;
mod password;

pub use interpreter::*;
pub use parser::*;
pub use password::*;
