pub mod ast;
pub mod cursor;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;

pub mod internal {
  pub use crate::ast::*;
  pub use crate::cursor::*;
  pub use crate::lexer::*;
  pub use crate::parser::*;
  pub use crate::printer::*;
  pub use crate::token::*;
  pub use tracing::{instrument, trace};
}
