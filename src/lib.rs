//! Sparse multivariate polynomials with integer coefficients, their text
//! notation, and a stack calculator driven by line-oriented scripts.

use thiserror::Error;

pub mod calculator;
pub mod command;
pub mod numeric;
pub mod parser;
pub mod poly;

pub use calculator::{run_script, Calculator, Transcript};
pub use parser::{
  parse_poly, parse_poly_str, ByteSource, CharSource, ParseError,
};
pub use poly::{Coeff, Exp, Mono, Poly};

/// A calculator diagnostic. `Display` gives the exact line reported on the
/// diagnostic stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
  #[error("ERROR {line} STACK UNDERFLOW")]
  StackUnderflow { line: usize },
  #[error(transparent)]
  Parse(#[from] ParseError),
  #[error("ERROR {line} WRONG COMMAND")]
  WrongCommand { line: usize },
  #[error("ERROR {line} WRONG VALUE")]
  WrongValue { line: usize },
  #[error("ERROR {line} WRONG VARIABLE")]
  WrongVariable { line: usize },
  #[error("ERROR {line} WRONG COUNT")]
  WrongCount { line: usize },
}

impl CalcError {
  pub fn line(&self) -> usize {
    match self {
      CalcError::Parse(err) => err.line,
      CalcError::StackUnderflow { line }
      | CalcError::WrongCommand { line }
      | CalcError::WrongValue { line }
      | CalcError::WrongVariable { line }
      | CalcError::WrongCount { line } => *line,
    }
  }
}
