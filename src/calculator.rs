//! The stack machine that runs a script of polynomial and command lines.

use std::io::{self, Write};

use crate::command::{signed_argument, unsigned_argument, Command};
use crate::numeric::{self, LiteralError};
use crate::parser::{parse_poly, CharSource};
use crate::poly::Poly;
use crate::CalcError;

/// Everything a script printed, split by stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
  pub stdout: String,
  pub stderr: String,
}

/// Runs a whole script held in memory.
pub fn run_script(text: &str) -> Transcript {
  let mut calculator = Calculator::new(Vec::new(), Vec::new());
  if let Err(err) = calculator.run(&mut text.bytes()) {
    log::error!("writing to an in-memory buffer failed: {err}");
  }
  let (stdout, stderr) = calculator.into_sinks();
  Transcript {
    stdout: String::from_utf8_lossy(&stdout).into_owned(),
    stderr: String::from_utf8_lossy(&stderr).into_owned(),
  }
}

/// A polynomial stack plus the sinks for query results (`out`) and
/// diagnostics (`err`).
pub struct Calculator<O, E> {
  stack: Vec<Poly>,
  line: usize,
  out: O,
  err: E,
}

type Outcome = Result<Option<String>, CalcError>;

impl<O: Write, E: Write> Calculator<O, E> {
  pub fn new(out: O, err: E) -> Self {
    Calculator {
      stack: Vec::new(),
      line: 0,
      out,
      err,
    }
  }

  /// The stack, bottom first.
  pub fn stack(&self) -> &[Poly] {
    &self.stack
  }

  /// Number of the last line read.
  pub fn line(&self) -> usize {
    self.line
  }

  pub fn into_sinks(self) -> (O, E) {
    (self.out, self.err)
  }

  /// Processes lines until `source` runs out. Only failures to write to the
  /// sinks are returned; calculator errors are reported on the `err` sink.
  pub fn run<S>(&mut self, source: &mut S) -> io::Result<()>
  where
    S: CharSource + ?Sized,
  {
    while let Some(first) = source.next_char() {
      self.line += 1;
      let outcome = if first.is_ascii_alphabetic() {
        let text = read_line(first, source);
        self.execute_line(&text)
      } else {
        match parse_poly(self.line, first, source) {
          Ok(poly) => {
            self.stack.push(poly);
            Ok(None)
          }
          Err(err) => Err(err.into()),
        }
      };
      self.report(outcome)?;
    }
    self.out.flush()?;
    self.err.flush()
  }

  /// Runs one command line, counted as the next line of input.
  pub fn execute_line(&mut self, text: &str) -> Outcome {
    let command = Command::recognize(text)
      .ok_or(CalcError::WrongCommand { line: self.line })?;
    log::debug!(
      "line {}: {} with {} on the stack",
      self.line,
      command.keyword(),
      self.stack.len()
    );
    self.execute(command)
  }

  /// Runs a command against the stack. Returns the text a query prints.
  pub fn execute(&mut self, command: Command<'_>) -> Outcome {
    let line = self.line;
    match command {
      Command::Zero => {
        self.stack.push(Poly::zero());
        Ok(None)
      }
      Command::IsCoeff => Ok(flag(self.top()?.is_scalar())),
      Command::IsZero => Ok(flag(self.top()?.is_zero())),
      Command::Clone => {
        let copy = self.top()?.clone();
        self.stack.push(copy);
        Ok(None)
      }
      Command::Add => self.binary(|p, q| p + q),
      Command::Mul => self.binary(|p, q| p * q),
      Command::Neg => {
        let p = self.pop()?;
        self.stack.push(-p);
        Ok(None)
      }
      Command::Sub => self.binary(|p, q| p - q),
      Command::IsEq => match self.stack.as_slice() {
        [.., q, p] => Ok(flag(p == q)),
        _ => Err(CalcError::StackUnderflow { line }),
      },
      Command::Deg => Ok(Some(self.top()?.deg().to_string())),
      Command::Print => Ok(Some(self.top()?.to_string())),
      Command::Pop => {
        self.pop()?;
        Ok(None)
      }
      Command::DegBy(raw) => {
        let p = self.top()?;
        let var_idx = unsigned_argument(raw)
          .and_then(|literal| self.literal(numeric::parse_var_idx(literal)))
          .ok_or(CalcError::WrongVariable { line })?;
        Ok(Some(p.deg_by(var_idx).to_string()))
      }
      Command::At(raw) => {
        self.top()?;
        let x = signed_argument(raw)
          .and_then(|literal| self.literal(numeric::parse_value(literal)))
          .ok_or(CalcError::WrongValue { line })?;
        let p = self.pop()?;
        self.stack.push(p.at(x));
        Ok(None)
      }
      Command::Compose(raw) => {
        let count = unsigned_argument(raw)
          .and_then(|literal| self.literal(numeric::parse_count(literal)))
          .ok_or(CalcError::WrongCount { line })?;
        if count >= self.stack.len() {
          return Err(CalcError::StackUnderflow { line });
        }
        let p = self.pop()?;
        // x0 sits directly below p.
        let below = self.stack.len() - count;
        let mut substitutions = self.stack.split_off(below);
        substitutions.reverse();
        self.stack.push(p.compose(&substitutions));
        Ok(None)
      }
    }
  }

  /// The parsed argument, or `None` after logging why it was rejected.
  fn literal<T>(&self, parsed: Result<T, LiteralError>) -> Option<T> {
    parsed
      .map_err(|err| log::debug!("line {}: {err}", self.line))
      .ok()
  }

  fn top(&self) -> Result<&Poly, CalcError> {
    self
      .stack
      .last()
      .ok_or(CalcError::StackUnderflow { line: self.line })
  }

  fn pop(&mut self) -> Result<Poly, CalcError> {
    self
      .stack
      .pop()
      .ok_or(CalcError::StackUnderflow { line: self.line })
  }

  /// Pops the top `p` and the one below it `q`, and pushes `op(p, q)`. The
  /// stack is left alone when it holds fewer than two polynomials.
  fn binary(&mut self, op: impl FnOnce(Poly, Poly) -> Poly) -> Outcome {
    if self.stack.len() < 2 {
      return Err(CalcError::StackUnderflow { line: self.line });
    }
    let p = self.pop()?;
    let q = self.pop()?;
    self.stack.push(op(p, q));
    Ok(None)
  }

  fn report(&mut self, outcome: Outcome) -> io::Result<()> {
    match outcome {
      Ok(Some(text)) => writeln!(self.out, "{text}"),
      Ok(None) => Ok(()),
      Err(err) => {
        log::debug!("{err}");
        writeln!(self.err, "{err}")
      }
    }
  }
}

fn flag(value: bool) -> Option<String> {
  Some(u8::from(value).to_string())
}

/// Collects the rest of a command line, dropping the newline.
fn read_line<S>(first: u8, source: &mut S) -> String
where
  S: CharSource + ?Sized,
{
  let mut bytes = vec![first];
  while let Some(byte) = source.next_char() {
    if byte == b'\n' {
      break;
    }
    bytes.push(byte);
  }
  String::from_utf8_lossy(&bytes).into_owned()
}
