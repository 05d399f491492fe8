//! Reader for the polynomial notation.
//!
//! ```text
//! poly  := coeff | mono ( "+" mono )*
//! mono  := "(" poly "," exp ")"
//! ```
//!
//! The scanner works one byte at a time off a [`CharSource`], keeping three
//! stacks: open brackets and pending `+` signs, finished monomials, and
//! finished coefficient polynomials. Errors carry the column of the offending
//! byte, counted from 1, and the rest of the line is always consumed.

use std::io::{self, Read};

use thiserror::Error;

use crate::numeric::{self, LiteralError};
use crate::poly::{Mono, Poly};

/// A stream of input bytes; `None` marks the end of input.
pub trait CharSource {
  fn next_char(&mut self) -> Option<u8>;
}

impl<I: Iterator<Item = u8>> CharSource for I {
  fn next_char(&mut self) -> Option<u8> {
    self.next()
  }
}

/// Reads bytes from any [`Read`]. A read error is logged and ends the input.
pub struct ByteSource<R> {
  bytes: io::Bytes<R>,
  finished: bool,
}

impl<R: Read> ByteSource<R> {
  pub fn new(reader: R) -> Self {
    ByteSource {
      bytes: reader.bytes(),
      finished: false,
    }
  }
}

impl<R: Read> CharSource for ByteSource<R> {
  fn next_char(&mut self) -> Option<u8> {
    if self.finished {
      return None;
    }
    match self.bytes.next() {
      Some(Ok(byte)) => Some(byte),
      Some(Err(err)) => {
        log::warn!("input read failed, treating as end of input: {err}");
        self.finished = true;
        None
      }
      None => {
        self.finished = true;
        None
      }
    }
  }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("ERROR {line} {column}")]
pub struct ParseError {
  pub line: usize,
  pub column: usize,
}

/// Parses the rest of a polynomial line whose first byte, `first`, has
/// already been read. `source` is left at the start of the next line whether
/// or not parsing succeeds.
pub fn parse_poly<S>(
  line: usize,
  first: u8,
  source: &mut S,
) -> Result<Poly, ParseError>
where
  S: CharSource + ?Sized,
{
  let mut scanner = Scanner::new(line, first, source);
  let result = scanner.run();
  scanner.skip_line();
  result
}

/// Parses a whole line of text.
pub fn parse_poly_str(line: usize, text: &str) -> Result<Poly, ParseError> {
  let mut bytes = text.bytes();
  match bytes.next() {
    Some(first) => parse_poly(line, first, &mut bytes),
    None => Err(ParseError { line, column: 1 }),
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
  Open,
  Plus,
}

struct Scanner<'s, S: ?Sized> {
  source: &'s mut S,
  line: usize,
  /// Column of `current`.
  column: usize,
  current: Option<u8>,
  markers: Vec<Marker>,
  monos: Vec<Mono>,
  polys: Vec<Poly>,
}

impl<'s, S: CharSource + ?Sized> Scanner<'s, S> {
  fn new(line: usize, first: u8, source: &'s mut S) -> Self {
    Scanner {
      source,
      line,
      column: 1,
      current: Some(first),
      markers: Vec::new(),
      monos: Vec::new(),
      polys: Vec::new(),
    }
  }

  fn advance(&mut self) {
    self.column += 1;
    self.current = self.source.next_char();
  }

  fn at_line_end(&self) -> bool {
    matches!(self.current, None | Some(b'\n'))
  }

  fn error_at(&self, column: usize) -> ParseError {
    ParseError {
      line: self.line,
      column,
    }
  }

  fn error_here(&self) -> ParseError {
    self.error_at(self.column)
  }

  fn skip_line(&mut self) {
    while !self.at_line_end() {
      self.current = self.source.next_char();
    }
  }

  fn run(&mut self) -> Result<Poly, ParseError> {
    if !matches!(self.current, Some(b'(' | b'-' | b'0'..=b'9')) {
      return Err(self.error_here());
    }

    while !self.at_line_end() {
      match self.current {
        Some(b'(') => self.open_bracket()?,
        Some(b'+') => self.plus()?,
        Some(b'-' | b'0'..=b'9') => self.coefficient()?,
        Some(b',') => self.exponent()?,
        Some(b')') => self.close_bracket()?,
        _ => return Err(self.error_here()),
      }
    }

    if self.markers.is_empty() && self.monos.is_empty() && self.polys.len() == 1
    {
      if let Some(poly) = self.polys.pop() {
        return Ok(poly);
      }
    }
    Err(self.error_here())
  }

  fn open_bracket(&mut self) -> Result<(), ParseError> {
    self.markers.push(Marker::Open);
    self.advance();
    match self.current {
      Some(b'(' | b'-' | b'0'..=b'9') => Ok(()),
      _ => Err(self.error_here()),
    }
  }

  fn plus(&mut self) -> Result<(), ParseError> {
    self.markers.push(Marker::Plus);
    self.advance();
    if self.current != Some(b'(') || self.monos.is_empty() {
      return Err(self.error_here());
    }
    Ok(())
  }

  /// Reads a run of digits, with an optional leading `-` when `signed`.
  fn take_literal(&mut self, signed: bool) -> String {
    let mut literal = String::new();
    if signed && self.current == Some(b'-') {
      literal.push('-');
      self.advance();
    }
    while let Some(digit @ b'0'..=b'9') = self.current {
      literal.push(char::from(digit));
      self.advance();
    }
    literal
  }

  fn coefficient(&mut self) -> Result<(), ParseError> {
    let start = self.column;
    let literal = self.take_literal(true);
    let coeff = match numeric::parse_coeff(&literal) {
      Ok(coeff) => coeff,
      Err(err) => {
        log::debug!("line {}: {err}", self.line);
        return Err(match err {
          LiteralError::OutOfRange { max_len }
          | LiteralError::NonCanonical { max_len, .. } => {
            self.error_at(start + max_len - 1)
          }
          LiteralError::Malformed => self.error_here(),
        });
      }
    };

    // A constant either precedes the exponent of a monomial or is the whole
    // line.
    let well_placed = match self.current {
      Some(b',') => self.markers.last() == Some(&Marker::Open),
      None | Some(b'\n') => self.markers.is_empty(),
      _ => false,
    };
    if !well_placed {
      return Err(self.error_here());
    }
    self.polys.push(Poly::from(coeff));
    Ok(())
  }

  fn exponent(&mut self) -> Result<(), ParseError> {
    self.advance();
    if !matches!(self.current, Some(b'0'..=b'9')) {
      return Err(self.error_here());
    }

    let start = self.column;
    let literal = self.take_literal(false);
    let exp = match numeric::parse_exp(&literal) {
      Ok(exp) => Some(exp),
      Err(err) => {
        log::debug!("line {}: {err}", self.line);
        None
      }
    };

    // The bracket is only consumed when the exponent itself is valid.
    let closed = exp.is_some()
      && self.markers.pop() == Some(Marker::Open)
      && self.current == Some(b')');
    let exp = match exp {
      Some(exp) if closed => exp,
      _ => return Err(self.exponent_error(start, literal.len())),
    };
    let coeff = self.polys.pop().ok_or_else(|| self.error_here())?;
    self.monos.push(Mono::new(coeff, exp));
    Ok(())
  }

  /// Column of a failed exponent: a literal of full exponent length is
  /// blamed at its last allowed digit, unless no bracket is left open.
  fn exponent_error(&self, start: usize, len: usize) -> ParseError {
    if !self.markers.is_empty() && len >= numeric::EXP_MAX_LEN {
      self.error_at(start + numeric::EXP_MAX_LEN - 1)
    } else {
      self.error_here()
    }
  }

  fn close_bracket(&mut self) -> Result<(), ParseError> {
    self.advance();
    if self.monos.is_empty() {
      return Err(self.error_here());
    }
    match self.current {
      Some(b'+') => Ok(()),
      None | Some(b'\n' | b',') => self.close_sum(),
      _ => Err(self.error_here()),
    }
  }

  /// Folds the monomials of the sum that just ended into one polynomial.
  fn close_sum(&mut self) -> Result<(), ParseError> {
    let mut sum = Vec::new();
    sum.extend(self.monos.pop());
    while self.markers.last() == Some(&Marker::Plus) {
      self.markers.pop();
      match self.monos.pop() {
        Some(mono) => sum.push(mono),
        None => return Err(self.error_here()),
      }
    }
    self.polys.push(Poly::from_monos(sum));
    Ok(())
  }
}
