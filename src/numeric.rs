//! Bounded integer literals shared by the polynomial notation and the command
//! arguments.

use thiserror::Error;

use crate::poly::{Coeff, Exp};

/// Longest coefficient literal without a sign (`i64::MAX` has 19 digits).
pub const COEFF_MAX_LEN: usize = 19;

/// Longest coefficient literal with a leading `-`.
pub const NEG_COEFF_MAX_LEN: usize = 20;

/// Longest exponent literal (`i32::MAX` has 10 digits).
pub const EXP_MAX_LEN: usize = 10;

/// Largest exponent accepted in the notation.
pub const EXP_MAX: Exp = i32::MAX as Exp;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
  #[error("literal is not a number")]
  Malformed,
  /// `max_len` is the longest literal of the kind that could still be valid.
  #[error("literal out of range (at most {max_len} characters)")]
  OutOfRange { max_len: usize },
  /// Leading zeros, or a `-0` where it is not allowed.
  #[error("literal {literal:?} is not written canonically")]
  NonCanonical { literal: String, max_len: usize },
}

impl LiteralError {
  fn non_canonical(literal: &str, max_len: usize) -> Self {
    LiteralError::NonCanonical {
      literal: literal.to_string(),
      max_len,
    }
  }
}

fn all_digits(literal: &str) -> bool {
  !literal.is_empty() && literal.bytes().all(|b| b.is_ascii_digit())
}

/// Parses an optionally negative coefficient of the notation. The literal
/// must print back as itself; `-0` is the one exception.
pub fn parse_coeff(literal: &str) -> Result<Coeff, LiteralError> {
  let (digits, max_len) = match literal.strip_prefix('-') {
    Some(digits) => (digits, NEG_COEFF_MAX_LEN),
    None => (literal, COEFF_MAX_LEN),
  };
  if !all_digits(digits) {
    return Err(LiteralError::Malformed);
  }
  if literal.len() > max_len {
    return Err(LiteralError::OutOfRange { max_len });
  }
  let value = literal
    .parse::<Coeff>()
    .map_err(|_| LiteralError::OutOfRange { max_len })?;
  if literal != "-0" && value.to_string() != literal {
    return Err(LiteralError::non_canonical(literal, max_len));
  }
  Ok(value)
}

/// Parses the argument of `AT`: a coefficient that prints back as itself,
/// with no `-0`.
pub fn parse_value(literal: &str) -> Result<Coeff, LiteralError> {
  let value = parse_coeff(literal)?;
  if literal == "-0" {
    return Err(LiteralError::non_canonical(literal, NEG_COEFF_MAX_LEN));
  }
  Ok(value)
}

/// Parses a non-negative exponent no larger than [`EXP_MAX`].
pub fn parse_exp(literal: &str) -> Result<Exp, LiteralError> {
  let out_of_range = LiteralError::OutOfRange {
    max_len: EXP_MAX_LEN,
  };
  if !all_digits(literal) {
    return Err(LiteralError::Malformed);
  }
  if literal.len() > EXP_MAX_LEN {
    return Err(out_of_range);
  }
  match literal.parse::<Exp>() {
    Ok(exp) if exp > EXP_MAX => Err(out_of_range),
    Ok(exp) if exp.to_string() != literal => {
      Err(LiteralError::non_canonical(literal, EXP_MAX_LEN))
    }
    Ok(exp) => Ok(exp),
    Err(_) => Err(out_of_range),
  }
}

/// Parses a variable index, any value representable as `u32`. Leading zeros
/// are allowed here and in [`parse_count`].
pub fn parse_var_idx(literal: &str) -> Result<u32, LiteralError> {
  if !all_digits(literal) {
    return Err(LiteralError::Malformed);
  }
  literal.parse::<u32>().map_err(|_| LiteralError::OutOfRange {
    max_len: u32::MAX.to_string().len(),
  })
}

/// Parses a count of digits only, saturating at `usize::MAX`.
pub fn parse_count(literal: &str) -> Result<usize, LiteralError> {
  if !all_digits(literal) {
    return Err(LiteralError::Malformed);
  }
  Ok(literal.bytes().fold(0usize, |acc, b| {
    acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
  }))
}
