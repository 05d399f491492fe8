//! Sparse multivariate polynomials.
//!
//! A polynomial is either a constant or a list of monomials over its main
//! variable, sorted by ascending exponent. The coefficient of every monomial is
//! again a polynomial, over the next variable.

mod arithmetic;
mod degree;
mod substitute;

#[cfg(test)]
mod proptests;

use std::fmt;

/// Coefficient type.
pub type Coeff = i64;

/// Exponent type.
pub type Exp = u32;

/// A polynomial in canonical form.
///
/// Canonical form means:
/// - zero is always `Scalar(0)`, never an empty `Expansion`;
/// - an `Expansion` is never a lone constant monomial `c * x^0`, that is
///   `Scalar(c)`;
/// - the exponents of an `Expansion` are strictly increasing and no monomial
///   has a zero coefficient.
///
/// Every constructor and operation of this module preserves it, so the derived
/// `PartialEq` is polynomial equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poly {
  Scalar(Coeff),
  Expansion(Vec<Mono>),
}

/// A monomial `coeff * x^exp`, where `coeff` is a polynomial over the next
/// variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mono {
  pub exp: Exp,
  pub coeff: Poly,
}

impl Mono {
  pub fn new(coeff: Poly, exp: Exp) -> Self {
    Mono { exp, coeff }
  }
}

impl Default for Poly {
  fn default() -> Self {
    Poly::zero()
  }
}

impl From<Coeff> for Poly {
  fn from(c: Coeff) -> Self {
    Poly::Scalar(c)
  }
}

impl Poly {
  pub fn zero() -> Self {
    Poly::Scalar(0)
  }

  pub fn from_coeff(c: Coeff) -> Self {
    Poly::Scalar(c)
  }

  /// Sums an arbitrary list of monomials into a canonical polynomial.
  ///
  /// The monomials may come in any order and may repeat exponents.
  pub fn from_monos(monos: Vec<Mono>) -> Self {
    arithmetic::normalize(monos)
  }

  pub fn is_scalar(&self) -> bool {
    matches!(self, Poly::Scalar(_))
  }

  pub fn is_zero(&self) -> bool {
    matches!(self, Poly::Scalar(0))
  }

  /// Monomials of the main variable; empty for a constant.
  pub fn monos(&self) -> &[Mono] {
    match self {
      Poly::Scalar(_) => &[],
      Poly::Expansion(monos) => monos,
    }
  }

  /// Checks the canonical-form invariants, recursively.
  pub fn is_canonical(&self) -> bool {
    match self {
      Poly::Scalar(_) => true,
      Poly::Expansion(monos) => {
        if monos.is_empty() {
          return false;
        }
        if let [only] = monos.as_slice() {
          if only.exp == 0 && only.coeff.is_scalar() {
            return false;
          }
        }
        let increasing = monos.windows(2).all(|w| w[0].exp < w[1].exp);
        increasing
          && monos
            .iter()
            .all(|m| !m.coeff.is_zero() && m.coeff.is_canonical())
      }
    }
  }

  /// Builds the polynomial for an already sorted, duplicate free list of
  /// monomials with non-zero coefficients.
  fn collapse(monos: Vec<Mono>) -> Self {
    if monos.is_empty() {
      return Poly::zero();
    }
    if let [Mono {
      exp: 0,
      coeff: Poly::Scalar(c),
    }] = monos.as_slice()
    {
      return Poly::Scalar(*c);
    }
    Poly::Expansion(monos)
  }
}

/// Prints `(coeff,exp)+(coeff,exp)+...` in ascending exponent order, or the
/// bare number for a constant.
impl fmt::Display for Poly {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Poly::Scalar(c) => write!(f, "{c}"),
      Poly::Expansion(monos) => {
        for (i, mono) in monos.iter().enumerate() {
          if i > 0 {
            f.write_str("+")?;
          }
          write!(f, "{mono}")?;
        }
        Ok(())
      }
    }
  }
}

impl fmt::Display for Mono {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({},{})", self.coeff, self.exp)
  }
}
