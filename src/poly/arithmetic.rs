use std::iter::Peekable;
use std::ops;

use super::{Coeff, Mono, Poly};

// ─── Addition ───────────────────────────────────────────────────────

impl ops::Add for Poly {
  type Output = Poly;

  fn add(self, rhs: Poly) -> Poly {
    match (self, rhs) {
      (Poly::Scalar(a), Poly::Scalar(b)) => Poly::Scalar(a.wrapping_add(b)),
      (Poly::Scalar(0), p) | (p, Poly::Scalar(0)) => p,
      (Poly::Scalar(c), Poly::Expansion(monos))
      | (Poly::Expansion(monos), Poly::Scalar(c)) => {
        merge(vec![Mono::new(Poly::Scalar(c), 0)], monos)
      }
      (Poly::Expansion(a), Poly::Expansion(b)) => merge(a, b),
    }
  }
}

impl ops::Add<&Poly> for &Poly {
  type Output = Poly;

  fn add(self, rhs: &Poly) -> Poly {
    self.clone() + rhs.clone()
  }
}

impl ops::AddAssign for Poly {
  fn add_assign(&mut self, rhs: Poly) {
    *self = std::mem::take(self) + rhs;
  }
}

/// Sorted merge of two monomial lists, adding the coefficients of equal
/// exponents and dropping the ones that cancel.
fn merge(a: Vec<Mono>, b: Vec<Mono>) -> Poly {
  let mut merged = Vec::with_capacity(a.len() + b.len());
  let mut a = a.into_iter().peekable();
  let mut b = b.into_iter().peekable();

  loop {
    let next = match (a.peek(), b.peek()) {
      (Some(x), Some(y)) if x.exp < y.exp => a.next(),
      (Some(x), Some(y)) if x.exp > y.exp => b.next(),
      (Some(_), Some(_)) => add_heads(&mut a, &mut b),
      (Some(_), None) => a.next(),
      (None, Some(_)) => b.next(),
      (None, None) => break,
    };
    merged.extend(next);
  }

  Poly::collapse(merged)
}

/// Consumes the two heads of equal exponent; `None` when they cancel.
fn add_heads<I>(a: &mut Peekable<I>, b: &mut Peekable<I>) -> Option<Mono>
where
  I: Iterator<Item = Mono>,
{
  let (x, y) = (a.next()?, b.next()?);
  let coeff = x.coeff + y.coeff;
  (!coeff.is_zero()).then(|| Mono::new(coeff, x.exp))
}

// ─── Negation and subtraction ───────────────────────────────────────

impl ops::Neg for Poly {
  type Output = Poly;

  fn neg(self) -> Poly {
    match self {
      Poly::Scalar(c) => Poly::Scalar(c.wrapping_neg()),
      Poly::Expansion(monos) => Poly::Expansion(
        monos
          .into_iter()
          .map(|m| Mono::new(-m.coeff, m.exp))
          .collect(),
      ),
    }
  }
}

impl ops::Neg for &Poly {
  type Output = Poly;

  fn neg(self) -> Poly {
    -self.clone()
  }
}

impl ops::Sub for Poly {
  type Output = Poly;

  fn sub(self, rhs: Poly) -> Poly {
    self + -rhs
  }
}

impl ops::Sub<&Poly> for &Poly {
  type Output = Poly;

  fn sub(self, rhs: &Poly) -> Poly {
    self.clone() - rhs.clone()
  }
}

// ─── Multiplication ─────────────────────────────────────────────────

impl ops::Mul<&Poly> for &Poly {
  type Output = Poly;

  fn mul(self, rhs: &Poly) -> Poly {
    match (self, rhs) {
      (p, q) if p.is_zero() || q.is_zero() => Poly::zero(),
      (Poly::Scalar(a), Poly::Scalar(b)) => Poly::Scalar(a.wrapping_mul(*b)),
      (Poly::Scalar(c), Poly::Expansion(monos))
      | (Poly::Expansion(monos), Poly::Scalar(c)) => {
        cross(&[Mono::new(Poly::Scalar(*c), 0)], monos)
      }
      (Poly::Expansion(a), Poly::Expansion(b)) => cross(a, b),
    }
  }
}

impl ops::Mul for Poly {
  type Output = Poly;

  fn mul(self, rhs: Poly) -> Poly {
    &self * &rhs
  }
}

impl Poly {
  /// `self * c`, without wrapping `c` into a polynomial first.
  pub fn scale(&self, c: Coeff) -> Poly {
    self * &Poly::Scalar(c)
  }

  /// `self^n` by repeated squaring.
  pub fn pow(&self, n: super::Exp) -> Poly {
    let mut result = Poly::from(1);
    let mut base = self.clone();
    let mut n = n;
    while n > 0 {
      if n & 1 == 1 {
        result = &result * &base;
      }
      n >>= 1;
      if n > 0 {
        base = &base * &base;
      }
    }
    result
  }
}

/// All pairwise products of two monomial lists, folded into canonical form.
///
/// Exponent sums saturate at `Exp::MAX`, so terms whose true exponents lie
/// past it are summed into the single `Exp::MAX` term.
fn cross(a: &[Mono], b: &[Mono]) -> Poly {
  let mut products = Vec::with_capacity(a.len() * b.len());
  for x in a {
    for y in b {
      let exp = x.exp.saturating_add(y.exp);
      products.push(Mono::new(&x.coeff * &y.coeff, exp));
    }
  }
  normalize(products)
}

// ─── Normalization ──────────────────────────────────────────────────

/// Folds an unordered list of monomials, possibly with repeated exponents,
/// into a canonical polynomial.
///
/// The sort is stable, so monomials of equal exponent are summed in input
/// order. A group whose coefficients cancel is dropped.
pub(super) fn normalize(mut monos: Vec<Mono>) -> Poly {
  monos.sort_by_key(|m| m.exp);

  let mut folded: Vec<Mono> = Vec::with_capacity(monos.len());
  for mono in monos {
    if mono.coeff.is_zero() {
      continue;
    }
    match folded.last_mut() {
      Some(last) if last.exp == mono.exp => {
        last.coeff += mono.coeff;
        if last.coeff.is_zero() {
          folded.pop();
        }
      }
      _ => folded.push(mono),
    }
  }

  Poly::collapse(folded)
}
