use super::{Coeff, Exp, Mono, Poly};

impl Poly {
  /// Substitutes `x` for the main variable.
  ///
  /// The remaining variables move up by one index, so the result of
  /// `p(x0, x1, x2, ...)` is `p(x, x0, x1, ...)`.
  pub fn at(&self, x: Coeff) -> Poly {
    let monos = match self {
      Poly::Scalar(c) => return Poly::Scalar(*c),
      Poly::Expansion(monos) => monos,
    };

    // Constant coefficients are summed as plain integers and folded in once.
    let mut constant: Coeff = 0;
    let mut result = Poly::zero();
    for Mono { exp, coeff } in monos {
      let power = pow_coeff(x, *exp);
      match coeff {
        Poly::Scalar(c) => {
          constant = constant.wrapping_add(power.wrapping_mul(*c));
        }
        _ => result += coeff.scale(power),
      }
    }
    if constant != 0 {
      result += Poly::Scalar(constant);
    }
    result
  }

  /// Substitutes `substitutions[i]` for the variable of index `i`.
  ///
  /// Variables with no substitution are set to zero. A constant composes to
  /// itself.
  pub fn compose(&self, substitutions: &[Poly]) -> Poly {
    let monos = match self {
      Poly::Scalar(c) => return Poly::Scalar(*c),
      Poly::Expansion(monos) => monos,
    };
    let Some((x, rest)) = substitutions.split_first() else {
      return Poly::Scalar(self.constant_term());
    };

    let mut result = Poly::zero();
    for Mono { exp, coeff } in monos {
      let coeff = coeff.compose(rest);
      if !coeff.is_zero() {
        result += &x.pow(*exp) * &coeff;
      }
    }
    result
  }

  /// Value of the polynomial with every variable set to zero.
  pub fn constant_term(&self) -> Coeff {
    match self {
      Poly::Scalar(c) => *c,
      Poly::Expansion(monos) => match monos.first() {
        Some(Mono { exp: 0, coeff }) => coeff.constant_term(),
        _ => 0,
      },
    }
  }
}

/// `x^n` by repeated squaring, wrapping on overflow.
fn pow_coeff(x: Coeff, n: Exp) -> Coeff {
  let mut result: Coeff = 1;
  let mut base = x;
  let mut n = n;
  while n > 0 {
    if n & 1 == 1 {
      result = result.wrapping_mul(base);
    }
    base = base.wrapping_mul(base);
    n >>= 1;
  }
  result
}
