use super::Poly;

impl Poly {
  /// Total degree; `-1` for the zero polynomial.
  pub fn deg(&self) -> i64 {
    match self {
      Poly::Scalar(0) => -1,
      Poly::Scalar(_) => 0,
      Poly::Expansion(monos) => monos
        .iter()
        .map(|m| i64::from(m.exp) + m.coeff.deg())
        .max()
        .unwrap_or(-1),
    }
  }

  /// Degree in the variable `var_idx`, where index 0 is the main variable
  /// and larger indices reach into the coefficients; `-1` for zero.
  pub fn deg_by(&self, var_idx: u32) -> i64 {
    match self {
      Poly::Scalar(0) => -1,
      Poly::Scalar(_) => 0,
      Poly::Expansion(monos) if var_idx == 0 => {
        monos.last().map_or(-1, |m| i64::from(m.exp))
      }
      Poly::Expansion(monos) => monos
        .iter()
        .map(|m| m.coeff.deg_by(var_idx - 1))
        .max()
        .unwrap_or(-1),
    }
  }
}
