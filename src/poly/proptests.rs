//! Property-based tests for the polynomial ring operations.

use proptest::prelude::*;

use super::{Mono, Poly};
use crate::parser::parse_poly_str;

// Small coefficients and exponents keep products clear of wrapping.
fn small_poly() -> impl Strategy<Value = Poly> {
  let leaf = (-20i64..20).prop_map(Poly::from);
  leaf.prop_recursive(3, 24, 4, |inner| {
    prop::collection::vec((inner, 0u32..6), 0..4).prop_map(|terms| {
      Poly::from_monos(
        terms.into_iter().map(|(c, e)| Mono::new(c, e)).collect(),
      )
    })
  })
}

fn non_zero_poly() -> impl Strategy<Value = Poly> {
  small_poly().prop_filter("non-zero", |p| !p.is_zero())
}

proptest! {
  #[test]
  fn generated_polys_are_canonical(p in small_poly()) {
    prop_assert!(p.is_canonical());
  }

  #[test]
  fn add_commutative(p in small_poly(), q in small_poly()) {
    prop_assert_eq!(&p + &q, &q + &p);
  }

  #[test]
  fn add_associative(p in small_poly(), q in small_poly(), r in small_poly()) {
    prop_assert_eq!(&(&p + &q) + &r, &p + &(&q + &r));
  }

  #[test]
  fn add_identity_and_inverse(p in small_poly()) {
    prop_assert_eq!(&p + &Poly::zero(), p.clone());
    prop_assert!((&p + &(-&p)).is_zero());
    prop_assert!((&p - &p).is_zero());
  }

  #[test]
  fn mul_commutative(p in small_poly(), q in small_poly()) {
    prop_assert_eq!(&p * &q, &q * &p);
  }

  #[test]
  fn mul_associative(p in small_poly(), q in small_poly(), r in small_poly()) {
    prop_assert_eq!(&(&p * &q) * &r, &p * &(&q * &r));
  }

  #[test]
  fn distributive(p in small_poly(), q in small_poly(), r in small_poly()) {
    prop_assert_eq!(&p * &(&q + &r), &(&p * &q) + &(&p * &r));
  }

  #[test]
  fn results_stay_canonical(p in small_poly(), q in small_poly()) {
    prop_assert!((&p + &q).is_canonical());
    prop_assert!((&p - &q).is_canonical());
    prop_assert!((&p * &q).is_canonical());
    prop_assert!((-&p).is_canonical());
    prop_assert!(p.at(2).is_canonical());
    prop_assert!(p.compose(&[q.clone()]).is_canonical());
  }

  #[test]
  fn degree_of_product_is_sum(p in non_zero_poly(), q in non_zero_poly()) {
    prop_assert_eq!((&p * &q).deg(), p.deg() + q.deg());
  }

  #[test]
  fn degree_by_main_variable_bounds_total(p in small_poly()) {
    prop_assert!(p.deg_by(0) <= p.deg());
  }

  #[test]
  fn at_zero_is_degree_zero_coefficient(p in small_poly()) {
    let expected = match p.monos().first() {
      Some(m) if m.exp == 0 => m.coeff.clone(),
      Some(_) => Poly::zero(),
      None => p.clone(),
    };
    prop_assert_eq!(p.at(0), expected);
  }

  #[test]
  fn compose_with_zero_is_constant_term(p in small_poly()) {
    let expected = Poly::from(p.constant_term());
    prop_assert_eq!(p.compose(&[]), expected.clone());
    prop_assert_eq!(
      p.compose(&[Poly::zero(), Poly::zero(), Poly::zero()]),
      expected
    );
  }

  #[test]
  fn compose_with_main_variable_keeps_univariate(
    terms in prop::collection::vec((-20i64..20, 0u32..6), 0..5)
  ) {
    let p = Poly::from_monos(
      terms
        .into_iter()
        .map(|(c, e)| Mono::new(Poly::from(c), e))
        .collect(),
    );
    let x = Poly::from_monos(vec![Mono::new(Poly::from(1), 1)]);
    prop_assert_eq!(p.compose(&[x]), p);
  }

  #[test]
  fn printed_form_parses_back(p in small_poly()) {
    prop_assert_eq!(parse_poly_str(1, &p.to_string()), Ok(p));
  }
}
