use super::*;
use crate::expansion::{expansion_product_truncated, scale_expansion};

impl<
  const N: usize,
> Ereal<N> {
  pub(crate) fn mul(self, other: Self) -> Self {
    if !self.is_finite() || !other.is_finite() {
      return Self::from(self.top() * other.top())
    }
    if self.is_zero() || other.is_zero() {
      return Self::ZERO
    }
    let estimate = self.top() * other.top();
    if estimate.is_infinite() {
      return Self::from(estimate)
    }
    // A single-limb factor is exact and cheap with `scale_expansion`. Otherwise we only need
    // two guard limbs beyond `N`: the rest would be rounded away by `from_expansion` anyway.
    let product = match (self.len, other.len) {
      (_, 1) => scale_expansion(self.limbs(), other.limbs[0]),
      (1, _) => scale_expansion(other.limbs(), self.limbs[0]),
      _ => expansion_product_truncated(self.limbs(), other.limbs(), N + 2),
    };
    Self::from_expansion(&product)
  }
}

super::mk_ops!{Mul, MulAssign, mul, mul_assign}

#[cfg(test)]
mod tests {
  use crate::expansion::test::rational;

  #[test]
  fn exact_when_it_fits() {
    let x = Ereal::<2>::from(0.1) * 0.1;
    assert_eq!(rational(x.limbs()), rational(&[0.1]) * rational(&[0.1]));
    let x = Ereal::<2>::from(3.) * 5.;
    assert_eq!(x.limbs(), [15.0]);
  }

  #[test]
  fn power_of_two() {
    let x = Ereal::<3>::from_limbs(&[1e-40, 1e-20, 1.0]);
    assert_eq!((x * 2.).limbs(), [2e-40, 2e-20, 2.0]);
    assert_eq!((x * -1.).limbs(), (-x).limbs());
  }

  #[test]
  fn zero() {
    assert!((Ereal::<2>::from(5.) * Ereal::ZERO).is_zero());
    assert!((Ereal::<2>::ZERO * -3.).is_zero());
  }

  #[test]
  fn special() {
    assert!((Ereal::<2>::NAN * 1.).is_nan());
    assert!((Ereal::<2>::INFINITY * Ereal::ZERO).is_nan());
    assert_eq!(Ereal::<2>::INFINITY * -2., Ereal::NEG_INFINITY);
  }

  #[test]
  fn overflow() {
    assert_eq!(Ereal::<2>::from(1e200) * 1e200, Ereal::INFINITY);
    assert_eq!(Ereal::<2>::from_limbs(&[1e180, 1e200]) * Ereal::from_limbs(&[-1e180, -1e200]), Ereal::NEG_INFINITY);
  }

  super::mk_tests!{*, *=}
}
