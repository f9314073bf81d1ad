use super::*;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

/// Addition and subtraction (`a - b` is simply `a + (-b)`, since negation is exact).
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Remainder.
mod rem;

/// Helper macro for implementing operators for all combinations of value and reference, and of
/// ereal and `f64` operands.
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl<const N: usize>
    $trait<Ereal<N>> for Ereal<N> {
      type Output = Ereal<N>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl<const N: usize>
    $trait<&Ereal<N>> for Ereal<N> {
      type Output = Ereal<N>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl<const N: usize>
    $trait<Ereal<N>> for &Ereal<N> {
      type Output = Ereal<N>;

      #[inline]
      fn $name(self, rhs: Ereal<N>) -> Self::Output { (*self).$name(rhs) }
    }

    impl<const N: usize>
    $trait<&Ereal<N>> for &Ereal<N> {
      type Output = Ereal<N>;

      #[inline]
      fn $name(self, rhs: &Ereal<N>) -> Self::Output { (*self).$name(*rhs) }
    }

    impl<const N: usize>
    $trait<f64> for Ereal<N> {
      type Output = Ereal<N>;

      #[inline]
      fn $name(self, rhs: f64) -> Self::Output { self.$name(Ereal::from(rhs)) }
    }

    impl<const N: usize>
    $trait<f64> for &Ereal<N> {
      type Output = Ereal<N>;

      #[inline]
      fn $name(self, rhs: f64) -> Self::Output { (*self).$name(Ereal::from(rhs)) }
    }

    impl<const N: usize>
    $trait<Ereal<N>> for f64 {
      type Output = Ereal<N>;

      #[inline]
      fn $name(self, rhs: Ereal<N>) -> Self::Output { Ereal::<N>::from(self).$name(rhs) }
    }

    impl<const N: usize>
    $trait<&Ereal<N>> for f64 {
      type Output = Ereal<N>;

      #[inline]
      fn $name(self, rhs: &Ereal<N>) -> Self::Output { Ereal::<N>::from(self).$name(*rhs) }
    }

    impl<const N: usize>
    $trait_assign<Ereal<N>> for Ereal<N> {
      #[inline]
      fn $name_assign(&mut self, rhs: Ereal<N>) { *self = self.$name(rhs) }
    }

    impl<const N: usize>
    $trait_assign<&Ereal<N>> for Ereal<N> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Ereal<N>) { *self = self.$name(*rhs) }
    }

    impl<const N: usize>
    $trait_assign<f64> for Ereal<N> {
      #[inline]
      fn $name_assign(&mut self, rhs: f64) { *self = self.$name(Ereal::from(rhs)) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantiating the suite of tests for a binary operator of ereals, checked against
/// the exact result computed with rationals.
#[cfg(test)]
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt) => {
    use crate::Ereal;
    use crate::ereal::test::is_close;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = Ereal::<4>::ONE;
      let mut b = Ereal::<4>::MINUS_ONE;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      let _ = a $op 2.;
      let _ = &a $op 2.;
      let _ = 2. $op a;
      let _ = 2. $op &a;
      a $op_assign b;
      b $op_assign &a;
      a $op_assign 3.;
    }

    /// Aux function: check that `a $op b` is within the precision of `N` limbs of the exact
    /// result.
    fn is_accurate<const N: usize>(a: Ereal<N>, b: Ereal<N>) -> bool {
      let result = a $op b;
      if stringify!($op) == "/" && b.is_zero() {
        return result.is_nan()
      }
      let exact = a.rational() $op b.rational();
      is_close(&result, &exact, 50 * N as i64 - 4)
    }

    macro_rules! test_proptest {
      ($name:ident, $ereal:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in <$ereal>::cases_proptest(),
            b in <$ereal>::cases_proptest(),
          ) {
            prop_assert!(is_accurate(a, b), "{:?} ⋅ {:?}", a, b)
          }
        }
      };
    }

    macro_rules! test_f64 {
      ($name:ident, $ereal:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in <$ereal>::cases_proptest(),
            b in crate::expansion::test::with_exponent(-60 .. 60),
          ) {
            prop_assert_eq!(a $op b, a $op <$ereal>::from(b));
            prop_assert_eq!(b $op a, <$ereal>::from(b) $op a);
          }
        }
      };
    }

    test_proptest!{ereal_1_proptest, Ereal<1>}
    test_proptest!{ereal_2_proptest, Ereal<2>}
    test_proptest!{ereal_3_proptest, Ereal<3>}
    test_proptest!{ereal_4_proptest, Ereal<4>}
    test_proptest!{ereal_8_proptest, Ereal<8>}
    test_proptest!{ereal_12_proptest, Ereal<12>}

    test_f64!{ereal_2_f64, Ereal<2>}
    test_f64!{ereal_8_f64, Ereal<8>}
  }
}

#[cfg(test)]
pub(crate) use mk_tests;
