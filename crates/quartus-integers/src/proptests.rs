//! Property-based tests for modular arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Mod998244353, ModInt};

    const P: u64 = 998_244_353;

    fn residue() -> impl Strategy<Value = u64> {
        0u64..P
    }

    fn nonzero_residue() -> impl Strategy<Value = u64> {
        1u64..P
    }

    proptest! {
        #[test]
        fn modint_add_commutative(a in residue(), b in residue()) {
            let a = Mod998244353::new(a);
            let b = Mod998244353::new(b);
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn modint_mul_commutative(a in residue(), b in residue()) {
            let a = Mod998244353::new(a);
            let b = Mod998244353::new(b);
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn modint_distributive(a in residue(), b in residue(), c in residue()) {
            let a = Mod998244353::new(a);
            let b = Mod998244353::new(b);
            let c = Mod998244353::new(c);
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn modint_sub_is_add_neg(a in residue(), b in residue()) {
            let a = Mod998244353::new(a);
            let b = Mod998244353::new(b);
            prop_assert_eq!(a - b, a + (-b));
        }

        #[test]
        fn modint_inverse(a in nonzero_residue()) {
            let a = Mod998244353::new(a);
            let inv = a.inv().expect("inverse should exist for non-zero mod prime");
            prop_assert_eq!((a * inv).value(), 1);
        }

        #[test]
        fn modint_fermat_little_theorem(a in nonzero_residue()) {
            let a = Mod998244353::new(a);
            prop_assert_eq!(a.pow(P - 1).value(), 1);
        }

        #[test]
        fn modint_signed_matches_euclid(v in any::<i64>()) {
            let expected = i128::from(v).rem_euclid(13);
            prop_assert_eq!(i128::from(ModInt::<13>::from_signed(v).value()), expected);
        }
    }
}
