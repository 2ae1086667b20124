//! Property-based tests for the field capability traits.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::traits::{Field, PrimeField, Ring};
    use crate::GF998244353;

    const P: u64 = 998_244_353;

    proptest! {
        #[test]
        fn square_has_root(v in 0u64..P) {
            let a = GF998244353::from_u64(v);
            let sq = a * a;
            let r = sq.sqrt().expect("a square must have a root");
            prop_assert_eq!(r * r, sq);
        }

        #[test]
        fn euler_criterion_matches_sqrt(v in 1u64..P) {
            let a = GF998244353::from_u64(v);
            prop_assert_eq!(a.sqrt().is_some(), a.is_quadratic_residue());
        }

        #[test]
        fn field_inverse(v in 1u64..P) {
            let a = GF998244353::from_u64(v);
            let inv = Field::inv(&a).unwrap();
            prop_assert!((a * inv).is_one());
            prop_assert_eq!(GF998244353::one() / a, inv);
        }

        #[test]
        fn from_i64_agrees_with_negation(v in 0i64..1_000_000) {
            prop_assert_eq!(GF998244353::from_i64(-v), -GF998244353::from_i64(v));
        }
    }
}
