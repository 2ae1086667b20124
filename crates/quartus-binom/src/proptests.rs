//! Property-based tests for factorial tables and binomial coefficients.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::FactorialTable;
    use quartus_integers::{Mod998244353, ModInt};

    type F = Mod998244353;

    fn arg() -> impl Strategy<Value = i64> {
        -300i64..300
    }

    proptest! {
        #[test]
        fn binomial_symmetry(n in arg(), k in arg()) {
            let mut t = FactorialTable::<F>::new();
            prop_assert_eq!(t.binomial(n, k), t.binomial(n, n - k));
        }

        #[test]
        fn binomial_absorption(n in arg(), k in arg()) {
            let mut t = FactorialTable::<F>::new();
            prop_assert_eq!(
                F::from_signed(k) * t.binomial(n, k),
                F::from_signed(n) * t.binomial(n - 1, k - 1)
            );
        }

        #[test]
        fn binomial_pascal(n in arg(), k in arg()) {
            prop_assume!((n, k) != (0, 0));
            let mut t = FactorialTable::<F>::new();
            prop_assert_eq!(t.binomial(n, k), t.binomial(n - 1, k - 1) + t.binomial(n - 1, k));
        }

        #[test]
        fn naive_agrees_with_table(n in arg(), k in arg()) {
            let mut t = FactorialTable::<F>::new();
            prop_assert_eq!(t.binomial_naive(n, k), t.binomial(n, k));
        }

        #[test]
        fn multichoose_paths_agree(n in arg(), k in -5i64..300) {
            let mut t = FactorialTable::<F>::new();
            prop_assert_eq!(t.multichoose_naive(n, k), t.multichoose(n, k));
        }

        #[test]
        fn binomial_mod_small_prime_matches_integers(n in 0i64..13, k in 0i64..13) {
            // exact Pascal triangle in u64, reduced afterwards
            let mut row = vec![1u64];
            for _ in 0..n {
                let mut next = vec![1u64; row.len() + 1];
                for j in 1..row.len() {
                    next[j] = row[j - 1] + row[j];
                }
                row = next;
            }
            let exact = usize::try_from(k).ok().and_then(|k| row.get(k)).copied().unwrap_or(0);

            let mut t = FactorialTable::<ModInt<13>>::new();
            prop_assert_eq!(t.binomial(n, k), ModInt::<13>::new(exact));
        }

        #[test]
        fn factorial_round_trip(i in 0i64..5000) {
            let mut t = FactorialTable::<F>::new();
            prop_assert_eq!(t.inverse_factorial(i) * t.factorial(i), F::new(1));
        }

        #[test]
        fn inverse_is_inverse(i in 1i64..5000) {
            let mut t = FactorialTable::<F>::new();
            prop_assert_eq!(t.inverse(i) * F::from_signed(i), F::new(1));
            prop_assert_eq!(t.inverse(-i) * F::from_signed(-i), F::new(1));
        }

        #[test]
        fn multinomial_of_two_parts_is_binomial(a in 0usize..200, b in 0usize..200) {
            let mut t = FactorialTable::<F>::new();
            let n = i64::try_from(a + b).unwrap();
            let k = i64::try_from(a).unwrap();
            prop_assert_eq!(t.multinomial([a, b]), t.binomial(n, k));
        }
    }
}
