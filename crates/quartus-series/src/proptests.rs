//! Property-based tests for power series.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Fps, SeriesContext, Strategy as Algo};
    use quartus_binom::FactorialTable;
    use quartus_integers::Mod998244353;
    use quartus_poly::{AutoConvolution, Convolution};

    type F = Mod998244353;

    fn elem() -> impl Strategy<Value = F> {
        (0u64..998_244_353).prop_map(F::new)
    }

    fn series(max_len: usize) -> impl Strategy<Value = Fps<F>> {
        proptest::collection::vec(elem(), 0..=max_len).prop_map(Fps::from)
    }

    /// Series with a fixed constant term and at least one coefficient.
    fn series_with_constant(c: u64, max_len: usize) -> impl Strategy<Value = Fps<F>> {
        proptest::collection::vec(elem(), 0..max_len).prop_map(move |tail| {
            let mut f = Fps::from(vec![F::new(c)]);
            for x in tail {
                f.push(x);
            }
            f
        })
    }

    fn unit_series(max_len: usize) -> impl Strategy<Value = Fps<F>> {
        (1u64..998_244_353, series(max_len)).prop_map(|(c, mut f)| {
            if f.is_empty() {
                f.push(F::new(c));
            } else {
                f[0] = F::new(c);
            }
            f
        })
    }

    proptest! {
        #[test]
        fn differentiate_integrate_restores(f in series(40)) {
            let mut table = FactorialTable::new();
            prop_assert_eq!(f.integrated(&mut table).differentiated(), f);
        }

        #[test]
        fn integrate_differentiate_drops_constant(f in series(40)) {
            prop_assume!(!f.is_empty());
            let mut table = FactorialTable::new();
            let mut expected = f.clone();
            expected[0] = F::new(0);
            prop_assert_eq!(f.differentiated().integrated(&mut table), expected);
        }

        #[test]
        fn fact_div_undoes_fact_mul(f in series(60)) {
            let mut table = FactorialTable::new();
            prop_assert_eq!(f.fact_muled(&mut table).fact_dived(&mut table), f.clone());
            prop_assert_eq!(f.fact_dived(&mut table).fact_muled(&mut table), f);
        }

        #[test]
        fn add_then_sub_restores(f in series(20), g in series(20)) {
            let len = f.len().max(g.len());
            prop_assert_eq!((&f + &g) - &g, f.prefix(len as isize));
        }

        #[test]
        fn inverse_is_an_involution(f in unit_series(100), len in 1usize..100) {
            let mut ctx = SeriesContext::<F>::new();
            let g = f.inverse(&mut ctx, Some(len)).unwrap();
            prop_assert_eq!(g.inverse(&mut ctx, Some(len)).unwrap(), f.prefix(len as isize));
        }

        #[test]
        fn inverse_times_series_is_one(f in unit_series(100), len in 1usize..100) {
            let mut ctx = SeriesContext::<F>::new();
            let g = f.inverse(&mut ctx, Some(len)).unwrap();
            let mut one = Fps::zeros(len);
            one[0] = F::new(1);
            prop_assert_eq!(f.mul_with(&g, ctx.convolution(), len), one);
        }

        #[test]
        fn exp_undoes_log(f in series_with_constant(1, 100)) {
            let mut ctx = SeriesContext::<F>::new();
            let len = f.len();
            let l = f.log(&mut ctx, None).unwrap();
            prop_assert_eq!(l[0], F::new(0));
            prop_assert_eq!(l.exp(&mut ctx, Some(len)).unwrap(), f);
        }

        #[test]
        fn exp_satisfies_its_differential_equation(f in series_with_constant(0, 80)) {
            let mut ctx = SeriesContext::<F>::new();
            let len = f.len();
            let g = f.exp(&mut ctx, None).unwrap();
            let rhs = f.differentiated().mul_with(&g, ctx.convolution(), len - 1);
            prop_assert_eq!(g.differentiated(), rhs);
        }

        #[test]
        fn strategies_agree(f in series_with_constant(1, 150), e in 0u64..20) {
            let mut ctx = SeriesContext::<F>::new();
            let len = Some(f.len());

            let inv_naive = f.inverse_with(&mut ctx, len, Algo::Naive).unwrap();
            prop_assert_eq!(f.inverse_with(&mut ctx, len, Algo::Newton).unwrap(), inv_naive);

            let log_naive = f.log_with(&mut ctx, len, Algo::Naive).unwrap();
            prop_assert_eq!(f.log_with(&mut ctx, len, Algo::Newton).unwrap(), log_naive.clone());

            let exp_naive = log_naive.exp_with(&mut ctx, len, Algo::Naive).unwrap();
            prop_assert_eq!(log_naive.exp_with(&mut ctx, len, Algo::Newton).unwrap(), exp_naive);

            let pow_naive = f.pow_with(&mut ctx, e, len, Algo::Naive).unwrap();
            prop_assert_eq!(f.pow_with(&mut ctx, e, len, Algo::Newton).unwrap(), pow_naive);
        }

        #[test]
        fn pow_matches_repeated_multiplication(
            f in series(12),
            e in 0u64..6,
            len in 0usize..24,
        ) {
            let mut ctx = SeriesContext::<F>::new();
            let conv = AutoConvolution::<F>::new();

            let mut expected = Fps::zeros(len);
            if len > 0 {
                expected[0] = F::new(1);
            }
            for _ in 0..e {
                expected = expected.mul_with(&f, &conv, len);
            }
            prop_assert_eq!(f.pow(&mut ctx, e, Some(len)).unwrap(), expected);
        }

        #[test]
        fn sqrt_of_a_square(g in series(60), len in 0usize..60, newton in any::<bool>()) {
            let mut ctx = SeriesContext::<F>::new();
            let f = g.mul_with(&g, ctx.convolution(), len);
            let algo = if newton { Algo::Newton } else { Algo::Naive };

            let root = f.sqrt_with(&mut ctx, None, algo).unwrap();
            prop_assert!(root.is_some());
            let root = root.unwrap();
            prop_assert_eq!(root.mul_with(&root, ctx.convolution(), len), f);
        }

        #[test]
        fn truncated_convolution_matches_mul_with(f in series(30), g in series(30)) {
            let conv = AutoConvolution::<F>::new();
            let len = f.len() + g.len();
            prop_assert_eq!(
                f.mul_with(&g, &conv, len).into_vec(),
                conv.convolve(f.as_slice(), g.as_slice(), len)
            );
        }
    }
}
