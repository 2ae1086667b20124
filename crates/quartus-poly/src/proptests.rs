//! Property-based tests for convolution.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::karatsuba::schoolbook_mul;
    use crate::{AutoConvolution, Convolution, ConvolutionConfig, Karatsuba, Ntt, Schoolbook};
    use quartus_integers::Mod998244353;

    type F = Mod998244353;

    fn coeffs(max_len: usize) -> impl Strategy<Value = Vec<F>> {
        proptest::collection::vec((0u64..998_244_353).prop_map(F::new), 0..=max_len)
    }

    proptest! {
        #[test]
        fn all_convolutions_agree(a in coeffs(80), b in coeffs(80), len in 0usize..200) {
            let expected = Schoolbook.convolve(&a, &b, len);
            prop_assert_eq!(Karatsuba.convolve(&a, &b, len), expected.clone());

            // force every size class through NTT or Karatsuba
            let eager = AutoConvolution::with_config(ConvolutionConfig {
                schoolbook_threshold: 1,
                karatsuba_threshold: 4,
            });
            prop_assert_eq!(eager.convolve(&a, &b, len), expected.clone());
            prop_assert_eq!(AutoConvolution::new().convolve(&a, &b, len), expected);
        }

        #[test]
        fn convolution_commutes(a in coeffs(40), b in coeffs(40)) {
            let conv = AutoConvolution::<F>::new();
            let len = a.len() + b.len();
            prop_assert_eq!(conv.convolve(&a, &b, len), conv.convolve(&b, &a, len));
        }

        #[test]
        fn ntt_matches_schoolbook(a in coeffs(64), b in coeffs(64)) {
            prop_assert_eq!(Ntt::new().multiply(&a, &b), schoolbook_mul(&a, &b));
        }
    }
}
