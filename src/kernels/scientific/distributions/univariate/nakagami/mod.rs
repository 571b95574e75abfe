// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Nakagami Distribution
//!
//! Nakagami(m, w) on `[0, ∞)` with shape `m` and spread `w = E[X²]`. Models
//! fading amplitudes in wireless channels; `m = 1` is the Rayleigh case and
//! `m = 1/2` the half-normal.
//!
//! ## Mathematical Definition
//! - **PDF**: f(x; m, w) = 2 mᵐ x^(2m−1) e^(−m x²/w) / (Γ(m) wᵐ)
//! - **CDF**: F(x; m, w) = P(m, m x²/w)
//! - **Quantile**: x = √(w/m · P⁻¹(m, p)), verified against the CDF
//!
//! `m` and `w` must be finite and strictly positive.

mod std;

use rand::Rng;

use crate::config::InverseOptions;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::inversion::Quantile;
use crate::tensor::Tensor;

/// Nakagami probability density.
///
/// At `x == 0`: 0 for `m > 1/2`, `√(2/(πw))` for `m == 1/2`, `+∞` for `m < 1/2`.
#[inline(always)]
pub fn nakagami_pdf(x: &Tensor, m: &Tensor, w: &Tensor) -> Result<Tensor, KernelError> {
    std::nakagami_pdf_std(x, m, w)
}

/// Nakagami cumulative distribution function.
#[inline(always)]
pub fn nakagami_cdf(x: &Tensor, m: &Tensor, w: &Tensor) -> Result<Tensor, KernelError> {
    std::nakagami_cdf_std(x, m, w)
}

/// Nakagami quantile function with the default residual tolerance.
#[inline(always)]
pub fn nakagami_inv(p: &Tensor, m: &Tensor, w: &Tensor) -> Result<Quantile, KernelError> {
    std::nakagami_inv_std(p, m, w, &InverseOptions::default())
}

/// Nakagami quantile function with explicit root-finding options.
#[inline(always)]
pub fn nakagami_inv_with(
    p: &Tensor,
    m: &Tensor,
    w: &Tensor,
    options: &InverseOptions,
) -> Result<Quantile, KernelError> {
    std::nakagami_inv_std(p, m, w, options)
}

/// Nakagami random variates as `√Y`, `Y ~ Gamma(m, w/m)`.
#[inline(always)]
pub fn nakagami_rnd<R: Rng + ?Sized>(
    m: &Tensor,
    w: &Tensor,
    size: &[Tensor],
    rng: &mut R,
) -> Result<Tensor, KernelError> {
    std::nakagami_rnd_std(m, w, size, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, common_tests,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn s(v: f64) -> Tensor {
        Tensor::scalar(v)
    }

    #[test]
    fn pdf_reference_values() {
        let out = nakagami_pdf(&Tensor::row(&[0.5, 1.0]), &s(2.0), &s(1.0)).unwrap();
        assert_close(out.get(0), 0.6065306597126334236, 1e-14);
        assert_close(out.get(1), 1.0826822658929015352, 1e-14);
    }

    #[test]
    fn pdf_at_origin() {
        let zero = s(0.0);
        assert_eq!(nakagami_pdf(&zero, &s(2.0), &s(1.0)).unwrap().get(0), 0.0);
        // half-normal with variance 2
        assert_close(
            nakagami_pdf(&zero, &s(0.5), &s(2.0)).unwrap().get(0),
            0.56418958354775628695,
            1e-15,
        );
        assert_eq!(nakagami_pdf(&zero, &s(0.3), &s(1.0)).unwrap().get(0), f64::INFINITY);
    }

    #[test]
    fn pdf_rayleigh_case() {
        // m = 1  ⇒  f(x) = 2x/w e^{-x²/w}
        let xs = [0.1_f64, 0.8, 2.5];
        let out = nakagami_pdf(&Tensor::row(&xs), &s(1.0), &s(3.0)).unwrap();
        for (i, &x) in xs.iter().enumerate() {
            assert_close(out.get(i), 2.0 * x / 3.0 * (-x * x / 3.0).exp(), 1e-13);
        }
    }

    #[test]
    fn cdf_reference_values() {
        let x = Tensor::row(&[-1.0, 0.0, 0.5, 1.0, f64::INFINITY]);
        let out = nakagami_cdf(&x, &s(2.0), &s(1.0)).unwrap().to_f64_vec();
        assert_eq!(&out[..2], &[0.0, 0.0]);
        assert_close(out[2], 0.090204010431049864594, 1e-13);
        assert_close(out[3], 0.59399415029016192432, 1e-14);
        assert_eq!(out[4], 1.0);
    }

    #[test]
    fn invalid_params_are_nan() {
        let w = Tensor::row(&[0.0, -1.0, f64::NAN]);
        let out = nakagami_cdf(&s(1.0), &s(1.0), &w).unwrap();
        assert!(out.to_f64_vec().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn inv_median_and_round_trip() {
        let q = nakagami_inv(&s(0.5), &s(2.0), &s(1.0)).unwrap();
        assert!(q.converged());
        assert_close(q.values.get(0), 0.91606413258479361048, 1e-14);

        let ps = [1e-8, 0.05, 0.5, 0.95, 1.0 - 1e-9];
        let q = nakagami_inv(&Tensor::row(&ps), &s(0.7), &s(4.0)).unwrap();
        assert!(q.converged());
        let back = nakagami_cdf(&q.values, &s(0.7), &s(4.0)).unwrap();
        for (i, &p) in ps.iter().enumerate() {
            assert_close(back.get(i), p, 1e-8);
        }
    }

    #[test]
    fn inv_boundaries() {
        let p = Tensor::row(&[0.0, 1.0, -0.5]);
        let v = nakagami_inv(&p, &s(1.0), &s(1.0)).unwrap().into_values().to_f64_vec();
        assert_eq!(v[0], 0.0);
        assert_eq!(v[1], f64::INFINITY);
        assert!(v[2].is_nan());
    }

    #[test]
    fn rnd_second_moment_matches_spread() {
        let mut rng = StdRng::seed_from_u64(2024);
        let out = nakagami_rnd(&s(1.5), &s(2.0), &[s(200.0)], &mut rng).unwrap();
        let xs = out.to_f64_vec();
        assert_eq!(xs.len(), 40_000);
        let m2 = xs.iter().map(|x| x * x).sum::<f64>() / xs.len() as f64;
        assert!((m2 - 2.0).abs() < 0.05, "E[X^2] = {m2}");
        assert!(xs.iter().all(|&x| x > 0.0));
    }

    common_tests!(nakagami_pdf_common, |x: &Tensor| nakagami_pdf(
        x,
        &Tensor::scalar(1.5),
        &Tensor::scalar(2.0)
    )
    .unwrap());
    common_tests!(nakagami_cdf_common, |x: &Tensor| nakagami_cdf(
        x,
        &Tensor::scalar(1.5),
        &Tensor::scalar(2.0)
    )
    .unwrap());
}
