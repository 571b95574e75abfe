// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Sampling Primitives** - *Seeded Variate Generation*
//!
//! Sampling kernels behind the `*_rnd` generators. Every function draws from a
//! caller-supplied `rand::Rng`, so a seeded generator reproduces a call exactly.
//! Preconditions on parameters are the caller's: the generators only ever reach
//! these functions for elements their domain classifier marked valid.

use rand::Rng;
use std::f64::consts::PI;

use crate::kernels::scientific::distributions::shared::scalar::std_normal_inv;

/// Uniform draw on the open interval (0, 1).
#[inline]
pub fn sample_open_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u: f64 = rng.random::<f64>();
        if u > 0.0 {
            return u;
        }
    }
}

// Box–Muller to get one N(0,1)
/// Generates a single sample from the standard normal distribution N(0,1).
#[inline]
pub fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // U1 ∈ (0,1), U2 ∈ [0,1)
    let u1 = sample_open_unit(rng);
    let u2: f64 = rng.random::<f64>();
    let r = (-2.0 * u1.ln()).sqrt();
    r * (2.0 * PI * u2).cos()
}

/// Standard normal by inversion, Φ⁻¹(u) of a single uniform.
///
/// Consumes exactly one uniform per variate, which keeps generator output aligned
/// element-by-element with the random stream.
#[inline]
pub fn sample_normal_inversion<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    std_normal_inv(sample_open_unit(rng))
}

/// Generates a single sample from the Gamma distribution using the Marsaglia–Tsang algorithm.
/// Preconditions: shape > 0, scale > 0.
#[inline]
pub fn sample_gamma<R: Rng + ?Sized>(rng: &mut R, shape: f64, scale: f64) -> f64 {
    debug_assert!(shape.is_finite() && shape > 0.0, "shape must be finite and > 0");
    debug_assert!(scale.is_finite() && scale > 0.0, "scale must be finite and > 0");

    // 0 < shape < 1: boost to shape + 1, then apply the power-law correction.
    if shape < 1.0 {
        let u = sample_open_unit(rng);
        return sample_gamma(rng, shape + 1.0, scale) * u.powf(1.0 / shape);
    }

    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();

    loop {
        let x = sample_standard_normal(rng);
        let one_plus_cx = 1.0 + c * x;
        if one_plus_cx <= 0.0 {
            continue;
        }
        let v = one_plus_cx * one_plus_cx * one_plus_cx;
        let u = sample_open_unit(rng);

        // Squeeze step
        if u < 1.0 - 0.0331 * (x * x) * (x * x) {
            return d * v * scale;
        }
        // Log acceptance step
        if u.ln() < 0.5 * x * x + d * (1.0 - v + v.ln()) {
            return d * v * scale;
        }
    }
}

/// Beta(a, b) as the gamma ratio X / (X + Y), X ~ Γ(a, 1), Y ~ Γ(b, 1).
/// Preconditions: a > 0, b > 0.
#[inline]
pub fn sample_beta<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    let x = sample_gamma(rng, a, 1.0);
    let y = sample_gamma(rng, b, 1.0);
    let s = x + y;
    if s > 0.0 {
        return x / s;
    }
    // Both draws underflowed (a, b ≪ 1): the mass sits at the end points.
    if rng.random::<f64>() < a / (a + b) {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mean_var(xs: &[f64]) -> (f64, f64) {
        let n = xs.len() as f64;
        let m = xs.iter().sum::<f64>() / n;
        let v = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (n - 1.0);
        (m, v)
    }

    #[test]
    fn open_unit_never_hits_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10_000 {
            let u = sample_open_unit(&mut rng);
            assert!(u > 0.0 && u < 1.0);
        }
    }

    #[test]
    fn gamma_moments() {
        let mut rng = StdRng::seed_from_u64(42);
        for &(shape, scale) in &[(0.5, 2.0), (3.0, 5.0)] {
            let xs: Vec<f64> = (0..40_000).map(|_| sample_gamma(&mut rng, shape, scale)).collect();
            let (m, v) = mean_var(&xs);
            assert!((m - shape * scale).abs() / (shape * scale) < 0.03, "mean {m}");
            let var = shape * scale * scale;
            assert!((v - var).abs() / var < 0.08, "var {v}");
            assert!(xs.iter().all(|&x| x > 0.0));
        }
    }

    #[test]
    fn beta_moments() {
        let mut rng = StdRng::seed_from_u64(7);
        let (a, b) = (2.0, 3.0);
        let xs: Vec<f64> = (0..40_000).map(|_| sample_beta(&mut rng, a, b)).collect();
        let (m, v) = mean_var(&xs);
        assert!((m - 0.4).abs() < 0.01);
        assert!((v - 0.04).abs() < 0.004);
        assert!(xs.iter().all(|&x| (0.0..=1.0).contains(&x)));
    }

    #[test]
    fn normal_inversion_moments() {
        let mut rng = StdRng::seed_from_u64(3);
        let xs: Vec<f64> = (0..40_000).map(|_| sample_normal_inversion(&mut rng)).collect();
        let (m, v) = mean_var(&xs);
        assert!(m.abs() < 0.03);
        assert!((v - 1.0).abs() < 0.05);
    }
}
