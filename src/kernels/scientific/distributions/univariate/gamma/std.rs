// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar implementation of the gamma distribution kernels.
//!
//! Argument rows are `[x, a, b]` for the density and CDF, `[p, a, b]` for the
//! quantile and `[a, b]` for the generator, with shape `a` and scale `b`.
//!
//! ### Numerical Stability
//! - **PDF**: evaluated in log space so large shapes neither overflow nor underflow early
//! - **CDF**: series / continued fraction split of P(a, x/b)
//! - **Quantile**: inverse incomplete gamma estimate, verified and refined against the CDF

use rand::Rng;

use crate::config::InverseOptions;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::inversion::{
    Quantile, RootProblem, quantile_kernel,
};
use crate::kernels::scientific::distributions::shared::sampler::sample_gamma;
use crate::kernels::scientific::distributions::shared::scalar::{
    inv_reg_lower_gamma, ln_gamma, reg_lower_gamma,
};
use crate::kernels::scientific::distributions::univariate::common::std::{
    DomainClass, evaluate_kernel, random_kernel,
};
use crate::tensor::Tensor;

#[inline(always)]
fn valid_params(a: f64, b: f64) -> bool {
    a > 0.0 && a.is_finite() && b > 0.0 && b.is_finite()
}

fn invalid(v: &[f64; 3]) -> bool {
    v[0].is_nan() || !valid_params(v[1], v[2])
}

fn invalid_probability(v: &[f64; 3]) -> bool {
    !(v[0] >= 0.0 && v[0] <= 1.0) || !valid_params(v[1], v[2])
}

fn invalid_params(v: &[f64; 2]) -> bool {
    !valid_params(v[0], v[1])
}

fn nan(_: &[f64; 3]) -> f64 {
    f64::NAN
}

fn zero(_: &[f64; 3]) -> f64 {
    0.0
}

fn one(_: &[f64; 3]) -> f64 {
    1.0
}

fn infinity(_: &[f64; 3]) -> f64 {
    f64::INFINITY
}

fn below_support(v: &[f64; 3]) -> bool {
    v[0] < 0.0
}

fn at_or_below_origin(v: &[f64; 3]) -> bool {
    v[0] <= 0.0
}

fn pole_at_origin(v: &[f64; 3]) -> bool {
    v[0] == 0.0 && v[1] < 1.0
}

fn exponential_origin(v: &[f64; 3]) -> bool {
    v[0] == 0.0 && v[1] == 1.0
}

fn origin(v: &[f64; 3]) -> bool {
    v[0] == 0.0
}

fn infinite(v: &[f64; 3]) -> bool {
    v[0] == f64::INFINITY
}

fn always(_: &[f64; 3]) -> bool {
    true
}

fn inverse_scale(v: &[f64; 3]) -> f64 {
    1.0 / v[2]
}

fn density(v: &[f64; 3]) -> f64 {
    let [x, a, b] = *v;
    ((a - 1.0) * x.ln() - x / b - ln_gamma(a) - a * b.ln()).exp()
}

fn cumulative(v: &[f64; 3]) -> f64 {
    reg_lower_gamma(v[1], v[0] / v[2])
}

#[rustfmt::skip]
static PDF_CLASSES: [DomainClass<3>; 7] = [
    DomainClass { name: "invalid", test: invalid, eval: nan },
    DomainClass { name: "below support", test: below_support, eval: zero },
    DomainClass { name: "origin, a < 1", test: pole_at_origin, eval: infinity },
    DomainClass { name: "origin, a == 1", test: exponential_origin, eval: inverse_scale },
    DomainClass { name: "origin, a > 1", test: origin, eval: zero },
    DomainClass { name: "x == inf", test: infinite, eval: zero },
    DomainClass { name: "interior", test: always, eval: density },
];

#[rustfmt::skip]
static CDF_CLASSES: [DomainClass<3>; 4] = [
    DomainClass { name: "invalid", test: invalid, eval: nan },
    DomainClass { name: "x <= 0", test: at_or_below_origin, eval: zero },
    DomainClass { name: "x == inf", test: infinite, eval: one },
    DomainClass { name: "interior", test: always, eval: cumulative },
];

fn p_zero(v: &[f64; 3]) -> bool {
    v[0] == 0.0
}

fn p_one(v: &[f64; 3]) -> bool {
    v[0] == 1.0
}

#[rustfmt::skip]
static INV_SHORTCUTS: [DomainClass<3>; 3] = [
    DomainClass { name: "invalid", test: invalid_probability, eval: nan },
    DomainClass { name: "p == 0", test: p_zero, eval: zero },
    DomainClass { name: "p == 1", test: p_one, eval: infinity },
];

fn estimate(v: &[f64; 3]) -> f64 {
    v[2] * inv_reg_lower_gamma(v[1], v[0])
}

fn forward(x: f64, v: &[f64; 3]) -> f64 {
    reg_lower_gamma(v[1], x / v[2])
}

fn support(_: &[f64; 3]) -> (f64, f64) {
    (0.0, f64::INFINITY)
}

static INVERSE: RootProblem<3> = RootProblem {
    function: "gamma_inv",
    shortcuts: &INV_SHORTCUTS,
    estimate,
    forward,
    support,
};

#[inline(always)]
pub fn gamma_pdf_std(x: &Tensor, a: &Tensor, b: &Tensor) -> Result<Tensor, KernelError> {
    evaluate_kernel("gamma_pdf", [x, a, b], &PDF_CLASSES)
}

#[inline(always)]
pub fn gamma_cdf_std(x: &Tensor, a: &Tensor, b: &Tensor) -> Result<Tensor, KernelError> {
    evaluate_kernel("gamma_cdf", [x, a, b], &CDF_CLASSES)
}

#[inline(always)]
pub fn gamma_inv_std(
    p: &Tensor,
    a: &Tensor,
    b: &Tensor,
    options: &InverseOptions,
) -> Result<Quantile, KernelError> {
    quantile_kernel([p, a, b], &INVERSE, options)
}

#[inline(always)]
pub fn gamma_rnd_std<R: Rng + ?Sized>(
    a: &Tensor,
    b: &Tensor,
    size: &[Tensor],
    rng: &mut R,
) -> Result<Tensor, KernelError> {
    random_kernel("gamma_rnd", [a, b], size, invalid_params, rng, |v, r| {
        sample_gamma(r, v[0], v[1])
    })
}
