// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar implementation of the Nakagami distribution kernels.
//!
//! Rows are `[x, m, w]` (density, CDF), `[p, m, w]` (quantile), `[m, w]` (generator).
//! X is Nakagami(m, w) iff X² is Gamma(m, w/m), which the CDF, quantile and
//! generator all go through.

use rand::Rng;

use crate::config::InverseOptions;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::constants::{LN_2, SQRT_PI};
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
fn valid_params(m: f64, w: f64) -> bool {
    m > 0.0 && m.is_finite() && w > 0.0 && w.is_finite()
}

fn invalid(v: &[f64; 3]) -> bool {
    v[0].is_nan() || !valid_params(v[1], v[2])
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

fn always(_: &[f64; 3]) -> bool {
    true
}

fn below_support(v: &[f64; 3]) -> bool {
    v[0] < 0.0
}

fn origin_vanishing(v: &[f64; 3]) -> bool {
    v[0] == 0.0 && v[1] > 0.5
}

fn origin_half_normal(v: &[f64; 3]) -> bool {
    v[0] == 0.0 && v[1] == 0.5
}

fn origin(v: &[f64; 3]) -> bool {
    v[0] == 0.0
}

fn infinite(v: &[f64; 3]) -> bool {
    v[0] == f64::INFINITY
}

// m == 1/2 is the half-normal with variance w: f(0) = √(2/(πw)).
fn half_normal_origin(v: &[f64; 3]) -> f64 {
    (2.0 / v[2]).sqrt() / SQRT_PI
}

fn density(v: &[f64; 3]) -> f64 {
    let [x, m, w] = *v;
    (LN_2 + m * m.ln() - ln_gamma(m) - m * w.ln() + (2.0 * m - 1.0) * x.ln() - m * x * x / w)
        .exp()
}

#[rustfmt::skip]
static PDF_CLASSES: [DomainClass<3>; 7] = [
    DomainClass { name: "invalid", test: invalid, eval: nan },
    DomainClass { name: "below support", test: below_support, eval: zero },
    DomainClass { name: "origin, m > 1/2", test: origin_vanishing, eval: zero },
    DomainClass { name: "origin, m == 1/2", test: origin_half_normal, eval: half_normal_origin },
    DomainClass { name: "origin, m < 1/2", test: origin, eval: infinity },
    DomainClass { name: "x == inf", test: infinite, eval: zero },
    DomainClass { name: "interior", test: always, eval: density },
];

fn at_or_below_origin(v: &[f64; 3]) -> bool {
    v[0] <= 0.0
}

#[inline(always)]
fn forward(x: f64, v: &[f64; 3]) -> f64 {
    let (m, w) = (v[1], v[2]);
    reg_lower_gamma(m, m * x * x / w)
}

fn cumulative(v: &[f64; 3]) -> f64 {
    forward(v[0], v)
}

#[rustfmt::skip]
static CDF_CLASSES: [DomainClass<3>; 4] = [
    DomainClass { name: "invalid", test: invalid, eval: nan },
    DomainClass { name: "x <= 0", test: at_or_below_origin, eval: zero },
    DomainClass { name: "x == inf", test: infinite, eval: one },
    DomainClass { name: "interior", test: always, eval: cumulative },
];

fn invalid_probability(v: &[f64; 3]) -> bool {
    !(v[0] >= 0.0 && v[0] <= 1.0) || !valid_params(v[1], v[2])
}

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
    let [p, m, w] = *v;
    (w / m * inv_reg_lower_gamma(m, p)).sqrt()
}

fn support(_: &[f64; 3]) -> (f64, f64) {
    (0.0, f64::INFINITY)
}

static INVERSE: RootProblem<3> = RootProblem {
    function: "nakagami_inv",
    shortcuts: &INV_SHORTCUTS,
    estimate,
    forward,
    support,
};

fn invalid_params(v: &[f64; 2]) -> bool {
    !valid_params(v[0], v[1])
}

#[inline(always)]
pub fn nakagami_pdf_std(x: &Tensor, m: &Tensor, w: &Tensor) -> Result<Tensor, KernelError> {
    evaluate_kernel("nakagami_pdf", [x, m, w], &PDF_CLASSES)
}

#[inline(always)]
pub fn nakagami_cdf_std(x: &Tensor, m: &Tensor, w: &Tensor) -> Result<Tensor, KernelError> {
    evaluate_kernel("nakagami_cdf", [x, m, w], &CDF_CLASSES)
}

#[inline(always)]
pub fn nakagami_inv_std(
    p: &Tensor,
    m: &Tensor,
    w: &Tensor,
    options: &InverseOptions,
) -> Result<Quantile, KernelError> {
    quantile_kernel([p, m, w], &INVERSE, options)
}

#[inline(always)]
pub fn nakagami_rnd_std<R: Rng + ?Sized>(
    m: &Tensor,
    w: &Tensor,
    size: &[Tensor],
    rng: &mut R,
) -> Result<Tensor, KernelError> {
    random_kernel("nakagami_rnd", [m, w], size, invalid_params, rng, |v, r| {
        sample_gamma(r, v[0], v[1] / v[0]).sqrt()
    })
}
