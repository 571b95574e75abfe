// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar implementation of the beta distribution kernels.
//!
//! Argument rows are `[x, a, b]` (density, CDF), `[p, a, b]` (quantile) and
//! `[a, b]` (generator).
//!
//! ### Special Case Handling
//! The density has nine classes. The end points are resolved explicitly because
//! the log-space interior formula is `0 · ln 0` there.

use rand::Rng;

use crate::config::InverseOptions;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::inversion::{
    Quantile, RootProblem, quantile_kernel,
};
use crate::kernels::scientific::distributions::shared::sampler::sample_beta;
use crate::kernels::scientific::distributions::shared::scalar::{
    beta_density, incomplete_beta, incomplete_beta_inv,
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

fn outside_support(v: &[f64; 3]) -> bool {
    v[0] < 0.0 || v[0] > 1.0
}

fn uniform(v: &[f64; 3]) -> bool {
    v[1] == 1.0 && v[2] == 1.0
}

fn finite_left_edge(v: &[f64; 3]) -> bool {
    v[0] == 0.0 && v[1] == 1.0
}

fn finite_right_edge(v: &[f64; 3]) -> bool {
    v[0] == 1.0 && v[2] == 1.0
}

fn infinite_left_edge(v: &[f64; 3]) -> bool {
    v[0] == 0.0 && v[1] < 1.0
}

fn infinite_right_edge(v: &[f64; 3]) -> bool {
    v[0] == 1.0 && v[2] < 1.0
}

// Remaining end points have a > 1 or b > 1 on their side.
fn vanishing_edge(v: &[f64; 3]) -> bool {
    v[0] == 0.0 || v[0] == 1.0
}

fn always(_: &[f64; 3]) -> bool {
    true
}

fn b_param(v: &[f64; 3]) -> f64 {
    v[2]
}

fn a_param(v: &[f64; 3]) -> f64 {
    v[1]
}

fn density(v: &[f64; 3]) -> f64 {
    beta_density(v[1], v[2], v[0])
}

#[rustfmt::skip]
static PDF_CLASSES: [DomainClass<3>; 9] = [
    DomainClass { name: "invalid", test: invalid, eval: nan },
    DomainClass { name: "outside support", test: outside_support, eval: zero },
    DomainClass { name: "uniform", test: uniform, eval: one },
    DomainClass { name: "x == 0, a == 1", test: finite_left_edge, eval: b_param },
    DomainClass { name: "x == 1, b == 1", test: finite_right_edge, eval: a_param },
    DomainClass { name: "x == 0, a < 1", test: infinite_left_edge, eval: infinity },
    DomainClass { name: "x == 1, b < 1", test: infinite_right_edge, eval: infinity },
    DomainClass { name: "vanishing edge", test: vanishing_edge, eval: zero },
    DomainClass { name: "interior", test: always, eval: density },
];

fn at_or_below_zero(v: &[f64; 3]) -> bool {
    v[0] <= 0.0
}

fn at_or_above_one(v: &[f64; 3]) -> bool {
    v[0] >= 1.0
}

fn cumulative(v: &[f64; 3]) -> f64 {
    incomplete_beta(v[1], v[2], v[0])
}

#[rustfmt::skip]
static CDF_CLASSES: [DomainClass<3>; 4] = [
    DomainClass { name: "invalid", test: invalid, eval: nan },
    DomainClass { name: "x <= 0", test: at_or_below_zero, eval: zero },
    DomainClass { name: "x >= 1", test: at_or_above_one, eval: one },
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
    DomainClass { name: "p == 1", test: p_one, eval: one },
];

fn estimate(v: &[f64; 3]) -> f64 {
    incomplete_beta_inv(v[1], v[2], v[0])
}

fn forward(x: f64, v: &[f64; 3]) -> f64 {
    incomplete_beta(v[1], v[2], x)
}

fn support(_: &[f64; 3]) -> (f64, f64) {
    (0.0, 1.0)
}

static INVERSE: RootProblem<3> = RootProblem {
    function: "beta_inv",
    shortcuts: &INV_SHORTCUTS,
    estimate,
    forward,
    support,
};

fn invalid_params(v: &[f64; 2]) -> bool {
    !valid_params(v[0], v[1])
}

#[inline(always)]
pub fn beta_pdf_std(x: &Tensor, a: &Tensor, b: &Tensor) -> Result<Tensor, KernelError> {
    evaluate_kernel("beta_pdf", [x, a, b], &PDF_CLASSES)
}

#[inline(always)]
pub fn beta_cdf_std(x: &Tensor, a: &Tensor, b: &Tensor) -> Result<Tensor, KernelError> {
    evaluate_kernel("beta_cdf", [x, a, b], &CDF_CLASSES)
}

#[inline(always)]
pub fn beta_inv_std(
    p: &Tensor,
    a: &Tensor,
    b: &Tensor,
    options: &InverseOptions,
) -> Result<Quantile, KernelError> {
    quantile_kernel([p, a, b], &INVERSE, options)
}

#[inline(always)]
pub fn beta_rnd_std<R: Rng + ?Sized>(
    a: &Tensor,
    b: &Tensor,
    size: &[Tensor],
    rng: &mut R,
) -> Result<Tensor, KernelError> {
    random_kernel("beta_rnd", [a, b], size, invalid_params, rng, |v, r| {
        sample_beta(r, v[0], v[1])
    })
}
