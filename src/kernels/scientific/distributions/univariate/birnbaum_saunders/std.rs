// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar implementation of the Birnbaum–Saunders kernels.
//!
//! Rows are `[x, μ, β, γ]` (density, CDF), `[p, μ, β, γ]` (quantile) and
//! `[μ, β, γ]` (generator). Every kernel goes through the standardised variable
//! `z = (√y − 1/√y) / γ` with `y = (x − μ) / β`, which is standard normal.

use rand::Rng;

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::constants::{HALF_LOG_TWO_PI, LN_2};
use crate::kernels::scientific::distributions::shared::sampler::sample_normal_inversion;
use crate::kernels::scientific::distributions::shared::scalar::{
    std_normal_cdf, std_normal_inv, std_normal_pdf,
};
use crate::kernels::scientific::distributions::univariate::common::std::{
    DomainClass, evaluate_kernel, random_kernel,
};
use crate::tensor::Tensor;

#[inline(always)]
fn valid_params(loc: f64, scale: f64, shape: f64) -> bool {
    loc.is_finite() && scale > 0.0 && scale.is_finite() && shape > 0.0 && shape.is_finite()
}

fn invalid(v: &[f64; 4]) -> bool {
    v[0].is_nan() || !valid_params(v[1], v[2], v[3])
}

fn nan(_: &[f64; 4]) -> f64 {
    f64::NAN
}

fn zero(_: &[f64; 4]) -> f64 {
    0.0
}

fn one(_: &[f64; 4]) -> f64 {
    1.0
}

fn infinity(_: &[f64; 4]) -> f64 {
    f64::INFINITY
}

fn always(_: &[f64; 4]) -> bool {
    true
}

fn at_or_below_location(v: &[f64; 4]) -> bool {
    v[0] <= v[1]
}

fn infinite(v: &[f64; 4]) -> bool {
    v[0] == f64::INFINITY
}

/// y = (x − μ) / β, formed as x/β − μ/β when x − μ overflows.
#[inline(always)]
fn standardised(v: &[f64; 4]) -> f64 {
    let d = v[0] - v[1];
    if d.is_finite() {
        d / v[2]
    } else {
        v[0] / v[2] - v[1] / v[2]
    }
}

/// (√y, 1/√y) for y = (x − μ) / β.
#[inline(always)]
fn root_pair(y: f64) -> (f64, f64) {
    let r = y.sqrt();
    (r, 1.0 / r)
}

/// y underflowed to 0 or overflowed to ∞ while x itself is interior.
fn degenerate(v: &[f64; 4]) -> bool {
    let y = standardised(v);
    y == 0.0 || y == f64::INFINITY
}

fn density(v: &[f64; 4]) -> f64 {
    let (scale, shape) = (v[2], v[3]);
    let y = standardised(v);
    let (r, ir) = root_pair(y);
    let z = (r - ir) / shape;
    // (√y + 1/√y) / (2γβy)
    let lead = (r + ir) / (2.0 * shape * scale * y);
    let direct = lead * std_normal_pdf(z);
    if lead.is_finite() && direct.is_finite() {
        return direct;
    }
    // 1/y overflows the prefactor while φ(z) underflows
    let ln_lead = (r + ir).ln() - y.ln() - LN_2 - shape.ln() - scale.ln();
    (ln_lead - 0.5 * z * z - HALF_LOG_TWO_PI).exp()
}

fn cumulative(v: &[f64; 4]) -> f64 {
    let (r, ir) = root_pair(standardised(v));
    std_normal_cdf((r - ir) / v[3])
}

#[rustfmt::skip]
static PDF_CLASSES: [DomainClass<4>; 5] = [
    DomainClass { name: "invalid", test: invalid, eval: nan },
    DomainClass { name: "x <= location", test: at_or_below_location, eval: zero },
    DomainClass { name: "x == inf", test: infinite, eval: zero },
    DomainClass { name: "y == 0 | y == inf", test: degenerate, eval: zero },
    DomainClass { name: "interior", test: always, eval: density },
];

#[rustfmt::skip]
static CDF_CLASSES: [DomainClass<4>; 4] = [
    DomainClass { name: "invalid", test: invalid, eval: nan },
    DomainClass { name: "x <= location", test: at_or_below_location, eval: zero },
    DomainClass { name: "x == inf", test: infinite, eval: one },
    DomainClass { name: "interior", test: always, eval: cumulative },
];

fn invalid_probability(v: &[f64; 4]) -> bool {
    !(v[0] >= 0.0 && v[0] <= 1.0) || !valid_params(v[1], v[2], v[3])
}

fn p_zero(v: &[f64; 4]) -> bool {
    v[0] == 0.0
}

fn p_one(v: &[f64; 4]) -> bool {
    v[0] == 1.0
}

fn location(v: &[f64; 4]) -> f64 {
    v[1]
}

/// μ + β (y + √(4 + y²))² / 4 for y = γ z.
#[inline(always)]
fn from_standard_normal(z: f64, loc: f64, scale: f64, shape: f64) -> f64 {
    let y = shape * z;
    let h = 2.0_f64.hypot(y);
    // y + h cancels for large negative y
    let t = if y < 0.0 { 4.0 / (h - y) } else { y + h };
    loc + scale * t * t / 4.0
}

fn quantile(v: &[f64; 4]) -> f64 {
    from_standard_normal(std_normal_inv(v[0]), v[1], v[2], v[3])
}

#[rustfmt::skip]
static INV_CLASSES: [DomainClass<4>; 4] = [
    DomainClass { name: "invalid", test: invalid_probability, eval: nan },
    DomainClass { name: "p == 0", test: p_zero, eval: location },
    DomainClass { name: "p == 1", test: p_one, eval: infinity },
    DomainClass { name: "interior", test: always, eval: quantile },
];

fn invalid_params(v: &[f64; 3]) -> bool {
    !valid_params(v[0], v[1], v[2])
}

#[inline(always)]
pub fn bbs_pdf_std(
    x: &Tensor,
    loc: &Tensor,
    scale: &Tensor,
    shape: &Tensor,
) -> Result<Tensor, KernelError> {
    evaluate_kernel("bbs_pdf", [x, loc, scale, shape], &PDF_CLASSES)
}

#[inline(always)]
pub fn bbs_cdf_std(
    x: &Tensor,
    loc: &Tensor,
    scale: &Tensor,
    shape: &Tensor,
) -> Result<Tensor, KernelError> {
    evaluate_kernel("bbs_cdf", [x, loc, scale, shape], &CDF_CLASSES)
}

#[inline(always)]
pub fn bbs_inv_std(
    p: &Tensor,
    loc: &Tensor,
    scale: &Tensor,
    shape: &Tensor,
) -> Result<Tensor, KernelError> {
    evaluate_kernel("bbs_inv", [p, loc, scale, shape], &INV_CLASSES)
}

#[inline(always)]
pub fn bbs_rnd_std<R: Rng + ?Sized>(
    loc: &Tensor,
    scale: &Tensor,
    shape: &Tensor,
    size: &[Tensor],
    rng: &mut R,
) -> Result<Tensor, KernelError> {
    random_kernel("bbs_rnd", [loc, scale, shape], size, invalid_params, rng, |v, r| {
        from_standard_normal(sample_normal_inversion(r), v[0], v[1], v[2])
    })
}
