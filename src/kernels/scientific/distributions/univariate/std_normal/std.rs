// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar implementation of the standard normal kernels. Rows hold the variate
//! or probability only; the generator has no arguments at all.

use rand::Rng;

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::sampler::sample_normal_inversion;
use crate::kernels::scientific::distributions::shared::scalar::{
    std_normal_cdf, std_normal_inv, std_normal_pdf,
};
use crate::kernels::scientific::distributions::univariate::common::std::{
    DomainClass, evaluate_kernel, random_kernel,
};
use crate::tensor::Tensor;

fn is_nan(v: &[f64; 1]) -> bool {
    v[0].is_nan()
}

fn is_infinite(v: &[f64; 1]) -> bool {
    v[0].is_infinite()
}

fn is_neg_infinite(v: &[f64; 1]) -> bool {
    v[0] == f64::NEG_INFINITY
}

fn is_pos_infinite(v: &[f64; 1]) -> bool {
    v[0] == f64::INFINITY
}

fn always(_: &[f64; 1]) -> bool {
    true
}

fn nan(_: &[f64; 1]) -> f64 {
    f64::NAN
}

fn zero(_: &[f64; 1]) -> f64 {
    0.0
}

fn one(_: &[f64; 1]) -> f64 {
    1.0
}

fn density(v: &[f64; 1]) -> f64 {
    std_normal_pdf(v[0])
}

fn cumulative(v: &[f64; 1]) -> f64 {
    std_normal_cdf(v[0])
}

// std_normal_inv resolves p == 0, p == 1 and out-of-range p itself.
fn quantile(v: &[f64; 1]) -> f64 {
    std_normal_inv(v[0])
}

#[rustfmt::skip]
static PDF_CLASSES: [DomainClass<1>; 3] = [
    DomainClass { name: "nan", test: is_nan, eval: nan },
    DomainClass { name: "x == ±inf", test: is_infinite, eval: zero },
    DomainClass { name: "finite", test: always, eval: density },
];

#[rustfmt::skip]
static CDF_CLASSES: [DomainClass<1>; 4] = [
    DomainClass { name: "nan", test: is_nan, eval: nan },
    DomainClass { name: "x == -inf", test: is_neg_infinite, eval: zero },
    DomainClass { name: "x == +inf", test: is_pos_infinite, eval: one },
    DomainClass { name: "finite", test: always, eval: cumulative },
];

fn outside_unit(v: &[f64; 1]) -> bool {
    !(v[0] >= 0.0 && v[0] <= 1.0)
}

#[rustfmt::skip]
static INV_CLASSES: [DomainClass<1>; 2] = [
    DomainClass { name: "invalid", test: outside_unit, eval: nan },
    DomainClass { name: "p in [0, 1]", test: always, eval: quantile },
];

fn never(_: &[f64; 0]) -> bool {
    false
}

#[inline(always)]
pub fn std_normal_pdf_std(x: &Tensor) -> Result<Tensor, KernelError> {
    evaluate_kernel("stdnormal_pdf", [x], &PDF_CLASSES)
}

#[inline(always)]
pub fn std_normal_cdf_std(x: &Tensor) -> Result<Tensor, KernelError> {
    evaluate_kernel("stdnormal_cdf", [x], &CDF_CLASSES)
}

#[inline(always)]
pub fn std_normal_inv_std(p: &Tensor) -> Result<Tensor, KernelError> {
    evaluate_kernel("stdnormal_inv", [p], &INV_CLASSES)
}

#[inline(always)]
pub fn std_normal_rnd_std<R: Rng + ?Sized>(
    size: &[Tensor],
    rng: &mut R,
) -> Result<Tensor, KernelError> {
    random_kernel("stdnormal_rnd", [], size, never, rng, |_, r| sample_normal_inversion(r))
}
