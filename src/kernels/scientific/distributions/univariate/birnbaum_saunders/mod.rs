// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Birnbaum–Saunders Distribution
//!
//! Fatigue-life distribution with location `μ`, scale `β` and shape `γ`. Support
//! is `(μ, ∞)`. If `Z` is standard normal then
//! `X = μ + β (γZ/2 + √((γZ/2)² + 1))²` is Birnbaum–Saunders, so the CDF,
//! quantile and generator are all closed form in Φ and Φ⁻¹.
//!
//! ## Mathematical Definition
//! With `y = (x − μ)/β`:
//! - **PDF**: f(x) = (√y + 1/√y) / (2γ(x − μ)) · φ((√y − 1/√y)/γ)
//! - **CDF**: F(x) = Φ((√y − 1/√y)/γ)
//! - **Quantile**: x = μ + β (γΦ⁻¹(p) + √(4 + γ²Φ⁻¹(p)²))² / 4
//!
//! `μ` must be finite, `β` and `γ` finite and strictly positive.

mod std;

use rand::Rng;

use crate::errors::KernelError;
use crate::tensor::Tensor;

/// Birnbaum–Saunders probability density. 0 for `x <= μ` and at `+∞`.
#[inline(always)]
pub fn bbs_pdf(
    x: &Tensor,
    loc: &Tensor,
    scale: &Tensor,
    shape: &Tensor,
) -> Result<Tensor, KernelError> {
    std::bbs_pdf_std(x, loc, scale, shape)
}

/// Birnbaum–Saunders cumulative distribution function.
#[inline(always)]
pub fn bbs_cdf(
    x: &Tensor,
    loc: &Tensor,
    scale: &Tensor,
    shape: &Tensor,
) -> Result<Tensor, KernelError> {
    std::bbs_cdf_std(x, loc, scale, shape)
}

/// Birnbaum–Saunders quantile function.
///
/// Closed form, so no residual check applies and the result is a plain tensor.
/// `p == 0` gives `μ`, `p == 1` gives `+∞`.
#[inline(always)]
pub fn bbs_inv(
    p: &Tensor,
    loc: &Tensor,
    scale: &Tensor,
    shape: &Tensor,
) -> Result<Tensor, KernelError> {
    std::bbs_inv_std(p, loc, scale, shape)
}

/// Birnbaum–Saunders random variates by inversion of one uniform per element.
#[inline(always)]
pub fn bbs_rnd<R: Rng + ?Sized>(
    loc: &Tensor,
    scale: &Tensor,
    shape: &Tensor,
    size: &[Tensor],
    rng: &mut R,
) -> Result<Tensor, KernelError> {
    std::bbs_rnd_std(loc, scale, shape, size, rng)
}
