// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Gamma Distribution
//!
//! Two-parameter continuous distribution on `[0, ∞)` with shape `a` and scale `b`.
//! Generalises the exponential (`a = 1`) and chi-squared (`b = 2`) families.
//!
//! ## Mathematical Definition
//!
//! - **PDF**: f(x; a, b) = x^(a−1) e^(−x/b) / (Γ(a) b^a) for x ≥ 0
//! - **CDF**: F(x; a, b) = P(a, x/b), the regularised lower incomplete gamma
//! - **Quantile**: x = b · P⁻¹(a, p), verified against the CDF
//!
//! ## Parameter Domain
//! `a` and `b` must be finite and strictly positive. Any other value, or a NaN
//! variate, yields NaN at that position. Every argument may be a scalar or a
//! tensor; non-scalar arguments must share one shape.

mod std;

use rand::Rng;

use crate::config::InverseOptions;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::inversion::Quantile;
use crate::tensor::Tensor;

/// Gamma probability density.
///
/// # Special Cases
/// - `x < 0`: 0
/// - `x == 0`: `+∞` if `a < 1`, `1/b` if `a == 1`, 0 if `a > 1`
/// - `x == +∞`: 0
///
/// # Errors
/// `ShapeMismatch` when non-scalar arguments differ in shape, `ComplexInput`
/// for complex operands.
///
/// # Example
/// ```rust,ignore
/// use dist_kernels::kernels::scientific::distributions::univariate::gamma::gamma_pdf;
/// use dist_kernels::tensor::Tensor;
///
/// let x = Tensor::row(&[0.5, 1.0, 2.0]);
/// let f = gamma_pdf(&x, &2.0.into(), &1.0.into()).unwrap();
/// ```
#[inline(always)]
pub fn gamma_pdf(x: &Tensor, a: &Tensor, b: &Tensor) -> Result<Tensor, KernelError> {
    std::gamma_pdf_std(x, a, b)
}

/// Gamma cumulative distribution function, `P(a, x/b)`.
///
/// 0 for `x <= 0`, 1 at `x == +∞`.
#[inline(always)]
pub fn gamma_cdf(x: &Tensor, a: &Tensor, b: &Tensor) -> Result<Tensor, KernelError> {
    std::gamma_cdf_std(x, a, b)
}

/// Gamma quantile function with the default residual tolerance.
///
/// `p == 0` gives 0, `p == 1` gives `+∞`, `p` outside `[0, 1]` gives NaN.
/// Interior elements start from the inverse incomplete gamma estimate and are
/// refined until `|F(x) − p| / p` meets the tolerance; see [`gamma_inv_with`].
#[inline(always)]
pub fn gamma_inv(p: &Tensor, a: &Tensor, b: &Tensor) -> Result<Quantile, KernelError> {
    std::gamma_inv_std(p, a, b, &InverseOptions::default())
}

/// Gamma quantile function with explicit root-finding options.
///
/// A [`ConvergenceWarning`](crate::errors::ConvergenceWarning) is attached to
/// the result when any element misses the tolerance.
#[inline(always)]
pub fn gamma_inv_with(
    p: &Tensor,
    a: &Tensor,
    b: &Tensor,
    options: &InverseOptions,
) -> Result<Quantile, KernelError> {
    std::gamma_inv_std(p, a, b, options)
}

/// Gamma random variates (Marsaglia–Tsang).
///
/// `size` follows the generator convention: empty for the parameters' common
/// shape, one scalar `n` for `n x n`, one row vector or several scalars for
/// explicit dimensions. Invalid parameter positions are NaN.
#[inline(always)]
pub fn gamma_rnd<R: Rng + ?Sized>(
    a: &Tensor,
    b: &Tensor,
    size: &[Tensor],
    rng: &mut R,
) -> Result<Tensor, KernelError> {
    std::gamma_rnd_std(a, b, size, rng)
}
