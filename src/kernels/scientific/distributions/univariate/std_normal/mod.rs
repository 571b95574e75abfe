// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Standard Normal Module** - *N(0, 1) Density, CDF, Quantile and Variates*
//!
//! Parameter-free standard normal kernels. They also serve as the building
//! blocks of the Birnbaum–Saunders family.
//!
//! ## Usage Examples
//! ```rust,ignore
//! use dist_kernels::kernels::scientific::distributions::univariate::std_normal::*;
//! use dist_kernels::tensor::Tensor;
//!
//! let z = Tensor::row(&[-2.0, -1.0, 0.0, 1.0, 2.0]);
//! let pdf = std_normal_pdf(&z).unwrap();
//! let cdf = std_normal_cdf(&z).unwrap();
//!
//! // Two-sided critical values
//! let crit = std_normal_inv(&Tensor::row(&[0.95, 0.975, 0.995])).unwrap();
//! ```
//!
//! The CDF is evaluated as ½ erfc(−x/√2), so the left tail keeps full relative
//! accuracy down to the underflow limit. The quantile is closed form
//! (rational approximation plus one Halley step, erfc⁻¹ in the extreme tails).

mod std;

use rand::Rng;

use crate::errors::KernelError;
use crate::tensor::Tensor;

/// Standard normal density φ(x). 0 at `±∞`, NaN for NaN.
#[inline(always)]
pub fn std_normal_pdf(x: &Tensor) -> Result<Tensor, KernelError> {
    std::std_normal_pdf_std(x)
}

/// Standard normal CDF Φ(x).
#[inline(always)]
pub fn std_normal_cdf(x: &Tensor) -> Result<Tensor, KernelError> {
    std::std_normal_cdf_std(x)
}

/// Standard normal quantile Φ⁻¹(p): `−∞` at 0, `+∞` at 1, NaN outside `[0, 1]`.
#[inline(always)]
pub fn std_normal_inv(p: &Tensor) -> Result<Tensor, KernelError> {
    std::std_normal_inv_std(p)
}

/// Standard normal variates, one uniform per element.
///
/// With no `size` a single value is drawn. Output precision is always `Double`.
#[inline(always)]
pub fn std_normal_rnd<R: Rng + ?Sized>(
    size: &[Tensor],
    rng: &mut R,
) -> Result<Tensor, KernelError> {
    std::std_normal_rnd_std(size, rng)
}
