// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Elementwise Distribution Kernels over Tensors*
//!
//! Probability density functions, cumulative distribution functions, quantile
//! functions and random variate generators for a fixed catalogue of univariate
//! distributions, evaluated elementwise over broadcast tensor arguments.
//!
//! ## Core Statistical Functions
//! Each distribution provides:
//! - **Density**: piecewise evaluation over explicit domain classes
//! - **Cumulative distribution**: series / continued fraction special functions
//! - **Quantile**: closed form where one exists, otherwise a verified root-find
//! - **Random sampling**: any `rand::Rng`, one draw per valid element
//!
//! ## Computational Architecture
//! Every kernel runs the same pipeline:
//! 1. **Shape resolution**: scalars expand, non-scalar operands must agree, and
//!    generators may request an explicit size.
//! 2. **Domain classification**: a per-distribution table of
//!    `(name, predicate, formula)` rows partitions the output positions, first
//!    match wins, so invalid parameters never reach a formula.
//! 3. **Masked evaluation**: each class is evaluated on its members only.
//! 4. **Precision**: results are computed in `f64` and narrowed to `f32` when
//!    every input was single precision.
//!
//! ### Value Philosophy
//! Domain violations are encoded in the output (`NaN`, `±inf`, `0`) rather than
//! raised. Only structural problems (argument count, shapes, size requests,
//! complex operands) are errors.
//!
//! ## Numerical Precision and Stability
//! Reference values in the tests come from mpmath at 40 significant digits.
//! See `./tests` for the integration suite and its tolerances.
//!
//! ## Disclaimer
//! This implementation is provided on a best-effort basis and is intended for
//! general scientific and engineering use. We make no guarantees as to
//! correctness or fitness for any particular purpose. Users are responsible for
//! independently verifying that these functions meet their accuracy and
//! reliability requirements.

/// # **Shared Distribution Utilities** - *Common Infrastructure for Distribution Computing*
///
/// ## Modules
/// - **`constants`**: Mathematical constants and approximation coefficients
/// - **`inversion`**: Verified root-finding behind the quantile kernels
/// - **`sampler`**: Random variate sampling primitives
/// - **`scalar`**: Special functions (lnΓ, incomplete gamma and beta, Φ)
pub mod shared {
    pub mod constants;
    pub mod inversion;
    pub mod sampler;
    pub mod scalar;
}

/// # **Univariate Distributions** - *Single-Variable Probability Distributions*
///
/// - **Distributions**: beta, gamma, nakagami, birnbaum_saunders, std_normal
/// - **Common**: shape resolution and the domain-class engine
/// - **Registry**: runtime dispatch by distribution and operation
pub mod univariate {
    // common kernel machinery
    pub mod common;
    pub mod registry;

    // distributions
    pub mod beta;
    /// Birnbaum–Saunders fatigue-life distribution kernels.
    pub mod birnbaum_saunders;
    pub mod gamma;
    /// Nakagami-m fading distribution kernels.
    pub mod nakagami;
    pub mod std_normal;
}
