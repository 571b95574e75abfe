// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **dist-kernels** - *Broadcasting Distribution Kernels*
//!
//! Elementwise PDF, CDF, quantile and random-variate kernels for the beta,
//! gamma, Nakagami, Birnbaum–Saunders and standard normal distributions.
//!
//! Arguments are [`Tensor`](tensor::Tensor)s: scalars expand against arrays,
//! non-scalar arguments must share one shape, and results carry single
//! precision only when every input did. Domain violations are encoded in the
//! output; structural problems are [`KernelError`](errors::KernelError)s.
//!
//! ```rust,ignore
//! use dist_kernels::prelude::*;
//!
//! let x = Tensor::row(&[0.5, 1.0, 2.0]);
//! let f = gamma_pdf(&x, &Tensor::scalar(3.0), &Tensor::scalar(5.0))?;
//! let q = gamma_inv(&Tensor::scalar(1e-20), &Tensor::scalar(3.0), &Tensor::scalar(5.0))?;
//! assert!(q.converged());
//! ```

pub mod operators;

pub mod kernels {
    pub mod scientific {
        #[cfg(feature = "probability_distributions")]
        pub mod distributions;
        #[cfg(feature = "probability_distributions")]
        pub mod erf;
    }
}

pub mod config;
pub mod errors;
pub mod tensor;
pub mod utils;

/// Common imports for kernel callers.
#[cfg(feature = "probability_distributions")]
pub mod prelude {
    pub use crate::config::InverseOptions;
    pub use crate::errors::{ConvergenceWarning, KernelError};
    pub use crate::kernels::scientific::distributions::shared::inversion::Quantile;
    pub use crate::kernels::scientific::distributions::univariate::beta::*;
    pub use crate::kernels::scientific::distributions::univariate::birnbaum_saunders::*;
    pub use crate::kernels::scientific::distributions::univariate::gamma::*;
    pub use crate::kernels::scientific::distributions::univariate::nakagami::*;
    pub use crate::kernels::scientific::distributions::univariate::registry::{
        Evaluation, call, call_by_name, call_with,
    };
    pub use crate::kernels::scientific::distributions::univariate::std_normal::*;
    pub use crate::operators::{DistFn, Distribution, Operation};
    pub use crate::tensor::{Precision, Shape, Tensor};
}
