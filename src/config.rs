// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Global configuration controlling the root-finding layer behind the quantile
//! kernels. Compile-time constants fix iteration budgets; [`InverseOptions`]
//! carries the per-call residual tolerance.

use crate::tensor::Precision;

/// Multiplier applied to `sqrt(eps)` of the working precision to obtain the default
/// relative residual tolerance of quantile kernels.
///
/// A value of `1.0` accepts an estimate when `|F(x) - p| / p <= sqrt(eps)`.
pub const DEFAULT_RESIDUAL_TOL_FACTOR: f64 = 1.0;

/// Maximum number of Illinois / bisection steps spent refining a single element
/// whose initial estimate missed the residual tolerance.
pub const MAX_REFINE_ITERS: usize = 200;

/// Maximum number of bracket doublings when searching for an upper bound whose
/// forward value exceeds the target probability.
pub const MAX_BRACKET_EXPANSIONS: usize = 1100;

/// Per-call options for root-finding quantile kernels.
///
/// `rel_tol: None` selects `DEFAULT_RESIDUAL_TOL_FACTOR * sqrt(eps)` of the
/// output precision, i.e. `~1.49e-8` for `Double` and `~3.45e-4` for `Single`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InverseOptions {
    /// Relative residual tolerance `|F(x) - p| / p` above which a
    /// `ConvergenceWarning` is raised.
    pub rel_tol: Option<f64>,
    /// Skip the bracketed refinement step and only verify the primitive's estimate.
    pub verify_only: bool,
}

impl InverseOptions {
    /// Options with an explicit relative tolerance.
    pub fn with_tolerance(rel_tol: f64) -> Self {
        Self {
            rel_tol: Some(rel_tol),
            verify_only: false,
        }
    }

    /// Resolves the tolerance in force for a result of the given precision.
    pub fn tolerance(&self, precision: Precision) -> f64 {
        match self.rel_tol {
            Some(t) => t,
            None => DEFAULT_RESIDUAL_TOL_FACTOR * precision.epsilon().sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tolerance_tracks_precision() {
        let o = InverseOptions::default();
        assert_eq!(o.tolerance(Precision::Double), f64::EPSILON.sqrt());
        assert_eq!(o.tolerance(Precision::Single), (f32::EPSILON as f64).sqrt());
    }

    #[test]
    fn explicit_tolerance_wins() {
        let o = InverseOptions::with_tolerance(1e-3);
        assert_eq!(o.tolerance(Precision::Double), 1e-3);
        assert_eq!(o.tolerance(Precision::Single), 1e-3);
    }
}
