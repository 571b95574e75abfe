// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Machinery** - *Shape Resolution, Domain Classes and Test Helpers*
//!
//! Shared engine behind every univariate kernel.
//!
//! ## Pipeline
//! 1. [`broadcast`] resolves the operands to one output shape and precision.
//! 2. [`std`] partitions the output positions into the distribution's domain
//!    classes, first match wins, and evaluates each class on its members only.
//! 3. The buffer is narrowed to the output precision and wrapped as a `Tensor`.
//!
//! Quantile kernels add a root-finding stage on top, see
//! `shared::inversion`.
//!
//! ## Test Macros
//! The `common_tests!` macro generates the standard empty-input, NaN propagation
//! and bulk-vs-scalar checks for any `Fn(&Tensor) -> Tensor` kernel closure.

/// Operand resolution and size requests.
pub(crate) mod broadcast;
/// Domain classification and per-class evaluation.
pub(crate) mod std;

#[cfg(test)]
use crate::tensor::Tensor;

/// Test Helper: call `kernel` on a scalar tensor and return its single value.
#[cfg(test)]
pub(crate) fn scalar_call<F>(kernel: F, x: f64) -> f64
where
    F: Fn(&Tensor) -> Tensor,
{
    let out = kernel(&Tensor::scalar(x));
    assert_eq!(out.len(), 1);
    out.get(0)
}

/// Assert `a` and `b` agree to `tol` relative to `|b|`, or absolutely when `b == 0`.
///
/// NaN matches NaN and infinities must match exactly.
#[cfg(test)]
pub(crate) fn assert_close(a: f64, b: f64, tol: f64) {
    if b.is_nan() {
        assert!(a.is_nan(), "assert_close failed: {} vs NaN", a);
        return;
    }
    if b.is_infinite() {
        assert_eq!(a, b, "assert_close failed: {} vs {}", a, b);
        return;
    }
    let scale = if b == 0.0 { 1.0 } else { b.abs() };
    assert!(
        (a - b).abs() <= tol * scale,
        "assert_close failed: {} vs {} (tol={})",
        a,
        b,
        tol
    );
}

/// Generate the standard tests (empty input, NaN propagation, bulk-vs-scalar)
/// for a kernel closure `Fn(&Tensor) -> Tensor`.
///
/// Usage:
/// ```ignore
/// common_tests!(gamma_pdf_common, |x: &Tensor| gamma_pdf(x, &2.0.into(), &1.0.into()).unwrap());
/// ```
#[cfg(test)]
macro_rules! common_tests {
    ($name:ident, $call:expr) => {
        mod $name {
            use super::*;
            use crate::kernels::scientific::distributions::univariate::common::{
                assert_close, scalar_call,
            };
            use crate::tensor::Tensor;

            #[test]
            fn empty_input() {
                let x = Tensor::from_slice([0], &[] as &[f64]).unwrap();
                let out = ($call)(&x);
                assert!(out.is_empty());
                assert_eq!(out.dims(), &[0]);
            }

            #[test]
            fn bulk_vs_scalar_consistency() {
                let xs = [-3.0, -1.0, 0.0, 0.25, 1.0, 2.0];
                let bulk = ($call)(&Tensor::from_slice([2, 3], &xs).unwrap());
                assert_eq!(bulk.dims(), &[2, 3]);
                for (i, &x) in xs.iter().enumerate() {
                    let scalar = scalar_call($call, x);
                    assert_close(bulk.get(i), scalar, 1e-15);
                }
            }

            #[test]
            fn nan_propagation() {
                let xs = [0.5, f64::NAN, 0.75];
                let out = ($call)(&Tensor::from_slice([3], &xs).unwrap());
                assert!(out.get(1).is_nan());
                assert!(!out.get(0).is_nan());
            }
        }
    };
}
#[cfg(test)]
pub(crate) use common_tests;
