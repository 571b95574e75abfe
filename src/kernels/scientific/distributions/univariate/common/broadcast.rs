// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Shape Resolution** - *Scalar Expansion and Size Requests*
//!
//! Resolves the operands of one kernel call to a common output shape.
//!
//! ## Rules
//! - Any complex operand aborts with `ComplexInput` before anything else is inspected.
//! - Scalars (one element, any rank) expand to the common shape. They are read
//!   at index 0 for every output position; nothing is copied.
//! - Every non-scalar operand must carry exactly the same shape, otherwise
//!   `ShapeMismatch`. No further broadcasting takes place.
//! - Generators may request a size:
//!   - one scalar `S` requests an `S x S` output,
//!   - one row vector requests its values as the dimension list,
//!   - two or more arguments must each be scalar and give the dimensions in order.
//!
//!   Entries must be finite non-negative integers, otherwise `InvalidDimensions`.
//!   A requested size must equal the common shape of any non-scalar parameter.

use std::borrow::Cow;

use crate::errors::{KernelError, log_shape_mismatch};
use crate::tensor::{Precision, Shape, Tensor};
use crate::utils::{confirm_equal_len, is_dimension};

/// Resolved operands of a call with `N` real arguments.
///
/// `row(i)` yields the `N` argument values that meet at output position `i`.
#[derive(Debug)]
pub(crate) struct Operands<'a, const N: usize> {
    values: [Cow<'a, [f64]>; N],
    scalar: [bool; N],
    shape: Shape,
    precision: Precision,
}

impl<'a, const N: usize> Operands<'a, N> {
    /// Output shape.
    pub(crate) fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Output element count.
    pub(crate) fn len(&self) -> usize {
        self.shape.numel()
    }

    /// Output precision, promoted over every real argument.
    pub(crate) fn precision(&self) -> Precision {
        self.precision
    }

    /// Argument values at output position `i`.
    #[inline(always)]
    pub(crate) fn row(&self, i: usize) -> [f64; N] {
        std::array::from_fn(|k| {
            if self.scalar[k] {
                self.values[k][0]
            } else {
                self.values[k][i]
            }
        })
    }
}

/// Rejects complex operands.
fn reject_complex(fname: &str, args: &[&Tensor]) -> Result<(), KernelError> {
    if let Some(pos) = args.iter().position(|t| t.is_complex()) {
        return Err(KernelError::ComplexInput(format!(
            "{} => argument {} is complex; only real-valued arguments are accepted",
            fname,
            pos + 1
        )));
    }
    Ok(())
}

/// Common shape of `args`: the shared non-scalar shape, else the first
/// operand's own one-element shape, else rank 0.
fn common_shape(fname: &str, args: &[&Tensor]) -> Result<Shape, KernelError> {
    let mut common: Option<&Shape> = None;
    for t in args.iter().filter(|t| !t.is_scalar()) {
        match common {
            None => common = Some(t.shape()),
            Some(s) if s != t.shape() => {
                return Err(KernelError::ShapeMismatch(log_shape_mismatch(
                    fname,
                    s.dims(),
                    t.dims(),
                )));
            }
            Some(_) => {}
        }
    }
    Ok(common
        .or_else(|| args.first().map(|t| t.shape()))
        .cloned()
        .unwrap_or_else(Shape::scalar))
}

/// Parses generator size arguments. `Ok(None)` when no size was given.
pub(crate) fn requested_shape(fname: &str, size: &[Tensor]) -> Result<Option<Shape>, KernelError> {
    let dimension = |v: f64| -> Result<usize, KernelError> {
        if is_dimension(v) {
            Ok(v as usize)
        } else {
            Err(KernelError::InvalidDimensions(format!(
                "{} => dimensions must be non-negative integers, got {}",
                fname, v
            )))
        }
    };
    if size.iter().any(|t| t.is_complex()) {
        return Err(KernelError::InvalidDimensions(format!(
            "{} => dimensions must be real",
            fname
        )));
    }

    match size {
        [] => Ok(None),
        [only] if only.is_scalar() => {
            let n = dimension(only.get(0))?;
            Ok(Some(Shape::square(n)))
        }
        [only] if only.shape().is_row_vector() && only.is_empty() => {
            Ok(Some(Shape::new(vec![0])))
        }
        [only] if only.shape().is_row_vector() => {
            let dims = (0..only.len())
                .map(|i| dimension(only.get(i)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(Shape::new(dims)))
        }
        [only] => Err(KernelError::InvalidDimensions(format!(
            "{} => a single dimension argument must be a scalar or a row vector, got shape {}",
            fname,
            only.shape()
        ))),
        many => {
            let mut dims = Vec::with_capacity(many.len());
            for (k, t) in many.iter().enumerate() {
                if !t.is_scalar() {
                    return Err(KernelError::InvalidDimensions(format!(
                        "{} => dimension argument {} must be a scalar, got shape {}",
                        fname,
                        k + 1,
                        t.shape()
                    )));
                }
                dims.push(dimension(t.get(0))?);
            }
            Ok(Some(Shape::new(dims)))
        }
    }
}

/// Resolves `args` to a common output shape.
pub(crate) fn broadcast<'a, const N: usize>(
    fname: &str,
    args: [&'a Tensor; N],
) -> Result<Operands<'a, N>, KernelError> {
    broadcast_sized(fname, args, &[])
}

/// Resolves `args` against an optional generator size request.
pub(crate) fn broadcast_sized<'a, const N: usize>(
    fname: &str,
    args: [&'a Tensor; N],
    size: &[Tensor],
) -> Result<Operands<'a, N>, KernelError> {
    reject_complex(fname, &args)?;
    let common = common_shape(fname, &args)?;
    let requested = requested_shape(fname, size)?;

    let shape = match requested {
        None => common,
        Some(req) => {
            if let Some(t) = args.iter().find(|t| !t.is_scalar()) {
                if t.shape() != &req {
                    return Err(KernelError::ShapeMismatch(log_shape_mismatch(
                        fname,
                        req.dims(),
                        t.dims(),
                    )));
                }
            }
            req
        }
    };

    let scalar: [bool; N] = std::array::from_fn(|k| args[k].is_scalar());
    let values: [Cow<'a, [f64]>; N] =
        std::array::from_fn(|k| args[k].real_values().unwrap_or(Cow::Borrowed(&[])));
    for k in 0..N {
        let expected = if scalar[k] { 1 } else { shape.numel() };
        confirm_equal_len(fname, expected, values[k].len())?;
    }
    let precision = Precision::promote(args.iter().map(|t| t.precision()));

    log::trace!("{} => resolved shape {} ({:?})", fname, shape, precision);

    Ok(Operands {
        values,
        scalar,
        shape,
        precision,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    fn t(dims: &[usize], v: &[f64]) -> Tensor {
        Tensor::from_slice(dims, v).unwrap()
    }

    #[test]
    fn scalars_expand() {
        let x = t(&[2, 2], &[1.0, 2.0, 3.0, 4.0]);
        let a = Tensor::scalar(5.0);
        let ops = broadcast("f", [&x, &a]).unwrap();
        assert_eq!(ops.shape().dims(), &[2, 2]);
        assert_eq!(ops.row(3), [4.0, 5.0]);
        assert_eq!(ops.precision(), Precision::Double);
    }

    #[test]
    fn all_scalar_stays_scalar() {
        let (a, b) = (Tensor::scalar(1.0), Tensor::scalar(2.0));
        let ops = broadcast("f", [&a, &b]).unwrap();
        assert!(ops.shape().is_scalar());
        assert_eq!(ops.len(), 1);
    }

    #[test]
    fn mismatched_arrays_fail() {
        let x = t(&[3], &[1.0, 2.0, 3.0]);
        let a = t(&[2], &[1.0, 2.0]);
        assert!(matches!(broadcast("f", [&x, &a]), Err(KernelError::ShapeMismatch(_))));
        assert!(matches!(broadcast("f", [&a, &x]), Err(KernelError::ShapeMismatch(_))));
    }

    #[test]
    fn complex_is_checked_first() {
        let x = t(&[3], &[1.0, 2.0, 3.0]);
        let c = Tensor::complex([2], &[Complex::new(1.0, 0.0), Complex::new(0.0, 1.0)]).unwrap();
        assert!(matches!(broadcast("f", [&x, &c]), Err(KernelError::ComplexInput(_))));
    }

    #[test]
    fn size_forms() {
        let s = requested_shape("r", &[Tensor::scalar(3.0)]).unwrap().unwrap();
        assert_eq!(s.dims(), &[3, 3]);
        let s = requested_shape("r", &[Tensor::row(&[2.0, 4.0, 1.0])]).unwrap().unwrap();
        assert_eq!(s.dims(), &[2, 4, 1]);
        let s = requested_shape("r", &[Tensor::scalar(2.0), Tensor::scalar(5.0)])
            .unwrap()
            .unwrap();
        assert_eq!(s.dims(), &[2, 5]);
        assert!(requested_shape("r", &[]).unwrap().is_none());
    }

    #[test]
    fn empty_row_requests_no_elements() {
        let empty = Tensor::row::<f64>(&[]);
        let s = requested_shape("r", &[empty]).unwrap().unwrap();
        assert_eq!(s.dims(), &[0]);
        assert_eq!(s.numel(), 0);
    }

    #[test]
    fn one_element_arrays_keep_their_rank() {
        let x = t(&[1, 1], &[0.5]);
        let a = Tensor::scalar(2.0);
        let ops = broadcast("f", [&x, &a]).unwrap();
        assert_eq!(ops.shape().dims(), &[1, 1]);
        let ops = broadcast("f", [&a, &x]).unwrap();
        assert!(ops.shape().dims().is_empty());
    }

    #[test]
    fn bad_sizes() {
        for bad in [-1.0, 2.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                requested_shape("r", &[Tensor::scalar(bad)]),
                Err(KernelError::InvalidDimensions(_))
            ));
        }
        let column = t(&[2, 1], &[2.0, 2.0]);
        assert!(matches!(
            requested_shape("r", &[column]),
            Err(KernelError::InvalidDimensions(_))
        ));
        let pair = [Tensor::row(&[1.0, 2.0]), Tensor::scalar(2.0)];
        assert!(matches!(
            requested_shape("r", &pair),
            Err(KernelError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn size_must_match_array_params() {
        let a = t(&[2, 2], &[1.0; 4]);
        let b = Tensor::scalar(1.0);
        assert!(broadcast_sized("r", [&a, &b], &[Tensor::scalar(2.0)]).is_ok());
        assert!(matches!(
            broadcast_sized("r", [&a, &b], &[Tensor::scalar(3.0)]),
            Err(KernelError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn single_precision_only_when_all_single() {
        let x = Tensor::scalar(0.5_f32);
        let a = Tensor::scalar(2.0_f32);
        assert_eq!(broadcast("f", [&x, &a]).unwrap().precision(), Precision::Single);
        let b = Tensor::scalar(2.0_f64);
        assert_eq!(broadcast("f", [&x, &b]).unwrap().precision(), Precision::Double);
    }
}
