// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar-loop evaluation of piecewise distribution definitions.
//!
//! Each kernel describes its domain as a table of [`DomainClass`] rows. The
//! helpers here turn such a table plus the call's operands into an output
//! tensor, so the per-distribution code is reduced to predicates and formulas.

use minarrow::{Bitmask, Vec64};
use rand::Rng;

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::univariate::common::broadcast::{
    Operands, broadcast, broadcast_sized,
};
use crate::tensor::Tensor;
use crate::utils::{mask_count, mask_indices};

/// One row of a distribution's piecewise definition.
///
/// `test` decides membership from the argument values at one output position,
/// `eval` computes the output there. Rows are tried in table order and the
/// first accepting row claims the element, so the class masks are disjoint.
pub(crate) struct DomainClass<const N: usize> {
    pub name: &'static str,
    pub test: fn(&[f64; N]) -> bool,
    pub eval: fn(&[f64; N]) -> f64,
}

/// Builds one mask per class plus the mask of unclaimed elements.
///
/// Element `i` lands in the first class whose predicate accepts `ops.row(i)`.
/// The trailing mask holds every element no class claimed.
pub(crate) fn classify<const N: usize>(
    ops: &Operands<'_, N>,
    table: &[DomainClass<N>],
) -> (Vec<Bitmask>, Bitmask) {
    let len = ops.len();
    let mut masks: Vec<Bitmask> = table.iter().map(|_| Bitmask::new_set_all(len, false)).collect();
    let mut rest = Bitmask::new_set_all(len, false);

    for i in 0..len {
        let row = ops.row(i);
        match table.iter().position(|class| (class.test)(&row)) {
            Some(c) => masks[c].set(i, true),
            None => rest.set(i, true),
        }
    }
    (masks, rest)
}

/// NaN-initialised output buffer.
#[inline]
pub(crate) fn nan_buffer(len: usize) -> Vec64<f64> {
    let mut out = Vec64::with_capacity(len);
    out.resize(len, f64::NAN);
    out
}

/// Gathers the elements of `mask`, evaluates `eval` on them and scatters into `out`.
#[inline(always)]
pub(crate) fn scatter_class<const N: usize>(
    ops: &Operands<'_, N>,
    mask: &Bitmask,
    out: &mut [f64],
    eval: impl Fn(&[f64; N]) -> f64,
) {
    for i in mask_indices(mask) {
        out[i] = eval(&ops.row(i));
    }
}

/// Classifies every element and evaluates each class's formula on its members only.
///
/// Elements no class claims stay NaN. Returns the buffer and the mask of
/// unclaimed elements for callers that finish those themselves.
pub(crate) fn evaluate_table<const N: usize>(
    fname: &str,
    ops: &Operands<'_, N>,
    table: &[DomainClass<N>],
) -> (Vec64<f64>, Bitmask) {
    let (masks, rest) = classify(ops, table);
    let mut out = nan_buffer(ops.len());

    for (class, mask) in table.iter().zip(masks.iter()) {
        log::trace!("{} => class '{}': {} element(s)", fname, class.name, mask_count(mask));
        scatter_class(ops, mask, out.as_mut_slice(), class.eval);
    }
    (out, rest)
}

/// Density and CDF kernels: resolve `args`, evaluate `table`, wrap the result.
///
/// Tables are expected to be exhaustive; an element no row claims comes out NaN.
pub(crate) fn evaluate_kernel<const N: usize>(
    fname: &str,
    args: [&Tensor; N],
    table: &[DomainClass<N>],
) -> Result<Tensor, KernelError> {
    let ops = broadcast(fname, args)?;
    let (out, rest) = evaluate_table(fname, &ops, table);
    let unclaimed = mask_count(&rest);
    if unclaimed > 0 {
        log::trace!("{} => {} unclassified element(s) left NaN", fname, unclaimed);
    }
    Ok(Tensor::from_f64(ops.shape().clone(), out, ops.precision()))
}

/// Random generators: resolve `args` against `size`, then draw once per valid
/// element in ascending index order.
///
/// Elements whose parameters satisfy `invalid` are NaN and consume no draws.
pub(crate) fn random_kernel<const N: usize, R, F>(
    fname: &str,
    args: [&Tensor; N],
    size: &[Tensor],
    invalid: fn(&[f64; N]) -> bool,
    rng: &mut R,
    mut draw: F,
) -> Result<Tensor, KernelError>
where
    R: Rng + ?Sized,
    F: FnMut(&[f64; N], &mut R) -> f64,
{
    let ops = broadcast_sized(fname, args, size)?;
    let table = [DomainClass {
        name: "invalid parameters",
        test: invalid,
        eval: |_: &[f64; N]| f64::NAN,
    }];
    let (mut out, valid) = evaluate_table(fname, &ops, &table);
    for i in mask_indices(&valid) {
        out[i] = draw(&ops.row(i), rng);
    }
    Ok(Tensor::from_f64(ops.shape().clone(), out, ops.precision()))
}
