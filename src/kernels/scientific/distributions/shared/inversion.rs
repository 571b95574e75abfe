// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Quantile Root-Finding** - *Verified Inversion of Monotone CDFs*
//!
//! Quantile functions without a closed form are computed in two stages:
//!
//! 1. an inverse special-function primitive supplies an estimate `x₀`;
//! 2. the estimate is rounded to the output precision and checked against the
//!    forward CDF through the relative residual `|F(x) − p| / p`.
//!
//! Estimates that miss the tolerance are refined on a bracket around the root
//! (doubling until the bracket holds, then Illinois false position with a
//! bisection fallback). Elements that still miss it after refinement keep their
//! best estimate and raise one [`ConvergenceWarning`] for the whole call.

use minarrow::Vec64;

use crate::config::{InverseOptions, MAX_BRACKET_EXPANSIONS, MAX_REFINE_ITERS};
use crate::errors::{ConvergenceWarning, KernelError};
use crate::kernels::scientific::distributions::univariate::common::broadcast::{
    Operands, broadcast,
};
use crate::kernels::scientific::distributions::univariate::common::std::{
    DomainClass, evaluate_table,
};
use crate::tensor::{Precision, Tensor};
use crate::utils::mask_indices;

/// Result of a quantile kernel.
///
/// `warning` is set when at least one element's residual stayed above the
/// tolerance; `values` holds best estimates for every element regardless.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantile {
    pub values: Tensor,
    pub warning: Option<ConvergenceWarning>,
}

impl Quantile {
    /// Drops the warning, keeping the values.
    pub fn into_values(self) -> Tensor {
        self.values
    }

    pub fn converged(&self) -> bool {
        self.warning.is_none()
    }
}

/// Quantile problem of one distribution with `N` arguments, the probability first.
///
/// Elements claimed by a `shortcuts` row take that row's value directly
/// (invalid arguments, `p == 0`, `p == 1`). Every remaining element is solved.
pub(crate) struct RootProblem<const N: usize> {
    pub function: &'static str,
    pub shortcuts: &'static [DomainClass<N>],
    /// Initial estimate from the inverse primitive.
    pub estimate: fn(&[f64; N]) -> f64,
    /// Forward CDF at `x` for the parameters in `args[1..]`.
    pub forward: fn(f64, &[f64; N]) -> f64,
    /// Closed support `[lower, upper]` for the parameters in `args[1..]`.
    pub support: fn(&[f64; N]) -> (f64, f64),
}

/// Worst residual tracking for one call.
#[derive(Debug, Default)]
struct Residuals {
    unconverged: usize,
    worst: f64,
}

impl Residuals {
    fn record(&mut self, r: f64, tol: f64) {
        if !(r <= tol) {
            self.unconverged += 1;
        }
        if r > self.worst || r.is_nan() {
            self.worst = r;
        }
    }
}

/// Relative residual of `x` after rounding to `precision`.
#[inline(always)]
fn residual<const N: usize>(
    problem: &RootProblem<N>,
    x: f64,
    args: &[f64; N],
    precision: Precision,
) -> f64 {
    let p = args[0];
    let xn = precision.narrow(x);
    ((problem.forward)(xn, args) - p).abs() / p
}

/// Solves every element of `ops` and returns the quantile buffer plus an
/// optional warning.
pub(crate) fn solve<const N: usize>(
    problem: &RootProblem<N>,
    ops: &Operands<'_, N>,
    options: &InverseOptions,
) -> (Vec64<f64>, Option<ConvergenceWarning>) {
    let precision = ops.precision();
    let tol = options.tolerance(precision);
    let (mut out, rest) = evaluate_table(problem.function, ops, problem.shortcuts);

    let mut residuals = Residuals::default();
    for i in mask_indices(&rest) {
        let args = ops.row(i);
        let mut x = (problem.estimate)(&args);
        let mut r = residual(problem, x, &args, precision);

        if !(r <= tol) && !options.verify_only {
            let refined = refine(problem, &args, x, tol, precision);
            let rr = residual(problem, refined, &args, precision);
            if rr < r || r.is_nan() {
                x = refined;
                r = rr;
            }
        }
        residuals.record(r, tol);
        out[i] = x;
    }

    let warning = if residuals.unconverged > 0 {
        let w = ConvergenceWarning {
            function: problem.function,
            unconverged: residuals.unconverged,
            max_residual: residuals.worst,
            tolerance: tol,
        };
        log::warn!("{}", w);
        Some(w)
    } else {
        None
    };
    (out, warning)
}

/// Quantile kernel entry: resolve `args`, solve, wrap the result.
pub(crate) fn quantile_kernel<const N: usize>(
    args: [&Tensor; N],
    problem: &RootProblem<N>,
    options: &InverseOptions,
) -> Result<Quantile, KernelError> {
    let ops = broadcast(problem.function, args)?;
    let (out, warning) = solve(problem, &ops, options);
    Ok(Quantile {
        values: Tensor::from_f64(ops.shape().clone(), out, ops.precision()),
        warning,
    })
}

/// Bracketed refinement of one element from the starting point `x0`.
fn refine<const N: usize>(
    problem: &RootProblem<N>,
    args: &[f64; N],
    x0: f64,
    tol: f64,
    precision: Precision,
) -> f64 {
    let p = args[0];
    let (lower, upper) = (problem.support)(args);
    let g = |x: f64| (problem.forward)(x, args) - p;

    let start = if x0.is_finite() && x0 > lower && x0 < upper {
        x0
    } else if upper.is_finite() {
        0.5 * (lower + upper)
    } else {
        lower + 1.0
    };

    // Bracket [a, b] with g(a) ≤ 0 ≤ g(b).
    let (mut a, mut b) = (start, start);
    let (mut ga, mut gb) = (g(a), g(b));
    if !ga.is_finite() {
        return x0;
    }
    if ga <= 0.0 {
        let mut step = (start - lower).abs().max(1.0);
        for _ in 0..MAX_BRACKET_EXPANSIONS {
            b = if upper.is_finite() {
                upper.min(a + step)
            } else {
                a + step
            };
            gb = g(b);
            if gb >= 0.0 || b >= upper {
                break;
            }
            a = b;
            ga = gb;
            step *= 2.0;
        }
    } else {
        for _ in 0..MAX_BRACKET_EXPANSIONS {
            // Halve the distance to the lower support bound.
            a = lower + 0.5 * (b - lower);
            ga = g(a);
            if ga <= 0.0 || a <= lower {
                break;
            }
            b = a;
            gb = ga;
        }
    }
    if !(ga <= 0.0 && gb >= 0.0) {
        return x0;
    }

    // Illinois false position with bisection fallback.
    let mut side = 0i8;
    let mut x = start;
    for _ in 0..MAX_REFINE_ITERS {
        let mut c = (a * gb - b * ga) / (gb - ga);
        if !(c > a && c < b) {
            c = 0.5 * (a + b);
        }
        x = c;
        let gc = g(c);
        if residual(problem, c, args, precision) <= 0.5 * tol || gc == 0.0 {
            break;
        }
        if gc < 0.0 {
            a = c;
            ga = gc;
            if side == -1 {
                gb *= 0.5;
            }
            side = -1;
        } else {
            b = c;
            gb = gc;
            if side == 1 {
                ga *= 0.5;
            }
            side = 1;
        }
        if b - a <= f64::EPSILON * b.abs().max(f64::MIN_POSITIVE) {
            break;
        }
    }
    x
}
