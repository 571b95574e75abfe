// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Kernel Registry** - *Dynamic Dispatch by Distribution and Operation*
//!
//! Routes a positional argument list to the typed kernel for one
//! [`DistFn`](crate::operators::DistFn). This is the surface for callers that
//! pick the function at runtime, e.g. by its short name (`"gaminv"`).
//!
//! Arity is enforced here: density, CDF and quantile calls take exactly the
//! variate plus every parameter, generators take every parameter followed by
//! any number of size arguments. Anything else is `ArgumentCount`.

use rand::Rng;

use crate::config::InverseOptions;
use crate::errors::{ConvergenceWarning, KernelError, log_arity};
use crate::kernels::scientific::distributions::shared::inversion::Quantile;
use crate::kernels::scientific::distributions::univariate::beta::{
    beta_cdf, beta_inv_with, beta_pdf, beta_rnd,
};
use crate::kernels::scientific::distributions::univariate::birnbaum_saunders::{
    bbs_cdf, bbs_inv, bbs_pdf, bbs_rnd,
};
use crate::kernels::scientific::distributions::univariate::gamma::{
    gamma_cdf, gamma_inv_with, gamma_pdf, gamma_rnd,
};
use crate::kernels::scientific::distributions::univariate::nakagami::{
    nakagami_cdf, nakagami_inv_with, nakagami_pdf, nakagami_rnd,
};
use crate::kernels::scientific::distributions::univariate::std_normal::{
    std_normal_cdf, std_normal_inv, std_normal_pdf, std_normal_rnd,
};
use crate::operators::{DistFn, Distribution, Operation};
use crate::tensor::Tensor;

/// Result of a registry call.
///
/// `warning` is only ever set by root-finding quantiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub values: Tensor,
    pub warning: Option<ConvergenceWarning>,
}

impl From<Tensor> for Evaluation {
    fn from(values: Tensor) -> Self {
        Evaluation {
            values,
            warning: None,
        }
    }
}

impl From<Quantile> for Evaluation {
    fn from(q: Quantile) -> Self {
        Evaluation {
            values: q.values,
            warning: q.warning,
        }
    }
}

/// Checks the argument count of `f` against `got`.
pub fn check_arity(f: DistFn, got: usize) -> Result<(), KernelError> {
    let min = f.min_args();
    match f.max_args() {
        Some(max) if got != max => Err(KernelError::ArgumentCount(log_arity(
            &f.to_string(),
            &max.to_string(),
            got,
        ))),
        None if got < min => Err(KernelError::ArgumentCount(log_arity(
            &f.to_string(),
            &format!("at least {}", min),
            got,
        ))),
        _ => Ok(()),
    }
}

/// Calls `operation` of `distribution` with default quantile options.
pub fn call<R: Rng + ?Sized>(
    distribution: Distribution,
    operation: Operation,
    args: &[Tensor],
    rng: &mut R,
) -> Result<Evaluation, KernelError> {
    call_with(distribution, operation, args, &InverseOptions::default(), rng)
}

/// Calls a function by its short name, e.g. `"betapdf"` or `"stdnormal_rnd"`.
pub fn call_by_name<R: Rng + ?Sized>(
    name: &str,
    args: &[Tensor],
    rng: &mut R,
) -> Result<Evaluation, KernelError> {
    let f: DistFn = name.parse()?;
    call(f.distribution, f.operation, args, rng)
}

/// Calls `operation` of `distribution`.
///
/// `options` only affects root-finding quantiles; `rng` is only drawn from by
/// generators.
pub fn call_with<R: Rng + ?Sized>(
    distribution: Distribution,
    operation: Operation,
    args: &[Tensor],
    options: &InverseOptions,
    rng: &mut R,
) -> Result<Evaluation, KernelError> {
    let f = DistFn::new(distribution, operation);
    check_arity(f, args.len())?;
    log::debug!("{} => {} argument(s)", f, args.len());

    let n = distribution.param_count();
    let a = args;
    let out: Evaluation = match (distribution, operation) {
        (Distribution::Beta, Operation::Pdf) => beta_pdf(&a[0], &a[1], &a[2])?.into(),
        (Distribution::Beta, Operation::Cdf) => beta_cdf(&a[0], &a[1], &a[2])?.into(),
        (Distribution::Beta, Operation::Inv) => beta_inv_with(&a[0], &a[1], &a[2], options)?.into(),
        (Distribution::Beta, Operation::Rnd) => beta_rnd(&a[0], &a[1], &a[n..], rng)?.into(),

        (Distribution::Gamma, Operation::Pdf) => gamma_pdf(&a[0], &a[1], &a[2])?.into(),
        (Distribution::Gamma, Operation::Cdf) => gamma_cdf(&a[0], &a[1], &a[2])?.into(),
        (Distribution::Gamma, Operation::Inv) => {
            gamma_inv_with(&a[0], &a[1], &a[2], options)?.into()
        }
        (Distribution::Gamma, Operation::Rnd) => gamma_rnd(&a[0], &a[1], &a[n..], rng)?.into(),

        (Distribution::Nakagami, Operation::Pdf) => nakagami_pdf(&a[0], &a[1], &a[2])?.into(),
        (Distribution::Nakagami, Operation::Cdf) => nakagami_cdf(&a[0], &a[1], &a[2])?.into(),
        (Distribution::Nakagami, Operation::Inv) => {
            nakagami_inv_with(&a[0], &a[1], &a[2], options)?.into()
        }
        (Distribution::Nakagami, Operation::Rnd) => {
            nakagami_rnd(&a[0], &a[1], &a[n..], rng)?.into()
        }

        (Distribution::BirnbaumSaunders, Operation::Pdf) => {
            bbs_pdf(&a[0], &a[1], &a[2], &a[3])?.into()
        }
        (Distribution::BirnbaumSaunders, Operation::Cdf) => {
            bbs_cdf(&a[0], &a[1], &a[2], &a[3])?.into()
        }
        (Distribution::BirnbaumSaunders, Operation::Inv) => {
            bbs_inv(&a[0], &a[1], &a[2], &a[3])?.into()
        }
        (Distribution::BirnbaumSaunders, Operation::Rnd) => {
            bbs_rnd(&a[0], &a[1], &a[2], &a[n..], rng)?.into()
        }

        (Distribution::StdNormal, Operation::Pdf) => std_normal_pdf(&a[0])?.into(),
        (Distribution::StdNormal, Operation::Cdf) => std_normal_cdf(&a[0])?.into(),
        (Distribution::StdNormal, Operation::Inv) => std_normal_inv(&a[0])?.into(),
        (Distribution::StdNormal, Operation::Rnd) => std_normal_rnd(&a[n..], rng)?.into(),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn s(v: f64) -> Tensor {
        Tensor::scalar(v)
    }

    #[test]
    fn too_few_arguments_fail_for_every_function() {
        let mut rng = StdRng::seed_from_u64(0);
        for d in Distribution::ALL {
            for op in Operation::ALL {
                let f = DistFn::new(d, op);
                if f.min_args() == 0 {
                    continue;
                }
                let args = vec![s(0.5); f.min_args() - 1];
                let err = call(d, op, &args, &mut rng).unwrap_err();
                assert!(matches!(err, KernelError::ArgumentCount(_)), "{f}: {err}");
            }
        }
    }

    #[test]
    fn too_many_arguments_fail_for_fixed_arity() {
        let mut rng = StdRng::seed_from_u64(0);
        let args = vec![s(0.5); 4];
        let err = call(Distribution::Gamma, Operation::Cdf, &args, &mut rng).unwrap_err();
        assert_eq!(
            err,
            KernelError::ArgumentCount("gamcdf => expected 3 argument(s), got 4".into())
        );
    }

    #[test]
    fn routes_to_typed_kernels() {
        let mut rng = StdRng::seed_from_u64(0);
        let out = call_by_name("gamcdf", &[s(2.0), s(3.0), s(5.0)], &mut rng).unwrap();
        assert!(out.warning.is_none());
        assert!((out.values.get(0) - 0.0079263318672538348982).abs() < 1e-15);

        let out = call_by_name("betainv", &[s(0.5), s(2.0), s(3.0)], &mut rng).unwrap();
        assert!((out.values.get(0) - 0.38572756813238954828).abs() < 1e-13);

        let out = call_by_name("stdnormal_pdf", &[s(0.0)], &mut rng).unwrap();
        assert!((out.values.get(0) - 0.3989422804014327).abs() < 1e-16);
    }

    #[test]
    fn generator_size_arguments_follow_parameters() {
        let mut rng = StdRng::seed_from_u64(0);
        let args = [s(0.0), s(1.0), s(1.0), s(2.0), s(2.0)];
        let out = call(Distribution::BirnbaumSaunders, Operation::Rnd, &args, &mut rng).unwrap();
        assert_eq!(out.values.dims(), &[2, 2]);

        let out = call(Distribution::StdNormal, Operation::Rnd, &[], &mut rng).unwrap();
        assert!(out.values.is_scalar());
    }

    #[test]
    fn unknown_names_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            call_by_name("weibpdf", &[s(1.0)], &mut rng),
            Err(KernelError::InvalidArguments(_))
        ));
    }
}
