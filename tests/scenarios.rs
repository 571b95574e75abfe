// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// End-to-end behaviour of the public surface: the documented scenarios,
// structural errors, precision propagation and registry routing.

mod util;

#[cfg(feature = "probability_distributions")]
mod scenario_tests {
    use super::util::{assert_close, assert_rel_close, s};
    use dist_kernels::prelude::*;
    use num_complex::Complex;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn uniform_beta_density() {
        let x = Tensor::row(&[-0.5, 0.0, 0.25, 0.5, 1.0, 1.5]);
        let got = beta_pdf(&x, &s(1.0), &s(1.0)).unwrap().to_f64_vec();
        assert_eq!(got, vec![0.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
        let nan_params = beta_pdf(&s(0.5), &s(1.0), &s(-1.0)).unwrap();
        assert!(nan_params.get(0).is_nan());
    }

    #[test]
    fn infinite_density_at_origin() {
        assert_eq!(beta_pdf(&s(0.0), &s(0.5), &s(2.0)).unwrap().get(0), f64::INFINITY);
        assert_eq!(gamma_pdf(&s(0.0), &s(0.5), &s(2.0)).unwrap().get(0), f64::INFINITY);
        assert_eq!(nakagami_pdf(&s(0.0), &s(0.25), &s(2.0)).unwrap().get(0), f64::INFINITY);
    }

    #[test]
    fn gamma_quantile_deep_tail() {
        let q = gamma_inv(&s(1e-20), &s(3.0), &s(5.0)).unwrap();
        assert!(q.converged());
        assert_rel_close(q.values.get(0), 1.9574340121618161e-6, 1000.0 * f64::EPSILON);
    }

    #[test]
    fn bbs_generator_two_by_two() {
        let mut rng = StdRng::seed_from_u64(20);
        let size = [Tensor::row(&[2.0, 2.0])];
        let r = bbs_rnd(&s(0.0), &s(1.0), &s(1.0), &size, &mut rng).unwrap();
        assert_eq!(r.dims(), &[2, 2]);
        assert!(r.to_f64_vec().iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn too_few_arguments() {
        let mut rng = StdRng::seed_from_u64(0);
        for name in ["betapdf", "gamcdf", "nakainv", "bbsrnd", "stdnormal_pdf"] {
            let f: DistFn = name.parse().unwrap();
            let args = vec![s(0.5); f.min_args() - 1];
            match call_by_name(name, &args, &mut rng) {
                Err(KernelError::ArgumentCount(msg)) => assert!(msg.starts_with(name), "{msg}"),
                other => panic!("{name}: expected ArgumentCount, got {other:?}"),
            }
        }
    }

    #[test]
    fn complex_arguments_are_rejected() {
        let z = Tensor::complex([1], &[Complex::new(0.5, 0.1)]).unwrap();
        assert!(matches!(beta_cdf(&z, &s(1.0), &s(1.0)), Err(KernelError::ComplexInput(_))));
        assert!(matches!(gamma_inv(&s(0.5), &z, &s(1.0)), Err(KernelError::ComplexInput(_))));
        assert!(matches!(std_normal_inv(&z), Err(KernelError::ComplexInput(_))));
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            std_normal_rnd(&[z.clone()], &mut rng),
            Err(KernelError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn shape_rules() {
        let x = Tensor::from_slice([2, 3], &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap();
        let a = Tensor::from_slice([2, 3], &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0]).unwrap();
        let out = beta_cdf(&x, &a, &s(2.0)).unwrap();
        assert_eq!(out.dims(), &[2, 3]);
        // scalar x against array parameters takes the parameter shape
        let out = gamma_pdf(&s(1.0), &a, &s(2.0)).unwrap();
        assert_eq!(out.dims(), &[2, 3]);

        let b = Tensor::row(&[1.0, 2.0, 3.0]);
        assert!(matches!(beta_cdf(&x, &b, &s(2.0)), Err(KernelError::ShapeMismatch(_))));
        assert!(matches!(beta_cdf(&b, &x, &s(2.0)), Err(KernelError::ShapeMismatch(_))));
    }

    #[test]
    fn elementwise_parameters() {
        let x = Tensor::row(&[2.0, 2.0]);
        let a = Tensor::row(&[3.0, 1.0]);
        let got = gamma_cdf(&x, &a, &s(5.0)).unwrap();
        assert_close(got.get(0), 0.0079263318672538348982, 1e-15);
        assert_close(got.get(1), -(-0.4_f64).exp_m1(), 1e-15);
    }

    #[test]
    fn size_requests() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = Tensor::from_slice([2, 2], &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(gamma_rnd(&a, &s(1.0), &[s(2.0)], &mut rng).unwrap().dims(), &[2, 2]);
        assert!(matches!(
            gamma_rnd(&a, &s(1.0), &[s(3.0)], &mut rng),
            Err(KernelError::ShapeMismatch(_))
        ));
        for bad in [-1.0, 1.5, f64::NAN] {
            assert!(matches!(
                beta_rnd(&s(1.0), &s(1.0), &[s(bad)], &mut rng),
                Err(KernelError::InvalidDimensions(_))
            ));
        }
        let out = nakagami_rnd(&s(1.0), &s(1.0), &[s(2.0), s(1.0), s(3.0)], &mut rng).unwrap();
        assert_eq!(out.dims(), &[2, 1, 3]);
    }

    #[test]
    fn precision_follows_inputs() {
        let x32 = Tensor::row(&[0.5_f32, 1.5]);
        let single = gamma_cdf(&x32, &Tensor::scalar(2.0_f32), &Tensor::scalar(1.0_f32)).unwrap();
        assert_eq!(single.precision(), Precision::Single);
        let mixed = gamma_cdf(&x32, &Tensor::scalar(2.0_f32), &s(1.0)).unwrap();
        assert_eq!(mixed.precision(), Precision::Double);
        assert_close(single.get(1), mixed.get(1), 1e-7);

        let (p, a, b) = (Tensor::scalar(0.5_f32), Tensor::scalar(2.0_f32), Tensor::scalar(3.0_f32));
        let q = beta_inv(&p, &a, &b).unwrap();
        assert_eq!(q.values.precision(), Precision::Single);
        assert!(q.converged());
        assert_close(q.values.get(0), 0.38572756813238954828, 1e-6);
    }

    #[test]
    fn convergence_warning_is_attached_not_raised() {
        // f32 rounding keeps every residual above a zero tolerance
        let opts = InverseOptions { rel_tol: Some(0.0), verify_only: true };
        let p = Tensor::row(&[0.1_f32, 0.2, 0.3]);
        let (a, b) = (Tensor::scalar(2.0_f32), Tensor::scalar(1.0_f32));
        let q = gamma_inv_with(&p, &a, &b, &opts).unwrap();
        assert_eq!(q.values.len(), 3);
        assert!(q.values.to_f64_vec().iter().all(|v| v.is_finite()));
        let w = q.warning.unwrap();
        assert_eq!(w.function, "gamma_inv");
        assert_eq!(w.tolerance, 0.0);
        assert_eq!(w.unconverged, 3);
    }

    #[test]
    fn registry_matches_typed_calls() {
        let mut rng = StdRng::seed_from_u64(0);
        let x = Tensor::row(&[0.2, 0.9, 3.0]);
        let direct = nakagami_cdf(&x, &s(1.5), &s(2.0)).unwrap();
        let routed = call(
            Distribution::Nakagami,
            Operation::Cdf,
            &[x.clone(), s(1.5), s(2.0)],
            &mut rng,
        )
        .unwrap();
        assert_eq!(routed.values, direct);
        assert!(routed.warning.is_none());

        let q = call_by_name("gaminv", &[s(1e-20), s(3.0), s(5.0)], &mut rng).unwrap();
        assert_rel_close(q.values.get(0), 1.9574340121618161e-6, 1000.0 * f64::EPSILON);
    }

    #[test]
    fn generators_are_reproducible() {
        let draw = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let a = beta_rnd(&s(0.5), &s(0.5), &[s(3.0)], &mut rng).unwrap();
            let b = std_normal_rnd(&[s(2.0), s(2.0)], &mut rng).unwrap();
            (a, b)
        };
        assert_eq!(draw(42), draw(42));
        assert_ne!(draw(42).1, draw(43).1);
    }
}
