// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// Reference values computed with mpmath 1.3.0 at 50 significant digits.
// Distribution: Nakagami
//
// Each test compares kernel output against mpmath with a per-test tolerance,
// relative above 1 and absolute below. NaN/Inf equality is handled by
// util::assert_slice_close.

mod util;

#[cfg(feature = "probability_distributions")]
mod nakagami_reference_tests {
    use super::util::assert_slice_close;
    use dist_kernels::tensor::Tensor;
    use dist_kernels::kernels::scientific::distributions::univariate::nakagami::{
        nakagami_cdf, nakagami_inv, nakagami_pdf,
    };

    #[test]
    fn nakagami_pdf_half_normal() {
        let x = Tensor::row(&[0.1, 0.5, 1.0, 1.5, 2.0, 3.0]);
        let expect = [
            0.7939050949540235,
            0.7041306535285989,
            0.4839414490382867,
            0.25903519133178343,
            0.1079819330263761,
            0.008863696823876015,
        ];
        let got = nakagami_pdf(&x, &Tensor::scalar(0.5), &Tensor::scalar(1.0)).unwrap();
        assert_slice_close(&got.to_f64_vec(), &expect, 1e-13);
    }

    #[test]
    fn nakagami_cdf_half_normal() {
        let x = Tensor::row(&[0.1, 0.5, 1.0, 1.5, 2.0, 3.0]);
        let expect = [
            0.07965567455405796,
            0.3829249225480262,
            0.6826894921370859,
            0.8663855974622838,
            0.9544997361036416,
            0.9973002039367398,
        ];
        let got = nakagami_cdf(&x, &Tensor::scalar(0.5), &Tensor::scalar(1.0)).unwrap();
        assert_slice_close(&got.to_f64_vec(), &expect, 1e-13);
    }

    #[test]
    fn nakagami_inv_half_normal() {
        let x = Tensor::row(&[1e-10, 0.01, 0.25, 0.5, 0.75, 0.99, 0.9999999999]);
        let expect = [
            1.2533141373155003e-10,
            0.012533469508069264,
            0.31863936396437514,
            0.6744897501960817,
            1.150349380376008,
            2.5758293035489004,
            6.466951074732419,
        ];
        let q = nakagami_inv(&x, &Tensor::scalar(0.5), &Tensor::scalar(1.0)).unwrap();
        assert!(q.converged(), "{:?}", q.warning);
        assert_slice_close(&q.values.to_f64_vec(), &expect, 1e-11);
    }

    #[test]
    fn nakagami_pdf_rayleigh() {
        let x = Tensor::row(&[0.1, 0.5, 1.0, 1.5, 2.0, 3.0]);
        let expect = [
            0.09950124791926823,
            0.4412484512922977,
            0.6065306597126334,
            0.4869787010375246,
            0.2706705664732254,
            0.033326989614726917,
        ];
        let got = nakagami_pdf(&x, &Tensor::scalar(1.0), &Tensor::scalar(2.0)).unwrap();
        assert_slice_close(&got.to_f64_vec(), &expect, 1e-13);
    }

    #[test]
    fn nakagami_cdf_rayleigh() {
        let x = Tensor::row(&[0.1, 0.5, 1.0, 1.5, 2.0, 3.0]);
        let expect = [
            0.004987520807317687,
            0.1175030974154046,
            0.3934693402873666,
            0.6753475326416503,
            0.8646647167633873,
            0.9888910034617577,
        ];
        let got = nakagami_cdf(&x, &Tensor::scalar(1.0), &Tensor::scalar(2.0)).unwrap();
        assert_slice_close(&got.to_f64_vec(), &expect, 1e-13);
    }

    #[test]
    fn nakagami_inv_rayleigh() {
        let x = Tensor::row(&[1e-10, 0.01, 0.25, 0.5, 0.75, 0.99, 0.9999999999]);
        let expect = [
            1.4142135624084504e-05,
            0.14177683769573535,
            0.7585276164409321,
            1.1774100225154747,
            1.6651092223153956,
            3.0348542587702925,
            6.78614041222256,
        ];
        let q = nakagami_inv(&x, &Tensor::scalar(1.0), &Tensor::scalar(2.0)).unwrap();
        assert!(q.converged(), "{:?}", q.warning);
        assert_slice_close(&q.values.to_f64_vec(), &expect, 1e-11);
    }

    #[test]
    fn nakagami_pdf_m2_w1() {
        let x = Tensor::row(&[0.1, 0.5, 1.0, 1.5, 2.0, 3.0]);
        let expect = [
            0.007841589386454044,
            0.6065306597126334,
            1.0826822658929016,
            0.2999429065325423,
            0.02146960818576076,
            3.2896756248579276e-06,
        ];
        let got = nakagami_pdf(&x, &Tensor::scalar(2.0), &Tensor::scalar(1.0)).unwrap();
        assert_slice_close(&got.to_f64_vec(), &expect, 1e-13);
    }

    #[test]
    fn nakagami_cdf_m2_w1() {
        let x = Tensor::row(&[0.1, 0.5, 1.0, 1.5, 2.0, 3.0]);
        let expect = [
            0.00019735322710959179,
            0.09020401043104986,
            0.5939941502901619,
            0.9389005190396673,
            0.9969808363488774,
            0.9999997106303848,
        ];
        let got = nakagami_cdf(&x, &Tensor::scalar(2.0), &Tensor::scalar(1.0)).unwrap();
        assert_slice_close(&got.to_f64_vec(), &expect, 1e-13);
    }

    #[test]
    fn nakagami_inv_m2_w1() {
        let x = Tensor::row(&[1e-10, 0.01, 0.25, 0.5, 0.75, 0.99, 0.9999999999]);
        let expect = [
            0.002659154216177556,
            0.2725387497708041,
            0.6932816033599828,
            0.9160641325847936,
            1.1603091245202064,
            1.8218605967518222,
            3.628634834179966,
        ];
        let q = nakagami_inv(&x, &Tensor::scalar(2.0), &Tensor::scalar(1.0)).unwrap();
        assert!(q.converged(), "{:?}", q.warning);
        assert_slice_close(&q.values.to_f64_vec(), &expect, 1e-11);
    }

    #[test]
    fn nakagami_pdf_m4_5_w3() {
        let x = Tensor::row(&[0.1, 0.5, 1.0, 1.5, 2.0, 3.0]);
        let expect = [
            1.050224127553701e-08,
            0.002862173870557889,
            0.23787822312581547,
            0.934937554148791,
            0.6765026194503462,
            0.009589389094607258,
        ];
        let got = nakagami_pdf(&x, &Tensor::scalar(4.5), &Tensor::scalar(3.0)).unwrap();
        assert_slice_close(&got.to_f64_vec(), &expect, 1e-13);
    }

    #[test]
    fn nakagami_cdf_m4_5_w3() {
        let x = Tensor::row(&[0.1, 0.5, 1.0, 1.5, 2.0, 3.0]);
        let expect = [
            1.1701055535771925e-10,
            0.00017050941217671176,
            0.035705027314910875,
            0.33687035659257986,
            0.7866906949165835,
            0.9986012323202036,
        ];
        let got = nakagami_cdf(&x, &Tensor::scalar(4.5), &Tensor::scalar(3.0)).unwrap();
        assert_slice_close(&got.to_f64_vec(), &expect, 1e-13);
    }

    #[test]
    fn nakagami_inv_m4_5_w3() {
        let x = Tensor::row(&[1e-10, 0.01, 0.25, 0.5, 0.75, 0.99, 0.9999999999]);
        let expect = [
            0.09826504947881412,
            0.8342463137208993,
            1.4022393855270663,
            1.6676163319993556,
            1.9483969000582992,
            2.6873775527740746,
            4.683936847444537,
        ];
        let q = nakagami_inv(&x, &Tensor::scalar(4.5), &Tensor::scalar(3.0)).unwrap();
        assert!(q.converged(), "{:?}", q.warning);
        assert_slice_close(&q.values.to_f64_vec(), &expect, 1e-11);
    }

}
