#![allow(unused)]

use dist_kernels::tensor::Tensor;

/// NaN matches NaN, infinities must match in sign, finite values must agree
/// to `tol` relative above 1 and absolute below.
fn close(a: f64, e: f64, tol: f64) -> Result<(), String> {
    if e.is_nan() {
        return if a.is_nan() { Ok(()) } else { Err(format!("expected NaN, got {a}")) };
    }
    if e.is_infinite() {
        return if a == e { Ok(()) } else { Err(format!("expected {e}, got {a}")) };
    }
    let scale = 1.0_f64.max(e.abs());
    if (a - e).abs() <= tol * scale {
        Ok(())
    } else {
        Err(format!("got {a}, expect {e} (tol={tol})"))
    }
}

pub fn assert_close(a: f64, e: f64, tol: f64) {
    if let Err(msg) = close(a, e, tol) {
        panic!("mismatch: {msg}");
    }
}

/// Relative comparison regardless of magnitude, for tail values.
pub fn assert_rel_close(a: f64, e: f64, tol: f64) {
    assert!(
        ((a - e) / e).abs() <= tol,
        "mismatch: got {a}, expect {e} (rel tol={tol})"
    );
}

pub fn assert_slice_close(a: &[f64], e: &[f64], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        if let Err(msg) = close(ai, ei, tol) {
            panic!("idx {i}: {msg}");
        }
    }
}

pub fn assert_all_nan(t: &Tensor) {
    for (i, v) in t.to_f64_vec().into_iter().enumerate() {
        assert!(v.is_nan(), "idx {i}: expected NaN, got {v}");
    }
}

pub fn s(v: f64) -> Tensor {
    Tensor::scalar(v)
}
