// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scalar Distribution Utilities Module** - *Special Functions for the Distribution Kernels*
//!
//! Scalar special functions that the per-class formulas of every distribution are
//! built from: lnΓ, the regularised incomplete gamma and beta functions with their
//! inverses, and the standard normal Φ, φ and Φ⁻¹.
//!
//! The inverse primitives are *initial estimates* for the root-finding layer. They
//! iterate to working precision where the answer is representable, and the layer
//! verifies every result against the forward relation before accepting it.

use crate::kernels::scientific::{
    distributions::shared::constants::*,
    erf::{erfc, erfc_inv},
};

/// Convergence threshold for the series and continued fractions below.
const SERIES_EPS: f64 = f64::EPSILON;

/// Iteration cap for the series and continued fractions. Convergence takes
/// O(√a) terms, so this covers shapes into the millions.
const SERIES_MAX_ITERS: usize = 10_000;

/// Floor used by the modified Lentz algorithm to avoid division by zero.
const LENTZ_TINY: f64 = 1e-300;

/// Iteration cap for the Newton loops inside the inverse primitives.
const INVERSE_MAX_ITERS: usize = 200;

/// Largest ulp walk when settling an inverse on its nearest representable root.
const NEAREST_ULP_STEPS: usize = 16;

/// Natural log of the absolute value of the Gamma function, ln|Γ(x)|.
///
/// * Lanczos approximation (g = 7, n = 9) for x ≥ 0.5.
/// * Reflection formula for x < 0.5 using `ln(|sin(πx)|)`.
/// * Poles at non-positive integers return **+∞**.
/// * Propagates NaN.
#[inline(always)]
pub fn ln_gamma(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x.is_infinite() && x.is_sign_positive() {
        return f64::INFINITY;
    }
    // Γ(x) has simple poles at 0, −1, −2, …
    if x <= 0.0 && (x.fract().abs() < 1e-14) {
        return f64::INFINITY;
    }
    if x < 0.5 {
        return LN_PI - (std::f64::consts::PI * x).sin().abs().ln() - ln_gamma(1.0 - x);
    }

    let z = x - 1.0;
    let mut a = COF[0];
    for (i, &c) in COF.iter().enumerate().skip(1) {
        a += c / (z + i as f64);
    }
    let t = z + 7.5; // g + ½ with g = 7
    HALF_LOG_TWO_PI + (z + 0.5) * t.ln() - t + a.ln()
}

/// ln B(a, b) = lnΓ(a) + lnΓ(b) − lnΓ(a + b).
#[inline(always)]
pub fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Density of the unit-scale gamma distribution, x^(a−1) e^(−x) / Γ(a), for x > 0.
#[inline(always)]
pub fn gamma_density_unit(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    ((a - 1.0) * x.ln() - x - ln_gamma(a)).exp()
}

/// e^(−x) x^a / Γ(a), the common factor of the series and continued fraction.
#[inline(always)]
fn gamma_prefactor(a: f64, x: f64) -> f64 {
    (-x + a * x.ln() - ln_gamma(a)).exp()
}

/// P(a, x) by its power series. Accurate for x < a + 1.
fn lower_gamma_series(a: f64, x: f64) -> f64 {
    let mut ap = a;
    let mut sum = 1.0 / a;
    let mut del = sum;
    for _ in 0..SERIES_MAX_ITERS {
        ap += 1.0;
        del *= x / ap;
        sum += del;
        if del.abs() < sum.abs() * SERIES_EPS {
            break;
        }
    }
    gamma_prefactor(a, x) * sum
}

/// Q(a, x) by Lentz's continued fraction. Accurate for x ≥ a + 1.
fn upper_gamma_fraction(a: f64, x: f64) -> f64 {
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / LENTZ_TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..SERIES_MAX_ITERS {
        let an = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < LENTZ_TINY {
            d = LENTZ_TINY;
        }
        c = b + an / c;
        if c.abs() < LENTZ_TINY {
            c = LENTZ_TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < SERIES_EPS {
            break;
        }
    }
    gamma_prefactor(a, x) * h
}

/// Regularised lower incomplete gamma P(a, x).
///
/// Edge cases:
/// * any NaN argument     → NaN
/// * `x < 0` or `a < 0`   → NaN
/// * `a == 0` & x ≥ 0     → 1.0
/// * `x == 0` & a  > 0    → 0.0
/// * `x == +∞`            → 1.0
#[inline(always)]
pub fn reg_lower_gamma(a: f64, x: f64) -> f64 {
    if a.is_nan() || x.is_nan() || a.is_infinite() {
        return f64::NAN;
    }
    if x < 0.0 || a < 0.0 {
        return f64::NAN;
    }
    if a == 0.0 {
        return 1.0;
    }
    if x == 0.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return 1.0;
    }
    if x < a + 1.0 {
        lower_gamma_series(a, x)
    } else {
        1.0 - upper_gamma_fraction(a, x)
    }
}

/// Regularised upper incomplete gamma Q(a, x) = 1 − P(a, x), computed without
/// cancellation in the right tail.
#[inline(always)]
pub fn reg_upper_gamma(a: f64, x: f64) -> f64 {
    if a.is_nan() || x.is_nan() || a.is_infinite() {
        return f64::NAN;
    }
    if x < 0.0 || a < 0.0 {
        return f64::NAN;
    }
    if a == 0.0 {
        return 0.0;
    }
    if x == 0.0 {
        return 1.0;
    }
    if x.is_infinite() {
        return 0.0;
    }
    if x < a + 1.0 {
        1.0 - lower_gamma_series(a, x)
    } else {
        upper_gamma_fraction(a, x)
    }
}

/// Inverse of the regularised lower incomplete gamma:
/// finds `x` such that P(a, x) = p (a > 0, 0 ≤ p ≤ 1).
///
/// Left-tail targets are solved on ln P, right-tail targets on ln Q, so tiny
/// probabilities on either side keep full relative accuracy. Returns `0.0` when
/// the quantile underflows.
#[inline(always)]
pub fn inv_reg_lower_gamma(a: f64, p: f64) -> f64 {
    if !(a.is_finite() && p.is_finite()) || a <= 0.0 || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return 0.0;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    if p > 0.5 {
        return inv_reg_upper_gamma(a, 1.0 - p);
    }
    let x = lower_gamma_seed(a, p);
    if !(x > 0.0) || x.is_infinite() {
        return 0.0;
    }
    newton_ln_gamma(a, p.ln(), x, false)
}

/// Inverse of the regularised upper incomplete gamma:
/// finds `x` such that Q(a, x) = q (a > 0, 0 ≤ q ≤ 1).
#[inline(always)]
pub fn inv_reg_upper_gamma(a: f64, q: f64) -> f64 {
    if !(a.is_finite() && q.is_finite()) || a <= 0.0 || !(0.0..=1.0).contains(&q) {
        return f64::NAN;
    }
    if q == 0.0 {
        return f64::INFINITY;
    }
    if q == 1.0 {
        return 0.0;
    }
    if q > 0.5 {
        return inv_reg_lower_gamma(a, 1.0 - q);
    }
    let p = 1.0 - q;
    let mut x = lower_gamma_seed(a, p);
    if a < 1.0 || !(x > 0.0) || x.is_infinite() {
        // Q(a, x) ~ x^(a−1) e^(−x) / Γ(a) far to the right.
        let lq = -q.ln();
        let tail = lq + (a - 1.0) * lq.max(1.0).ln() - ln_gamma(a);
        if tail > x || !(x > 0.0) || x.is_infinite() {
            x = tail;
        }
    }
    if !(x > 0.0) || x.is_infinite() {
        x = a.max(1.0);
    }
    newton_ln_gamma(a, q.ln(), x, true)
}

/// Initial estimate for P⁻¹(a, p).
///
/// Wilson–Hilferty for a ≥ 1 while its cube root stays positive, otherwise the
/// small-x asymptote P(a, x) ≈ x^a / Γ(a + 1) evaluated in log space.
#[inline(always)]
fn lower_gamma_seed(a: f64, p: f64) -> f64 {
    if a >= 1.0 {
        let z = std_normal_inv(p);
        let t = 1.0 / (9.0 * a);
        let w = 1.0 - t + z * t.sqrt();
        if w > 0.0 {
            return a * w * w * w;
        }
    }
    ((p.ln() + ln_gamma(a + 1.0)) / a).exp()
}

/// Newton iteration on g(x) = ln F(x) − target where F is P (or Q when `upper`).
fn newton_ln_gamma(a: f64, target: f64, mut x: f64, upper: bool) -> f64 {
    for _ in 0..INVERSE_MAX_ITERS {
        let f = if upper {
            reg_upper_gamma(a, x)
        } else {
            reg_lower_gamma(a, x)
        };
        if f <= 0.0 {
            // Underflowed: step back towards the bulk.
            x = if upper { 0.5 * x } else { 2.0 * x };
            continue;
        }
        let d = gamma_density_unit(a, x);
        if !(d > 0.0) || d.is_infinite() {
            break;
        }
        let g = f.ln() - target;
        let slope = if upper { -d / f } else { d / f };
        let mut x_new = x - g / slope;
        if x_new <= 0.0 {
            x_new = 0.1 * x;
        }
        if (x_new - x).abs() <= 4.0 * f64::EPSILON * x {
            return x_new;
        }
        x = x_new;
    }
    x
}

/// Regularised incomplete beta Iₓ(a, b)
///
///   * `a == 0`  →  1.0  (mass entirely to the right of x)
///   * `b == 0`  →  0.0  (mass entirely at the left of x)
///   * non-finite inputs propagate `NaN`
///   * x ≤ 0 → 0 ··· x ≥ 1 → 1
#[inline(always)]
pub fn incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if !(a.is_finite() && b.is_finite() && x.is_finite()) {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    if a == 0.0 {
        return 1.0;
    }
    if b == 0.0 {
        return 0.0;
    }
    // I_x(a,b) = 1 - I_{1-x}(b,a) past the mode of the integrand
    if x > (a + 1.0) / (a + b + 2.0) {
        return 1.0 - incomplete_beta_fraction(b, a, 1.0 - x);
    }
    incomplete_beta_fraction(a, b, x)
}

/// Complement 1 − Iₓ(a, b), computed without cancellation in the right tail.
#[inline(always)]
pub fn incomplete_beta_complement(a: f64, b: f64, x: f64) -> f64 {
    if !(a.is_finite() && b.is_finite() && x.is_finite()) {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 1.0;
    }
    if x >= 1.0 {
        return 0.0;
    }
    if a == 0.0 {
        return 0.0;
    }
    if b == 0.0 {
        return 1.0;
    }
    if x > (a + 1.0) / (a + b + 2.0) {
        return incomplete_beta_fraction(b, a, 1.0 - x);
    }
    1.0 - incomplete_beta_fraction(a, b, x)
}

/// Lentz evaluation of the incomplete beta continued fraction times its front factor.
fn incomplete_beta_fraction(a: f64, b: f64, x: f64) -> f64 {
    // x^a (1-x)^b / (a B(a,b))
    let front = (a * x.ln() + b * (-x).ln_1p() - ln_beta(a, b)).exp() / a;

    let mut c = 1.0;
    let mut d = 1.0 - (a + b) * x / (a + 1.0);
    if d.abs() < LENTZ_TINY {
        d = LENTZ_TINY;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=SERIES_MAX_ITERS {
        let m = m as f64;
        let m2 = 2.0 * m;

        // even step
        let aa = m * (b - m) * x / ((a + m2 - 1.0) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < LENTZ_TINY {
            d = LENTZ_TINY;
        }
        c = 1.0 + aa / c;
        if c.abs() < LENTZ_TINY {
            c = LENTZ_TINY;
        }
        d = 1.0 / d;
        h *= d * c;

        // odd step
        let aa = -(a + m) * (a + b + m) * x / ((a + m2) * (a + m2 + 1.0));
        d = 1.0 + aa * d;
        if d.abs() < LENTZ_TINY {
            d = LENTZ_TINY;
        }
        c = 1.0 + aa / c;
        if c.abs() < LENTZ_TINY {
            c = LENTZ_TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < SERIES_EPS {
            break;
        }
    }
    front * h
}

/// Beta(a, b) density for 0 < x < 1.
#[inline(always)]
pub fn beta_density(a: f64, b: f64, x: f64) -> f64 {
    if !(x > 0.0 && x < 1.0) {
        return f64::NAN;
    }
    ((a - 1.0) * x.ln() + (b - 1.0) * (-x).ln_1p() - ln_beta(a, b)).exp()
}

/// Inverse regularised incomplete beta: finds `x` with Iₓ(a, b) = p.
///
/// * Any non-finite input, or p outside [0, 1] → NaN
/// * a == 0 → 1.0, b == 0 → 0.0
/// * Returns `0.0` when the quantile underflows
#[inline(always)]
pub fn incomplete_beta_inv(a: f64, b: f64, p: f64) -> f64 {
    if !(a.is_finite() && b.is_finite() && p.is_finite()) {
        return f64::NAN;
    }
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return 0.0;
    }
    if p == 1.0 {
        return 1.0;
    }
    if a == 0.0 {
        return 1.0;
    }
    if b == 0.0 {
        return 0.0;
    }

    let q = 1.0 - p;
    let lb = ln_beta(a, b);
    let pp = p.min(q);

    let mut x = if a > 1.0 && b > 1.0 && pp > 1e-4 {
        // Cornish-Fisher style seed for the bulk
        let t = (-2.0 * pp.ln()).sqrt();
        let mut xp = t - (2.30753 + 0.27061 * t) / (1.0 + (0.99229 + 0.04481 * t) * t);
        if p < 0.5 {
            xp = -xp;
        }
        let al = (xp * xp - 3.0) / 6.0;
        let h = 2.0 / (1.0 / (2.0 * a - 1.0) + 1.0 / (2.0 * b - 1.0));
        let w = xp * (al + h).sqrt() / h
            - (1.0 / (2.0 * b - 1.0) - 1.0 / (2.0 * a - 1.0)) * (al + 5.0 / 6.0 - 2.0 / (3.0 * h));
        a / (a + b * (2.0 * w).exp())
    } else {
        // Power-law tails: I ≈ x^a / (a B) at the left, 1 − I ≈ (1−x)^b / (b B) at the right.
        let left = ((p.ln() + a.ln() + lb) / a).exp();
        let right = 1.0 - ((q.ln() + b.ln() + lb) / b).exp();
        if p < 0.5 {
            if left == 0.0 {
                return 0.0;
            }
            left
        } else {
            right
        }
    };
    if !(x > 0.0 && x < 1.0) {
        x = a / (a + b);
    }

    // Safeguarded Newton on ln I (left) or ln(1 − I) (right), keeping a bracket.
    let upper = p > 0.5;
    let target = if upper { q.ln() } else { p.ln() };
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..INVERSE_MAX_ITERS {
        let f = if upper {
            incomplete_beta_complement(a, b, x)
        } else {
            incomplete_beta(a, b, x)
        };
        let g = if f > 0.0 { f.ln() - target } else { f64::NEG_INFINITY };
        // true quantile lies above x?
        let above = if upper { f > 0.0 && g > 0.0 } else { g < 0.0 };
        if above {
            lo = x;
        } else {
            hi = x;
        }

        let d = beta_density(a, b, x);
        let mut x_new = f64::NAN;
        if f > 0.0 && d > 0.0 && d.is_finite() {
            let slope = if upper { -d / f } else { d / f };
            x_new = x - g / slope;
        }
        if !(x_new > lo && x_new < hi) {
            x_new = if lo > 0.0 && hi < 0.5 {
                (lo * hi).sqrt()
            } else {
                0.5 * (lo + hi)
            };
        }
        if x_new <= 0.0 {
            return x_new;
        }
        // right-tail steps are measured against 1 − x
        let reach = if upper { 1.0 - x } else { x };
        if (x_new - x).abs() <= 4.0 * f64::EPSILON * reach {
            x = x_new;
            break;
        }
        x = x_new;
    }

    // Settle on the closest representable root, measured in the tail being inverted.
    let miss = |x: f64| {
        if upper {
            (incomplete_beta_complement(a, b, x) - q).abs()
        } else {
            (incomplete_beta(a, b, x) - p).abs()
        }
    };
    nearest_ulp(x, miss)
}

/// Walks `x` in (0, 1) one ulp at a time while `miss` keeps decreasing.
fn nearest_ulp(x: f64, miss: impl Fn(f64) -> f64) -> f64 {
    let mut best = x;
    let mut best_miss = miss(x);
    for dir in [1i64, -1] {
        for _ in 0..NEAREST_ULP_STEPS {
            let next = f64::from_bits((best.to_bits() as i64 + dir) as u64);
            if !(next > 0.0 && next < 1.0) {
                break;
            }
            let m = miss(next);
            if !(m < best_miss) {
                break;
            }
            best = next;
            best_miss = m;
        }
    }
    best
}

/// Standard normal density φ(z).
#[inline(always)]
pub fn std_normal_pdf(z: f64) -> f64 {
    (-0.5 * z * z).exp() / SQRT_2PI
}

/// Standard normal CDF Φ(z) = ½ erfc(−z/√2).
///
/// The complementary form keeps full relative accuracy in the left tail.
#[inline(always)]
pub fn std_normal_cdf(z: f64) -> f64 {
    if z < 0.0 {
        0.5 * erfc(-z / SQRT_2)
    } else {
        1.0 - 0.5 * erfc(z / SQRT_2)
    }
}

/// Acklam's rational approximation of Φ⁻¹(p) for p ∈ (0, 0.5].
#[inline(always)]
fn acklam_lower(p: f64) -> f64 {
    debug_assert!(p > 0.0 && p <= 0.5);
    if p > P_LOW {
        let r = p - 0.5;
        let s = r * r;
        let num = (((((A[0] * s + A[1]) * s + A[2]) * s + A[3]) * s + A[4]) * s + A[5]) * r;
        let den = ((((B[0] * s + B[1]) * s + B[2]) * s + B[3]) * s + B[4]) * s + 1.0;
        num / den
    } else {
        let r = (-2.0 * p.ln()).sqrt();
        let num = ((((C[0] * r + C[1]) * r + C[2]) * r + C[3]) * r + C[4]) * r + C[5];
        let den = (((D[0] * r + D[1]) * r + D[2]) * r + D[3]) * r + 1.0;
        num / den
    }
}

/// Inverse standard normal CDF Φ⁻¹(p).
///
/// Acklam initial approximation plus one Halley step; below machine epsilon the
/// tail switches to Φ⁻¹(p) = −√2 · erfc⁻¹(2p).
///
/// * `p = 0` → −∞, `p = 1` → +∞, `p = 0.5` → 0
/// * p outside [0, 1] or NaN → NaN
pub fn std_normal_inv(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    if p == 0.5 {
        return 0.0;
    }

    let (q, sign) = if p < 0.5 { (p, 1.0) } else { (1.0 - p, -1.0) };

    if q < f64::EPSILON * 0.5 {
        return sign * (-SQRT_2 * erfc_inv(2.0 * q));
    }

    // Halley: z -= u (1 + z u / 2), u = (Φ(z) − q) / φ(z)
    let mut z = acklam_lower(q);
    let u = (std_normal_cdf(z) - q) / std_normal_pdf(z);
    z -= u * (1.0 + 0.5 * z * u);

    sign * z
}
