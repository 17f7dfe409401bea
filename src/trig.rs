//! Closed-form trig approximations used for knob placement and wave paths.
//!
//! None of these call into libm. They are accurate to roughly 1e-3 over
//! the ranges the wheel and wave code feed them, which is far below a pixel
//! at widget sizes.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

const PI_SQUARED: f64 = PI * PI;
const THREE_HALVES_PI: f64 = 3.0 * FRAC_PI_2;
const PI_OVER_TEN: f64 = PI / 10.0;

/// Approximate cosine.
///
/// Uses Bhaskara I's rational form inside `[-π/2, π/2]` and a polynomial
/// anchored at `3π/2` for the rest of the turn. Any finite angle is accepted;
/// it is folded into `[0, 2π)` first since cosine is even and periodic.
#[inline]
pub fn cos_approx(angle: f64) -> f64 {
    let a = angle.abs().rem_euclid(TAU);

    if a > FRAC_PI_2 {
        let b = a - THREE_HALVES_PI;
        let warp = b * (b.abs() - PI);
        return warp * (-PI_OVER_TEN - warp.abs() * 0.036_931_72);
    }

    let a2 = a * a;
    (PI_SQUARED - 4.0 * a2) / (PI_SQUARED + a2)
}

/// Approximate sine.
///
/// Bhaskara I's sine formula covers `[0, π]`; the second half of the turn
/// mirrors it with `sin(x) = -sin(x - π)`.
#[inline]
pub fn sin_approx(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a <= PI {
        bhaskara_sin(a)
    } else {
        -bhaskara_sin(a - PI)
    }
}

#[inline]
fn bhaskara_sin(x: f64) -> f64 {
    let p = x * (PI - x);
    (16.0 * p) / (5.0 * PI_SQUARED - 4.0 * p)
}

/// Approximate arctangent.
///
/// The fast-atan polynomial is only good on `[-1, 1]`, so larger inputs go
/// through `atan(x) = ±π/2 - atan(1/x)`. The result is odd and monotone and
/// tends to `±π/2`.
#[inline]
pub fn atan_approx(x: f64) -> f64 {
    if x.abs() <= 1.0 {
        atan_unit(x)
    } else {
        FRAC_PI_2.copysign(x) - atan_unit(1.0 / x)
    }
}

#[inline]
fn atan_unit(x: f64) -> f64 {
    let ax = x.abs();
    FRAC_PI_4 * x - x * (ax - 1.0) * (0.2447 + 0.0663 * ax)
}
