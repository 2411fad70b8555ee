//! General exponentiation as a Maclaurin series over a precomputed logarithm.
//!
//! ```text
//! x^y = exp(y·ln x) = 1 + (y·ln x)/1! + (y·ln x)²/2! + ...
//! ```
//!
//! The logarithm comes from either [`taylor_log`] or [`cfrac_log`]; the two
//! public entry points differ only in which routine feeds the series.
//! Dispatch is an explicit function parameter — there are exactly two
//! instances and no extensibility requirement, so a trait would be noise.

use crate::cfrac::cfrac_log;
use crate::taylor::taylor_log;

/// Approximate `x^y` with `n` terms, using the Taylor-series logarithm.
#[must_use]
pub fn taylor_pow(x: f64, y: f64, n: u32) -> f64 {
    exp_series(taylor_log, x, y, n)
}

/// Approximate `x^y` with `n` terms, using the continued-fraction logarithm.
#[must_use]
pub fn taylorcf_pow(x: f64, y: f64, n: u32) -> f64 {
    exp_series(cfrac_log, x, y, n)
}

/// Maclaurin series for `exp(y·ln x)` over the given logarithm routine.
///
/// Only positive bases are supported: with a general real exponent, `x <= 0`
/// has no real-valued logarithm to build on. An infinite logarithm is
/// propagated directly — the power itself is infinite (or zero) in the
/// limit. The numerator powers and the factorial are all carried
/// incrementally; a term that stops being finite truncates the sum.
fn exp_series(log_fn: fn(f64, u32) -> f64, x: f64, y: f64, n: u32) -> f64 {
    if x <= 0.0 {
        return f64::NAN;
    }

    let ln_x = log_fn(x, n);
    if ln_x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if ln_x.is_infinite() {
        return ln_x;
    }

    let mut sum = 1.0;
    let mut pow_y = 1.0;
    let mut pow_ln = 1.0;
    let mut factorial = 1.0;
    for i in 1..=n {
        pow_y *= y;
        pow_ln *= ln_x;
        factorial *= f64::from(i);
        let term = pow_y * pow_ln / factorial;
        if !term.is_finite() {
            return sum;
        }
        sum += term;
    }
    sum
}
