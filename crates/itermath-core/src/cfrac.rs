//! Continued-fraction approximation of the natural logarithm.
//!
//! With `u = (x - 1)/(x + 1)`:
//!
//! ```text
//! ln(x) = 2u / (1 - u²/(3 - 4u²/(5 - 9u²/(7 - ...))))
//! ```
//!
//! The fraction is evaluated by backward recurrence, starting from the
//! innermost denominator and unwinding outward. Forward evaluation is not an
//! option: each level of a continued fraction needs the fully evaluated level
//! beneath it.

use crate::special::log_special_value;

/// Approximate `ln(x)` with a depth-`n` continued fraction.
///
/// Domain-boundary inputs (including the exact `x == 1` shortcut) resolve
/// before any iteration; see [`log_special_value`].
#[must_use]
pub fn cfrac_log(x: f64, n: u32) -> f64 {
    if let Some(exact) = log_special_value(x) {
        return exact;
    }
    descend((x - 1.0) / (x + 1.0), n)
}

/// Backward recurrence for the fraction at depth `n`.
///
/// Seeds the innermost denominator with 1 and computes
/// `frac = (2i - 1) - i²·u²/frac` for `i = n, n-1, .., 1`. If an intermediate
/// denominator stops being finite the descent is cut short and the value on
/// hand is used, mirroring the series overflow guard.
pub(crate) fn descend(u: f64, n: u32) -> f64 {
    let u_sq = u * u;
    let mut frac = 1.0;
    let mut i = n;
    while i > 0 {
        let fi = f64::from(i);
        frac = (2.0 * fi - 1.0) - fi * fi * u_sq / frac;
        if !frac.is_finite() {
            break;
        }
        i -= 1;
    }
    2.0 * u / frac
}
