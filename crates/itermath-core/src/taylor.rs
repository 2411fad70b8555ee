//! Taylor-series approximation of the natural logarithm.
//!
//! Two substitutions cover the domain:
//!
//! ```text
//! x in (0, 1):   u = 1 - x        ln(x) = -(u + u²/2 + u³/3 + ...)
//! x in (1, ∞):   u = (x - 1)/x    ln(x) =   u + u²/2 + u³/3 + ...
//! ```
//!
//! Both substitutions keep `u` inside `[0, 1)`, so the running power shrinks
//! from term to term. The power is carried incrementally (`power *= u`)
//! rather than recomputed from scratch each iteration; that is cheaper and it
//! fixes where rounding and the overflow guard trigger, which the fixed-count
//! contract depends on.

use crate::special::log_special_value;

/// Approximate `ln(x)` with `n` series terms.
///
/// Domain-boundary inputs resolve exactly before any iteration; see
/// [`log_special_value`]. If a term stops being finite the sum accumulated so
/// far is returned, truncating the series instead of contaminating an
/// otherwise finite partial result.
#[must_use]
pub fn taylor_log(x: f64, n: u32) -> f64 {
    if let Some(exact) = log_special_value(x) {
        return exact;
    }

    let mut sum = 0.0;
    if x < 1.0 {
        let u = 1.0 - x;
        let mut power = 1.0;
        for i in 1..=n {
            power *= u;
            let term = power / f64::from(i);
            if !term.is_finite() {
                return sum;
            }
            sum -= term;
        }
    } else {
        let u = (x - 1.0) / x;
        let mut power = 1.0;
        for i in 1..=n {
            power *= u;
            let term = power / f64::from(i);
            if !term.is_finite() {
                return sum;
            }
            sum += term;
        }
    }
    sum
}
