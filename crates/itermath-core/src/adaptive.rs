//! Convergence-bounded variants of the logarithm and exponentiation.
//!
//! Instead of a caller-supplied iteration count, these refine until
//! successive approximations agree to within [`EPS`]. The logarithm runs the
//! Taylor recurrence and the continued fraction in lockstep and answers with
//! whichever settles first; the exponential walks its series one term at a
//! time.

use crate::cfrac;
use crate::special::log_special_value;

/// Absolute tolerance for successive-approximation convergence.
pub const EPS: f64 = 1e-8;

/// Hard ceiling on refinement steps.
///
/// The well-conditioned part of the domain settles within a few dozen steps.
/// An input that has not converged by here (e.g. `x` within a few ULP of
/// `f64::MAX`) gets the best value accumulated so far.
const MAX_ADAPTIVE_STEPS: u32 = 4096;

/// Natural logarithm, refined until convergence.
///
/// Each step advances the Taylor series by one term and re-descends the
/// continued fraction at matching depth. The first method whose consecutive
/// approximations differ by at most [`EPS`] supplies the answer; the Taylor
/// value is checked first, so it wins ties.
#[must_use]
pub fn mylog(x: f64) -> f64 {
    if let Some(exact) = log_special_value(x) {
        return exact;
    }

    let below_one = x < 1.0;
    let series_u = if below_one { 1.0 - x } else { (x - 1.0) / x };
    let fraction_u = (x - 1.0) / (x + 1.0);

    let mut power = 1.0;
    let mut taylor = 0.0;
    // Depth-0 value of the fraction: frac = 1, so 2u/1.
    let mut fraction_prev = 2.0 * fraction_u;

    for n in 1..=MAX_ADAPTIVE_STEPS {
        power *= series_u;
        let term = power / f64::from(n);
        if !term.is_finite() {
            return taylor;
        }
        let taylor_next = if below_one { taylor - term } else { taylor + term };
        if (taylor_next - taylor).abs() <= EPS {
            return taylor_next;
        }
        taylor = taylor_next;

        let fraction = cfrac::descend(fraction_u, n);
        if (fraction - fraction_prev).abs() <= EPS {
            return fraction;
        }
        fraction_prev = fraction;
    }

    taylor
}

/// General exponentiation `x^y`, refined until convergence.
///
/// The logarithm comes from [`mylog`]; the Maclaurin series for
/// `exp(y·ln x)` is then summed until the step between consecutive
/// approximations — the newest term — has magnitude at most [`EPS`].
#[must_use]
pub fn mypow(x: f64, y: f64) -> f64 {
    if x <= 0.0 {
        return f64::NAN;
    }

    let ln_x = mylog(x);
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
    for i in 1..=MAX_ADAPTIVE_STEPS {
        pow_y *= y;
        pow_ln *= ln_x;
        factorial *= f64::from(i);
        let term = pow_y * pow_ln / factorial;
        if !term.is_finite() {
            return sum;
        }
        sum += term;
        if term.abs() <= EPS {
            return sum;
        }
    }
    sum
}
