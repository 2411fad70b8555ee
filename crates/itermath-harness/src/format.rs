//! Significant-digit rendering of `f64` values.
//!
//! The result output contract is C's `%.*g`: a fixed number of significant
//! digits, scientific notation only when the magnitude calls for it, and no
//! trailing zeros.

/// Significant digits used for result output.
pub const RESULT_PRECISION: usize = 12;

/// Render `value` with `digits` significant digits in `%.*g` style.
///
/// Scientific notation is used when the decimal exponent is below -4 or at
/// least `digits`, plain notation otherwise; trailing fractional zeros are
/// trimmed in both forms. Non-finite values render as `inf`/`-inf`/`nan`.
#[must_use]
pub fn sig(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }

    let digits = digits.max(1);
    // Round through the exponential form once to learn the decimal exponent
    // of the rounded value.
    let rounded = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = rounded
        .split_once('e')
        .expect("exponential format always contains 'e'");
    let exponent: i32 = exponent.parse().expect("exponent is an integer");

    if exponent < -4 || exponent >= digits as i32 {
        format!("{}e{exponent:+03}", trim_fraction(mantissa))
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        trim_fraction(&fixed).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_trim_trailing_zeros() {
        assert_eq!(sig(2.0, 12), "2");
        assert_eq!(sig(1024.0, 12), "1024");
        assert_eq!(sig(-0.5, 12), "-0.5");
        assert_eq!(sig(0.0, 12), "0");
    }

    #[test]
    fn twelve_significant_digits_of_ln_two() {
        assert_eq!(sig(std::f64::consts::LN_2, 12), "0.69314718056");
    }

    #[test]
    fn small_magnitudes_switch_to_scientific() {
        assert_eq!(sig(1e-5, 12), "1e-05");
        assert_eq!(sig(0.0001, 12), "0.0001");
    }

    #[test]
    fn large_magnitudes_switch_to_scientific() {
        assert_eq!(sig(123_456_789_012_345.0, 12), "1.23456789012e+14");
        assert_eq!(sig(999_999_999_999.0, 12), "999999999999");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(sig(f64::NAN, 12), "nan");
        assert_eq!(sig(f64::INFINITY, 12), "inf");
        assert_eq!(sig(f64::NEG_INFINITY, 12), "-inf");
    }

    #[test]
    fn rounding_can_promote_the_exponent() {
        // 0.99999999999999 rounds up to 1 at twelve significant digits.
        assert_eq!(sig(0.999_999_999_999_99, 12), "1");
    }
}
