//! Built-in conformance suite: every routine against the host library.
//!
//! The approximation engine never calls a library transcendental, so the
//! host `f64::ln` / `f64::powf` serve as an independent reference. Each case
//! fixes a routine, its inputs, the expectation, and a tolerance; NaN
//! expectations compare by `is_nan`, infinite ones by equality, finite ones
//! by absolute error.

use itermath_core::{cfrac_log, mylog, mypow, taylor_log, taylor_pow, taylorcf_pow};
use serde::{Deserialize, Serialize};

use crate::format;

/// Routine under verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Routine {
    TaylorLog,
    CfracLog,
    TaylorPow,
    TaylorcfPow,
    Mylog,
    Mypow,
}

impl Routine {
    /// Evaluate the routine; `y` and `n` are ignored where they do not apply.
    #[must_use]
    pub fn evaluate(self, x: f64, y: f64, n: u32) -> f64 {
        match self {
            Routine::TaylorLog => taylor_log(x, n),
            Routine::CfracLog => cfrac_log(x, n),
            Routine::TaylorPow => taylor_pow(x, y, n),
            Routine::TaylorcfPow => taylorcf_pow(x, y, n),
            Routine::Mylog => mylog(x),
            Routine::Mypow => mypow(x, y),
        }
    }
}

/// A single conformance case.
#[derive(Debug, Clone)]
pub struct VerificationCase {
    pub name: String,
    pub routine: Routine,
    pub x: f64,
    pub y: f64,
    pub n: u32,
    pub expected: f64,
    pub tolerance: f64,
}

impl VerificationCase {
    /// Execute the case and compare against the expectation.
    #[must_use]
    pub fn run(&self) -> VerificationResult {
        let actual = self.routine.evaluate(self.x, self.y, self.n);
        let (passed, abs_error) = if self.expected.is_nan() {
            (actual.is_nan(), None)
        } else if self.expected.is_infinite() {
            (actual == self.expected, None)
        } else {
            let error = (actual - self.expected).abs();
            (error <= self.tolerance, Some(error))
        };
        VerificationResult {
            case_name: self.name.clone(),
            routine: self.routine,
            passed,
            expected: format::sig(self.expected, format::RESULT_PRECISION),
            actual: format::sig(actual, format::RESULT_PRECISION),
            abs_error,
        }
    }
}

/// Result of verifying a single case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Name of the case.
    pub case_name: String,
    /// Routine that was exercised.
    pub routine: Routine,
    /// Whether the case passed.
    pub passed: bool,
    /// Expected value rendered at result precision.
    pub expected: String,
    /// Actual value rendered at result precision.
    pub actual: String,
    /// Absolute error, for finite comparisons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abs_error: Option<f64>,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases run.
    pub total: usize,
    /// Cases passed.
    pub passed: usize,
    /// Cases failed.
    pub failed: usize,
    /// Individual results.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            total,
            passed,
            failed,
            results,
        }
    }

    /// Returns true if all cases passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

fn case(
    name: &str,
    routine: Routine,
    x: f64,
    y: f64,
    n: u32,
    expected: f64,
    tolerance: f64,
) -> VerificationCase {
    VerificationCase {
        name: name.to_string(),
        routine,
        x,
        y,
        n,
        expected,
        tolerance,
    }
}

/// The built-in case suite.
#[must_use]
pub fn builtin_cases() -> Vec<VerificationCase> {
    let ln2 = std::f64::consts::LN_2;
    vec![
        // Exact fixed points and domain boundaries.
        case("taylor_log_one", Routine::TaylorLog, 1.0, 0.0, 7, 0.0, 0.0),
        case("cfrac_log_one", Routine::CfracLog, 1.0, 0.0, 7, 0.0, 0.0),
        case("taylor_log_zero", Routine::TaylorLog, 0.0, 0.0, 10, f64::NEG_INFINITY, 0.0),
        case("cfrac_log_zero", Routine::CfracLog, 0.0, 0.0, 10, f64::NEG_INFINITY, 0.0),
        case("taylor_log_negative", Routine::TaylorLog, -1.0, 0.0, 10, f64::NAN, 0.0),
        case("cfrac_log_negative", Routine::CfracLog, -1.0, 0.0, 10, f64::NAN, 0.0),
        // Fixed-count accuracy.
        case("cfrac_log_two_depth10", Routine::CfracLog, 2.0, 0.0, 10, ln2, 1e-9),
        case("taylor_log_two_50terms", Routine::TaylorLog, 2.0, 0.0, 50, ln2, 1e-10),
        case("cfrac_log_half_depth20", Routine::CfracLog, 0.5, 0.0, 20, -ln2, 1e-9),
        case("taylor_log_quarter_80terms", Routine::TaylorLog, 0.25, 0.0, 80, 0.25_f64.ln(), 1e-10),
        case("taylor_pow_two_tenth", Routine::TaylorPow, 2.0, 10.0, 30, 1024.0, 1e-6),
        case("taylorcf_pow_two_tenth", Routine::TaylorcfPow, 2.0, 10.0, 30, 1024.0, 1e-6),
        case("taylor_pow_sqrt_four", Routine::TaylorPow, 4.0, 0.5, 40, 2.0, 1e-6),
        case("taylorcf_pow_sqrt_nine", Routine::TaylorcfPow, 9.0, 0.5, 25, 3.0, 1e-6),
        case("taylor_pow_negative_base", Routine::TaylorPow, -2.0, 3.0, 10, f64::NAN, 0.0),
        case("taylor_pow_zero_base", Routine::TaylorPow, 0.0, 3.0, 10, f64::NAN, 0.0),
        // Adaptive routines.
        case("mylog_euler", Routine::Mylog, 2.718281828, 0.0, 0, 2.718281828_f64.ln(), 1e-7),
        case("mylog_two", Routine::Mylog, 2.0, 0.0, 0, ln2, 1e-7),
        case("mylog_zero", Routine::Mylog, 0.0, 0.0, 0, f64::NEG_INFINITY, 0.0),
        case("mylog_negative", Routine::Mylog, -3.0, 0.0, 0, f64::NAN, 0.0),
        case("mypow_two_tenth", Routine::Mypow, 2.0, 10.0, 0, 1024.0, 1e-3),
        case("mypow_sqrt_nine", Routine::Mypow, 9.0, 0.5, 0, 3.0, 1e-5),
        case("mypow_negative_base", Routine::Mypow, -1.0, 2.0, 0, f64::NAN, 0.0),
    ]
}

/// Run the built-in suite.
#[must_use]
pub fn run_builtin() -> VerificationSummary {
    VerificationSummary::from_results(builtin_cases().iter().map(VerificationCase::run).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_suite_passes() {
        let summary = run_builtin();
        let failures: Vec<&VerificationResult> =
            summary.results.iter().filter(|r| !r.passed).collect();
        assert!(failures.is_empty(), "failing cases: {failures:?}");
    }

    #[test]
    fn summary_accounting() {
        let results = vec![
            case("ok", Routine::TaylorLog, 1.0, 0.0, 5, 0.0, 0.0).run(),
            case("bad", Routine::TaylorLog, 2.0, 0.0, 5, 100.0, 1e-12).run(),
        ];
        let summary = VerificationSummary::from_results(results);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_passed());
    }

    #[test]
    fn nan_expectation_requires_nan() {
        let result = case("neg", Routine::CfracLog, -1.0, 0.0, 5, f64::NAN, 0.0).run();
        assert!(result.passed);
        assert_eq!(result.actual, "nan");
        assert!(result.abs_error.is_none());
    }

    #[test]
    fn routine_names_serialize_snake_case() {
        let json = serde_json::to_string(&Routine::TaylorcfPow).expect("serializes");
        assert_eq!(json, "\"taylorcf_pow\"");
    }
}
