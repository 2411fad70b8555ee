//! Integration test: convergence behavior of all six routines.
//!
//! Checks the properties the crate promises: error shrinks as the iteration
//! budget grows, domain boundaries resolve exactly, fixed-count results
//! approach the host library values, and the adaptive routines terminate and
//! land within tolerance.
//!
//! Run: cargo test -p itermath-core --test convergence_test

use itermath_core::{cfrac_log, mylog, mypow, taylor_log, taylor_pow, taylorcf_pow};

// ---------------------------------------------------------------------------
// 1. Error decreases with the iteration budget
// ---------------------------------------------------------------------------

// Once a partial sum saturates f64 resolution the error floor is rounding
// noise, so the envelope checks allow a one-ulp-scale slack.
const ROUNDING_SLACK: f64 = 1e-14;

#[test]
fn series_error_envelope_shrinks() {
    for x in [0.2_f64, 0.7, 1.3, 3.0, 9.0] {
        let exact = x.ln();
        let mut previous = f64::INFINITY;
        for n in [4, 8, 16, 32, 64, 128] {
            let error = (taylor_log(x, n) - exact).abs();
            assert!(
                error <= previous + ROUNDING_SLACK,
                "taylor_log({x}, {n}) error {error} grew past {previous}"
            );
            previous = error;
        }
    }
}

#[test]
fn fraction_error_envelope_shrinks() {
    // Larger |u| = (x-1)/(x+1) keeps the depth-8 error above the rounding
    // floor, so the envelope stays meaningful across the whole ladder.
    for x in [0.2_f64, 3.0, 9.0] {
        let exact = x.ln();
        let mut previous = f64::INFINITY;
        for n in [2, 4, 8] {
            let error = (cfrac_log(x, n) - exact).abs();
            assert!(
                error <= previous + ROUNDING_SLACK,
                "cfrac_log({x}, {n}) error {error} grew past {previous}"
            );
            previous = error;
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Domain boundaries, any iteration count
// ---------------------------------------------------------------------------

#[test]
fn boundary_table_holds_for_both_logarithms() {
    let logs: [fn(f64, u32) -> f64; 2] = [taylor_log, cfrac_log];
    for n in [1, 3, 17, 200] {
        for log in logs {
            assert_eq!(log(0.0, n), f64::NEG_INFINITY);
            assert!(log(-1.0, n).is_nan());
            assert_eq!(log(1.0, n), 0.0);
            assert_eq!(log(f64::INFINITY, n), f64::INFINITY);
            assert!(log(f64::NAN, n).is_nan());
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Concrete accuracy scenarios
// ---------------------------------------------------------------------------

#[test]
fn known_value_scenarios() {
    let ln2 = std::f64::consts::LN_2;
    assert!((cfrac_log(2.0, 10) - ln2).abs() < 1e-9);
    assert!((taylor_log(2.0, 50) - ln2).abs() < 1e-10);
    assert!((cfrac_log(0.5, 20) + ln2).abs() < 1e-9);
    assert!((taylor_pow(2.0, 10.0, 30) - 1024.0).abs() < 1e-6);
    assert!((taylor_pow(4.0, 0.5, 40) - 2.0).abs() < 1e-6);
    assert!((mylog(2.718281828) - 1.0).abs() < 1e-7);
}

// ---------------------------------------------------------------------------
// 4. Round trips
// ---------------------------------------------------------------------------

#[test]
fn first_power_round_trips() {
    for x in [0.5, 1.5, 2.5, 7.0] {
        let approx = taylor_pow(x, 1.0, 60);
        assert!(
            (approx - x).abs() < 1e-3,
            "taylor_pow({x}, 1, 60) = {approx}"
        );
        let approx = taylorcf_pow(x, 1.0, 60);
        assert!(
            (approx - x).abs() < 1e-6,
            "taylorcf_pow({x}, 1, 60) = {approx}"
        );
    }
}

#[test]
fn square_then_root_round_trips() {
    let squared = mypow(3.7, 2.0);
    let rooted = mypow(squared, 0.5);
    assert!((rooted - 3.7).abs() < 1e-5, "3.7² then sqrt = {rooted}");
}

// ---------------------------------------------------------------------------
// 5. Adaptive routines terminate and agree with the host library
// ---------------------------------------------------------------------------

#[test]
fn adaptive_log_matches_host() {
    let mut x = 0.05;
    while x < 120.0 {
        let approx = mylog(x);
        let exact = x.ln();
        assert!(
            (approx - exact).abs() < 1e-7,
            "mylog({x}) = {approx}, host = {exact}"
        );
        x *= 1.9;
    }
}

#[test]
fn adaptive_pow_matches_host() {
    for (x, y) in [(2.0, 10.0), (4.0, 0.5), (10.0, -1.5), (1.001, 250.0)] {
        let approx = mypow(x, y);
        let exact = x.powf(y);
        let scale = exact.abs().max(1.0);
        assert!(
            ((approx - exact) / scale).abs() < 1e-6,
            "mypow({x}, {y}) = {approx}, host = {exact}"
        );
    }
}

#[test]
fn adaptive_agrees_with_deep_fixed_runs() {
    for x in [0.3, 2.0, 5.0] {
        let fixed = cfrac_log(x, 200);
        let adaptive = mylog(x);
        assert!(
            (fixed - adaptive).abs() < 1e-7,
            "cfrac_log({x}, 200) = {fixed}, mylog({x}) = {adaptive}"
        );
    }
}
