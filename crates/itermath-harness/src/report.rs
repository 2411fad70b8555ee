//! Approximation-vs-reference comparison blocks for the CLI.
//!
//! A block puts the host library value first, then every approximation of
//! the same quantity, with labels right-aligned so the `=` column lines up.

use itermath_core::{cfrac_log, mylog, mypow, taylor_log, taylor_pow, taylorcf_pow};
use serde::{Deserialize, Serialize};

use crate::format;

/// One labeled value in a comparison block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub value: f64,
}

/// Rows for `ln(x)`: the host reference first, then every approximation.
#[must_use]
pub fn log_block(x: f64, n: u32) -> Vec<ComparisonRow> {
    let arg = format::sig(x, 6);
    vec![
        ComparisonRow {
            label: format!("log({arg})"),
            value: x.ln(),
        },
        ComparisonRow {
            label: format!("cfrac_log({arg})"),
            value: cfrac_log(x, n),
        },
        ComparisonRow {
            label: format!("taylor_log({arg})"),
            value: taylor_log(x, n),
        },
        ComparisonRow {
            label: format!("mylog({arg})"),
            value: mylog(x),
        },
    ]
}

/// Rows for `x^y`: the host reference first, then every approximation.
#[must_use]
pub fn pow_block(x: f64, y: f64, n: u32) -> Vec<ComparisonRow> {
    let args = format!("{},{}", format::sig(x, 6), format::sig(y, 6));
    vec![
        ComparisonRow {
            label: format!("pow({args})"),
            value: x.powf(y),
        },
        ComparisonRow {
            label: format!("taylor_pow({args})"),
            value: taylor_pow(x, y, n),
        },
        ComparisonRow {
            label: format!("taylorcf_pow({args})"),
            value: taylorcf_pow(x, y, n),
        },
        ComparisonRow {
            label: format!("mypow({args})"),
            value: mypow(x, y),
        },
    ]
}

/// Render a block with right-aligned labels and result-precision values.
#[must_use]
pub fn render(rows: &[ComparisonRow]) -> String {
    let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        out.push_str(&format!(
            "{:>width$} = {}\n",
            row.label,
            format::sig(row.value, format::RESULT_PRECISION),
        ));
    }
    out
}
