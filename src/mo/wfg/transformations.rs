//! Single-coordinate shift transforms and many-to-one reductions shared by the
//! WFG family.
//!
//! None of the functions clamp their result. A denominator that collapses to
//! zero means the parameters are unusable and is reported as
//! [`WfgError::InvalidConfiguration`](crate::error::WfgError) instead of
//! leaking `NaN`/`inf` into the objectives. Non-finite inputs pass through as
//! non-finite results.

use std::f64::consts::PI;

use itertools::Itertools;

use crate::error::{invalid_configuration, Result, WfgError};

fn checked_div(num: f64, denom: f64, what: &str) -> Result<f64>
{
    if denom == 0.0
    {
        return Err(invalid_configuration(format!("{} has a degenerate denominator ({})", what, denom)));
    }

    Ok(num / denom)
}

/// Linear shift with its optimum moved to `a`.
pub fn s_linear(y: f64, a: f64) -> Result<f64>
{
    checked_div((y - a).abs(), ((a - y).floor() + a).abs(), "s_linear")
}

/// Multi-modal shift: `a` controls the number of minima, `b` their
/// magnitude and `c` the location of the global one.
pub fn s_multi(y: f64, a: f64, b: f64, c: f64) -> Result<f64>
{
    let tmp1 = checked_div((y - c).abs(), 2.0 * ((c - y).floor() + c), "s_multi")?;
    let tmp2 = (4.0 * a + 2.0) * PI * (0.5 - tmp1);

    checked_div(1.0 + tmp2.cos() + 4.0 * b * tmp1.powi(2), b + 2.0, "s_multi")
}

/// Deceptive shift: global optimum at `a`, `b` is the aperture of the
/// well and `c` the value of the deceptive minima.
pub fn s_decept(y: f64, a: f64, b: f64, c: f64) -> Result<f64>
{
    let tmp1 = (y - a + b).floor() * checked_div(1.0 - c + checked_div(a - b, b, "s_decept")?, a - b, "s_decept")?;
    let tmp2 = (a + b - y).floor() * checked_div(1.0 - c + checked_div(1.0 - a - b, b, "s_decept")?, 1.0 - a - b, "s_decept")?;
    let tmp = (y - a).abs() - b;

    Ok(1.0 + tmp * (tmp1 + tmp2 + checked_div(1.0, b, "s_decept")?))
}

/// Weighted mean of `y`.
pub fn r_sum(y: &[f64], w: &[f64]) -> Result<f64>
{
    if y.len() != w.len()
    {
        return Err(WfgError::DimensionMismatch { expected: y.len(), actual: w.len() });
    }

    let numerator = y.iter().zip(w).map(|(y_i, w_i)| y_i * w_i).sum::<f64>();
    let denominator = w.iter().sum::<f64>();

    checked_div(numerator, denominator, "r_sum")
}

/// Non-separable reduction of degree `a`.
///
/// Every unordered pair of coordinates contributes `|y[j] - y[k]|`, so no
/// coordinate of the group can be optimised on its own.
///
/// The `y.len() / a` factor of the denominator is a real division. Inside the
/// WFG pipeline `y.len() == a`, so this only matters for direct callers with
/// `y.len() != a`: `r_nonsep(&[0.5; 3], 2)` is `1.5 / (1.5 * 3)`, not `1.5 / 3`.
pub fn r_nonsep(y: &[f64], a: usize) -> Result<f64>
{
    if y.is_empty() || a == 0
    {
        return Err(invalid_configuration(format!("r_nonsep over {} values with degree {}", y.len(), a)));
    }

    let sum = y.iter().sum::<f64>();
    let pairwise = y
        .iter()
        .tuple_combinations()
        .map(|(y_j, y_k)| (y_j - y_k).abs())
        .sum::<f64>();

    let half = ((a + 1) / 2) as f64;
    let a = a as f64;
    let denominator = (y.len() as f64 / a) * half * (1.0 + 2.0 * a - 2.0 * half);

    checked_div(sum + pairwise, denominator, "r_nonsep")
}
