use std::f64::consts::FRAC_PI_2;

use crate::error::{invalid_configuration, Result};

/// Concave front shape for objective `m` (1-based) of `x.len()` objectives.
pub fn concave(x: &[f64], m: usize) -> Result<f64>
{
    let n_obj = x.len();

    if m == 0 || m > n_obj
    {
        return Err(invalid_configuration(format!("objective index {} outside 1..={}", m, n_obj)));
    }

    let mut result = 1.0;

    for x_i in &x[..n_obj - m]
    {
        result *= (x_i * FRAC_PI_2).sin();
    }

    if m > 1
    {
        result *= (x[n_obj - m] * FRAC_PI_2).cos();
    }

    Ok(result)
}
