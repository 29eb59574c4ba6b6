//! Builds the linear program that inverts the Chebyshev scalarizing function.
//!
//! For a target point `x` of length `n` the decision variables are
//! `[w_1 .. w_n, t]` and the program is
//!
//! ```text
//! minimize   t
//! subject to sum(w) = 1
//!            0 <= w_i <= 1
//!            |x_i * w_i| <= t
//! ```
//!
//! The last constraint is elementwise and is split into `x_i w_i - t <= 0`
//! and `-x_i w_i - t <= 0`.

use crate::domain::validate::validate_target;
use crate::error::Result;
use crate::models::LpProblem;

pub fn formulate(x: &[f64]) -> Result<LpProblem> {
    validate_target(x)?;

    let n = x.len();
    let ncols = n + 1;

    let mut c = vec![0.0; ncols];
    c[n] = 1.0;

    let mut sum_row = vec![1.0; ncols];
    sum_row[n] = 0.0;

    let mut g = Vec::with_capacity(4 * n);
    let mut h = Vec::with_capacity(4 * n);

    // w_i >= 0
    for i in 0..n {
        g.push(unit_row(ncols, i, -1.0, 0.0));
        h.push(0.0);
    }

    // w_i <= 1
    for i in 0..n {
        g.push(unit_row(ncols, i, 1.0, 0.0));
        h.push(1.0);
    }

    // x_i w_i - t <= 0
    for (i, &xi) in x.iter().enumerate() {
        g.push(unit_row(ncols, i, xi, -1.0));
        h.push(0.0);
    }

    // -x_i w_i - t <= 0
    for (i, &xi) in x.iter().enumerate() {
        g.push(unit_row(ncols, i, -xi, -1.0));
        h.push(0.0);
    }

    Ok(LpProblem {
        n,
        c,
        a_eq: vec![sum_row],
        b_eq: vec![1.0],
        g,
        h,
    })
}

/// Row with `coeff` on weight `i` and `t_coeff` on the slack column.
fn unit_row(ncols: usize, i: usize, coeff: f64, t_coeff: f64) -> Vec<f64> {
    let mut row = vec![0.0; ncols];
    row[i] = coeff;
    row[ncols - 1] = t_coeff;
    row
}
