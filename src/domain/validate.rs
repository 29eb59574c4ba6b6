use crate::error::{GdError, Result};
use crate::models::LpProblem;

/// A target point needs at least one component and every component finite.
pub fn validate_target(x: &[f64]) -> Result<()> {
    if x.is_empty() {
        return Err(GdError::Formulation(
            "target point has no components".to_string(),
        ));
    }

    if let Some((i, v)) = x.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(GdError::Formulation(format!(
            "component {} is not finite ({})",
            i, v,
        )));
    }

    Ok(())
}

/// Check that every matrix and vector of the problem agrees on its dimensions.
pub fn validate_problem(problem: &LpProblem) -> Result<()> {
    let ncols = problem.ncols();

    if problem.n == 0 {
        return Err(GdError::Formulation(
            "problem has no weight variables".to_string(),
        ));
    }

    if problem.c.len() != ncols {
        return Err(GdError::Formulation(format!(
            "cost vector has {} entries, expected {}",
            problem.c.len(),
            ncols,
        )));
    }

    check_rows("equality", &problem.a_eq, &problem.b_eq, ncols)?;
    check_rows("inequality", &problem.g, &problem.h, ncols)?;

    Ok(())
}

fn check_rows(kind: &str, matrix: &[Vec<f64>], rhs: &[f64], ncols: usize) -> Result<()> {
    if matrix.len() != rhs.len() {
        return Err(GdError::Formulation(format!(
            "{} matrix has {} rows but right-hand side has {}",
            kind,
            matrix.len(),
            rhs.len(),
        )));
    }

    for (i, row) in matrix.iter().enumerate() {
        if row.len() != ncols {
            return Err(GdError::Formulation(format!(
                "{} row {} has {} columns, expected {}",
                kind,
                i,
                row.len(),
                ncols,
            )));
        }
    }

    Ok(())
}
