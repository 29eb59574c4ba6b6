use log::{debug, warn};

use crate::domain::solver::Solver;
use crate::error::Result;
use crate::models::{LpProblem, LpSolution, Status};

use ::highs::{ColProblem, HighsModelStatus, Row, Sense};

/// Tuning knobs passed through to HiGHS
#[derive(Debug, Clone, PartialEq)]
pub struct HighsOptions {
    /// Primal and dual feasibility tolerance; HiGHS default when `None`
    pub tolerance: Option<f64>,
    /// Simplex iteration limit; HiGHS default when `None`
    pub iteration_limit: Option<i32>,
    pub presolve: bool,
}

impl Default for HighsOptions {
    fn default() -> Self {
        HighsOptions {
            tolerance: None,
            iteration_limit: None,
            presolve: true,
        }
    }
}

/// HiGHS solver implementation
pub struct HighsSolver {
    options: HighsOptions,
}

impl HighsSolver {
    pub fn new(options: HighsOptions) -> Self {
        HighsSolver { options }
    }

    /// Convert HiGHS status to our status
    fn convert_status(model_status: HighsModelStatus) -> Status {
        match model_status {
            HighsModelStatus::Optimal => Status::Optimal,
            HighsModelStatus::Infeasible => Status::Infeasible,
            HighsModelStatus::UnboundedOrInfeasible => Status::UnboundedOrInfeasible,
            HighsModelStatus::Unbounded => Status::Unbounded,
            HighsModelStatus::ReachedIterationLimit => Status::IterationLimit,
            HighsModelStatus::ReachedTimeLimit => Status::TimeLimit,
            HighsModelStatus::LoadError
            | HighsModelStatus::ModelError
            | HighsModelStatus::PresolveError
            | HighsModelStatus::SolveError
            | HighsModelStatus::PostsolveError => Status::SolverError,
            _ => Status::Undefined,
        }
    }

    fn build(problem: &LpProblem) -> ColProblem {
        let mut col_problem = ColProblem::new();

        // Equality rows first, then G z <= h; `rows` follows the same order.
        let mut rows: Vec<Row> = Vec::with_capacity(problem.b_eq.len() + problem.h.len());
        for &rhs in &problem.b_eq {
            rows.push(col_problem.add_row(rhs..=rhs));
        }
        for &rhs in &problem.h {
            rows.push(col_problem.add_row(..=rhs));
        }

        // Collect each column's non-zero entries across both blocks
        let ncols = problem.ncols();
        let mut col_data: Vec<Vec<(Row, f64)>> = vec![Vec::new(); ncols];
        for (row_idx, coeffs) in problem.a_eq.iter().chain(problem.g.iter()).enumerate() {
            for (col_idx, &val) in coeffs.iter().enumerate() {
                if val != 0.0 {
                    col_data[col_idx].push((rows[row_idx], val));
                }
            }
        }

        // Box constraints live in the rows, so every column is free
        for (col_idx, row_factors) in col_data.iter().enumerate() {
            col_problem.add_column(
                problem.c[col_idx],
                f64::NEG_INFINITY..=f64::INFINITY,
                row_factors,
            );
        }

        col_problem
    }
}

impl Solver for HighsSolver {
    fn solve(&self, problem: &LpProblem) -> Result<LpSolution> {
        let mut model = match Self::build(problem).try_optimise(Sense::Minimise) {
            Ok(model) => model,
            Err(err) => {
                warn!("HiGHS rejected the model: {:?}", err);
                return Ok(LpSolution {
                    status: Status::SolverError,
                    columns: Vec::new(),
                });
            }
        };

        model.set_option("output_flag", false);
        model.set_option("log_to_console", false);
        model.set_option("presolve", if self.options.presolve { "on" } else { "off" });
        if let Some(tolerance) = self.options.tolerance {
            model.set_option("primal_feasibility_tolerance", tolerance);
            model.set_option("dual_feasibility_tolerance", tolerance);
        }
        if let Some(limit) = self.options.iteration_limit {
            model.set_option("simplex_iteration_limit", limit);
        }

        let solved = match model.try_solve() {
            Ok(solved) => solved,
            Err(err) => {
                warn!("HiGHS failed to solve the model: {:?}", err);
                return Ok(LpSolution {
                    status: Status::SolverError,
                    columns: Vec::new(),
                });
            }
        };

        let model_status = solved.status();
        debug!("HiGHS finished with model status {:?}", model_status);

        Ok(LpSolution {
            status: Self::convert_status(model_status),
            columns: solved.get_solution().columns().to_vec(),
        })
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
