use log::{debug, error};

use crate::domain::formulate::formulate;
use crate::domain::solver::Solver;
use crate::domain::validate::{validate_problem, validate_target};
use crate::error::{GdError, Result};
use crate::models::{LpProblem, Status, WeightSolution};

/// Solve a GD problem and split the solution into weights and `t`.
pub fn solve_weights(solver: &dyn Solver, problem: &LpProblem) -> Result<WeightSolution> {
    validate_problem(problem)?;

    let solution = solver.solve(problem)?;

    if solution.status != Status::Optimal {
        error!("{} returned status {}", solver.name(), solution.status);
        return Err(GdError::Solve {
            status: solution.status,
        });
    }

    if solution.columns.len() < problem.ncols() {
        error!(
            "{} returned {} columns, expected {}",
            solver.name(),
            solution.columns.len(),
            problem.ncols(),
        );
        return Err(GdError::Solve {
            status: Status::Undefined,
        });
    }

    let mut columns = solution.columns;
    columns.truncate(problem.ncols());
    let objective = columns.pop().unwrap_or_default();

    debug!("weights {:?} with chebyshev value {}", columns, objective);

    Ok(WeightSolution {
        weights: columns,
        objective,
    })
}

/// Compute the weight vector for one target point.
///
/// The target is divided by its largest magnitude before formulating, so
/// every coefficient handed to the solver lies in [-1, 1]. The optimal
/// weights are invariant under positive scaling; only `t` is scaled back.
pub fn solve_target(solver: &dyn Solver, x: &[f64]) -> Result<WeightSolution> {
    validate_target(x)?;

    let scale = x.iter().fold(0.0, |m: f64, v| m.max(v.abs()));
    if scale == 0.0 {
        return solve_weights(solver, &formulate(x)?);
    }

    let scaled: Vec<f64> = x.iter().map(|v| v / scale).collect();
    let mut solution = solve_weights(solver, &formulate(&scaled)?)?;
    solution.objective *= scale;
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::solvers::{HighsOptions, HighsSolver};
    use crate::models::LpSolution;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const TOL: f64 = 1e-6;

    fn highs() -> HighsSolver {
        HighsSolver::new(HighsOptions::default())
    }

    fn chebyshev(x: &[f64], w: &[f64]) -> f64 {
        x.iter()
            .zip(w)
            .map(|(xi, wi)| (xi * wi).abs())
            .fold(0.0, f64::max)
    }

    fn assert_valid_weights(w: &[f64]) {
        for &wi in w {
            assert!(wi >= -TOL && wi <= 1.0 + TOL, "weight {} out of [0, 1]", wi);
        }
        assert_abs_diff_eq!(w.iter().sum::<f64>(), 1.0, epsilon = TOL);
    }

    struct FixedSolver(LpSolution);

    impl Solver for FixedSolver {
        fn solve(&self, _problem: &LpProblem) -> Result<LpSolution> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_equal_components_split_evenly() {
        let solution = solve_target(&highs(), &[1.0, 1.0]).unwrap();

        assert_eq!(solution.weights.len(), 2);
        assert_abs_diff_eq!(solution.weights[0], 0.5, epsilon = TOL);
        assert_abs_diff_eq!(solution.weights[1], 0.5, epsilon = TOL);
        assert_abs_diff_eq!(solution.objective, 0.5, epsilon = TOL);
    }

    #[test]
    fn test_single_objective_gets_full_weight() {
        let solution = solve_target(&highs(), &[-2.5]).unwrap();

        assert_abs_diff_eq!(solution.weights[0], 1.0, epsilon = TOL);
        assert_abs_diff_eq!(solution.objective, 2.5, epsilon = TOL);
    }

    #[test]
    fn test_weights_are_inversely_proportional_to_target() {
        // max(w1, 2 w2) is smallest where w1 = 2 w2
        let solution = solve_target(&highs(), &[1.0, 2.0]).unwrap();

        assert_abs_diff_eq!(solution.weights[0], 2.0 / 3.0, epsilon = TOL);
        assert_abs_diff_eq!(solution.weights[1], 1.0 / 3.0, epsilon = TOL);
        assert_abs_diff_eq!(solution.objective, 2.0 / 3.0, epsilon = TOL);
    }

    #[test]
    fn test_zero_component_takes_all_weight() {
        let solution = solve_target(&highs(), &[0.0, 3.0]).unwrap();

        assert_abs_diff_eq!(solution.weights[0], 1.0, epsilon = TOL);
        assert_abs_diff_eq!(solution.weights[1], 0.0, epsilon = TOL);
        assert_abs_diff_eq!(solution.objective, 0.0, epsilon = TOL);
    }

    #[test]
    fn test_weights_satisfy_box_and_sum_constraints() {
        let targets: [&[f64]; 5] = [
            &[0.2, 0.3, 0.5],
            &[1.0, 0.0, 0.0, 0.0],
            &[-1.0, 4.0, 0.25],
            &[10.0, 0.1, 3.0, 7.0, 2.0],
            &[1e-3, 1e3],
        ];

        for x in targets {
            let solution = solve_target(&highs(), x).unwrap();
            assert_eq!(solution.weights.len(), x.len());
            assert_valid_weights(&solution.weights);
        }
    }

    #[test]
    fn test_chebyshev_value_matches_objective() {
        let targets: [&[f64]; 3] = [&[0.2, 0.3, 0.5], &[-1.0, 4.0, 0.25], &[5.0, 1.0]];

        for x in targets {
            let solution = solve_target(&highs(), x).unwrap();
            assert_abs_diff_eq!(
                chebyshev(x, &solution.weights),
                solution.objective,
                epsilon = TOL
            );
        }
    }

    #[test]
    fn test_tiny_components_keep_their_ratio() {
        let solution = solve_target(&highs(), &[1e-10, 2e-10]).unwrap();

        assert_abs_diff_eq!(solution.weights[0], 2.0 / 3.0, epsilon = TOL);
        assert_abs_diff_eq!(solution.weights[1], 1.0 / 3.0, epsilon = TOL);
        assert_relative_eq!(solution.objective, 2e-10 / 3.0, max_relative = 1e-4);
    }

    #[test]
    fn test_huge_component_still_solves() {
        let solution = solve_target(&highs(), &[1e16, 1.0]).unwrap();

        assert_valid_weights(&solution.weights);
        assert_abs_diff_eq!(solution.weights[0], 0.0, epsilon = TOL);
        assert_abs_diff_eq!(solution.weights[1], 1.0, epsilon = TOL);
        assert!(solution.objective.is_finite() && solution.objective >= 0.0);
    }

    #[test]
    fn test_scaled_targets_share_weights() {
        let a = solve_target(&highs(), &[0.3, 1.2, 2.0]).unwrap();
        let b = solve_target(&highs(), &[3e5, 1.2e6, 2e6]).unwrap();

        for (wa, wb) in a.weights.iter().zip(&b.weights) {
            assert_abs_diff_eq!(*wa, *wb, epsilon = TOL);
        }
        assert_relative_eq!(b.objective, 1e6 * a.objective, max_relative = 1e-6);
    }

    #[test]
    fn test_all_zero_target_is_solved_unscaled() {
        let solution = solve_target(&highs(), &[0.0, 0.0]).unwrap();

        assert_valid_weights(&solution.weights);
        assert_abs_diff_eq!(solution.objective, 0.0, epsilon = TOL);
    }

    #[test]
    fn test_negated_target_has_same_optimum() {
        let x = [0.4, 1.5, 3.0];
        let neg: Vec<f64> = x.iter().map(|v| -v).collect();

        let a = solve_target(&highs(), &x).unwrap();
        let b = solve_target(&highs(), &neg).unwrap();

        assert_abs_diff_eq!(a.objective, b.objective, epsilon = TOL);
    }

    #[test]
    fn test_contradictory_box_rows_fail_with_solve_error() {
        // sum(w) = 1 while every upper box row forces w_i <= 0
        let mut problem = formulate(&[1.0, 2.0]).unwrap();
        for i in 0..problem.n {
            problem.h[problem.n + i] = 0.0;
        }

        let err = solve_weights(&highs(), &problem).unwrap_err();
        match err {
            GdError::Solve { status } => assert_ne!(status, Status::Optimal),
            other => panic!("expected solve error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_optimal_status_is_solve_error() {
        let solver = FixedSolver(LpSolution {
            status: Status::Unbounded,
            columns: vec![0.5, 0.5, 0.0],
        });
        let problem = formulate(&[1.0, 1.0]).unwrap();

        assert!(matches!(
            solve_weights(&solver, &problem),
            Err(GdError::Solve {
                status: Status::Unbounded
            })
        ));
    }

    #[test]
    fn test_missing_solution_vector_is_solve_error() {
        let solver = FixedSolver(LpSolution {
            status: Status::Optimal,
            columns: vec![1.0],
        });
        let problem = formulate(&[1.0, 1.0]).unwrap();

        assert!(matches!(
            solve_weights(&solver, &problem),
            Err(GdError::Solve { .. })
        ));
    }

    #[test]
    fn test_slack_is_split_from_weights() {
        let solver = FixedSolver(LpSolution {
            status: Status::Optimal,
            columns: vec![0.25, 0.75, 0.3],
        });
        let problem = formulate(&[1.2, 0.4]).unwrap();

        let solution = solve_weights(&solver, &problem).unwrap();
        assert_eq!(solution.weights, vec![0.25, 0.75]);
        assert_eq!(solution.objective, 0.3);
    }

    #[test]
    fn test_malformed_problem_is_rejected_before_solving() {
        let solver = FixedSolver(LpSolution {
            status: Status::Optimal,
            columns: vec![1.0, 0.0],
        });
        let mut problem = formulate(&[1.0]).unwrap();
        problem.h.pop();

        assert!(matches!(
            solve_weights(&solver, &problem),
            Err(GdError::Formulation(_))
        ));
    }
}
