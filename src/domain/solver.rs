use crate::error::Result;
use crate::models::{LpProblem, LpSolution};

/// Common interface for LP solvers
pub trait Solver: Send + Sync {
    /// Solve a linear program
    ///
    /// # Arguments
    /// * `problem` - Cost vector, equality rows `A z = b` and inequality rows `G z <= h`
    ///
    /// # Returns
    /// The solver status and, when one was produced, the solution vector `z`.
    /// Infeasibility is reported through the status, not as an error.
    fn solve(&self, problem: &LpProblem) -> Result<LpSolution>;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}
