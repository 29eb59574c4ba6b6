use serde::Serialize;
use std::fmt;

// ---------- LP types: dense & solver-agnostic ----------

/// A linear program in the form
///
/// minimize c·z subject to A z = b, G z <= h
///
/// where z = [w_1 .. w_n, t].
#[derive(Debug, Clone, PartialEq)]
pub struct LpProblem {
    /// Number of weight variables; the slack `t` is column `n`.
    pub n: usize,
    pub c: Vec<f64>,
    pub a_eq: Vec<Vec<f64>>,
    pub b_eq: Vec<f64>,
    pub g: Vec<Vec<f64>>,
    pub h: Vec<f64>,
}

impl LpProblem {
    pub fn ncols(&self) -> usize {
        self.n + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Optimal,
    Infeasible,
    Unbounded,
    UnboundedOrInfeasible,
    IterationLimit,
    TimeLimit,
    SolverError,
    Undefined,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Optimal => "optimal",
            Status::Infeasible => "infeasible",
            Status::Unbounded => "unbounded",
            Status::UnboundedOrInfeasible => "unbounded or infeasible",
            Status::IterationLimit => "iteration limit reached",
            Status::TimeLimit => "time limit reached",
            Status::SolverError => "solver error",
            Status::Undefined => "undefined",
        };
        f.write_str(s)
    }
}

/// Raw output of a solver backend
#[derive(Debug, Clone)]
pub struct LpSolution {
    pub status: Status,
    pub columns: Vec<f64>,
}

// ---------- Response types ----------

#[derive(Debug, Clone, Serialize)]
pub struct WeightSolution {
    pub weights: Vec<f64>,
    /// Chebyshev value `t` at the optimum
    pub objective: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl OutputFormat {
    /// Parse output format from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Some(OutputFormat::Plain),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
