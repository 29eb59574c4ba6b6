use crate::error::{GdError, Result};
use crate::models::{OutputFormat, WeightSolution};

/// Parse one input line of whitespace-separated decimals into a target point.
pub fn parse_target(line: &str) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| GdError::Parse(format!("'{}' is not a number", token)))
        })
        .collect()
}

/// Render a solution as one output line, without the trailing newline.
pub fn format_solution(solution: &WeightSolution, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(solution
            .weights
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(" ")),
        OutputFormat::Json => serde_json::to_string(solution)
            .map_err(|e| GdError::Io(std::io::Error::other(e))),
    }
}
