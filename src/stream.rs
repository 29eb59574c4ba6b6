use log::debug;
use std::io::{BufRead, Write};

use crate::convert::{format_solution, parse_target};
use crate::domain::solve::solve_target;
use crate::domain::solver::Solver;
use crate::error::Result;
use crate::models::OutputFormat;

/// Answer one target point per input line until end of input.
///
/// Each result is flushed as soon as it is written. The first failure ends
/// the stream without writing anything for the offending line, so output
/// lines always pair 1:1 with the input lines before it.
///
/// Returns the number of lines answered.
pub fn run<R, W>(
    solver: &dyn Solver,
    format: OutputFormat,
    input: R,
    mut output: W,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut answered = 0;

    for line in input.lines() {
        let line = line?;
        let x = parse_target(&line)?;
        debug!("line {}: target {:?}", answered + 1, x);

        let solution = solve_target(solver, &x)?;
        let rendered = format_solution(&solution, format)?;

        writeln!(output, "{}", rendered)?;
        output.flush()?;
        answered += 1;
    }

    Ok(answered)
}
