use log::warn;
use std::env;
use std::str::FromStr;

use crate::domain::solvers::HighsOptions;
use crate::models::OutputFormat;

/// Smallest feasibility tolerance HiGHS accepts
const MIN_TOLERANCE: f64 = 1e-10;

/// Runtime configuration read from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub solver: HighsOptions,
    pub output_format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let tolerance = parse_var(&lookup, "GD_TOLERANCE").filter(|t: &f64| {
            let ok = *t >= MIN_TOLERANCE;
            if !ok {
                warn!("ignoring GD_TOLERANCE {}, HiGHS needs at least {}", t, MIN_TOLERANCE);
            }
            ok
        });

        let iteration_limit = parse_var(&lookup, "GD_ITERATION_LIMIT").filter(|limit: &i32| {
            let ok = *limit >= 0;
            if !ok {
                warn!("ignoring negative GD_ITERATION_LIMIT {}", limit);
            }
            ok
        });

        let presolve = match lookup("GD_PRESOLVE").as_deref().map(str::to_lowercase) {
            None => true,
            Some(v) if v == "on" => true,
            Some(v) if v == "off" => false,
            Some(v) => {
                warn!("ignoring GD_PRESOLVE={}, expected on or off", v);
                true
            }
        };

        let output_format = lookup("GD_OUTPUT_FORMAT")
            .and_then(|v| {
                let format = OutputFormat::from_str(&v);
                if format.is_none() {
                    warn!("ignoring GD_OUTPUT_FORMAT={}, expected plain or json", v);
                }
                format
            })
            .unwrap_or_default();

        Config {
            solver: HighsOptions {
                tolerance,
                iteration_limit,
                presolve,
            },
            output_format,
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring unparseable {}={}", key, raw);
            None
        }
    }
}
