use dotenv::dotenv;
use log::{debug, error, info, warn};
use std::io;
use std::process::{self, ExitCode};

mod config;
mod convert;
mod domain;
mod error;
mod models;
mod stream;

use crate::config::Config;
use crate::domain::solver::Solver;
use crate::domain::solvers::HighsSolver;

fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        debug!("interrupt received, stopping");
        // Wait out any line being written so the consumer never sees half of one
        let _stdout = io::stdout().lock();
        process::exit(0);
    });

    if let Err(err) = installed {
        warn!("could not install interrupt handler: {}", err);
    }
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    install_interrupt_handler();

    let config = Config::from_env();
    let solver = HighsSolver::new(config.solver.clone());
    info!(
        "generating weights with {} ({:?}, output {:?})",
        solver.name(),
        config.solver,
        config.output_format,
    );

    let stdin = io::stdin();
    match stream::run(&solver, config.output_format, stdin.lock(), io::stdout()) {
        Ok(answered) => {
            info!("end of input after {} target points", answered);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("stopping weight stream: {:?}", err);
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
