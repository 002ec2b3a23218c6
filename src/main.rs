use std::path::{Path, PathBuf};

use anyhow::Result;
use subset_sums::subset::Weights;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::Command;
use crate::config::Settings;
use crate::session::{Session, SumReport};

mod cli;
mod config;
mod file;
mod repl;
mod session;

fn setup_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = cli::parse();
    setup_tracing(cli.verbose);
    let settings = Settings::from(&cli);

    match cli.command {
        Command::All {
            weights,
            file,
            output,
        } => {
            let weights = load_weights(weights, file.as_deref())?;
            let session = Session::new(weights, None, &settings)?;
            emit(&session.all()?, output, &settings)?;
        }
        Command::Query {
            weights,
            file,
            sums,
            output,
        } => {
            let weights = load_weights(weights, file.as_deref())?;
            let session = Session::for_queries(weights, &sums, &settings)?;
            emit(&session.reports(sums)?, output, &settings)?;
        }
        Command::Repl { weights, file } => {
            let weights = load_weights(weights, file.as_deref())?;
            let session = Session::new(weights, None, &settings)?;
            repl::start(session, settings)?;
        }
    }

    Ok(())
}

fn load_weights(values: Vec<u64>, file: Option<&Path>) -> Result<Weights> {
    let weights = match file {
        Some(path) => file::load_weights(path)?,
        None => Weights::new(values)?,
    };
    info!(count = weights.len(), total = weights.total(), "loaded weights");
    Ok(weights)
}

fn emit(reports: &[SumReport], output: Option<PathBuf>, settings: &Settings) -> Result<()> {
    match output {
        Some(path) => {
            file::save_reports(reports, &path, settings)?;
            info!(path = %path.display(), "saved reports");
        }
        None => session::render(&mut std::io::stdout().lock(), reports, settings)?,
    }
    Ok(())
}
