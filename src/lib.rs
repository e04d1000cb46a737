pub mod cli;
pub mod config;
pub mod director;
pub mod executor;

mod error;

pub use error::DirectorError;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{FmtSubscriber, filter::LevelFilter};

use crate::director::{DEFAULT_LAUNCHER, DirectorRunner};
use crate::executor::CommandExecutor;

pub fn init_logging(log_level: cli::LogLevel) -> Result<()> {
    let filter = match log_level {
        cli::LogLevel::Trace => LevelFilter::TRACE,
        cli::LogLevel::Debug => LevelFilter::DEBUG,
        cli::LogLevel::Info => LevelFilter::INFO,
        cli::LogLevel::Warn => LevelFilter::WARN,
        cli::LogLevel::Error => LevelFilter::ERROR,
    };

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(filter).finish(),
    )
    .context("failed to set global default tracing subscriber")
}

/// Loads a request file, validates it, and invokes the director through
/// the given executor.
pub fn run_apply(opts: &cli::ApplyArgs, executor: Arc<dyn CommandExecutor>) -> Result<()> {
    let request = config::load_request(opts.file.as_path())
        .with_context(|| format!("failed to load request from {}", opts.file))?;
    request
        .director
        .validate()
        .context("request validation failed")?;

    let launcher = request.launcher.as_deref().unwrap_or(DEFAULT_LAUNCHER);
    let runner = DirectorRunner::new(launcher, executor);
    runner.run(&request.director)
}

/// Loads and validates a request file without invoking anything.
pub fn run_validate(opts: &cli::ValidateArgs) -> Result<()> {
    let request = config::load_request(opts.file.as_path())?;
    request
        .director
        .validate()
        .context("request validation failed")?;
    info!("validation successful:\n{:#?}", request);
    Ok(())
}
