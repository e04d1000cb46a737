//! Director invocation through the Equinox launcher.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use super::request::DirectorRequest;
use crate::error::DirectorError;
use crate::executor::{CommandExecutor, CommandSpec, format_command_args};

/// Application id the launcher resolves to the p2 director.
pub const DIRECTOR_APPLICATION_ID: &str = "org.eclipse.equinox.p2.director";

/// Launcher executable used when the request file names none.
pub const DEFAULT_LAUNCHER: &str = "eclipse";

/// Runs director requests through an injected executor.
///
/// Holds the launcher executable name and the execution strategy; the
/// request itself is passed per call so one runner can serve several
/// requests in sequence.
pub struct DirectorRunner {
    launcher: String,
    executor: Arc<dyn CommandExecutor>,
}

impl DirectorRunner {
    /// Creates a runner for the given launcher executable.
    pub fn new(launcher: impl Into<String>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            launcher: launcher.into(),
            executor,
        }
    }

    /// Assembles the argument list for `request` and invokes the director.
    ///
    /// The call blocks until the director completes. Exit status 0 is the
    /// single success sentinel; any other outcome becomes a
    /// [`DirectorError::Director`] carrying the status and the full
    /// rendered argument list.
    pub fn run(&self, request: &DirectorRequest) -> Result<()> {
        let director_args = request
            .build_args()
            .context("failed to assemble director arguments")?;

        let mut args = vec![
            "-nosplash".to_string(),
            "-application".to_string(),
            DIRECTOR_APPLICATION_ID.to_string(),
        ];
        args.extend(director_args.iter().cloned());

        info!(
            launcher = %self.launcher,
            destination = %request.destination,
            "invoking p2 director"
        );

        let spec = CommandSpec::new(self.launcher.clone(), args);
        let result = self
            .executor
            .execute(&spec)
            .with_context(|| format!("failed to execute launcher: {}", self.launcher))?;

        if !result.success() {
            let status = match result.code() {
                Some(code) => format!("exit code {}", code),
                None => "termination by signal".to_string(),
            };
            return Err(DirectorError::Director {
                status,
                command_line: format_command_args(&director_args),
            }
            .into());
        }

        info!("p2 director completed successfully");
        Ok(())
    }
}
