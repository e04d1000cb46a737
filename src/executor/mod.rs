//! Command execution abstraction for rsdirector.
//!
//! This module provides:
//! - [`CommandSpec`]: Specification for commands to execute
//! - [`ExecutionResult`]: Result of command execution
//! - [`CommandExecutor`]: Trait for command execution strategies
//! - [`RealCommandExecutor`]: Production implementation using `std::process::Command`
//!
//! The trait is the seam that decouples argument assembly from execution:
//! tests inject a mock and assert on the exact argument tokens without a
//! launcher installed.

mod real;

use std::process::ExitStatus;

use anyhow::Result;

pub use real::RealCommandExecutor;

/// Formats string arguments into a space-separated, debug-quoted string.
///
/// Used by error messages and dry-run output so a failing invocation can be
/// copied back onto a shell line (e.g., `"-destination" "/opt/app"`).
pub fn format_command_args(args: &[String]) -> String {
    args.iter()
        .map(|a| format!("{:?}", a))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Specification for a command to be executed
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// The command to execute (e.g., "eclipse")
    pub command: String,
    /// Command arguments
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Creates a new CommandSpec with command and args
    #[must_use]
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

/// Result of command execution
#[derive(Debug)]
pub struct ExecutionResult {
    /// Exit status of the command (None in dry-run mode)
    pub status: Option<ExitStatus>,
}

impl ExecutionResult {
    /// Returns true if the command executed successfully.
    ///
    /// In dry-run mode (status is None), this always returns true.
    pub fn success(&self) -> bool {
        self.status.is_none_or(|s| s.success())
    }

    /// Returns the exit code if available
    pub fn code(&self) -> Option<i32> {
        self.status.and_then(|s| s.code())
    }
}

/// Trait for command execution.
///
/// Implementations must be `Send + Sync` so the executor can be shared as
/// an `Arc<dyn CommandExecutor>` across the output-streaming threads.
pub trait CommandExecutor: Send + Sync {
    /// Executes a command with the given specification.
    fn execute(&self, spec: &CommandSpec) -> Result<ExecutionResult>;
}
