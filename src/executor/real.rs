//! Real command executor implementation.
//!
//! Executes commands through `std::process::Command`, streaming stdout and
//! stderr into the log in real time so director progress output is visible
//! while the (potentially long) provisioning call runs.

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::thread;

use anyhow::{Context, Result};
use which::which;

use super::{CommandExecutor, CommandSpec, ExecutionResult, format_command_args};
use crate::error::DirectorError;

/// Log stream origin, used as a structured field on streamed lines.
#[derive(Clone, Copy)]
enum StreamKind {
    Stdout,
    Stderr,
}

impl StreamKind {
    fn name(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

/// Reads a pipe line by line and logs each line as it arrives.
///
/// stdout is logged at INFO, stderr at WARN. Streaming is best-effort:
/// read errors stop the loop but never fail the command, whose outcome is
/// the exit status alone. Lossy UTF-8 conversion handles binary output.
fn stream_to_log<R: Read>(pipe: Option<R>, kind: StreamKind) {
    let Some(pipe) = pipe else {
        tracing::error!(stream = kind.name(), "pipe was not captured, output is lost");
        return;
    };
    for line in BufReader::new(pipe).split(b'\n') {
        match line {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                let text = text.trim_end_matches('\r');
                match kind {
                    StreamKind::Stdout => tracing::info!(stream = "stdout", "{}", text),
                    StreamKind::Stderr => tracing::warn!(stream = "stderr", "{}", text),
                }
            }
            Err(e) => {
                tracing::error!(stream = kind.name(), error = %e, "I/O error, stopping read");
                break;
            }
        }
    }
}

/// Command executor that runs actual system commands.
///
/// When `dry_run` is true, commands are logged but not executed, and
/// `execute()` returns `Ok(ExecutionResult { status: None })`.
pub struct RealCommandExecutor {
    pub dry_run: bool,
}

impl CommandExecutor for RealCommandExecutor {
    fn execute(&self, spec: &CommandSpec) -> Result<ExecutionResult> {
        if self.dry_run {
            tracing::info!("dry run: {} {}", spec.command, format_command_args(&spec.args));
            return Ok(ExecutionResult { status: None });
        }

        let resolved = which(&spec.command).map_err(|_| DirectorError::CommandNotFound {
            command: spec.command.clone(),
        })?;
        tracing::trace!("command found: {}: {}", spec.command, resolved.to_string_lossy());

        let mut child = Command::new(resolved)
            .args(&spec.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| DirectorError::Execution {
                command: spec.command.clone(),
                status: format!("failed to spawn: {}", e),
            })?;

        tracing::trace!("spawned command: {}: pid={}", spec.command, child.id());

        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();

        let status = thread::scope(|scope| {
            scope.spawn(|| stream_to_log(stdout_pipe, StreamKind::Stdout));
            scope.spawn(|| stream_to_log(stderr_pipe, StreamKind::Stderr));
            child.wait()
        })
        .with_context(|| format!("failed to wait for command: {}", spec.command))?;

        tracing::trace!("executed command: {}: success={}", spec.command, status.success());

        Ok(ExecutionResult {
            status: Some(status),
        })
    }
}
