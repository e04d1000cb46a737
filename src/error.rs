//! Domain-specific error types for rsdirector.
//!
//! This module defines `DirectorError`, a `thiserror`-based enum with typed
//! variants for the failure modes of the crate. Public API functions return
//! `Result<T, DirectorError>` where the caller may want to match on the
//! kind, while boundaries that only propagate use `anyhow::Result`.

use std::io;

/// Formats an IO error kind into a human-readable message.
///
/// Provides consistent messages for common IO error kinds instead of the
/// OS-level ones (e.g., "No such file or directory (os error 2)"). For
/// unrecognized kinds, falls back to the OS-level message.
pub(crate) fn io_error_kind_message(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "I/O error: not found".to_string(),
        io::ErrorKind::PermissionDenied => "I/O error: permission denied".to_string(),
        io::ErrorKind::IsADirectory => "I/O error: is a directory".to_string(),
        _ => format!("I/O error: {}", err),
    }
}

/// Domain-specific error type for rsdirector.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DirectorError {
    /// A request field failed validation before the director was invoked
    /// (e.g., a profile property entry without `=`).
    #[error("validation error: {0}")]
    Validation(String),

    /// The director application returned a non-OK status.
    ///
    /// Carries the full rendered argument list so the failing invocation
    /// can be reproduced outside the tool.
    #[error("p2 director application failed with {status}. Program arguments were: {command_line}")]
    Director {
        /// Human-readable status: exit code or signal description.
        status: String,
        /// The argument list the director was invoked with, debug-quoted.
        command_line: String,
    },

    /// The launcher executable could not be found on PATH.
    #[error("launcher not found in PATH: {command}")]
    CommandNotFound {
        /// The command that was looked up.
        command: String,
    },

    /// A command could not be spawned or waited on.
    #[error("command execution failed: {command}: {status}")]
    Execution {
        /// The command that was executed.
        command: String,
        /// Description of the failure.
        status: String,
    },

    /// A request file could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O operation failed with contextual information.
    #[error("{context}: {message}")]
    Io {
        /// A file path or an operation description with a path.
        context: String,
        /// Human-readable description derived from [`io_error_kind_message`].
        message: String,
        /// The underlying I/O error, preserved for programmatic inspection.
        #[source]
        source: std::io::Error,
    },
}

impl DirectorError {
    /// Creates an `Io` variant with the `message` field derived from the
    /// `source` via [`io_error_kind_message`].
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            message: io_error_kind_message(&source),
            source,
        }
    }
}
