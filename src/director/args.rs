//! Argument list builder for p2 director invocations.
//!
//! The director application takes single-dash flags, each followed by at
//! most one value token. Absent options produce no tokens at all, so the
//! builder only appends when there is something to say.

/// Builder for assembling the ordered director argument list.
#[derive(Debug, Default)]
pub struct DirectorArgsBuilder {
    args: Vec<String>,
}

impl DirectorArgsBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Append a bare flag with no value.
    pub fn push_flag(&mut self, flag: &str) {
        self.args.push(flag.to_string());
    }

    /// Append a bare flag only when `enabled` is true.
    ///
    /// A false boolean option leaves no trace in the argument list.
    pub fn push_flag_if(&mut self, flag: &str, enabled: bool) {
        if enabled {
            self.push_flag(flag);
        }
    }

    /// Append a flag with a value token if the value is non-empty.
    pub fn push_scalar(&mut self, flag: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.args.push(flag.to_string());
        self.args.push(value.to_string());
    }

    /// Append a flag with an optional value, skipping absent values.
    pub fn push_opt_scalar(&mut self, flag: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push_scalar(flag, value);
        }
    }

    /// Append a flag whose value is a comma-joined list, skipping empty lists.
    pub fn push_comma_joined(&mut self, flag: &str, values: &[String]) {
        if values.is_empty() {
            return;
        }
        self.push_scalar(flag, &values.join(","));
    }

    /// Append a tri-state flag: `None` emits nothing, `Some("")` emits the
    /// bare flag, `Some(path)` emits flag and value.
    ///
    /// The director treats the bare form as "use the default shared
    /// location" (`~/.p2`), which is distinct from omitting the flag.
    pub fn push_tri_state(&mut self, flag: &str, value: Option<&str>) {
        match value {
            None => {}
            Some("") => self.push_flag(flag),
            Some(path) => self.push_scalar(flag, path),
        }
    }

    /// Return the collected arguments.
    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}
