use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;
use std::sync::Mutex;

use anyhow::Result;
use rsdirector::director::DirectorRequest;
use rsdirector::executor::{CommandExecutor, CommandSpec, ExecutionResult};

/// Test helper to deserialize a DirectorRequest from inline YAML.
#[allow(dead_code)]
pub fn request_from_yaml(yaml: &str) -> Result<DirectorRequest> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Test helper to create a request with only the required destination set.
#[allow(dead_code)]
pub fn minimal_request(destination: &str) -> DirectorRequest {
    request_from_yaml(&format!("destination: {}", destination))
        .expect("minimal request should deserialize")
}

/// Executor double that records every spec and returns a fixed exit code.
#[allow(dead_code)]
pub struct MockExecutor {
    pub exit_code: i32,
    pub calls: Mutex<Vec<CommandSpec>>,
}

#[allow(dead_code)]
impl MockExecutor {
    pub fn with_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns the argument list of the single recorded invocation.
    pub fn single_call(&self) -> CommandSpec {
        let calls = self.calls.lock().unwrap();
        assert_eq!(calls.len(), 1, "expected exactly one invocation");
        calls[0].clone()
    }
}

impl CommandExecutor for MockExecutor {
    fn execute(&self, spec: &CommandSpec) -> Result<ExecutionResult> {
        self.calls.lock().unwrap().push(spec.clone());
        // Unix wait status encoding: exit code in the high byte.
        Ok(ExecutionResult {
            status: Some(ExitStatus::from_raw(self.exit_code << 8)),
        })
    }
}
