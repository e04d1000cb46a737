//! End-to-end tests for `run_apply`: request file in, director invocation out.

mod helpers;

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use rsdirector::cli::{ApplyArgs, LogLevel};
use rsdirector::director::DIRECTOR_APPLICATION_ID;
use rsdirector::run_apply;
use tempfile::NamedTempFile;

use helpers::MockExecutor;

fn apply_args(file: &NamedTempFile) -> Result<ApplyArgs> {
    Ok(ApplyArgs {
        file: camino::Utf8PathBuf::try_from(file.path().to_path_buf())?,
        log_level: LogLevel::Info,
        dry_run: false,
    })
}

#[test]
fn apply_invokes_director_with_assembled_args() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"---
director:
  destination: /opt/app
  install_ius: "my.feature/1.2.3"
"#,
    )?;

    let executor = Arc::new(MockExecutor::with_exit_code(0));
    run_apply(&apply_args(&file)?, executor.clone())?;

    let spec = executor.single_call();
    assert_eq!(spec.command, "eclipse");
    assert_eq!(
        spec.args,
        vec![
            "-nosplash",
            "-application",
            DIRECTOR_APPLICATION_ID,
            "-destination",
            "/opt/app",
            "-installIU",
            "my.feature/1.2.3",
        ]
    );
    Ok(())
}

#[test]
fn apply_honors_configured_launcher() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"---
launcher: /opt/eclipse/eclipse
director:
  destination: /opt/app
"#,
    )?;

    let executor = Arc::new(MockExecutor::with_exit_code(0));
    run_apply(&apply_args(&file)?, executor.clone())?;

    assert_eq!(executor.single_call().command, "/opt/eclipse/eclipse");
    Ok(())
}

#[test]
fn apply_fails_on_non_ok_status() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"---
director:
  destination: /opt/app
"#,
    )?;

    let executor = Arc::new(MockExecutor::with_exit_code(13));
    let err = run_apply(&apply_args(&file)?, executor).unwrap_err();

    let msg = format!("{:#}", err);
    assert!(msg.contains("exit code 13"), "got: {}", msg);
    assert!(msg.contains("\"-destination\""), "got: {}", msg);
    Ok(())
}

#[test]
fn apply_rejects_invalid_request_before_invoking() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"---
director:
  destination: /opt/app
  repositories: "not a url"
"#,
    )?;

    let executor = Arc::new(MockExecutor::with_exit_code(0));
    let err = run_apply(&apply_args(&file)?, executor.clone()).unwrap_err();

    assert!(format!("{:#}", err).contains("validation failed"));
    assert!(executor.calls.lock().unwrap().is_empty());
    Ok(())
}
