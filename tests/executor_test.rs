use rsdirector::executor::{CommandExecutor, CommandSpec, RealCommandExecutor};

#[test]
fn dry_run_skips_command_lookup() {
    let executor = RealCommandExecutor { dry_run: true };
    let spec = CommandSpec::new("definitely-not-a-command", Vec::new());

    let result = executor
        .execute(&spec)
        .expect("dry run should not require command to exist");
    assert!(result.status.is_none(), "dry run result should not have an exit status");
    assert!(result.success(), "dry run counts as success");
}

#[test]
fn non_dry_run_fails_for_nonexistent_command() {
    let executor = RealCommandExecutor { dry_run: false };
    let spec = CommandSpec::new("this-command-should-not-exist", Vec::new());

    let result = executor.execute(&spec);

    assert!(result.is_err());
    if let Err(e) = result {
        let msg = e.to_string();
        assert!(
            msg.contains("not found in PATH"),
            "Expected 'not found in PATH' in error, got: {}",
            msg
        );
        let typed = e.downcast_ref::<rsdirector::DirectorError>();
        assert!(typed.is_some(), "Expected DirectorError, got: {:#}", e);
        assert!(
            matches!(typed.unwrap(), rsdirector::DirectorError::CommandNotFound { .. }),
            "Expected CommandNotFound variant, got: {:?}",
            typed.unwrap()
        );
    }
}

#[test]
fn real_command_reports_exit_status() {
    let executor = RealCommandExecutor { dry_run: false };

    let spec = CommandSpec::new("true", Vec::new());
    let result = executor.execute(&spec).expect("true should execute");
    assert!(result.success());
    assert_eq!(result.code(), Some(0));

    let spec = CommandSpec::new("false", Vec::new());
    let result = executor.execute(&spec).expect("false should execute");
    assert!(!result.success());
    assert_eq!(result.code(), Some(1));
}
