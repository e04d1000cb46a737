//! Tests for shell completion functionality.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use rsdirector::cli::{Cli, Commands};

/// Test parsing the completions command for all supported shells.
#[test]
fn test_completions_command_parsing() -> Result<()> {
    let shells = [
        ("bash", Shell::Bash),
        ("zsh", Shell::Zsh),
        ("fish", Shell::Fish),
        ("powershell", Shell::PowerShell),
        ("elvish", Shell::Elvish),
    ];

    for (shell_str, expected_shell) in shells {
        let args = Cli::parse_from(["rsdirector", "completions", shell_str]);
        match args.command {
            Commands::Completions(opts) => {
                assert_eq!(opts.shell, expected_shell, "Mismatched shell for '{}'", shell_str);
            }
            _ => panic!("Expected Completions command for shell '{}'", shell_str),
        }
    }

    Ok(())
}

/// Test that completion generation doesn't panic for any supported shell.
#[test]
fn test_completions_generation() -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let mut buffer = Vec::new();

    for shell in Shell::value_variants() {
        buffer.clear();
        generate(*shell, &mut cmd, "rsdirector", &mut buffer);
        assert!(!buffer.is_empty(), "Generated completion for {:?} was empty", shell);
    }

    Ok(())
}

/// Test that generated bash completions mention the subcommands.
#[test]
fn test_completion_contents() -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let mut buffer = Vec::new();
    generate(Shell::Bash, &mut cmd, "rsdirector", &mut buffer);
    let script = String::from_utf8(buffer)?;

    assert!(script.contains("apply"));
    assert!(script.contains("validate"));
    assert!(script.contains("completions"));
    Ok(())
}
