use std::io;
use std::process;
use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::error;

use rsdirector::cli::{Cli, Commands};
use rsdirector::executor::RealCommandExecutor;
use rsdirector::{init_logging, run_apply, run_validate};

fn main() -> Result<()> {
    let args = Cli::parse();

    match &args.command {
        Commands::Apply(opts) => {
            init_logging(opts.log_level)?;
            let executor = Arc::new(RealCommandExecutor {
                dry_run: opts.dry_run,
            });
            if let Err(e) = run_apply(opts, executor) {
                error!("{:#}", e);
                process::exit(1);
            }
        }
        Commands::Validate(opts) => {
            init_logging(opts.log_level)?;
            if let Err(e) = run_validate(opts) {
                error!("{:#}", e);
                process::exit(1);
            }
        }
        Commands::Completions(opts) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opts.shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}
