use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};

#[derive(Parser)]
#[command(
    name = "pr-commit",
    version,
    about = "Fail if any filename or line contains the fifth glyph"
)]
struct Cli {
    /// Print each violation found.
    #[arg(long)]
    log: bool,

    /// Filenames to process.
    filenames: Vec<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let env = Env::new()
        .filter_or("PR_COMMIT_LOG", "warn")
        .write_style("PR_COMMIT_LOG_STYLE");
    Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let code = pr_commit::run(&cli.filenames, cli.log)?;
    Ok(ExitCode::from(code))
}
