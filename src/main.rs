use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(&cli);
    debug!("parsed CLI arguments: {cli:?}");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dirtree: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn setup_tracing(cli: &Cli) {
    if let Some(level) = cli.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .without_time()
            .compact()
            .init();
    }
}

/// A root that cannot be opened is reported on stdout and is not an error.
fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let root = match dirtree::build(&cli.path) {
        Ok(root) => root,
        Err(err) => {
            writeln!(out, "dirtree: {err}").context("writing to stdout")?;
            return Ok(());
        }
    };

    if !cli.no_tree {
        write!(out, "{}", root.render(cli.render_depth)).context("writing tree")?;
    }

    for path in root.files_with_suffix(&cli.suffix, cli.depth) {
        writeln!(out, "{path}").context("writing matches")?;
    }

    Ok(())
}
