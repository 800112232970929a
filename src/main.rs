//! `nodeconf` — Configuration loader and validator for blockchain node test
//! networks

use clap::Parser;

use nodeconf::cli::args::Cli;
use nodeconf::cli::commands;
use nodeconf::error::ExitCode;
use nodeconf::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
