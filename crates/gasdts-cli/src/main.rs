mod cli;
mod commands;
mod error;


use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

const LOG_ENV: &str = "GASDTS_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = if cli.print_overrides {
        commands::overrides::print(cli.overrides.as_deref())
    } else {
        commands::generate::run(cli.into())
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
