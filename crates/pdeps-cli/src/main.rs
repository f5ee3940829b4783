//! pdeps CLI binary.
//!
//! This is the entry point for the `pdeps` command-line tool. It parses
//! arguments with `clap`, initializes logging via `tracing`, and prints the
//! immediate dependencies of the requested package.

mod cli;
mod report;
mod resolve;

use miette::Result;

fn main() -> Result<()> {
    let args = cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    resolve::exec(args)
}
