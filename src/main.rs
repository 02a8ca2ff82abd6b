use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

use movie_battle::cli;

fn main() {
    // Logs go to stderr; stdout carries only battle output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_battle=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run_with_args(&args));
}
