use clap::Parser;
use env_logger::Env;

use fbscope::cli::{self, Args};

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = cli::execute(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
