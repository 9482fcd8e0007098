//! `refine-calc`: print the cost of a guaranteed refine.
//!
//! Usage:
//! ```bash
//! refine-calc --from 4 --to 10 --ori-price 150000 --equip-price 50000 --lang en
//! refine-calc --request crates/refine-data/data/sample_request.toml --json
//! ```
//!
//! Exits with status 2 when the prices are missing or invalid (the
//! placeholder is still printed), and 1 on load or overflow errors.

use std::process::ExitCode;

use clap::Parser;
use refine_cli::{Cli, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("arguments: {cli:?}");

    match run(&cli) {
        Ok(output) => {
            print!("{}", output.text);
            if !output.text.ends_with('\n') {
                println!();
            }
            if output.computed {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
