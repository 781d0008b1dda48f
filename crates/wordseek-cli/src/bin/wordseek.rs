//! Command-line word-search generator and player.

use std::process;

use clap::Parser as _;
use wordseek_cli::Args;

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = wordseek_cli::run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
