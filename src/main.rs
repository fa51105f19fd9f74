use clap::Parser;
use edaphic_query::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(error) = commands::run(args) {
        // Print to stderr and exit with an error code
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
