use std::process;

use clap::Parser;

use budget_pulse::{cli::Args, init};

fn main() {
    init();

    let args = Args::parse();
    if let Err(err) = args.validate().and_then(|()| budget_pulse::cli::run(args)) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
