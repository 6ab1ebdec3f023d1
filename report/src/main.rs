use std::process::ExitCode;

use chrono::{Local, SubsecRound};
use clap::Parser;
use report::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level())
        .init();

    let almanac = almanac::Almanac::default();
    let now = Local::now().naive_local().trunc_subsecs(0);
    match report::run(&args, &almanac, now, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
