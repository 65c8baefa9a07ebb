use clap::Parser;
use rankcast::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
