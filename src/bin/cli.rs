// src/bin/cli.rs
use pokebox::cli;

fn main() {
    if let Err(e) = color_eyre::install() {
        eprintln!("Report handler failed to install: {e}");
    }
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
