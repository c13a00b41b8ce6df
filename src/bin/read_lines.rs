use clap::Parser;
use guessing_game::cli::{ReadLinesCli, resolve_path, run_read_lines};
use guessing_game::{debug_log, logging};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = ReadLinesCli::parse();
    logging::init();

    let result = resolve_path(cli.path).and_then(|path| {
        debug_log!("Reading {}", path.display());
        run_read_lines(&path, &mut io::stdout())
    });
    match result {
        Ok(count) => {
            debug_log!("Printed {count} lines");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
