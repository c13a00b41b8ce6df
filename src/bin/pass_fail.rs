use clap::Parser;
use guessing_game::cli::{GradeCli, run_grade};
use guessing_game::{debug_log, logging};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _cli = GradeCli::parse();
    logging::init();

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    match run_grade(&mut stdin, &mut stdout) {
        Ok(grade) => {
            debug_log!("Classified as {grade:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
