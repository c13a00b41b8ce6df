use clap::Parser;
use guessing_game::cli::{WriteFileCli, resolve_path, run_write_file};
use guessing_game::files::DEFAULT_TEXT;
use guessing_game::{debug_log, logging};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = WriteFileCli::parse();
    logging::init();

    let text = cli.text.as_deref().unwrap_or(DEFAULT_TEXT);
    let result = resolve_path(cli.path).and_then(|path| {
        debug_log!("Writing to {}", path.display());
        run_write_file(&path, text, &mut io::stdout())
    });
    if let Err(e) = result {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
