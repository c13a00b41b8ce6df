use clap::Parser;
use guessing_game::cli::{CliInterface, GuessCli};
use guessing_game::tui::TuiInterface;
use guessing_game::{InputPolicy, Result, Session, info_log, logging, play};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = GuessCli::parse();
    // The TUI owns the screen, so stderr logging would corrupt it
    if !cli.tui {
        logging::init();
    }

    let seed = cli.seed.unwrap_or_else(wall_clock_seed);
    info_log!("Using seed {seed}");
    let mut session = Session::from_seed(seed);

    let result = if cli.tui {
        run_tui(&mut session, cli.on_invalid)
    } else {
        play(&mut session, &mut CliInterface::stdio(), cli.on_invalid).map(|_| ())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn wall_clock_seed() -> u64 {
    // Pre-1970 clocks fall back to seed 0
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default()
}

fn run_tui(session: &mut Session, policy: InputPolicy) -> Result<()> {
    let mut tui = TuiInterface::new()?;
    let result = play(session, &mut tui, policy);
    tui.cleanup()?;
    result.map(|_| ())
}
