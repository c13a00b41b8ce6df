use crate::error::{Error, Result};
use crate::files::{format_line, read_lines, write_text};
use crate::game_state::{GameInterface, InputPolicy, UserAction};
use crate::grade::{Grade, classify};
use crate::input::{parse_guess, parse_score, read_line};
use crate::session::Outcome;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Guess a number between 1 and 100 in at most 10 attempts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct GuessCli {
    /// Seed for the secret number; defaults to the current Unix time
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// What to do when a guess is not a whole number
    #[arg(long = "on-invalid", value_enum, default_value_t = InputPolicy::Abort)]
    pub on_invalid: InputPolicy,

    /// Play in the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

/// Report whether a grade is passing or failing
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct GradeCli {}

/// Print every line of a text file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ReadLinesCli {
    /// File to read; defaults to ~/exercise.txt
    pub path: Option<PathBuf>,
}

/// Write a line of text to a file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct WriteFileCli {
    /// File to write; defaults to ~/exercise.txt
    pub path: Option<PathBuf>,

    /// Text to write
    #[arg(short, long)]
    pub text: Option<String>,
}

pub const GUESS_PROMPT: &str = "Can you guess which number it is?";
pub const GRADE_PROMPT: &str = "Enter a grade: ";
pub const LOST_MESSAGE: &str = "You have ran out of guesses. Good day to you, Sir!";
pub const INVALID_GUESS_MESSAGE: &str = "You must enter a number!";

/// Line-based implementation of `GameInterface`.
///
/// Reads guesses from any `BufRead` and writes prompts and feedback to any `Write`,
/// so the same code serves stdin/stdout and in-memory buffers in tests.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl CliInterface<io::StdinLock<'static>, io::Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_action(&mut self) -> Result<UserAction> {
        writeln!(self.writer, "{GUESS_PROMPT}")?;
        self.writer.flush()?;
        let line = read_line(&mut self.reader)?;
        parse_guess(&line).map(UserAction::Guess)
    }

    fn display_outcome(&mut self, outcome: Outcome) -> Result<()> {
        writeln!(self.writer, "{outcome}")?;
        Ok(())
    }

    fn display_invalid_input(&mut self, error: &Error) -> Result<()> {
        writeln!(self.writer, "{INVALID_GUESS_MESSAGE} ({error})")?;
        Ok(())
    }

    fn display_lost(&mut self) -> Result<()> {
        writeln!(self.writer, "{LOST_MESSAGE}")?;
        Ok(())
    }
}

/// Prompt for a score, classify it, and print the verdict.
pub fn run_grade<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<Grade> {
    write!(writer, "{GRADE_PROMPT}")?;
    writer.flush()?;
    let line = read_line(reader)?;
    let grade = classify(parse_score(&line)?);
    writeln!(writer, "{grade}")?;
    Ok(grade)
}

/// Print every line of `path` as `Line N: text`. Returns the number of lines.
pub fn run_read_lines<W: Write>(path: &Path, writer: &mut W) -> Result<usize> {
    let lines = read_lines(path)?;
    for (i, line) in lines.iter().enumerate() {
        writeln!(writer, "{}", format_line(i, line))?;
    }
    Ok(lines.len())
}

pub fn run_write_file<W: Write>(path: &Path, text: &str, writer: &mut W) -> Result<()> {
    write_text(path, text)?;
    writeln!(writer, "Wrote {} bytes to {}", text.len(), path.display())?;
    Ok(())
}

/// Resolve an optional path argument, falling back to the home-directory default.
pub fn resolve_path(path: Option<PathBuf>) -> Result<PathBuf> {
    path.or_else(crate::files::default_path).ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no path given and no home directory found").into()
    })
}
