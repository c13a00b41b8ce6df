//! TUI (Terminal User Interface) front end for the guessing game
//!
//! `TuiInterface` implements `GameInterface` with Ratatui, so `game_state::play`
//! drives it exactly like the line-based interface.
//!
//! # State Machine
//! - `EnteringGuess` → `EnteringGuess` after each wrong guess
//! - `EnteringGuess` → `Finished` once the session is won or lost
//! - `Finished` waits for any key, then control returns to the caller

use crate::cli::{GUESS_PROMPT, INVALID_GUESS_MESSAGE, LOST_MESSAGE};
use crate::error::{Error, Result};
use crate::game_state::{GameInterface, UserAction};
use crate::input::parse_guess;
use crate::session::{MAX_ATTEMPTS, MAX_TARGET, MIN_TARGET, Outcome};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

// Enough for "-" plus every digit of i64::MIN
const MAX_INPUT_LEN: usize = 20;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    Finished,
}

/// Groups the borrowed fields the renderer needs, keeping `terminal` free for `draw`.
struct RenderContext<'a> {
    history: &'a [(i64, Outcome)],
    current_input: &'a str,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
}

pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    history: Vec<(i64, Outcome)>,
    current_input: String,
    pending_guess: Option<i64>,
    state: TuiState,
    message: String,
    error_message: String,
}

impl TuiInterface {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = restore_on_error(Self::enter_screen(), restore_terminal)?;

        Ok(Self {
            terminal,
            history: Vec::new(),
            current_input: String::new(),
            pending_guess: None,
            state: TuiState::EnteringGuess,
            message: GUESS_PROMPT.to_string(),
            error_message: String::new(),
        })
    }

    fn enter_screen() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    /// Restore the terminal. Call before exiting, also when the game failed.
    pub fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }

    fn draw(&mut self) -> io::Result<()> {
        let ctx = RenderContext {
            history: &self.history,
            current_input: &self.current_input,
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
        };
        self.terminal.draw(|f| render(f, &ctx))?;
        Ok(())
    }

    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }

    fn finish(&mut self, message: String) -> Result<()> {
        self.state = TuiState::Finished;
        self.message = message;
        self.error_message.clear();
        self.draw()?;
        self.next_key()?;
        Ok(())
    }
}

impl GameInterface for TuiInterface {
    fn read_action(&mut self) -> Result<UserAction> {
        self.current_input.clear();
        loop {
            self.draw()?;
            let key = self.next_key()?;
            match key.code {
                KeyCode::Esc => return Ok(UserAction::Exit),
                // Raw mode swallows SIGINT
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(UserAction::Exit);
                }
                KeyCode::Enter if !self.current_input.is_empty() => {
                    let guess = parse_guess(&self.current_input)?;
                    self.pending_guess = Some(guess);
                    self.error_message.clear();
                    return Ok(UserAction::Guess(guess));
                }
                KeyCode::Backspace => {
                    self.current_input.pop();
                }
                KeyCode::Char('-') if self.current_input.is_empty() => {
                    self.current_input.push('-');
                }
                KeyCode::Char(c)
                    if c.is_ascii_digit() && self.current_input.len() < MAX_INPUT_LEN =>
                {
                    self.current_input.push(c);
                }
                _ => {}
            }
        }
    }

    fn display_outcome(&mut self, outcome: Outcome) -> Result<()> {
        if let Some(guess) = self.pending_guess.take() {
            self.history.push((guess, outcome));
        }
        self.current_input.clear();
        match outcome {
            Outcome::Correct => self.finish(format!("{outcome} Press any key to exit.")),
            Outcome::TooLow | Outcome::TooHigh => {
                self.message = format!("{outcome} {GUESS_PROMPT}");
                Ok(())
            }
        }
    }

    fn display_invalid_input(&mut self, error: &Error) -> Result<()> {
        self.error_message = format!("{INVALID_GUESS_MESSAGE} ({error})");
        Ok(())
    }

    fn display_lost(&mut self) -> Result<()> {
        self.finish(format!("{LOST_MESSAGE} Press any key to exit."))
    }
}

/// Best-effort reset used when setup fails halfway; the setup error is what gets reported.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

fn restore_on_error<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

fn render(f: &mut Frame, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(MAX_ATTEMPTS as u16 + 2),
            Constraint::Length(3),
            Constraint::Length(5),
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_history(f, chunks[1], ctx.history);
    render_input(f, chunks[2], ctx);
    render_status(f, chunks[3], ctx);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!("Guess the number ({MIN_TARGET}-{MAX_TARGET})"),
        HEADER_STYLE,
    )))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_history(f: &mut Frame, area: Rect, history: &[(i64, Outcome)]) {
    let lines: Vec<Line> = history
        .iter()
        .enumerate()
        .map(|(i, (guess, outcome))| {
            let style = match outcome {
                Outcome::Correct => SUCCESS_STYLE,
                Outcome::TooLow | Outcome::TooHigh => INFO_STYLE,
            };
            Line::from(vec![
                Span::raw(format!("{:>2}. {guess:>4}  ", i + 1)),
                Span::styled(outcome.message(), style),
            ])
        })
        .collect();

    let title = format!(" Attempts {}/{MAX_ATTEMPTS} ", history.len());
    let widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}

fn render_input(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let text = match ctx.state {
        TuiState::EnteringGuess => format!("> {}_", ctx.current_input),
        TuiState::Finished => String::new(),
    };
    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Your guess "));
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let mut lines = vec![Line::from(Span::styled(ctx.message, MESSAGE_STYLE))];
    if !ctx.error_message.is_empty() {
        lines.push(Line::from(Span::styled(ctx.error_message, ERROR_STYLE)));
    } else if ctx.state == TuiState::EnteringGuess {
        lines.push(Line::from("Enter to submit, Esc to quit"));
    }
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}
