// Library interface for the guessing game and its companion exercises
// The binaries in src/main.rs and src/bin/ are thin wrappers around these modules

pub mod cli;
pub mod error;
pub mod files;
pub mod game_state;
pub mod grade;
pub mod input;
pub mod logging;
pub mod session;
pub mod tui;

// Re-export commonly used items for the binaries and integration tests
pub use error::{Error, Result};
pub use files::{read_lines, write_text};
pub use game_state::{GameInterface, InputPolicy, UserAction, play};
pub use grade::{Grade, classify};
pub use input::{parse_guess, parse_score, read_line};
pub use session::{MAX_ATTEMPTS, Outcome, Session, SessionState};
