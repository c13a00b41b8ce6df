use crate::error::{Error, Result};
use crate::session::{Outcome, Session, SessionState};
use crate::{debug_log, info_log};

/// What the player asked for on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Guess(i64),
    Exit,
}

/// What the game loop does when a guess cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputPolicy {
    /// Stop the game and hand the error to the caller.
    #[default]
    Abort,
    /// Report the problem and ask again; the attempt is not counted.
    Retry,
}

/// Front end for one guessing session.
///
/// Implemented by the line-based `CliInterface` and the full-screen `TuiInterface`.
pub trait GameInterface {
    /// Prompt for and return the next action. Malformed numbers come back as `Error::Format`.
    fn read_action(&mut self) -> Result<UserAction>;

    fn display_outcome(&mut self, outcome: Outcome) -> Result<()>;

    fn display_invalid_input(&mut self, error: &Error) -> Result<()>;

    fn display_lost(&mut self) -> Result<()>;
}

/// Drive `session` until it is won, lost, or the player exits.
///
/// Returns the state the session ended in; `Active` means the player left early.
pub fn play<I: GameInterface + ?Sized>(
    session: &mut Session,
    interface: &mut I,
    policy: InputPolicy,
) -> Result<SessionState> {
    info_log!(
        "Starting session: {} attempts, policy {:?}",
        session.attempts_remaining(),
        policy
    );

    while !session.is_over() {
        let guess = match interface.read_action() {
            Ok(UserAction::Guess(guess)) => guess,
            Ok(UserAction::Exit) => {
                info_log!("Player exited after {} attempts", session.attempts());
                break;
            }
            Err(err) if err.is_format() && policy == InputPolicy::Retry => {
                debug_log!("Rejected input: {}", err);
                interface.display_invalid_input(&err)?;
                continue;
            }
            Err(err) => return Err(err),
        };

        let outcome = session.submit_guess(guess);
        debug_log!(
            "Attempt {}: guess {} -> {:?}",
            session.attempts(),
            guess,
            outcome
        );
        interface.display_outcome(outcome)?;

        if session.is_exhausted() {
            interface.display_lost()?;
        }
    }

    info_log!("Session ended: {:?}", session.state());
    Ok(session.state())
}
