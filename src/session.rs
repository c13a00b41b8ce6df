use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::fmt;

pub const MIN_TARGET: i64 = 1;
pub const MAX_TARGET: i64 = 100;
pub const MAX_ATTEMPTS: u32 = 10;

/// Classification of a single guess against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    TooLow,
    TooHigh,
}

impl Outcome {
    #[must_use]
    pub fn classify(guess: i64, target: i64) -> Self {
        match guess.cmp(&target) {
            Ordering::Equal => Self::Correct,
            Ordering::Less => Self::TooLow,
            Ordering::Greater => Self::TooHigh,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Correct => "You have guessed correctly!",
            Self::TooLow => "Higher baby!",
            Self::TooHigh => "Lower baby!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Won,
    Lost,
}

/// One round of the guessing game: a hidden target and a bounded number of attempts.
///
/// `Won` and `Lost` are terminal. Guesses submitted after the session ended are
/// still classified, but neither the attempt counter nor the state moves.
#[derive(Debug, Clone)]
pub struct Session {
    target: i64,
    attempts: u32,
    state: SessionState,
}

impl Session {
    /// Draw the target uniformly from `MIN_TARGET..=MAX_TARGET` using `rng`.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::start(rng.gen_range(MIN_TARGET..=MAX_TARGET))
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(&mut rng)
    }

    /// Start a session with a known target. Returns `None` outside `MIN_TARGET..=MAX_TARGET`.
    #[must_use]
    pub fn with_target(target: i64) -> Option<Self> {
        (MIN_TARGET..=MAX_TARGET)
            .contains(&target)
            .then(|| Self::start(target))
    }

    fn start(target: i64) -> Self {
        Self {
            target,
            attempts: 0,
            state: SessionState::Active,
        }
    }

    pub fn submit_guess(&mut self, value: i64) -> Outcome {
        let outcome = Outcome::classify(value, self.target);
        if self.state != SessionState::Active {
            return outcome;
        }

        self.attempts += 1;
        self.state = match outcome {
            Outcome::Correct => SessionState::Won,
            _ if self.attempts >= MAX_ATTEMPTS => SessionState::Lost,
            _ => SessionState::Active,
        };
        outcome
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == SessionState::Lost
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != SessionState::Active
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> u32 {
        MAX_ATTEMPTS - self.attempts
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_all_pairs() {
        for target in MIN_TARGET..=MAX_TARGET {
            for guess in MIN_TARGET..=MAX_TARGET {
                let expected = if guess == target {
                    Outcome::Correct
                } else if guess < target {
                    Outcome::TooLow
                } else {
                    Outcome::TooHigh
                };
                let mut session = Session::with_target(target).unwrap();
                assert_eq!(
                    session.submit_guess(guess),
                    expected,
                    "guess {guess}, target {target}"
                );
            }
        }
    }

    #[test]
    fn test_new_session_is_active() {
        let session = Session::with_target(42).unwrap();
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert!(!session.is_exhausted());
        assert!(!session.is_over());
    }

    #[test]
    fn test_with_target_rejects_out_of_range() {
        assert!(Session::with_target(0).is_none());
        assert!(Session::with_target(101).is_none());
        assert!(Session::with_target(-5).is_none());
        assert!(Session::with_target(1).is_some());
        assert!(Session::with_target(100).is_some());
    }

    #[test]
    fn test_same_seed_same_target() {
        for seed in [0, 1, 42, 1_700_000_000, u64::MAX] {
            assert_eq!(Session::from_seed(seed).target(), Session::from_seed(seed).target());
        }
    }

    #[test]
    fn test_seeded_targets_stay_in_range() {
        for seed in 0..2_000 {
            let target = Session::from_seed(seed).target();
            assert!((MIN_TARGET..=MAX_TARGET).contains(&target), "seed {seed} gave {target}");
        }
    }

    #[test]
    fn test_seeded_targets_vary() {
        let distinct: std::collections::HashSet<i64> =
            (0..200).map(|seed| Session::from_seed(seed).target()).collect();
        assert!(distinct.len() > 50, "only {} distinct targets", distinct.len());
    }

    #[test]
    fn test_win_on_first_guess() {
        let mut session = Session::with_target(37).unwrap();
        assert_eq!(session.submit_guess(37), Outcome::Correct);
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.attempts(), 1);
        assert!(!session.is_exhausted());
    }

    #[test]
    fn test_wrong_guesses_keep_session_active() {
        let mut session = Session::with_target(50).unwrap();
        assert_eq!(session.submit_guess(10), Outcome::TooLow);
        assert_eq!(session.submit_guess(90), Outcome::TooHigh);
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.attempts(), 2);
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS - 2);
    }

    #[test]
    fn test_lost_after_budget_exhausted() {
        let mut session = Session::with_target(50).unwrap();
        for i in 1..MAX_ATTEMPTS {
            session.submit_guess(1);
            assert_eq!(session.state(), SessionState::Active, "after {i} attempts");
        }
        assert_eq!(session.submit_guess(1), Outcome::TooLow);
        assert_eq!(session.state(), SessionState::Lost);
        assert!(session.is_exhausted());
        assert_eq!(session.attempts(), MAX_ATTEMPTS);
        assert_eq!(session.attempts_remaining(), 0);
    }

    #[test]
    fn test_correct_on_last_attempt_wins() {
        let mut session = Session::with_target(50).unwrap();
        for _ in 1..MAX_ATTEMPTS {
            session.submit_guess(100);
        }
        assert_eq!(session.submit_guess(50), Outcome::Correct);
        assert_eq!(session.state(), SessionState::Won);
        assert!(!session.is_exhausted());
    }

    #[test]
    fn test_terminal_states_do_not_move() {
        let mut won = Session::with_target(5).unwrap();
        won.submit_guess(5);
        assert_eq!(won.submit_guess(6), Outcome::TooHigh);
        assert_eq!(won.state(), SessionState::Won);
        assert_eq!(won.attempts(), 1);

        let mut lost = Session::with_target(5).unwrap();
        for _ in 0..MAX_ATTEMPTS {
            lost.submit_guess(4);
        }
        assert_eq!(lost.submit_guess(5), Outcome::Correct);
        assert_eq!(lost.state(), SessionState::Lost);
        assert_eq!(lost.attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_out_of_range_guesses_are_classified() {
        let mut session = Session::with_target(1).unwrap();
        assert_eq!(session.submit_guess(-100), Outcome::TooLow);
        assert_eq!(session.submit_guess(i64::MAX), Outcome::TooHigh);
        assert_eq!(session.attempts(), 2);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Correct.to_string(), "You have guessed correctly!");
        assert_eq!(Outcome::TooLow.to_string(), "Higher baby!");
        assert_eq!(Outcome::TooHigh.to_string(), "Lower baby!");
    }
}
