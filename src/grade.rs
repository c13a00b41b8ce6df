use std::fmt;

pub const PERFECT_SCORE: f64 = 100.0;
pub const PASSING_SCORE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Perfect,
    Pass,
    Fail,
}

impl Grade {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect!",
            Self::Pass => "You pass.",
            Self::Fail => "You fail!",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Anything at or above the passing score is a pass, including scores over 100.
#[must_use]
pub fn classify(score: f64) -> Grade {
    if score == PERFECT_SCORE {
        Grade::Perfect
    } else if score >= PASSING_SCORE {
        Grade::Pass
    } else {
        Grade::Fail
    }
}
