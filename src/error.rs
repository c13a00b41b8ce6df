use std::io;

/// Errors shared by every exercise in the crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Expected {expected}, got {input:?}")]
    Format { input: String, expected: &'static str },
}

impl Error {
    pub fn format(input: &str, expected: &'static str) -> Self {
        Self::Format {
            input: input.to_string(),
            expected,
        }
    }

    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
