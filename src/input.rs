use crate::error::{Error, Result};
use std::io::{self, BufRead};

/// Read one line from `reader`, without the trailing newline.
///
/// A closed stream is reported as `UnexpectedEof` rather than an empty line,
/// so callers never mistake end of input for a blank answer.
pub fn read_line<R: BufRead + ?Sized>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed").into());
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

pub fn parse_guess(text: &str) -> Result<i64> {
    let text = text.trim();
    text.parse().map_err(|_| Error::format(text, "a whole number"))
}

pub fn parse_score(text: &str) -> Result<f64> {
    let text = text.trim();
    text.parse().map_err(|_| Error::format(text, "a number"))
}
