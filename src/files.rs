use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "exercise.txt";
pub const DEFAULT_TEXT: &str = "Hey there, comment ça va?";

/// `exercise.txt` in the home directory, if one can be determined.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_FILE_NAME))
}

/// Read every line of `path` in file order, without `\n` / `\r\n` terminators.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.split(b'\n') {
        let mut bytes = line?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        lines.push(String::from_utf8_lossy(&bytes).into_owned());
    }
    Ok(lines)
}

/// Create (or truncate) `path` and write `text` to it as-is.
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[must_use]
pub fn format_line(index: usize, line: &str) -> String {
    format!("Line {index}: {line}")
}
