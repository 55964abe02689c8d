//! Line-oriented data files.
//!
//! A label file holds one numeric label per line and a tweet file one
//! example per line; line `i` of one matches line `i` of the other. Blank
//! lines are skipped in both so trailing newlines do not shift the pairing.

use crate::error::{Result, TweetsenseError};
use crate::primitives::Vector;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads one numeric value per non-blank line.
///
/// # Errors
///
/// Returns [`TweetsenseError::Io`] if the file cannot be read and
/// [`TweetsenseError::Parse`] (with the 1-based line number) for a line that
/// is not a number.
pub fn read_vector_file(path: impl AsRef<Path>) -> Result<Vector<f32>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut values = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        if let Some(value) = parse_label_line(&line?, i + 1)? {
            values.push(value);
        }
    }
    tracing::debug!(path = %path.as_ref().display(), n = values.len(), "read labels");
    Ok(Vector::from_vec(values))
}

/// Parses label text held in memory, with the same rules as [`read_vector_file`].
///
/// # Errors
///
/// Returns [`TweetsenseError::Parse`] for a line that is not a number.
///
/// # Examples
///
/// ```
/// use tweetsense::data::parse_labels;
///
/// let y = parse_labels("1\n-1\n\n1.0\n").unwrap();
/// assert_eq!(y.as_slice(), &[1.0, -1.0, 1.0]);
/// assert!(parse_labels("1\npositive\n").is_err());
/// ```
pub fn parse_labels(text: &str) -> Result<Vector<f32>> {
    let mut values = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(value) = parse_label_line(line, i + 1)? {
            values.push(value);
        }
    }
    Ok(Vector::from_vec(values))
}

fn parse_label_line(line: &str, line_no: usize) -> Result<Option<f32>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f32>()
        .map(Some)
        .map_err(|e| TweetsenseError::Parse {
            line: line_no,
            message: format!("'{trimmed}' is not a number ({e})"),
        })
}

/// Reads every non-blank line, without its line terminator.
///
/// # Errors
///
/// Returns [`TweetsenseError::Io`] if the file cannot be read or is not UTF-8.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    tracing::debug!(path = %path.as_ref().display(), n = lines.len(), "read lines");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_read_vector_file() {
        let file = write_temp("1\n-1\n1\n");
        let y = read_vector_file(file.path()).expect("read labels");
        assert_eq!(y.as_slice(), &[1.0, -1.0, 1.0]);
    }

    #[test]
    fn test_read_vector_file_skips_blank_lines() {
        let file = write_temp("1\n\n  \n-1\r\n");
        let y = read_vector_file(file.path()).expect("read labels");
        assert_eq!(y.as_slice(), &[1.0, -1.0]);
    }

    #[test]
    fn test_read_vector_file_reports_line_number() {
        let file = write_temp("1\n\n-1\nneutral\n");
        match read_vector_file(file.path()) {
            Err(TweetsenseError::Parse { line, message }) => {
                assert_eq!(line, 4);
                assert!(message.contains("neutral"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_vector_file_missing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = read_vector_file(dir.path().join("absent.txt"));
        assert!(matches!(result, Err(TweetsenseError::Io(_))));
    }

    #[test]
    fn test_parse_labels_float_forms() {
        let y = parse_labels("+1\n-1.0\n1e0\n").expect("parse labels");
        assert_eq!(y.as_slice(), &[1.0, -1.0, 1.0]);
    }

    #[test]
    fn test_read_lines() {
        let file = write_temp("hi!\n\nbye.\nwhat's up\n");
        let lines = read_lines(file.path()).expect("read lines");
        assert_eq!(lines, vec!["hi!", "bye.", "what's up"]);
    }

    #[test]
    fn test_read_lines_strips_crlf() {
        let file = write_temp("one\r\ntwo\r\n");
        let lines = read_lines(file.path()).expect("read lines");
        assert_eq!(lines, vec!["one", "two"]);
    }
}
