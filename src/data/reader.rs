//! Sample log reader.

use super::{Dataset, Sample};
use crate::error::{ParseErrorKind, Result, RttPlotError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Default log location, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "./rtt.log";

/// Reads `timestamp rtt` logs.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a log file into a dataset.
    pub fn read_file(path: &Path) -> Result<Dataset> {
        let file = File::open(path).map_err(|e| RttPlotError::file_open(path.to_path_buf(), e))?;
        let dataset = Self::read_from(BufReader::new(file), path.to_path_buf())?;

        tracing::info!(
            "Loaded {} samples from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Read samples from any buffered source.
    pub fn read_from<R: BufRead>(reader: R, file_path: PathBuf) -> Result<Dataset> {
        let mut dataset = Dataset::new(file_path);
        let mut blank = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            match parse_line(idx + 1, &line)? {
                Some(sample) => dataset.push(sample),
                None => blank += 1,
            }
        }

        tracing::debug!("Skipped {} blank lines", blank);
        Ok(dataset)
    }
}

/// Parse one line. Blank lines yield `None`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Sample>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [timestamp, rtt] = tokens[..] else {
        return Err(RttPlotError::parse(
            line_no,
            line,
            ParseErrorKind::TokenCount(tokens.len()),
        ));
    };

    let number = |token: &str| {
        token.parse::<f64>().map_err(|_| {
            RttPlotError::parse(line_no, line, ParseErrorKind::InvalidNumber(token.to_string()))
        })
    };

    Ok(Some(Sample::new(number(timestamp)?, number(rtt)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn read(text: &str) -> Result<Dataset> {
        DataReader::read_from(Cursor::new(text), PathBuf::from("rtt.log"))
    }

    fn parse_kind(text: &str) -> ParseErrorKind {
        match read(text) {
            Err(RttPlotError::Parse { kind, .. }) => kind,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn reads_example_with_blank_line() {
        let ds = read("0.0 12.5\n1.0 13.0\n\n2.0 11.8").unwrap();
        assert_eq!(ds.points(), vec![(0.0, 12.5), (1.0, 13.0), (2.0, 11.8)]);
    }

    #[test]
    fn sample_count_matches_non_blank_lines() {
        let mut text = String::new();
        let mut expected = Vec::new();
        for i in 0..50 {
            let t = i as f64 * 0.25;
            let r = 10.0 + (i % 7) as f64 * 1.125;
            text.push_str(&format!("{} {}\n", t, r));
            if i % 3 == 0 {
                text.push_str("   \n\t\n");
            }
            expected.push((t, r));
        }

        let ds = read(&text).unwrap();
        assert_eq!(ds.len(), 50);
        assert_eq!(ds.points(), expected);
    }

    #[test]
    fn only_blank_lines_is_empty() {
        let ds = read("\n  \n\t\n\n").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(read("").unwrap().is_empty());
    }

    #[test]
    fn extra_whitespace_between_tokens_is_accepted() {
        let ds = read("  1.5 \t  20.25  \r\n").unwrap();
        assert_eq!(ds.points(), vec![(1.5, 20.25)]);
    }

    #[test]
    fn one_token_fails() {
        assert_eq!(parse_kind("1.0\n"), ParseErrorKind::TokenCount(1));
    }

    #[test]
    fn three_tokens_fail() {
        assert_eq!(parse_kind("1.0 2.0 3.0\n"), ParseErrorKind::TokenCount(3));
    }

    #[test]
    fn non_numeric_token_fails() {
        assert_eq!(
            parse_kind("abc 1.0\n"),
            ParseErrorKind::InvalidNumber("abc".to_string())
        );
    }

    #[test]
    fn error_reports_line_number() {
        match read("0 1\n\n2 x\n") {
            Err(RttPlotError::Parse { line, content, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "2 x");
            },
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_file_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rtt.log");
        match DataReader::read_file(&path) {
            Err(RttPlotError::FileOpen { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            },
            other => panic!("expected file open error, got {:?}", other),
        }
    }

    #[test]
    fn reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0.0 12.5").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "1.0 13.0").unwrap();

        let ds = DataReader::read_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.path(), file.path());
    }
}
