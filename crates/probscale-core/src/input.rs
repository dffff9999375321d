//! Sample text parsing
//!
//! Samples are plain text: numbers separated by whitespace, commas or
//! semicolons, one or many per line. `#` starts a comment. The markers
//! `nan`, `na`, `null` and `-` stand for missing values and become NaN.

use std::io::Read;

use tracing::debug;

use crate::error::{ProbscaleError, ProbscaleResult};

const MISSING_MARKERS: [&str; 4] = ["nan", "na", "null", "-"];

/// Parse a sample from text
pub fn parse_sample(text: &str) -> ProbscaleResult<Vec<f64>> {
    let mut values = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default();
        let tokens = content
            .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
            .filter(|token| !token.is_empty());

        for token in tokens {
            values.push(parse_value(token).ok_or_else(|| ProbscaleError::InvalidSample {
                line: index + 1,
                token: token.to_string(),
            })?);
        }
    }

    debug!(
        values = values.len(),
        missing = values.iter().filter(|v| v.is_nan()).count(),
        "Parsed sample"
    );
    Ok(values)
}

/// Read a whole sample from a reader, such as stdin or a file
pub fn read_sample(mut reader: impl Read) -> ProbscaleResult<Vec<f64>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_sample(&text)
}

fn parse_value(token: &str) -> Option<f64> {
    let lower = token.to_ascii_lowercase();
    if MISSING_MARKERS.contains(&lower.as_str()) {
        return Some(f64::NAN);
    }
    let value = lower.parse::<f64>().ok()?;
    // Overflowing literals such as 1e400 parse to inf
    if value.is_infinite() && !is_infinity_literal(&lower) {
        return None;
    }
    Some(value)
}

fn is_infinity_literal(lower: &str) -> bool {
    matches!(
        lower.trim_start_matches(['+', '-']),
        "inf" | "infinity"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators() {
        let values = parse_sample("1, 2;3\n4\t5  6\n").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let values = parse_sample("# header\n\n1.5 # first\n  -2e3\n").unwrap();
        assert_eq!(values, vec![1.5, -2000.0]);
    }

    #[test]
    fn test_missing_markers() {
        let values = parse_sample("1 NaN 2 NA null - inf").unwrap();
        assert_eq!(values.len(), 7);
        assert_eq!(values.iter().filter(|v| v.is_nan()).count(), 4);
        assert_eq!(values[6], f64::INFINITY);
    }

    #[test]
    fn test_bad_token() {
        let err = parse_sample("1 2\n3 abc 4").unwrap_err();
        match err {
            ProbscaleError::InvalidSample { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_sample() {
        let values = read_sample("3\n1\n2\n".as_bytes()).unwrap();
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_sample("  \n# nothing\n").unwrap().is_empty());
    }

    #[test]
    fn test_overflow_is_rejected() {
        let err = parse_sample("1 1e400 2").unwrap_err();
        assert!(matches!(
            err,
            ProbscaleError::InvalidSample { line: 1, ref token } if token == "1e400"
        ));
        assert!(parse_sample("-1e400").is_err());

        let values = parse_sample("+inf -Infinity 1e308").unwrap();
        assert_eq!(values[0], f64::INFINITY);
        assert_eq!(values[1], f64::NEG_INFINITY);
        assert_eq!(values[2], 1e308);
    }
}
