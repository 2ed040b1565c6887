use crate::body::Vec3;
use crate::diagnostics::Span;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

const LINE_PATTERN: &str = r"^<x=(-?[0-9]+),[ ]*y=(-?[0-9]+),[ ]*z=(-?[0-9]+)>$";

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(LINE_PATTERN).unwrap())
}

/// Error produced while reading initial body positions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid input format on line {line}: \"{content}\"")]
    InvalidLine {
        line: usize,
        content: String,
        span: Span,
    },
    #[error("coordinate {value} on line {line} does not fit in 64 bits")]
    OutOfRange { line: usize, value: String, span: Span },
    #[error("input contains no bodies")]
    Empty,
}

impl ParseError {
    /// 1-based line number of the offending input, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidLine { line, .. } | Self::OutOfRange { line, .. } => Some(*line),
            Self::Empty => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::InvalidLine { span, .. } | Self::OutOfRange { span, .. } => Some(*span),
            Self::Empty => None,
        }
    }
}

/// Parse one `<x=.., y=.., z=..>` position per non-blank line
pub fn parse_bodies(source: &str) -> Result<Vec<Vec3>, ParseError> {
    let pattern = line_pattern();
    let mut positions = Vec::new();
    let mut offset = 0;

    for (idx, raw) in source.split_inclusive('\n').enumerate() {
        let span = Span::new(offset, offset + raw.len());
        offset += raw.len();

        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let captures = pattern.captures(line).ok_or_else(|| ParseError::InvalidLine {
            line: idx + 1,
            content: line.to_string(),
            span,
        })?;

        let mut coords = [0i64; 3];
        for (axis, coord) in coords.iter_mut().enumerate() {
            let text = &captures[axis + 1];
            *coord = text.parse().map_err(|_| ParseError::OutOfRange {
                line: idx + 1,
                value: text.to_string(),
                span,
            })?;
        }
        positions.push(Vec3::from_array(coords));
    }

    if positions.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(positions)
}
