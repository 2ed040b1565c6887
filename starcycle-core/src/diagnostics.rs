//! Error formatting for input files and simulation failures
//!
//! Parse errors carry a byte span into the source; these helpers turn that
//! back into something a user can read.

use crate::parser::ParseError;

/// Byte range within a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slice of `source` covered by this span, without the trailing newline
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source
            .get(self.start..self.end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }
}

/// Format a parse error with the offending line from the source
pub fn format_parse_error(error: &ParseError, source: &str) -> String {
    let mut msg = format!("Parse error: {}", error);

    if let (Some(line), Some(span)) = (error.line(), error.span()) {
        if let Some(text) = span.slice(source) {
            msg.push_str(&format!("\n  at line {}: {}", line, text));
        }
    }

    msg
}

/// Format a runtime error with context
pub fn format_runtime_error(error: &dyn std::error::Error) -> String {
    format!("Runtime error: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_bodies;
    use crate::system::SimulationError;

    #[test]
    fn parse_error_shows_source_line() {
        let source = "<x=1, y=2, z=3>\n  <x=oops>\n";
        let err = parse_bodies(source).unwrap_err();
        assert_eq!(
            format_parse_error(&err, source),
            "Parse error: invalid input format on line 2: \"<x=oops>\"\n  at line 2:   <x=oops>"
        );
    }

    #[test]
    fn empty_input_has_no_context() {
        let err = parse_bodies("").unwrap_err();
        assert_eq!(
            format_parse_error(&err, ""),
            "Parse error: input contains no bodies"
        );
    }

    #[test]
    fn runtime_error_prefix() {
        assert_eq!(
            format_runtime_error(&SimulationError::EmptySystem),
            "Runtime error: cannot search for a cycle in a system with no bodies"
        );
    }
}
