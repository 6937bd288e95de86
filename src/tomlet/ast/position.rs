//! Source location utilities for converting byte offsets to line/column positions
//!
//! Tokens and intermediate parse nodes only carry byte ranges. This module turns those
//! into human-readable positions for errors and for the spans stored on AST nodes.

use super::span::{Position, Span};
use std::ops::Range;

/// Provides fast conversion from byte offsets to line/column positions
#[derive(Debug, Clone)]
pub struct SourceLocation<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> SourceLocation<'a> {
    /// Create a new SourceLocation from source code
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a line/column position.
    ///
    /// Offsets past the end of the source clamp to the end.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.source.len());
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..byte_offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(byte_offset - line_start);

        Position::new(line + 1, column + 1)
    }

    /// Convert a byte range to a span
    pub fn range_to_span(&self, range: &Range<usize>) -> Span {
        Span::new(
            self.byte_to_position(range.start),
            self.byte_to_position(range.end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_single_line() {
        let loc = SourceLocation::new("key = 1");
        assert_eq!(loc.byte_to_position(0), Position::new(1, 1));
        assert_eq!(loc.byte_to_position(4), Position::new(1, 5));
        assert_eq!(loc.byte_to_position(7), Position::new(1, 8));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("a = 1\nbb = 2\n");

        assert_eq!(loc.byte_to_position(0), Position::new(1, 1));
        assert_eq!(loc.byte_to_position(5), Position::new(1, 6));
        assert_eq!(loc.byte_to_position(6), Position::new(2, 1));
        assert_eq!(loc.byte_to_position(11), Position::new(2, 6));
        assert_eq!(loc.byte_to_position(12), Position::new(3, 1));
    }

    #[test]
    fn test_columns_count_characters() {
        let loc = SourceLocation::new("s = \"é\" $");
        // 'é' is two bytes wide, the '$' sits at byte 9 but column 9
        assert_eq!(loc.byte_to_position(9), Position::new(1, 9));
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let loc = SourceLocation::new("ab");
        assert_eq!(loc.byte_to_position(40), Position::new(1, 3));
    }

    #[test]
    fn test_range_to_span() {
        let loc = SourceLocation::new("[a]\nx = 1");
        let span = loc.range_to_span(&(4..9));
        assert_eq!(span.start, Position::new(2, 1));
        assert_eq!(span.end, Position::new(2, 6));
    }
}
