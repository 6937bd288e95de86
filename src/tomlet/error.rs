//! Error types for lexing, parsing and value resolution
//!
//! Every error carries the source position it refers to. Parsing stops at the first error;
//! there is no recovery and no multi-error reporting.

use crate::tomlet::ast::Position;
use std::fmt;
use thiserror::Error;

/// Any failure produced by [parse](crate::tomlet::parse)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// Coarse classification of an [Error]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input that matches no lexical rule
    Lex,
    /// A token stream that does not follow the grammar
    Parse,
    /// An integer literal outside the `i64` range
    ValueOverflow,
    /// A literal with valid lexical shape but no valid value (bad float, bad escape)
    InvalidValue,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lex(_) => ErrorKind::Lex,
            Error::Parse(_) => ErrorKind::Parse,
            Error::Value(ValueError::Overflow { .. }) => ErrorKind::ValueOverflow,
            Error::Value(_) => ErrorKind::InvalidValue,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Error::Lex(e) => e.position,
            Error::Parse(e) => e.position,
            Error::Value(e) => e.position(),
        }
    }
}

/// A character sequence that matches no lexical rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{position}: unexpected character {character:?}")]
pub struct LexError {
    /// Byte offset of the offending character
    pub offset: usize,
    pub position: Position,
    pub character: char,
}

/// The token stream does not follow the grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Byte offset of the offending token, or the input length at end of input
    pub offset: usize,
    pub position: Position,
    /// What the grammar would have accepted here, sorted
    pub expected: Vec<String>,
    /// Description of the token found, `None` at end of input
    pub found: Option<String>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.position)?;
        match self.expected.len() {
            0 => write!(f, "unexpected ")?,
            1 => write!(f, "expected {}, found ", self.expected[0])?,
            _ => write!(f, "expected one of {}, found ", self.expected.join(", "))?,
        }
        match &self.found {
            Some(found) => write!(f, "{}", found),
            None => write!(f, "end of input"),
        }
    }
}

/// A literal whose text lexed and parsed but cannot be turned into a value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("{position}: integer literal `{literal}` does not fit in 64 bits")]
    Overflow { literal: String, position: Position },
    #[error("{position}: `{literal}` is not a valid float")]
    InvalidFloat { literal: String, position: Position },
    #[error("{position}: invalid escape sequence `{sequence}`")]
    InvalidEscape { sequence: String, position: Position },
}

impl ValueError {
    pub fn position(&self) -> Position {
        match self {
            ValueError::Overflow { position, .. }
            | ValueError::InvalidFloat { position, .. }
            | ValueError::InvalidEscape { position, .. } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinct() {
        let at = Position::new(1, 1);
        let lex = Error::from(LexError {
            offset: 0,
            position: at,
            character: '$',
        });
        let overflow = Error::from(ValueError::Overflow {
            literal: "99999999999999999999".to_string(),
            position: at,
        });
        let bad_float = Error::from(ValueError::InvalidFloat {
            literal: "1.2.3".to_string(),
            position: at,
        });

        assert_eq!(lex.kind(), ErrorKind::Lex);
        assert_eq!(overflow.kind(), ErrorKind::ValueOverflow);
        assert_eq!(bad_float.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError {
            offset: 4,
            position: Position::new(1, 5),
            expected: vec!["value".to_string()],
            found: None,
        };
        assert_eq!(err.to_string(), "1:5: expected value, found end of input");

        let err = ParseError {
            offset: 2,
            position: Position::new(2, 3),
            expected: vec!["'='".to_string(), "'.'".to_string()],
            found: Some("integer `5`".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "2:3: expected one of '=', '.', found integer `5`"
        );
    }

    #[test]
    fn test_lex_error_display() {
        let err = LexError {
            offset: 4,
            position: Position::new(1, 5),
            character: '$',
        };
        assert_eq!(err.to_string(), "1:5: unexpected character '$'");
        assert_eq!(Error::from(err).position(), Position::new(1, 5));
    }
}
