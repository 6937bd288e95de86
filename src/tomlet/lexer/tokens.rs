//! Token definitions for the tomlet format
//!
//! Tokens are defined using the logos derive macro. Every variant keeps the exact text it
//! matched so that later stages (and error messages) can refer back to it.
//!
//! Rule precedence, highest first: Comment, DateTime, Date, Time, Ident, String, Integer,
//! Float, Punct, Whitespace. Logos always prefers the longest match; the explicit priorities
//! below only settle matches of equal length:
//!
//! - `#` alone is a Comment, never Punct.
//! - `_` alone is an Ident, never Punct.
//! - `.` alone is Punct, never Float (section paths depend on this).
//! - a run of digits with no `.` is an Integer, never a Float.
//!
//! Two characters of the ASCII punctuation ranges are not Punct: the double quote, so a
//! quote that does not open a terminated string is a lexing error instead of a stray
//! punctuation token, and `$`, which has no meaning anywhere in the format.
use logos::Logos;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

fn slice(lex: &mut logos::Lexer<Token>) -> String {
    lex.slice().to_owned()
}

fn punct(lex: &mut logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

/// All possible tokens in the tomlet format
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Serialize)]
pub enum Token {
    #[regex(r"#[^\n]*", slice, priority = 5)]
    Comment(String),

    #[regex(
        r"[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]T[0-9][0-9]:[0-9][0-9]:[0-9][0-9](\.[0-9]*)?(-[0-9][0-9]:[0-9][0-9])?",
        slice
    )]
    DateTime(String),

    #[regex(r"[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]", slice)]
    Date(String),

    #[regex(r"[0-9][0-9]:[0-9][0-9]:[0-9][0-9](\.[0-9]*)?", slice)]
    Time(String),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", slice, priority = 5)]
    Ident(String),

    /// Raw text including the surrounding quotes; unquoting happens during value resolution
    #[regex(r#""([^"\\]|\\(.|\n))*""#, slice)]
    String(String),

    #[regex(r"[+-]?[0-9]+", slice, priority = 3)]
    Integer(String),

    #[regex(r"[+-]?[0-9.]+", slice, priority = 2)]
    Float(String),

    #[regex(r"[!#%-/:-@\[-`{-~]", punct, priority = 4)]
    Punct(char),

    #[regex(r"[ \t\r\n]+", slice)]
    Whitespace(String),
}

/// The kind tag of a [Token], without its text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Comment,
    DateTime,
    Date,
    Time,
    Ident,
    String,
    Integer,
    Float,
    Punct,
    Whitespace,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::DateTime => "datetime",
            TokenKind::Date => "date",
            TokenKind::Time => "time",
            TokenKind::Ident => "identifier",
            TokenKind::String => "string",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Punct => "punctuation",
            TokenKind::Whitespace => "whitespace",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Comment(_) => TokenKind::Comment,
            Token::DateTime(_) => TokenKind::DateTime,
            Token::Date(_) => TokenKind::Date,
            Token::Time(_) => TokenKind::Time,
            Token::Ident(_) => TokenKind::Ident,
            Token::String(_) => TokenKind::String,
            Token::Integer(_) => TokenKind::Integer,
            Token::Float(_) => TokenKind::Float,
            Token::Punct(_) => TokenKind::Punct,
            Token::Whitespace(_) => TokenKind::Whitespace,
        }
    }

    /// The exact source text this token matched
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Token::Punct(c) => Cow::Owned(c.to_string()),
            Token::Comment(s)
            | Token::DateTime(s)
            | Token::Date(s)
            | Token::Time(s)
            | Token::Ident(s)
            | Token::String(s)
            | Token::Integer(s)
            | Token::Float(s)
            | Token::Whitespace(s) => Cow::Borrowed(s),
        }
    }

    /// Whitespace and comments never reach the grammar
    pub fn is_elided(&self) -> bool {
        matches!(self, Token::Whitespace(_) | Token::Comment(_))
    }

    /// Human readable description used in error messages, e.g. ``identifier `name` ``
    pub fn describe(&self) -> String {
        match self {
            Token::Punct(c) => format!("'{}'", c),
            Token::Whitespace(_) => "whitespace".to_string(),
            other => format!("{} `{}`", other.kind(), other.text()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Whitespace(_) => write!(f, "<whitespace>"),
            other => write!(f, "<{}:{}>", other.kind(), other.text()),
        }
    }
}
