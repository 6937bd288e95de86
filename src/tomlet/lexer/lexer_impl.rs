//! Implementation of the tomlet lexer
//!
//! The actual tokenization is handled entirely by logos; this module wraps it into a lazy
//! iterator that reports failures as positioned [LexError]s.

use crate::tomlet::ast::SourceLocation;
use crate::tomlet::error::LexError;
use crate::tomlet::lexer::tokens::Token;
use logos::Logos;
use std::ops::Range;

/// Type alias for token with its byte range in the source
pub type TokenSpan = (Token, Range<usize>);

/// Lazy token stream over a source string.
///
/// Yields every token, whitespace and comments included. After the first error the
/// stream is exhausted.
pub struct Tokens<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, Token>,
    failed: bool,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: Token::lexer(source),
            failed: false,
        }
    }

    fn error_at(&self, offset: usize) -> LexError {
        let character = self.source[offset..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        LexError {
            offset,
            position: SourceLocation::new(self.source).byte_to_position(offset),
            character,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<TokenSpan, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.inner.next()?;
        let span = self.inner.span();
        match result {
            Ok(token) => Some(Ok((token, span))),
            Err(()) => {
                self.failed = true;
                let error = self.error_at(span.start);
                log::debug!("lexing stopped at {}", error.position);
                Some(Err(error))
            }
        }
    }
}

/// Tokenize a string lazily, keeping whitespace and comments
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens::new(source)
}

/// Tokenize a whole string, keeping whitespace and comments
pub fn tokenize_all(source: &str) -> Result<Vec<TokenSpan>, LexError> {
    tokenize(source).collect()
}
