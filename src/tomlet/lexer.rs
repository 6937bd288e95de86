//! Lexer module for the tomlet format
//!
//! This module contains the tokenization logic, split in two steps:
//!
//! 1. Core tokenization using the logos lexer ([tokenize]), which produces every token,
//!    whitespace and comments included.
//! 2. Elision ([lex]), which drops Whitespace and Comment tokens so that the grammar only
//!    sees meaningful tokens.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_all, TokenSpan, Tokens};
pub use tokens::{Token, TokenKind};

use crate::tomlet::error::LexError;

/// Main lexer function: tokenize and elide whitespace and comments.
///
/// Fails on the first character that matches no rule.
pub fn lex(source: &str) -> Result<Vec<TokenSpan>, LexError> {
    let mut tokens = Vec::new();
    for result in tokenize(source) {
        let (token, span) = result?;
        if !token.is_elided() {
            tokens.push((token, span));
        }
    }
    log::trace!("lexed {} grammar tokens", tokens.len());
    Ok(tokens)
}
