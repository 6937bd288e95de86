//! Public API for the parser.

use chumsky::prelude::*;
use chumsky::Stream;

use crate::tomlet::ast::{Document, SourceLocation};
use crate::tomlet::error::{Error, ParseError};
use crate::tomlet::lexer::{lex, Token, TokenSpan};
use crate::tomlet::parser::combinators::ParserError;
use crate::tomlet::parser::conversion::convert_document;
use crate::tomlet::parser::document::document;

/// Parse an already lexed (and elided) token stream.
///
/// `source` is the text the tokens were produced from; it is used to turn byte ranges
/// into positions.
pub fn parse_tokens(source: &str, tokens: Vec<TokenSpan>) -> Result<Document, Error> {
    let eoi = source.len()..source.len();
    let doc_with_spans = document()
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(|errors| first_error(source, errors))?;

    let doc = convert_document(source, doc_with_spans)?;
    log::debug!("parsed document with {} entries", doc.entries.len());
    Ok(doc)
}

/// Main parser function that takes source text and returns a parsed document
pub fn parse_document(source: &str) -> Result<Document, Error> {
    let tokens = lex(source)?;
    parse_tokens(source, tokens)
}

/// Only the first error is reported; no recovery is attempted.
fn first_error(source: &str, errors: Vec<ParserError>) -> ParseError {
    match errors.into_iter().next() {
        Some(error) => convert_error(source, error),
        None => ParseError {
            offset: 0,
            position: SourceLocation::new(source).byte_to_position(0),
            expected: Vec::new(),
            found: None,
        },
    }
}

fn convert_error(source: &str, error: ParserError) -> ParseError {
    let offset = error.span().start;

    let expected = match error.label() {
        Some(label) => vec![label.to_string()],
        None => {
            let mut expected: Vec<String> = error
                .expected()
                .map(|token| match token {
                    Some(token) => token.describe(),
                    None => "end of input".to_string(),
                })
                .collect();
            expected.sort();
            expected.dedup();
            expected
        }
    };

    ParseError {
        offset,
        position: SourceLocation::new(source).byte_to_position(offset),
        expected,
        found: error.found().map(Token::describe),
    }
}
