//! Parser combinator functions for building the tomlet grammar.

use chumsky::prelude::*;
use std::ops::Range;

use crate::tomlet::lexer::Token;
use crate::tomlet::parser::intermediate_ast::{Literal, ValueWithSpans};

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// Helper: match a single punctuation character
pub(crate) fn punct(c: char) -> impl Parser<Token, Token, Error = ParserError> + Clone {
    just(Token::Punct(c))
}

/// Parse an identifier, keeping its byte range.
///
/// Left unlabelled. chumsky keeps the innermost label, so callers label it where it appears.
pub(crate) fn ident() -> impl Parser<Token, (String, Range<usize>), Error = ParserError> + Clone
{
    select! { Token::Ident(name) => name }.map_with_span(|name, span: Range<usize>| (name, span))
}

/// Map a single token to the literal it denotes.
///
/// This is a one-to-one dispatch on the token kind; `true` and `false` are the only
/// identifiers that denote a value.
pub(crate) fn literal() -> impl Parser<Token, ValueWithSpans, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, token: Token| {
        let literal = match token {
            Token::String(raw) => Literal::String(raw),
            Token::DateTime(text) => Literal::DateTime(text),
            Token::Date(text) => Literal::Date(text),
            Token::Time(text) => Literal::Time(text),
            Token::Ident(ref name) if name == "true" => Literal::Bool(true),
            Token::Ident(ref name) if name == "false" => Literal::Bool(false),
            Token::Integer(text) => Literal::Integer(text),
            Token::Float(text) => Literal::Float(text),
            other => {
                return Err(ParserError::expected_input_found(span, None, Some(other)));
            }
        };
        Ok(ValueWithSpans::Literal(literal, span))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chumsky::Stream;

    fn tokens(items: Vec<Token>) -> Vec<(Token, Range<usize>)> {
        items
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t, i..i + 1))
            .collect()
    }

    fn run<O>(
        parser: impl Parser<Token, O, Error = ParserError>,
        items: Vec<Token>,
    ) -> Result<O, Vec<ParserError>> {
        let len = items.len();
        parser
            .then_ignore(end())
            .parse(Stream::from_iter(len..len, tokens(items).into_iter()))
    }

    #[test]
    fn test_ident_keeps_span() {
        let result = run(ident(), vec![Token::Ident("key".to_string())]).unwrap();
        assert_eq!(result, ("key".to_string(), 0..1));
    }

    #[test]
    fn test_literal_dispatch() {
        let cases = vec![
            (Token::Ident("true".to_string()), Literal::Bool(true)),
            (Token::Ident("false".to_string()), Literal::Bool(false)),
            (
                Token::Integer("5".to_string()),
                Literal::Integer("5".to_string()),
            ),
            (
                Token::Float("5.0".to_string()),
                Literal::Float("5.0".to_string()),
            ),
            (
                Token::String("\"5\"".to_string()),
                Literal::String("\"5\"".to_string()),
            ),
            (
                Token::Time("10:00:00".to_string()),
                Literal::Time("10:00:00".to_string()),
            ),
        ];
        for (token, expected) in cases {
            let value = run(literal(), vec![token]).unwrap();
            assert_eq!(value, ValueWithSpans::Literal(expected, 0..1));
        }
    }

    #[test]
    fn test_literal_rejects_other_identifiers() {
        assert!(run(literal(), vec![Token::Ident("True".to_string())]).is_err());
        assert!(run(literal(), vec![Token::Punct('=')]).is_err());
    }

    #[test]
    fn test_punct() {
        assert!(run(punct('='), vec![Token::Punct('=')]).is_ok());
        assert!(run(punct('='), vec![Token::Punct(',')]).is_err());
    }
}
