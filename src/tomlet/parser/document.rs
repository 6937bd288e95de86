//! Document grammar.
//!
//! ```text
//! document := entry* EOI
//! entry    := field | section
//! field    := Ident "=" value
//! section  := "[" Ident ("." Ident)* "]" field*
//! value    := literal | "[" (value ("," value)*)? "]"
//! ```
//!
//! A section owns every field up to the next `[` or the end of input, so a field can only
//! be top-level if it appears before the first section.
//!
//! Labels sit on the first token of a rule only. An error past that token names the token
//! that was actually missing.

use chumsky::prelude::*;
use std::ops::Range;

use crate::tomlet::lexer::Token;
use crate::tomlet::parser::combinators::{ident, literal, punct, ParserError};
use crate::tomlet::parser::intermediate_ast::{
    DocumentWithSpans, EntryWithSpans, FieldWithSpans, SectionWithSpans, ValueWithSpans,
};

const VALUE: &str = "value";
const ENTRY: &str = "field or section";

/// Parse a value: a literal or a (possibly nested) list.
///
/// Lists need a comma between elements and reject a trailing one. Nesting has no fixed
/// depth limit beyond the stack.
pub(crate) fn value() -> impl Parser<Token, ValueWithSpans, Error = ParserError> + Clone {
    recursive(|value| {
        let list = value
            .separated_by(punct(','))
            .delimited_by(punct('[').labelled(VALUE), punct(']'))
            .map_with_span(ValueWithSpans::List);

        literal().labelled(VALUE).or(list)
    })
}

/// Parse a `key = value` field
pub(crate) fn field() -> impl Parser<Token, FieldWithSpans, Error = ParserError> + Clone {
    ident()
        .labelled(ENTRY)
        .then_ignore(punct('='))
        .then(value())
        .map(|((key, key_span), value)| FieldWithSpans {
            key,
            key_span,
            value,
        })
}

/// Parse a `[a.b.c]` header into its joined dotted name
pub(crate) fn section_header(
) -> impl Parser<Token, (String, Range<usize>), Error = ParserError> + Clone {
    ident()
        .labelled("identifier")
        .map(|(part, _)| part)
        .separated_by(punct('.'))
        .at_least(1)
        .delimited_by(punct('[').labelled(ENTRY), punct(']'))
        .map_with_span(|parts, span: Range<usize>| (parts.join("."), span))
}

/// Parse a document
///
/// Parses the entire token stream; anything left over is an error.
pub(crate) fn document() -> impl Parser<Token, DocumentWithSpans, Error = ParserError> {
    let field = field();

    let section = section_header()
        .then(field.clone().repeated())
        .map(|((name, header_span), fields)| SectionWithSpans {
            name,
            header_span,
            fields,
        });

    let entry = field
        .map(EntryWithSpans::Field)
        .or(section.map(EntryWithSpans::Section));

    entry
        .repeated()
        .then_ignore(end())
        .map(|entries| DocumentWithSpans { entries })
}
