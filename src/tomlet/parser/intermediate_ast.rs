//! Intermediate AST produced by the grammar, before value resolution.
//!
//! Nodes keep byte ranges instead of positions and literals keep their source text, so the
//! grammar itself never fails on a literal's contents. [conversion](super::conversion)
//! turns this tree into the final [Document](crate::tomlet::ast::Document).

use std::ops::Range;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DocumentWithSpans {
    pub entries: Vec<EntryWithSpans>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EntryWithSpans {
    Field(FieldWithSpans),
    Section(SectionWithSpans),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FieldWithSpans {
    pub key: String,
    pub key_span: Range<usize>,
    pub value: ValueWithSpans,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SectionWithSpans {
    pub name: String,
    /// Covers the whole `[...]` header
    pub header_span: Range<usize>,
    pub fields: Vec<FieldWithSpans>,
}

/// A literal as selected by the grammar from the token kind
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Literal {
    /// Raw text, quotes and escapes included
    String(String),
    DateTime(String),
    Date(String),
    Time(String),
    Bool(bool),
    Integer(String),
    Float(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ValueWithSpans {
    Literal(Literal, Range<usize>),
    List(Vec<ValueWithSpans>, Range<usize>),
}

impl ValueWithSpans {
    pub fn span(&self) -> &Range<usize> {
        match self {
            ValueWithSpans::Literal(_, span) | ValueWithSpans::List(_, span) => span,
        }
    }
}
