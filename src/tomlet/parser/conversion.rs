//! Value resolution: intermediate AST → final AST.
//!
//! The grammar already picked exactly one literal variant per token. What is left is
//! turning literal text into values: unquoting strings, range-checking integers and
//! validating the permissive float tokens. Byte ranges become [Span]s here.

use crate::tomlet::ast::{Document, Entry, Field, Section, SourceLocation, Span, Value};
use crate::tomlet::error::ValueError;
use crate::tomlet::parser::intermediate_ast::{
    DocumentWithSpans, EntryWithSpans, FieldWithSpans, Literal, SectionWithSpans, ValueWithSpans,
};

/// Convert the intermediate document, failing on the first literal that has no value
pub(crate) fn convert_document(
    source: &str,
    doc: DocumentWithSpans,
) -> Result<Document, ValueError> {
    let location = SourceLocation::new(source);
    let entries = doc
        .entries
        .into_iter()
        .map(|entry| convert_entry(&location, entry))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Document::new(entries))
}

fn convert_entry(location: &SourceLocation, entry: EntryWithSpans) -> Result<Entry, ValueError> {
    match entry {
        EntryWithSpans::Field(field) => convert_field(location, field).map(Entry::Field),
        EntryWithSpans::Section(section) => convert_section(location, section).map(Entry::Section),
    }
}

fn convert_section(
    location: &SourceLocation,
    section: SectionWithSpans,
) -> Result<Section, ValueError> {
    let fields = section
        .fields
        .into_iter()
        .map(|field| convert_field(location, field))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Section {
        name: section.name,
        fields,
        span: location.range_to_span(&section.header_span),
    })
}

fn convert_field(location: &SourceLocation, field: FieldWithSpans) -> Result<Field, ValueError> {
    let span: Span = location.range_to_span(&(field.key_span.start..field.value.span().end));
    Ok(Field {
        key: field.key,
        value: resolve_value(location, field.value)?,
        span,
    })
}

/// Resolve a value, recursing into list elements
pub(crate) fn resolve_value(
    location: &SourceLocation,
    value: ValueWithSpans,
) -> Result<Value, ValueError> {
    match value {
        ValueWithSpans::Literal(literal, span) => resolve_literal(location, literal, span.start),
        ValueWithSpans::List(items, _) => items
            .into_iter()
            .map(|item| resolve_value(location, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
    }
}

fn resolve_literal(
    location: &SourceLocation,
    literal: Literal,
    offset: usize,
) -> Result<Value, ValueError> {
    match literal {
        Literal::String(raw) => unquote(&raw).map(Value::String).map_err(|escape| {
            ValueError::InvalidEscape {
                sequence: escape.sequence,
                position: location.byte_to_position(offset + escape.offset),
            }
        }),
        Literal::DateTime(text) => Ok(Value::DateTime(text)),
        Literal::Date(text) => Ok(Value::Date(text)),
        Literal::Time(text) => Ok(Value::Time(text)),
        Literal::Bool(b) => Ok(Value::Bool(b)),
        // The lexer only admits a sign and digits, so range is the only way to fail
        Literal::Integer(text) => match text.parse::<i64>() {
            Ok(i) => Ok(Value::Integer(i)),
            Err(_) => Err(ValueError::Overflow {
                literal: text,
                position: location.byte_to_position(offset),
            }),
        },
        Literal::Float(text) => match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Value::Float(f)),
            Ok(_) => Err(ValueError::Overflow {
                literal: text,
                position: location.byte_to_position(offset),
            }),
            Err(_) => Err(ValueError::InvalidFloat {
                literal: text,
                position: location.byte_to_position(offset),
            }),
        },
    }
}

/// A bad escape inside a string literal, `offset` relative to the opening quote
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EscapeError {
    pub offset: usize,
    pub sequence: String,
}

/// Strip the surrounding quotes and decode escape sequences.
///
/// Supported: `\"` `\\` `\/` `\b` `\f` `\n` `\r` `\t` `\0` `\uXXXX` `\UXXXXXXXX`.
pub(crate) fn unquote(raw: &str) -> Result<String, EscapeError> {
    let inner = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.char_indices();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        // +1 for the opening quote
        let offset = i + 1;
        let Some((_, escape)) = chars.next() else {
            return Err(EscapeError {
                offset,
                sequence: "\\".to_string(),
            });
        };
        match escape {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            '/' => out.push('/'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            '0' => out.push('\0'),
            'u' | 'U' => {
                let width = if escape == 'u' { 4 } else { 8 };
                let start = i + 2;
                let decoded = inner
                    .get(start..start + width)
                    .filter(|hex| hex.chars().all(|h| h.is_ascii_hexdigit()))
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .and_then(char::from_u32);
                match decoded {
                    Some(ch) => {
                        out.push(ch);
                        // the hex digits are ASCII, one char per byte
                        for _ in 0..width {
                            chars.next();
                        }
                    }
                    None => {
                        let digits: String = inner[start..].chars().take(width).collect();
                        return Err(EscapeError {
                            offset,
                            sequence: format!("\\{}{}", escape, digits),
                        });
                    }
                }
            }
            other => {
                return Err(EscapeError {
                    offset,
                    sequence: format!("\\{}", other),
                });
            }
        }
    }

    Ok(out)
}
