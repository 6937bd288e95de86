//! AST node definitions
//!
//! A [Document] is an ordered run of [Entry] values. Order is kept exactly as written:
//! repeated keys and repeated section names are all retained.

use super::span::Span;
use serde::Serialize;

/// The root of a parsed document
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Document {
    pub entries: Vec<Entry>,
}

impl Document {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Top-level fields, in source order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Field(field) => Some(field),
            Entry::Section(_) => None,
        })
    }

    /// Sections, in source order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Section(section) => Some(section),
            Entry::Field(_) => None,
        })
    }

    /// First top-level field with the given key
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields().find(|field| field.key == key)
    }

    /// First section with the given dotted name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections().find(|section| section.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A top-level item: either a field or a section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Entry {
    Field(Field),
    Section(Section),
}

impl Entry {
    pub fn node_type(&self) -> &'static str {
        match self {
            Entry::Field(_) => "Field",
            Entry::Section(_) => "Section",
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Entry::Field(field) => field.span,
            Entry::Section(section) => section.span,
        }
    }
}

/// `key = value`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub key: String,
    pub value: Value,
    /// From the start of the key to the end of the value
    pub span: Span,
}

/// `[a.b.c]` followed by the fields it owns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Dotted path kept as written, e.g. `"a.b.c"`
    pub name: String,
    pub fields: Vec<Field>,
    /// Span of the `[...]` header
    pub span: Span,
}

impl Section {
    /// First field in this section with the given key
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// The dotted path split into its parts
    pub fn path(&self) -> impl Iterator<Item = &str> {
        self.name.split('.')
    }
}

/// A resolved literal. Exactly one variant applies to any accepted value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// Unquoted, with escapes decoded
    String(String),
    /// Literal text, no calendar validation
    DateTime(String),
    Date(String),
    Time(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
    List(Vec<Value>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::DateTime(_) => "DateTime",
            Value::Date(_) => "Date",
            Value::Time(_) => "Time",
            Value::Bool(_) => "Bool",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::List(_) => "List",
        }
    }

    /// The string payload of String, DateTime, Date and Time values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::DateTime(s) | Value::Date(s) | Value::Time(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}
