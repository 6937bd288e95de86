//! # tomlet
//!
//! A lexer and parser for a small TOML-like configuration format.
//!
//! The pipeline is text → [lexer](tomlet::lexer) → filtered token stream →
//! [parser](tomlet::parser) → [Document](tomlet::ast::Document). Use [parse] for the
//! whole thing in one call.

pub mod tomlet;

pub use tomlet::ast::{Document, Entry, Field, Section, Value};
pub use tomlet::error::{Error, ErrorKind};
pub use tomlet::parse;
