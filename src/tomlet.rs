//! Main module for tomlet library functionality

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;

use ast::Document;
use error::Error;

/// Parse a complete document.
///
/// Lexing errors, grammar errors and literal resolution errors all surface through [Error];
/// no partial document is ever returned.
pub fn parse(source: &str) -> Result<Document, Error> {
    parser::parse_document(source)
}
