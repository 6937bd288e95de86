//! Parser module for the tomlet format
//!
//! The grammar is written with chumsky combinators over the elided token stream from the
//! [lexer](crate::tomlet::lexer). It produces an intermediate tree with byte ranges, which
//! [conversion] resolves into the final [Document](crate::tomlet::ast::Document).
//!
//! The grammar is rebuilt on every call: chumsky's recursive parsers are not `Sync`, and
//! building them is cheap next to parsing.

pub mod api;
pub(crate) mod combinators;
pub(crate) mod conversion;
pub(crate) mod document;
pub(crate) mod intermediate_ast;

pub use api::{parse_document, parse_tokens};
