//! Output formats for inspecting parsed documents and token streams
//!
//! These are inspection dumps. None of them produces tomlet text again.

pub mod treeviz;

pub use treeviz::{to_treeviz_str, to_treeviz_str_with_width, DEFAULT_LABEL_WIDTH};

use crate::tomlet::ast::Document;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Pretty JSON of any serializable value (documents, token lists)
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String, FormatError> {
    Ok(serde_yaml::to_string(value)?)
}

/// Rust debug tree of the document
pub fn to_debug_str(doc: &Document) -> String {
    format!("{:#?}\n", doc)
}
