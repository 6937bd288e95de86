//! AST definitions for tomlet documents
//!
//! ## Modules
//!
//! - `span` - Position and Span types for source code locations
//! - `node` - Document, Entry, Field, Section and Value
//! - `position` - Source location utilities for converting byte offsets

pub mod node;
pub mod position;
pub mod span;

pub use node::{Document, Entry, Field, Section, Value};
pub use position::SourceLocation;
pub use span::{Position, Span};
