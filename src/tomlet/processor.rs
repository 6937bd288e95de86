//! File processing API for the tomlet format
//!
//! This module runs a source through a processing stage (tokens or ast) and renders it in
//! one of the supported formats. Format strings look like `token-simple` or `ast-treeviz`.
//!
//! # Sample Sources
//!
//! The `samples` module gives access to the curated sample documents under `docs/samples`.
//!
//! ```rust,ignore
//! use tomlet::tomlet::processor::samples::TomlSources;
//!
//! let content = TomlSources::get_string("010-sections.toml").unwrap();
//! let tree = TomlSources::get_processed("010-sections.toml", "ast-treeviz").unwrap();
//! ```

use crate::tomlet::config::ToolConfig;
use crate::tomlet::error::Error;
use crate::tomlet::formats::{self, FormatError, DEFAULT_LABEL_WIDTH};
use crate::tomlet::lexer::{lex, tokenize_all, Token, TokenSpan};
use crate::tomlet::parser::parse_tokens;
use std::fs;
use std::path::Path;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<kind:text>` per token, elided stream
    Simple,
    Json,
    /// Like Simple, whitespace and comments kept
    RawSimple,
    RawJson,
    Treeviz,
    Yaml,
    Debug,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

const AVAILABLE_SPECS: &[(&str, ProcessingStage, OutputFormat)] = &[
    ("token-simple", ProcessingStage::Token, OutputFormat::Simple),
    ("token-json", ProcessingStage::Token, OutputFormat::Json),
    ("token-raw-simple", ProcessingStage::Token, OutputFormat::RawSimple),
    ("token-raw-json", ProcessingStage::Token, OutputFormat::RawJson),
    ("ast-treeviz", ProcessingStage::Ast, OutputFormat::Treeviz),
    ("ast-json", ProcessingStage::Ast, OutputFormat::Json),
    ("ast-yaml", ProcessingStage::Ast, OutputFormat::Yaml),
    ("ast-debug", ProcessingStage::Ast, OutputFormat::Debug),
];

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, rest) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        match stage {
            "token" | "ast" => {}
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        }

        AVAILABLE_SPECS
            .iter()
            .find(|(name, _, _)| *name == format_str)
            .map(|(_, stage, format)| ProcessingSpec {
                stage: *stage,
                format: *format,
            })
            .ok_or_else(|| ProcessingError::InvalidFormatType(rest.to_string()))
    }

    /// The format string this spec was parsed from
    pub fn name(&self) -> &'static str {
        AVAILABLE_SPECS
            .iter()
            .find(|(_, stage, format)| *stage == self.stage && *format == self.format)
            .map(|(name, _, _)| *name)
            .unwrap_or("unknown")
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<&'static str> {
    AVAILABLE_SPECS.iter().map(|(name, _, _)| *name).collect()
}

/// Errors that can occur during processing
#[derive(thiserror::Error, Debug)]
pub enum ProcessingError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Runs sources through a [ProcessingSpec]
#[derive(Debug, Clone)]
pub struct Processor {
    max_label_width: usize,
}

impl Processor {
    pub fn new() -> Self {
        Self {
            max_label_width: DEFAULT_LABEL_WIDTH,
        }
    }

    pub fn from_config(config: &ToolConfig) -> Self {
        Self {
            max_label_width: config.treeviz.max_label_width,
        }
    }

    /// Process source text according to the given specification
    pub fn process_source(
        &self,
        source: &str,
        spec: &ProcessingSpec,
    ) -> Result<String, ProcessingError> {
        log::debug!("processing {} bytes as {}", source.len(), spec.name());
        match spec.stage {
            ProcessingStage::Token => {
                let tokens = match spec.format {
                    OutputFormat::RawSimple | OutputFormat::RawJson => {
                        tokenize_all(source).map_err(Error::from)?
                    }
                    _ => lex(source).map_err(Error::from)?,
                };
                format_tokens(&tokens, spec.format)
            }
            ProcessingStage::Ast => {
                let tokens = lex(source).map_err(Error::from)?;
                let doc = parse_tokens(source, tokens)?;
                match spec.format {
                    OutputFormat::Treeviz => Ok(formats::to_treeviz_str_with_width(
                        &doc,
                        self.max_label_width,
                    )),
                    OutputFormat::Json => Ok(formats::to_json(&doc)?),
                    OutputFormat::Yaml => Ok(formats::to_yaml(&doc)?),
                    OutputFormat::Debug => Ok(formats::to_debug_str(&doc)),
                    other => Err(ProcessingError::InvalidFormatType(format!(
                        "{:?} is not supported for the ast stage",
                        other
                    ))),
                }
            }
        }
    }

    /// Read a file and process it
    pub fn process_file<P: AsRef<Path>>(
        &self,
        file_path: P,
        spec: &ProcessingSpec,
    ) -> Result<String, ProcessingError> {
        let file_path = file_path.as_ref();
        if !file_path.exists() {
            return Err(ProcessingError::FileNotFound(
                file_path.display().to_string(),
            ));
        }
        let content = fs::read_to_string(file_path)?;
        self.process_source(&content, spec)
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[TokenSpan], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple | OutputFormat::RawSimple => {
            let mut result = String::new();
            for (token, _) in tokens {
                result.push_str(&token.to_string());
                if matches!(token, Token::Whitespace(ws) if ws.contains('\n')) {
                    result.push('\n');
                }
            }
            Ok(result)
        }
        OutputFormat::Json | OutputFormat::RawJson => Ok(formats::to_json(tokens)?),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{:?} is not supported for the token stage",
            other
        ))),
    }
}

/// Sample sources module for accessing curated tomlet documents
pub mod samples {
    use super::*;

    /// Available sample files (canonical sources)
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "000-fields.toml",
        "010-sections.toml",
        "020-lists.toml",
        "030-datetimes.toml",
        "040-comments.toml",
        "050-kitchensink.toml",
    ];

    const SAMPLES_DIR: &str = "docs/samples";

    /// Main interface for accessing sample files
    pub struct TomlSources;

    impl TomlSources {
        fn sample_path(filename: &str) -> String {
            format!("{}/{}", SAMPLES_DIR, filename)
        }

        fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(ProcessingError::FileNotFound(format!(
                    "Sample '{}' is not available. Available samples: {:?}",
                    filename, AVAILABLE_SAMPLES
                )));
            }
            Ok(())
        }

        /// Get sample content as raw string
        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;
            Ok(fs::read_to_string(Self::sample_path(filename))?)
        }

        /// Get sample content processed with the specified format
        pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;
            let spec = ProcessingSpec::from_string(format)?;
            Processor::new().process_file(Self::sample_path(filename), &spec)
        }

        /// List all available sample files
        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }
    }

}
