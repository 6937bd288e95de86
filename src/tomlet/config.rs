//! Configuration loading for the tomlet tool.
//!
//! `defaults/tomlet.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. User files and single-key overrides are layered on top via
//! [Loader] before deserializing into [ToolConfig].
//!
//! The parser itself takes no configuration; only output and inspection are tunable.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/tomlet.default.toml");

/// Top-level configuration consumed by the tomlet tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    pub output: OutputConfig,
    pub treeviz: TreevizConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Processing format string, see [ProcessingSpec](crate::tomlet::processor::ProcessingSpec)
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub max_label_width: usize,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ToolConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.output.format, "ast-treeviz");
        assert_eq!(config.treeviz.max_label_width, 40);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "ast-json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "ast-json");
        assert_eq!(config.treeviz.max_label_width, 40);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[treeviz]\nmax_label_width = 12").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.treeviz.max_label_width, 12);
        assert_eq!(config.output.format, "ast-treeviz");
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new()
            .with_file("definitely/not/here.toml")
            .build()
            .is_err());
    }
}
