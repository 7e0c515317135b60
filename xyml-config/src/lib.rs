//! Shared configuration loader for the xyml toolchain.
//!
//! `defaults/xyml.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`XymlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use xyml::formats::{JsonFormat, XmlFormat, XymlFormat};
use xyml::{FormatRegistry, RenderStyle, XmlOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/xyml.default.toml");

/// Top-level configuration consumed by xyml applications.
#[derive(Debug, Clone, Deserialize)]
pub struct XymlConfig {
    pub render: RenderConfig,
    pub xml: XmlConfig,
    pub json: JsonConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub style: RenderStyle,
}

#[derive(Debug, Clone, Deserialize)]
pub struct XmlConfig {
    /// Spaces per nesting level, 0 for compact output
    pub indent: usize,
}

impl From<&XmlConfig> for XmlOptions {
    fn from(config: &XmlConfig) -> Self {
        XmlOptions {
            indent: (config.indent > 0).then_some(config.indent),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

impl XymlConfig {
    /// The built-in formats, with their defaults taken from this configuration.
    pub fn format_registry(&self) -> FormatRegistry {
        let mut registry = FormatRegistry::new();
        registry.register(XymlFormat::new(self.render.style));
        registry.register(XmlFormat::new(XmlOptions::from(&self.xml)));
        registry.register(JsonFormat::new(self.json.pretty));
        registry
    }
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

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
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
    pub fn build(self) -> Result<XymlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<XymlConfig, ConfigError> {
    Loader::new().build()
}
