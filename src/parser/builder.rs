//! Builder for ConfigParser
//!
//! This module contains [`ConfigParserBuilder`] which provides a fluent API
//! for creating a [`ConfigParser`](super::ConfigParser).

use crate::config::ParserConfigBuilder;
use crate::format::{DefaultFormat, Format};

use super::ConfigParser;

/// Builder for creating a [`ConfigParser`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use nestcfg::{ConfigParser, JsonFormat};
///
/// let parser = ConfigParser::builder()
///     .delimiter("-")
///     .allow_missing_file(true)
///     .with_format::<JsonFormat>()
///     .build();
///
/// assert_eq!(parser.delimiter(), "-");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigParserBuilder<F: Format = DefaultFormat> {
    config_builder: ParserConfigBuilder<F>,
}

impl Default for ConfigParserBuilder<DefaultFormat> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParserBuilder<DefaultFormat> {
    /// Create a new builder with the default format and "." delimiter.
    pub fn new() -> Self {
        Self {
            config_builder: ParserConfigBuilder::new(),
        }
    }
}

impl<F: Format> ConfigParserBuilder<F> {
    /// Set the delimiter used to join nested keys (default: ".").
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.delimiter(delimiter);
        self
    }

    /// Treat a missing config file as empty in
    /// [`parse_file`](ConfigParser::parse_file).
    pub fn allow_missing_file(mut self, allow: bool) -> Self {
        self.config_builder = self.config_builder.allow_missing_file(allow);
        self
    }

    /// Decode documents with the given format instance.
    pub fn format<G: Format>(self, format: G) -> ConfigParserBuilder<G> {
        ConfigParserBuilder {
            config_builder: self.config_builder.format(format),
        }
    }

    /// Decode documents with a format type's default settings.
    pub fn with_format<G: Format + Default>(self) -> ConfigParserBuilder<G> {
        ConfigParserBuilder {
            config_builder: self.config_builder.with_format::<G>(),
        }
    }

    /// Build the [`ConfigParser`].
    pub fn build(self) -> ConfigParser<F> {
        ConfigParser::from_config(self.config_builder.build())
    }
}
