//! Parser configuration

use crate::format::{DefaultFormat, Format};

/// Default delimiter used to join nested keys
pub const DEFAULT_DELIMITER: &str = ".";

/// Configuration for a [`ConfigParser`](crate::ConfigParser)
///
/// Fixed once the parser is built.
#[derive(Debug, Clone)]
pub struct ParserConfig<F: Format = DefaultFormat> {
    /// String placed between nested keys (e.g. "." turns `a: {b: 1}` into `a.b`)
    pub delimiter: String,

    /// Treat a missing config file as an empty document in
    /// [`parse_file`](crate::ConfigParser::parse_file)
    pub allow_missing_file: bool,

    /// Document format implementation
    pub format: F,
}

impl Default for ParserConfig<DefaultFormat> {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.into(),
            allow_missing_file: false,
            format: DefaultFormat::default(),
        }
    }
}

impl ParserConfig<DefaultFormat> {
    /// Create a new builder for ParserConfig
    ///
    /// # Example
    /// ```rust
    /// use nestcfg::ParserConfig;
    ///
    /// let config = ParserConfig::builder()
    ///     .delimiter("-")
    ///     .build();
    /// assert_eq!(config.delimiter, "-");
    /// ```
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::new()
    }
}

/// Builder for creating ParserConfig with a fluent API
#[derive(Debug, Clone)]
pub struct ParserConfigBuilder<F: Format = DefaultFormat> {
    delimiter: String,
    allow_missing_file: bool,
    format: F,
}

impl Default for ParserConfigBuilder<DefaultFormat> {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserConfigBuilder<DefaultFormat> {
    /// Create a new builder with the default delimiter and format
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.into(),
            allow_missing_file: false,
            format: DefaultFormat::default(),
        }
    }
}

impl<F: Format> ParserConfigBuilder<F> {
    /// Set the delimiter used to join nested keys (default: ".").
    ///
    /// Given
    ///
    /// ```yaml
    /// section:
    ///   subsection:
    ///     value: 10
    /// ```
    ///
    /// the default delimiter assigns `section.subsection.value`; with `"-"` it
    /// assigns `section-subsection-value` instead.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Treat a missing config file as empty instead of failing.
    pub fn allow_missing_file(mut self, allow: bool) -> Self {
        self.allow_missing_file = allow;
        self
    }

    /// Use a specific format instance
    pub fn format<G: Format>(self, format: G) -> ParserConfigBuilder<G> {
        ParserConfigBuilder {
            delimiter: self.delimiter,
            allow_missing_file: self.allow_missing_file,
            format,
        }
    }

    /// Use a format type with its default settings
    ///
    /// # Example
    /// ```rust
    /// use nestcfg::{JsonFormat, ParserConfig, Format};
    ///
    /// let config = ParserConfig::builder()
    ///     .with_format::<JsonFormat>()
    ///     .build();
    /// assert_eq!(config.format.name(), "json");
    /// ```
    pub fn with_format<G: Format + Default>(self) -> ParserConfigBuilder<G> {
        self.format(G::default())
    }

    /// Build the ParserConfig
    pub fn build(self) -> ParserConfig<F> {
        ParserConfig {
            delimiter: self.delimiter,
            allow_missing_file: self.allow_missing_file,
            format: self.format,
        }
    }
}
