//! Configuration parser
//!
//! [`ConfigParser`] reads a document, decodes it with the configured
//! [`Format`] and flattens every root key into assignments. All failures are
//! wrapped once in [`ParseError`](crate::ParseError).

mod builder;

pub use builder::ConfigParserBuilder;

use crate::config::ParserConfig;
use crate::error::{BoxError, Error, Result};
use crate::flatten::flatten;
use crate::format::{DefaultFormat, Format};
use crate::value::Value;

use log::debug;
use std::io::Read;
use std::path::Path;

/// Flattens structured configuration documents into `(name, value)` assignments.
///
/// # Example
///
/// ```rust
/// use nestcfg::ConfigParser;
///
/// let parser = ConfigParser::builder().delimiter("-").build();
///
/// let mut assigned = Vec::new();
/// parser.parse_str("server:\n  port: 8080\n", |name: &str, value: &str| {
///     assigned.push(format!("{name}={value}"));
///     Ok::<(), String>(())
/// })?;
///
/// assert_eq!(assigned, ["server-port=8080"]);
/// # Ok::<(), nestcfg::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigParser<F: Format = DefaultFormat> {
    config: ParserConfig<F>,
}

impl Default for ConfigParser<DefaultFormat> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser<DefaultFormat> {
    /// Create a parser with the default format and "." delimiter
    pub fn new() -> Self {
        Self::from_config(ParserConfig::default())
    }

    /// Create a builder for configuring a parser
    pub fn builder() -> ConfigParserBuilder {
        ConfigParserBuilder::new()
    }
}

impl<F: Format> ConfigParser<F> {
    /// Create a parser from an existing configuration
    pub fn from_config(config: ParserConfig<F>) -> Self {
        Self { config }
    }

    /// The parser's configuration
    pub fn config(&self) -> &ParserConfig<F> {
        &self.config
    }

    /// Delimiter used to join nested keys
    pub fn delimiter(&self) -> &str {
        &self.config.delimiter
    }

    /// Parse a document from `reader`, calling `set(name, value)` for every
    /// flattened assignment.
    ///
    /// An empty stream is not an error and produces no calls. Sibling keys
    /// are visited in the decoder's order, which callers should not rely on.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`](crate::ParseError) wrapping the first failure:
    /// an unreadable stream, invalid document syntax, a root that is not a
    /// mapping, a key or value with no string form, or an error from `set`.
    pub fn parse<R, S, E>(&self, reader: R, mut set: S) -> Result<()>
    where
        R: Read,
        S: FnMut(&str, &str) -> std::result::Result<(), E>,
        E: Into<BoxError>,
    {
        let root = self.config.format.read(reader)?;
        self.assign_document(root, &mut set)?;
        Ok(())
    }

    /// Parse a document held in memory. See [`parse`](Self::parse).
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub fn parse_str<S, E>(&self, content: &str, mut set: S) -> Result<()>
    where
        S: FnMut(&str, &str) -> std::result::Result<(), E>,
        E: Into<BoxError>,
    {
        let root = self.config.format.decode(content)?;
        self.assign_document(root, &mut set)?;
        Ok(())
    }

    /// Parse a config file. See [`parse`](Self::parse).
    ///
    /// If the file does not exist and the parser was built with
    /// `allow_missing_file(true)`, this succeeds without calling `set`.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse), plus a wrapped [`Error::FileRead`]
    /// when the file cannot be opened.
    pub fn parse_file<S, E>(&self, path: impl AsRef<Path>, set: S) -> Result<()>
    where
        S: FnMut(&str, &str) -> std::result::Result<(), E>,
        E: Into<BoxError>,
    {
        let path = path.as_ref();
        let file = match std::fs::File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && self.config.allow_missing_file => {
                debug!("Config file '{}' not found, skipping", path.display());
                return Ok(());
            }
            Err(source) => {
                return Err(Error::FileRead {
                    path: path.to_path_buf(),
                    source,
                }
                .into());
            }
        };

        debug!("Reading config file '{}'", path.display());
        self.parse(std::io::BufReader::new(file), set)
    }

    /// Parse a document and return the assignments instead of applying them.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse), except that nothing can reject an
    /// assignment.
    pub fn collect<R: Read>(&self, reader: R) -> Result<Vec<(String, String)>> {
        let mut pairs = Vec::new();
        self.parse(reader, |name: &str, value: &str| {
            pairs.push((name.to_string(), value.to_string()));
            Ok::<(), BoxError>(())
        })?;
        Ok(pairs)
    }

    fn assign_document<S, E>(&self, root: Option<Value>, set: &mut S) -> std::result::Result<(), Error>
    where
        S: FnMut(&str, &str) -> std::result::Result<(), E>,
        E: Into<BoxError>,
    {
        let format = self.config.format.name();
        let Some(root) = root else {
            debug!("Empty {format} document, nothing to assign");
            return Ok(());
        };

        let entries = match root {
            Value::Mapping(entries) => entries,
            other => {
                return Err(Error::decode(
                    format,
                    format!("expected a mapping at the document root, found {}", other.kind()),
                ));
            }
        };

        debug!(
            "Flattening {} root keys from {format} document (delimiter '{}')",
            entries.len(),
            self.config.delimiter
        );

        let mut assigned = 0usize;
        let mut counted = |name: &str, value: &str| {
            assigned += 1;
            set(name, value)
        };

        for (key, value) in &entries {
            let name = key.to_flag_string().map_err(|source| Error::UnsupportedKey {
                parent: String::new(),
                source,
            })?;
            flatten(value, &name, &self.config.delimiter, &mut counted)?;
        }

        debug!("Applied {assigned} configuration values");
        Ok(())
    }
}
