//! Document format trait and implementations

use crate::error::Error;
use crate::value::Value;
#[cfg(feature = "yaml")]
use serde::Deserialize;
use std::io::Read;

/// Trait for document format implementations
///
/// A format turns document text into a [`Value`] tree. This allows swapping
/// YAML for JSON, TOML, or other formats.
pub trait Format: Clone + Send + Sync {
    /// Short format name (e.g., "yaml", "json"), used in logs and errors
    fn name(&self) -> &'static str;

    /// Decode non-empty document text into its root value
    fn parse_document(&self, content: &str) -> Result<Value, Error>;

    /// Decode document text.
    ///
    /// Returns `Ok(None)` when the document has no content: no bytes, only
    /// whitespace, or a single null root (e.g. a YAML file with only comments).
    fn decode(&self, content: &str) -> Result<Option<Value>, Error> {
        if content.trim().is_empty() {
            return Ok(None);
        }
        match self.parse_document(content)? {
            Value::Null => Ok(None),
            root => Ok(Some(root)),
        }
    }

    /// Read a whole stream and decode it
    fn read<R: Read>(&self, mut reader: R) -> Result<Option<Value>, Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(Error::Read)?;
        self.decode(&content)
    }
}

/// Format used by [`ConfigParser::new`](crate::ConfigParser::new)
#[cfg(feature = "yaml")]
pub type DefaultFormat = YamlFormat;

/// Format used by [`ConfigParser::new`](crate::ConfigParser::new)
#[cfg(not(feature = "yaml"))]
pub type DefaultFormat = JsonFormat;

// =============================================================================
// YAML
// =============================================================================

/// YAML format (default)
#[cfg(feature = "yaml")]
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

#[cfg(feature = "yaml")]
impl YamlFormat {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "yaml")]
impl Format for YamlFormat {
    fn name(&self) -> &'static str {
        "yaml"
    }

    /// Only the first document of a multi-document stream is decoded; any
    /// documents after the first `---` are ignored.
    fn parse_document(&self, content: &str) -> Result<Value, Error> {
        match serde_yaml::Deserializer::from_str(content).next() {
            Some(document) => {
                Value::deserialize(document).map_err(|e| Error::decode(self.name(), e))
            }
            None => Ok(Value::Null),
        }
    }
}

// =============================================================================
// JSON
// =============================================================================

/// JSON format
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl JsonFormat {
    pub fn new() -> Self {
        Self
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn parse_document(&self, content: &str) -> Result<Value, Error> {
        serde_json::from_str(content).map_err(|e| Error::decode(self.name(), e))
    }
}

// =============================================================================
// TOML
// =============================================================================

/// TOML format
///
/// TOML tables do not keep document order; siblings come back sorted by key.
/// Datetimes decode to [`Value::Other`] and are rejected during flattening.
#[cfg(feature = "toml")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlFormat;

#[cfg(feature = "toml")]
impl TomlFormat {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "toml")]
impl Format for TomlFormat {
    fn name(&self) -> &'static str {
        "toml"
    }

    fn parse_document(&self, content: &str) -> Result<Value, Error> {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| Error::decode(self.name(), e))?;
        Ok(Value::from(table))
    }
}

// =============================================================================
// Tests
// =============================================================================
