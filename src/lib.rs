//! # nestcfg - Nested Config Flattener
//!
//! Feeds structured configuration files to flag-style option registries.
//! A document is decoded into a generic [`Value`] tree, and every leaf is
//! handed to a `set(name, value)` callback under a flattened name.
//!
//! ## Features
//!
//! - **Nested keys**: `a: {b: {c: 10}}` is assigned as `a.b.c = "10"`
//! - **Configurable delimiter**: `.` by default, anything else via the builder
//! - **Sequences**: every element is assigned under the same name, so
//!   list-valued options accumulate them
//! - **Formats**: YAML (default), JSON, and TOML (`toml` feature)
//! - **Single error type**: every failure comes back as a [`ParseError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! let yaml = "
//! string:
//!   key: a string
//! float:
//!   nested:
//!     key: 1.23
//! ";
//!
//! let mut flags = HashMap::new();
//! nestcfg::parse(yaml.as_bytes(), |name: &str, value: &str| {
//!     flags.insert(name.to_string(), value.to_string());
//!     Ok::<(), String>(())
//! })?;
//!
//! assert_eq!(flags["string.key"], "a string");
//! assert_eq!(flags["float.nested.key"], "1.23");
//! # Ok::<(), nestcfg::ParseError>(())
//! ```
//!
//! ## Custom Delimiter
//!
//! ```rust
//! use nestcfg::ConfigParser;
//!
//! let parser = ConfigParser::builder().delimiter("-").build();
//! let pairs = parser.collect("section:\n  value: 10\n".as_bytes())?;
//!
//! assert_eq!(pairs, [("section-value".to_string(), "10".to_string())]);
//! # Ok::<(), nestcfg::ParseError>(())
//! ```
//!
//! ## Errors
//!
//! Errors from the callback stop the parse and are returned wrapped, with
//! their message intact:
//!
//! ```rust
//! let err = nestcfg::parse("port: http".as_bytes(), |_: &str, value: &str| {
//!     value.parse::<u16>().map(|_| ())
//! })
//! .unwrap_err();
//!
//! assert!(err.is_assignment_error());
//! assert_eq!(
//!     err.to_string(),
//!     "error parsing configuration: invalid digit found in string"
//! );
//! ```

// Core modules
mod coerce;
mod error;
mod flatten;
mod parser;
mod value;

pub mod config;
pub mod format;

// Re-exports from core
pub use config::{ParserConfig, ParserConfigBuilder, DEFAULT_DELIMITER};
pub use error::{BoxError, ConversionError, Error, ParseError, Result};
pub use flatten::flatten;
pub use format::{DefaultFormat, Format, JsonFormat};
pub use parser::{ConfigParser, ConfigParserBuilder};
pub use value::Value;

#[cfg(feature = "yaml")]
pub use format::YamlFormat;

#[cfg(feature = "toml")]
pub use format::TomlFormat;

/// Parse a document with the default format and "." delimiter.
///
/// Shorthand for `ConfigParser::new().parse(reader, set)`.
///
/// # Errors
///
/// See [`ConfigParser::parse`].
pub fn parse<R, S, E>(reader: R, set: S) -> Result<()>
where
    R: std::io::Read,
    S: FnMut(&str, &str) -> std::result::Result<(), E>,
    E: Into<BoxError>,
{
    ConfigParser::new().parse(reader, set)
}
