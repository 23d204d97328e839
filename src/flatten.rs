//! Flattening traversal
//!
//! Walks a [`Value`] tree depth-first and turns it into flag-style
//! `(name, value)` assignments:
//!
//! - mapping entries extend the name with `delimiter + key`
//! - sequence elements are each assigned under the *unchanged* name, so the
//!   receiving option sees one assignment per element
//! - scalars are assigned once
//!
//! The first failure stops the walk. Assignments made before it are not
//! undone.

use crate::error::{BoxError, Error};
use crate::value::Value;
use log::trace;

/// Flatten `value` into assignments under `prefix`.
///
/// `set` is called with the flattened name and the coerced string value for
/// every scalar leaf, and once per element of every sequence.
///
/// # Errors
///
/// - [`Error::UnsupportedKey`] if a mapping key has no string form
/// - [`Error::UnsupportedValue`] if a leaf or sequence element has no string form
/// - [`Error::Assignment`] if `set` returns an error
///
/// # Example
///
/// ```rust
/// use nestcfg::{flatten, Value};
///
/// let tree = Value::Mapping(vec![(
///     Value::from("nested"),
///     Value::Mapping(vec![(Value::from("key"), Value::from(10i64))]),
/// )]);
///
/// let mut pairs = Vec::new();
/// flatten(&tree, "section", ".", &mut |name: &str, value: &str| {
///     pairs.push((name.to_string(), value.to_string()));
///     Ok::<(), String>(())
/// })?;
///
/// assert_eq!(pairs, [("section.nested.key".to_string(), "10".to_string())]);
/// # Ok::<(), nestcfg::Error>(())
/// ```
pub fn flatten<S, E>(value: &Value, prefix: &str, delimiter: &str, set: &mut S) -> Result<(), Error>
where
    S: FnMut(&str, &str) -> Result<(), E>,
    E: Into<BoxError>,
{
    match value {
        Value::Mapping(entries) => {
            for (key, child) in entries {
                let key = key.to_flag_string().map_err(|source| Error::UnsupportedKey {
                    parent: prefix.to_string(),
                    source,
                })?;
                let name = format!("{prefix}{delimiter}{key}");
                flatten(child, &name, delimiter, set)?;
            }
            Ok(())
        }
        Value::Sequence(items) => {
            for item in items {
                assign(set, prefix, item)?;
            }
            Ok(())
        }
        scalar => assign(set, prefix, scalar),
    }
}

fn assign<S, E>(set: &mut S, name: &str, value: &Value) -> Result<(), Error>
where
    S: FnMut(&str, &str) -> Result<(), E>,
    E: Into<BoxError>,
{
    let value = value.to_flag_string().map_err(|source| Error::UnsupportedValue {
        name: name.to_string(),
        source,
    })?;

    trace!("Assigning '{name}' = '{value}'");
    set(name, &value).map_err(|e| Error::Assignment {
        name: name.to_string(),
        source: e.into(),
    })
}
