//! Common test utilities for nestcfg integration tests
//!
//! Provides a small typed flag registry standing in for a command-line flag
//! binder, plus fixture helpers.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;

// =============================================================================
// Flag Registry
// =============================================================================

/// A typed flag value
#[derive(Debug, Clone, PartialEq)]
pub enum Flag {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Accumulates one entry per assignment
    List(Vec<String>),
}

/// Minimal flag set: named, typed options that accept string assignments.
#[derive(Debug, Default)]
pub struct TestFlags {
    flags: HashMap<String, Flag>,
    /// Every assignment in the order it was received
    pub history: Vec<(String, String)>,
}

impl TestFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags `s`, `i`, `f`, `b`, `x` with zero defaults
    pub fn defaults() -> Self {
        Self::new()
            .string("s", "")
            .int("i", 0)
            .float("f", 0.0)
            .bool("b", false)
            .list("x")
    }

    /// Same flags as [`defaults`](Self::defaults) with non-zero defaults
    pub fn nonzero_defaults() -> Self {
        Self::new()
            .string("s", "foo")
            .int("i", 123)
            .float("f", 9.99)
            .bool("b", true)
            .list("x")
    }

    pub fn string(mut self, name: &str, default: &str) -> Self {
        self.flags.insert(name.into(), Flag::Str(default.into()));
        self
    }

    pub fn int(mut self, name: &str, default: i64) -> Self {
        self.flags.insert(name.into(), Flag::Int(default));
        self
    }

    pub fn float(mut self, name: &str, default: f64) -> Self {
        self.flags.insert(name.into(), Flag::Float(default));
        self
    }

    pub fn bool(mut self, name: &str, default: bool) -> Self {
        self.flags.insert(name.into(), Flag::Bool(default));
        self
    }

    pub fn list(mut self, name: &str) -> Self {
        self.flags.insert(name.into(), Flag::List(Vec::new()));
        self
    }

    /// Assign a string value to a flag, parsing it into the flag's type
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), String> {
        self.history.push((name.to_string(), value.to_string()));

        let flag = self
            .flags
            .get_mut(name)
            .ok_or_else(|| format!("flag provided but not defined: -{name}"))?;
        let invalid = |e: &dyn std::fmt::Display| {
            format!("invalid value {value:?} for flag -{name}: parse error: {e}")
        };

        match flag {
            Flag::Str(s) => *s = value.to_string(),
            Flag::Int(n) => *n = value.parse().map_err(|e| invalid(&e))?,
            Flag::Float(n) => *n = value.parse().map_err(|e| invalid(&e))?,
            Flag::Bool(b) => *b = value.parse().map_err(|e| invalid(&e))?,
            Flag::List(items) => items.push(value.to_string()),
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> &Flag {
        &self.flags[name]
    }

    pub fn get_str(&self, name: &str) -> &str {
        match self.get(name) {
            Flag::Str(s) => s,
            other => panic!("flag -{name} is not a string: {other:?}"),
        }
    }

    pub fn get_int(&self, name: &str) -> i64 {
        match self.get(name) {
            Flag::Int(n) => *n,
            other => panic!("flag -{name} is not an int: {other:?}"),
        }
    }

    pub fn get_float(&self, name: &str) -> f64 {
        match self.get(name) {
            Flag::Float(n) => *n,
            other => panic!("flag -{name} is not a float: {other:?}"),
        }
    }

    pub fn get_bool(&self, name: &str) -> bool {
        match self.get(name) {
            Flag::Bool(b) => *b,
            other => panic!("flag -{name} is not a bool: {other:?}"),
        }
    }

    pub fn get_list(&self, name: &str) -> &[String] {
        match self.get(name) {
            Flag::List(items) => items,
            other => panic!("flag -{name} is not a list: {other:?}"),
        }
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Path to a file under `tests/testdata`
pub fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

/// Route crate logs to the test output (set `RUST_LOG=debug` to see them)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a pair for comparing against collected assignments
pub fn pair(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

/// Sort pairs by name, keeping the relative order of equal names
pub fn sorted(mut pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}
