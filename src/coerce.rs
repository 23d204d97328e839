//! Scalar coercion
//!
//! Turns a scalar [`Value`] into the string handed to the assignment callback.
//! Only the kinds below have a string form; everything else (binary data,
//! tagged values, nested collections, format-specific kinds) is rejected with
//! a [`ConversionError`] rather than stringified.
//!
//! | Kind | Output |
//! |---|---|
//! | byte | the one-character string it represents |
//! | string | unchanged |
//! | bool | `true` / `false` |
//! | unsigned / signed integers | base-10 digits, `-` if negative |
//! | float | shortest round-trippable decimal, general format |
//! | null | empty string |

use crate::error::ConversionError;
use crate::value::Value;

impl Value {
    /// Canonical string form of a scalar value.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] for any kind outside the coercion table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nestcfg::Value;
    ///
    /// assert_eq!(Value::Float(3.14).to_flag_string().unwrap(), "3.14");
    /// assert_eq!(Value::Null.to_flag_string().unwrap(), "");
    /// assert!(Value::Bytes(vec![0xde, 0xad]).to_flag_string().is_err());
    /// ```
    pub fn to_flag_string(&self) -> Result<String, ConversionError> {
        match self {
            Value::Byte(b) => Ok(char::from(*b).to_string()),
            Value::String(s) => Ok(s.clone()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Unsigned(n) => Ok(n.to_string()),
            Value::Int(n) => Ok(n.to_string()),
            Value::Int64(n) => Ok(n.to_string()),
            Value::Float(n) => Ok(format_float(*n)),
            Value::Null => Ok(String::new()),
            other => Err(ConversionError::new(other.clone())),
        }
    }
}

/// Largest decimal exponent printed without scientific notation
const MAX_PLAIN_EXPONENT: i32 = 5;
/// Smallest decimal exponent printed without scientific notation
const MIN_PLAIN_EXPONENT: i32 = -4;

/// Format a float with the fewest digits that parse back to the same value.
///
/// Plain notation is used while the decimal exponent stays within
/// `-4..=5`; outside that range the output switches to `d.ddde±XX`.
pub(crate) fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let inf = if n > 0.0 { "+Inf" } else { "-Inf" };
        return inf.to_string();
    }

    // `{:e}` is already the shortest round-trip form, e.g. "1.5e-7"
    let scientific = format!("{n:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if (MIN_PLAIN_EXPONENT..=MAX_PLAIN_EXPONENT).contains(&exponent) {
        n.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
