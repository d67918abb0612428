//! Keys stored in a hashviz table.
//!
//! A key is either a small non-negative integer or a short string. The
//! [`Key`] enum itself accepts any `i32` or any string so that hash functions
//! can be exercised on out-of-domain input; [`Key::validate`] enforces the
//! domain a table actually admits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HashVizError, Result};

/// Smallest numeric key a table admits.
pub const MIN_NUMERIC_KEY: i32 = 0;

/// Largest numeric key a table admits.
pub const MAX_NUMERIC_KEY: i32 = 1023;

/// Longest string key a table admits, in UTF-16 code units.
pub const MAX_STRING_KEY_LEN: usize = 50;

/// The kind of keys a table is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyType {
    /// Integer keys in `[0, 1023]`.
    #[default]
    Number,
    /// String keys of length `1..=50`.
    String,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyType::Number => write!(f, "number"),
            KeyType::String => write!(f, "string"),
        }
    }
}

/// A table key.
///
/// Keys compare by value, so `Key::Int(7)` and `Key::Str("7".into())` are
/// different keys.
///
/// # Examples
///
/// ```
/// use hashviz_core::{Key, KeyType};
///
/// let key = Key::parse("42", KeyType::Number).unwrap();
/// assert_eq!(key, Key::Int(42));
/// assert!(Key::parse("2048", KeyType::Number).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// A numeric key.
    Int(i32),
    /// A string key.
    Str(String),
}

impl Key {
    /// Parses raw user input into a key of the given type and validates it.
    ///
    /// Numeric input is trimmed before parsing. String input is taken as-is.
    ///
    /// # Errors
    ///
    /// * [`HashVizError::InvalidKey`] - If numeric input is not an integer
    /// * [`HashVizError::KeyOutOfRange`] - If a number falls outside `[0, 1023]`
    /// * [`HashVizError::InvalidKeyLength`] - If a string is empty or too long
    pub fn parse(input: &str, key_type: KeyType) -> Result<Self> {
        let key = match key_type {
            KeyType::Number => {
                let trimmed = input.trim();
                let value: i64 = trimmed.parse().map_err(|_| HashVizError::InvalidKey {
                    input: input.to_string(),
                    reason: "not an integer".to_string(),
                })?;
                let value = i32::try_from(value).map_err(|_| HashVizError::KeyOutOfRange {
                    key: value,
                    min: MIN_NUMERIC_KEY,
                    max: MAX_NUMERIC_KEY,
                })?;
                Key::Int(value)
            }
            KeyType::String => Key::Str(input.to_string()),
        };
        key.validate(key_type)?;
        Ok(key)
    }

    /// Returns the type of this key.
    pub fn key_type(&self) -> KeyType {
        match self {
            Key::Int(_) => KeyType::Number,
            Key::Str(_) => KeyType::String,
        }
    }

    /// Checks that the key has the expected type and lies inside the admitted
    /// domain.
    ///
    /// # Errors
    ///
    /// * [`HashVizError::KeyTypeMismatch`] - If the key is of the other type
    /// * [`HashVizError::KeyOutOfRange`] - If a number falls outside `[0, 1023]`
    /// * [`HashVizError::InvalidKeyLength`] - If a string is empty or too long
    pub fn validate(&self, expected: KeyType) -> Result<()> {
        if self.key_type() != expected {
            return Err(HashVizError::KeyTypeMismatch {
                expected,
                actual: self.key_type(),
            });
        }

        match self {
            Key::Int(value) => {
                if !(MIN_NUMERIC_KEY..=MAX_NUMERIC_KEY).contains(value) {
                    return Err(HashVizError::KeyOutOfRange {
                        key: i64::from(*value),
                        min: MIN_NUMERIC_KEY,
                        max: MAX_NUMERIC_KEY,
                    });
                }
            }
            Key::Str(text) => {
                let len = text.encode_utf16().count();
                if len == 0 || len > MAX_STRING_KEY_LEN {
                    return Err(HashVizError::InvalidKeyLength {
                        len,
                        max: MAX_STRING_KEY_LEN,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the numeric value if this is a numeric key.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Key::Int(value) => Some(*value),
            Key::Str(_) => None,
        }
    }

    /// Returns the text if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(text) => Some(text),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(value) => write!(f, "{}", value),
            Key::Str(text) => write!(f, "{}", text),
        }
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}
