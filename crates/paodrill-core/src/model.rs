//! Core data model: two-digit keys and their PAO associations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrainerError;

/// Size of the key domain (00 through 99).
pub const KEY_COUNT: usize = 100;

/// A two-digit mnemonic key in 00..=99.
///
/// Keys serialize as zero-padded strings ("07") so they can index JSON maps
/// and match the CSV column format. Parsing accepts both "7" and "07".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Key(u8);

impl Key {
    /// Construct a key, rejecting values outside the domain.
    pub fn new(value: u8) -> Result<Self, TrainerError> {
        if (value as usize) < KEY_COUNT {
            Ok(Key(value))
        } else {
            Err(TrainerError::UnknownKey(value.to_string()))
        }
    }

    /// Numeric value, 0..=99.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Every key in ascending order, 00 through 99.
    pub fn all() -> impl Iterator<Item = Key> {
        (0..KEY_COUNT as u8).map(Key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Key {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let valid = !digits.is_empty()
            && digits.len() <= 2
            && digits.bytes().all(|b| b.is_ascii_digit());
        if !valid {
            return Err(TrainerError::UnknownKey(s.to_string()));
        }
        let value: u8 = digits
            .parse()
            .map_err(|_| TrainerError::UnknownKey(s.to_string()))?;
        Key::new(value)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> String {
        key.to_string()
    }
}

impl TryFrom<String> for Key {
    type Error = TrainerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// An immutable Person/Action/Object triple bound to a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    pub person: String,
    pub action: String,
    pub object: String,
}
