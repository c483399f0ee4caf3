//! String-encoded IDs
//!
//! Some request fields carry numeric ids as JSON strings (`"17"`).

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A numeric id transported as a JSON string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringId(pub i64);

impl StringId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for StringId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse an id from its string form.
pub fn from_string(s: &str) -> Result<i64, std::num::ParseIntError> {
    s.parse()
}

impl Serialize for StringId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StringId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match from_string(&raw) {
            Ok(id) if id >= 0 => Ok(Self(id)),
            _ => Err(de::Error::custom(format!(
                "trying to parse '{raw}' into an id"
            ))),
        }
    }
}
