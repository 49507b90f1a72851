use serde::{Deserialize, Serialize};

/// Key–value label attached to a stack.
///
/// Both fields are compared byte-for-byte: no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    key: String,
    value: String,
}

impl Tag {
    /// Create a new tag.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Get the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` when both key and value are equal to the given pair.
    pub fn is(&self, key: &str, value: &str) -> bool {
        self.key == key && self.value == value
    }
}

impl From<(String, String)> for Tag {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}

impl From<(&str, &str)> for Tag {
    fn from((key, value): (&str, &str)) -> Self {
        Self::new(key, value)
    }
}
