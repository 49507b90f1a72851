use serde::{Deserialize, Serialize};

use crate::Tag;

/// Ordered list of tags as reported by the provider.
///
/// Order is preserved and duplicate keys are kept; lookups never deduplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(pub Vec<Tag>);

impl Tags {
    /// Create an empty tag list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of tags, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all tags in provider order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    /// Append a tag.
    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.push(Tag::new(key, value));
    }

    /// Returns `true` if any tag carries exactly this key and value.
    ///
    /// Scanning stops at the first hit.
    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.0.iter().any(|t| t.is(key, value))
    }
}

impl<K, V> FromIterator<(K, V)> for Tags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| Tag::new(k, v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Tags;

    #[test]
    fn new_is_empty() {
        let tags = Tags::new();
        assert!(tags.is_empty());
        assert!(!tags.contains("Env", "tmp"));
    }

    #[test]
    fn contains_matches_any_position() {
        let tags: Tags = [("Owner", "ci"), ("Env", "tmp")].into_iter().collect();
        assert!(tags.contains("Env", "tmp"));
        assert!(tags.contains("Owner", "ci"));
        assert!(!tags.contains("Env", "ci"));
    }

    #[test]
    fn duplicate_keys_are_kept_and_any_pair_matches() {
        let mut tags = Tags::new();
        tags.push("Env", "prod");
        tags.push("Env", "tmp");

        assert_eq!(tags.len(), 2);
        let keys: Vec<_> = tags.iter().map(|t| t.key()).collect();
        assert_eq!(keys, ["Env", "Env"]);
        assert!(tags.contains("Env", "tmp"));
        assert!(tags.contains("Env", "prod"));
    }

    #[test]
    fn serde_is_a_plain_array() {
        let tags: Tags = [("Env", "tmp")].into_iter().collect();
        let json = serde_json::to_string(&tags).unwrap();
        assert!(json.starts_with('['));

        let back: Tags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }
}
