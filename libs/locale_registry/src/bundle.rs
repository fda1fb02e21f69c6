use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The translated resources for a single locale.
///
/// A bundle is an opaque mapping from key to [`BundleValue`], preserving
/// the key order of the resource it was parsed from. The registry never
/// interprets its contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle {
    entries: IndexMap<String, BundleValue>,
}

/// A single entry in a [`Bundle`]: either a message or a nested group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BundleValue {
    /// A translated message string.
    Message(String),
    /// A nested group of further entries.
    Group(IndexMap<String, BundleValue>),
}

impl Bundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a top-level entry by key.
    pub fn get(&self, key: &str) -> Option<&BundleValue> {
        self.entries.get(key)
    }

    /// Iterates the top-level entries in resource order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, BundleValue> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses a bundle from JSON resource text.
///
/// The top level must be a JSON object; values must be strings or further
/// objects, nested arbitrarily deep.
impl FromStr for Bundle {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl<'a> IntoIterator for &'a Bundle {
    type Item = (&'a String, &'a BundleValue);
    type IntoIter = indexmap::map::Iter<'a, String, BundleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, BundleValue)> for Bundle {
    fn from_iter<I: IntoIterator<Item = (String, BundleValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl BundleValue {
    /// Returns the message text, if this entry is a message.
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(text) => Some(text),
            Self::Group(_) => None,
        }
    }

    /// Returns the nested entries, if this entry is a group.
    pub fn as_group(&self) -> Option<&IndexMap<String, BundleValue>> {
        match self {
            Self::Message(_) => None,
            Self::Group(entries) => Some(entries),
        }
    }
}
