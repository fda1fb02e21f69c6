use indexmap::IndexMap;
use serde::Serialize;
use unic_langid::LanguageIdentifier;

use crate::bundle::Bundle;
use crate::collate;
use crate::error::{Error, Result};

/// An immutable mapping from locale tag to [`Bundle`], ordered by tag.
///
/// Built once via [`LocaleRegistry::builder`] and never mutated after.
/// Iteration and serialization always yield entries in ascending
/// alphabetical tag order, per [`collate`]. Since the value is read-only,
/// it may be shared across threads without synchronization.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct LocaleRegistry {
    entries: IndexMap<LanguageIdentifier, Bundle>,
}

impl LocaleRegistry {
    /// Creates a new builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder { pairs: Vec::new() }
    }

    /// Gets the bundle for a locale tag.
    pub fn get(&self, tag: &LanguageIdentifier) -> Option<&Bundle> {
        self.entries.get(tag)
    }

    /// Gets the bundle for a locale tag in string form.
    ///
    /// The string is matched as a parsed tag, so case differences in the
    /// tag do not matter. Returns [`None`] for unparseable tags.
    pub fn get_str(&self, tag: &str) -> Option<&Bundle> {
        let tag: LanguageIdentifier = tag.parse().ok()?;
        self.get(&tag)
    }

    /// Whether a bundle is registered for this tag.
    pub fn contains(&self, tag: &LanguageIdentifier) -> bool {
        self.entries.contains_key(tag)
    }

    /// Iterates the registered tags in sorted order.
    pub fn tags(&self) -> impl ExactSizeIterator<Item = &LanguageIdentifier> {
        self.entries.keys()
    }

    /// Iterates the entries in sorted tag order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, LanguageIdentifier, Bundle> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a LocaleRegistry {
    type Item = (&'a LanguageIdentifier, &'a Bundle);
    type IntoIter = indexmap::map::Iter<'a, LanguageIdentifier, Bundle>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl PartialEq for LocaleRegistry {
    // order-sensitive, unlike IndexMap's own PartialEq
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().zip(&other.entries).all(|(a, b)| a == b)
    }
}

/// Builder for a [`LocaleRegistry`].
///
/// Collects `(tag, bundle)` pairs in registration order; [`build`] sorts
/// them and materializes the registry.
///
/// [`build`]: Self::build
#[derive(Debug)]
#[must_use]
pub struct RegistryBuilder {
    pairs: Vec<(LanguageIdentifier, Bundle)>,
}

impl RegistryBuilder {
    /// Registers a bundle for a locale tag.
    pub fn insert(mut self, tag: LanguageIdentifier, bundle: Bundle) -> Self {
        self.pairs.push((tag, bundle));
        self
    }

    /// Registers a bundle, parsing the tag and the JSON resource text.
    ///
    /// This is the entry point for embedded resources.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is not a valid language identifier or
    /// the resource text is not a valid bundle.
    pub fn insert_json(self, tag: &str, json: &str) -> Result<Self> {
        let parsed: LanguageIdentifier = tag.parse().map_err(|source| Error::Tag {
            tag: tag.to_owned(),
            source,
        })?;

        let bundle: Bundle = json.parse().map_err(|source| Error::Bundle {
            tag: tag.to_owned(),
            source,
        })?;

        Ok(self.insert(parsed, bundle))
    }

    /// Sorts the registered pairs by tag and builds the registry.
    ///
    /// The sort is stable, so if the same tag was registered more than
    /// once, the bundles stay in registration order and the map insert
    /// below keeps the last one. Duplicates are not an error.
    pub fn build(mut self) -> LocaleRegistry {
        self.pairs
            .sort_by_cached_key(|(tag, _)| collate::sort_key(tag));

        let mut entries = IndexMap::with_capacity(self.pairs.len());
        for (tag, bundle) in self.pairs {
            entries.insert(tag, bundle);
        }

        LocaleRegistry { entries }
    }
}
