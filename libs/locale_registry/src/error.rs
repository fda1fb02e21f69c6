//! Error handling types.

pub type Result<T> = std::result::Result<T, Error>;

/// Potential errors when assembling a locale registry from resource text.
///
/// Note that duplicate locale tags are _not_ an error: registering the same
/// tag twice silently keeps the later bundle.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A locale tag could not be parsed as a language identifier.
    #[error("invalid locale tag {tag:?}")]
    Tag {
        tag: String,
        source: unic_langid::LanguageIdentifierError,
    },
    /// A bundle resource was not valid JSON, or its top level was not an
    /// object.
    #[error("invalid bundle resource for {tag:?}")]
    Bundle {
        tag: String,
        source: serde_json::Error,
    },
}
