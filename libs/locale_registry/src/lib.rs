//! Aggregates a fixed set of locale resource packs into one immutable
//! mapping from locale tag to [`Bundle`], ordered by the tags.
//!
//! The entire point of this crate is that the order is _stable and
//! locale-aware_: iterating or serializing a [`LocaleRegistry`] always
//! yields its bundles in ascending alphabetical tag order, no matter the
//! order they were registered in.
//!
//! ```
//! use locale_registry::LocaleRegistry;
//!
//! let registry = LocaleRegistry::builder()
//!     .insert_json("zh-CN", r#"{ "greeting": "你好" }"#)?
//!     .insert_json("en-US", r#"{ "greeting": "Hello" }"#)?
//!     .insert_json("vi-VN", r#"{ "greeting": "Xin chào" }"#)?
//!     .build();
//!
//! let tags: Vec<_> = registry.tags().map(ToString::to_string).collect();
//! assert_eq!(tags, ["en-US", "vi-VN", "zh-CN"]);
//! # Ok::<(), locale_registry::Error>(())
//! ```
//!
//! Bundles are opaque to this crate: an arbitrarily nested mapping from
//! key to message string. Fallback resolution, pluralization, and message
//! formatting all live with the consumer.

mod bundle;
pub mod collate;
mod error;
mod registry;

pub use bundle::{Bundle, BundleValue};
pub use error::{Error, Result};
pub use registry::{LocaleRegistry, RegistryBuilder};

// re-exported so consumers don't need to name the crate for the tag type
pub use unic_langid::LanguageIdentifier;
