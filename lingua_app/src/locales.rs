//! The locale packs shipped with the application.
//!
//! Packs are embedded at compile time; there is no runtime locale
//! discovery. Registration order here is irrelevant, the registry sorts
//! its entries by tag.

use locale_registry::{LocaleRegistry, Result};

static PACKS: &[(&str, &str)] = &[
    ("zh-CN", include_str!("../assets/locales/zh-CN.json")),
    ("en-US", include_str!("../assets/locales/en-US.json")),
    ("vi-VN", include_str!("../assets/locales/vi-VN.json")),
];

/// Builds the registry from the embedded packs.
///
/// # Errors
///
/// Returns an error if a shipped pack is malformed. This can only happen
/// when a bad resource got past CI, so the caller just bails out.
pub fn build() -> Result<LocaleRegistry> {
    let mut builder = LocaleRegistry::builder();
    for (tag, json) in PACKS {
        builder = builder.insert_json(tag, json)?;
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use locale_registry::BundleValue;

    use super::*;

    #[test]
    fn shipped_packs_are_valid() {
        let registry = build().expect("shipped packs must be valid");
        assert_eq!(registry.len(), PACKS.len());
    }

    #[test]
    fn registry_order_is_alphabetical() {
        let registry = build().expect("shipped packs must be valid");

        let tags: Vec<_> = registry.tags().map(ToString::to_string).collect();
        assert_eq!(tags, ["en-US", "vi-VN", "zh-CN"]);
    }

    #[test]
    fn packs_share_the_greeting_key() {
        let registry = build().expect("shipped packs must be valid");

        let greetings: Vec<_> = registry
            .iter()
            .map(|(_, bundle)| {
                bundle
                    .get("greeting")
                    .and_then(BundleValue::as_message)
                    .expect("every pack must greet")
            })
            .collect();
        assert_eq!(greetings, ["Hello", "Xin chào", "你好"]);
    }
}
