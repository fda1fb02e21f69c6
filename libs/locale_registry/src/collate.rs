//! Alphabetical ordering for locale tags.
//!
//! Tag order is part of this crate's contract, so the exact comparison is
//! pinned here instead of falling back to plain byte order. Byte order
//! would put every uppercase region subtag ahead of every lowercase
//! language subtag (`"en-US" > "EN"`), which is not the alphabetical order
//! a reader expects from a locale list.
//!
//! The rules, in priority order:
//!
//! 1. Compare the Unicode-lowercased character sequences.
//! 2. On a tie, compare the raw strings with lowercase letters ordered
//!    first.
//!
//! For ASCII locale tags this matches the order produced by collation
//! routines in other ecosystems, which the shipped locale packs were
//! originally sorted with.

use std::cmp::Ordering;

use unic_langid::LanguageIdentifier;

/// Compares two locale tags alphabetically.
pub fn cmp_tags(a: &LanguageIdentifier, b: &LanguageIdentifier) -> Ordering {
    cmp_tag_strs(&a.to_string(), &b.to_string())
}

/// Returns a key that sorts like [`cmp_tags`] compares.
///
/// Useful with [`slice::sort_by_cached_key`] to avoid re-deriving the
/// lowercased form on every comparison.
pub fn sort_key(tag: &LanguageIdentifier) -> (String, String) {
    let raw = tag.to_string();
    (fold_case(&raw), raw)
}

/// Compares two tags in raw string form.
pub fn cmp_tag_strs(a: &str, b: &str) -> Ordering {
    fold_case(a)
        .cmp(&fold_case(b))
        .then_with(|| cmp_case_tiebreak(a, b))
}

fn fold_case(tag: &str) -> String {
    tag.chars().flat_map(char::to_lowercase).collect()
}

// lowercase first, so "en-us" sorts ahead of "en-US"
fn cmp_case_tiebreak(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        let order = (ca.is_uppercase(), ca).cmp(&(cb.is_uppercase(), cb));
        if order != Ordering::Equal {
            return order;
        }
    }

    a.len().cmp(&b.len())
}
