use locale_registry::{Bundle, BundleValue, Error, LocaleRegistry};
// library deps not exercised by this test binary
use thiserror as _;
use unic_langid as _;

const ZH_CN: &str = r#"{
    "greeting": "你好",
    "menu": { "file": "文件", "edit": "编辑" }
}"#;

const EN_US: &str = r#"{
    "greeting": "Hello",
    "menu": { "file": "File", "edit": "Edit" }
}"#;

const VI_VN: &str = r#"{
    "greeting": "Xin chào",
    "menu": { "file": "Tệp", "edit": "Sửa" }
}"#;

fn build() -> LocaleRegistry {
    LocaleRegistry::builder()
        .insert_json("zh-CN", ZH_CN)
        .and_then(|b| b.insert_json("en-US", EN_US))
        .and_then(|b| b.insert_json("vi-VN", VI_VN))
        .expect("shipped resources must be valid")
        .build()
}

#[test]
fn one_entry_per_tag_in_sorted_order() {
    let registry = build();

    let tags: Vec<_> = registry.tags().map(ToString::to_string).collect();
    assert_eq!(tags, ["en-US", "vi-VN", "zh-CN"]);
}

#[test]
fn bundles_survive_aggregation_intact() {
    let registry = build();

    let expected: Bundle = VI_VN.parse().unwrap();
    assert_eq!(registry.get_str("vi-VN"), Some(&expected));

    let menu = registry
        .get_str("zh-CN")
        .and_then(|b| b.get("menu"))
        .and_then(BundleValue::as_group)
        .expect("menu group must exist");
    assert_eq!(
        menu.get("file").and_then(BundleValue::as_message),
        Some("文件"),
    );
}

#[test]
fn serialized_output_is_sorted() {
    let registry = build();
    let json = serde_json::to_string(&registry).expect("registry must serialize");

    // check the raw text so the (de)serializer cannot re-order keys
    let positions: Vec<_> = ["\"en-US\"", "\"vi-VN\"", "\"zh-CN\""]
        .map(|key| json.find(key).expect("tag must be present"))
        .into_iter()
        .collect();
    assert!(positions.is_sorted(), "tags out of order in {json}");
}

#[test]
fn case_variant_duplicate_keeps_last() {
    let replacement = r#"{ "greeting": "Howdy" }"#;
    let registry = LocaleRegistry::builder()
        .insert_json("zh-CN", ZH_CN)
        .and_then(|b| b.insert_json("en-US", EN_US))
        .and_then(|b| b.insert_json("vi-VN", VI_VN))
        // tags are case-canonical, so this replaces the en-US bundle
        .and_then(|b| b.insert_json("en-us", replacement))
        .expect("resources must be valid")
        .build();

    assert_eq!(registry.len(), 3);
    assert_eq!(
        registry
            .get_str("en-US")
            .and_then(|b| b.get("greeting"))
            .and_then(BundleValue::as_message),
        Some("Howdy"),
    );

    let json = serde_json::to_string(&registry).expect("registry must serialize");
    let keys: Vec<_> = ["\"en-US\"", "\"en-us\"", "\"vi-VN\"", "\"zh-CN\""]
        .map(|key| json.find(key))
        .into_iter()
        .collect();
    assert!(keys[1].is_none(), "raw tag must have been canonicalized");
    assert!(
        keys[0] < keys[2] && keys[2] < keys[3],
        "tags out of order in {json}",
    );
}

#[test]
fn invalid_tag_is_reported() {
    let err = LocaleRegistry::builder()
        .insert_json("not a tag!", EN_US)
        .expect_err("tag must be rejected");
    assert!(matches!(err, Error::Tag { tag, .. } if tag == "not a tag!"));
}

#[test]
fn invalid_resource_is_reported() {
    let err = LocaleRegistry::builder()
        .insert_json("en-US", "{ not json")
        .expect_err("resource must be rejected");
    assert!(matches!(err, Error::Bundle { tag, .. } if tag == "en-US"));
}
