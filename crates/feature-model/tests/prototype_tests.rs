use feature_model::{ErrorKind, Prototype, PrototypeSource, Url};
use feature_test_utils::{
    artifact_id, create_prototype_with_removals, create_url_prototype, init_tracing,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::cmp::Ordering;

#[test]
fn test_identity_channels_are_exclusive() {
    let by_id = Prototype::with_id(artifact_id("g:base:1"));
    assert!(by_id.url().is_none());
    assert!(matches!(by_id.source(), PrototypeSource::Id(_)));

    let by_url = create_url_prototype("https://example.org/features/base.json");
    assert!(by_url.id().is_none());
    assert_eq!(
        by_url.url().map(Url::as_str),
        Some("https://example.org/features/base.json")
    );
}

#[test]
fn test_from_parts_rejects_both_and_neither() {
    let url = Url::parse("file:///base.json").unwrap();
    let both = Prototype::from_parts(Some(artifact_id("g:a:1")), Some(url));
    assert_eq!(both.unwrap_err().kind(), ErrorKind::InvalidArgument);

    let neither = Prototype::from_parts(None, None);
    assert_eq!(neither.unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_clone_keeps_identity_and_drops_removals() {
    init_tracing();
    let prototype = create_prototype_with_removals("g:base:1");
    assert!(prototype.has_removals());

    let cloned = prototype.clone();
    assert_eq!(cloned, prototype);
    assert_eq!(cloned.id(), prototype.id());
    assert!(cloned.configuration_removals().is_empty());
    assert!(cloned.bundle_removals().is_empty());
    assert!(cloned.framework_properties_removals().is_empty());
    assert!(cloned.extension_removals().is_empty());
    assert!(cloned.artifact_extension_removals().is_empty());

    assert_eq!(prototype.bundle_removals(), [artifact_id("org.example:unwanted:1.0")]);
}

#[test]
fn test_removal_collections_are_live() {
    let mut prototype = create_url_prototype("file:///base.json");
    prototype
        .artifact_extension_removals_mut()
        .entry("content-packages".to_string())
        .or_default()
        .extend([artifact_id("g:p:zip:1"), artifact_id("g:p:zip:1")]);
    prototype
        .framework_properties_removals_mut()
        .push("sling.home".to_string());

    let removals = &prototype.artifact_extension_removals()["content-packages"];
    assert_eq!(removals.len(), 2);
    assert_eq!(prototype.framework_properties_removals(), ["sling.home"]);

    prototype.framework_properties_removals_mut().clear();
    assert!(prototype.framework_properties_removals().is_empty());
}

#[test]
fn test_equality_ignores_removals() {
    let mut a = Prototype::with_id(artifact_id("g:base:1"));
    a.extension_removals_mut().push("repoinit".to_string());
    let b = Prototype::with_id(artifact_id("g:base:1"));
    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), Ordering::Equal);
}

#[test]
fn test_id_and_url_with_same_text_differ() {
    let by_id = Prototype::with_id(artifact_id("g:a:1"));
    let by_url = create_url_prototype("mvn:g/a/1");
    assert_ne!(by_id, by_url);
    assert_eq!(by_id.cmp(&by_url), Ordering::Less);
    assert_eq!(by_url.cmp(&by_id), Ordering::Greater);
}

#[test]
fn test_mixed_sort() {
    let mut prototypes = vec![
        create_url_prototype("https://b.example/f.json"),
        Prototype::with_id(artifact_id("g:z:1")),
        create_url_prototype("file:///a.json"),
    ];
    prototypes.sort();
    let order: Vec<String> = prototypes.iter().map(ToString::to_string).collect();
    assert_eq!(
        order,
        vec![
            "Prototype [id=file:///a.json]",
            "Prototype [id=https://b.example/f.json]",
            "Prototype [id=g:z:1]",
        ]
    );
}

fn location() -> impl Strategy<Value = Url> {
    "[a-z]{1,6}".prop_map(|name| Url::parse(&format!("https://example.org/{name}.json")).unwrap())
}

proptest! {
    #[test]
    fn prop_url_ordering_is_antisymmetric(a in location(), b in location()) {
        let left = Prototype::with_url(a.clone());
        let right = Prototype::with_url(b.clone());
        prop_assert_eq!(left.cmp(&right), right.cmp(&left).reverse());
        prop_assert_eq!(left.cmp(&right), a.as_str().cmp(b.as_str()));
        prop_assert_eq!(left.cmp(&right) == Ordering::Equal, left == right);
    }
}
