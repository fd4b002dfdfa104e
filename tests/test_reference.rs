//! Tests for the model reference resolution grammar

use packmig::convert::{ConvertError, ModelReference, ReferenceOrigin};

#[test]
fn test_all_prefix_spellings_resolve_to_the_same_name() {
    let expected = ModelReference::parse("foo").unwrap();
    for raw in ["minecraft:item/foo", "item/foo"] {
        let reference = ModelReference::parse(raw).unwrap();
        assert_eq!(reference.path(), expected.path(), "path for {}", raw);
        assert_eq!(reference.namespace(), expected.namespace());
        assert_eq!(reference.to_string(), expected.to_string());
        assert_eq!(
            reference.item_document_path(),
            expected.item_document_path()
        );
    }
}

#[test]
fn test_prefix_stripping_is_idempotent() {
    // Re-parsing a rendered reference resolves to the same place
    let first = ModelReference::parse("item/stick").unwrap();
    let second = ModelReference::parse(&first.to_string()).unwrap();
    assert_eq!(first.path(), second.path());
    assert_eq!(first.namespace(), second.namespace());
    assert_eq!(first.item_document_path(), second.item_document_path());
}

#[test]
fn test_minecraft_item_prefix_takes_precedence_over_namespace_split() {
    // "minecraft:item/foo" is the prefix rule, not a namespace 'minecraft'
    // with path 'item/foo'
    let reference = ModelReference::parse("minecraft:item/foo").unwrap();
    assert_eq!(reference.origin(), ReferenceOrigin::StrippedPrefix);
    assert_eq!(reference.to_string(), "foo");
}

#[test]
fn test_namespaced_reference_is_split_and_preserved() {
    let reference = ModelReference::parse("mypack:hats/crown").unwrap();
    assert_eq!(reference.origin(), ReferenceOrigin::Qualified);
    assert_eq!(reference.namespace(), "mypack");
    assert_eq!(reference.path(), "hats/crown");
    assert_eq!(reference.to_string(), "mypack:hats/crown");
    assert_eq!(
        reference.item_document_path(),
        "assets/mypack/items/hats/crown.json"
    );
}

#[test]
fn test_unnamespaced_reference_uses_default_namespace() {
    let reference = ModelReference::parse("custom_items/cat_hat/cat_hat_black").unwrap();
    assert_eq!(reference.namespace(), "minecraft");
    assert_eq!(
        reference.item_document_path(),
        "assets/minecraft/items/custom_items/cat_hat/cat_hat_black.json"
    );
}

#[test]
fn test_malformed_references_are_unsupported() {
    for raw in ["", "item/", "minecraft:item/", "a:b:c", ":stick", "mypack:"] {
        assert!(
            matches!(
                ModelReference::parse(raw),
                Err(ConvertError::UnsupportedReference { .. })
            ),
            "expected UnsupportedReference for {:?}",
            raw
        );
    }
}
