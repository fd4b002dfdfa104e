//! Serde view of the legacy (pre-1.21.4) item model schema.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// A legacy item model document. Every field is optional; unknown fields
/// (display transforms, elements, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyItemModel {
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub textures: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub overrides: Vec<LegacyOverride>,
}

/// One `(predicate, model)` override entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyOverride {
    #[serde(default)]
    pub predicate: Option<OverridePredicate>,
    #[serde(default)]
    pub model: Option<String>,
}

/// The predicate half of an override. Only `custom_model_data` matters for
/// conversion; other predicate kinds (pulling, damage, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct OverridePredicate {
    #[serde(default)]
    pub custom_model_data: Option<serde_json::Number>,
}

impl LegacyItemModel {
    /// The reference the new format falls back to when no override matches:
    /// `textures.layer0` when present, else `parent`.
    pub fn fallback_reference(&self) -> Option<&str> {
        self.textures
            .as_ref()
            .and_then(|textures| textures.get("layer0"))
            .map(String::as_str)
            .or(self.parent.as_deref())
    }
}

impl LegacyOverride {
    pub fn custom_model_data(&self) -> Option<&serde_json::Number> {
        self.predicate.as_ref()?.custom_model_data.as_ref()
    }
}

/// Whether a parsed JSON document looks like a legacy item model at all.
///
/// New-format documents carry a top-level `model` object and must pass
/// through untouched; JSON with none of the legacy keys is not a model
/// either.
pub fn is_legacy_item_model(document: &Value) -> bool {
    let Some(object) = document.as_object() else {
        return false;
    };
    if object.contains_key("model") {
        return false;
    }
    object.contains_key("overrides")
        || object.contains_key("textures")
        || object.contains_key("parent")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recognizes_legacy_document() {
        let doc = json!({
            "parent": "item/handheld",
            "textures": { "layer0": "item/stick" },
            "overrides": []
        });
        assert!(is_legacy_item_model(&doc));
    }

    #[test]
    fn test_rejects_new_format_document() {
        let doc = json!({
            "model": { "type": "model", "model": "stick" }
        });
        assert!(!is_legacy_item_model(&doc));
    }

    #[test]
    fn test_rejects_unrelated_json() {
        assert!(!is_legacy_item_model(&json!({ "pack": { "pack_format": 46 } })));
        assert!(!is_legacy_item_model(&json!([1, 2, 3])));
        assert!(!is_legacy_item_model(&json!("stick")));
    }

    #[test]
    fn test_fallback_prefers_layer0_over_parent() {
        let model: LegacyItemModel = serde_json::from_value(json!({
            "parent": "item/handheld",
            "textures": { "layer0": "item/stick" }
        }))
        .unwrap();
        assert_eq!(model.fallback_reference(), Some("item/stick"));
    }

    #[test]
    fn test_fallback_uses_parent_when_textures_absent() {
        let model: LegacyItemModel = serde_json::from_value(json!({
            "parent": "item/handheld"
        }))
        .unwrap();
        assert_eq!(model.fallback_reference(), Some("item/handheld"));
    }

    #[test]
    fn test_fallback_uses_parent_when_layer0_absent() {
        let model: LegacyItemModel = serde_json::from_value(json!({
            "parent": "item/handheld",
            "textures": { "layer1": "item/glow" }
        }))
        .unwrap();
        assert_eq!(model.fallback_reference(), Some("item/handheld"));
    }

    #[test]
    fn test_override_without_custom_model_data() {
        let model: LegacyItemModel = serde_json::from_value(json!({
            "overrides": [
                { "predicate": { "pulling": 1 }, "model": "item/bow_pulling_0" }
            ]
        }))
        .unwrap();
        assert!(model.overrides[0].custom_model_data().is_none());
    }
}
