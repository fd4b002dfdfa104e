//! The model converter.
//!
//! One legacy document in, zero or more new-format documents out. The
//! converter owns no I/O: callers hand it `(relative path, bytes)` pairs
//! and write whatever comes back.

use serde_json::Value;

use crate::convert::error::ConvertError;
use crate::convert::legacy::{is_legacy_item_model, LegacyItemModel, LegacyOverride};
use crate::convert::output::{DispatchEntry, ItemModelDocument, ModelNode};
use crate::convert::reference::ModelReference;

/// The two target layouts a batch can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    /// One range-dispatch document per input file.
    CustomModelData,
    /// One discrete document per override, plus the base fallback document.
    ItemModel,
}

/// Location of a legacy item model inside the pack tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemModelPath {
    pub namespace: String,
    /// Model name relative to `models/item/`; may contain `/` separators.
    pub name: String,
}

impl ItemModelPath {
    /// The relocated path in the new layout (`models/item/` -> `items/`).
    pub fn items_path(&self) -> String {
        format!("assets/{}/items/{}.json", self.namespace, self.name)
    }
}

/// Parse `assets/<namespace>/models/item/<name>.json`. Anything else is not
/// an item model location and returns `None`.
pub fn parse_item_model_path(relative: &str) -> Option<ItemModelPath> {
    let rest = relative.strip_prefix("assets/")?;
    let (namespace, rest) = rest.split_once('/')?;
    let name = rest.strip_prefix("models/item/")?.strip_suffix(".json")?;
    if namespace.is_empty() || name.is_empty() {
        return None;
    }
    Some(ItemModelPath {
        namespace: namespace.to_string(),
        name: name.to_string(),
    })
}

/// One output document, addressed relative to the pack root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    pub path: String,
    pub bytes: Vec<u8>,
}

/// What happened to one input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Converted,
    Copied,
}

/// A single override (or the base document) that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Which part of the document was skipped, e.g. `override 3`.
    pub label: String,
    pub error: ConvertError,
}

/// Conversion outcome for one source document.
#[derive(Debug, Clone)]
pub struct DocumentResult {
    pub source: String,
    pub status: DocumentStatus,
    pub outputs: Vec<OutputDocument>,
    pub skipped: Vec<SkippedEntry>,
}

/// Convert one document.
///
/// Files outside the `assets/<ns>/models/item/` pattern and JSON the
/// converter does not recognize as a legacy model pass through verbatim at
/// their original path. A `MalformedInput` error covers the whole file;
/// per-override failures are collected in [`DocumentResult::skipped`] while
/// the rest of the document still converts.
pub fn convert_document(
    mode: ConversionMode,
    source_path: &str,
    raw: &[u8],
) -> Result<DocumentResult, ConvertError> {
    let Some(location) = parse_item_model_path(source_path) else {
        return Ok(passthrough(source_path, raw));
    };

    let document: Value = serde_json::from_slice(raw)
        .map_err(|e| ConvertError::malformed(format!("invalid JSON: {}", e)))?;
    if !is_legacy_item_model(&document) {
        return Ok(passthrough(source_path, raw));
    }

    let legacy: LegacyItemModel = serde_json::from_value(document)
        .map_err(|e| ConvertError::malformed(format!("unexpected document shape: {}", e)))?;

    match mode {
        ConversionMode::CustomModelData => {
            convert_custom_model_data(&location, &legacy, source_path)
        }
        ConversionMode::ItemModel => convert_item_model(&location, &legacy, source_path),
    }
}

/// Whether a pack file would actually be rewritten by a conversion run.
/// Used by the pre-conversion scan; pass-through files are not listed.
pub fn is_convertible(path: &str, raw: &[u8]) -> bool {
    if parse_item_model_path(path).is_none() {
        return false;
    }
    match serde_json::from_slice::<Value>(raw) {
        Ok(document) => is_legacy_item_model(&document),
        Err(_) => false,
    }
}

fn passthrough(source_path: &str, raw: &[u8]) -> DocumentResult {
    DocumentResult {
        source: source_path.to_string(),
        status: DocumentStatus::Copied,
        outputs: vec![OutputDocument {
            path: source_path.to_string(),
            bytes: raw.to_vec(),
        }],
        skipped: Vec::new(),
    }
}

fn convert_custom_model_data(
    location: &ItemModelPath,
    legacy: &LegacyItemModel,
    source_path: &str,
) -> Result<DocumentResult, ConvertError> {
    let fallback = resolve_fallback(legacy)?;

    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    for (index, entry) in legacy.overrides.iter().enumerate() {
        match dispatch_entry(entry) {
            Ok(entry) => entries.push(entry),
            Err(error) => skipped.push(SkippedEntry {
                label: format!("override {}", index),
                error,
            }),
        }
    }

    // Ascending threshold order; the sort is stable so overrides sharing a
    // threshold keep their input order.
    entries.sort_by_key(|entry| entry.threshold);

    // A range dispatch with zero entries is avoided: degrade to a plain
    // model reference.
    let document = if entries.is_empty() {
        ItemModelDocument::plain(fallback.to_string())
    } else {
        ItemModelDocument::range_dispatch(fallback.to_string(), entries)
    };

    Ok(DocumentResult {
        source: source_path.to_string(),
        status: DocumentStatus::Converted,
        outputs: vec![OutputDocument {
            path: location.items_path(),
            bytes: serialize(&document)?,
        }],
        skipped,
    })
}

fn convert_item_model(
    location: &ItemModelPath,
    legacy: &LegacyItemModel,
    source_path: &str,
) -> Result<DocumentResult, ConvertError> {
    let mut outputs = Vec::new();
    let mut skipped = Vec::new();

    // Base document first, so an override that resolves onto the same path
    // wins under the later-write rule.
    match resolve_fallback(legacy) {
        Ok(fallback) => outputs.push(OutputDocument {
            path: location.items_path(),
            bytes: serialize(&ItemModelDocument::plain(fallback.to_string()))?,
        }),
        Err(error) => skipped.push(SkippedEntry {
            label: "base model".to_string(),
            error,
        }),
    }

    for (index, entry) in legacy.overrides.iter().enumerate() {
        match discrete_document(entry) {
            Ok(output) => outputs.push(output),
            Err(error) => skipped.push(SkippedEntry {
                label: format!("override {}", index),
                error,
            }),
        }
    }

    Ok(DocumentResult {
        source: source_path.to_string(),
        status: DocumentStatus::Converted,
        outputs,
        skipped,
    })
}

fn resolve_fallback(legacy: &LegacyItemModel) -> Result<ModelReference, ConvertError> {
    let raw = legacy.fallback_reference().ok_or_else(|| {
        ConvertError::malformed("no fallback model reference (textures.layer0 or parent)")
    })?;
    ModelReference::parse(raw)
}

fn dispatch_entry(entry: &LegacyOverride) -> Result<DispatchEntry, ConvertError> {
    let threshold = override_threshold(entry)?;
    let raw = entry
        .model
        .as_deref()
        .ok_or_else(|| ConvertError::malformed("override has no model reference"))?;
    let reference = ModelReference::parse(raw)?;
    Ok(DispatchEntry {
        threshold,
        model: ModelNode::Model {
            model: reference.to_string(),
        },
    })
}

fn discrete_document(entry: &LegacyOverride) -> Result<OutputDocument, ConvertError> {
    // The predicate still gates conversion even though the threshold value
    // does not appear in discrete documents.
    override_threshold(entry)?;
    let raw = entry
        .model
        .as_deref()
        .ok_or_else(|| ConvertError::malformed("override has no model reference"))?;
    let reference = ModelReference::parse(raw)?;
    Ok(OutputDocument {
        path: reference.item_document_path(),
        bytes: serialize(&ItemModelDocument::plain(reference.to_string()))?,
    })
}

fn override_threshold(entry: &LegacyOverride) -> Result<u32, ConvertError> {
    let number = entry
        .custom_model_data()
        .ok_or_else(|| ConvertError::malformed("override has no custom_model_data predicate"))?;
    threshold_value(number).map_err(ConvertError::malformed)
}

/// Thresholds must be non-negative integers; fractional values are
/// truncated the way the pre-migration tooling always read them.
fn threshold_value(number: &serde_json::Number) -> Result<u32, String> {
    if let Some(value) = number.as_u64() {
        return u32::try_from(value)
            .map_err(|_| format!("threshold {} out of range", value));
    }
    if let Some(value) = number.as_f64() {
        if value.is_finite() && value >= 0.0 && value <= u32::MAX as f64 {
            return Ok(value as u32);
        }
    }
    Err(format!("threshold {} is not a non-negative integer", number))
}

fn serialize(document: &ItemModelDocument) -> Result<Vec<u8>, ConvertError> {
    serde_json::to_vec_pretty(document)
        .map_err(|e| ConvertError::malformed(format!("failed to serialize output: {}", e)))
}
