//! The 1.21.4+ item model document shapes.
//!
//! Field names, nesting, and the literal strings `range_dispatch`, `model`,
//! and `custom_model_data` are wire contract; the game rejects anything
//! else.

use serde::Serialize;

/// Property the range dispatch selects on.
pub const CUSTOM_MODEL_DATA_PROPERTY: &str = "custom_model_data";

/// Top-level output document: `{"model": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ItemModelDocument {
    pub model: ModelNode,
}

/// Discriminated model union.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelNode {
    RangeDispatch {
        property: &'static str,
        fallback: Box<ModelNode>,
        entries: Vec<DispatchEntry>,
    },
    Model {
        model: String,
    },
}

/// One threshold in a range dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchEntry {
    pub threshold: u32,
    pub model: ModelNode,
}

impl ItemModelDocument {
    /// A plain model reference without a dispatch wrapper.
    pub fn plain(model: String) -> Self {
        ItemModelDocument {
            model: ModelNode::Model { model },
        }
    }

    /// A `custom_model_data` range dispatch over `entries` with `fallback`
    /// as the default appearance.
    pub fn range_dispatch(fallback: String, entries: Vec<DispatchEntry>) -> Self {
        ItemModelDocument {
            model: ModelNode::RangeDispatch {
                property: CUSTOM_MODEL_DATA_PROPERTY,
                fallback: Box::new(ModelNode::Model { model: fallback }),
                entries,
            },
        }
    }
}
