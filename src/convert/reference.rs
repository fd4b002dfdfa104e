//! Model reference resolution.
//!
//! Legacy documents spell model references three ways: `minecraft:item/x`,
//! `item/x`, and an already-qualified `namespace:path` or bare `path`.
//! [`ModelReference::parse`] turns each spelling into a structured
//! namespace/path pair plus an origin tag, so the precedence of the prefix
//! rules is explicit instead of living in scattered `starts_with` calls.

use std::fmt;

use crate::convert::error::ConvertError;

/// Namespace assumed when a reference carries no explicit `namespace:`.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// How a reference arrived at its resolved form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceOrigin {
    /// A `minecraft:item/` or `item/` prefix was stripped; the remainder is
    /// a bare model name in the default namespace.
    StrippedPrefix,
    /// The reference was already fully qualified, with or without an
    /// explicit namespace.
    Qualified,
}

/// A resolved model reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelReference {
    namespace: Option<String>,
    path: String,
    origin: ReferenceOrigin,
}

impl ModelReference {
    /// Parse a raw reference string.
    ///
    /// Prefix rules are checked in order: `minecraft:item/` first, then
    /// `item/`, then the qualified fallback. Empty references, empty
    /// namespace or path segments, and more than one `:` are rejected.
    pub fn parse(raw: &str) -> Result<Self, ConvertError> {
        if raw.is_empty() {
            return Err(ConvertError::unsupported(raw, "empty reference"));
        }

        for prefix in ["minecraft:item/", "item/"] {
            if let Some(rest) = raw.strip_prefix(prefix) {
                if rest.is_empty() {
                    return Err(ConvertError::unsupported(raw, "nothing after prefix"));
                }
                if rest.contains(':') {
                    return Err(ConvertError::unsupported(raw, "':' after item/ prefix"));
                }
                return Ok(ModelReference {
                    namespace: None,
                    path: rest.to_string(),
                    origin: ReferenceOrigin::StrippedPrefix,
                });
            }
        }

        match raw.matches(':').count() {
            0 => Ok(ModelReference {
                namespace: None,
                path: raw.to_string(),
                origin: ReferenceOrigin::Qualified,
            }),
            1 => {
                let (namespace, path) = raw.split_once(':').unwrap_or((raw, ""));
                if namespace.is_empty() {
                    return Err(ConvertError::unsupported(raw, "empty namespace"));
                }
                if path.is_empty() {
                    return Err(ConvertError::unsupported(raw, "empty path"));
                }
                Ok(ModelReference {
                    namespace: Some(namespace.to_string()),
                    path: path.to_string(),
                    origin: ReferenceOrigin::Qualified,
                })
            }
            _ => Err(ConvertError::unsupported(raw, "more than one ':'")),
        }
    }

    /// The namespace this reference lives in, defaulting to `minecraft`.
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }

    /// The path component, without namespace or stripped prefix.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn origin(&self) -> ReferenceOrigin {
        self.origin
    }

    /// Target location of a discrete item model document for this
    /// reference, relative to the pack root.
    pub fn item_document_path(&self) -> String {
        format!("assets/{}/items/{}.json", self.namespace(), self.path)
    }
}

/// Renders the string written into output `model` fields: the bare path for
/// prefix-stripped and unnamespaced references, `namespace:path` when the
/// namespace was explicit.
impl fmt::Display for ModelReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.namespace, self.origin) {
            (Some(namespace), ReferenceOrigin::Qualified) => {
                write!(f, "{}:{}", namespace, self.path)
            }
            _ => write!(f, "{}", self.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_stripping_is_prefix_agnostic() {
        // All three spellings resolve to the same bare name
        for raw in ["minecraft:item/foo", "item/foo", "foo"] {
            let reference = ModelReference::parse(raw).unwrap();
            assert_eq!(reference.path(), "foo", "path for {}", raw);
            assert_eq!(reference.namespace(), "minecraft");
            assert_eq!(reference.to_string(), "foo");
        }
    }

    #[test]
    fn test_origin_tags() {
        assert_eq!(
            ModelReference::parse("item/stick").unwrap().origin(),
            ReferenceOrigin::StrippedPrefix
        );
        assert_eq!(
            ModelReference::parse("custom_items/hat").unwrap().origin(),
            ReferenceOrigin::Qualified
        );
    }

    #[test]
    fn test_explicit_namespace_preserved() {
        let reference = ModelReference::parse("mypack:hats/top_hat").unwrap();
        assert_eq!(reference.namespace(), "mypack");
        assert_eq!(reference.path(), "hats/top_hat");
        assert_eq!(reference.to_string(), "mypack:hats/top_hat");
        assert_eq!(
            reference.item_document_path(),
            "assets/mypack/items/hats/top_hat.json"
        );
    }

    #[test]
    fn test_unnamespaced_path_kept_verbatim() {
        let reference = ModelReference::parse("custom_items/cat_hat/cat_hat_black").unwrap();
        assert_eq!(reference.to_string(), "custom_items/cat_hat/cat_hat_black");
        assert_eq!(
            reference.item_document_path(),
            "assets/minecraft/items/custom_items/cat_hat/cat_hat_black.json"
        );
    }

    #[test]
    fn test_default_namespace_document_path() {
        let reference = ModelReference::parse("item/stick").unwrap();
        assert_eq!(
            reference.item_document_path(),
            "assets/minecraft/items/stick.json"
        );
    }

    #[test]
    fn test_empty_reference_rejected() {
        assert!(matches!(
            ModelReference::parse(""),
            Err(ConvertError::UnsupportedReference { .. })
        ));
    }

    #[test]
    fn test_bare_prefix_rejected() {
        assert!(ModelReference::parse("item/").is_err());
        assert!(ModelReference::parse("minecraft:item/").is_err());
    }

    #[test]
    fn test_double_colon_rejected() {
        assert!(matches!(
            ModelReference::parse("a:b:c"),
            Err(ConvertError::UnsupportedReference { .. })
        ));
    }

    #[test]
    fn test_empty_namespace_or_path_rejected() {
        assert!(ModelReference::parse(":stick").is_err());
        assert!(ModelReference::parse("mypack:").is_err());
    }
}
