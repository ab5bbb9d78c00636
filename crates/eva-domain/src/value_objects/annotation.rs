//! Annotation Value Objects
//!
//! The enclosing Web Annotation and its target shapes: bare URI,
//! full resource, or a SpecificResource pairing a source with a
//! selector.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{NON_SPATIAL_RESOURCE_TYPES, SPATIAL_RESOURCE_TYPES};

use super::EmbeddingVectorBody;

/// Value Object: Embedding Annotation
///
/// A Web Annotation whose `motivation` is `embedding`, linking a
/// target resource to an embedding vector body.
///
/// ## Business Rules
///
/// - `type` is always `Annotation`
/// - `motivation` is exactly the string `embedding`, never inferred
/// - `id`, when present, is an absolute URI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingAnnotation {
    /// Annotation URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Annotation type, always `Annotation`
    #[serde(rename = "type")]
    pub annotation_type: String,
    /// Annotation motivation, always `embedding`
    pub motivation: String,
    /// The annotated resource
    pub target: AnnotationTarget,
    /// The embedding vector body
    pub body: EmbeddingVectorBody,
    /// Unrecognized annotation properties (including `@context`),
    /// passed through verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Value Object: Annotation Target
///
/// The three target shapes the vocabulary accepts. Serialized
/// untagged: a JSON string is a bare URI, an object with `source` and
/// `selector` is a SpecificResource, any other object is a full
/// resource reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnnotationTarget {
    /// Bare URI of the annotated resource
    Uri(String),
    /// SpecificResource narrowing the target to a sub-region
    Specific(SpecificResourceTarget),
    /// Full resource reference with `id` and `type`
    Resource(TargetResource),
}

/// Value Object: Specific Resource Target
///
/// Pairs a `source` resource with a `selector` describing the
/// sub-region of it that the vector describes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecificResourceTarget {
    /// Target type, always `SpecificResource`
    #[serde(rename = "type")]
    pub target_type: String,
    /// The resource the selector narrows
    pub source: TargetSource,
    /// The sub-region selector
    pub selector: Selector,
    /// Unrecognized properties, passed through verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Value Object: Target Source
///
/// A SpecificResource `source`: either a bare URI or an embedded
/// resource object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TargetSource {
    /// Bare URI of the source resource
    Uri(String),
    /// Embedded resource object
    Resource(TargetResource),
}

/// Value Object: Target Resource
///
/// An embedded or referenced resource used as an annotation target or
/// SpecificResource source.
///
/// ## Business Rules
///
/// - Spatial resources (Canvas, Image) embedded as a source should
///   carry `height` and `width`
/// - Non-spatial resources (Collection, Manifest, Range, Annotation)
///   should omit them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetResource {
    /// Resource URI
    pub id: String,
    /// Resource type (e.g. Canvas, Manifest)
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Pixel height, for spatial resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    /// Pixel width, for spatial resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
    /// Unrecognized properties, passed through verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl TargetResource {
    /// Whether this resource type has spatial extent
    pub fn is_spatial(&self) -> bool {
        SPATIAL_RESOURCE_TYPES.contains(&self.resource_type.as_str())
    }

    /// Whether this resource type is one of the declared non-spatial
    /// kinds
    pub fn is_non_spatial(&self) -> bool {
        NON_SPATIAL_RESOURCE_TYPES.contains(&self.resource_type.as_str())
    }
}

/// Value Object: Selector
///
/// A SpecificResource selector. Only the `region` fragment grammar is
/// checked by the validators; other selector types pass through in an
/// open-world fashion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selector {
    /// Selector type (e.g. FragmentSelector, ImageApiSelector)
    #[serde(rename = "type")]
    pub selector_type: String,
    /// Spatial region as `x,y,w,h`, optionally prefixed with `pct:`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Selector-specific properties, passed through verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
