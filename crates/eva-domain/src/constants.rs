//! Domain layer constants
//!
//! The fixed linked-data surface of the Embedding Annotation
//! vocabulary: context URIs, the context-ordering rule, the recognized
//! property names, and the media-type and resource-type lookup tables
//! the validators key their checks on.

use serde_json::Value;

// ============================================================================
// LINKED-DATA CONTEXTS
// ============================================================================

/// JSON-LD context URI of the embedding vocabulary extension
pub const EMBEDDING_CONTEXT_URI: &str =
    "http://iiif.io/api/extension/embedding/context.json";

/// JSON-LD context URI of the IIIF Presentation API
pub const PRESENTATION_CONTEXT_URI: &str =
    "http://iiif.io/api/presentation/3/context.json";

/// Required ordering of the two contexts in a consuming document's
/// top-level `@context` array: the extension context first, the
/// Presentation context last.
pub const CONTEXT_ORDER: [&str; 2] = [EMBEDDING_CONTEXT_URI, PRESENTATION_CONTEXT_URI];

/// Check a top-level `@context` array against the ordering rule.
///
/// Returns `true` when the extension context appears before the
/// Presentation context. Entries that are not strings (inline context
/// objects) are ignored; a document that lists neither context, or
/// only one of them, is not this rule's concern and also passes.
///
/// This helper performs no context resolution.
pub fn context_order_is_valid(context: &[Value]) -> bool {
    let position = |uri: &str| {
        context
            .iter()
            .position(|entry| entry.as_str() == Some(uri))
    };
    match (
        position(EMBEDDING_CONTEXT_URI),
        position(PRESENTATION_CONTEXT_URI),
    ) {
        (Some(extension), Some(presentation)) => extension < presentation,
        _ => true,
    }
}

// ============================================================================
// VOCABULARY SURFACE
// ============================================================================

/// The one motivation value an Embedding Annotation carries
pub const MOTIVATION_EMBEDDING: &str = "embedding";

/// `type` value of the enclosing annotation
pub const TYPE_ANNOTATION: &str = "Annotation";

/// `type` value of the embedding body
pub const TYPE_EMBEDDING_VECTOR: &str = "EmbeddingVector";

/// `type` value of a specific-resource target
pub const TYPE_SPECIFIC_RESOURCE: &str = "SpecificResource";

/// All property names the vocabulary defines, for consumers building
/// their own serializers
pub const VOCABULARY_PROPERTIES: [&str; 14] = [
    "vector",
    "vectorReference",
    "vectorEncoding",
    "model",
    "dimensions",
    "dataType",
    "endianness",
    "type",
    "normalization",
    "provider",
    "maxTokens",
    "truncation",
    "name",
    "version",
];

// ============================================================================
// ENCODING TOKENS
// ============================================================================

/// `vectorEncoding` token for an inline JSON array payload
pub const ENCODING_JSON_ARRAY: &str = "json-array";

/// `vectorEncoding` token for an inline base64 payload
pub const ENCODING_BASE64: &str = "base64";

// ============================================================================
// MEDIA TYPES
// ============================================================================

/// Media types treated as textual when deciding whether a referenced
/// vector is binary. Anything not in this table (and not under a
/// `text/` top-level type) is assumed binary.
pub const TEXT_MEDIA_TYPES: [&str; 4] = [
    "application/json",
    "application/ld+json",
    "text/csv",
    "text/plain",
];

/// Media types the vocabulary names for referenced vectors
pub const RECOGNIZED_MEDIA_TYPES: [&str; 5] = [
    "application/json",
    "application/octet-stream",
    "text/csv",
    "application/x-numpy",
    "application/x-parquet",
];

/// Whether a `format` media type denotes binary content.
///
/// The subtype parameters are ignored (`application/json;charset=utf-8`
/// is still textual).
pub fn media_type_is_binary(format: &str) -> bool {
    let essence = format
        .split(';')
        .next()
        .unwrap_or(format)
        .trim()
        .to_ascii_lowercase();
    if essence.starts_with("text/") {
        return false;
    }
    !TEXT_MEDIA_TYPES.contains(&essence.as_str())
}

// ============================================================================
// RESOURCE TYPES
// ============================================================================

/// Resource types with spatial extent; embedded as a target `source`
/// they should carry `height` and `width`
pub const SPATIAL_RESOURCE_TYPES: [&str; 2] = ["Canvas", "Image"];

/// Resource types without spatial extent; `height`/`width` should be
/// omitted when one is embedded as a target `source`
pub const NON_SPATIAL_RESOURCE_TYPES: [&str; 4] =
    ["Collection", "Manifest", "Range", "Annotation"];
