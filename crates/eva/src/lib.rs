//! # EVA - Embedding Vector Annotations
//!
//! A pure validator and normalizer for Embedding Annotations: Web
//! Annotations whose `motivation` is `embedding`, linking IIIF
//! resources to embedding vectors inline (`json-array` or `base64`)
//! or by reference.
//!
//! ## Features
//!
//! - **Accumulating validation**: a document with five problems
//!   reports five diagnostics, each with a stable code, a JSON
//!   Pointer path, and a human-readable message
//! - **Byte-level payload checks**: base64 payloads are decoded and
//!   checked against `dimensions × byte width` of the declared
//!   `dataType`
//! - **Conditional requiredness**: `dimensions`, `dataType` and
//!   `endianness` requirements follow the payload branch
//! - **Open vocabulary**: unrecognized `dataType` tokens and media
//!   types degrade to warnings, not failures
//! - **No I/O**: referenced vectors are never fetched; the validator
//!   is synchronous and safe to call concurrently
//!
//! ## Example
//!
//! ```rust
//! use eva::validate::validate_annotation;
//!
//! let doc = serde_json::json!({
//!     "type": "Annotation",
//!     "motivation": "embedding",
//!     "target": "https://example.org/iiif/canvas/1",
//!     "body": {
//!         "type": "EmbeddingVector",
//!         "vector": [0.12, -0.34, 0.56],
//!         "vectorEncoding": "json-array",
//!         "model": { "name": "clip-vit-base-patch32", "version": "1.0" },
//!     },
//! });
//!
//! let outcome = validate_annotation(&doc);
//! assert!(outcome.is_valid());
//! ```
//!
//! ## Architecture
//!
//! - [`domain`] - wire value objects, vocabulary and context URIs
//! - [`validate`] - the validators, diagnostics and reports

/// Domain layer - wire value objects, vocabulary and linked-data
/// constants
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use eva_domain::*;
}

/// Validation layer - validators, diagnostics and reports
///
/// Re-exports from the validation crate for convenience
pub mod validate {
    pub use eva_validate::*;
}

// Most callers want these directly
pub use eva_domain::{EmbeddingAnnotation, EmbeddingVectorBody, ModelDescriptor, VectorPayload};
pub use eva_validate::{
    Diagnostic, DiagnosticKind, Outcome, Severity, ValidationReport, validate_annotation,
    validate_body, validate_model,
};
