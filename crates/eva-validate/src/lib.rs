//! Validation for Embedding Annotations
//!
//! This crate checks a parsed JSON value against the Embedding
//! Annotation vocabulary rules and produces either a normalized,
//! typed representation or an ordered list of diagnostics:
//! - Structural shape of the annotation, target and body
//! - Mutually exclusive payload fields (`vector` / `vectorReference`)
//! - Conditional requiredness of `dimensions`, `dataType` and
//!   `endianness` depending on the payload branch
//! - Base64 byte-length arithmetic against the declared layout
//!
//! All checks accumulate: a document with five problems reports five,
//! not one. A document with only warnings is a success with attached
//! warnings.
//!
//! # Example
//!
//! ```rust
//! use eva_validate::validate_annotation;
//!
//! let doc = serde_json::json!({
//!     "type": "Annotation",
//!     "motivation": "embedding",
//!     "target": "https://example.org/iiif/canvas/1",
//!     "body": {
//!         "type": "EmbeddingVector",
//!         "vector": [0.1, 0.2, 0.3],
//!         "vectorEncoding": "json-array",
//!         "model": { "name": "clip-vit-base-patch32", "version": "1.0" },
//!     },
//! });
//!
//! let outcome = validate_annotation(&doc);
//! assert!(outcome.is_valid());
//! ```
//!
//! The validators are pure and synchronous: no I/O, no shared state,
//! no dereferencing of `vectorReference` URIs. They are safe to call
//! concurrently on independent documents.

/// Annotation validator (top-level shape, motivation, target)
pub mod annotation;
/// Diagnostic taxonomy and accumulation
pub mod diagnostic;
/// Model descriptor validator
pub mod model;
/// JSON Pointer construction
pub mod path;
/// Vector payload validator
pub mod payload;
/// Validation report generation
pub mod reporter;

pub use annotation::validate_annotation;
pub use diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink};
pub use model::validate_model;
pub use path::JsonPointer;
pub use payload::validate_body;
pub use reporter::{ValidationReport, ValidationSummary};

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The document violates a normative rule
    Error,
    /// The document is valid but advisory prose is not followed
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
        }
    }
}

/// Result of one validation call.
///
/// Either a normalized value with the warnings that were raised along
/// the way, or the full list of diagnostics (errors and warnings)
/// that was accumulated. Never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Zero errors; the normalized value plus any warnings
    Valid {
        /// The normalized value
        value: T,
        /// Warnings raised during validation
        warnings: Vec<Diagnostic>,
    },
    /// At least one error; the full ordered diagnostic list
    Invalid {
        /// All accumulated diagnostics, errors and warnings alike
        diagnostics: Vec<Diagnostic>,
    },
}

impl<T> Outcome<T> {
    /// Whether validation succeeded (warnings allowed)
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The normalized value, if validation succeeded
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Valid { value, .. } => Some(value),
            Self::Invalid { .. } => None,
        }
    }

    /// Every diagnostic this outcome carries: the warnings of a valid
    /// outcome, or the full list of an invalid one
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Valid { warnings, .. } => warnings,
            Self::Invalid { diagnostics } => diagnostics,
        }
    }

    /// Convert into a `Result`, dropping warnings on success
    pub fn into_result(self) -> Result<T, Vec<Diagnostic>> {
        match self {
            Self::Valid { value, .. } => Ok(value),
            Self::Invalid { diagnostics } => Err(diagnostics),
        }
    }
}
