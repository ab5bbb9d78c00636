//! Diagnostic taxonomy and accumulation
//!
//! Every normative MUST/REQUIRED rule of the vocabulary maps to a
//! diagnostic kind; advisory SHOULD rules map to warning-severity
//! kinds. Validators never stop at the first problem: they record
//! into a [`DiagnosticSink`] and report everything in one pass.

use serde::{Deserialize, Serialize};

use crate::path::JsonPointer;
// Re-export Severity from the crate root for convenience
pub use crate::Severity;

/// Kind of a diagnostic, covering the vocabulary's normative rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Wrong JSON shape (not an object/array/string where required)
    StructuralError,
    /// Required field absent (`model`, `name`, `version`,
    /// `motivation`, conditionally `dimensions`/`dataType`/`format`)
    MissingRequiredField,
    /// Both `vector` and `vectorReference` present
    MutuallyExclusiveFields,
    /// Neither `vector` nor `vectorReference` present
    MissingPayload,
    /// `motivation` present but not exactly `embedding`
    InvalidMotivation,
    /// Declared `dimensions` disagrees with the actual array length
    DimensionMismatch,
    /// Decoded base64 byte count disagrees with
    /// `dimensions × byte width`
    ByteLengthMismatch,
    /// Multi-byte `dataType` with binary encoding but no `endianness`
    EndiannessRequired,
    /// Single-byte `dataType` with `endianness` present
    EndiannessNotApplicable,
    /// `dataType` not in the recognized set; byte-length arithmetic
    /// is skipped
    UnknownDataType,
    /// Malformed `id`/`vectorReference`/`source` URI
    InvalidUri,
    /// Malformed base64 payload or unrecognized `vectorEncoding`
    /// token
    InvalidEncoding,
    /// Malformed `region` selector string
    InvalidSelector,
    /// Spatial embedded source without `height`/`width`
    MissingHeightWidth,
    /// Non-spatial embedded source carrying `height`/`width`
    NonSpatialHeightWidth,
    /// Referenced `format` not in the recognized media-type table
    UnknownMediaType,
}

impl DiagnosticKind {
    /// Stable short code for machine consumption
    pub fn code(self) -> &'static str {
        match self {
            Self::StructuralError => "EVA001",
            Self::MissingRequiredField => "EVA002",
            Self::MutuallyExclusiveFields => "EVA003",
            Self::MissingPayload => "EVA004",
            Self::InvalidMotivation => "EVA005",
            Self::DimensionMismatch => "EVA006",
            Self::ByteLengthMismatch => "EVA007",
            Self::EndiannessRequired => "EVA008",
            Self::EndiannessNotApplicable => "EVA009",
            Self::UnknownDataType => "EVA010",
            Self::InvalidUri => "EVA011",
            Self::InvalidEncoding => "EVA012",
            Self::InvalidSelector => "EVA013",
            Self::MissingHeightWidth => "EVA014",
            Self::NonSpatialHeightWidth => "EVA015",
            Self::UnknownMediaType => "EVA016",
        }
    }

    /// Intrinsic severity of this kind
    pub fn severity(self) -> Severity {
        match self {
            Self::UnknownDataType
            | Self::MissingHeightWidth
            | Self::NonSpatialHeightWidth
            | Self::UnknownMediaType => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One validation finding: a kind, the JSON Pointer to the offending
/// value, and a human-readable message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// What rule was violated
    pub kind: DiagnosticKind,
    /// Severity, derived from the kind
    pub severity: Severity,
    /// JSON Pointer to the offending value
    pub path: JsonPointer,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic; severity is derived from the kind
    pub fn new(kind: DiagnosticKind, path: JsonPointer, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            path,
            message: message.into(),
        }
    }

    /// Whether this diagnostic is an error
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}: {}",
            self.severity,
            self.kind.code(),
            self.path,
            self.message
        )
    }
}

/// Accumulator for diagnostics raised during one validation pass.
///
/// Validators share one sink per document so that every problem is
/// reported, in document order, in a single call.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic of the given kind
    pub fn emit(&mut self, kind: DiagnosticKind, path: &JsonPointer, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(kind, path.clone(), message);
        tracing::trace!(code = %diagnostic.kind, path = %diagnostic.path, "{}", diagnostic.message);
        self.diagnostics.push(diagnostic);
    }

    /// Number of error-severity diagnostics recorded so far
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Number of warning-severity diagnostics recorded so far
    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }

    /// Whether any error-severity diagnostic was recorded
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// The recorded diagnostics, in document order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Close the sink: a normalized value and zero errors make a
    /// valid outcome carrying the warnings; anything else is invalid
    /// with the full diagnostic list.
    pub fn finish<T>(self, value: Option<T>) -> crate::Outcome<T> {
        match value {
            Some(value) if !self.has_errors() => crate::Outcome::Valid {
                value,
                warnings: self.diagnostics,
            },
            _ => crate::Outcome::Invalid {
                diagnostics: self.diagnostics,
            },
        }
    }
}
