//! Unit tests for diagnostics, severities and JSON Pointers

use eva_validate::{Diagnostic, DiagnosticKind, DiagnosticSink, JsonPointer, Severity};

#[test]
fn test_pointer_building() {
    let root = JsonPointer::root();
    assert_eq!(root.as_str(), "");
    let body = root.child("body");
    assert_eq!(body.as_str(), "/body");
    assert_eq!(body.child("vector").index(2).as_str(), "/body/vector/2");
}

#[test]
fn test_pointer_escaping() {
    let root = JsonPointer::root();
    assert_eq!(root.child("a/b").as_str(), "/a~1b");
    assert_eq!(root.child("m~n").as_str(), "/m~0n");
}

#[test]
fn test_kind_codes_are_stable_and_unique() {
    let kinds = [
        DiagnosticKind::StructuralError,
        DiagnosticKind::MissingRequiredField,
        DiagnosticKind::MutuallyExclusiveFields,
        DiagnosticKind::MissingPayload,
        DiagnosticKind::InvalidMotivation,
        DiagnosticKind::DimensionMismatch,
        DiagnosticKind::ByteLengthMismatch,
        DiagnosticKind::EndiannessRequired,
        DiagnosticKind::EndiannessNotApplicable,
        DiagnosticKind::UnknownDataType,
        DiagnosticKind::InvalidUri,
        DiagnosticKind::InvalidEncoding,
        DiagnosticKind::InvalidSelector,
        DiagnosticKind::MissingHeightWidth,
        DiagnosticKind::NonSpatialHeightWidth,
        DiagnosticKind::UnknownMediaType,
    ];
    let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
    assert_eq!(DiagnosticKind::ByteLengthMismatch.code(), "EVA007");
}

#[test]
fn test_kind_severities() {
    assert_eq!(DiagnosticKind::ByteLengthMismatch.severity(), Severity::Error);
    assert_eq!(DiagnosticKind::UnknownDataType.severity(), Severity::Warning);
    assert_eq!(DiagnosticKind::NonSpatialHeightWidth.severity(), Severity::Warning);
    assert_eq!(DiagnosticKind::EndiannessRequired.severity(), Severity::Error);
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic::new(
        DiagnosticKind::ByteLengthMismatch,
        JsonPointer::root().child("body").child("vector"),
        "decoded 4 bytes but expected 12",
    );
    let rendered = diagnostic.to_string();
    assert!(rendered.contains("ERROR"));
    assert!(rendered.contains("EVA007"));
    assert!(rendered.contains("/body/vector"));
    assert!(rendered.contains("decoded 4 bytes"));
}

#[test]
fn test_sink_counts_and_finish() {
    let mut sink = DiagnosticSink::new();
    let root = JsonPointer::root();
    sink.emit(DiagnosticKind::UnknownDataType, &root, "odd type");
    assert!(!sink.has_errors());
    assert_eq!(sink.warning_count(), 1);

    sink.emit(DiagnosticKind::MissingPayload, &root, "no payload");
    assert!(sink.has_errors());
    assert_eq!(sink.error_count(), 1);

    let outcome = sink.finish(Some(()));
    assert!(!outcome.is_valid());
    assert_eq!(outcome.diagnostics().len(), 2);
}

#[test]
fn test_sink_warnings_ride_on_valid_outcome() {
    let mut sink = DiagnosticSink::new();
    sink.emit(
        DiagnosticKind::MissingHeightWidth,
        &JsonPointer::root().child("target"),
        "should carry height and width",
    );
    let outcome = sink.finish(Some(42));
    assert!(outcome.is_valid());
    assert_eq!(outcome.value(), Some(&42));
    assert_eq!(outcome.diagnostics().len(), 1);
    assert_eq!(outcome.diagnostics()[0].severity, Severity::Warning);
}
