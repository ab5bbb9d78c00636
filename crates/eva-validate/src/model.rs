//! Model Descriptor Validator
//!
//! Checks the `model` object's own fields: identity (`name`,
//! `version`), geometry (`dimensions`) and layout (`dataType`,
//! `endianness`). Requiredness of the layout fields depends on the
//! payload branch and is checked by the payload validator, which sees
//! both sides.

use serde_json::Value;

use eva_domain::value_objects::{ModelDescriptor, VectorDataType};

use crate::diagnostic::{DiagnosticKind, DiagnosticSink};
use crate::path::JsonPointer;
use crate::Outcome;

/// Validate a raw `model` value on its own.
///
/// This is the narrow entry point; [`crate::validate_annotation`]
/// runs the same checks as part of its single pass. Cross-field rules
/// that depend on the payload (`dimensions`/`dataType`/`endianness`
/// requiredness) are out of this function's scope.
pub fn validate_model(value: &Value) -> Outcome<ModelDescriptor> {
    let mut sink = DiagnosticSink::new();
    let model = check_model(value, &JsonPointer::root(), &mut sink);
    let outcome = sink.finish(model);
    tracing::debug!(
        valid = outcome.is_valid(),
        diagnostics = outcome.diagnostics().len(),
        "validated model descriptor"
    );
    outcome
}

/// Run the model checks, recording into `sink`.
///
/// Returns the normalized descriptor iff no error was recorded for
/// this subtree. Checks accumulate; nothing short-circuits.
pub(crate) fn check_model(
    value: &Value,
    path: &JsonPointer,
    sink: &mut DiagnosticSink,
) -> Option<ModelDescriptor> {
    let errors_before = sink.error_count();

    let Some(object) = value.as_object() else {
        sink.emit(
            DiagnosticKind::StructuralError,
            path,
            "model must be a JSON object",
        );
        return None;
    };

    for field in ["name", "version"] {
        match object.get(field) {
            None => sink.emit(
                DiagnosticKind::MissingRequiredField,
                &path.child(field),
                format!("model {field} is required"),
            ),
            Some(v) if !v.is_string() => sink.emit(
                DiagnosticKind::StructuralError,
                &path.child(field),
                format!("model {field} must be a string"),
            ),
            Some(_) => {}
        }
    }

    if let Some(dimensions) = object.get("dimensions") {
        if dimensions.as_u64().is_none_or(|d| d == 0) {
            sink.emit(
                DiagnosticKind::StructuralError,
                &path.child("dimensions"),
                "dimensions must be a positive integer",
            );
        }
    }

    if let Some(data_type) = object.get("dataType") {
        match data_type.as_str() {
            None => sink.emit(
                DiagnosticKind::StructuralError,
                &path.child("dataType"),
                "dataType must be a string",
            ),
            Some(token) => {
                // The recognized set is extensible; unknown tokens
                // degrade to a warning and disable length arithmetic.
                if !VectorDataType::from(token).is_recognized() {
                    sink.emit(
                        DiagnosticKind::UnknownDataType,
                        &path.child("dataType"),
                        format!(
                            "unrecognized dataType \"{token}\"; byte-length checks are skipped"
                        ),
                    );
                }
            }
        }
    }

    if let Some(endianness) = object.get("endianness") {
        let token = endianness.as_str();
        if token != Some("little") && token != Some("big") {
            sink.emit(
                DiagnosticKind::StructuralError,
                &path.child("endianness"),
                "endianness must be \"little\" or \"big\"",
            );
        }
    }

    for (field, expected) in [
        ("type", "a string"),
        ("truncation", "a string"),
        ("provider", "a string"),
    ] {
        if let Some(v) = object.get(field) {
            if !v.is_string() {
                sink.emit(
                    DiagnosticKind::StructuralError,
                    &path.child(field),
                    format!("model {field} must be {expected}"),
                );
            }
        }
    }

    if let Some(normalization) = object.get("normalization") {
        if !normalization.is_boolean() {
            sink.emit(
                DiagnosticKind::StructuralError,
                &path.child("normalization"),
                "normalization must be a boolean",
            );
        }
    }

    if let Some(max_tokens) = object.get("maxTokens") {
        if max_tokens.as_u64().is_none_or(|m| m == 0) {
            sink.emit(
                DiagnosticKind::StructuralError,
                &path.child("maxTokens"),
                "maxTokens must be a positive integer",
            );
        }
    }

    if sink.error_count() > errors_before {
        return None;
    }
    match serde_json::from_value::<ModelDescriptor>(value.clone()) {
        Ok(model) => Some(model),
        Err(err) => {
            sink.emit(
                DiagnosticKind::StructuralError,
                path,
                format!("model does not normalize: {err}"),
            );
            None
        }
    }
}

/// Lenient view of the model's layout fields, for the payload
/// validator's cross-checks.
///
/// Presence and validity are tracked separately so that a field that
/// is present but malformed (already reported by [`check_model`])
/// does not also trigger a missing-field diagnostic downstream.
#[derive(Debug, Default, Clone)]
pub(crate) struct ModelLayout {
    pub has_dimensions: bool,
    pub dimensions: Option<u64>,
    pub has_data_type: bool,
    pub data_type: Option<VectorDataType>,
    pub has_endianness: bool,
}

impl ModelLayout {
    pub(crate) fn from_value(model: Option<&Value>) -> Self {
        let Some(object) = model.and_then(Value::as_object) else {
            return Self::default();
        };
        Self {
            has_dimensions: object.contains_key("dimensions"),
            dimensions: object
                .get("dimensions")
                .and_then(Value::as_u64)
                .filter(|d| *d > 0),
            has_data_type: object.contains_key("dataType"),
            // Unrecognized tokens stay None here: their warning is
            // raised by check_model, and no arithmetic applies.
            data_type: object
                .get("dataType")
                .and_then(Value::as_str)
                .map(VectorDataType::from)
                .filter(VectorDataType::is_recognized),
            has_endianness: object.contains_key("endianness"),
        }
    }
}
