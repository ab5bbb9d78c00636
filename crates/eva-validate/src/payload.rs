//! Vector Payload Validator
//!
//! Checks the payload side of an `EmbeddingVector` body: the
//! exactly-one-of rule for `vector`/`vectorReference`, the three
//! payload branches, and the cross-checks against the model's
//! declared layout:
//! - `json-array`: element count vs `dimensions`
//! - `base64`: decoded byte count vs `dimensions × byte width`,
//!   endianness required iff multi-byte
//! - referenced: absolute URI, required `format`, binary media types
//!   carry the same layout requirements as base64
//!
//! Referenced content is never fetched; only its description is
//! checked.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde_json::Value;
use url::Url;

use eva_domain::constants::{
    ENCODING_BASE64, ENCODING_JSON_ARRAY, RECOGNIZED_MEDIA_TYPES, TYPE_EMBEDDING_VECTOR,
    media_type_is_binary,
};
use eva_domain::value_objects::{EmbeddingVectorBody, VectorPayload};

use crate::Outcome;
use crate::diagnostic::{DiagnosticKind, DiagnosticSink};
use crate::model::{ModelLayout, check_model};
use crate::path::JsonPointer;

/// Validate a raw `EmbeddingVector` body on its own.
///
/// Runs the model checks and the payload checks in one accumulating
/// pass and returns the normalized body together with its decoded
/// payload. [`crate::validate_annotation`] calls the same machinery
/// for the `body` member.
pub fn validate_body(value: &Value) -> Outcome<(EmbeddingVectorBody, VectorPayload)> {
    let mut sink = DiagnosticSink::new();
    let body = check_body(value, &JsonPointer::root(), &mut sink);
    let outcome = sink.finish(body);
    tracing::debug!(
        valid = outcome.is_valid(),
        diagnostics = outcome.diagnostics().len(),
        "validated embedding body"
    );
    outcome
}

/// Run the body checks, recording into `sink`.
///
/// Returns the normalized body and payload iff no error was recorded
/// for this subtree.
pub(crate) fn check_body(
    value: &Value,
    path: &JsonPointer,
    sink: &mut DiagnosticSink,
) -> Option<(EmbeddingVectorBody, VectorPayload)> {
    let errors_before = sink.error_count();

    let Some(object) = value.as_object() else {
        sink.emit(
            DiagnosticKind::StructuralError,
            path,
            "body must be a JSON object",
        );
        return None;
    };

    match object.get("type").and_then(Value::as_str) {
        Some(TYPE_EMBEDDING_VECTOR) => {}
        Some(other) => sink.emit(
            DiagnosticKind::StructuralError,
            &path.child("type"),
            format!("body type must be \"{TYPE_EMBEDDING_VECTOR}\", found \"{other}\""),
        ),
        None => sink.emit(
            DiagnosticKind::MissingRequiredField,
            &path.child("type"),
            format!("body type is required and must be \"{TYPE_EMBEDDING_VECTOR}\""),
        ),
    }

    let model_value = object.get("model");
    match model_value {
        None => sink.emit(
            DiagnosticKind::MissingRequiredField,
            &path.child("model"),
            "body model is required",
        ),
        Some(model) => {
            check_model(model, &path.child("model"), sink);
        }
    }
    // Layout cross-checks run even when the model object itself has
    // problems, so one pass reports both sides.
    let layout = ModelLayout::from_value(model_value);
    let model_path = path.child("model");

    let payload = match (object.get("vector"), object.get("vectorReference")) {
        (Some(_), Some(_)) => {
            sink.emit(
                DiagnosticKind::MutuallyExclusiveFields,
                path,
                "vector and vectorReference are mutually exclusive",
            );
            None
        }
        (None, None) => {
            sink.emit(
                DiagnosticKind::MissingPayload,
                path,
                "one of vector or vectorReference is required",
            );
            None
        }
        (Some(vector), None) => check_inline(object, vector, path, &model_path, &layout, sink),
        (None, Some(reference)) => check_reference(object, reference, path, &model_path, &layout, sink),
    };

    if sink.error_count() > errors_before {
        return None;
    }
    let payload = payload?;
    match serde_json::from_value::<EmbeddingVectorBody>(value.clone()) {
        Ok(body) => Some((body, payload)),
        Err(err) => {
            sink.emit(
                DiagnosticKind::StructuralError,
                path,
                format!("body does not normalize: {err}"),
            );
            None
        }
    }
}

/// Inline branch: dispatch on `vectorEncoding`
fn check_inline(
    object: &serde_json::Map<String, Value>,
    vector: &Value,
    path: &JsonPointer,
    model_path: &JsonPointer,
    layout: &ModelLayout,
    sink: &mut DiagnosticSink,
) -> Option<VectorPayload> {
    let encoding_path = path.child("vectorEncoding");
    let Some(encoding) = object.get("vectorEncoding") else {
        sink.emit(
            DiagnosticKind::MissingRequiredField,
            &encoding_path,
            "vectorEncoding is required when vector is inline",
        );
        return None;
    };
    let Some(token) = encoding.as_str() else {
        sink.emit(
            DiagnosticKind::StructuralError,
            &encoding_path,
            "vectorEncoding must be a string",
        );
        return None;
    };
    match token {
        ENCODING_JSON_ARRAY => check_json_array(vector, &path.child("vector"), model_path, layout, sink),
        ENCODING_BASE64 => check_base64(vector, &path.child("vector"), model_path, layout, sink),
        other => {
            // The branch dispatch is keyed on this token; an unknown
            // one leaves no way to interpret the payload.
            sink.emit(
                DiagnosticKind::InvalidEncoding,
                &encoding_path,
                format!(
                    "unrecognized vectorEncoding \"{other}\" (expected \"{ENCODING_JSON_ARRAY}\" or \"{ENCODING_BASE64}\")"
                ),
            );
            None
        }
    }
}

/// Inline `json-array` branch
fn check_json_array(
    vector: &Value,
    vector_path: &JsonPointer,
    model_path: &JsonPointer,
    layout: &ModelLayout,
    sink: &mut DiagnosticSink,
) -> Option<VectorPayload> {
    let Some(elements) = vector.as_array() else {
        sink.emit(
            DiagnosticKind::StructuralError,
            vector_path,
            "vector must be a JSON array for json-array encoding",
        );
        return None;
    };

    let mut values = Vec::with_capacity(elements.len());
    let mut all_numbers = true;
    for (index, element) in elements.iter().enumerate() {
        match element.as_f64() {
            Some(number) => values.push(number),
            None => {
                all_numbers = false;
                sink.emit(
                    DiagnosticKind::StructuralError,
                    &vector_path.index(index),
                    "vector elements must be JSON numbers",
                );
            }
        }
    }

    // The array length is the effective dimensions; a declared value
    // must agree exactly.
    if let Some(declared) = layout.dimensions {
        if declared != elements.len() as u64 {
            sink.emit(
                DiagnosticKind::DimensionMismatch,
                &model_path.child("dimensions"),
                format!(
                    "model declares {declared} dimensions but vector has {} elements",
                    elements.len()
                ),
            );
        }
    }

    all_numbers.then_some(VectorPayload::InlineJsonArray { values })
}

/// Inline `base64` branch
fn check_base64(
    vector: &Value,
    vector_path: &JsonPointer,
    model_path: &JsonPointer,
    layout: &ModelLayout,
    sink: &mut DiagnosticSink,
) -> Option<VectorPayload> {
    let Some(text) = vector.as_str() else {
        sink.emit(
            DiagnosticKind::StructuralError,
            vector_path,
            "vector must be a base64 string for base64 encoding",
        );
        return None;
    };

    let bytes = match BASE64_STANDARD.decode(text) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            sink.emit(
                DiagnosticKind::InvalidEncoding,
                vector_path,
                format!("vector is not valid base64: {err}"),
            );
            None
        }
    };

    if !layout.has_dimensions {
        sink.emit(
            DiagnosticKind::MissingRequiredField,
            &model_path.child("dimensions"),
            "model dimensions is required for base64 encoding",
        );
    }
    if !layout.has_data_type {
        sink.emit(
            DiagnosticKind::MissingRequiredField,
            &model_path.child("dataType"),
            "model dataType is required for base64 encoding",
        );
    }
    check_endianness_rules(model_path, layout, sink);

    if let (Some(bytes), Some(dimensions), Some(width)) = (
        bytes.as_ref(),
        layout.dimensions,
        layout.data_type.as_ref().and_then(|dt| dt.byte_width()),
    ) {
        let expected = dimensions.saturating_mul(width as u64);
        if bytes.len() as u64 != expected {
            sink.emit(
                DiagnosticKind::ByteLengthMismatch,
                vector_path,
                format!(
                    "decoded {} bytes but {dimensions} dimensions of {width}-byte elements require exactly {expected}",
                    bytes.len()
                ),
            );
        }
    }

    bytes.map(|bytes| VectorPayload::InlineBase64 { bytes })
}

/// Referenced branch: only the description is checked, never the
/// content
fn check_reference(
    object: &serde_json::Map<String, Value>,
    reference: &Value,
    path: &JsonPointer,
    model_path: &JsonPointer,
    layout: &ModelLayout,
    sink: &mut DiagnosticSink,
) -> Option<VectorPayload> {
    let reference_path = path.child("vectorReference");
    let parsed = match reference.as_str() {
        None => {
            sink.emit(
                DiagnosticKind::StructuralError,
                &reference_path,
                "vectorReference must be a URI string",
            );
            None
        }
        Some(uri) => match Url::parse(uri) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                sink.emit(
                    DiagnosticKind::InvalidUri,
                    &reference_path,
                    format!("vectorReference is not an absolute URI: {err}"),
                );
                None
            }
        },
    };

    let format = match object.get("format") {
        None => {
            sink.emit(
                DiagnosticKind::MissingRequiredField,
                &path.child("format"),
                "format is required when vectorReference is used",
            );
            None
        }
        Some(format) => match format.as_str() {
            None => {
                sink.emit(
                    DiagnosticKind::StructuralError,
                    &path.child("format"),
                    "format must be a media-type string",
                );
                None
            }
            Some(media_type) => Some(media_type),
        },
    };

    if !layout.has_dimensions {
        sink.emit(
            DiagnosticKind::MissingRequiredField,
            &model_path.child("dimensions"),
            "model dimensions is required when vectorReference is used",
        );
    }

    if let Some(media_type) = format {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or(media_type)
            .trim()
            .to_ascii_lowercase();
        if !RECOGNIZED_MEDIA_TYPES.contains(&essence.as_str()) {
            sink.emit(
                DiagnosticKind::UnknownMediaType,
                &path.child("format"),
                format!("format \"{media_type}\" is not a recognized vector media type"),
            );
        }
        if media_type_is_binary(media_type) {
            if !layout.has_data_type {
                sink.emit(
                    DiagnosticKind::MissingRequiredField,
                    &model_path.child("dataType"),
                    format!("model dataType is required for binary format \"{media_type}\""),
                );
            }
            check_endianness_rules(model_path, layout, sink);
        }
    }

    match (parsed, format) {
        (Some(reference), Some(media_type)) => Some(VectorPayload::ExternalReference {
            reference,
            format: media_type.to_string(),
        }),
        _ => None,
    }
}

/// Endianness is required iff the element type is multi-byte, and
/// must be omitted for single-byte types. Types with unknown width
/// are skipped; their warning comes from the model checks.
fn check_endianness_rules(
    model_path: &JsonPointer,
    layout: &ModelLayout,
    sink: &mut DiagnosticSink,
) {
    let Some(width) = layout.data_type.as_ref().and_then(|dt| dt.byte_width()) else {
        return;
    };
    if width > 1 && !layout.has_endianness {
        sink.emit(
            DiagnosticKind::EndiannessRequired,
            &model_path.child("endianness"),
            format!(
                "endianness is required for multi-byte dataType \"{}\"",
                layout.data_type.as_ref().map_or("", |dt| dt.as_str())
            ),
        );
    }
    if width == 1 && layout.has_endianness {
        sink.emit(
            DiagnosticKind::EndiannessNotApplicable,
            &model_path.child("endianness"),
            format!(
                "endianness does not apply to single-byte dataType \"{}\"",
                layout.data_type.as_ref().map_or("", |dt| dt.as_str())
            ),
        );
    }
}
