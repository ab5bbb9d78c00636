//! Embedding Annotation Validator
//!
//! Checks the enclosing Web Annotation and composes the model and
//! payload validators into one accumulating pass: top-level shape,
//! the `embedding` motivation, the three target shapes, and the body.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use url::Url;

use eva_domain::constants::{MOTIVATION_EMBEDDING, TYPE_ANNOTATION, TYPE_SPECIFIC_RESOURCE};
use eva_domain::value_objects::EmbeddingAnnotation;

use crate::Outcome;
use crate::diagnostic::{DiagnosticKind, DiagnosticSink};
use crate::path::JsonPointer;
use crate::payload::check_body;

/// Spatial region grammar: `x,y,w,h` of non-negative numbers, with an
/// optional `pct:` prefix
static REGION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:pct:)?\d+(?:\.\d+)?,\d+(?:\.\d+)?,\d+(?:\.\d+)?,\d+(?:\.\d+)?$")
        .expect("Invalid regex")
});

/// Validate a candidate Embedding Annotation document.
///
/// One invocation is one judgment: every check runs, every problem is
/// reported, and the normalized annotation is returned only when no
/// error-severity diagnostic was raised. Warnings ride along on the
/// valid outcome.
pub fn validate_annotation(doc: &Value) -> Outcome<EmbeddingAnnotation> {
    let mut sink = DiagnosticSink::new();
    let annotation = check_annotation(doc, &mut sink);
    let outcome = sink.finish(annotation);
    tracing::debug!(
        valid = outcome.is_valid(),
        diagnostics = outcome.diagnostics().len(),
        "validated embedding annotation"
    );
    outcome
}

fn check_annotation(doc: &Value, sink: &mut DiagnosticSink) -> Option<EmbeddingAnnotation> {
    let root = JsonPointer::root();
    let Some(object) = doc.as_object() else {
        sink.emit(
            DiagnosticKind::StructuralError,
            &root,
            "annotation must be a JSON object",
        );
        return None;
    };

    match object.get("type").and_then(Value::as_str) {
        Some(TYPE_ANNOTATION) => {}
        Some(other) => sink.emit(
            DiagnosticKind::StructuralError,
            &root.child("type"),
            format!("type must be \"{TYPE_ANNOTATION}\", found \"{other}\""),
        ),
        None => sink.emit(
            DiagnosticKind::MissingRequiredField,
            &root.child("type"),
            format!("type is required and must be \"{TYPE_ANNOTATION}\""),
        ),
    }

    // Exact string match; the motivation is never inferred and has no
    // synonyms.
    match object.get("motivation") {
        None => sink.emit(
            DiagnosticKind::MissingRequiredField,
            &root.child("motivation"),
            format!("motivation is required and must be \"{MOTIVATION_EMBEDDING}\""),
        ),
        Some(Value::String(motivation)) if motivation == MOTIVATION_EMBEDDING => {}
        Some(Value::String(motivation)) => sink.emit(
            DiagnosticKind::InvalidMotivation,
            &root.child("motivation"),
            format!("motivation must be exactly \"{MOTIVATION_EMBEDDING}\", found \"{motivation}\""),
        ),
        Some(_) => sink.emit(
            DiagnosticKind::StructuralError,
            &root.child("motivation"),
            "motivation must be a string",
        ),
    }

    if let Some(id) = object.get("id") {
        match id.as_str() {
            None => sink.emit(
                DiagnosticKind::StructuralError,
                &root.child("id"),
                "id must be a URI string",
            ),
            Some(uri) => check_uri(uri, &root.child("id"), "id", sink),
        }
    }

    match object.get("target") {
        None => sink.emit(
            DiagnosticKind::MissingRequiredField,
            &root.child("target"),
            "target is required",
        ),
        Some(target) => check_target(target, &root.child("target"), sink),
    }

    let body_ok = match object.get("body") {
        None => {
            sink.emit(
                DiagnosticKind::MissingRequiredField,
                &root.child("body"),
                "body is required",
            );
            false
        }
        Some(body) => check_body(body, &root.child("body"), sink).is_some(),
    };

    if sink.has_errors() || !body_ok {
        return None;
    }
    match serde_json::from_value::<EmbeddingAnnotation>(doc.clone()) {
        Ok(annotation) => Some(annotation),
        Err(err) => {
            sink.emit(
                DiagnosticKind::StructuralError,
                &root,
                format!("annotation does not normalize: {err}"),
            );
            None
        }
    }
}

/// Target shapes: bare URI, full resource object, or SpecificResource
fn check_target(target: &Value, path: &JsonPointer, sink: &mut DiagnosticSink) {
    match target {
        Value::String(uri) => check_uri(uri, path, "target", sink),
        Value::Object(object) => {
            if object.get("type").and_then(Value::as_str) == Some(TYPE_SPECIFIC_RESOURCE) {
                check_specific_resource(object, path, sink);
            } else {
                check_resource(object, path, sink);
            }
        }
        _ => sink.emit(
            DiagnosticKind::StructuralError,
            path,
            "target must be a URI string or an object",
        ),
    }
}

/// Full resource reference: `id` and `type` are required
fn check_resource(
    object: &serde_json::Map<String, Value>,
    path: &JsonPointer,
    sink: &mut DiagnosticSink,
) {
    match object.get("id") {
        None => sink.emit(
            DiagnosticKind::MissingRequiredField,
            &path.child("id"),
            "resource id is required",
        ),
        Some(id) => match id.as_str() {
            None => sink.emit(
                DiagnosticKind::StructuralError,
                &path.child("id"),
                "resource id must be a URI string",
            ),
            Some(uri) => check_uri(uri, &path.child("id"), "resource id", sink),
        },
    }
    match object.get("type") {
        None => sink.emit(
            DiagnosticKind::MissingRequiredField,
            &path.child("type"),
            "resource type is required",
        ),
        Some(kind) if !kind.is_string() => sink.emit(
            DiagnosticKind::StructuralError,
            &path.child("type"),
            "resource type must be a string",
        ),
        Some(_) => {}
    }
}

/// SpecificResource: `source` and `selector` are required; embedded
/// sources get the spatial `height`/`width` advisories
fn check_specific_resource(
    object: &serde_json::Map<String, Value>,
    path: &JsonPointer,
    sink: &mut DiagnosticSink,
) {
    match object.get("source") {
        None => sink.emit(
            DiagnosticKind::MissingRequiredField,
            &path.child("source"),
            "SpecificResource source is required",
        ),
        Some(source) => check_source(source, &path.child("source"), sink),
    }

    match object.get("selector") {
        None => sink.emit(
            DiagnosticKind::MissingRequiredField,
            &path.child("selector"),
            "SpecificResource selector is required",
        ),
        Some(selector) => check_selector(selector, &path.child("selector"), sink),
    }
}

fn check_source(source: &Value, path: &JsonPointer, sink: &mut DiagnosticSink) {
    match source {
        Value::String(uri) => check_uri(uri, path, "source", sink),
        Value::Object(object) => {
            check_resource(object, path, sink);
            check_spatial_extent(object, path, sink);
        }
        _ => sink.emit(
            DiagnosticKind::StructuralError,
            path,
            "source must be a URI string or an object",
        ),
    }
}

/// Spatial embedded sources should carry `height`/`width`; the
/// declared non-spatial kinds should omit them. Both are advisory.
fn check_spatial_extent(
    object: &serde_json::Map<String, Value>,
    path: &JsonPointer,
    sink: &mut DiagnosticSink,
) {
    use eva_domain::constants::{NON_SPATIAL_RESOURCE_TYPES, SPATIAL_RESOURCE_TYPES};

    for field in ["height", "width"] {
        if let Some(value) = object.get(field) {
            if value.as_u64().is_none_or(|v| v == 0) {
                sink.emit(
                    DiagnosticKind::StructuralError,
                    &path.child(field),
                    format!("{field} must be a positive integer"),
                );
            }
        }
    }

    let Some(resource_type) = object.get("type").and_then(Value::as_str) else {
        return;
    };
    let has_extent = object.contains_key("height") && object.contains_key("width");
    let has_any_extent = object.contains_key("height") || object.contains_key("width");

    if SPATIAL_RESOURCE_TYPES.contains(&resource_type) && !has_extent {
        sink.emit(
            DiagnosticKind::MissingHeightWidth,
            path,
            format!("embedded {resource_type} source should carry height and width"),
        );
    }
    if NON_SPATIAL_RESOURCE_TYPES.contains(&resource_type) && has_any_extent {
        sink.emit(
            DiagnosticKind::NonSpatialHeightWidth,
            path,
            format!("height/width should be omitted on non-spatial {resource_type} source"),
        );
    }
}

fn check_selector(selector: &Value, path: &JsonPointer, sink: &mut DiagnosticSink) {
    let Some(object) = selector.as_object() else {
        sink.emit(
            DiagnosticKind::StructuralError,
            path,
            "selector must be a JSON object",
        );
        return;
    };

    match object.get("type") {
        None => sink.emit(
            DiagnosticKind::MissingRequiredField,
            &path.child("type"),
            "selector type is required",
        ),
        Some(kind) if !kind.is_string() => sink.emit(
            DiagnosticKind::StructuralError,
            &path.child("type"),
            "selector type must be a string",
        ),
        Some(_) => {}
    }

    if let Some(region) = object.get("region") {
        match region.as_str() {
            None => sink.emit(
                DiagnosticKind::StructuralError,
                &path.child("region"),
                "region must be a string",
            ),
            Some(region) if !REGION_RE.is_match(region) => sink.emit(
                DiagnosticKind::InvalidSelector,
                &path.child("region"),
                format!(
                    "region \"{region}\" must be four comma-separated non-negative numbers (x,y,w,h)"
                ),
            ),
            Some(_) => {}
        }
    }
}

/// `Url::parse` accepts absolute URIs only; anything else is a
/// malformed reference here
fn check_uri(uri: &str, path: &JsonPointer, field: &str, sink: &mut DiagnosticSink) {
    if let Err(err) = Url::parse(uri) {
        sink.emit(
            DiagnosticKind::InvalidUri,
            path,
            format!("{field} is not an absolute URI: {err}"),
        );
    }
}
