//! Unit tests for the model descriptor validator

use eva_validate::{DiagnosticKind, validate_model};
use serde_json::json;

#[test]
fn test_minimal_model_is_valid() {
    let outcome = validate_model(&json!({"name": "m", "version": "1.0"}));
    assert!(outcome.is_valid());
    assert!(outcome.diagnostics().is_empty());
}

#[test]
fn test_model_must_be_an_object() {
    let outcome = validate_model(&json!("clip"));
    let diagnostics = outcome.clone().into_result().unwrap_err();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::StructuralError);
}

#[test]
fn test_missing_name_and_version_both_reported() {
    let outcome = validate_model(&json!({"dimensions": 3}));
    let diagnostics = outcome.into_result().unwrap_err();
    let paths: Vec<&str> = diagnostics.iter().map(|d| d.path.as_str()).collect();
    assert!(paths.contains(&"/name"));
    assert!(paths.contains(&"/version"));
    assert!(
        diagnostics
            .iter()
            .all(|d| d.kind == DiagnosticKind::MissingRequiredField)
    );
}

#[test]
fn test_non_string_name_is_structural() {
    let outcome = validate_model(&json!({"name": 7, "version": "1.0"}));
    let diagnostics = outcome.into_result().unwrap_err();
    assert_eq!(diagnostics[0].kind, DiagnosticKind::StructuralError);
    assert_eq!(diagnostics[0].path.as_str(), "/name");
}

#[test]
fn test_dimensions_must_be_positive_integer() {
    for bad in [json!(0), json!(-2), json!(2.5), json!("512")] {
        let outcome = validate_model(&json!({"name": "m", "version": "1", "dimensions": bad}));
        let diagnostics = outcome.into_result().unwrap_err();
        assert_eq!(diagnostics[0].kind, DiagnosticKind::StructuralError);
        assert_eq!(diagnostics[0].path.as_str(), "/dimensions");
    }
}

#[test]
fn test_unknown_data_type_is_warning_not_error() {
    let outcome = validate_model(&json!({
        "name": "m", "version": "1", "dataType": "bfloat16",
    }));
    assert!(outcome.is_valid());
    let warnings = outcome.diagnostics();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, DiagnosticKind::UnknownDataType);
    assert_eq!(warnings[0].path.as_str(), "/dataType");
}

#[test]
fn test_invalid_endianness_token() {
    let outcome = validate_model(&json!({
        "name": "m", "version": "1", "endianness": "middle",
    }));
    let diagnostics = outcome.into_result().unwrap_err();
    assert_eq!(diagnostics[0].kind, DiagnosticKind::StructuralError);
    assert_eq!(diagnostics[0].path.as_str(), "/endianness");
}

#[test]
fn test_optional_field_shapes_are_checked() {
    let outcome = validate_model(&json!({
        "name": "m",
        "version": "1",
        "normalization": "yes",
        "maxTokens": -1,
        "provider": 42,
    }));
    let diagnostics = outcome.into_result().unwrap_err();
    let paths: Vec<&str> = diagnostics.iter().map(|d| d.path.as_str()).collect();
    assert!(paths.contains(&"/normalization"));
    assert!(paths.contains(&"/maxTokens"));
    assert!(paths.contains(&"/provider"));
}

#[test]
fn test_all_problems_reported_in_one_pass() {
    let outcome = validate_model(&json!({
        "version": 3,
        "dimensions": 0,
        "endianness": "mixed",
    }));
    let diagnostics = outcome.into_result().unwrap_err();
    // name missing, version wrong shape, dimensions zero, endianness bad
    assert_eq!(diagnostics.len(), 4);
}

#[test]
fn test_valid_model_normalizes_with_extras() {
    let outcome = validate_model(&json!({
        "name": "m", "version": "1", "dataType": "float32", "endianness": "big",
        "dimensions": 4, "quantized": false,
    }));
    let model = outcome.into_result().unwrap();
    assert_eq!(model.dimensions, Some(4));
    assert_eq!(model.extra.get("quantized"), Some(&json!(false)));
}
