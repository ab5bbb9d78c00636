//! Facade surface tests

use eva::domain::constants::{CONTEXT_ORDER, context_order_is_valid};
use eva::{DiagnosticKind, validate_annotation, validate_model};
use serde_json::json;

#[test]
fn test_validators_reachable_through_facade() {
    let outcome = validate_model(&json!({"name": "m", "version": "1.0"}));
    assert!(outcome.is_valid());

    let diagnostics = validate_annotation(&json!({}))
        .into_result()
        .unwrap_err();
    assert!(
        diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::MissingRequiredField)
    );
}

#[test]
fn test_context_surface_reachable_through_facade() {
    let context: Vec<serde_json::Value> =
        CONTEXT_ORDER.iter().map(|uri| json!(uri)).collect();
    assert!(context_order_is_valid(&context));
}
