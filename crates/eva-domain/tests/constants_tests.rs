//! Unit tests for the linked-data surface and lookup tables

use eva_domain::constants::{
    CONTEXT_ORDER, EMBEDDING_CONTEXT_URI, MOTIVATION_EMBEDDING, PRESENTATION_CONTEXT_URI,
    VOCABULARY_PROPERTIES, context_order_is_valid, media_type_is_binary,
};
use serde_json::json;

#[test]
fn test_context_order_constant() {
    assert_eq!(CONTEXT_ORDER[0], EMBEDDING_CONTEXT_URI);
    assert_eq!(CONTEXT_ORDER[1], PRESENTATION_CONTEXT_URI);
}

#[test]
fn test_context_order_extension_first_is_valid() {
    let context = [json!(EMBEDDING_CONTEXT_URI), json!(PRESENTATION_CONTEXT_URI)];
    assert!(context_order_is_valid(&context));
}

#[test]
fn test_context_order_presentation_first_is_invalid() {
    let context = [json!(PRESENTATION_CONTEXT_URI), json!(EMBEDDING_CONTEXT_URI)];
    assert!(!context_order_is_valid(&context));
}

#[test]
fn test_context_order_ignores_inline_context_objects() {
    let context = [
        json!(EMBEDDING_CONTEXT_URI),
        json!({"embedding": "http://example.org/vocab#embedding"}),
        json!(PRESENTATION_CONTEXT_URI),
    ];
    assert!(context_order_is_valid(&context));
}

#[test]
fn test_context_order_with_one_context_passes() {
    assert!(context_order_is_valid(&[json!(PRESENTATION_CONTEXT_URI)]));
    assert!(context_order_is_valid(&[]));
}

#[test]
fn test_media_type_binary_heuristic() {
    assert!(media_type_is_binary("application/octet-stream"));
    assert!(media_type_is_binary("application/x-numpy"));
    assert!(!media_type_is_binary("application/json"));
    assert!(!media_type_is_binary("text/csv"));
    assert!(!media_type_is_binary("text/anything-else"));
}

#[test]
fn test_media_type_parameters_are_ignored() {
    assert!(!media_type_is_binary("application/json; charset=utf-8"));
    assert!(media_type_is_binary("application/octet-stream; padding=none"));
}

#[test]
fn test_vocabulary_surface() {
    assert_eq!(MOTIVATION_EMBEDDING, "embedding");
    for property in ["vector", "vectorReference", "vectorEncoding", "model", "endianness"] {
        assert!(VOCABULARY_PROPERTIES.contains(&property));
    }
}
