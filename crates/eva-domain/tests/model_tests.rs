//! Unit tests for model descriptor value objects

use eva_domain::value_objects::{Endianness, ModelDescriptor, VectorDataType};
use serde_json::json;

#[test]
fn test_byte_widths() {
    assert_eq!(VectorDataType::Int8.byte_width(), Some(1));
    assert_eq!(VectorDataType::UInt8.byte_width(), Some(1));
    assert_eq!(VectorDataType::Int16.byte_width(), Some(2));
    assert_eq!(VectorDataType::UInt16.byte_width(), Some(2));
    assert_eq!(VectorDataType::Int32.byte_width(), Some(4));
    assert_eq!(VectorDataType::UInt32.byte_width(), Some(4));
    assert_eq!(VectorDataType::Float32.byte_width(), Some(4));
    assert_eq!(VectorDataType::Float64.byte_width(), Some(8));
}

#[test]
fn test_unknown_data_type_has_no_width() {
    let unknown = VectorDataType::from("bfloat16");
    assert_eq!(unknown.byte_width(), None);
    assert!(!unknown.is_recognized());
    assert!(!unknown.is_multi_byte());
}

#[test]
fn test_multi_byte_classification() {
    assert!(VectorDataType::Float32.is_multi_byte());
    assert!(VectorDataType::UInt16.is_multi_byte());
    assert!(!VectorDataType::Int8.is_multi_byte());
    assert!(!VectorDataType::UInt8.is_multi_byte());
}

#[test]
fn test_data_type_token_round_trip() {
    for token in ["float32", "float64", "int8", "uint8", "int16", "uint16", "int32", "uint32"] {
        let data_type = VectorDataType::from(token);
        assert!(data_type.is_recognized());
        assert_eq!(data_type.as_str(), token);
    }
    // Unrecognized tokens survive verbatim
    assert_eq!(VectorDataType::from("fp4").as_str(), "fp4");
}

#[test]
fn test_endianness_serde_tokens() {
    let little: Endianness = serde_json::from_value(json!("little")).unwrap();
    assert_eq!(little, Endianness::Little);
    assert_eq!(serde_json::to_value(Endianness::Big).unwrap(), json!("big"));
    assert!(serde_json::from_value::<Endianness>(json!("middle")).is_err());
}

#[test]
fn test_model_descriptor_deserialization() {
    let model: ModelDescriptor = serde_json::from_value(json!({
        "name": "clip-vit-base-patch32",
        "version": "1.0",
        "dimensions": 512,
        "dataType": "float32",
        "endianness": "little",
        "provider": "openai",
        "normalization": true,
    }))
    .unwrap();
    assert_eq!(model.name, "clip-vit-base-patch32");
    assert_eq!(model.dimensions, Some(512));
    assert_eq!(model.data_type, Some(VectorDataType::Float32));
    assert_eq!(model.endianness, Some(Endianness::Little));
    assert_eq!(model.normalization, Some(true));
}

#[test]
fn test_model_descriptor_preserves_unknown_properties() {
    let value = json!({
        "name": "m",
        "version": "2",
        "quantization": "int4-awq",
    });
    let model: ModelDescriptor = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(model.extra.get("quantization"), Some(&json!("int4-awq")));
    // And they survive re-serialization
    assert_eq!(serde_json::to_value(&model).unwrap(), value);
}

#[test]
fn test_model_descriptor_omits_absent_fields() {
    let model: ModelDescriptor =
        serde_json::from_value(json!({"name": "m", "version": "1"})).unwrap();
    let wire = serde_json::to_value(&model).unwrap();
    assert_eq!(wire, json!({"name": "m", "version": "1"}));
}
