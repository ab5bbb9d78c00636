//! Model Descriptor Value Objects
//!
//! Value objects describing the embedding model that produced a
//! vector: identity (`name`/`version`), geometry (`dimensions`) and
//! the binary layout of its elements (`dataType`/`endianness`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value Object: Vector Element Data Type
///
/// Numeric element type of a binary-encoded vector. The recognized
/// set is open: the vocabulary allows future values, so unrecognized
/// tokens are carried through verbatim rather than rejected at the
/// serialization boundary.
///
/// ## Business Rules
///
/// - Recognized types have a fixed byte width used for payload
///   length arithmetic
/// - Unrecognized types have no byte width; length arithmetic is
///   impossible for them
///
/// ## Example
///
/// ```rust
/// use eva_domain::value_objects::VectorDataType;
///
/// let dt = VectorDataType::from("float32");
/// assert_eq!(dt.byte_width(), Some(4));
/// assert!(dt.is_multi_byte());
///
/// let unknown = VectorDataType::from("bfloat16");
/// assert_eq!(unknown.byte_width(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VectorDataType {
    /// 32-bit IEEE 754 floating point
    Float32,
    /// 64-bit IEEE 754 floating point
    Float64,
    /// Signed 8-bit integer
    Int8,
    /// Unsigned 8-bit integer
    UInt8,
    /// Signed 16-bit integer
    Int16,
    /// Unsigned 16-bit integer
    UInt16,
    /// Signed 32-bit integer
    Int32,
    /// Unsigned 32-bit integer
    UInt32,
    /// Unrecognized type token, carried through verbatim
    Other(String),
}

impl VectorDataType {
    /// Canonical string token for this data type
    pub fn as_str(&self) -> &str {
        match self {
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Other(token) => token,
        }
    }

    /// Bytes per element, or `None` for unrecognized types
    pub fn byte_width(&self) -> Option<usize> {
        match self {
            Self::Int8 | Self::UInt8 => Some(1),
            Self::Int16 | Self::UInt16 => Some(2),
            Self::Float32 | Self::Int32 | Self::UInt32 => Some(4),
            Self::Float64 => Some(8),
            Self::Other(_) => None,
        }
    }

    /// Whether elements span more than one byte (and therefore need
    /// an explicit byte order). Unrecognized types count as
    /// single-byte here; the validators surface them separately.
    pub fn is_multi_byte(&self) -> bool {
        self.byte_width().is_some_and(|width| width > 1)
    }

    /// Whether the token is one of the recognized types
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for VectorDataType {
    fn from(token: String) -> Self {
        match token.as_str() {
            "float32" => Self::Float32,
            "float64" => Self::Float64,
            "int8" => Self::Int8,
            "uint8" => Self::UInt8,
            "int16" => Self::Int16,
            "uint16" => Self::UInt16,
            "int32" => Self::Int32,
            "uint32" => Self::UInt32,
            _ => Self::Other(token),
        }
    }
}

impl From<&str> for VectorDataType {
    fn from(token: &str) -> Self {
        Self::from(token.to_string())
    }
}

impl From<VectorDataType> for String {
    fn from(data_type: VectorDataType) -> Self {
        data_type.as_str().to_string()
    }
}

impl std::fmt::Display for VectorDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value Object: Vector Endianness
///
/// Byte order of multi-byte vector elements. Closed set: the
/// vocabulary defines exactly `little` and `big`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Least significant byte first
    Little,
    /// Most significant byte first
    Big,
}

impl Endianness {
    /// Canonical string token
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Little => "little",
            Self::Big => "big",
        }
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value Object: Embedding Model Descriptor
///
/// Identifies the model that produced a vector and, where the payload
/// encoding requires it, the binary layout of the vector's elements.
///
/// ## Business Rules
///
/// - `name` and `version` are always required
/// - `dimensions` is required for base64 and referenced payloads
/// - `dataType` is required for base64 payloads and for referenced
///   binary payloads
/// - `endianness` is required iff `dataType` is multi-byte and the
///   payload is binary; it must be omitted for single-byte types
/// - Unrecognized descriptor properties pass through verbatim
///
/// ## Example
///
/// ```rust
/// use eva_domain::value_objects::ModelDescriptor;
///
/// let model: ModelDescriptor = serde_json::from_value(serde_json::json!({
///     "name": "clip-vit-base-patch32",
///     "version": "1.0",
///     "dimensions": 512,
///     "dataType": "float32",
///     "endianness": "little",
/// }))
/// .unwrap();
/// assert_eq!(model.data_type.as_ref().unwrap().byte_width(), Some(4));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDescriptor {
    /// Model name
    pub name: String,
    /// Model version
    pub version: String,
    /// Number of vector elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u64>,
    /// Element data type
    #[serde(rename = "dataType", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<VectorDataType>,
    /// Byte order of multi-byte elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endianness: Option<Endianness>,
    /// Model kind (e.g. text, image, multimodal)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    /// Input truncation strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation: Option<String>,
    /// Whether vectors are L2-normalized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalization: Option<bool>,
    /// Organization providing the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Maximum input tokens
    #[serde(rename = "maxTokens", skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u64>,
    /// Unrecognized descriptor properties, passed through verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
