//! Embedding Body Value Objects
//!
//! The wire shape of an `EmbeddingVector` body and the derived
//! payload representation the validators produce from it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use super::ModelDescriptor;

/// Value Object: Vector Encoding
///
/// Serialization format of an inline `vector` value. Open set, like
/// [`super::VectorDataType`]: unrecognized tokens survive the
/// serialization boundary and are rejected by the validators instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VectorEncoding {
    /// Inline JSON array of numbers
    JsonArray,
    /// Inline base64 string of packed binary elements
    Base64,
    /// Unrecognized encoding token, carried through verbatim
    Other(String),
}

impl VectorEncoding {
    /// Canonical string token for this encoding
    pub fn as_str(&self) -> &str {
        match self {
            Self::JsonArray => "json-array",
            Self::Base64 => "base64",
            Self::Other(token) => token,
        }
    }
}

impl From<String> for VectorEncoding {
    fn from(token: String) -> Self {
        match token.as_str() {
            "json-array" => Self::JsonArray,
            "base64" => Self::Base64,
            _ => Self::Other(token),
        }
    }
}

impl From<&str> for VectorEncoding {
    fn from(token: &str) -> Self {
        Self::from(token.to_string())
    }
}

impl From<VectorEncoding> for String {
    fn from(encoding: VectorEncoding) -> Self {
        encoding.as_str().to_string()
    }
}

impl std::fmt::Display for VectorEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value Object: Embedding Vector Body
///
/// The body of an Embedding Annotation in wire form. Exactly one of
/// `vector` (inline payload) or `vectorReference` (external payload)
/// is present on a valid body.
///
/// ## Business Rules
///
/// - `model` is always required
/// - `vector` requires `vectorEncoding`
/// - `vectorReference` requires `format` and must be an absolute URI
/// - `vector` and `vectorReference` are mutually exclusive
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingVectorBody {
    /// Body type, always `EmbeddingVector`
    #[serde(rename = "type")]
    pub body_type: String,
    /// Descriptor of the model that produced the vector
    pub model: ModelDescriptor,
    /// Inline payload: a JSON array (`json-array` encoding) or a
    /// base64 string (`base64` encoding)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector: Option<Value>,
    /// URI of an externally stored payload
    #[serde(rename = "vectorReference", skip_serializing_if = "Option::is_none")]
    pub vector_reference: Option<String>,
    /// Serialization format of the inline payload
    #[serde(rename = "vectorEncoding", skip_serializing_if = "Option::is_none")]
    pub vector_encoding: Option<VectorEncoding>,
    /// Media type of the referenced payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Unrecognized body properties, passed through verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Derived payload representation, produced by validation.
///
/// Not a wire entity: this is the decoded view of a body's payload
/// with the branch discriminated, used for cross-checks against the
/// model descriptor and handed to callers that want the numbers or
/// bytes without re-decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorPayload {
    /// Inline `json-array` payload
    InlineJsonArray {
        /// The vector elements
        values: Vec<f64>,
    },
    /// Inline `base64` payload, decoded
    InlineBase64 {
        /// The decoded bytes
        bytes: Vec<u8>,
    },
    /// External payload; only its description is validated
    ExternalReference {
        /// Absolute URI of the payload
        reference: Url,
        /// Declared media type of the payload
        format: String,
    },
}

impl VectorPayload {
    /// Element count for inline `json-array` payloads (the effective
    /// dimensions), `None` for the other branches
    pub fn element_count(&self) -> Option<usize> {
        match self {
            Self::InlineJsonArray { values } => Some(values.len()),
            _ => None,
        }
    }

    /// Decoded byte length for inline `base64` payloads, `None` for
    /// the other branches
    pub fn byte_len(&self) -> Option<usize> {
        match self {
            Self::InlineBase64 { bytes } => Some(bytes.len()),
            _ => None,
        }
    }

    /// Whether this payload is stored externally
    pub fn is_external(&self) -> bool {
        matches!(self, Self::ExternalReference { .. })
    }
}
