//! # EVA Domain Layer
//!
//! Core vocabulary and wire types for Embedding Annotations: Web
//! Annotations whose `motivation` is `embedding`, linking IIIF
//! resources to embedding vectors.
//!
//! This crate is pure data: serde value objects for the wire format,
//! the fixed linked-data surface (context URIs, vocabulary table),
//! and the domain error type. All validation logic lives in the
//! `eva-validate` crate.
//!
//! ## Architecture
//!
//! - [`value_objects`] - wire structs and derived payload types
//! - [`constants`] - context URIs, vocabulary and lookup tables
//! - [`error`] - hard-fault error type (validation failures are
//!   values, not errors)

/// Domain layer constants and linked-data surface
pub mod constants;
/// Error handling types
pub mod error;
/// Immutable value objects for the wire format
pub mod value_objects;

pub use constants::{
    CONTEXT_ORDER, EMBEDDING_CONTEXT_URI, MOTIVATION_EMBEDDING, PRESENTATION_CONTEXT_URI,
    context_order_is_valid,
};
pub use error::{Error, Result};
pub use value_objects::{
    AnnotationTarget, EmbeddingAnnotation, EmbeddingVectorBody, Endianness, ModelDescriptor,
    Selector, SpecificResourceTarget, TargetResource, TargetSource, VectorDataType,
    VectorEncoding, VectorPayload,
};
