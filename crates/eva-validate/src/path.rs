//! JSON Pointer construction
//!
//! RFC 6901 pointers locate the offending value in every diagnostic.

use serde::{Deserialize, Serialize};

/// An RFC 6901 JSON Pointer, built top-down while validating.
///
/// The root pointer is the empty string; each `child`/`index` call
/// appends one reference token with `~` and `/` escaped as `~0` and
/// `~1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JsonPointer(String);

impl JsonPointer {
    /// The root pointer (whole document)
    pub fn root() -> Self {
        Self::default()
    }

    /// Pointer to a named member of the value this pointer locates
    pub fn child(&self, token: &str) -> Self {
        let escaped = token.replace('~', "~0").replace('/', "~1");
        Self(format!("{}/{}", self.0, escaped))
    }

    /// Pointer to an array element of the value this pointer locates
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}/{}", self.0, index))
    }

    /// The pointer as a string (empty for the root)
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            // The empty pointer reads poorly in messages
            write!(f, "/")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
