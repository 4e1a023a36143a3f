//! Card faces.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The face printed on a card.
///
/// The engine only ever compares symbols for equality; what they look like
/// is up to the host. Backed by `Arc<str>` so snapshots clone cheaply.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Create a new symbol.
    pub fn new(face: impl AsRef<str>) -> Self {
        Self(Arc::from(face.as_ref()))
    }

    /// The face as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(face: &str) -> Self {
        Self::new(face)
    }
}

impl From<String> for Symbol {
    fn from(face: String) -> Self {
        Self(Arc::from(face))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
