//! File reference states
//!
//! A manifest names files by path. Normalization replaces each path with a
//! content fingerprint so that two bundles shipping the same bytes under
//! different names compare equal.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text substituted for a reference that points at a directory.
pub const MANUAL_REVIEW_SENTINEL: &str =
    "Not a zip file, hashes will not match. Manual validation of this folder is required.";

/// A file-valued manifest field.
///
/// Deserializes from a plain string (always `Path`) and serializes to a plain
/// string, so the other states only exist after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRef {
    /// Path as authored, relative to the bundle root
    Path(String),
    /// Hex content digest of the referenced file
    Fingerprint(String),
    /// UUID placeholder for a file resolved elsewhere; compared as an opaque string
    External(String),
    /// The path names a directory; contents are not fingerprinted
    ManualReview,
}

impl FileRef {
    /// Comparable string form of this reference
    pub fn as_str(&self) -> &str {
        match self {
            FileRef::Path(s) | FileRef::Fingerprint(s) | FileRef::External(s) => s,
            FileRef::ManualReview => MANUAL_REVIEW_SENTINEL,
        }
    }

    /// The authored path, if this reference has not been resolved yet
    pub fn unresolved_path(&self) -> Option<&str> {
        match self {
            FileRef::Path(p) => Some(p),
            _ => None,
        }
    }
}

impl From<&str> for FileRef {
    fn from(path: &str) -> Self {
        FileRef::Path(path.to_string())
    }
}

impl Serialize for FileRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FileRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(FileRef::Path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_as_path() {
        let r: FileRef = serde_json::from_str("\"scoring.zip\"").unwrap();
        assert_eq!(r, FileRef::Path("scoring.zip".to_string()));
        assert_eq!(r.unresolved_path(), Some("scoring.zip"));
    }

    #[test]
    fn test_manual_review_serializes_to_sentinel() {
        let v = serde_json::to_value(FileRef::ManualReview).unwrap();
        assert_eq!(v, serde_json::Value::String(MANUAL_REVIEW_SENTINEL.to_string()));
        assert_eq!(FileRef::ManualReview.unresolved_path(), None);
    }
}
