//! Content record storage seam between the host pipeline and feed
//! generation.
//!
//! The host owns content however it likes; the feed pipeline only needs an
//! ordered list of records per content type. `ContentStore` is that seam,
//! `MemoryStore` a ready-made implementation for hosts without their own
//! storage layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON object type used for content fields
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

// ============================================================================
// ContentRecord
// ============================================================================

/// A single content record handed to the feed pipeline
///
/// Combines the record's site-relative path with an open-ended field bag
/// (title, date, content, author, anything the host tracks). Fields are
/// flattened in JSON output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Site-relative path of the rendered page (`/post/hello/`).
    pub path: String,
    /// Content fields, keyed by name (flattened in JSON output).
    #[serde(flatten)]
    pub fields: JsonMap,
}

impl ContentRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fields: JsonMap::new(),
        }
    }

    /// Add a field, builder style.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Get a field by name.
    #[inline]
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }

    /// Get a string field by name. `None` for missing or non-string fields.
    #[inline]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }
}

// ============================================================================
// Collection
// ============================================================================

/// Ordered records for one content type
///
/// Source order is significant: it is the tiebreak for items with equal
/// dates later in the pipeline.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub records: Vec<ContentRecord>,
}

impl Collection {
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self { records }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl From<Vec<ContentRecord>> for Collection {
    fn from(records: Vec<ContentRecord>) -> Self {
        Self::new(records)
    }
}

// ============================================================================
// ContentStore
// ============================================================================

/// Source of content records, implemented by the host build pipeline
pub trait ContentStore {
    /// Records for one content type, in source order.
    ///
    /// Returns `None` for unknown content types; the pipeline skips those
    /// silently.
    fn get_collection(&self, content_type: &str) -> Option<Collection>;
}

/// In-memory content store
///
/// Collections keyed by content type name. Fill it once before the feed
/// run; the pipeline only reads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: BTreeMap<String, Collection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the records for a content type.
    pub fn insert(&mut self, content_type: impl Into<String>, records: Vec<ContentRecord>) {
        self.collections
            .insert(content_type.into(), Collection::new(records));
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

impl ContentStore for MemoryStore {
    fn get_collection(&self, content_type: &str) -> Option<Collection> {
        self.collections.get(content_type).cloned()
    }
}
