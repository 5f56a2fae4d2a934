//! core::types
//!
//! Object metadata types shared by the parser and the merge engine.
//!
//! # Types
//!
//! - [`MetadataMap`] - Flat string-to-string map used for labels and annotations
//! - [`ObjectMeta`] - The labels/annotations pair of an object
//! - [`SecretObject`] - A Kubernetes-shaped object; only `metadata` is read
//! - [`ObjectMetadata`] - Accessor trait for anything carrying labels/annotations
//!
//! # Absent vs Empty
//!
//! An object without labels (`None`) and an object with an empty label map
//! are distinct values here, because a `Replace` policy can hand an absent
//! map through to the caller. Before merging, callers normalize with
//! [`normalized`], which is the only place absence collapses into emptiness.
//!
//! # Example
//!
//! ```
//! use pushmeta::core::types::{normalized, MetadataMap, ObjectMeta, ObjectMetadata};
//!
//! let meta = ObjectMeta::new().with_label("app", "web");
//! assert_eq!(meta.labels().map(|l| l.len()), Some(1));
//! assert!(meta.annotations().is_none());
//! assert_eq!(normalized(meta.annotations()), MetadataMap::new());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Labels or annotations: keys are unique, ordering is irrelevant.
///
/// A `BTreeMap` keeps output deterministic.
pub type MetadataMap = BTreeMap<String, String>;

/// Copy an optional map into an owned, never-absent one.
pub fn normalized(map: Option<&MetadataMap>) -> MetadataMap {
    map.cloned().unwrap_or_default()
}

/// Read access to an object's labels and annotations.
///
/// The merge engine never mutates the object behind this trait; it only
/// computes new maps for the caller to write back.
pub trait ObjectMetadata {
    /// Current labels, `None` if the object has none.
    fn labels(&self) -> Option<&MetadataMap>;

    /// Current annotations, `None` if the object has none.
    fn annotations(&self) -> Option<&MetadataMap>;
}

/// The labels/annotations pair of an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<MetadataMap>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<MetadataMap>,
}

impl ObjectMeta {
    /// Create metadata with neither labels nor annotations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create metadata from explicit maps.
    pub fn from_maps(labels: Option<MetadataMap>, annotations: Option<MetadataMap>) -> Self {
        Self {
            labels,
            annotations,
        }
    }

    /// Add a label, creating the label map if needed.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels
            .get_or_insert_with(MetadataMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add an annotation, creating the annotation map if needed.
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations
            .get_or_insert_with(MetadataMap::new)
            .insert(key.into(), value.into());
        self
    }
}

impl ObjectMetadata for ObjectMeta {
    fn labels(&self) -> Option<&MetadataMap> {
        self.labels.as_ref()
    }

    fn annotations(&self) -> Option<&MetadataMap> {
        self.annotations.as_ref()
    }
}

/// A Kubernetes-shaped object such as a `Secret`.
///
/// Only the `metadata` block is modelled. Every other field of the
/// document (`data`, `type`, `metadata.name`, ...) is ignored on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretObject {
    pub metadata: ObjectMeta,
}

impl SecretObject {
    /// Wrap existing metadata.
    pub fn new(metadata: ObjectMeta) -> Self {
        Self { metadata }
    }

    /// Parse an object from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ObjectMetadata for SecretObject {
    fn labels(&self) -> Option<&MetadataMap> {
        self.metadata.labels()
    }

    fn annotations(&self) -> Option<&MetadataMap> {
        self.metadata.annotations()
    }
}
