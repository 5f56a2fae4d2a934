//! core::metadata::schema
//!
//! The `PushSecretMetadata` descriptor and its parser.
//!
//! # Schema Design
//!
//! A descriptor is:
//! - Self-describing with `apiVersion` and `kind`, both fixed constants
//! - Strictly parsed (unknown fields rejected at every level)
//! - Normalized once: merge policies become closed enums, with an unset or
//!   empty policy resolved to `Merge` at construction time
//!
//! Absence of a descriptor is a valid state meaning "default policies" and
//! is represented by `None`, never by a default descriptor.
//!
//! # Wire Format
//!
//! YAML, which makes any JSON document valid input as well. The payload is
//! decoded to a JSON value first and then read against the schema, so a
//! scalar like `3` is a number, not a string, wherever it is written.
//!
//! ```yaml
//! apiVersion: kubernetes.external-secrets.io/v1alpha1
//! kind: PushSecretMetadata
//! spec:
//!   targetMergePolicy: Merge
//!   sourceMergePolicy: Replace
//!   labels:
//!     team: payments
//!   annotations:
//!     owner: alice
//! ```
//!
//! # Example
//!
//! ```
//! use pushmeta::core::metadata::schema::{parse_metadata_parameters, SourceMergePolicy};
//!
//! let raw = br#"{
//!     "apiVersion": "kubernetes.external-secrets.io/v1alpha1",
//!     "kind": "PushSecretMetadata",
//!     "spec": { "sourceMergePolicy": "Replace" }
//! }"#;
//!
//! let meta = parse_metadata_parameters(Some(&raw[..])).unwrap().unwrap();
//! assert_eq!(meta.spec.source_merge_policy, SourceMergePolicy::Replace);
//!
//! assert!(parse_metadata_parameters(None).unwrap().is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::MetadataMap;

/// The only accepted `apiVersion`.
pub const METADATA_API_VERSION: &str = "kubernetes.external-secrets.io/v1alpha1";

/// The only accepted `kind`.
pub const METADATA_KIND: &str = "PushSecretMetadata";

/// An unrecognized merge policy value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("unexpected source merge policy {0:?}")]
    UnexpectedSourcePolicy(String),

    #[error("unexpected target merge policy {0:?}")]
    UnexpectedTargetPolicy(String),
}

/// Errors from descriptor parsing.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Malformed document or a field outside the schema.
    #[error("failed to parse {METADATA_API_VERSION} {METADATA_KIND}: {0}")]
    ParseError(String),

    #[error("failed to serialize {METADATA_API_VERSION} {METADATA_KIND}: {0}")]
    SerializeError(String),

    #[error("unexpected apiVersion {found:?}, expected {METADATA_API_VERSION:?}")]
    UnexpectedApiVersion { found: String },

    #[error("unexpected kind {found:?}, expected {METADATA_KIND:?}")]
    UnexpectedKind { found: String },

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// How the descriptor's literal labels/annotations combine with the
/// source object's own metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SourceMergePolicy {
    /// Overlay descriptor entries onto the source's, descriptor winning.
    #[default]
    Merge,
    /// Use the descriptor's maps verbatim, dropping the source's.
    Replace,
}

impl SourceMergePolicy {
    /// Wire spelling of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceMergePolicy::Merge => "Merge",
            SourceMergePolicy::Replace => "Replace",
        }
    }

    /// Resolve a raw wire value. Unset and `""` both mean `Merge`.
    pub fn from_wire(raw: Option<&str>) -> Result<Self, PolicyError> {
        match raw {
            None | Some("") => Ok(Self::default()),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for SourceMergePolicy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Merge" => Ok(SourceMergePolicy::Merge),
            "Replace" => Ok(SourceMergePolicy::Replace),
            other => Err(PolicyError::UnexpectedSourcePolicy(other.to_string())),
        }
    }
}

impl fmt::Display for SourceMergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the (already source-merged) metadata lands on the target object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TargetMergePolicy {
    /// Overlay onto the target's current maps, source winning.
    #[default]
    Merge,
    /// Replace the target's maps with the source-merged ones.
    Replace,
    /// Leave the target's metadata untouched.
    Ignore,
}

impl TargetMergePolicy {
    /// Wire spelling of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetMergePolicy::Merge => "Merge",
            TargetMergePolicy::Replace => "Replace",
            TargetMergePolicy::Ignore => "Ignore",
        }
    }

    /// Resolve a raw wire value. Unset and `""` both mean `Merge`.
    pub fn from_wire(raw: Option<&str>) -> Result<Self, PolicyError> {
        match raw {
            None | Some("") => Ok(Self::default()),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for TargetMergePolicy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Merge" => Ok(TargetMergePolicy::Merge),
            "Replace" => Ok(TargetMergePolicy::Replace),
            "Ignore" => Ok(TargetMergePolicy::Ignore),
            other => Err(PolicyError::UnexpectedTargetPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for TargetMergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document shape as it appears on the wire, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct MetadataDocument {
    api_version: Option<String>,
    kind: Option<String>,
    spec: Option<SpecDocument>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SpecDocument {
    target_merge_policy: Option<String>,
    source_merge_policy: Option<String>,
    labels: Option<MetadataMap>,
    annotations: Option<MetadataMap>,
}

/// Parse the raw descriptor attached to a push request.
///
/// `None` means no descriptor was supplied and yields `Ok(None)`.
///
/// # Errors
///
/// Checked in this order:
/// - [`MetadataError::ParseError`] if the payload is malformed or carries
///   a field outside the schema
/// - [`MetadataError::UnexpectedApiVersion`] / [`MetadataError::UnexpectedKind`]
///   if the type header does not match (a missing value reads as `""`)
/// - [`MetadataError::Policy`] if either merge policy is unrecognized
pub fn parse_metadata_parameters(
    raw: Option<&[u8]>,
) -> Result<Option<PushSecretMetadata>, MetadataError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let mut value: serde_json::Value =
        serde_yaml::from_slice(raw).map_err(|e| MetadataError::ParseError(e.to_string()))?;

    // A null document reads as one with nothing set.
    if value.is_null() {
        value = serde_json::Value::Object(serde_json::Map::new());
    }

    let document: MetadataDocument =
        serde_json::from_value(value).map_err(|e| MetadataError::ParseError(e.to_string()))?;

    PushSecretMetadata::from_document(document).map(Some)
}

/// A validated `PushSecretMetadata` descriptor.
///
/// Construct with [`parse_metadata_parameters`] or [`PushSecretMetadata::builder`].
/// The type header is fixed, so it is not stored as data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushSecretMetadata {
    pub spec: PushSecretMetadataSpec,
}

/// Merge policies plus literal labels/annotations to inject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushSecretMetadataSpec {
    pub target_merge_policy: TargetMergePolicy,
    pub source_merge_policy: SourceMergePolicy,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<MetadataMap>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<MetadataMap>,
}

/// Borrowed wire view used for serialization.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MetadataDocumentRef<'a> {
    api_version: &'static str,
    kind: &'static str,
    spec: &'a PushSecretMetadataSpec,
}

impl PushSecretMetadata {
    /// Wrap an already-typed spec.
    pub fn new(spec: PushSecretMetadataSpec) -> Self {
        Self { spec }
    }

    /// Start building a descriptor with default policies and no literals.
    pub fn builder() -> PushSecretMetadataBuilder {
        PushSecretMetadataBuilder::default()
    }

    /// Always [`METADATA_API_VERSION`].
    pub fn api_version(&self) -> &'static str {
        METADATA_API_VERSION
    }

    /// Always [`METADATA_KIND`].
    pub fn kind(&self) -> &'static str {
        METADATA_KIND
    }

    fn from_document(document: MetadataDocument) -> Result<Self, MetadataError> {
        let api_version = document.api_version.unwrap_or_default();
        if api_version != METADATA_API_VERSION {
            return Err(MetadataError::UnexpectedApiVersion { found: api_version });
        }

        let kind = document.kind.unwrap_or_default();
        if kind != METADATA_KIND {
            return Err(MetadataError::UnexpectedKind { found: kind });
        }

        let spec = document.spec.unwrap_or_default();
        Ok(Self {
            spec: PushSecretMetadataSpec {
                target_merge_policy: TargetMergePolicy::from_wire(
                    spec.target_merge_policy.as_deref(),
                )?,
                source_merge_policy: SourceMergePolicy::from_wire(
                    spec.source_merge_policy.as_deref(),
                )?,
                labels: spec.labels,
                annotations: spec.annotations,
            },
        })
    }

    /// Serialize to canonical JSON (compact, deterministic).
    ///
    /// Policies are written explicitly, so the output is the normalized
    /// form of whatever was parsed.
    pub fn to_canonical_json(&self) -> Result<String, MetadataError> {
        serde_json::to_string(&self.as_document())
            .map_err(|e| MetadataError::SerializeError(e.to_string()))
    }

    /// Serialize to indented JSON for display.
    pub fn to_pretty_json(&self) -> Result<String, MetadataError> {
        serde_json::to_string_pretty(&self.as_document())
            .map_err(|e| MetadataError::SerializeError(e.to_string()))
    }

    fn as_document(&self) -> MetadataDocumentRef<'_> {
        MetadataDocumentRef {
            api_version: METADATA_API_VERSION,
            kind: METADATA_KIND,
            spec: &self.spec,
        }
    }
}

/// Builder for descriptors constructed in code rather than parsed.
#[derive(Debug, Default)]
pub struct PushSecretMetadataBuilder {
    spec: PushSecretMetadataSpec,
}

impl PushSecretMetadataBuilder {
    /// Set the source merge policy.
    pub fn source_merge_policy(mut self, policy: SourceMergePolicy) -> Self {
        self.spec.source_merge_policy = policy;
        self
    }

    /// Set the target merge policy.
    pub fn target_merge_policy(mut self, policy: TargetMergePolicy) -> Self {
        self.spec.target_merge_policy = policy;
        self
    }

    /// Add a literal label.
    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.spec
            .labels
            .get_or_insert_with(MetadataMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add a literal annotation.
    pub fn annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.spec
            .annotations
            .get_or_insert_with(MetadataMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the literal label map, replacing any labels added so far.
    pub fn labels(mut self, labels: Option<MetadataMap>) -> Self {
        self.spec.labels = labels;
        self
    }

    /// Set the literal annotation map, replacing any annotations added so far.
    pub fn annotations(mut self, annotations: Option<MetadataMap>) -> Self {
        self.spec.annotations = annotations;
        self
    }

    /// Build the descriptor.
    pub fn build(self) -> PushSecretMetadata {
        PushSecretMetadata { spec: self.spec }
    }
}
