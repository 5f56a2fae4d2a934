//! core::metadata
//!
//! Push-time metadata descriptor and merge policies.
//!
//! # Modules
//!
//! - [`schema`] - `PushSecretMetadata` descriptor types and strict parsing
//! - [`merge`] - Source and target merge stages
//!
//! # Flow
//!
//! Raw descriptor bytes (or none) are parsed into a validated descriptor,
//! then the source stage and the target stage run in that order. A failure
//! at any point aborts the whole operation.
//!
//! # Example
//!
//! ```
//! use pushmeta::core::metadata::resolve_metadata;
//! use pushmeta::core::types::ObjectMeta;
//!
//! let raw = br#"{
//!     "apiVersion": "kubernetes.external-secrets.io/v1alpha1",
//!     "kind": "PushSecretMetadata",
//!     "spec": { "targetMergePolicy": "Ignore", "labels": { "b": "2" } }
//! }"#;
//!
//! let source = ObjectMeta::new().with_label("a", "1");
//! let target = ObjectMeta::new().with_label("c", "3");
//!
//! let resolution = resolve_metadata(Some(&raw[..]), &source, &target).unwrap();
//! assert_eq!(resolution.target.labels, target.labels);
//! ```

pub mod merge;
pub mod schema;

// Re-export commonly used types
pub use merge::{merge_source_metadata, merge_target_metadata, resolve_metadata, MetadataResolution};
pub use schema::{
    parse_metadata_parameters, MetadataError, PolicyError, PushSecretMetadata,
    PushSecretMetadataBuilder, PushSecretMetadataSpec, SourceMergePolicy, TargetMergePolicy,
    METADATA_API_VERSION, METADATA_KIND,
};
