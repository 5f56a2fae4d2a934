//! pushmeta - Metadata reconciliation for pushed secrets
//!
//! When a local secret is pushed to a remotely managed copy, the copy's
//! labels and annotations are computed from three inputs: the local
//! object's metadata, an optional `PushSecretMetadata` descriptor, and the
//! remote object's current metadata. This crate implements that policy.
//!
//! # Architecture
//!
//! - [`core`] - Descriptor schema, merge engine, object types, configuration
//! - [`cli`] - Command-line interface (parses args, delegates to core)
//! - [`ui`] - Output formatting
//!
//! # Correctness Invariants
//!
//! 1. A descriptor is accepted only with the exact expected `apiVersion` and `kind`
//! 2. Unknown descriptor fields and unknown policies are errors, never defaults
//! 3. The source merge always runs before the target merge
//! 4. Inputs are never mutated; results are fresh maps
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
//!     "spec": { "labels": { "b": "2" } }
//! }"#;
//!
//! let source = ObjectMeta::new().with_label("a", "1");
//! let target = ObjectMeta::new().with_label("a", "0").with_label("c", "3");
//!
//! let resolution = resolve_metadata(Some(&raw[..]), &source, &target).unwrap();
//! let labels = resolution.target.labels.unwrap();
//! assert_eq!(labels.len(), 3);
//! assert_eq!(labels["a"], "1");
//! ```

pub mod cli;
pub mod core;
pub mod ui;
