//! core::metadata::merge
//!
//! Two-stage label/annotation merge for pushed secrets.
//!
//! # Pipeline
//!
//! 1. **Source merge**: the descriptor's literal labels/annotations are
//!    combined with the local (source) object's own metadata according to
//!    `sourceMergePolicy`.
//! 2. **Target merge**: the stage 1 output is combined with the remote
//!    (target) object's current metadata according to `targetMergePolicy`.
//!
//! The order is fixed. Stage 2 always consumes stage 1's *output*, never
//! the raw source object.
//!
//! Both stages are pure. Inputs are borrowed and new maps are allocated
//! for every result; writing the result back is the caller's job.
//!
//! # Example
//!
//! ```
//! use pushmeta::core::metadata::merge::{merge_source_metadata, merge_target_metadata};
//! use pushmeta::core::metadata::schema::PushSecretMetadata;
//! use pushmeta::core::types::ObjectMeta;
//!
//! let source = ObjectMeta::new().with_label("a", "1");
//! let target = ObjectMeta::new().with_label("a", "0").with_label("c", "3");
//! let descriptor = PushSecretMetadata::builder().label("b", "2").build();
//!
//! let merged_source = merge_source_metadata(&source, Some(&descriptor));
//! let result = merge_target_metadata(&target, Some(&descriptor), &merged_source);
//!
//! let labels = result.labels.unwrap();
//! assert_eq!(labels.get("a").unwrap(), "1");
//! assert_eq!(labels.get("b").unwrap(), "2");
//! assert_eq!(labels.get("c").unwrap(), "3");
//! ```

use serde::Serialize;

use super::schema::{
    parse_metadata_parameters, MetadataError, PushSecretMetadata, SourceMergePolicy,
    TargetMergePolicy,
};
use crate::core::types::{normalized, MetadataMap, ObjectMeta, ObjectMetadata};

/// Combine the source object's metadata with the descriptor's literals.
///
/// - No descriptor: the source's maps are returned as they are, absent
///   maps included.
/// - `Merge`: source maps (empty if absent) with every descriptor entry
///   laid over them; the descriptor wins on key collisions.
/// - `Replace`: exactly the descriptor's maps. An omitted map stays absent,
///   which clears that metadata downstream.
pub fn merge_source_metadata<S>(source: &S, push_meta: Option<&PushSecretMetadata>) -> ObjectMeta
where
    S: ObjectMetadata + ?Sized,
{
    let Some(push_meta) = push_meta else {
        return ObjectMeta::from_maps(source.labels().cloned(), source.annotations().cloned());
    };
    let spec = &push_meta.spec;

    match spec.source_merge_policy {
        SourceMergePolicy::Merge => ObjectMeta::from_maps(
            Some(overlay(normalized(source.labels()), spec.labels.as_ref())),
            Some(overlay(
                normalized(source.annotations()),
                spec.annotations.as_ref(),
            )),
        ),
        SourceMergePolicy::Replace => {
            ObjectMeta::from_maps(spec.labels.clone(), spec.annotations.clone())
        }
    }
}

/// Combine the source-merged metadata with the target object's current
/// metadata.
///
/// `merged_source` must be the output of [`merge_source_metadata`].
///
/// - `Merge` (also the policy when there is no descriptor): target maps
///   (empty if absent) with every merged-source entry laid over them.
/// - `Replace`: exactly the merged-source maps.
/// - `Ignore`: exactly the target's current maps; `merged_source` is unused.
pub fn merge_target_metadata<T, S>(
    target: &T,
    push_meta: Option<&PushSecretMetadata>,
    merged_source: &S,
) -> ObjectMeta
where
    T: ObjectMetadata + ?Sized,
    S: ObjectMetadata + ?Sized,
{
    let policy = push_meta
        .map(|meta| meta.spec.target_merge_policy)
        .unwrap_or_default();

    let labels = normalized(target.labels());
    let annotations = normalized(target.annotations());

    match policy {
        TargetMergePolicy::Merge => ObjectMeta::from_maps(
            Some(overlay(labels, merged_source.labels())),
            Some(overlay(annotations, merged_source.annotations())),
        ),
        TargetMergePolicy::Replace => ObjectMeta::from_maps(
            merged_source.labels().cloned(),
            merged_source.annotations().cloned(),
        ),
        TargetMergePolicy::Ignore => ObjectMeta::from_maps(Some(labels), Some(annotations)),
    }
}

/// Lay `top` over `base`, `top` winning on collisions.
fn overlay(mut base: MetadataMap, top: Option<&MetadataMap>) -> MetadataMap {
    if let Some(top) = top {
        base.extend(top.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    base
}

/// Outcome of the full parse → source merge → target merge pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataResolution {
    /// The parsed descriptor, `None` when none was supplied.
    #[serde(skip)]
    pub descriptor: Option<PushSecretMetadata>,

    /// Stage 1 output.
    pub source: ObjectMeta,

    /// Stage 2 output: what should be written to the target object.
    pub target: ObjectMeta,
}

/// Run the whole pipeline on a raw descriptor.
///
/// Any error aborts before a merge is computed, so no partial metadata is
/// ever produced.
///
/// # Errors
///
/// Returns whatever [`parse_metadata_parameters`] rejects, including
/// unrecognized merge policies.
pub fn resolve_metadata<S, T>(
    raw: Option<&[u8]>,
    source: &S,
    target: &T,
) -> Result<MetadataResolution, MetadataError>
where
    S: ObjectMetadata + ?Sized,
    T: ObjectMetadata + ?Sized,
{
    let descriptor = parse_metadata_parameters(raw)?;
    let merged_source = merge_source_metadata(source, descriptor.as_ref());
    let merged_target = merge_target_metadata(target, descriptor.as_ref(), &merged_source);

    Ok(MetadataResolution {
        descriptor,
        source: merged_source,
        target: merged_target,
    })
}
