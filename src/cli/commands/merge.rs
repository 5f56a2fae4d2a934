//! merge command - Compute the metadata to write to the target object

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};

use super::validate::replace_warnings;
use crate::cli::Context;
use crate::core::metadata::{resolve_metadata, MetadataResolution};
use crate::core::types::{ObjectMeta, SecretObject};
use crate::ui::output;

/// Run the source and target merge stages over files on disk.
///
/// `show_stages` ORs with the `merge.show_stages` config default.
pub fn merge(
    ctx: &Context,
    source: &Path,
    target: &Path,
    metadata: Option<&Path>,
    show_stages: bool,
) -> Result<()> {
    let verbosity = ctx.verbosity();
    let show_stages = show_stages || ctx.config.show_stages();

    let source_obj = read_object(source)?;
    let target_obj = read_object(target)?;

    let raw = metadata
        .map(|path| {
            fs::read(path)
                .with_context(|| format!("Failed to read descriptor '{}'", path.display()))
        })
        .transpose()?;

    if raw.is_none() {
        output::debug("no descriptor given, using default policies", verbosity);
    }

    let resolution = resolve_metadata(raw.as_deref(), &source_obj, &target_obj)
        .context("Failed to resolve metadata")?;

    if let Some(descriptor) = &resolution.descriptor {
        for warning in replace_warnings(descriptor) {
            output::warn(warning, verbosity);
        }
        output::debug(
            format!(
                "sourceMergePolicy={} targetMergePolicy={}",
                descriptor.spec.source_merge_policy, descriptor.spec.target_merge_policy
            ),
            verbosity,
        );
    }

    if ctx.json {
        let json = if show_stages {
            serde_json::to_string_pretty(&resolution)?
        } else {
            serde_json::to_string_pretty(&resolution.target)?
        };
        println!("{}", json);
        return Ok(());
    }

    output::print(render(&resolution, show_stages), verbosity);
    Ok(())
}

fn read_object(path: &Path) -> Result<SecretObject> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read object '{}'", path.display()))?;
    SecretObject::from_json(&contents)
        .with_context(|| format!("Failed to parse object '{}'", path.display()))
}

fn render_meta(meta: &ObjectMeta) -> String {
    format!(
        "{}\n{}",
        output::format_map("labels", meta.labels.as_ref()),
        output::format_map("annotations", meta.annotations.as_ref())
    )
}

fn render(resolution: &MetadataResolution, show_stages: bool) -> String {
    if !show_stages {
        return render_meta(&resolution.target);
    }
    format!(
        "# source\n{}\n\n# target\n{}",
        render_meta(&resolution.source),
        render_meta(&resolution.target)
    )
}
