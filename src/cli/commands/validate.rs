//! validate command - Check a descriptor and show its normalized form

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::metadata::schema::{
    parse_metadata_parameters, PushSecretMetadata, SourceMergePolicy,
};
use crate::ui::output;

/// Validate a descriptor file.
///
/// Any parse, header, or policy error fails the command with the
/// parser's message.
pub fn validate(ctx: &Context, descriptor: &Path) -> Result<()> {
    let verbosity = ctx.verbosity();
    let raw = fs::read(descriptor)
        .with_context(|| format!("Failed to read descriptor '{}'", descriptor.display()))?;
    output::debug(
        format!("read {} bytes from {}", raw.len(), descriptor.display()),
        verbosity,
    );

    let meta = parse_metadata_parameters(Some(&raw))
        .with_context(|| format!("Invalid descriptor '{}'", descriptor.display()))?
        .unwrap_or_default();

    for warning in replace_warnings(&meta) {
        output::warn(warning, verbosity);
    }

    if ctx.json {
        println!("{}", meta.to_pretty_json()?);
        return Ok(());
    }

    output::print(render(&meta), verbosity);
    Ok(())
}

/// Maps a `Replace` source policy will drop because the descriptor omits them.
pub(crate) fn replace_warnings(meta: &PushSecretMetadata) -> Vec<String> {
    let spec = &meta.spec;
    if spec.source_merge_policy != SourceMergePolicy::Replace {
        return Vec::new();
    }

    [("labels", spec.labels.is_none()), ("annotations", spec.annotations.is_none())]
        .into_iter()
        .filter(|(_, omitted)| *omitted)
        .map(|(field, _)| {
            format!(
                "sourceMergePolicy is Replace but no {} are set; the source object's {} will not be pushed",
                field, field
            )
        })
        .collect()
}

fn render(meta: &PushSecretMetadata) -> String {
    let spec = &meta.spec;
    [
        format!("{} {}", meta.api_version(), meta.kind()),
        format!("sourceMergePolicy: {}", spec.source_merge_policy),
        format!("targetMergePolicy: {}", spec.target_merge_policy),
        output::format_map("labels", spec.labels.as_ref()),
        output::format_map("annotations", spec.annotations.as_ref()),
    ]
    .join("\n")
}
