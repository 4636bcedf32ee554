//! Writing generated markdown to the output directory.

use crate::model::Registry;
use crate::render::{document, index};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const INDEX_FILE_NAME: &str = "README.md";

/// Render every target plus the index, keyed by the path they go to.
pub fn render_all(registry: &Registry, output_dir: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut files: Vec<(PathBuf, Vec<u8>)> = registry
        .targets()
        .map(|target| {
            (
                output_dir.join(&target.name),
                document::render_document(target),
            )
        })
        .collect();
    files.push((
        output_dir.join(INDEX_FILE_NAME),
        index::render_index(registry).into_bytes(),
    ));
    files
}

/// Fail if a target would be overwritten by the index file.
///
/// Compared case-insensitively since `readme.md` and `README.md` are the
/// same file on some filesystems.
pub fn check_index_collision(registry: &Registry) -> Result<()> {
    if let Some(target) = registry
        .targets()
        .find(|t| t.name.eq_ignore_ascii_case(INDEX_FILE_NAME))
    {
        bail!(
            "output target {} (from {}) collides with the index file {}",
            target.name,
            target.input_file_names.join(", "),
            INDEX_FILE_NAME
        );
    }
    Ok(())
}

/// Create the output directory (not its parents) if it does not exist yet.
pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    if output_dir.is_dir() {
        return Ok(());
    }
    tracing::info!("Creating output directory {}", output_dir.display());

    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(output_dir).with_context(|| {
        format!(
            "failed to create output directory: {}",
            output_dir.display()
        )
    })
}

/// Write all markdown files for the registry. Returns the number written.
pub fn write_markdown_files(registry: &Registry, output_dir: &Path) -> Result<usize> {
    check_index_collision(registry)?;
    ensure_output_dir(output_dir)?;

    for target in registry.targets() {
        tracing::debug!(
            "{} <- {} ({} fragments)",
            target.name,
            target.input_file_names.join(", "),
            target.fragments.len()
        );
    }

    let files = render_all(registry, output_dir);
    for (path, contents) in &files {
        // Targets mirror the source tree, e.g. "src/foo.md"
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
    }
    Ok(files.len())
}
