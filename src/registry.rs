//! Grouping of extracted fragments into output targets.
//!
//! A `.c` file and its `.h` companion share a base name, so both feed the
//! same markdown file.

use crate::fragment;
use crate::model::{CommentRange, Registry};
use crate::scanner::{Comments, ScanError, ScanOptions};
use std::path::{Component, Path};

/// Derive the output target name for an input path.
///
/// "foo.c" → "foo.md", "./src/foo.h" → "src/foo.md", "Makefile" → "Makefile.md"
///
/// Only normal path components are kept so the target always lands inside
/// the output directory. The base name ends at the first `.` of the file name,
/// not counting the leading dot of a dotfile.
pub fn resolve_target_name(input_path: &str) -> String {
    let mut components: Vec<String> = Vec::new();
    for component in Path::new(input_path).components() {
        match component {
            Component::Normal(part) => components.push(part.to_string_lossy().to_string()),
            Component::CurDir => {}
            dropped => tracing::debug!(
                "{}: dropping {:?} from the target name",
                input_path,
                dropped.as_os_str()
            ),
        }
    }

    let (file_name, dirs) = match components.split_last() {
        Some((last, dirs)) => (last.as_str(), dirs),
        None => ("", &[][..]),
    };

    let skip = usize::from(file_name.starts_with('.'));
    let stem = match file_name[skip..].find('.') {
        Some(idx) => &file_name[..skip + idx],
        None => {
            tracing::warn!(
                "{} has no '.' in its file name, using the whole name as the base",
                input_path
            );
            file_name
        }
    };

    let mut name = String::new();
    for dir in dirs {
        name.push_str(dir);
        name.push('/');
    }
    name.push_str(stem);
    name.push_str(".md");
    name
}

/// Scan one file's bytes and merge its fragments into the registry.
///
/// The input is recorded against its target before scanning, so a file with
/// no comments still produces an (empty) output target. Returns the number
/// of comments found.
pub fn extract_documentation_comments(
    registry: &mut Registry,
    input_path: &str,
    source: &[u8],
    options: ScanOptions,
) -> Result<usize, ScanError> {
    let target_name = resolve_target_name(input_path);

    // Scan everything first so a malformed file leaves the registry untouched
    let ranges: Vec<CommentRange> = Comments::new(source, options).collect::<Result<_, _>>()?;

    let target = registry.get_or_create_target(&target_name);
    target.record_input(input_path);

    for range in &ranges {
        tracing::debug!("javadoc comment found at [{},{})", range.start, range.end);
        let raw = &source[range.start..range.end];
        let rendered = fragment::render(raw);
        tracing::debug!(
            "-----Fragment (file={})-----\n{}-----(end fragment)-----",
            target.name,
            String::from_utf8_lossy(&rendered)
        );
        if target.insert_fragment(raw.to_vec(), rendered).is_some() {
            tracing::warn!(
                "{}: identical comment at [{},{}) replaces an earlier one in {}",
                input_path,
                range.start,
                range.end,
                target.name
            );
        }
    }

    Ok(ranges.len())
}
