//! Data model for extracted documentation, independent of any output format.

use std::collections::BTreeMap;

/// Byte range `[start, end)` of one comment, delimiters included.
///
/// `CommentRange::NULL` (`{0, 0}`) means "no further comment".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentRange {
    pub start: usize,
    pub end: usize,
}

impl CommentRange {
    pub const NULL: CommentRange = CommentRange { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_null(&self) -> bool {
        self.start == self.end
    }
}

/// One logical markdown file and everything that feeds it.
#[derive(Debug, Default)]
pub struct OutputTarget {
    /// e.g. "foo.md" for `foo.c` and `foo.h`
    pub name: String,
    /// Every input path that contributed, in processing order
    pub input_file_names: Vec<String>,
    /// raw comment bytes → rendered markdown bytes, ordered by raw bytes
    pub fragments: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl OutputTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn record_input(&mut self, input_path: &str) {
        self.input_file_names.push(input_path.to_string());
    }

    /// Insert a fragment keyed by its raw bytes.
    ///
    /// A byte-identical raw comment overwrites the earlier rendered value;
    /// the previous value is returned in that case.
    pub fn insert_fragment(&mut self, raw: Vec<u8>, rendered: Vec<u8>) -> Option<Vec<u8>> {
        self.fragments.insert(raw, rendered)
    }
}

/// All output targets of a run, iterated in name order.
#[derive(Debug, Default)]
pub struct Registry {
    targets: BTreeMap<String, OutputTarget>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create_target(&mut self, name: &str) -> &mut OutputTarget {
        self.targets
            .entry(name.to_string())
            .or_insert_with(|| OutputTarget::new(name))
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&OutputTarget> {
        self.targets.get(name)
    }

    pub fn targets(&self) -> impl Iterator<Item = &OutputTarget> {
        self.targets.values()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_range_is_null() {
        assert!(CommentRange::NULL.is_null());
        assert!(!CommentRange::new(3, 10).is_null());
    }

    #[test]
    fn get_or_create_reuses_existing_target() {
        let mut registry = Registry::new();
        registry.get_or_create_target("a.md").record_input("a.c");
        registry.get_or_create_target("a.md").record_input("a.h");

        assert_eq!(registry.len(), 1);
        let target = registry.get("a.md").unwrap();
        assert_eq!(target.input_file_names, vec!["a.c", "a.h"]);
    }

    #[test]
    fn record_input_keeps_duplicates() {
        let mut target = OutputTarget::new("a.md");
        target.record_input("a.c");
        target.record_input("a.c");
        assert_eq!(target.input_file_names.len(), 2);
    }

    #[test]
    fn identical_raw_text_collapses() {
        let mut target = OutputTarget::new("a.md");
        assert!(target
            .insert_fragment(b"/** x */".to_vec(), b"first\n".to_vec())
            .is_none());
        let previous = target.insert_fragment(b"/** x */".to_vec(), b"second\n".to_vec());

        assert_eq!(previous.as_deref(), Some(&b"first\n"[..]));
        assert_eq!(target.fragments.len(), 1);
        assert_eq!(target.fragments[&b"/** x */"[..]], b"second\n");
    }

    #[test]
    fn targets_iterate_in_name_order() {
        let mut registry = Registry::new();
        registry.get_or_create_target("zeta.md");
        registry.get_or_create_target("alpha.md");
        registry.get_or_create_target("mid.md");

        let names: Vec<&str> = registry.targets().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["alpha.md", "mid.md", "zeta.md"]);
    }
}
