//! Markdown emitters for output targets and the index.

pub mod document;
pub mod index;
