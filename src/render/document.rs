//! Tag-ordered markdown document for one output target.
//!
//! Fragments are grouped by their leading tag so every generated file reads
//! file overview first, then types, constants, macros and functions.
//! Untagged fragments follow at the end.

use crate::model::OutputTarget;

/// Section tags, in emission order.
pub const TAG_ORDER: &[&str] = &[
    "@file",
    "@typedef",
    "@struct",
    "@constants",
    "@macro",
    "@function",
];

/// First tag in [`TAG_ORDER`] that the rendered fragment starts with.
pub fn classify(rendered: &[u8]) -> Option<&'static str> {
    TAG_ORDER
        .iter()
        .copied()
        .find(|tag| rendered.starts_with(tag.as_bytes()))
}

/// Render all fragments of a target into one markdown document.
///
/// Fragment bytes are copied through untouched.
pub fn render_document(target: &OutputTarget) -> Vec<u8> {
    let mut output = Vec::new();

    for tag in TAG_ORDER {
        for rendered in target.fragments.values() {
            if classify(rendered) == Some(*tag) {
                push_fragment(&mut output, rendered);
            }
        }
    }

    for rendered in target.fragments.values() {
        if classify(rendered).is_none() {
            push_fragment(&mut output, rendered);
        }
    }

    output
}

fn push_fragment(output: &mut Vec<u8>, rendered: &[u8]) {
    if rendered.starts_with(b"@file") {
        output.extend_from_slice(b"# ");
    } else {
        output.extend_from_slice(b"## ");
    }
    output.extend_from_slice(rendered);
}
