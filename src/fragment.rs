//! Comment → markdown conversion.
//!
//! Comment bodies are assumed to already be markdown, so rendering only
//! removes the C comment decoration. Nothing is escaped or re-encoded: the
//! bytes of the source come out unchanged, whatever their encoding.

const OPENER_LEN: usize = 3;
const CLOSER_LEN: usize = 2;

/// Render one raw comment (delimiters included) as a markdown fragment.
///
/// - drops the `/**` opener (and one space right after it) and the `*/` closer
/// - strips a leading ` * ` or ` *` from each line
/// - drops empty lines, appends `\n` to every remaining line
pub fn render(raw_comment: &[u8]) -> Vec<u8> {
    let body = raw_comment
        .get(OPENER_LEN..raw_comment.len().saturating_sub(CLOSER_LEN))
        .unwrap_or_default();
    let body = body.strip_prefix(b" ").unwrap_or(body);

    let mut output = Vec::with_capacity(body.len() + 1);
    for line in body.split(|b| *b == b'\n').filter(|l| !is_blank(l)) {
        output.extend_from_slice(strip_decoration(line));
        output.push(b'\n');
    }
    output
}

/// Empty, or only the `\r` left over from a CRLF line ending.
fn is_blank(line: &[u8]) -> bool {
    line.is_empty() || line == b"\r"
}

/// Remove a single leading ` * ` (preferred) or ` *`.
fn strip_decoration(line: &[u8]) -> &[u8] {
    line.strip_prefix(b" * ")
        .or_else(|| line.strip_prefix(b" *"))
        .unwrap_or(line)
}
