//! Documentation comment scanner.
//!
//! Finds `/** ... */` ranges (and optionally `/*! ... */`) in a raw byte
//! buffer. Scanning is resumable: each call starts at the end of the
//! previously returned range, so consumed bytes are never looked at twice.

use crate::model::CommentRange;
use thiserror::Error;

/// Which openers count as the start of a documentation comment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Also accept `/*!` (Qt / doxygen style)
    pub accept_bang: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unterminated documentation comment starting at byte {start}")]
    Unterminated { start: usize },
}

/// Return the next documentation comment at or after `after.end`.
///
/// Returns [`CommentRange::NULL`] once no opener remains in the buffer.
/// An opener without a matching `*/` is an error rather than a partial range.
pub fn next_comment(
    buffer: &[u8],
    after: CommentRange,
    options: ScanOptions,
) -> Result<CommentRange, ScanError> {
    let mut position = after.end;
    while position + 2 < buffer.len() {
        if !is_opener(&buffer[position..], options) {
            position += 1;
            continue;
        }
        // `/**/` is an empty ordinary comment
        if buffer.get(position + 3) == Some(&b'/') {
            position += 4;
            continue;
        }

        let start = position;
        let mut cursor = start + 3;
        while cursor + 1 < buffer.len() {
            if buffer[cursor] == b'*' && buffer[cursor + 1] == b'/' {
                return Ok(CommentRange::new(start, cursor + 2));
            }
            cursor += 1;
        }
        return Err(ScanError::Unterminated { start });
    }
    Ok(CommentRange::NULL)
}

fn is_opener(bytes: &[u8], options: ScanOptions) -> bool {
    match bytes {
        [b'/', b'*', b'*', ..] => true,
        [b'/', b'*', b'!', ..] => options.accept_bang,
        _ => false,
    }
}

/// Iterator over every documentation comment in a buffer.
///
/// Yields at most one error, after which it is exhausted.
pub struct Comments<'a> {
    buffer: &'a [u8],
    last: CommentRange,
    options: ScanOptions,
    done: bool,
}

impl<'a> Comments<'a> {
    pub fn new(buffer: &'a [u8], options: ScanOptions) -> Self {
        Self {
            buffer,
            last: CommentRange::NULL,
            options,
            done: false,
        }
    }
}

impl Iterator for Comments<'_> {
    type Item = Result<CommentRange, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match next_comment(self.buffer, self.last, self.options) {
            Ok(range) if range.is_null() => {
                self.done = true;
                None
            }
            Ok(range) => {
                self.last = range;
                Some(Ok(range))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
