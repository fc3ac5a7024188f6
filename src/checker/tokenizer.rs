//! Tokenizer
//!
//! Finds the first well formed tag in a piece of text. The grammar is exactly
//!
//! ```text
//! "<" "/"? [A-Z]+ ">"
//! ```
//!
//! with nothing else allowed between the brackets. Everything before the first
//! match is skipped without comment, including bracketed text that only looks
//! like a tag (`<>`, `<a>`, `<Aa>`, `<1>`, `<\6>`). Everything after the match is
//! returned untouched as the remnant, so the caller can scan it again.
//!
//! The scan is a plain byte walk. All the grammar characters are ASCII, so every
//! index it slices at is a char boundary even when the paragraph is not ASCII.

use super::tag::{Tag, TagMode};
use tracing::trace;

/// A tag found by [`parse_tag`], and the text left after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch<'a> {
    pub tag: Tag,
    /// Everything strictly after the tag's `>`. May be empty.
    pub remnant: &'a str,
}

/// Returns the first tag in `input` and the remnant after it.
///
/// `None` means no tag exists anywhere in `input`; there is then neither a tag
/// nor a remnant.
pub fn parse_tag(input: &str) -> Option<TagMatch<'_>> {
    let bytes = input.as_bytes();
    let mut cursor = 0;

    while let Some(offset) = bytes[cursor..].iter().position(|&b| b == b'<') {
        let open = cursor + offset;
        if let Some((tag, end)) = scan_tag_at(input, open) {
            trace!(%tag, offset = open, "tag found");
            return Some(TagMatch {
                tag,
                remnant: &input[end..],
            });
        }
        // A candidate never holds a second '<', so resume just past this one.
        cursor = open + 1;
    }

    None
}

/// Tries to read a tag starting at the `<` found at `open`.
///
/// Returns the tag and the index just past its `>`.
fn scan_tag_at(input: &str, open: usize) -> Option<(Tag, usize)> {
    let bytes = input.as_bytes();
    let mut pos = open + 1;

    let mode = if bytes.get(pos) == Some(&b'/') {
        pos += 1;
        TagMode::Closing
    } else {
        TagMode::Leading
    };

    let name_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_uppercase) {
        pos += 1;
    }

    if pos == name_start || bytes.get(pos) != Some(&b'>') {
        return None;
    }

    let name = &input[name_start..pos];
    debug_assert!(Tag::is_valid_name(name));
    Some((Tag::new(name, mode), pos + 1))
}
