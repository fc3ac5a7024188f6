//! Tag stream
//!
//! Drives the tokenizer over successive remnants, yielding the tags of a
//! paragraph from left to right. The stream is lazy: the validator stops
//! pulling at the first mismatch and nothing after it is scanned.

use super::tag::Tag;
use super::tokenizer::parse_tag;
use std::iter::FusedIterator;

/// Lazy iterator over the tags of a paragraph
#[derive(Debug, Clone)]
pub struct TagStream<'a> {
    /// Text not yet scanned. `None` once the tokenizer has reported no tag.
    cursor: Option<&'a str>,
}

impl<'a> TagStream<'a> {
    pub fn new(input: &'a str) -> Self {
        TagStream {
            cursor: Some(input),
        }
    }

    /// The text the next call to `next` will scan, if the stream is not done.
    pub fn remaining(&self) -> Option<&'a str> {
        self.cursor
    }
}

impl Iterator for TagStream<'_> {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        // An empty remnant still gets scanned; the tokenizer then reports
        // nothing and the stream ends.
        let input = self.cursor?;
        match parse_tag(input) {
            Some(found) => {
                self.cursor = Some(found.remnant);
                Some(found.tag)
            }
            None => {
                self.cursor = None;
                None
            }
        }
    }
}

impl FusedIterator for TagStream<'_> {}

/// Collects every tag of `input` in order
pub fn read_tags(input: &str) -> Vec<Tag> {
    TagStream::new(input).collect()
}
