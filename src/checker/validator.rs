//! Validator
//!
//! Runs a stack over the tag stream of one paragraph:
//!
//! - a leading tag is pushed;
//! - a closing tag pops the top of the stack, and unless the popped tag has the
//!   same name the paragraph fails right there;
//! - once the stream runs dry, any tag still on the stack is unclosed.
//!
//! Badly tagged paragraphs are an ordinary outcome, not an error, so the result
//! is a [`Verdict`] rather than a `Result`.

use super::stream::TagStream;
use super::tag::{Tag, TagMode};
use std::fmt;
use tracing::debug;

/// Message for a paragraph whose tags all match
pub const CORRECT_MESSAGE: &str = "Correctly tagged paragraph";

/// Placeholder for a missing side of a mismatch
pub const MISSING_MARKER: &str = "#";

/// Outcome of validating one paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// The first point where the tags diverge. `expected` is absent for an
    /// extra closing tag, `found` is absent when the paragraph ends with tags
    /// still open. Never both absent.
    Mismatch {
        expected: Option<Tag>,
        found: Option<Tag>,
    },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => f.write_str(CORRECT_MESSAGE),
            Verdict::Mismatch { expected, found } => write!(
                f,
                "Expected {} found {}",
                closing_form(expected.as_ref()),
                closing_form(found.as_ref())
            ),
        }
    }
}

/// `</NAME>` for a tag, `#` for none
pub fn closing_form(tag: Option<&Tag>) -> String {
    tag.map_or_else(|| MISSING_MARKER.to_string(), Tag::as_closing)
}

/// Validates the tags of `input`, stopping at the first mismatch
pub fn validate(input: &str) -> Verdict {
    let mut stack: Vec<Tag> = Vec::new();

    for tag in TagStream::new(input) {
        match tag.mode {
            TagMode::Leading => stack.push(tag),
            TagMode::Closing => {
                let previous = stack.pop();
                let matched = previous.as_ref().is_some_and(|open| open.name == tag.name);
                if !matched {
                    let verdict = Verdict::Mismatch {
                        expected: previous,
                        found: Some(tag),
                    };
                    debug!(%verdict, "closing tag mismatch");
                    return verdict;
                }
            }
        }
    }

    let verdict = match stack.pop() {
        Some(unclosed) => Verdict::Mismatch {
            expected: Some(unclosed),
            found: None,
        },
        None => Verdict::Correct,
    };
    debug!(%verdict, "paragraph validated");
    verdict
}

/// Validates the tags of `input` and returns the outcome message.
///
/// One of `Correctly tagged paragraph`, `Expected </X> found </Y>`,
/// `Expected # found </Y>` or `Expected </X> found #`.
pub fn validate_tag(input: &str) -> String {
    validate(input).to_string()
}
