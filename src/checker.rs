//! Main module for tag checking
//!
//! The checker is a small pull pipeline, leaves first:
//!
//! 1. [`tokenizer`] finds the next well formed tag in a piece of text and hands
//!    back the text after it (the remnant).
//! 2. [`stream`] drives the tokenizer over the remnants, producing the tags of a
//!    paragraph lazily and in order.
//! 3. [`validator`] consumes the stream with a stack and produces a [`Verdict`].
//!
//! Around that core sit the [`processor`] used by the `tagcheck` binary and the
//! built-in [`samples`].
//!
//! [`Verdict`]: validator::Verdict

pub mod processor;
pub mod samples;
pub mod stream;
pub mod tag;
pub mod tokenizer;
pub mod validator;

pub use stream::{read_tags, TagStream};
pub use tag::{Tag, TagMode};
pub use tokenizer::{parse_tag, TagMatch};
pub use validator::{closing_form, validate, validate_tag, Verdict};
