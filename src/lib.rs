//! # tag-checker
//!
//! Checks that the uppercase markup tags of a paragraph (`<B>`, `</B>`) are
//! properly nested and closed, reporting the first mismatch when they are not.
//!
//! ```text
//! The following text<C><B>is centred and in boldface</B></C>   => Correctly tagged paragraph
//! <B><C>wrongly nested</B></C>                                 => Expected </C> found </B>
//! ```
//!
//! The entry point most callers want is [`checker::validator::validate_tag`].

pub mod checker;

pub use checker::validator::{validate, validate_tag, Verdict};
