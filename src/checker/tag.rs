//! Tag values
//!
//! A tag is either leading (`<B>`) or closing (`</B>`). Names are one or more
//! uppercase ASCII letters; the tokenizer is the only place tags come from in
//! practice, so the constructors here do not re-check the name.

use std::fmt;

/// Whether a tag opens or closes a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagMode {
    /// `<NAME>`
    Leading,
    /// `</NAME>`
    Closing,
}

/// A single tag extracted from a paragraph
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub name: String,
    pub mode: TagMode,
}

impl Tag {
    pub fn new(name: impl Into<String>, mode: TagMode) -> Self {
        Tag {
            name: name.into(),
            mode,
        }
    }

    pub fn leading(name: impl Into<String>) -> Self {
        Self::new(name, TagMode::Leading)
    }

    pub fn closing(name: impl Into<String>) -> Self {
        Self::new(name, TagMode::Closing)
    }

    /// The closer that would end this tag's region, e.g. `</B>` for `<B>`.
    ///
    /// Closing tags render the same way, which is what mismatch messages use
    /// for both sides.
    pub fn as_closing(&self) -> String {
        format!("</{}>", self.name)
    }

    /// True when `name` is a valid tag name: one or more of `A`-`Z`.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && name.bytes().all(|b| b.is_ascii_uppercase())
    }
}

/// Renders the tag as it appears in source text.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            TagMode::Leading => write!(f, "<{}>", self.name),
            TagMode::Closing => write!(f, "</{}>", self.name),
        }
    }
}
