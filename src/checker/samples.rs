//! Built-in sample paragraphs
//!
//! One paragraph per outcome shape, plus one that mixes valid tags with bracketed
//! text the grammar does not accept. `tagcheck demo` runs these.

pub const SAMPLE_PARAGRAPHS: [&str; 5] = [
    "The following text<C><B>is centred and in boldface</B></C>",
    "<B>This <g>is <B>boldface</B> in <<*> a</B> <\\6> <<d>sentence",
    "<B><C> This should be centred and in boldface, but the tags are wrongly nested </B></C>",
    "<B>This should be in boldface, but there is an extra closing tag</B></C>",
    "<B><C>This should be centred and in boldface, but there is a missing closing tag</C>",
];

/// Outcome message of each entry in [`SAMPLE_PARAGRAPHS`]
pub const EXPECTED_MESSAGES: [&str; 5] = [
    "Correctly tagged paragraph",
    "Correctly tagged paragraph",
    "Expected </C> found </B>",
    "Expected # found </C>",
    "Expected </B> found #",
];
