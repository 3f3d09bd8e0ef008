//! Inline declaration tokenizer
//!
//! Splits `key:value; key:value` text into borrowed pairs. Only `;` and the
//! first `:` of each segment are structural; everything else is kept verbatim.
//! Malformed segments (no colon, empty key) are skipped without reporting.

use std::iter::FusedIterator;

/// A borrowed `(key, value)` declaration.
pub type DeclarationPair<'a> = (&'a str, &'a str);

/// Whitespace as CSS defines it: space, tab, LF, CR and form feed.
///
/// This is the same set as [`u8::is_ascii_whitespace`].
#[inline]
pub fn is_css_whitespace(byte: u8) -> bool {
    byte.is_ascii_whitespace()
}

/// Trim leading and trailing CSS whitespace, leaving inner whitespace alone.
pub fn trim_css_whitespace(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut end = bytes.len();

    while start < end && is_css_whitespace(bytes[start]) {
        start += 1;
    }
    while end > start && is_css_whitespace(bytes[end - 1]) {
        end -= 1;
    }

    // Both bounds sit next to ASCII bytes, so they are char boundaries.
    &text[start..end]
}

/// Pull the next valid declaration out of `remaining`.
///
/// `remaining` is advanced past every segment looked at, including the
/// terminating `;`, whether or not the segment produced a pair. Returns
/// `None` once the text is used up.
pub fn next_declaration<'a>(remaining: &mut &'a str) -> Option<DeclarationPair<'a>> {
    while !remaining.is_empty() {
        let current: &'a str = *remaining;
        let bytes = current.as_bytes();

        let mut colon = None;
        let mut end = bytes.len();
        for (i, &byte) in bytes.iter().enumerate() {
            match byte {
                b':' if colon.is_none() => colon = Some(i),
                b';' => {
                    end = i;
                    break;
                }
                _ => {}
            }
        }

        *remaining = if end < bytes.len() {
            &current[end + 1..]
        } else {
            ""
        };

        let Some(colon) = colon else {
            continue;
        };

        let key = trim_css_whitespace(&current[..colon]);
        if key.is_empty() {
            continue;
        }
        let value = trim_css_whitespace(&current[colon + 1..end]);

        return Some((key, value));
    }

    None
}

/// Iterator over the declarations of a single plain CSS string.
#[derive(Debug, Clone)]
pub struct Declarations<'a> {
    remaining: &'a str,
}

impl<'a> Declarations<'a> {
    /// Create an iterator over `input`
    pub fn new(input: &'a str) -> Self {
        Self { remaining: input }
    }

    /// Text not yet consumed
    pub fn remainder(&self) -> &'a str {
        self.remaining
    }
}

impl<'a> Iterator for Declarations<'a> {
    type Item = DeclarationPair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        next_declaration(&mut self.remaining)
    }
}

impl FusedIterator for Declarations<'_> {}

/// Parse an inline style string lazily
pub fn parse_declarations(input: &str) -> Declarations<'_> {
    Declarations::new(input)
}
