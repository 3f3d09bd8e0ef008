//! Lazy `(key, value)` view over style entries
//!
//! Declarations come out in the order their entries were stored. Raw entries
//! are tokenized on the fly, so a raw entry may expand into any number of
//! pairs, including none.

use std::iter::FusedIterator;

use attrstyle_css::{next_declaration, write_declarations, DeclarationPair};

use crate::styles::StyleEntry;

/// Pair sequence borrowed from a style attribute.
///
/// This is a cheap handle: every call to [`StylePairs::iter`] starts a new
/// pass from the first entry.
#[derive(Debug, Clone, Copy)]
pub struct StylePairs<'a> {
    entries: &'a [StyleEntry],
    plain: &'a str,
}

impl<'a> StylePairs<'a> {
    /// Pairs of structured entries
    pub fn from_entries(entries: &'a [StyleEntry]) -> Self {
        Self { entries, plain: "" }
    }

    /// Pairs parsed out of a single plain CSS string
    pub fn from_plain(text: &'a str) -> Self {
        Self { entries: &[], plain: text }
    }

    /// Start a new pass over the pairs
    pub fn iter(&self) -> StylePairsIter<'a> {
        StylePairsIter {
            entries: self.entries.iter(),
            remaining: self.plain,
        }
    }

    /// Render the pairs as `key:value` joined by `;`
    pub fn to_css_text(&self) -> String {
        let mut out = String::new();
        write_declarations(self.iter(), &mut out);
        out
    }
}

impl<'a> IntoIterator for StylePairs<'a> {
    type Item = DeclarationPair<'a>;
    type IntoIter = StylePairsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &StylePairs<'a> {
    type Item = DeclarationPair<'a>;
    type IntoIter = StylePairsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a [`StylePairs`] sequence
#[derive(Debug, Clone)]
pub struct StylePairsIter<'a> {
    entries: std::slice::Iter<'a, StyleEntry>,
    /// Raw text still being tokenized
    remaining: &'a str,
}

impl<'a> Iterator for StylePairsIter<'a> {
    type Item = DeclarationPair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = next_declaration(&mut self.remaining) {
                return Some(pair);
            }

            match self.entries.next()? {
                StyleEntry::Raw(text) => self.remaining = text.as_str(),
                StyleEntry::Declaration { key, value } => {
                    return Some((key.as_str(), value.as_str()));
                }
            }
        }
    }
}

impl FusedIterator for StylePairsIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::Styles;

    fn collect(pairs: StylePairs<'_>) -> Vec<(&str, &str)> {
        pairs.iter().collect()
    }

    #[test]
    fn test_structured_entries_verbatim() {
        let styles = Styles::from_pairs([("color", "red"), ("font-size", "16px"), ("margin", "")]);
        assert_eq!(
            collect(styles.pairs()),
            vec![("color", "red"), ("font-size", "16px"), ("margin", "")]
        );
    }

    #[test]
    fn test_structured_entries_not_trimmed() {
        let styles = Styles::from_pairs([(" color ", " red ")]);
        assert_eq!(collect(styles.pairs()), vec![(" color ", " red ")]);
    }

    #[test]
    fn test_plain_text() {
        let pairs = StylePairs::from_plain("color:red;font-size:16px");
        assert_eq!(collect(pairs), vec![("color", "red"), ("font-size", "16px")]);
    }

    #[test]
    fn test_plain_only_separators() {
        assert!(collect(StylePairs::from_plain(";;;")).is_empty());
    }

    #[test]
    fn test_interleaved_origins() {
        let mut styles = Styles::from_pairs([("color", "red")]);
        styles.push_plain("display:flex; bogus ;margin : 0");
        styles.push_plain(";;");
        styles.push("padding", "8px");
        styles.push_plain("color:blue");

        assert_eq!(
            collect(styles.pairs()),
            vec![
                ("color", "red"),
                ("display", "flex"),
                ("margin", "0"),
                ("padding", "8px"),
                ("color", "blue"),
            ]
        );
    }

    #[test]
    fn test_reiteration_is_identical() {
        let mut styles = Styles::from_plain("a:1;b:2");
        styles.push("c", "3");
        let pairs = styles.pairs();

        let first: Vec<_> = pairs.iter().collect();
        let second: Vec<_> = pairs.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_next_after_exhaustion() {
        let styles = Styles::from_pairs([("a", "1")]);
        let mut iter = styles.pairs().iter();
        assert_eq!(iter.next(), Some(("a", "1")));
        for _ in 0..3 {
            assert_eq!(iter.next(), None);
        }
    }

    #[test]
    fn test_abandoned_cursor_does_not_affect_new_pass() {
        let styles = Styles::from_plain("a:1;b:2");
        let pairs = styles.pairs();
        let mut partial = pairs.iter();
        partial.next();
        assert_eq!(pairs.iter().next(), Some(("a", "1")));
    }

    #[test]
    fn test_to_css_text() {
        let mut styles = Styles::from_pairs([("color", "red")]);
        styles.push_plain(" margin : 0 ;");
        assert_eq!(styles.pairs().to_css_text(), "color:red;margin:0");
    }
}
