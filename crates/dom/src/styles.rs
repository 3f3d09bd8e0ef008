//! Structured style storage
//!
//! A `style` attribute built up programmatically keeps its declarations as an
//! ordered list of entries. Plain CSS text merged into that list is kept as a
//! raw entry and only tokenized when the pairs are read.

use smallvec::SmallVec;

use crate::style_pairs::StylePairs;

/// One stored style record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleEntry {
    /// An already split `key: value` declaration, emitted verbatim
    Declaration { key: String, value: String },
    /// Unparsed declaration text such as `"color: red; margin: 0"`
    Raw(String),
}

impl StyleEntry {
    /// Create a declaration entry.
    ///
    /// A declaration without a key cannot be emitted, so an empty `key` turns
    /// `value` into raw declaration text instead.
    pub fn declaration(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if key.is_empty() {
            log::trace!("style entry without key stored as raw text: {:?}", value);
            Self::Raw(value)
        } else {
            Self::Declaration { key, value }
        }
    }

    /// Create a raw text entry
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// Check if this entry holds unparsed text
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

/// Ordered style entries of one attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Styles {
    entries: SmallVec<[StyleEntry; 4]>,
}

impl Styles {
    /// Create an empty style list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a style list holding one plain CSS string
    pub fn from_plain(text: impl Into<String>) -> Self {
        let mut styles = Self::new();
        styles.push_plain(text);
        styles
    }

    /// Create a style list with one entry per pair, in iteration order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Append a declaration
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(StyleEntry::declaration(key, value));
    }

    /// Append plain CSS declaration text
    pub fn push_plain(&mut self, text: impl Into<String>) {
        self.entries.push(StyleEntry::raw(text));
    }

    /// Append a prepared entry
    pub fn push_entry(&mut self, entry: StyleEntry) {
        self.entries.push(entry);
    }

    /// Append every entry of `other` after the existing ones.
    ///
    /// Keys are not deduplicated; a repeated key shows up once per origin.
    pub fn extend_from(&mut self, other: Styles) {
        self.entries.extend(other.entries);
    }

    /// Stored entries in insertion order
    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    /// Number of stored entries (not declarations)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lazily flattened `(key, value)` pairs of all entries
    pub fn pairs(&self) -> StylePairs<'_> {
        StylePairs::from_entries(&self.entries)
    }
}

impl<K, V> FromIterator<(K, V)> for Styles
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| StyleEntry::declaration(key, value))
                .collect(),
        }
    }
}

impl Extend<StyleEntry> for Styles {
    fn extend<I: IntoIterator<Item = StyleEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_keeps_order() {
        let styles = Styles::from_pairs([("color", "red"), ("margin", "0")]);
        assert_eq!(
            styles.entries(),
            &[
                StyleEntry::declaration("color", "red"),
                StyleEntry::declaration("margin", "0"),
            ]
        );
    }

    #[test]
    fn test_empty_key_becomes_raw() {
        let entry = StyleEntry::declaration("", "color:red");
        assert_eq!(entry, StyleEntry::Raw("color:red".to_string()));
        assert!(entry.is_raw());
    }

    #[test]
    fn test_from_plain() {
        let styles = Styles::from_plain("color:red;margin:0");
        assert_eq!(styles.len(), 1);
        assert!(styles.entries()[0].is_raw());
    }

    #[test]
    fn test_extend_from_appends() {
        let mut styles = Styles::from_pairs([("color", "red")]);
        styles.extend_from(Styles::from_pairs([("color", "blue")]));
        styles.push_plain("display:flex");
        assert_eq!(styles.len(), 3);
        assert_eq!(
            styles.entries()[1],
            StyleEntry::declaration("color", "blue")
        );
    }

    #[test]
    fn test_empty_styles() {
        let styles = Styles::new();
        assert!(styles.is_empty());
        assert_eq!(styles.pairs().iter().count(), 0);
    }
}
