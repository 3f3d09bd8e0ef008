//! Stored element attributes
//!
//! Attributes are kept in insertion order. Setting an attribute that already
//! exists merges the new value into the old one instead of adding a second
//! entry.

use smallvec::SmallVec;

use crate::error::{DomError, DomResult};
use crate::style_pairs::StylePairs;
use crate::styles::Styles;

/// Name of the attribute whose plain text is read as inline CSS
pub const STYLE_ATTRIBUTE: &str = "style";

/// How a plain value is combined with one already set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MergeMode {
    /// The incoming value wins
    #[default]
    ReplaceValue,
    /// Both values are kept, joined by the separator
    AppendValue(String),
    /// The existing value wins if there is one
    IgnoreIfSet,
}

/// Value held by an attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AttributeValue {
    /// Attribute present without a value (e.g. `disabled`)
    #[default]
    None,
    /// Text value as written
    Plain(String),
    /// Structured style entries
    Styles(Styles),
}

/// A single attribute with its merge behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAttribute {
    name: String,
    value: AttributeValue,
    merge_mode: MergeMode,
}

impl StoredAttribute {
    /// Create an attribute with a text value
    pub fn new(name: impl Into<String>, value: impl Into<String>, merge_mode: MergeMode) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Plain(value.into()),
            merge_mode,
        }
    }

    /// Create an attribute that has no value
    pub fn empty(name: impl Into<String>, merge_mode: MergeMode) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::None,
            merge_mode,
        }
    }

    /// Create a `style` attribute from structured entries
    pub fn styles(styles: Styles) -> Self {
        Self {
            name: STYLE_ATTRIBUTE.to_string(),
            value: AttributeValue::Styles(styles),
            merge_mode: MergeMode::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    pub fn merge_mode(&self) -> &MergeMode {
        &self.merge_mode
    }

    /// Get the text value, if this attribute holds one
    pub fn plain_value(&self) -> Option<&str> {
        match &self.value {
            AttributeValue::Plain(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Style pairs of this attribute.
    ///
    /// Returns `None` when the attribute carries no style data: a plain value
    /// under any name other than `style`, or no value at all. A style list with
    /// zero entries still returns an (empty) sequence.
    pub fn style_pairs(&self) -> Option<StylePairs<'_>> {
        match &self.value {
            AttributeValue::Styles(styles) => Some(styles.pairs()),
            AttributeValue::Plain(text) if self.name == STYLE_ATTRIBUTE => {
                Some(StylePairs::from_plain(text))
            }
            _ => None,
        }
    }

    /// Merge `other` into this attribute.
    ///
    /// Style data always accumulates: if either side holds structured styles
    /// the result does too, with plain text kept as a raw entry in order.
    /// Two plain values are combined according to `other`'s merge mode.
    pub fn merge_with(&mut self, other: StoredAttribute) -> DomResult<()> {
        if self.name != other.name {
            return Err(DomError::NameMismatch {
                existing: self.name.clone(),
                incoming: other.name,
            });
        }
        self.merge_value(other.value, &other.merge_mode);
        Ok(())
    }

    /// Names are already known to match
    fn merge_value(&mut self, incoming: AttributeValue, mode: &MergeMode) {
        let existing = std::mem::take(&mut self.value);

        self.value = match (existing, incoming) {
            (existing, AttributeValue::None) => existing,
            (AttributeValue::None, incoming) => incoming,
            (AttributeValue::Styles(mut styles), AttributeValue::Styles(more)) => {
                log::trace!("appending {} style entries to '{}'", more.len(), self.name);
                styles.extend_from(more);
                AttributeValue::Styles(styles)
            }
            (AttributeValue::Styles(mut styles), AttributeValue::Plain(text)) => {
                log::trace!("appending plain text to structured '{}'", self.name);
                styles.push_plain(text);
                AttributeValue::Styles(styles)
            }
            (AttributeValue::Plain(text), AttributeValue::Styles(more)) => {
                log::trace!("converting plain '{}' to structured styles", self.name);
                let mut styles = Styles::from_plain(text);
                styles.extend_from(more);
                AttributeValue::Styles(styles)
            }
            (AttributeValue::Plain(mut text), AttributeValue::Plain(more)) => match mode {
                MergeMode::ReplaceValue => AttributeValue::Plain(more),
                MergeMode::AppendValue(separator) => {
                    text.push_str(separator);
                    text.push_str(&more);
                    AttributeValue::Plain(text)
                }
                MergeMode::IgnoreIfSet => {
                    log::debug!("'{}' already set, ignoring new value", self.name);
                    AttributeValue::Plain(text)
                }
            },
        };
    }
}

/// Ordered attribute list of one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    list: SmallVec<[StoredAttribute; 4]>,
}

impl Attributes {
    /// Create an empty attribute list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, merging it into an existing one of the same name
    pub fn insert(&mut self, attribute: StoredAttribute) {
        match self.list.iter_mut().find(|a| a.name == attribute.name) {
            Some(existing) => existing.merge_value(attribute.value, &attribute.merge_mode),
            None => self.list.push(attribute),
        }
    }

    /// Get an attribute by exact name
    pub fn get(&self, name: &str) -> Option<&StoredAttribute> {
        self.list.iter().find(|a| a.name == name)
    }

    /// Remove an attribute by exact name
    pub fn remove(&mut self, name: &str) -> Option<StoredAttribute> {
        let index = self.list.iter().position(|a| a.name == name)?;
        Some(self.list.remove(index))
    }

    /// Style pairs of the `style` attribute, if present
    pub fn style_pairs(&self) -> Option<StylePairs<'_>> {
        self.get(STYLE_ATTRIBUTE)?.style_pairs()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StoredAttribute> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a StoredAttribute;
    type IntoIter = std::slice::Iter<'a, StoredAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl FromIterator<StoredAttribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = StoredAttribute>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for attribute in iter {
            attributes.insert(attribute);
        }
        attributes
    }
}
