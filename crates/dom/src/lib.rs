//! Attrstyle DOM - attribute storage
//!
//! Stores element attributes and exposes `style` attributes as an ordered,
//! lazily parsed sequence of `(key, value)` declarations.

mod attribute;
mod error;
mod style_pairs;
mod styles;

pub use attribute::{AttributeValue, Attributes, MergeMode, StoredAttribute, STYLE_ATTRIBUTE};
pub use error::{DomError, DomResult};
pub use style_pairs::{StylePairs, StylePairsIter};
pub use styles::{StyleEntry, Styles};

#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
