//! Read-only navigation over a single front page item.
//!
//! The extractor never touches `scraper` types directly. It sees an item
//! through the [`Fragment`] trait, where every lookup that may fail returns an
//! `Option`. The `require*` helpers turn those into [`ExtractionError`]s.

use crate::error::{ExtractionError, Result};
use scraper::ElementRef;
use std::collections::BTreeSet;

/// The set of class tokens attached to an item.
///
/// Ordering and repetition in the `class` attribute carry no meaning, so the
/// tokens are kept in a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet(BTreeSet<String>);

impl MarkerSet {
    pub fn contains(&self, marker: &str) -> bool {
        self.0.contains(marker)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        MarkerSet(iter.into_iter().map(str::to_string).collect())
    }
}

/// Capabilities the extractor needs from a parsed item.
pub trait Fragment: Sized {
    /// Class tokens of the item itself.
    fn markers(&self) -> MarkerSet;

    /// First descendant (in document order, excluding `self`) with the given
    /// tag name and, if supplied, carrying the given class.
    fn find(&self, tag: &str, marker: Option<&str>) -> Option<Self>;

    fn attr(&self, name: &str) -> Option<&str>;

    /// All descendant text, concatenated.
    fn text(&self) -> String;

    fn require(&self, tag: &'static str, marker: Option<&'static str>) -> Result<Self> {
        self.find(tag, marker)
            .ok_or(ExtractionError::MissingElement { tag, marker })
    }

    fn require_attr(&self, tag: &'static str, attr: &'static str) -> Result<&str> {
        self.attr(attr)
            .ok_or(ExtractionError::MissingAttribute { tag, attr })
    }
}

impl<'a> Fragment for ElementRef<'a> {
    fn markers(&self) -> MarkerSet {
        self.value().classes().collect()
    }

    fn find(&self, tag: &str, marker: Option<&str>) -> Option<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| {
                let value = el.value();
                value.name() == tag && marker.is_none_or(|m| value.classes().any(|c| c == m))
            })
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }
}
