//! Layout classification for front page items.
//!
//! The front page mixes six layouts that all describe a headline. Which one
//! an item uses is visible only from its class list, so classification is a
//! pure function of the [`MarkerSet`].

use super::fragment::MarkerSet;
use crate::models::Category;
use std::fmt;

/// One of the six known item layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    MainNews,
    FirstNews,
    LongreadNews,
    LongreadArticles,
    TabloidNews,
    TabloidArticles,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::MainNews,
        Variant::FirstNews,
        Variant::LongreadNews,
        Variant::LongreadArticles,
        Variant::TabloidNews,
        Variant::TabloidArticles,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::MainNews => "main_news",
            Variant::FirstNews => "first_news",
            Variant::LongreadNews => "longread_news",
            Variant::LongreadArticles => "longread_articles",
            Variant::TabloidNews => "tabloid_news",
            Variant::TabloidArticles => "tabloid_articles",
        }
    }

    /// The category every record of this layout carries.
    pub fn category(&self) -> Category {
        match self {
            Variant::LongreadArticles | Variant::TabloidArticles => Category::Articles,
            _ => Category::News,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Assign a layout to an item from its class tokens.
///
/// Rules are checked in priority order and the first match wins. `None` means
/// the item is unclassified and must not be passed to the extractor.
pub fn classify(markers: &MarkerSet) -> Option<Variant> {
    let has = |m: &str| markers.contains(m);

    if has("first-item") {
        Some(Variant::FirstNews)
    } else if has("item") && markers.len() == 1 {
        Some(Variant::MainNews)
    } else if has("item") && has("news") {
        Some(Variant::LongreadNews)
    } else if has("item") && (has("article") || has("extlink")) {
        Some(Variant::LongreadArticles)
    } else if has("b-tabloid__topic") && has("news") {
        Some(Variant::TabloidNews)
    } else if has("b-tabloid__topic") && has("article") {
        Some(Variant::TabloidArticles)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers(tokens: &[&str]) -> MarkerSet {
        tokens.iter().copied().collect()
    }

    #[test]
    fn test_each_layout_is_recognised() {
        let cases: [(&[&str], Variant); 6] = [
            (&["item"], Variant::MainNews),
            (&["first-item"], Variant::FirstNews),
            (&["item", "news", "b-longread__row"], Variant::LongreadNews),
            (&["item", "article", "b-longread__row"], Variant::LongreadArticles),
            (&["b-tabloid__topic", "news"], Variant::TabloidNews),
            (&["b-tabloid__topic", "article"], Variant::TabloidArticles),
        ];

        for (tokens, expected) in cases {
            assert_eq!(classify(&markers(tokens)), Some(expected), "{tokens:?}");
        }
    }

    #[test]
    fn test_extlink_counts_as_article() {
        assert_eq!(
            classify(&markers(&["item", "extlink"])),
            Some(Variant::LongreadArticles)
        );
    }

    #[test]
    fn test_first_item_wins_over_item() {
        assert_eq!(
            classify(&markers(&["item", "first-item"])),
            Some(Variant::FirstNews)
        );
    }

    #[test]
    fn test_order_does_not_matter() {
        assert_eq!(
            classify(&markers(&["news", "item"])),
            classify(&markers(&["item", "news"]))
        );
        assert_eq!(
            classify(&markers(&["article", "b-tabloid__topic"])),
            Some(Variant::TabloidArticles)
        );
    }

    #[test]
    fn test_unknown_layouts_are_unclassified() {
        assert_eq!(classify(&markers(&[])), None);
        assert_eq!(classify(&markers(&["b-tabloid__topic"])), None);
        assert_eq!(classify(&markers(&["item", "promo"])), None);
        assert_eq!(classify(&markers(&["news"])), None);
    }

    #[test]
    fn test_categories() {
        let articles: Vec<_> = Variant::ALL
            .iter()
            .filter(|v| v.category() == Category::Articles)
            .map(Variant::name)
            .collect();
        assert_eq!(articles, vec!["longread_articles", "tabloid_articles"]);
    }
}
