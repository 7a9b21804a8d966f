//! Client-side list filtering.
//!
//! Notices, news headlines, and product cards are all server-rendered lists
//! that the page narrows in place. The filter never touches the DOM: it takes
//! the rendered text and returns which rows stay visible.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::query::ALL_CATEGORY;

/// Visible rows after a title search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub visible: Vec<usize>,
}

impl SearchOutcome {
    #[must_use]
    pub fn count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    /// Result count shown above the list.
    #[must_use]
    pub fn count_label(&self) -> String {
        format!("총 {}건", self.count())
    }

    /// Whether the "no results" row must be shown.
    #[must_use]
    pub fn show_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Case-insensitive substring match of `term` against every title. A blank
/// term keeps every row.
#[must_use]
pub fn filter_titles<'a, I>(titles: I, term: &str) -> SearchOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = term.trim().to_lowercase();
    let visible = titles
        .into_iter()
        .enumerate()
        .filter(|(_, title)| needle.is_empty() || title.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect();
    SearchOutcome { visible }
}

/// Message shown in place of an empty result list.
pub const NO_RESULTS_MESSAGE: &str = "검색 결과가 없습니다.";

// =============================================================================
// Products
// =============================================================================

/// A product card as rendered by the recommendation list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCard {
    pub name: String,
    pub company: String,
}

impl ProductCard {
    #[must_use]
    pub fn new(name: impl Into<String>, company: impl Into<String>) -> Self {
        Self { name: name.into(), company: company.into() }
    }

    /// Product or company name contains `term`, ignoring case. The term is
    /// matched as typed, without trimming.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.company.to_lowercase().contains(&needle)
    }
}

/// Indices of the cards matching `term`.
#[must_use]
pub fn filter_products(cards: &[ProductCard], term: &str) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.matches(term))
        .map(|(i, _)| i)
        .collect()
}

/// Whether a product section tagged `section` shows under filter tab `filter`.
///
/// The `all` tab has its own curated section, so it shows only that one;
/// every other tab shows only its own section.
#[must_use]
pub fn section_visible(filter: &str, section: &str) -> bool {
    if filter == ALL_CATEGORY {
        section == ALL_CATEGORY
    } else {
        section == filter
    }
}
