//! URL query parameters and the list filter state kept in them.
//!
//! The news list keeps its category tab and search term in the query string
//! so the server can render the filtered page. Every filter change drops the
//! `page` parameter: a new filter always starts from the first page.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use url::form_urlencoded;

pub const CATEGORY_KEY: &str = "category";
pub const SEARCH_KEY: &str = "search";
pub const PAGE_KEY: &str = "page";
/// Category value meaning "no category filter".
pub const ALL_CATEGORY: &str = "all";

/// Ordered query parameters. Unknown keys survive a round trip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse `?a=1&b=2` or `a=1&b=2`.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let raw = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(raw.as_bytes()).into_owned().collect();
        Self { pairs }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Replace the first `key` in place (dropping duplicates), or append it.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut seen = false;
        self.pairs.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            value.clone_into(v);
            true
        });
        if !seen {
            self.pairs.push((key.to_owned(), value.to_owned()));
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Remove `key` and report whether it was present with `expected`.
    pub fn take_flag(&mut self, key: &str, expected: &str) -> bool {
        let hit = self.get(key) == Some(expected);
        self.remove(key);
        hit
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize without a leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new()).extend_pairs(&self.pairs).finish()
    }

    /// `path` plus `?query` when any parameters remain.
    #[must_use]
    pub fn to_href(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{}", self.to_query_string())
        }
    }

    /// Selected category tab; `all` when unset.
    #[must_use]
    pub fn active_category(&self) -> &str {
        self.get(CATEGORY_KEY).unwrap_or(ALL_CATEGORY)
    }

    #[must_use]
    pub fn search(&self) -> &str {
        self.get(SEARCH_KEY).unwrap_or("")
    }

    /// Query after clicking a category tab. The search term is kept.
    #[must_use]
    pub fn with_category(&self, category: &str) -> Self {
        let mut next = self.clone();
        if category == ALL_CATEGORY {
            next.remove(CATEGORY_KEY);
        } else {
            next.set(CATEGORY_KEY, category);
        }
        next.remove(PAGE_KEY);
        next
    }

    /// Query after submitting a search. A non-`all` category is kept.
    #[must_use]
    pub fn with_search(&self, term: &str) -> Self {
        let mut next = self.clone();
        let term = term.trim();
        if term.is_empty() {
            next.remove(SEARCH_KEY);
        } else {
            next.set(SEARCH_KEY, term);
        }
        if next.get(CATEGORY_KEY) == Some(ALL_CATEGORY) {
            next.remove(CATEGORY_KEY);
        }
        next.remove(PAGE_KEY);
        next
    }
}
