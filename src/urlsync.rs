//! URL synchronizer: two-way sync between filter state and the browser's
//! query string, behind an injected environment trait so the engine stays
//! testable without a DOM.
//!
//! Reads happen on mount/navigation only; writes happen only on explicit
//! search submit or clear/reset actions, never per keystroke, to avoid
//! history thrashing.

use crate::state::FilterState;
use crate::state::types::CategoryToken;
use crate::util::{percent_decode, percent_encode};

/// Query parameter carrying the committed search string.
pub const PARAM_SEARCH: &str = "search";
/// Query parameter carrying a category slug.
pub const PARAM_CATEGORY: &str = "category";
/// Query parameter carrying a main-category group.
pub const PARAM_MAIN_CATEGORY: &str = "main-category";

/// Environment abstraction over the browser location's query parameters.
///
/// A real embedding backs this with `window.location`/history; tests and the
/// CLI use [`MemoryUrl`].
pub trait UrlStore {
    /// Current query parameters as decoded key/value pairs.
    fn read(&self) -> Vec<(String, String)>;
    /// Replace the query parameters wholesale with decoded pairs.
    fn write(&mut self, params: &[(String, String)]);
}

/// In-memory [`UrlStore`] for tests and the demo binary.
#[derive(Clone, Debug, Default)]
pub struct MemoryUrl {
    /// Decoded key/value pairs in order.
    params: Vec<(String, String)>,
}

impl MemoryUrl {
    /// Empty location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Location initialized from an encoded query string (leading `?` optional).
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        Self { params: parse_query(query) }
    }

    /// Encoded query string for the current parameters.
    #[must_use]
    pub fn query(&self) -> String {
        encode_query(&self.params)
    }

    /// First value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

impl UrlStore for MemoryUrl {
    fn read(&self) -> Vec<(String, String)> {
        self.params.clone()
    }

    fn write(&mut self, params: &[(String, String)]) {
        self.params = params.to_vec();
    }
}

/// What: Decode an encoded query string into key/value pairs.
///
/// Inputs:
/// - `query`: Encoded string, with or without a leading `?`.
///
/// Output:
/// - Decoded pairs in order; empty keys are skipped, a missing `=` yields
///   an empty value.
#[must_use]
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            let (k, v) = part.split_once('=').unwrap_or((part, ""));
            let key = percent_decode(k);
            if key.is_empty() { None } else { Some((key, percent_decode(v))) }
        })
        .collect()
}

/// Encode key/value pairs into a query string (no leading `?`).
#[must_use]
pub fn encode_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// What: Initialize filter state from the URL on mount/navigation.
///
/// Inputs:
/// - `url`: Location environment to read from.
/// - `filters`: Filter state to update in place.
///
/// Output:
/// - Re-initializes the URL-visible state from the parameters: the committed
///   search (cleared when absent) and exactly one category token, with
///   `main-category` winning over `category` when both are present
///   (first-match precedence, the other is ignored). A search parameter
///   combines with the winning token, narrowing it.
pub fn apply_on_mount(url: &dyn UrlStore, filters: &mut FilterState) {
    let params = url.read();
    let first = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    filters.search = first(PARAM_SEARCH).unwrap_or_default();
    filters.categories.clear();
    if let Some(group) = first(PARAM_MAIN_CATEGORY) {
        filters.categories.push(CategoryToken::MainGroup(group));
    } else if let Some(slug) = first(PARAM_CATEGORY) {
        filters.categories.push(CategoryToken::Slug(slug));
    }
}

/// What: Write the URL-visible part of the filter state back to the location.
///
/// Inputs:
/// - `url`: Location environment to write to.
/// - `filters`: Current filter state.
///
/// Output:
/// - Rewrites the parameter set from state: `search` when committed, then
///   the first `MainGroup` token as `main-category`, else the first `Slug`
///   token as `category`. Id tokens are UI-local and never serialized.
///   Callers invoke this only on explicit submit/clear actions.
pub fn sync_url(url: &mut dyn UrlStore, filters: &FilterState) {
    let mut params: Vec<(String, String)> = Vec::new();
    let search = filters.search.trim();
    if !search.is_empty() {
        params.push((PARAM_SEARCH.to_string(), search.to_string()));
    }
    let group = filters.categories.iter().find_map(|t| match t {
        CategoryToken::MainGroup(g) => Some(g.clone()),
        _ => None,
    });
    if let Some(g) = group {
        params.push((PARAM_MAIN_CATEGORY.to_string(), g));
    } else if let Some(slug) = filters.categories.iter().find_map(|t| match t {
        CategoryToken::Slug(s) => Some(s.clone()),
        _ => None,
    }) {
        params.push((PARAM_CATEGORY.to_string(), slug));
    }
    url.write(&params);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Query codec round-trips encoded values.
    ///
    /// - Input: `?search=5%20mukhi&category=rudraksha`
    /// - Output: Decoded pairs, re-encoded to the same string (sans `?`)
    fn query_codec_round_trip() {
        let q = "search=5%20mukhi&category=rudraksha";
        let pairs = parse_query(&format!("?{q}"));
        assert_eq!(
            pairs,
            vec![
                ("search".to_string(), "5 mukhi".to_string()),
                ("category".to_string(), "rudraksha".to_string()),
            ]
        );
        assert_eq!(encode_query(&pairs), q);
    }

    #[test]
    /// What: Mount maps `category` to a Slug token.
    ///
    /// - Input: `?category=5-mukhi`
    /// - Output: Exactly one Slug token with that value
    fn mount_category_becomes_slug_token() {
        let url = MemoryUrl::from_query("?category=5-mukhi");
        let mut filters = FilterState::default();
        apply_on_mount(&url, &mut filters);
        assert_eq!(filters.categories, vec![CategoryToken::Slug("5-mukhi".into())]);
        assert!(filters.search.is_empty());
    }

    #[test]
    /// What: `main-category` wins over `category` when both are present.
    ///
    /// - Input: Both parameters plus a search
    /// - Output: One MainGroup token; the slug is ignored; search applies
    fn mount_main_category_precedence() {
        let url = MemoryUrl::from_query("main-category=beads&category=5-mukhi&search=mala");
        let mut filters = FilterState::default();
        apply_on_mount(&url, &mut filters);
        assert_eq!(filters.categories, vec![CategoryToken::MainGroup("beads".into())]);
        assert_eq!(filters.search, "mala");
    }

    #[test]
    /// What: Navigating to a URL without `search` clears the committed search.
    ///
    /// - Input: Mount with search + category, then mount a category-only URL
    /// - Output: The second mount drops the stale search and swaps the token
    fn remount_without_search_clears_it() {
        let mut filters = FilterState::default();
        apply_on_mount(&MemoryUrl::from_query("?search=mala&category=5-mukhi"), &mut filters);
        assert_eq!(filters.search, "mala");

        apply_on_mount(&MemoryUrl::from_query("?category=rudraksha"), &mut filters);
        assert!(filters.search.is_empty());
        assert_eq!(filters.categories, vec![CategoryToken::Slug("rudraksha".into())]);
    }

    #[test]
    /// What: Writing back serializes state and clearing removes parameters.
    ///
    /// - Input: State with search + slug token, then cleared categories
    /// - Output: Both parameters present, then only `search` remains
    fn sync_url_writes_and_clears() {
        let mut url = MemoryUrl::new();
        let mut filters = FilterState::default();
        filters.search = "5 mukhi".into();
        filters.toggle_category_token(CategoryToken::Slug("rudraksha".into()));
        sync_url(&mut url, &filters);
        assert_eq!(url.get(PARAM_SEARCH), Some("5 mukhi"));
        assert_eq!(url.get(PARAM_CATEGORY), Some("rudraksha"));
        assert_eq!(url.query(), "search=5%20mukhi&category=rudraksha");

        filters.categories.clear();
        sync_url(&mut url, &filters);
        assert_eq!(url.get(PARAM_CATEGORY), None);
        assert_eq!(url.get(PARAM_SEARCH), Some("5 mukhi"));
    }

    #[test]
    /// What: Id tokens never leak into the URL.
    ///
    /// - Input: State with only an Id token
    /// - Output: No category parameters written
    fn id_tokens_stay_local() {
        let mut url = MemoryUrl::new();
        let mut filters = FilterState::default();
        filters.toggle_category_token(CategoryToken::Id(7));
        sync_url(&mut url, &filters);
        assert!(url.query().is_empty());
    }
}
