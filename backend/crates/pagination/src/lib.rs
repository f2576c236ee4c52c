//! Page-number pagination primitives shared by the backend's list endpoints.
//!
//! Endpoints accept `page`/`per_page` query parameters and respond with a
//! [`PageEnvelope`] carrying the items for the requested page alongside
//! `total`, `pages`, `current_page`, and `per_page` metadata. This crate owns
//! the clamping rules so every endpoint paginates identically.

use serde::Serialize;

/// Items returned when the client does not specify `per_page`.
pub const DEFAULT_PER_PAGE: u64 = 50;

/// Hard ceiling on `per_page`; larger requests are clamped, not rejected.
pub const MAX_PER_PAGE: u64 = 100;

/// A validated, clamped pagination request.
///
/// Construction never fails: out-of-range inputs are clamped to the nearest
/// legal value so a hostile `per_page=500` degrades to `per_page=100` rather
/// than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl PageRequest {
    /// Build a request from raw query values, applying defaults and clamps.
    ///
    /// `page` defaults to 1 and is floored at 1; `per_page` defaults to
    /// [`DEFAULT_PER_PAGE`] and is clamped to `1..=MAX_PER_PAGE`.
    #[must_use]
    pub const fn from_params(page: Option<u64>, per_page: Option<u64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p,
            _ => 1,
        };
        let per_page = match per_page {
            Some(n) if n < 1 => 1,
            Some(n) if n > MAX_PER_PAGE => MAX_PER_PAGE,
            Some(n) => n,
            None => DEFAULT_PER_PAGE,
        };
        Self { page, per_page }
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Items per page after clamping.
    #[must_use]
    pub const fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Number of rows to skip for this page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::from_params(None, None)
    }
}

/// Response envelope for one page of items.
///
/// `pages` is the total page count for the collection at `per_page` items per
/// page; requesting a page beyond it yields an empty `items` list with the
/// same metadata.
#[derive(Debug, Clone, Serialize)]
pub struct PageEnvelope<T> {
    /// Items on the requested page, in the endpoint's canonical order.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages (`0` when the collection is empty).
    pub pages: u64,
    /// The page that was served.
    pub current_page: u64,
    /// The clamp-adjusted page size that was applied.
    pub per_page: u64,
}

impl<T> PageEnvelope<T> {
    /// Assemble an envelope from a fetched page and the collection total.
    #[must_use]
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            pages: total.div_ceil(request.per_page()),
            current_page: request.page(),
            per_page: request.per_page(),
        }
    }

    /// Map the item type while keeping the metadata intact.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageEnvelope<U> {
        PageEnvelope {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            pages: self.pages,
            current_page: self.current_page,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None, 1, 50)]
    #[case(Some(3), Some(25), 3, 25)]
    #[case(Some(0), Some(0), 1, 1)]
    #[case(Some(1), Some(500), 1, 100)]
    #[case(Some(7), Some(100), 7, 100)]
    fn from_params_applies_defaults_and_clamps(
        #[case] page: Option<u64>,
        #[case] per_page: Option<u64>,
        #[case] expected_page: u64,
        #[case] expected_per_page: u64,
    ) {
        let request = PageRequest::from_params(page, per_page);
        assert_eq!(request.page(), expected_page);
        assert_eq!(request.per_page(), expected_per_page);
    }

    #[rstest]
    #[case(1, 50, 0)]
    #[case(2, 50, 50)]
    #[case(4, 25, 75)]
    fn offset_skips_prior_pages(#[case] page: u64, #[case] per_page: u64, #[case] expected: u64) {
        let request = PageRequest::from_params(Some(page), Some(per_page));
        assert_eq!(request.offset(), expected);
    }

    #[rstest]
    #[case(0, 50, 0)]
    #[case(1, 50, 1)]
    #[case(50, 50, 1)]
    #[case(51, 50, 2)]
    #[case(101, 100, 2)]
    fn envelope_page_count_rounds_up(
        #[case] total: u64,
        #[case] per_page: u64,
        #[case] expected_pages: u64,
    ) {
        let request = PageRequest::from_params(None, Some(per_page));
        let envelope = PageEnvelope::<u8>::new(Vec::new(), total, request);
        assert_eq!(envelope.pages, expected_pages);
    }

    #[rstest]
    fn envelope_preserves_requested_page_when_beyond_data() {
        let request = PageRequest::from_params(Some(9), Some(10));
        let envelope = PageEnvelope::<u8>::new(Vec::new(), 3, request);
        assert!(envelope.items.is_empty());
        assert_eq!(envelope.total, 3);
        assert_eq!(envelope.pages, 1);
        assert_eq!(envelope.current_page, 9);
        assert_eq!(envelope.per_page, 10);
    }

    #[rstest]
    fn envelope_serializes_metadata_keys() {
        let request = PageRequest::default();
        let envelope = PageEnvelope::new(vec![1u8, 2], 2, request);
        let value = serde_json::to_value(envelope).unwrap_or_default();
        assert_eq!(value.get("total").and_then(serde_json::Value::as_u64), Some(2));
        assert_eq!(value.get("pages").and_then(serde_json::Value::as_u64), Some(1));
        assert_eq!(
            value.get("current_page").and_then(serde_json::Value::as_u64),
            Some(1)
        );
        assert_eq!(
            value.get("per_page").and_then(serde_json::Value::as_u64),
            Some(50)
        );
        assert!(value.get("items").is_some_and(serde_json::Value::is_array));
    }

    #[rstest]
    fn map_converts_items_and_keeps_metadata() {
        let request = PageRequest::from_params(Some(2), Some(2));
        let envelope = PageEnvelope::new(vec![3u8, 4], 4, request).map(u64::from);
        assert_eq!(envelope.items, vec![3u64, 4]);
        assert_eq!(envelope.current_page, 2);
        assert_eq!(envelope.pages, 2);
    }
}
