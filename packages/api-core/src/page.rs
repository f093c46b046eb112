//! Offset pagination maths for search responses.
//!
//! Every derived field (`pages`, `result_range_min/max`) is computed
//! here and never trusted from upstream. The reported `count` is
//! capped at a configured maximum because the upstream search engines
//! cannot reliably serve results beyond that depth.

use serde::Serialize;

use crate::error::{ApiError, Result};

/// One page of normalized search results plus derived pagination
/// metadata. Generic over the per-upstream result shape.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage<T: Serialize> {
    pub count: u64,
    pub page: u32,
    pub pages: u32,
    pub result_range_min: u64,
    pub result_range_max: u64,
    pub results_per_page: u32,
    pub results: Vec<T>,
    /// The upstream URL this page was assembled from, echoed back for
    /// traceability.
    pub source_url: String,
}

impl<T: Serialize> SearchPage<T> {
    /// Assemble a page, capping `count` at `max_count` and validating
    /// that `page` lies within `[1, pages]`. An out-of-range page is a
    /// [`ApiError::PageNotFound`], never a silent empty page.
    pub fn build(
        count: u64,
        page: u32,
        results_per_page: u32,
        max_count: u64,
        results: Vec<T>,
        source_url: String,
    ) -> Result<Self> {
        let count = count.min(max_count);
        let pages = total_pages(count, results_per_page);
        if !page_in_range(page, pages) {
            return Err(ApiError::PageNotFound { page });
        }
        let (result_range_min, result_range_max) = result_range(count, page, results_per_page);
        Ok(Self {
            count,
            page,
            pages,
            result_range_min,
            result_range_max,
            results_per_page,
            results,
            source_url,
        })
    }
}

/// `ceil(count / results_per_page)`, 0 when the page size is 0.
pub fn total_pages(count: u64, results_per_page: u32) -> u32 {
    if results_per_page == 0 {
        return 0;
    }
    count.div_ceil(results_per_page as u64) as u32
}

/// An empty result set (`pages == 0`) keeps every page in range.
pub fn page_in_range(page: u32, pages: u32) -> bool {
    pages == 0 || (page >= 1 && page <= pages)
}

/// 1-based inclusive range of result ordinals covered by `page`;
/// `(0, 0)` for an empty result set.
fn result_range(count: u64, page: u32, results_per_page: u32) -> (u64, u64) {
    if count == 0 {
        return (0, 0);
    }
    let min = results_per_page as u64 * (page as u64 - 1) + 1;
    let max = (results_per_page as u64 * page as u64).min(count);
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(count: u64, page: u32) -> SearchPage<u32> {
        SearchPage::build(count, page, 20, 10_000, vec![], String::new()).unwrap()
    }

    #[test]
    fn test_pages_is_ceiling_of_count_over_page_size() {
        assert_eq!(page_of(41, 1).pages, 3);
        assert_eq!(page_of(40, 1).pages, 2);
        assert_eq!(page_of(1, 1).pages, 1);
    }

    #[test]
    fn test_pages_zero_iff_count_zero() {
        assert_eq!(page_of(0, 1).pages, 0);
        assert_ne!(page_of(1, 1).pages, 0);
    }

    #[test]
    fn test_empty_result_set_keeps_any_page_in_range() {
        // pages == 0: every page is in range, empty result, no error
        let page = page_of(0, 99);
        assert_eq!(page.count, 0);
        assert_eq!(page.result_range_min, 0);
        assert_eq!(page.result_range_max, 0);
    }

    #[test]
    fn test_page_past_last_is_not_found() {
        let err = SearchPage::<u32>::build(41, 4, 20, 10_000, vec![], String::new()).unwrap_err();
        assert!(matches!(err, ApiError::PageNotFound { page: 4 }));
    }

    #[test]
    fn test_page_zero_is_not_found() {
        let err = SearchPage::<u32>::build(41, 0, 20, 10_000, vec![], String::new()).unwrap_err();
        assert!(matches!(err, ApiError::PageNotFound { page: 0 }));
    }

    #[test]
    fn test_count_capped_at_max() {
        let page = SearchPage::<u32>::build(1_234_567, 1, 20, 10_000, vec![], String::new())
            .unwrap();
        assert_eq!(page.count, 10_000);
        assert_eq!(page.pages, 500);
    }

    #[test]
    fn test_result_range_invariants_hold_for_every_valid_page() {
        let count = 47;
        let rpp = 20;
        let pages = total_pages(count, rpp);
        for page in 1..=pages {
            let p = SearchPage::<u32>::build(count, page, rpp, 10_000, vec![], String::new())
                .unwrap();
            assert!(p.result_range_min <= p.result_range_max);
            assert!(p.result_range_max <= p.count);
            assert!(p.result_range_max - p.result_range_min + 1 <= rpp as u64);
        }
    }

    #[test]
    fn test_result_range_for_final_partial_page() {
        let p = page_of(47, 3);
        assert_eq!(p.result_range_min, 41);
        assert_eq!(p.result_range_max, 47);
    }

    #[test]
    fn test_zero_page_size_yields_zero_pages() {
        assert_eq!(total_pages(100, 0), 0);
    }
}
