//! Query construction for the Wagtail pages endpoint.
//!
//! Same rule as the records queries: one immutable value per request,
//! parameters derived in a single step.

/// Page kinds included in article search when the caller does not
/// narrow to one.
pub const DEFAULT_KINDS: &[&str] = &[
    "articles.ArticlePage",
    "articles.FocusedArticlePage",
    "articles.RecordArticlePage",
    "collections.HighlightGalleryPage",
    "collections.TimePeriodExplorerPage",
    "collections.TopicExplorerPage",
];

/// Map a caller-facing order token to Wagtail's field/direction
/// convention. Unknown or absent tokens leave the upstream default
/// (relevance) in place.
pub fn sort_param(order: &str) -> Option<&'static str> {
    match order {
        "alphabetical" | "alphabetical:asc" => Some("title"),
        "alphabetical:desc" => Some("-title"),
        "date" | "date:desc" => Some("-first_published_at"),
        "date:asc" => Some("first_published_at"),
        _ => None,
    }
}

/// Parameters for one article search request.
#[derive(Debug, Clone)]
pub struct ArticleQuery {
    pub q: Option<String>,
    pub page: u32,
    /// Narrow to one page kind; otherwise [`DEFAULT_KINDS`] applies.
    pub kind: Option<String>,
    pub order: Option<String>,
}

impl ArticleQuery {
    pub fn new(page: u32) -> Self {
        Self {
            q: None,
            page,
            kind: None,
            order: None,
        }
    }

    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Wagtail's `offset`/`limit` paging dialect.
    pub fn params(&self, results_per_page: u32) -> Vec<(String, String)> {
        // widen before multiplying, the page number is caller-supplied
        let offset = u64::from(self.page.saturating_sub(1)) * u64::from(results_per_page);
        let mut params = Vec::new();
        if let Some(q) = &self.q {
            params.push(("search".to_string(), q.clone()));
        }
        let kinds = match &self.kind {
            Some(kind) => kind.clone(),
            None => DEFAULT_KINDS.join(","),
        };
        params.push(("type".to_string(), kinds));
        if let Some(order) = self.order.as_deref().and_then(sort_param) {
            params.push(("order".to_string(), order.to_string()));
        }
        params.push(("offset".to_string(), offset.to_string()));
        params.push(("limit".to_string(), results_per_page.to_string()));
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_order_token_mapping() {
        assert_eq!(sort_param("alphabetical"), Some("title"));
        assert_eq!(sort_param("alphabetical:asc"), Some("title"));
        assert_eq!(sort_param("alphabetical:desc"), Some("-title"));
        assert_eq!(sort_param("date"), Some("-first_published_at"));
        assert_eq!(sort_param("date:desc"), Some("-first_published_at"));
        assert_eq!(sort_param("date:asc"), Some("first_published_at"));
        assert_eq!(sort_param("relevance"), None);
        assert_eq!(sort_param(""), None);
    }

    #[test]
    fn test_default_kinds_applied_when_not_narrowed() {
        let params = ArticleQuery::new(1).params(20);
        let kinds = param(&params, "type").unwrap();
        assert!(kinds.contains("articles.ArticlePage"));
        assert!(kinds.contains("collections.TopicExplorerPage"));
        assert_eq!(kinds.matches(',').count(), 5);
    }

    #[test]
    fn test_kind_narrowing_replaces_defaults() {
        let params = ArticleQuery::new(1)
            .kind("articles.RecordArticlePage")
            .params(20);
        assert_eq!(param(&params, "type"), Some("articles.RecordArticlePage"));
    }

    #[test]
    fn test_offset_and_limit() {
        let params = ArticleQuery::new(3).q("tudors").params(20);
        assert_eq!(param(&params, "search"), Some("tudors"));
        assert_eq!(param(&params, "offset"), Some("40"));
        assert_eq!(param(&params, "limit"), Some("20"));
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let params = ArticleQuery::new(u32::MAX).params(20);
        let expected = (u64::from(u32::MAX) - 1) * 20;
        assert_eq!(param(&params, "offset"), Some(expected.to_string().as_str()));
    }

    #[test]
    fn test_unrecognised_order_omitted() {
        let params = ArticleQuery::new(1).order("shuffled").params(20);
        assert_eq!(param(&params, "order"), None);
    }
}
