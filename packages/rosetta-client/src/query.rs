//! Query construction for the Rosetta search and fetch endpoints.
//!
//! Each request gets a fresh immutable query value; parameters are
//! derived in one step. The predecessor service accumulated
//! parameters on a shared mutable bag and leaked them between
//! requests; that bug class cannot exist here.

/// Parameters for one `/search` request.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub q: String,
    pub page: u32,
    /// Group filter token (e.g. `tna`, `nonTna`). Omitted entirely
    /// when absent since the upstream rejects empty filters.
    pub group: Option<String>,
    pub highlight: bool,
    /// Bypass shared caches in front of the upstream for this fetch.
    pub uncached: bool,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>, page: u32) -> Self {
        Self {
            q: q.into(),
            page,
            group: None,
            highlight: false,
            uncached: false,
        }
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn uncached(mut self, uncached: bool) -> Self {
        self.uncached = uncached;
        self
    }

    /// Upstream query-string dialect: `size`/`from` paging with a
    /// zero-based offset, `filter=group:(<token>)` only when a group
    /// is set.
    pub fn params(&self, results_per_page: u32) -> Vec<(String, String)> {
        // page comes straight off the query string; widen before
        // multiplying so an absurd page number cannot overflow
        let offset = u64::from(self.page.saturating_sub(1)) * u64::from(results_per_page);
        let mut params = vec![
            ("includeSource".to_string(), "true".to_string()),
            ("q".to_string(), self.q.clone()),
            ("size".to_string(), results_per_page.to_string()),
            ("from".to_string(), offset.to_string()),
        ];
        if let Some(group) = &self.group {
            params.push(("filter".to_string(), format!("group:({group})")));
        }
        if self.highlight {
            params.push(("highlight".to_string(), "true".to_string()));
        }
        params
    }
}

/// Parameters for one `/fetch` request.
#[derive(Debug, Clone)]
pub struct FetchQuery {
    pub id: String,
    pub uncached: bool,
}

impl FetchQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            uncached: false,
        }
    }

    pub fn params(&self) -> Vec<(String, String)> {
        vec![
            ("id".to_string(), self.id.clone()),
            ("includeSource".to_string(), "true".to_string()),
        ]
    }
}
