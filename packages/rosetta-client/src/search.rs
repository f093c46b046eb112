//! Search assembler: raw search response → one page of normalized
//! hits.

use api_core::{Result, SearchPage};
use serde_json::Value;
use url::Url;

use crate::path::{lookup, lookup_array};
use crate::source::SourceRecord;
use crate::types::{RecordType, SearchResult};

/// Map an upstream type code to the closed category set. `repository`
/// folds into `archive`; `agent` is a `creator` unless the secondary
/// actual-type says `person`.
pub fn classify(base_type: &str, actual_type: Option<&str>) -> Option<RecordType> {
    match base_type {
        "record" => Some(RecordType::Record),
        "aggregation" => Some(RecordType::Aggregation),
        "archive" | "repository" => Some(RecordType::Archive),
        "agent" => Some(if actual_type == Some("person") {
            RecordType::Person
        } else {
            RecordType::Creator
        }),
        _ => None,
    }
}

/// Walk each `metadata` item through the field extractor and attach
/// pagination metadata. The stated total comes from `stats.total` and
/// is capped by the page builder; an out-of-range page surfaces as
/// [`api_core::ApiError::PageNotFound`].
pub fn assemble_search_page(
    raw: &Value,
    page: u32,
    results_per_page: u32,
    max_count: u64,
    source_url: &Url,
) -> Result<SearchPage<SearchResult>> {
    let mut results = Vec::new();
    for item in lookup_array(raw, "metadata") {
        let Some(source) = lookup(item, "_source") else {
            continue;
        };
        let record = SourceRecord::new(source);
        let Some(kind) = record
            .base_type()
            .and_then(|base| classify(base, record.actual_type()))
        else {
            tracing::warn!(
                id = %record.id(),
                kind = record.base_type().unwrap_or("<absent>"),
                "Skipping search hit with unrecognised type code"
            );
            continue;
        };
        results.push(SearchResult {
            kind,
            id: record.id(),
            title: record.title(),
            description: record.description(),
            date_from: record.date_from(),
            date_to: record.date_to(),
            reference: record.reference_number().map(str::to_string),
            held_by: record.held_by(),
        });
    }

    let count = lookup(raw, "stats.total")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    SearchPage::build(
        count,
        page,
        results_per_page,
        max_count,
        results,
        source_url.to_string(),
    )
}
