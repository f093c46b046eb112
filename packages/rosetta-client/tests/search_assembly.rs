//! Integration tests for the search assembler: a raw Rosetta search
//! response in, one normalized page out.

use rosetta_client::search::assemble_search_page;
use rosetta_client::{ApiError, RecordType};
use serde_json::{json, Value};
use url::Url;

fn source_url() -> Url {
    Url::parse("https://rosetta.example.test/search?q=peel").unwrap()
}

/// A search response with one record, one repository and one
/// agent-of-actual-type-person.
fn mixed_response(total: u64) -> Value {
    json!({
        "metadata": [
            {"_source": {
                "@admin": {"id": "C100"},
                "@datatype": {"base": "record", "group": ["tna"]},
                "title": [{"primary": true, "value": "Correspondence and papers"}],
                "description": [{"primary": true, "value": "Out-letters."}],
                "start": {"date": [{"primary": true, "value": "1834"}]},
                "end": {"date": [{"primary": true, "value": "1871"}]},
                "identifier": [{"type": "reference number", "value": "MH 12"}],
                "repository": {
                    "@admin": {"id": "A13530124"},
                    "name": {"value": "The National Archives, Kew"}
                }
            }},
            {"_source": {
                "@admin": {"id": "A200"},
                "@datatype": {"base": "repository"},
                "title": [{"primary": true, "value": "Borthwick Institute"}]
            }},
            {"_source": {
                "@admin": {"id": "F300"},
                "@datatype": {"base": "agent", "actual": "person"},
                "name": [{"primary": true, "first": ["Robert"], "last": "Peel"}],
                "birth": {"date": {"value": "1788"}},
                "death": {"date": {"value": "1850"}}
            }},
        ],
        "stats": {"total": total}
    })
}

#[test]
fn test_three_hits_classified_record_archive_person() {
    let page = assemble_search_page(&mixed_response(3), 1, 20, 10_000, &source_url()).unwrap();

    assert_eq!(page.results.len(), 3);
    let kinds: Vec<RecordType> = page.results.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![RecordType::Record, RecordType::Archive, RecordType::Person]
    );
}

#[test]
fn test_record_hit_fields_normalized() {
    let page = assemble_search_page(&mixed_response(3), 1, 20, 10_000, &source_url()).unwrap();
    let record = &page.results[0];

    assert_eq!(record.id, "C100");
    assert_eq!(record.title, "Correspondence and papers");
    assert_eq!(record.description, "Out-letters.");
    assert_eq!(record.date_from.as_deref(), Some("1834"));
    assert_eq!(record.date_to.as_deref(), Some("1871"));
    assert_eq!(record.reference.as_deref(), Some("MH 12"));
    assert_eq!(
        record.held_by.as_ref().map(|h| h.name.as_str()),
        Some("The National Archives, Kew")
    );

    let person = &page.results[2];
    assert_eq!(person.title, "Robert Peel");
    assert_eq!(person.date_from.as_deref(), Some("1788"));
    assert_eq!(person.date_to.as_deref(), Some("1850"));
    assert_eq!(person.reference, None);
}

#[test]
fn test_missing_id_uses_sentinel() {
    let raw = json!({
        "metadata": [{"_source": {"@datatype": {"base": "record"}}}],
        "stats": {"total": 1}
    });
    let page = assemble_search_page(&raw, 1, 20, 10_000, &source_url()).unwrap();
    assert_eq!(page.results[0].id, "UNKNOWN");
}

#[test]
fn test_unrecognised_hit_type_skipped_not_guessed() {
    let raw = json!({
        "metadata": [
            {"_source": {"@admin": {"id": "W1"}, "@datatype": {"base": "widget"}}},
            {"_source": {"@admin": {"id": "C2"}, "@datatype": {"base": "record"}}},
        ],
        "stats": {"total": 2}
    });
    let page = assemble_search_page(&raw, 1, 20, 10_000, &source_url()).unwrap();
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].id, "C2");
}

#[test]
fn test_count_capped_and_pages_derived() {
    let page = assemble_search_page(&mixed_response(2_000_000), 1, 20, 10_000, &source_url())
        .unwrap();
    assert_eq!(page.count, 10_000);
    assert_eq!(page.pages, 500);
    assert_eq!(page.results_per_page, 20);
    assert_eq!(page.source_url, source_url().to_string());
}

#[test]
fn test_out_of_range_page_is_page_not_found() {
    let err = assemble_search_page(&mixed_response(3), 2, 20, 10_000, &source_url()).unwrap_err();
    assert!(matches!(err, ApiError::PageNotFound { page: 2 }));
}

#[test]
fn test_empty_result_set_any_page_in_range() {
    let raw = json!({"metadata": [], "stats": {"total": 0}});
    let page = assemble_search_page(&raw, 7, 20, 10_000, &source_url()).unwrap();
    assert_eq!(page.pages, 0);
    assert!(page.results.is_empty());
}

#[test]
fn test_serialized_hit_keeps_absent_fields_as_null() {
    let raw = json!({
        "metadata": [{"_source": {"@admin": {"id": "C5"}, "@datatype": {"base": "record"}}}],
        "stats": {"total": 1}
    });
    let page = assemble_search_page(&raw, 1, 20, 10_000, &source_url()).unwrap();
    let serialized = serde_json::to_value(&page.results[0]).unwrap();

    assert_eq!(serialized["type"], "record");
    assert_eq!(serialized["title"], "");
    assert!(serialized["date_from"].is_null());
    assert!(serialized["held_by"].is_null());
    // the shape never varies with upstream completeness
    assert_eq!(serialized.as_object().unwrap().len(), 8);
}
