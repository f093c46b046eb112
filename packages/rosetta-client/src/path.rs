//! Safe nested lookup over untyped upstream documents.
//!
//! Rosetta payloads are arbitrarily nested and optional at every
//! level; no field is guaranteed. Every read of nested data in this
//! crate goes through [`lookup`] (or the typed wrappers) so that a
//! missing, mistyped or out-of-range segment resolves to `None`
//! instead of a panic. Ad hoc `["a"]["b"]` indexing is what made the
//! predecessor codebase fragile; do not reintroduce it.

use serde_json::Value;

/// Traverse a dotted path through nested objects and arrays. Numeric
/// segments index arrays. Returns `None` the moment any segment is
/// missing, the wrong shape, or out of range.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// String at `path`, if present and actually a string.
pub fn lookup_str<'a>(root: &'a Value, path: &str) -> Option<&'a str> {
    lookup(root, path).and_then(Value::as_str)
}

/// Boolean at `path`, if present and actually a boolean.
pub fn lookup_bool(root: &Value, path: &str) -> Option<bool> {
    lookup(root, path).and_then(Value::as_bool)
}

/// Array at `path`; an empty slice when absent or not an array, so
/// callers can iterate unconditionally.
pub fn lookup_array<'a>(root: &'a Value, path: &str) -> &'a [Value] {
    lookup(root, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// First element of `items` flagged `primary == true`. Deliberately
/// not "first element": when several candidate values exist, an
/// unflagged list has no canonical member and resolves to `None`.
pub fn primary(items: &[Value]) -> Option<&Value> {
    items
        .iter()
        .find(|item| lookup_bool(item, "primary") == Some(true))
}

/// The `value` of the primary element, when both exist.
pub fn primary_value<'a>(items: &'a [Value]) -> Option<&'a str> {
    primary(items).and_then(|item| lookup_str(item, "value"))
}

/// First element whose `type` tag equals `tag`.
pub fn typed<'a>(items: &'a [Value], tag: &str) -> Option<&'a Value> {
    items
        .iter()
        .find(|item| lookup_str(item, "type") == Some(tag))
}

/// The `value` of the first element whose `type` tag equals `tag`.
pub fn typed_value<'a>(items: &'a [Value], tag: &str) -> Option<&'a str> {
    typed(items, tag).and_then(|item| lookup_str(item, "value"))
}

/// First element whose `label` equals `tag` (Rosetta emits the label
/// either as a bare string or as a `{value}` object).
pub fn labelled<'a>(items: &'a [Value], tag: &str) -> Option<&'a Value> {
    items.iter().find(|item| {
        lookup_str(item, "label") == Some(tag) || lookup_str(item, "label.value") == Some(tag)
    })
}

/// Collect the `value` strings of every element of the array at
/// `path`, skipping elements without one.
pub fn collect_values(root: &Value, path: &str) -> Vec<String> {
    lookup_array(root, path)
        .iter()
        .filter_map(|item| lookup_str(item, "value"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_walks_objects_and_arrays() {
        let doc = json!({"a": {"b": [{"c": 7}]}});
        assert_eq!(lookup(&doc, "a.b.0.c"), Some(&json!(7)));
    }

    #[test]
    fn test_lookup_missing_segment_is_none() {
        let doc = json!({"a": {"b": 1}});
        assert_eq!(lookup(&doc, "a.c"), None);
        assert_eq!(lookup(&doc, "a.b.c"), None);
    }

    #[test]
    fn test_lookup_bad_array_index_is_none() {
        let doc = json!({"a": [1, 2]});
        assert_eq!(lookup(&doc, "a.5"), None);
        assert_eq!(lookup(&doc, "a.x"), None);
    }

    #[test]
    fn test_lookup_str_rejects_wrong_type() {
        let doc = json!({"a": 42});
        assert_eq!(lookup_str(&doc, "a"), None);
    }

    #[test]
    fn test_primary_prefers_flag_over_position() {
        let items = json!([{"value": "A"}, {"value": "B", "primary": true}]);
        assert_eq!(primary_value(items.as_array().unwrap()), Some("B"));
    }

    #[test]
    fn test_primary_absent_flag_is_none_not_first() {
        let items = json!([{"value": "A"}, {"value": "B"}]);
        assert_eq!(primary_value(items.as_array().unwrap()), None);
        assert_eq!(primary_value(&[]), None);
    }

    #[test]
    fn test_typed_value_matches_type_tag() {
        let items = json!([
            {"type": "other", "value": "X"},
            {"type": "reference number", "value": "ADM 1"}
        ]);
        assert_eq!(
            typed_value(items.as_array().unwrap(), "reference number"),
            Some("ADM 1")
        );
        assert_eq!(typed_value(items.as_array().unwrap(), "missing"), None);
    }

    #[test]
    fn test_labelled_accepts_bare_and_wrapped_labels() {
        let items = json!([
            {"label": "display title", "value": "A"},
            {"label": {"value": "display title"}, "value": "B"}
        ]);
        let arr = items.as_array().unwrap();
        assert_eq!(
            labelled(arr, "display title").and_then(|i| lookup_str(i, "value")),
            Some("A")
        );
    }

    #[test]
    fn test_collect_values_skips_valueless_items() {
        let doc = json!({"language": [{"value": "English"}, {"note": "?"}, {"value": "Latin"}]});
        assert_eq!(collect_values(&doc, "language"), vec!["English", "Latin"]);
    }
}
