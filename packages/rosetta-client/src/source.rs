//! Field extraction over one Rosetta `_source` document.
//!
//! [`SourceRecord`] borrows the raw document for one extraction pass
//! and exposes every normalization rule as a method. Every method is
//! total: a missing, mistyped or half-populated field resolves to
//! `None` / empty, never to a panic, because upstream schema variance
//! is the norm. Document-level problems (the envelope not being an
//! object at all) are the assemblers' business, not this module's.

use serde_json::Value;

use crate::levels::level_name;
use crate::markup;
use crate::path::{
    collect_values, labelled, lookup, lookup_array, lookup_bool, lookup_str, primary,
    primary_value, typed, typed_value,
};
use crate::types::{
    Agent, AgentGroups, ContactInfo, HeldBy, HierarchyLevel, Manifestation, NameParts,
};

/// Sentinel id for documents that arrive without one.
pub const UNKNOWN_ID: &str = "UNKNOWN";

/// Tags an ephemera fragment may bury its useful value under.
const EPHEMERA_TAGS: &[&str] = &["foa", "function", "address"];

/// Borrowing view over one `_source` document.
#[derive(Debug, Clone, Copy)]
pub struct SourceRecord<'a> {
    source: &'a Value,
}

impl<'a> SourceRecord<'a> {
    pub fn new(source: &'a Value) -> Self {
        Self { source }
    }

    // ── type classification ────────────────────────────────────────

    /// Declared base type code (`@datatype.base`).
    pub fn base_type(&self) -> Option<&'a str> {
        lookup_str(self.source, "@datatype.base")
    }

    /// Secondary "actual type" code (`@datatype.actual`).
    pub fn actual_type(&self) -> Option<&'a str> {
        lookup_str(self.source, "@datatype.actual")
    }

    pub fn id(&self) -> String {
        lookup_str(self.source, "@admin.id")
            .unwrap_or(UNKNOWN_ID)
            .to_string()
    }

    pub fn is_digitised(&self) -> bool {
        lookup_bool(self.source, "digitised").unwrap_or(false)
    }

    /// Does the record belong to The National Archives group?
    ///
    /// A present group list answers directly: `"tna"` means yes, and a
    /// list without `"tna"` still means yes unless it says `"nonTna"`.
    /// With no group list at all, the digitised flag is the best
    /// available heuristic.
    pub fn is_tna(&self) -> bool {
        match lookup(self.source, "@datatype.group").and_then(Value::as_array) {
            Some(groups) => {
                let has = |tag: &str| groups.iter().any(|g| g.as_str() == Some(tag));
                has("tna") || !has("nonTna")
            }
            None => self.is_digitised(),
        }
    }

    // ── titles and names ───────────────────────────────────────────

    /// Title precedence: display-labelled entry, primary entry,
    /// derived name, summary title, description, empty.
    pub fn title(&self) -> String {
        let titles = lookup_array(self.source, "title");
        if let Some(value) = labelled(titles, "display title").and_then(|t| lookup_str(t, "value"))
        {
            return value.to_string();
        }
        if let Some(value) = primary_value(titles) {
            return value.to_string();
        }
        if let Some(name) = self.name() {
            return name;
        }
        if let Some(summary) = self.summary_title() {
            return summary.to_string();
        }
        self.description()
    }

    pub fn summary_title(&self) -> Option<&'a str> {
        lookup_str(self.source, "summary.title")
    }

    /// Full display name assembled from the primary name entry.
    pub fn name(&self) -> Option<String> {
        self.name_parts().full_name()
    }

    /// Decomposed parts of the primary name entry, plus any
    /// "also known as" variant.
    pub fn name_parts(&self) -> NameParts {
        let names = lookup_array(self.source, "name");
        let mut parts = NameParts::default();
        if let Some(entry) = primary(names) {
            parts.prefix = lookup_str(entry, "title_prefix").map(str::to_string);
            parts.forenames = lookup_array(entry, "first")
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
            parts.surname = lookup_str(entry, "last").map(str::to_string);
            parts.title = lookup_str(entry, "title").map(str::to_string);
        }
        parts.alternative_names = typed_value(names, "also known as").map(str::to_string);
        parts
    }

    // ── dates ──────────────────────────────────────────────────────

    /// Composed date string: lifespan first, then the origination
    /// date range.
    pub fn date(&self) -> Option<String> {
        self.lifespan().or_else(|| self.date_range())
    }

    /// `"{birth}–{death}"` (en dash) when either bound exists.
    pub fn lifespan(&self) -> Option<String> {
        if lookup(self.source, "birth").is_none() && lookup(self.source, "death").is_none() {
            return None;
        }
        let from = lookup_str(self.source, "birth.date.value").unwrap_or("");
        let to = lookup_str(self.source, "death.date.value").unwrap_or("");
        Some(format!("{from}–{to}"))
    }

    /// `"{from}–{to}"` from the primary start/end dates, else the
    /// free-text origination date, else the origination from/to pair.
    pub fn date_range(&self) -> Option<String> {
        let from = primary_value(lookup_array(self.source, "start.date"));
        let to = primary_value(lookup_array(self.source, "end.date"));
        if from.is_some() || to.is_some() {
            return Some(format!(
                "{}–{}",
                from.unwrap_or(""),
                to.unwrap_or("")
            ));
        }
        if let Some(value) = lookup_str(self.source, "origination.date.value") {
            return Some(value.to_string());
        }
        let from = lookup_str(self.source, "origination.date.from");
        let to = lookup_str(self.source, "origination.date.to");
        if from.is_some() || to.is_some() {
            return Some(format!(
                "{}–{}",
                from.unwrap_or(""),
                to.unwrap_or("")
            ));
        }
        None
    }

    /// Lower date bound alone, for search hits.
    pub fn date_from(&self) -> Option<String> {
        lookup_str(self.source, "birth.date.value")
            .or_else(|| primary_value(lookup_array(self.source, "start.date")))
            .or_else(|| lookup_str(self.source, "origination.date.from"))
            .map(str::to_string)
    }

    /// Upper date bound alone, for search hits.
    pub fn date_to(&self) -> Option<String> {
        lookup_str(self.source, "death.date.value")
            .or_else(|| primary_value(lookup_array(self.source, "end.date")))
            .or_else(|| lookup_str(self.source, "origination.date.to"))
            .map(str::to_string)
    }

    // ── places ─────────────────────────────────────────────────────

    /// One display address per place entry: the place's own name list
    /// when present, else its town/region/county/country name lists.
    pub fn places(&self) -> Vec<String> {
        lookup_array(self.source, "place")
            .iter()
            .filter_map(|place| {
                if lookup(place, "name").is_some() {
                    let joined = collect_values(place, "name").join(", ");
                    return (!joined.is_empty()).then_some(joined);
                }
                let chunks: Vec<String> = ["town", "region", "county", "country"]
                    .iter()
                    .filter_map(|part| {
                        let names = collect_values(place, &format!("{part}.name"));
                        (!names.is_empty()).then(|| names.join(", "))
                    })
                    .collect();
                (!chunks.is_empty()).then(|| chunks.join(", "))
            })
            .collect()
    }

    /// First matching span class across every place description blob.
    fn place_span(&self, class: &str) -> Option<String> {
        lookup_array(self.source, "place").iter().find_map(|place| {
            let blob = lookup_str(place, "description.value")?;
            markup::select_text(blob, &format!("span.{class}"))
        })
    }

    pub fn place_opening_times(&self) -> Option<String> {
        self.place_span("openinghours")
    }

    pub fn place_disabled_access(&self) -> Option<String> {
        self.place_span("disabledaccess")
    }

    pub fn place_comments(&self) -> Option<String> {
        self.place_span("comments")
    }

    pub fn place_fee(&self) -> Option<String> {
        self.place_span("fee")
    }

    pub fn place_appointment(&self) -> Option<String> {
        self.place_span("appointment")
    }

    // ── coded values ───────────────────────────────────────────────

    /// `M`/`F` translate; any other code passes through unchanged.
    pub fn gender(&self) -> Option<String> {
        lookup_str(self.source, "gender").map(|code| {
            match code {
                "M" => "Male",
                "F" => "Female",
                other => other,
            }
            .to_string()
        })
    }

    // ── descriptions ───────────────────────────────────────────────

    /// Long-form description. The primary entry wins; its value is
    /// de-wrapped (scope-and-content, then wrapper/emph, then raw).
    /// A primary entry holding only ephemera yields the first useful
    /// ephemera tag. Failing all that, the entry typed "description".
    pub fn description(&self) -> String {
        let descriptions = lookup_array(self.source, "description");
        if let Some(entry) = primary(descriptions) {
            if let Some(value) = lookup_str(entry, "value") {
                return strip_description_markup(value);
            }
            if let Some(blob) = lookup_str(entry, "ephemera.value") {
                if let Some(text) = markup::first_tag_text(blob, EPHEMERA_TAGS) {
                    return text;
                }
            }
        }
        typed_value(descriptions, "description")
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// "functions, occupations and activities" description entry.
    pub fn functions(&self) -> Option<String> {
        let entry = typed(
            lookup_array(self.source, "description"),
            "functions, occupations and activities",
        )?;
        let value = lookup_str(entry, "value")?;
        Some(markup::first_tag_text(value, EPHEMERA_TAGS).unwrap_or_else(|| value.to_string()))
    }

    pub fn epithet(&self) -> Option<&'a str> {
        typed_value(lookup_array(self.source, "description"), "epithet")
    }

    /// "history" description entry, de-wrapped like functions.
    pub fn history(&self) -> Option<String> {
        let entry = typed(lookup_array(self.source, "description"), "history")?;
        let value = lookup_str(entry, "value")?;
        Some(
            markup::first_tag_text(value, &["foa", "function"])
                .unwrap_or_else(|| value.to_string()),
        )
    }

    /// Biography rendered as a link; needs both text and target.
    pub fn biography(&self) -> Option<String> {
        let entry = typed(lookup_array(self.source, "description"), "biography")?;
        let text = lookup_str(entry, "value")?;
        let url = lookup_str(entry, "url")?;
        Some(format!("<a href=\"{url}\">{text}</a>"))
    }

    /// Administrative background note, de-wrapped.
    pub fn administrative_background(&self) -> Option<String> {
        typed_value(
            lookup_array(self.source, "description"),
            "administrative background",
        )
        .map(strip_description_markup)
    }

    /// Arrangement note, de-wrapped.
    pub fn arrangement(&self) -> Option<String> {
        typed_value(lookup_array(self.source, "description"), "arrangement")
            .map(strip_description_markup)
    }

    /// Unpublished finding aids note.
    pub fn unpublished_finding_aids(&self) -> Option<String> {
        typed_value(
            lookup_array(self.source, "description"),
            "unpublished finding aids",
        )
        .map(str::to_string)
    }

    /// Physical extent ("3 boxes", "2 vols").
    pub fn physical_description(&self) -> Option<&'a str> {
        lookup_str(self.source, "measurements.display")
    }

    // ── identifiers ────────────────────────────────────────────────

    /// Canonical identifier: the primary entry, else the name
    /// authority reference with any former ISAAR reference appended.
    pub fn identifier(&self) -> Option<String> {
        let identifiers = lookup_array(self.source, "identifier");
        if let Some(value) = primary_value(identifiers) {
            return Some(value.to_string());
        }
        let authority = typed_value(identifiers, "name authority reference")?;
        match typed_value(identifiers, "former name authority reference") {
            Some(former) => Some(format!("{authority} (Former ISAAR ref: {former})")),
            None => Some(authority.to_string()),
        }
    }

    pub fn former_identifier(&self) -> Option<&'a str> {
        typed_value(
            lookup_array(self.source, "identifier"),
            "former reference (Department)",
        )
    }

    pub fn reference_number(&self) -> Option<&'a str> {
        typed_value(lookup_array(self.source, "identifier"), "reference number")
    }

    // ── contact info ───────────────────────────────────────────────

    /// Contact details from the primary description entry's ephemera
    /// fragment.
    pub fn contact_info(&self) -> Option<ContactInfo> {
        let entry = primary(lookup_array(self.source, "description"))?;
        let blob = lookup_str(entry, "ephemera.value")?;
        Some(ContactInfo {
            address_line_1: markup::joined_text(blob, "addressline1", ", "),
            town: markup::select_text(blob, "addresstown"),
            postcode: markup::select_text(blob, "postcode"),
            country: markup::select_text(blob, "addresscountry"),
            map_url: markup::select_text(blob, "mapurl"),
            url: markup::select_text(blob, "url"),
            phone: markup::select_text(blob, "telephone"),
            fax: markup::select_text(blob, "fax"),
            email: markup::select_text(blob, "email"),
        })
    }

    // ── related entities ───────────────────────────────────────────

    /// Holding repository; needs both id and name.
    pub fn held_by(&self) -> Option<HeldBy> {
        let id = lookup_str(self.source, "repository.@admin.id")?;
        let name = lookup_str(self.source, "repository.name.value")?;
        Some(HeldBy {
            id: id.to_string(),
            name: name.to_string(),
        })
    }

    /// Agents grouped by Archon category. Entries without an Archon
    /// number, id or name are dropped.
    pub fn agents(&self) -> AgentGroups {
        let mut groups = AgentGroups::default();
        for agent in lookup_array(self.source, "agent") {
            let Some(archon) = typed_value(lookup_array(agent, "identifier"), "Archon number")
            else {
                continue;
            };
            let (Some(id), Some(name)) = (
                lookup_str(agent, "@admin.id"),
                lookup_str(agent, "name.value"),
            ) else {
                continue;
            };
            let entry = Agent {
                id: id.to_string(),
                name: name.to_string(),
                places: collect_values(agent, "place.name"),
            };
            match archon {
                "B" => groups.businesses.push(entry),
                "D" => groups.diaries.push(entry),
                "F" => groups.families.push(entry),
                "O" => groups.organisations.push(entry),
                "P" => groups.persons.push(entry),
                _ => {}
            }
        }
        groups
    }

    /// Creator names from the origination block.
    pub fn creators(&self) -> Vec<String> {
        lookup_array(self.source, "origination.creator")
            .iter()
            .filter_map(|creator| {
                let joined = collect_values(creator, "name").join(", ");
                (!joined.is_empty()).then_some(joined)
            })
            .collect()
    }

    /// Acquisition notes.
    pub fn acquisition(&self) -> Vec<String> {
        lookup_array(self.source, "acquisition")
            .iter()
            .filter_map(|entry| lookup_str(entry, "description.value"))
            .map(str::to_string)
            .collect()
    }

    pub fn legal_status(&self) -> Option<&'a str> {
        lookup_str(self.source, "legal.status")
    }

    pub fn closure_status(&self) -> Option<&'a str> {
        lookup_str(self.source, "availability.closure.label.value")
    }

    pub fn access_condition(&self) -> Option<&'a str> {
        lookup_str(self.source, "availability.access.condition.value")
    }

    pub fn languages(&self) -> Vec<String> {
        collect_values(self.source, "language")
    }

    /// Accession years from the accruals date blob.
    pub fn accumulation_dates(&self) -> Vec<String> {
        lookup_str(self.source, "accruals.date.value")
            .map(markup::accession_years)
            .unwrap_or_default()
    }

    /// Linked manifestations (title + url required), sorted by title.
    pub fn manifestations(&self) -> Vec<Manifestation> {
        let mut entries: Vec<Manifestation> = lookup_array(self.source, "manifestations")
            .iter()
            .filter_map(|item| {
                let url = lookup_str(item, "url")?;
                lookup(item, "title")?;
                Some(Manifestation {
                    title: collect_values(item, "title").join(", "),
                    url: url.to_string(),
                    nra: typed_value(
                        lookup_array(item, "identifier"),
                        "NRA catalogue reference (2nd part)",
                    )
                    .map(str::to_string),
                })
            })
            .collect();
        entries.sort_by(|a, b| a.title.cmp(&b.title));
        entries
    }

    // ── hierarchy ──────────────────────────────────────────────────

    /// Every hierarchy chain attached to the record. Rungs without an
    /// id are dropped; level names resolve against the table chosen
    /// by group membership.
    pub fn hierarchies(&self) -> Vec<Vec<HierarchyLevel>> {
        let tna = self.is_tna();
        lookup_array(self.source, "@hierarchy")
            .iter()
            .map(|chain| {
                chain
                    .as_array()
                    .map(Vec::as_slice)
                    .unwrap_or(&[])
                    .iter()
                    .filter_map(|rung| self.hierarchy_level(rung, tna))
                    .collect()
            })
            .collect()
    }

    fn hierarchy_level(&self, rung: &Value, tna: bool) -> Option<HierarchyLevel> {
        let id = lookup_str(rung, "@admin.id")?;
        let level_code = lookup(rung, "level.code").and_then(Value::as_u64);
        let identifiers = lookup_array(rung, "identifier");
        Some(HierarchyLevel {
            id: id.to_string(),
            title: lookup_str(rung, "summary.title").unwrap_or("").to_string(),
            level_code,
            level_name: level_code
                .and_then(|code| level_name(code, tna))
                .map(str::to_string),
            identifier: typed_value(identifiers, "reference number")
                .or_else(|| primary_value(identifiers))
                .map(str::to_string),
        })
    }
}

/// De-wrap a rich-text description value: scope-and-content span,
/// else wrapper/emph spans, else the raw value untouched.
fn strip_description_markup(value: &str) -> String {
    markup::scope_and_content(value)
        .or_else(|| markup::wrapper_spans(value))
        .unwrap_or_else(|| value.to_string())
}
