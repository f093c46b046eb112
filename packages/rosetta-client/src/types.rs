//! Normalized shapes served to callers.
//!
//! These are the stable vocabulary clients depend on instead of the
//! upstream dialects. Optional fields serialize as explicit `null` so
//! the shape never varies with upstream completeness.

use serde::Serialize;

/// Closed set of category tags for a normalized result. Derived from
/// the upstream type code with the `repository`→`archive` and
/// `agent`→`creator`/`person` remaps applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Record,
    Aggregation,
    Archive,
    Creator,
    Person,
}

/// One search hit. `id` is always present (sentinel `"UNKNOWN"` when
/// the upstream omits it); everything else defaults explicitly.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: RecordType,
    pub id: String,
    pub title: String,
    pub description: String,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub reference: Option<String>,
    pub held_by: Option<HeldBy>,
}

/// The repository holding a record. Only emitted when the upstream
/// supplies both halves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeldBy {
    pub id: String,
    pub name: String,
}

/// Decomposed person name from the primary name entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameParts {
    pub prefix: Option<String>,
    pub forenames: Vec<String>,
    pub surname: Option<String>,
    pub title: Option<String>,
    /// "also known as" variants, when listed.
    pub alternative_names: Option<String>,
}

impl NameParts {
    /// Full display name: prefix, forenames, surname, space-joined.
    pub fn full_name(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        if let Some(prefix) = &self.prefix {
            parts.push(prefix.clone());
        }
        if !self.forenames.is_empty() {
            parts.push(self.forenames.join(" "));
        }
        if let Some(surname) = &self.surname {
            parts.push(surname.clone());
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// Contact details mined out of an archive's ephemera fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub address_line_1: Option<String>,
    pub town: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub map_url: Option<String>,
    pub url: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
}

/// An agent known to an archive (a depositor, creator or subject).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub places: Vec<String>,
}

/// Agents grouped by their Archon category code.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentGroups {
    pub businesses: Vec<Agent>,
    pub diaries: Vec<Agent>,
    pub families: Vec<Agent>,
    pub organisations: Vec<Agent>,
    pub persons: Vec<Agent>,
}

/// A linked manifestation (catalogue entry held elsewhere).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifestation {
    pub title: String,
    pub url: String,
    /// NRA catalogue reference (2nd part), when present.
    pub nra: Option<String>,
}

/// One rung of an archival hierarchy chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyLevel {
    pub id: String,
    pub title: String,
    pub level_code: Option<u64>,
    pub level_name: Option<String>,
    pub identifier: Option<String>,
}
