//! Detail assembler: one fetched document → a full-fidelity detail
//! record of the matching subtype.

use api_core::{ApiError, Result};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::path::lookup;
use crate::source::SourceRecord;
use crate::types::{
    AgentGroups, ContactInfo, HeldBy, HierarchyLevel, Manifestation, NameParts,
};

/// The normalized detail shapes, dispatched on the upstream type code.
/// Serialized with a lowercase `type` tag so every variant carries the
/// common `{type, id, source_url}` header.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DetailRecord {
    Record(RecordDetail),
    Aggregation(AggregationDetail),
    Archive(ArchiveDetail),
    Creator(CreatorDetail),
    Person(PersonDetail),
}

/// A single catalogued record.
#[derive(Debug, Clone, Serialize)]
pub struct RecordDetail {
    pub id: String,
    pub reference: Option<String>,
    pub former_reference: Option<String>,
    pub title: String,
    pub description: String,
    pub date: Option<String>,
    pub is_digitised: bool,
    pub held_by: Option<HeldBy>,
    pub legal_status: Option<String>,
    pub closure_status: Option<String>,
    pub access_condition: Option<String>,
    pub languages: Vec<String>,
    pub hierarchy: Vec<HierarchyLevel>,
    pub source_url: String,
}

/// A series/fonds-level aggregation of records.
#[derive(Debug, Clone, Serialize)]
pub struct AggregationDetail {
    pub id: String,
    pub reference: Option<String>,
    pub title: String,
    pub description: String,
    pub physical_description: Option<String>,
    pub administrative_background: Option<String>,
    pub arrangement: Option<String>,
    pub date: Option<String>,
    pub is_digitised: bool,
    pub held_by: Option<HeldBy>,
    pub creators: Vec<String>,
    pub acquisition: Vec<String>,
    pub unpublished_finding_aids: Option<String>,
    pub legal_status: Option<String>,
    pub closure_status: Option<String>,
    pub access_condition: Option<String>,
    pub languages: Vec<String>,
    pub hierarchy: Vec<HierarchyLevel>,
    pub source_url: String,
}

/// An archive (holding institution).
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveDetail {
    pub id: String,
    pub name: String,
    pub archon_code: Option<String>,
    pub opening_times: Option<String>,
    pub disabled_access: Option<String>,
    pub information: Option<String>,
    pub fee: Option<String>,
    pub appointment: Option<String>,
    pub places: Vec<String>,
    pub contact_info: Option<ContactInfo>,
    pub agents: AgentGroups,
    pub manifestations: Vec<Manifestation>,
    pub accumulation_dates: Vec<String>,
    pub source_url: String,
}

/// A non-person record creator (corporate body, family, business).
#[derive(Debug, Clone, Serialize)]
pub struct CreatorDetail {
    pub id: String,
    pub name: String,
    pub date: Option<String>,
    pub places: Vec<String>,
    pub identifier: Option<String>,
    pub history: Option<String>,
    pub source_url: String,
}

/// A person creator, with name parts and biographical fields.
#[derive(Debug, Clone, Serialize)]
pub struct PersonDetail {
    pub id: String,
    pub name: String,
    pub name_parts: NameParts,
    pub date: Option<String>,
    pub gender: Option<String>,
    pub identifier: Option<String>,
    pub functions: Option<String>,
    pub history: Option<String>,
    pub biography: Option<String>,
    pub source_url: String,
}

/// Unwrap the fetch envelope (`metadata[0]._source`) and dispatch on
/// the declared type code. An unrecognised code is an error, never a
/// guessed partial record.
pub fn assemble_detail(raw: &Value, source_url: &Url) -> Result<DetailRecord> {
    let source = lookup(raw, "metadata.0._source").ok_or_else(|| ApiError::MalformedResponse {
        url: source_url.to_string(),
    })?;
    let record = SourceRecord::new(source);
    let source_url = source_url.to_string();

    match record.base_type() {
        Some("record") => Ok(DetailRecord::Record(record_detail(&record, source_url))),
        Some("aggregation") => Ok(DetailRecord::Aggregation(aggregation_detail(
            &record, source_url,
        ))),
        Some("archive") | Some("repository") => {
            Ok(DetailRecord::Archive(archive_detail(&record, source_url)))
        }
        Some("agent") if record.actual_type() == Some("person") => {
            Ok(DetailRecord::Person(person_detail(&record, source_url)))
        }
        Some("agent") => Ok(DetailRecord::Creator(creator_detail(&record, source_url))),
        other => Err(ApiError::UnrecognizedType {
            kind: other.unwrap_or("<absent>").to_string(),
        }),
    }
}

fn record_detail(record: &SourceRecord<'_>, source_url: String) -> RecordDetail {
    RecordDetail {
        id: record.id(),
        reference: record.identifier(),
        former_reference: record.former_identifier().map(str::to_string),
        title: record.title(),
        description: record.description(),
        date: record.date_range(),
        is_digitised: record.is_digitised(),
        held_by: record.held_by(),
        legal_status: record.legal_status().map(str::to_string),
        closure_status: record.closure_status().map(str::to_string),
        access_condition: record.access_condition().map(str::to_string),
        languages: record.languages(),
        hierarchy: record.hierarchies().into_iter().next().unwrap_or_default(),
        source_url,
    }
}

fn aggregation_detail(record: &SourceRecord<'_>, source_url: String) -> AggregationDetail {
    AggregationDetail {
        id: record.id(),
        reference: record.identifier(),
        title: record.title(),
        description: record.description(),
        physical_description: record.physical_description().map(str::to_string),
        administrative_background: record.administrative_background(),
        arrangement: record.arrangement(),
        date: record.date_range(),
        is_digitised: record.is_digitised(),
        held_by: record.held_by(),
        creators: record.creators(),
        acquisition: record.acquisition(),
        unpublished_finding_aids: record.unpublished_finding_aids(),
        legal_status: record.legal_status().map(str::to_string),
        closure_status: record.closure_status().map(str::to_string),
        access_condition: record.access_condition().map(str::to_string),
        languages: record.languages(),
        hierarchy: record.hierarchies().into_iter().next().unwrap_or_default(),
        source_url,
    }
}

fn archive_detail(record: &SourceRecord<'_>, source_url: String) -> ArchiveDetail {
    ArchiveDetail {
        id: record.id(),
        name: record.title(),
        archon_code: record.reference_number().map(str::to_string),
        opening_times: record.place_opening_times(),
        disabled_access: record.place_disabled_access(),
        information: record.place_comments(),
        fee: record.place_fee(),
        appointment: record.place_appointment(),
        places: record.places(),
        contact_info: record.contact_info(),
        agents: record.agents(),
        manifestations: record.manifestations(),
        accumulation_dates: record.accumulation_dates(),
        source_url,
    }
}

fn creator_detail(record: &SourceRecord<'_>, source_url: String) -> CreatorDetail {
    CreatorDetail {
        id: record.id(),
        name: record.title(),
        date: record.date(),
        places: record.places(),
        identifier: record.identifier(),
        history: record.functions(),
        source_url,
    }
}

fn person_detail(record: &SourceRecord<'_>, source_url: String) -> PersonDetail {
    PersonDetail {
        id: record.id(),
        name: record.name().unwrap_or_else(|| record.title()),
        name_parts: record.name_parts(),
        date: record.date(),
        gender: record.gender(),
        identifier: record.identifier(),
        functions: record.functions(),
        history: record.functions(),
        biography: record.biography(),
        source_url,
    }
}
