// Archival Search Aggregation API
//
// One consistent schema over three upstream vocabularies: the Rosetta
// records search/fetch endpoints and the Wagtail CMS pages API.
// Normalization lives in the client crates; this crate wires them to
// HTTP.

pub mod config;
pub mod server;

pub use config::Config;
