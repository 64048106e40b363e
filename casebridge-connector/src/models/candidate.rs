//! Normalized candidate record surfaced to the host list UI

use serde::Serialize;

/// A remote case surfaced as importable, not yet committed into the host
///
/// Instances are ephemeral: created per listing call, consumed for
/// display or for one import call, never cached or mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRecord {
    /// Remote primary key; stable across listing calls, used by the host
    /// for de-duplication
    pub unique_id: String,
    /// Display name (case subject, with fallbacks)
    pub name: String,
    /// Deep link opening the case in the Salesforce web UI
    pub url: String,
    /// Human-facing case number
    pub case_number: String,
    /// Inline description, when the listing query carried one
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    /// Reference path used for the lazy description fetch
    pub detail_url: Option<String>,
}
