//! Raw Salesforce REST wire shapes
//!
//! Permissive by design: every non-key field is optional, and validation
//! happens once at the transformer boundary rather than at each call
//! site.

use serde::Deserialize;

/// Paginated query envelope
///
/// Only the first page is consumed; `done == false` signals further pages
/// that this pipeline does not request.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResult<T> {
    pub done: bool,
    #[serde(rename = "totalSize")]
    pub total_size: i64,
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}

/// Record-level attributes block carried on every object row
#[derive(Debug, Clone, Deserialize)]
pub struct RawAttributes {
    #[serde(rename = "type")]
    pub object_type: Option<String>,
    /// Absolute reference path of the row's detail resource
    pub url: Option<String>,
}

/// One raw Case row as returned by the query endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RawCaseRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "CaseNumber")]
    pub case_number: Option<String>,
    #[serde(rename = "Subject")]
    pub subject: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "Priority")]
    pub priority: Option<String>,
    pub attributes: Option<RawAttributes>,
}

/// One saved-view row from the ListView enumeration query
#[derive(Debug, Clone, Deserialize)]
pub struct ListViewRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: Option<String>,
}

/// Saved-view describe payload; only the canonical query text is consumed
#[derive(Debug, Clone, Deserialize)]
pub struct ListViewDescribe {
    pub query: Option<String>,
}
