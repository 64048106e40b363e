//! Raw case to candidate record mapping

use crate::models::{CandidateRecord, RawCaseRecord};

/// Pure mapping from the raw wire shape to the normalized candidate shape
///
/// Deterministic and side-effect free; missing optional fields stay
/// absent rather than becoming errors.
pub struct RecordTransformer {
    instance_url: String,
}

impl RecordTransformer {
    pub fn new(instance_url: impl Into<String>) -> Self {
        Self {
            instance_url: instance_url.into(),
        }
    }

    /// Map one raw case row
    pub fn to_candidate(&self, raw: &RawCaseRecord) -> CandidateRecord {
        let case_number = raw.case_number.clone().unwrap_or_else(|| raw.id.clone());
        let name = raw
            .subject
            .clone()
            .unwrap_or_else(|| format!("Case {}", case_number));

        CandidateRecord {
            unique_id: raw.id.clone(),
            name,
            url: self.deep_link(&raw.id),
            case_number,
            description: raw.description.clone(),
            status: raw.status.clone(),
            priority: raw.priority.clone(),
            detail_url: raw.attributes.as_ref().and_then(|a| a.url.clone()),
        }
    }

    /// Deep link opening the case in the Salesforce web UI
    pub fn deep_link(&self, case_id: &str) -> String {
        format!("{}/lightning/r/Case/{}/view", self.instance_url, case_id)
    }
}
