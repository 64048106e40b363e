//! Final import execution
//!
//! Resolves the description content (inline text, else one fallback
//! detail fetch, else none), composes the rich-text body, writes it into
//! the host record, and persists through the host's store. Only the
//! persistence call is fatal; a failed fallback fetch degrades the import
//! to the deep link alone.

use crate::error::{Error, Result};
use crate::host::{HostRecord, RecordStore};
use crate::models::{CandidateRecord, RawCaseRecord};
use crate::services::record_renderer::escape_html;
use crate::services::salesforce_client::SalesforceClient;
use std::sync::Arc;

pub struct ImportHandler {
    client: Arc<SalesforceClient>,
    store: Arc<dyn RecordStore>,
}

impl ImportHandler {
    pub fn new(client: Arc<SalesforceClient>, store: Arc<dyn RecordStore>) -> Self {
        Self { client, store }
    }

    /// Import one candidate into the host target record
    ///
    /// Idempotent at the target: re-running overwrites the description,
    /// it never appends.
    pub async fn import_record(
        &self,
        candidate: &CandidateRecord,
        target: &mut HostRecord,
    ) -> Result<()> {
        let description = self.resolve_description(candidate).await;
        target.description = Some(compose_content(description.as_deref(), candidate));

        self.store
            .persist(target)
            .await
            .map_err(|e| Error::Persistence(e.to_string()))?;

        tracing::info!(
            case_number = %candidate.case_number,
            record = %target.reference_num,
            "Imported case into host record"
        );

        Ok(())
    }

    /// Decide the description content: inline text, one fallback fetch, or none
    ///
    /// Fallback failures are logged and swallowed here; they never abort
    /// the import.
    pub async fn resolve_description(&self, candidate: &CandidateRecord) -> Option<String> {
        if let Some(text) = candidate.description.as_deref() {
            return Some(description_html(text));
        }

        let reference_path = candidate.detail_url.as_deref()?;

        match self.client.fetch_detail::<RawCaseRecord>(reference_path).await {
            Ok(detail) => detail.description.as_deref().map(description_html),
            Err(e) => {
                tracing::warn!(
                    case_number = %candidate.case_number,
                    error = %e,
                    "Description fetch failed; importing with deep link only"
                );
                None
            }
        }
    }
}

/// Escape the plain-text description and convert line endings to breaks
fn description_html(text: &str) -> String {
    escape_html(text)
        .replace("\r\n", "<br>")
        .replace('\r', "<br>")
        .replace('\n', "<br>")
}

/// Final rich-text content: description (if any) plus the deep-link paragraph
fn compose_content(description: Option<&str>, candidate: &CandidateRecord) -> String {
    let link = format!(
        r#"<p><a href="{}">View case {} in Salesforce</a></p>"#,
        candidate.url,
        escape_html(&candidate.case_number)
    );

    match description {
        Some(text) if !text.is_empty() => format!("{}\n{}", text, link),
        _ => link,
    }
}
