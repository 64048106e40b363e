//! Candidate listing orchestration
//!
//! Build the query for the current selection, run it, map each raw row
//! through the transformer. Only the first result page is consumed;
//! additional pages signaled by `done == false` are deliberately not
//! requested.

use crate::error::Result;
use crate::models::{CandidateRecord, FilterSelection, QueryResult, RawCaseRecord};
use crate::services::query_builder::QueryBuilder;
use crate::services::record_transformer::RecordTransformer;
use crate::services::salesforce_client::SalesforceClient;
use std::sync::Arc;

pub struct CandidateLister {
    client: Arc<SalesforceClient>,
    query_builder: QueryBuilder,
    transformer: RecordTransformer,
}

impl CandidateLister {
    pub fn new(
        client: Arc<SalesforceClient>,
        query_builder: QueryBuilder,
        transformer: RecordTransformer,
    ) -> Self {
        Self {
            client,
            query_builder,
            transformer,
        }
    }

    /// List importable cases for the current filter selection
    ///
    /// No buildable query (missing required filter value) yields an empty
    /// list without any remote call.
    pub async fn list_candidates(
        &self,
        selection: &FilterSelection,
    ) -> Result<Vec<CandidateRecord>> {
        let Some(soql) = self.query_builder.build(&self.client, selection).await? else {
            tracing::debug!("No query buildable for selection; returning empty candidate list");
            return Ok(Vec::new());
        };

        let result: QueryResult<RawCaseRecord> = self.client.query(&soql).await?;

        if !result.done {
            tracing::debug!(
                fetched = result.records.len(),
                total = result.total_size,
                "Result set larger than one page; remaining pages not fetched"
            );
        }

        Ok(result
            .records
            .iter()
            .map(|raw| self.transformer.to_candidate(raw))
            .collect())
    }
}
