//! SOQL query construction
//!
//! Two strategies share one pipeline: a saved view's canonical query text
//! (describe call, then used verbatim) or a fixed template keyed by a
//! static category value. A missing filter value means "no query" —
//! callers treat that as an empty candidate list, never an error.

use crate::config::QueryStrategy;
use crate::error::Result;
use crate::models::FilterSelection;
use crate::services::filter_catalog::{CATEGORY_FILTER, LIST_VIEW_FILTER};
use crate::services::salesforce_client::SalesforceClient;

pub struct QueryBuilder {
    strategy: QueryStrategy,
}

impl QueryBuilder {
    pub fn new(strategy: QueryStrategy) -> Self {
        Self { strategy }
    }

    /// Build the SOQL for the current selection
    ///
    /// `Ok(None)` when the required filter value is absent or resolves to
    /// nothing usable.
    pub async fn build(
        &self,
        client: &SalesforceClient,
        selection: &FilterSelection,
    ) -> Result<Option<String>> {
        match self.strategy {
            QueryStrategy::SavedView => self.build_from_saved_view(client, selection).await,
            QueryStrategy::StaticCategory => Ok(selection
                .get(CATEGORY_FILTER)
                .and_then(category_query)
                .map(|q| normalize_whitespace(&q))),
        }
    }

    async fn build_from_saved_view(
        &self,
        client: &SalesforceClient,
        selection: &FilterSelection,
    ) -> Result<Option<String>> {
        let Some(list_view_id) = selection.get(LIST_VIEW_FILTER) else {
            return Ok(None);
        };

        let describe = client.describe_list_view(list_view_id).await?;

        Ok(describe
            .query
            .as_deref()
            .map(normalize_whitespace)
            .filter(|q| !q.is_empty()))
    }
}

fn category_query(category: &str) -> Option<String> {
    let is_closed = match category {
        "open" => "false",
        "closed" => "true",
        other => {
            tracing::warn!(category = %other, "Unknown case category; treating as no query");
            return None;
        }
    };

    Some(format!(
        "SELECT Id, CaseNumber, Subject, Description, Status, Priority \
         FROM Case WHERE IsClosed = {} ORDER BY LastModifiedDate DESC",
        is_closed
    ))
}

/// Collapse consecutive whitespace to single spaces
fn normalize_whitespace(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}
