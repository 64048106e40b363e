//! Filter declaration and value resolution
//!
//! Permissive by design: an unrecognized filter name resolves to an empty
//! list so callers can probe unknown names safely.

use crate::config::QueryStrategy;
use crate::error::Result;
use crate::models::{Filter, FilterKind, FilterValue, ListViewRecord};
use crate::services::salesforce_client::SalesforceClient;

/// Saved-view selector filter name
pub const LIST_VIEW_FILTER: &str = "list_view_id";
/// Static category filter name
pub const CATEGORY_FILTER: &str = "category";

/// SOQL enumerating Case saved views
const LIST_VIEW_QUERY: &str =
    "SELECT Id, Name FROM ListView WHERE SobjectType = 'Case' ORDER BY Name";

pub struct FilterCatalog {
    strategy: QueryStrategy,
}

impl FilterCatalog {
    pub fn new(strategy: QueryStrategy) -> Self {
        Self { strategy }
    }

    /// Filters the host should present for the configured strategy
    pub fn declare_filters(&self) -> Vec<Filter> {
        match self.strategy {
            QueryStrategy::SavedView => vec![Filter {
                name: LIST_VIEW_FILTER.to_string(),
                title: "List view".to_string(),
                required: true,
                kind: FilterKind::Select,
            }],
            QueryStrategy::StaticCategory => vec![Filter {
                name: CATEGORY_FILTER.to_string(),
                title: "Case status".to_string(),
                required: true,
                kind: FilterKind::Select,
            }],
        }
    }

    /// Candidate values for one filter
    pub async fn resolve_filter_values(
        &self,
        client: &SalesforceClient,
        filter_name: &str,
    ) -> Result<Vec<FilterValue>> {
        match (self.strategy, filter_name) {
            (QueryStrategy::SavedView, LIST_VIEW_FILTER) => self.resolve_list_views(client).await,
            (QueryStrategy::StaticCategory, CATEGORY_FILTER) => Ok(vec![
                FilterValue {
                    text: "Open cases".to_string(),
                    value: "open".to_string(),
                },
                FilterValue {
                    text: "Closed cases".to_string(),
                    value: "closed".to_string(),
                },
            ]),
            _ => Ok(Vec::new()),
        }
    }

    async fn resolve_list_views(&self, client: &SalesforceClient) -> Result<Vec<FilterValue>> {
        let result = client.query::<ListViewRecord>(LIST_VIEW_QUERY).await?;

        tracing::debug!(count = result.records.len(), "Resolved Case saved views");

        Ok(result
            .records
            .into_iter()
            .map(|view| FilterValue {
                text: view.name.clone().unwrap_or_else(|| view.id.clone()),
                value: view.id,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectorConfig;
    use crate::host::StaticCredentialProvider;
    use std::sync::Arc;

    fn client() -> SalesforceClient {
        let config = ConnectorConfig {
            domain: "acme".to_string(),
            instance_url: None,
            strategy: QueryStrategy::StaticCategory,
        };
        SalesforceClient::new(&config, Arc::new(StaticCredentialProvider::new("tok"))).unwrap()
    }

    #[test]
    fn test_saved_view_declares_list_view_filter() {
        let filters = FilterCatalog::new(QueryStrategy::SavedView).declare_filters();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].name, LIST_VIEW_FILTER);
        assert!(filters[0].required);
        assert_eq!(filters[0].kind, FilterKind::Select);
    }

    #[test]
    fn test_static_declares_category_filter() {
        let filters = FilterCatalog::new(QueryStrategy::StaticCategory).declare_filters();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].name, CATEGORY_FILTER);
    }

    #[tokio::test]
    async fn test_static_category_values_are_fixed() {
        let catalog = FilterCatalog::new(QueryStrategy::StaticCategory);
        let values = catalog
            .resolve_filter_values(&client(), CATEGORY_FILTER)
            .await
            .unwrap();
        assert_eq!(
            values,
            vec![
                FilterValue {
                    text: "Open cases".to_string(),
                    value: "open".to_string()
                },
                FilterValue {
                    text: "Closed cases".to_string(),
                    value: "closed".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_filter_name_resolves_empty() {
        let catalog = FilterCatalog::new(QueryStrategy::StaticCategory);
        let values = catalog
            .resolve_filter_values(&client(), "nonexistent")
            .await
            .unwrap();
        assert!(values.is_empty());
    }
}
