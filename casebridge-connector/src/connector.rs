//! Connector facade
//!
//! Wires configuration and host collaborators into the pipeline and
//! exposes exactly the five host-facing operations the host's
//! registration mechanism binds to its lifecycle hooks: declare_filters,
//! resolve_filter_values, list_candidates, render, import_record.

use crate::config::ConnectorConfig;
use crate::error::Result;
use crate::host::{CredentialProvider, HostRecord, RecordStore};
use crate::models::{CandidateRecord, Filter, FilterSelection, FilterValue};
use crate::services::candidate_lister::CandidateLister;
use crate::services::filter_catalog::FilterCatalog;
use crate::services::import_handler::ImportHandler;
use crate::services::query_builder::QueryBuilder;
use crate::services::record_renderer;
use crate::services::record_transformer::RecordTransformer;
use crate::services::salesforce_client::SalesforceClient;
use std::sync::Arc;

pub struct CaseConnector {
    client: Arc<SalesforceClient>,
    catalog: FilterCatalog,
    lister: CandidateLister,
    importer: ImportHandler,
}

impl CaseConnector {
    /// Assemble the pipeline from resolved configuration and host collaborators
    pub fn new(
        config: ConnectorConfig,
        credentials: Arc<dyn CredentialProvider>,
        store: Arc<dyn RecordStore>,
    ) -> Result<Self> {
        let client = Arc::new(SalesforceClient::new(&config, credentials)?);
        let transformer = RecordTransformer::new(client.instance_url());
        let lister = CandidateLister::new(
            Arc::clone(&client),
            QueryBuilder::new(config.strategy),
            transformer,
        );
        let importer = ImportHandler::new(Arc::clone(&client), store);

        Ok(Self {
            client,
            catalog: FilterCatalog::new(config.strategy),
            lister,
            importer,
        })
    }

    /// Filters the host should present
    pub fn declare_filters(&self) -> Vec<Filter> {
        self.catalog.declare_filters()
    }

    /// Candidate values for one filter
    pub async fn resolve_filter_values(&self, filter_name: &str) -> Result<Vec<FilterValue>> {
        self.catalog
            .resolve_filter_values(&self.client, filter_name)
            .await
    }

    /// Importable cases for the current filter selection
    pub async fn list_candidates(
        &self,
        selection: &FilterSelection,
    ) -> Result<Vec<CandidateRecord>> {
        self.lister.list_candidates(selection).await
    }

    /// Read-only HTML summary of one candidate
    pub fn render(&self, record: &CandidateRecord) -> String {
        record_renderer::render(record)
    }

    /// Import one candidate into the host target record
    pub async fn import_record(
        &self,
        candidate: &CandidateRecord,
        target: &mut HostRecord,
    ) -> Result<()> {
        self.importer.import_record(candidate, target).await
    }
}
