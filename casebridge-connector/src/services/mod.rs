//! Pipeline component implementations
//!
//! Leaf to root: auth gateway → Salesforce client → query builder /
//! filter catalog → candidate lister → record transformer → record
//! renderer → import handler.

pub mod auth_gateway;
pub mod candidate_lister;
pub mod filter_catalog;
pub mod import_handler;
pub mod query_builder;
pub mod record_renderer;
pub mod record_transformer;
pub mod salesforce_client;

pub use auth_gateway::AuthGateway;
pub use candidate_lister::CandidateLister;
pub use filter_catalog::{FilterCatalog, CATEGORY_FILTER, LIST_VIEW_FILTER};
pub use import_handler::ImportHandler;
pub use query_builder::QueryBuilder;
pub use record_transformer::RecordTransformer;
pub use salesforce_client::{SalesforceClient, API_BASE_PATH, SERVICE_ID};
