//! casebridge-connector - Salesforce support-case import pipeline
//!
//! Discovers, fetches, and imports Salesforce support cases into a host
//! product-management platform's record model. The host platform is
//! consumed only through the narrow interfaces in [`host`]; everything
//! else here is the pipeline: filter discovery, dynamic query
//! construction, authenticated remote calls, response normalization,
//! candidate listing, and the final field-mapped import.
//!
//! One filter-driven query per invocation, one record per import action,
//! no local persistence.

pub mod config;
pub mod connector;
pub mod error;
pub mod host;
pub mod models;
pub mod services;

pub use config::{ConnectorConfig, QueryStrategy};
pub use connector::CaseConnector;
pub use error::{Error, Result};
