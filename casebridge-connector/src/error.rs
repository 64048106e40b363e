//! Error types for the casebridge connector
//!
//! Everything except the import step's fallback description fetch
//! propagates unmodified to the host, which owns user-facing
//! presentation. There are no automatic retries anywhere in this crate;
//! the credential layer's cached-retry behavior is host-side.

use thiserror::Error;

/// Result type for connector operations
pub type Result<T> = std::result::Result<T, Error>;

/// Connector error taxonomy
#[derive(Debug, Error)]
pub enum Error {
    /// Required account configuration absent; the user must fix settings
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    /// Remote service rejected the credential (HTTP 401); the host should
    /// trigger its re-authentication flow for `service`
    #[error("Authentication with {service} failed; re-authentication required")]
    Authentication { service: &'static str },

    /// The host could not produce a credential at all (user cancelled,
    /// account not linked)
    #[error("Credential acquisition failed: {0}")]
    AuthUnavailable(String),

    /// Network-level failure reaching the remote service; the message
    /// carries user-actionable remediation steps
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// Remote API returned a non-success status other than 401
    #[error("Remote API error {status}: {body}")]
    RemoteApi { status: u16, body: String },

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Host persistence call failed while saving the target record
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// casebridge-common error
    #[error("Common error: {0}")]
    Common(#[from] casebridge_common::Error),
}
