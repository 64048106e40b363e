//! Credential acquisition gateway
//!
//! Thin wrapper over the host's credential provider. Always requests the
//! cached-credential path; the host owns the retry-then-interactive flow
//! and any credential caching.

use crate::error::{Error, Result};
use crate::host::{Credential, CredentialProvider};
use crate::services::salesforce_client::SERVICE_ID;
use std::sync::Arc;

pub struct AuthGateway {
    provider: Arc<dyn CredentialProvider>,
}

impl AuthGateway {
    pub fn new(provider: Arc<dyn CredentialProvider>) -> Self {
        Self { provider }
    }

    /// Obtain a bearer credential for the remote service
    ///
    /// Host failures (user cancelled, account not linked) surface as
    /// `AuthUnavailable` and propagate unmasked.
    pub async fn obtain(&self) -> Result<Credential> {
        self.provider
            .obtain_credential(SERVICE_ID, true)
            .await
            .map_err(|e| Error::AuthUnavailable(e.to_string()))
    }
}
