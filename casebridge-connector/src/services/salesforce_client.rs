//! Salesforce REST API client
//!
//! Issues authenticated GETs against the versioned REST root and
//! classifies each outcome into the connector error taxonomy. No retries
//! happen here; the credential layer's cached-retry behavior is the only
//! retry anywhere in the pipeline.

use crate::config::ConnectorConfig;
use crate::error::{Error, Result};
use crate::host::CredentialProvider;
use crate::models::{ListViewDescribe, QueryResult};
use crate::services::auth_gateway::AuthGateway;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Remote service identifier, used to tag authentication failures so the
/// host can trigger its re-auth UI for the right account
pub const SERVICE_ID: &str = "salesforce";

/// Versioned REST root that relative paths are resolved against
pub const API_BASE_PATH: &str = "/services/data/v59.0";

const USER_AGENT: &str = concat!("casebridge/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Salesforce REST client
pub struct SalesforceClient {
    http_client: reqwest::Client,
    instance_url: String,
    auth: AuthGateway,
}

impl SalesforceClient {
    /// Build a client from resolved configuration
    ///
    /// Fails with `ConfigurationMissing` before any network I/O when the
    /// subdomain is absent.
    pub fn new(
        config: &ConnectorConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self> {
        if config.domain.trim().is_empty() {
            return Err(crate::config::missing_domain_error());
        }

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Connectivity(e.to_string()))?;

        Ok(Self {
            http_client,
            instance_url: config.instance_url(),
            auth: AuthGateway::new(credentials),
        })
    }

    /// Instance root URL, e.g. `https://acme.my.salesforce.com`
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// GET a path under the default API base and parse the JSON body
    pub async fn request(&self, path: &str) -> Result<serde_json::Value> {
        self.request_with_base(API_BASE_PATH, path).await
    }

    /// GET with an explicit base path
    ///
    /// Pass an empty base for absolute reference paths the API itself
    /// handed back (record `attributes.url`).
    pub async fn request_with_base(
        &self,
        base_path: &str,
        path: &str,
    ) -> Result<serde_json::Value> {
        let credential = self.auth.obtain().await?;
        let url = format!("{}{}{}", self.instance_url, base_path, path);

        tracing::debug!(url = %url, "Issuing Salesforce GET");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&credential.token)
            .send()
            .await
            .map_err(|e| Error::Connectivity(connectivity_message(&e)))?;

        let status = response.status();

        if status.as_u16() == 401 {
            return Err(Error::Authentication {
                service: SERVICE_ID,
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteApi {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(|e| Error::Parse(e.to_string()))
    }

    /// Execute a SOQL query; the query text is percent-encoded here
    pub async fn query<T: DeserializeOwned>(&self, soql: &str) -> Result<QueryResult<T>> {
        let value = self
            .request(&format!("/query?q={}", urlencoding::encode(soql)))
            .await?;
        serde_json::from_value(value).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Fetch describe metadata for one Case saved view
    pub async fn describe_list_view(&self, list_view_id: &str) -> Result<ListViewDescribe> {
        let value = self
            .request(&format!("/sobjects/Case/listviews/{}/describe", list_view_id))
            .await?;
        serde_json::from_value(value).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Fetch one detail resource by its absolute reference path
    pub async fn fetch_detail<T: DeserializeOwned>(&self, reference_path: &str) -> Result<T> {
        let value = self.request_with_base("", reference_path).await?;
        serde_json::from_value(value).map_err(|e| Error::Parse(e.to_string()))
    }
}

/// User-actionable explanation for a transport-level failure
fn connectivity_message(err: &reqwest::Error) -> String {
    format!(
        "Could not reach Salesforce: {}. Check that the configured subdomain matches \
         your account's My Domain, that this machine can reach the instance \
         (DNS, proxy, TLS interception), that the connected app's IP allow-list \
         permits this host, and that your Salesforce session has not expired.",
        err
    )
}
