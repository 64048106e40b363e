//! Connector configuration resolution
//!
//! Resolves the per-account settings with ENV → TOML priority. The
//! Salesforce subdomain is required; its absence is detected here, before
//! any client is constructed or any network call attempted.

use crate::error::{Error, Result};
use casebridge_common::config::TomlConfig;
use tracing::warn;

/// Environment variable overriding the Salesforce subdomain
pub const DOMAIN_ENV_VAR: &str = "CASEBRIDGE_SALESFORCE_DOMAIN";
/// Environment variable overriding the query strategy
pub const STRATEGY_ENV_VAR: &str = "CASEBRIDGE_QUERY_STRATEGY";
/// Environment variable overriding the full instance URL (sandboxes)
pub const INSTANCE_URL_ENV_VAR: &str = "CASEBRIDGE_INSTANCE_URL";

/// Query construction strategy
///
/// A closed set: both variants share one pipeline, selected here by
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStrategy {
    /// Use a server-stored saved view's canonical query text
    SavedView,
    /// Interpolate a static category value into a fixed query template
    StaticCategory,
}

impl QueryStrategy {
    /// Parse the configuration string form
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim() {
            "saved_view" => Ok(QueryStrategy::SavedView),
            "static_category" => Ok(QueryStrategy::StaticCategory),
            other => Err(Error::ConfigurationMissing(format!(
                "Unknown query strategy '{}'; expected \"saved_view\" or \"static_category\"",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStrategy::SavedView => "saved_view",
            QueryStrategy::StaticCategory => "static_category",
        }
    }
}

/// Resolved connector configuration
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    /// Salesforce account subdomain (the "acme" in acme.my.salesforce.com)
    pub domain: String,
    /// Full instance URL override; normally derived from the subdomain
    pub instance_url: Option<String>,
    /// Query construction strategy
    pub strategy: QueryStrategy,
}

impl ConnectorConfig {
    /// Resolve configuration from the default config file location
    pub fn load() -> Result<Self> {
        let path = casebridge_common::config::default_config_path()?;
        let toml_config = casebridge_common::config::load_or_default(&path)?;
        Self::resolve(&toml_config)
    }

    /// Resolve configuration with ENV → TOML priority
    pub fn resolve(toml_config: &TomlConfig) -> Result<Self> {
        let domain = resolve_domain(toml_config)?;
        let strategy = resolve_strategy(toml_config)?;
        let instance_url = std::env::var(INSTANCE_URL_ENV_VAR)
            .ok()
            .or_else(|| toml_config.instance_url.clone());

        Ok(Self {
            domain,
            instance_url,
            strategy,
        })
    }

    /// Instance root URL, e.g. `https://acme.my.salesforce.com`
    pub fn instance_url(&self) -> String {
        self.instance_url
            .clone()
            .unwrap_or_else(|| format!("https://{}.my.salesforce.com", self.domain))
    }
}

fn resolve_domain(toml_config: &TomlConfig) -> Result<String> {
    let env_domain = std::env::var(DOMAIN_ENV_VAR)
        .ok()
        .filter(|v| is_valid_domain(v));
    let toml_domain = toml_config
        .salesforce_domain
        .clone()
        .filter(|v| is_valid_domain(v));

    if env_domain.is_some() && toml_domain.is_some() {
        warn!(
            "Salesforce domain found in both environment and TOML config. \
             Using environment (highest priority)."
        );
    }

    env_domain
        .or(toml_domain)
        .ok_or_else(missing_domain_error)
}

fn resolve_strategy(toml_config: &TomlConfig) -> Result<QueryStrategy> {
    if let Ok(value) = std::env::var(STRATEGY_ENV_VAR) {
        return QueryStrategy::parse(&value);
    }

    match toml_config.query_strategy.as_deref() {
        Some(value) => QueryStrategy::parse(value),
        None => Ok(QueryStrategy::SavedView),
    }
}

pub(crate) fn missing_domain_error() -> Error {
    Error::ConfigurationMissing(
        "Salesforce domain not configured. Please configure using one of:\n\
         1. Environment: CASEBRIDGE_SALESFORCE_DOMAIN=your-subdomain\n\
         2. TOML config: ~/.config/casebridge/config.toml (salesforce_domain = \"your-subdomain\")\n\
         \n\
         The subdomain is the \"acme\" in https://acme.my.salesforce.com"
            .to_string(),
    )
}

/// Validate a subdomain value (non-empty, bare host label)
pub fn is_valid_domain(domain: &str) -> bool {
    let trimmed = domain.trim();
    !trimmed.is_empty()
        && !trimmed.contains('/')
        && !trimmed.contains(':')
        && !trimmed.contains(char::is_whitespace)
}
