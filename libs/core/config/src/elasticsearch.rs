use crate::{env_or_default, env_required, ConfigError, FromEnv};
use url::Url;

/// Search index (Elasticsearch) configuration
#[derive(Clone, Debug)]
pub struct ElasticsearchConfig {
    pub url: String,
    pub index: String,
}

impl ElasticsearchConfig {
    /// Default index name when ELASTICSEARCH_INDEX is not set
    pub const DEFAULT_INDEX: &'static str = "items";

    pub fn new(url: String, index: String) -> Result<Self, ConfigError> {
        Self::validate_url(&url)?;
        Ok(Self { url, index })
    }

    fn validate_url(url: &str) -> Result<(), ConfigError> {
        let parsed = Url::parse(url).map_err(|e| ConfigError::ParseError {
            key: "ELASTICSEARCH_URL".to_string(),
            details: format!("{}: {}", url, e),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::ParseError {
                key: "ELASTICSEARCH_URL".to_string(),
                details: format!("{}: scheme must be http or https", url),
            });
        }

        Ok(())
    }
}

impl FromEnv for ElasticsearchConfig {
    /// Requires ELASTICSEARCH_URL to be set (no default);
    /// ELASTICSEARCH_INDEX defaults to "items"
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required("ELASTICSEARCH_URL")?;
        let index = env_or_default("ELASTICSEARCH_INDEX", Self::DEFAULT_INDEX);
        Self::new(url, index)
    }
}
