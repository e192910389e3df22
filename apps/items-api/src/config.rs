use core_config::elasticsearch::ElasticsearchConfig;
use core_config::server::ServerConfig;
use core_config::{ConfigError, Environment, FromEnv};

/// Application configuration, assembled from environment variables at
/// startup. A bad configuration aborts startup; nothing is re-read
/// later.
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub elasticsearch: ElasticsearchConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            elasticsearch: ElasticsearchConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("HOST", Some("127.0.0.1")),
                ("PORT", Some("9000")),
                ("ELASTICSEARCH_URL", Some("http://localhost:9200")),
                ("ELASTICSEARCH_INDEX", Some("items_test")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.server.address(), "127.0.0.1:9000");
                assert_eq!(config.elasticsearch.index, "items_test");
            },
        );
    }

    #[test]
    fn test_config_requires_elasticsearch_url() {
        temp_env::with_var_unset("ELASTICSEARCH_URL", || {
            let result = Config::from_env();
            assert!(result.is_err());
        });
    }
}
