use config::{Config as ConfigBuilder, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Shown in page titles and the navigation bar
    #[serde(default = "default_site_name")]
    pub name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
        }
    }
}

fn default_site_name() -> String {
    "Homepage".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// `pretty` for console output, `json` for structured lines
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `PORT` environment variable
    /// 2. Environment variables (HOMEPAGE__SERVER__PORT, etc.)
    /// 3. Config file specified by path, `CONFIG_PATH` or `config/default.toml`
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, None)
    }

    /// Same as [`Config::load`], reading variables from `vars` instead of the
    /// process environment when given.
    pub fn load_with_env(
        config_path: Option<String>,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let var = |key: &str| match &vars {
            Some(vars) => vars.get(key).cloned(),
            None => env::var(key).ok(),
        };

        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("site.name", default_site_name())?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.log_format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| var("CONFIG_PATH"))
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("HOMEPAGE")
                .separator("__")
                .try_parsing(true)
                .source(vars.clone()),
        );

        if let Some(port) = var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.host.is_empty() {
            return Err("Server host must not be empty".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !matches!(self.observability.log_format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.observability.log_format
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str, port: u16, log_format: &str) -> Config {
        Config {
            server: ServerConfig {
                host: host.to_string(),
                port,
            },
            site: SiteConfig::default(),
            observability: ObservabilityConfig {
                log_format: log_format.to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_validation_zero_port() {
        assert!(config("0.0.0.0", 0, "pretty").validate().is_err());
    }

    #[test]
    fn test_validation_empty_host() {
        assert!(config("", 5000, "pretty").validate().is_err());
    }

    #[test]
    fn test_validation_unknown_log_format() {
        let err = config("0.0.0.0", 5000, "xml").validate().unwrap_err();
        assert!(err.contains("xml"));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config("0.0.0.0", 5000, "pretty").validate().is_ok());
        assert!(config("127.0.0.1", 8080, "json").validate().is_ok());
    }

    #[test]
    fn test_observability_defaults() {
        let observability = ObservabilityConfig::default();
        assert_eq!(observability.log_level, "info");
        assert_eq!(observability.log_format, "pretty");
    }
}
