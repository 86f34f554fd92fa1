use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    /// Absent means the site accepts submissions but does not relay them;
    /// see the contact handler's unconfigured branch.
    #[serde(default)]
    pub email: Option<EmailConfig>,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub maintenance: MaintenanceConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub api_key: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

fn default_api_base() -> String {
    "https://api.resend.com".to_string()
}

fn default_from_address() -> String {
    "Northlight Website <noreply@northlight.ai>".to_string()
}

fn default_contact_address() -> String {
    "hello@northlight.ai".to_string()
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    #[default]
    Static,
    Remote,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ContentConfig {
    #[serde(default)]
    pub mode: ContentMode,
    #[serde(default)]
    pub remote: Option<RemoteContentConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RemoteContentConfig {
    pub base_url: String,
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default)]
    pub token: Option<String>,
}

fn default_dataset() -> String {
    "production".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MaintenanceConfig {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (RESEND_API_KEY, MAINTENANCE_MODE)
    /// 2. Prefixed environment variables (NORTHLIGHT__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("NORTHLIGHT")
                .separator("__")
                .try_parsing(true),
        );

        // Legacy environment variables kept from the original deployment
        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("email.api_key", api_key)?;
        }
        if let Ok(maintenance) = env::var("MAINTENANCE_MODE") {
            let enabled = matches!(maintenance.as_str(), "1" | "true" | "on");
            builder = builder.set_override("maintenance.enabled", enabled)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if let Some(email) = &self.email {
            if email.api_key.is_empty() {
                return Err(
                    "email.api_key must not be empty when the [email] section is present; \
                     remove the section to run without the email integration"
                        .to_string(),
                );
            }
            if email.api_base.is_empty() {
                return Err("email.api_base must not be empty".to_string());
            }
        }
        if self.content.mode == ContentMode::Remote && self.content.remote.is_none() {
            return Err(
                "content.mode = \"remote\" requires a [content.remote] section with a base_url"
                    .to_string(),
            );
        }
        if let Some(remote) = &self.content.remote {
            if remote.base_url.is_empty() {
                return Err("content.remote.base_url must not be empty".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            email: None,
            content: ContentConfig::default(),
            maintenance: MaintenanceConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = base_config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_no_email_section_is_valid() {
        let config = base_config();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_api_key_rejected() {
        let mut config = base_config();
        config.email = Some(EmailConfig {
            api_key: String::new(),
            api_base: default_api_base(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
        });

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_remote_mode_requires_remote_section() {
        let mut config = base_config();
        config.content.mode = ContentMode::Remote;

        let error = config.validate().unwrap_err();
        assert!(error.contains("content.mode"));
    }

    #[test]
    fn test_validation_remote_mode_with_section_is_valid() {
        let mut config = base_config();
        config.content.mode = ContentMode::Remote;
        config.content.remote = Some(RemoteContentConfig {
            base_url: "https://content.example.com/v1".to_string(),
            dataset: default_dataset(),
            token: None,
        });

        assert!(config.validate().is_ok());
    }
}
