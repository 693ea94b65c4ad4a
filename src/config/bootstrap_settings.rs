use std::fmt;
use std::sync::Arc;

use crate::config::errors::SettingsError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

const DEFAULT_DATABASE_URL: &str = "sqlite://bins.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000";

/// Settings needed before the server starts
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    public_base_url: String,
}

impl BootstrapSettings {
    /// Load settings from the given environment, falling back to defaults
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, SettingsError> {
        let database_url = load(env_provider.as_ref(), "DATABASE_URL", DEFAULT_DATABASE_URL);
        validate_non_empty("DATABASE_URL", &database_url)?;

        let server_host = load(env_provider.as_ref(), "HOST", DEFAULT_HOST);
        validate_host_address("HOST", &server_host)?;

        let port_value = load(env_provider.as_ref(), "PORT", DEFAULT_PORT);
        let server_port = parse_port("PORT", &port_value)?;

        let public_base_url = load(env_provider.as_ref(), "PUBLIC_BASE_URL", DEFAULT_PUBLIC_BASE_URL);
        let public_base_url = parse_base_url("PUBLIC_BASE_URL", &public_base_url)?;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            public_base_url,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Front-end origin used to build bin links, no trailing slash
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("public_base_url", &self.public_base_url)
            .finish()
    }
}

fn load(env: &(dyn EnvironmentProvider + Send + Sync), key: &str, default: &str) -> String {
    env.get_var(key).unwrap_or_else(|| default.to_string())
}

fn validate_non_empty(setting_name: &str, value: &str) -> Result<(), SettingsError> {
    if value.is_empty() {
        return Err(SettingsError::invalid(setting_name, "must not be empty"));
    }
    Ok(())
}

fn validate_host_address(setting_name: &str, value: &str) -> Result<(), SettingsError> {
    validate_non_empty(setting_name, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(SettingsError::invalid(setting_name, "must not contain whitespace"));
    }
    Ok(())
}

fn parse_port(setting_name: &str, value: &str) -> Result<u16, SettingsError> {
    let port = value.trim().parse::<u16>().map_err(|e| SettingsError::ParseError {
        setting_name: setting_name.to_string(),
        error: format!("Expected port number (1-65535), got '{}': {}", value, e),
    })?;

    if port == 0 {
        return Err(SettingsError::invalid(setting_name, "Port number must be between 1 and 65535"));
    }

    Ok(port)
}

fn parse_base_url(setting_name: &str, value: &str) -> Result<String, SettingsError> {
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(SettingsError::invalid(
            setting_name,
            format!("must start with http:// or https://, got '{}'", value),
        ));
    }
    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    fn settings_with(env: MockEnvironment) -> Result<BootstrapSettings, SettingsError> {
        BootstrapSettings::from_env_provider(Arc::new(env))
    }

    #[test]
    fn test_bootstrap_settings_with_all_vars() {
        let env = MockEnvironment::empty()
            .with_var("DATABASE_URL", "sqlite://test.db")
            .with_var("HOST", "127.0.0.1")
            .with_var("PORT", "8080")
            .with_var("PUBLIC_BASE_URL", "https://bins.example.com");

        let settings = settings_with(env).unwrap();

        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.server_host(), "127.0.0.1");
        assert_eq!(settings.server_port(), 8080);
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
        assert_eq!(settings.public_base_url(), "https://bins.example.com");
    }

    #[test]
    fn test_bootstrap_settings_with_defaults() {
        let settings = settings_with(MockEnvironment::empty()).unwrap();

        assert_eq!(settings.database_url(), "sqlite://bins.db?mode=rwc");
        assert_eq!(settings.server_address(), "0.0.0.0:3000");
        assert_eq!(settings.public_base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_empty_database_url_fails_validation() {
        let env = MockEnvironment::empty().with_var("DATABASE_URL", "");

        match settings_with(env).unwrap_err() {
            SettingsError::InvalidSetting { setting_name, .. } => {
                assert_eq!(setting_name, "DATABASE_URL");
            }
            other => panic!("Expected InvalidSetting for DATABASE_URL, got: {:?}", other),
        }
    }

    #[test]
    fn test_host_with_whitespace_fails_validation() {
        let env = MockEnvironment::empty().with_var("HOST", "local host");

        assert!(settings_with(env).is_err());
    }

    #[test]
    fn test_non_numeric_port_fails_to_parse() {
        let env = MockEnvironment::empty().with_var("PORT", "eighty");

        match settings_with(env).unwrap_err() {
            SettingsError::ParseError { setting_name, .. } => assert_eq!(setting_name, "PORT"),
            other => panic!("Expected ParseError for PORT, got: {:?}", other),
        }
    }

    #[test]
    fn test_port_zero_is_rejected() {
        let env = MockEnvironment::empty().with_var("PORT", "0");

        assert!(matches!(
            settings_with(env),
            Err(SettingsError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_public_base_url_trailing_slash_is_trimmed() {
        let env = MockEnvironment::empty().with_var("PUBLIC_BASE_URL", "http://nas.local:8080/");

        let settings = settings_with(env).unwrap();
        assert_eq!(settings.public_base_url(), "http://nas.local:8080");
    }

    #[test]
    fn test_public_base_url_requires_scheme() {
        let env = MockEnvironment::empty().with_var("PUBLIC_BASE_URL", "nas.local");

        assert!(settings_with(env).is_err());
    }
}
