use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use secrecy::ExposeSecret;
use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    #[serde(default = "default_environment")]
    pub environment: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Token signing settings. `Debug` output never shows the secret.
#[derive(Debug, Deserialize)]
pub struct JwtConfig {
    pub secret: SecretString,
    /// Written to both `iss` and `aud`
    #[serde(default = "default_identifier")]
    pub identifier: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfig {
    /// Answer unknown emails with 401 instead of 404
    #[serde(default)]
    pub conceal_unknown_users: bool,
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_identifier() -> String {
    "https://example.com".to_string()
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// Fails when the signing secret is missing or empty.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.expose_secret().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(toml: &str) -> Result<Config, ConfigError> {
        let config: Config = ConfigBuilder::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn test_full_configuration() {
        let config = from_toml(
            r#"
            [server]
            http_port = 4000
            environment = "production"

            [database]
            url = "postgres://localhost/auth"
            max_connections = 10

            [jwt]
            secret = "a-very-long-signing-secret"
            identifier = "https://auth.example.org"

            [auth]
            conceal_unknown_users = true
            "#,
        )
        .expect("configuration should load");

        assert_eq!(config.server.http_port, 4000);
        assert_eq!(config.server.environment, "production");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.jwt.secret.expose_secret(), "a-very-long-signing-secret");
        assert_eq!(config.jwt.identifier, "https://auth.example.org");
        assert!(config.auth.conceal_unknown_users);
    }

    #[test]
    fn test_defaults() {
        let config = from_toml(
            r#"
            [server]
            http_port = 4000

            [database]
            url = "postgres://localhost/auth"

            [jwt]
            secret = "a-very-long-signing-secret"
            "#,
        )
        .expect("configuration should load");

        assert_eq!(config.server.environment, "development");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.jwt.identifier, "https://example.com");
        assert!(!config.auth.conceal_unknown_users);
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let result = from_toml(
            r#"
            [server]
            http_port = 4000

            [database]
            url = "postgres://localhost/auth"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let result = from_toml(
            r#"
            [server]
            http_port = 4000

            [database]
            url = "postgres://localhost/auth"

            [jwt]
            secret = ""
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_debug_output_hides_secret() {
        let config = from_toml(
            r#"
            [server]
            http_port = 4000

            [database]
            url = "postgres://localhost/auth"

            [jwt]
            secret = "do-not-print-me"
            "#,
        )
        .unwrap();

        assert!(!format!("{:?}", config).contains("do-not-print-me"));
    }
}
