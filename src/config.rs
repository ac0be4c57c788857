use anyhow::{Context, Result};
use std::env;

use crate::errors::RenderOptions;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub errors: ErrorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub instance_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ErrorsConfig {
    /// Include error messages in response bodies
    pub expose_message: bool,
    /// Base URL of the error documentation, one page per error kind
    pub docs_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("API_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .context("API_PORT must be a valid port number")?,
                instance_id: env::var("INSTANCE_ID")
                    .or_else(|_| env::var("HOSTNAME"))
                    .unwrap_or_else(|_| "unknown".to_string()),
            },
            errors: ErrorsConfig {
                expose_message: env::var("ERRORS_EXPOSE_MESSAGE")
                    .unwrap_or_else(|_| "false".to_string())
                    .parse()
                    .context("ERRORS_EXPOSE_MESSAGE must be true or false")?,
                docs_base_url: env::var("ERRORS_DOCS_BASE_URL")
                    .ok()
                    .map(|url| url.trim_end_matches('/').to_string())
                    .filter(|url| !url.is_empty()),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ErrorsConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            expose_message: self.expose_message,
        }
    }

    /// Documentation page for errors of the given kind, if docs are configured
    pub fn docs_url(&self, kind: &str) -> Option<String> {
        self.docs_base_url
            .as_ref()
            .map(|base| format!("{}/{}", base, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                instance_id: "test-instance".to_string(),
            },
            errors: ErrorsConfig {
                expose_message: true,
                docs_base_url: Some("https://docs.example.com/errors".to_string()),
            },
        }
    }

    #[test]
    fn test_server_address() {
        assert_eq!(test_config().server_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_render_options() {
        assert!(test_config().errors.render_options().expose_message);
        assert!(!ErrorsConfig::default().render_options().expose_message);
    }

    #[test]
    fn test_docs_url() {
        let config = test_config();
        assert_eq!(
            config.errors.docs_url("invalid_argument_type").as_deref(),
            Some("https://docs.example.com/errors/invalid_argument_type")
        );
        assert_eq!(ErrorsConfig::default().docs_url("Exception"), None);
    }
}
