//! Gateway configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/paytree/paytree.toml`
//! 3. Explicit config file passed by the caller
//! 4. Environment variables: `PAYTREE_*` prefix
//!
//! The result is a plain value handed to the gateway; nothing here is
//! process-global.

use std::fmt;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment as EnvSource};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Default prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "PAYTREE";

/// Gateway environment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Sandbox,
    Production,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Development => "http://localhost:3000",
            Environment::Sandbox => "https://api.sandbox.braintreegateway.com:443",
            Environment::Production => "https://api.braintreegateway.com:443",
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawGatewayConfig {
    pub environment: Option<Environment>,
    pub merchant_id: Option<String>,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
}

/// Credentials and environment used by a gateway transport.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct GatewayConfig {
    pub environment: Environment,
    pub merchant_id: String,
    pub public_key: String,
    pub private_key: String,
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("environment", &self.environment)
            .field("merchant_id", &self.merchant_id)
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "paytree").map(|dirs| dirs.config_dir().join("paytree.toml"))
}

/// Load a TOML file into RawGatewayConfig for manual merging.
fn load_raw(path: &Path) -> Result<RawGatewayConfig, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl GatewayConfig {
    pub fn new(
        environment: Environment,
        merchant_id: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            merchant_id: merchant_id.into(),
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    pub fn base_url(&self) -> &'static str {
        self.environment.base_url()
    }

    /// Path prefix of every merchant-scoped resource.
    pub fn merchant_path(&self) -> String {
        format!("/merchants/{}", self.merchant_id)
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawGatewayConfig) -> Self {
        Self {
            environment: overlay.environment.unwrap_or(self.environment),
            merchant_id: overlay
                .merchant_id
                .clone()
                .unwrap_or_else(|| self.merchant_id.clone()),
            public_key: overlay
                .public_key
                .clone()
                .unwrap_or_else(|| self.public_key.clone()),
            private_key: overlay
                .private_key
                .clone()
                .unwrap_or_else(|| self.private_key.clone()),
        }
    }

    /// Load settings with layered precedence, using `PAYTREE_*` env vars.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with_prefix(config_file, ENV_PREFIX)
    }

    /// Same as [`GatewayConfig::load`] with a custom env var prefix.
    ///
    /// An explicit `config_file` must exist; the global file is optional.
    pub fn load_with_prefix(config_file: Option<&Path>, prefix: &str) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                current = current.merge_with(&load_raw(&global_path)?);
            }
        }

        // 3. Explicit file
        if let Some(path) = config_file {
            current = current.merge_with(&load_raw(path)?);
        }

        // 4. Environment variables (explicit override)
        Self::apply_env_overrides(current, prefix)
    }

    fn apply_env_overrides(mut settings: Self, prefix: &str) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                EnvSource::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        match config.get::<Environment>("environment") {
            Ok(environment) => settings.environment = environment,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        if let Ok(val) = config.get_string("merchant_id") {
            settings.merchant_id = val;
        }
        if let Ok(val) = config.get_string("public_key") {
            settings.public_key = val;
        }
        if let Ok(val) = config.get_string("private_key") {
            settings.private_key = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML, with the private key redacted.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        let redacted = Self {
            private_key: "<redacted>".into(),
            ..self.clone()
        };
        toml::to_string_pretty(&redacted).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_with_keeps_unspecified_fields() {
        let base = GatewayConfig::new(Environment::Sandbox, "m1", "pub", "priv");
        let overlay = RawGatewayConfig {
            merchant_id: Some("m2".into()),
            ..Default::default()
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.environment, Environment::Sandbox);
        assert_eq!(merged.merchant_id, "m2");
        assert_eq!(merged.private_key, "priv");
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let config = GatewayConfig::new(Environment::Development, "m", "pub", "s3cret");
        let shown = format!("{:?}", config);
        assert!(!shown.contains("s3cret"));
        assert!(shown.contains("<redacted>"));
    }

    #[test]
    fn test_merchant_path() {
        let config = GatewayConfig::new(Environment::Development, "integration_merchant_id", "", "");
        assert_eq!(config.merchant_path(), "/merchants/integration_merchant_id");
    }
}
