use crate::config::endpoint::Endpoint;
use crate::domain::model::RESOURCE_NAMES;
use crate::domain::resource::Envelope;
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{validate_known_names, validate_path, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_PATH: &str = "./.dcp-inventory";
pub const DEFAULT_STORE_KEY: &str = "division.json";

/// 客戶端設定檔（TOML），所有區段皆可省略
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub store: StoreConfig,
    /// Per-resource envelope overrides, keyed by resource URL name.
    pub envelopes: HashMap<String, Envelope>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: String,
    pub key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORE_PATH.to_string(),
            key: DEFAULT_STORE_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InventoryError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DCP_API_TOKEN})；未設定的變數原樣保留
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InventoryError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Precedence: explicit override, then `[api] base_url`, then the
    /// environment, then the local-development default.
    pub fn endpoint(&self, override_url: Option<&str>) -> Result<Endpoint> {
        if let Some(url) = override_url.filter(|u| !u.trim().is_empty()) {
            return Endpoint::new(url);
        }
        if let Some(url) = self.api.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            return Endpoint::new(url);
        }
        Endpoint::global().cloned()
    }

    pub fn token(&self) -> Option<&str> {
        self.auth
            .token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }

    pub fn store_dir(&self) -> PathBuf {
        PathBuf::from(&self.store.path)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.api.base_url {
            validate_url("api.base_url", url)?;
        }

        validate_path("store.path", &self.store.path)?;
        validate_path("store.key", &self.store.key)?;
        validate_known_names("envelopes", self.envelopes.keys(), RESOURCE_NAMES)?;

        tracing::debug!("✅ Client configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.store.path, DEFAULT_STORE_PATH);
        assert_eq!(config.store.key, DEFAULT_STORE_KEY);
        assert!(config.token().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
        let config = ClientConfig::from_toml_str(
            r#"
[api]
base_url = "https://inventory.example.ph/api"

[auth]
token = "abc123"

[store]
path = "/tmp/dcp"

[envelopes]
district = "data"
batch = "bare"
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.token(), Some("abc123"));
        assert_eq!(config.envelopes.get("batch"), Some(&Envelope::Bare));
        assert_eq!(config.envelopes.get("district"), Some(&Envelope::Data));
        assert_eq!(
            config.endpoint(None).unwrap().base_url(),
            "https://inventory.example.ph/api"
        );
        assert_eq!(
            config
                .endpoint(Some("http://127.0.0.1:9000"))
                .unwrap()
                .base_url(),
            "http://127.0.0.1:9000"
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DCP_TEST_TOKEN_SUBST", "from-env");
        let config = ClientConfig::from_toml_str(
            r#"
[auth]
token = "${DCP_TEST_TOKEN_SUBST}"
"#,
        )
        .unwrap();
        assert_eq!(config.token(), Some("from-env"));
    }

    #[test]
    fn test_unset_env_var_is_left_as_is() {
        let config = ClientConfig::from_toml_str(
            r#"
[auth]
token = "${DCP_TEST_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(config.token(), Some("${DCP_TEST_SURELY_UNSET_VAR}"));
    }

    #[test]
    fn test_unknown_envelope_resource_fails_validation() {
        let config = ClientConfig::from_toml_str(
            r#"
[envelopes]
warehouse = "bare"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(InventoryError::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_bad_envelope_value_is_parse_error() {
        let result = ClientConfig::from_toml_str(
            r#"
[envelopes]
batch = "wrapped"
"#,
        );
        assert!(matches!(result, Err(InventoryError::Config { .. })));
    }

    #[test]
    fn test_bad_base_url_fails_validation() {
        let config = ClientConfig::from_toml_str(
            r#"
[api]
base_url = "localhost"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
