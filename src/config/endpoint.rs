use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::validate_url;
use std::sync::OnceLock;
use url::Url;

pub const BASE_URL_ENV: &str = "DCP_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

static GLOBAL_ENDPOINT: OnceLock<Endpoint> = OnceLock::new();

/// Base address every request URL is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Endpoint {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        validate_url("api.base_url", base_url)?;

        // 路徑直接接在後面，查詢字串或片段會讓網址錯位
        let parsed = Url::parse(base_url).map_err(|e| InventoryError::InvalidConfigValue {
            field: "api.base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(InventoryError::InvalidConfigValue {
                field: "api.base_url".to_string(),
                value: base_url.to_string(),
                reason: "Base address cannot carry a query string or fragment".to_string(),
            });
        }

        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    /// 從環境變數解析，沒有設定時使用本機開發預設值
    pub fn resolve() -> Result<Self> {
        Self::from_value(std::env::var(BASE_URL_ENV).ok())
    }

    pub fn from_value(value: Option<String>) -> Result<Self> {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(base_url) => Self::new(&base_url),
            None => {
                tracing::debug!("{} not set, using {}", BASE_URL_ENV, DEFAULT_BASE_URL);
                Self::new(DEFAULT_BASE_URL)
            }
        }
    }

    /// Process-wide endpoint, resolved on first use and fixed afterwards.
    pub fn global() -> Result<&'static Endpoint> {
        if let Some(endpoint) = GLOBAL_ENDPOINT.get() {
            return Ok(endpoint);
        }
        let resolved = Self::resolve()?;
        Ok(GLOBAL_ENDPOINT.get_or_init(|| resolved))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let endpoint = Endpoint::new("http://localhost:5000/api/").unwrap();
        assert_eq!(endpoint.base_url(), "http://localhost:5000/api");
        assert_eq!(
            endpoint.url("batch/create"),
            "http://localhost:5000/api/batch/create"
        );
        assert_eq!(
            endpoint.url("/batch/getAll"),
            "http://localhost:5000/api/batch/getAll"
        );
    }

    #[test]
    fn test_absent_value_falls_back_to_default() {
        assert_eq!(
            Endpoint::from_value(None).unwrap().base_url(),
            DEFAULT_BASE_URL
        );
        assert_eq!(
            Endpoint::from_value(Some("  ".to_string()))
                .unwrap()
                .base_url(),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_supplied_value_wins() {
        let endpoint = Endpoint::from_value(Some("https://inventory.example.ph/api".to_string()))
            .unwrap();
        assert_eq!(endpoint.base_url(), "https://inventory.example.ph/api");
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        assert!(Endpoint::new("not a url").is_err());
        assert!(Endpoint::new("ftp://files.example.ph").is_err());
    }

    #[test]
    fn test_query_or_fragment_is_rejected() {
        for base_url in [
            "http://localhost:5000/api?x=1",
            "http://localhost:5000/api#top",
            "http://localhost:5000/api?",
        ] {
            assert!(matches!(
                Endpoint::new(base_url),
                Err(InventoryError::InvalidConfigValue { .. })
            ));
        }
    }

    #[test]
    fn test_global_is_stable() {
        let first = Endpoint::global().unwrap();
        let second = Endpoint::global().unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
