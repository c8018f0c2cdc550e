//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::{CheckoutRates, Currency, Money, ShippingMethod};
use storefront_data::{has_valid_credentials, RetryPolicy, TimeoutConfig};

/// Overrides `repository.url`.
pub const ENV_REPOSITORY_URL: &str = "STOREFRONT_REPOSITORY_URL";
/// Overrides `repository.anon_key`.
pub const ENV_REPOSITORY_ANON_KEY: &str = "STOREFRONT_REPOSITORY_ANON_KEY";

/// Names searched for when no `--config` is given, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Hosted product store.
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// Local cart and wishlist storage.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Checkout rates.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(&content, path.ends_with(".json"))
            .with_context(|| format!("Failed to parse config file: {}", path))
    }

    /// Parse config text, as JSON or TOML.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Apply environment overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides from `lookup`. Empty values are ignored.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(url) = set(ENV_REPOSITORY_URL) {
            self.repository.url = url;
        }
        if let Some(key) = set(ENV_REPOSITORY_ANON_KEY) {
            self.repository.anon_key = key;
        }
        self
    }
}

/// Hosted product store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Base URL, without `/rest/v1`.
    #[serde(default)]
    pub url: String,

    /// Anonymous API key.
    #[serde(default)]
    pub anon_key: String,

    /// Per-attempt timeout for catalog retrieval.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retries after the first failed attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_timeout_ms() -> u64 {
    3000
}

fn default_max_retries() -> u32 {
    1
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

impl RepositoryConfig {
    /// Whether the credentials are set and not placeholders.
    pub fn is_configured(&self) -> bool {
        has_valid_credentials(&self.url, &self.anon_key)
    }

    pub fn timeouts(&self) -> TimeoutConfig {
        TimeoutConfig::from_millis(self.timeout_ms)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries)
    }
}

/// Local storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for persisted cart and wishlist, relative to the working
    /// directory unless absolute.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".storefront".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Checkout rate settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Flat standard shipping, in dollars.
    #[serde(default = "default_shipping")]
    pub shipping: f64,

    /// Sales tax as a fraction of the subtotal.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

fn default_shipping() -> f64 {
    5.99
}

fn default_tax_rate() -> f64 {
    0.07
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            shipping: default_shipping(),
            tax_rate: default_tax_rate(),
        }
    }
}

impl CheckoutConfig {
    /// Rates for standard shipping, or express when `express` is set.
    pub fn rates(&self, express: bool) -> CheckoutRates {
        let shipping = if express {
            ShippingMethod::express()
        } else {
            ShippingMethod {
                price: Money::from_decimal(self.shipping, Currency::USD),
                ..ShippingMethod::standard()
            }
        };
        CheckoutRates::new(shipping, self.tax_rate)
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[repository]
# Hosted product store. Leave unset to browse the built-in catalog.
# Also read from {url_env} and {key_env}.
url = ""
anon_key = ""
timeout_ms = {timeout_ms}
max_retries = {max_retries}

[storage]
dir = "{dir}"

[checkout]
shipping = {shipping}
tax_rate = {tax_rate}
"#,
        url_env = ENV_REPOSITORY_URL,
        key_env = ENV_REPOSITORY_ANON_KEY,
        timeout_ms = default_timeout_ms(),
        max_retries = default_max_retries(),
        dir = default_storage_dir(),
        shipping = default_shipping(),
        tax_rate = default_tax_rate(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = CliConfig::parse(&generate_default_config(), false).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(!config.repository.is_configured());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = CliConfig::parse(
            r#"
            [repository]
            url = "https://shop.example.co"
            anon_key = "eyJhbGci"

            [checkout]
            tax_rate = 0.2
            "#,
            false,
        )
        .unwrap();

        assert!(config.repository.is_configured());
        assert_eq!(config.repository.timeout_ms, 3000);
        assert_eq!(config.storage.dir, ".storefront");
        assert_eq!(config.checkout.shipping, 5.99);
        assert_eq!(config.checkout.tax_rate, 0.2);
    }

    #[test]
    fn test_json_config() {
        let config =
            CliConfig::parse(r#"{"repository": {"max_retries": 3}, "storage": {"dir": "/tmp/s"}}"#, true)
                .unwrap();
        assert_eq!(config.repository.max_retries, 3);
        assert_eq!(config.storage.dir, "/tmp/s");
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::default().with_overrides_from(|key| match key {
            ENV_REPOSITORY_URL => Some("https://env.example.co".to_string()),
            ENV_REPOSITORY_ANON_KEY => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.repository.url, "https://env.example.co");
        assert_eq!(config.repository.anon_key, "");
    }

    #[test]
    fn test_placeholder_credentials_are_not_configured() {
        let mut config = CliConfig::default();
        config.repository.url = storefront_data::credentials::PLACEHOLDER_URL.to_string();
        config.repository.anon_key = "eyJhbGci".to_string();
        assert!(!config.repository.is_configured());
    }

    #[test]
    fn test_checkout_rates() {
        let config = CheckoutConfig {
            shipping: 4.5,
            tax_rate: 0.1,
        };
        assert_eq!(config.rates(false).shipping.price, Money::usd(450));
        assert_eq!(config.rates(true).shipping.price, Money::usd(1499));
        assert_eq!(config.rates(false).tax_rate, 0.1);
    }

    #[test]
    fn test_load_detects_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("storefront.toml");
        let json_path = dir.path().join("storefront.json");
        std::fs::write(&toml_path, "[storage]\ndir = \"carts\"\n").unwrap();
        std::fs::write(&json_path, r#"{"storage": {"dir": "carts"}}"#).unwrap();

        let from_toml = CliConfig::load(toml_path.to_str().unwrap()).unwrap();
        let from_json = CliConfig::load(json_path.to_str().unwrap()).unwrap();
        assert_eq!(from_toml, from_json);
        assert_eq!(from_toml.storage.dir, "carts");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(CliConfig::load(path.to_str().unwrap()).is_err());
    }
}
