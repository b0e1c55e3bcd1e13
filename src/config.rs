use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::info;
use validator::Validate;

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_PORT: u16 = 8080;
const CONFIG_DIR: &str = "config";
const DEFAULT_CATALOG_PATH: &str = "data/products.json";
const DEFAULT_FREE_SHIPPING_THRESHOLD: i64 = 5_000;
const DEFAULT_FLAT_SHIPPING_FEE: i64 = 999;
const DEFAULT_COUPON_DISCOUNT_PERCENT: u32 = 10;
const DEFAULT_PAGE_SIZE: u64 = 12;
const DEFAULT_MAX_PAGE_SIZE: u64 = 100;

/// Pricing knobs for the checkout quote.
///
/// All monetary values are integer minor currency units (cents).
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// Orders strictly above this subtotal ship free
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: i64,

    /// Flat shipping fee charged below the threshold
    #[serde(default = "default_flat_shipping_fee")]
    pub flat_shipping_fee: i64,

    /// Percentage taken off the subtotal when a coupon is applied
    #[validate(range(max = 100))]
    #[serde(default = "default_coupon_discount_percent")]
    pub coupon_discount_percent: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: default_free_shipping_threshold(),
            flat_shipping_fee: default_flat_shipping_fee(),
            coupon_discount_percent: default_coupon_discount_percent(),
        }
    }
}

/// Product listing defaults
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ListingConfig {
    #[validate(range(min = 1))]
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,

    #[validate(range(min = 1))]
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

/// Application configuration structure with validation
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Application environment
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// Path to the bundled product catalog fixture
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// CORS: comma-separated list of allowed origins
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,

    #[serde(default)]
    #[validate]
    pub pricing: PricingConfig,

    #[serde(default)]
    #[validate]
    pub listing: ListingConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_environment() -> String {
    DEFAULT_ENV.to_string()
}
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
fn default_catalog_path() -> String {
    DEFAULT_CATALOG_PATH.to_string()
}
fn default_free_shipping_threshold() -> i64 {
    DEFAULT_FREE_SHIPPING_THRESHOLD
}
fn default_flat_shipping_fee() -> i64 {
    DEFAULT_FLAT_SHIPPING_FEE
}
fn default_coupon_discount_percent() -> u32 {
    DEFAULT_COUPON_DISCOUNT_PERCENT
}
fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
fn default_max_page_size() -> u64 {
    DEFAULT_MAX_PAGE_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            log_json: false,
            catalog_path: default_catalog_path(),
            cors_allowed_origins: None,
            pricing: PricingConfig::default(),
            listing: ListingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read configuration: {0}")]
    Read(#[from] config::ConfigError),
    #[error("configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Loads configuration from `config/default.toml`, an optional
/// `config/{environment}.toml`, and `APP__`-prefixed environment variables,
/// in increasing order of precedence.
pub fn load_config() -> Result<AppConfig, ConfigLoadError> {
    let environment = env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());

    let mut builder = Config::builder();

    let default_path = Path::new(CONFIG_DIR).join("default.toml");
    if default_path.exists() {
        builder = builder.add_source(File::from(default_path));
    }

    let env_path = Path::new(CONFIG_DIR).join(format!("{}.toml", environment));
    if env_path.exists() {
        builder = builder.add_source(File::from(env_path));
    }

    let settings = builder
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let mut cfg: AppConfig = settings.try_deserialize()?;
    cfg.environment = environment;
    cfg.validate()?;

    info!(
        environment = %cfg.environment,
        port = cfg.port,
        "configuration loaded"
    );
    Ok(cfg)
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_tracing(log_level: &str, json: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("storefront_api={0},tower_http={0}", log_level)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
