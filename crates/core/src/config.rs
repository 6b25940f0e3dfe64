use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `ZIMBOGROCER__`.
#[derive(Debug, Clone, Deserialize)]
pub struct GrocerConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub redis: RedisConfig,
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Conversation state expiry. A user who goes quiet for this long
    /// starts over from the greeting.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// Order snapshots are kept much longer than sessions.
    #[serde(default = "default_order_ttl_secs")]
    pub order_ttl_secs: u64,
}

/// WhatsApp Business Cloud API credentials and routing numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct WhatsAppConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub phone_number_id: String,
    #[serde(default = "default_verify_token")]
    pub verify_token: String,
    /// Number that receives new-order notifications.
    #[serde(default)]
    pub owner_phone: String,
    /// Senders allowed to issue `stock <product> <qty>` commands.
    #[serde(default)]
    pub admin_numbers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_name")]
    pub name: String,
    #[serde(default = "default_pickup_address")]
    pub pickup_address: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

// Default functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_metrics_port() -> u16 {
    9091
}
fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}
fn default_session_ttl_secs() -> u64 {
    86_400
}
fn default_order_ttl_secs() -> u64 {
    7_776_000
}
fn default_api_base_url() -> String {
    "https://graph.facebook.com/v19.0".to_string()
}
fn default_verify_token() -> String {
    "BOT".to_string()
}
fn default_store_name() -> String {
    "Zimbogrocer".to_string()
}
fn default_pickup_address() -> String {
    "123 Main Street, Harare CBD\nHours: 8am - 5pm, Mon-Sat.".to_string()
}
fn default_currency_symbol() -> String {
    "R".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            session_ttl_secs: default_session_ttl_secs(),
            order_ttl_secs: default_order_ttl_secs(),
        }
    }
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            access_token: String::new(),
            phone_number_id: String::new(),
            verify_token: default_verify_token(),
            owner_phone: String::new(),
            admin_numbers: Vec::new(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            pickup_address: default_pickup_address(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for GrocerConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            metrics: MetricsConfig::default(),
            redis: RedisConfig::default(),
            whatsapp: WhatsAppConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl GrocerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("ZIMBOGROCER")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
