// --- File: crates/relay_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Fallback upstream host used when HUBSPOT_BASE_URL is not set.
pub const DEFAULT_HUBSPOT_BASE_URL: &str = "https://api.hubapi.com";

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

// --- HubSpot Config ---
// Holds the OAuth app credentials and the upstream base URL. Credentials are
// optional here: their absence is reported per-call as a configuration error,
// never at startup, so the health probe keeps working on a misconfigured box.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HubspotConfig {
    #[serde(default)]
    pub client_id: Option<String>, // Loaded via HUBSPOT_CLIENT_ID
    #[serde(default)]
    pub client_secret: Option<String>, // Loaded via HUBSPOT_CLIENT_SECRET
    #[serde(default = "default_base_url")]
    pub base_url: String, // Loaded via HUBSPOT_BASE_URL
}

impl Default for HubspotConfig {
    fn default() -> Self {
        HubspotConfig {
            client_id: None,
            client_secret: None,
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_HUBSPOT_BASE_URL.to_string()
}

impl HubspotConfig {
    /// OAuth token endpoint derived from the configured base URL.
    pub fn token_endpoint(&self) -> String {
        format!("{}/oauth/v1/token", self.base_url.trim_end_matches('/'))
    }

    /// CRM contacts endpoint derived from the configured base URL.
    pub fn contacts_endpoint(&self) -> String {
        format!(
            "{}/crm/v3/objects/contacts",
            self.base_url.trim_end_matches('/')
        )
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // Runtime flag (optional in config sources, defaults to enabled)
    #[serde(default = "default_true")]
    pub use_hubspot: bool,

    #[serde(default)]
    pub hubspot: Option<HubspotConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server: ServerConfig::default(),
            use_hubspot: true,
            hubspot: None,
        }
    }
}

fn default_true() -> bool {
    true
}
