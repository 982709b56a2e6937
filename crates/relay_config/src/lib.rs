// --- File: crates/relay_config/src/lib.rs ---

use config::{Config, ConfigError, Environment};
use once_cell::sync::OnceCell;
use std::env;
use tracing::warn;

pub mod models;
pub use models::{AppConfig, HubspotConfig, ServerConfig, DEFAULT_HUBSPOT_BASE_URL};

static DOTENV_LOADED: OnceCell<()> = OnceCell::new();

/// Loads `.env` into the process environment at most once.
pub fn ensure_dotenv_loaded() {
    DOTENV_LOADED.get_or_init(|| {
        dotenv::dotenv().ok();
    });
}

/// Loads the application configuration.
///
/// Configuration is read once at startup: structured sources first
/// (`RELAY__`-prefixed environment variables, e.g. `RELAY__SERVER__PORT`),
/// then the well-known flat variables used on the deployment platform
/// (`PORT`, `HUBSPOT_CLIENT_ID`, `HUBSPOT_CLIENT_SECRET`,
/// `HUBSPOT_BASE_URL`). The result is immutable thereafter; callers share it
/// behind an `Arc`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let builder = Config::builder().add_source(
        Environment::with_prefix("RELAY")
            .separator("__")
            .try_parsing(true),
    );

    let config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(apply_env_overrides(config))
}

/// Applies the flat, platform-provided environment variables on top of the
/// structured configuration. Missing HubSpot credentials are tolerated here;
/// they surface as a configuration error on the first call that needs them.
pub fn apply_env_overrides(mut config: AppConfig) -> AppConfig {
    if let Ok(port) = env::var("PORT") {
        match port.parse::<u16>() {
            Ok(port) => config.server.port = port,
            Err(_) => warn!("Ignoring non-numeric PORT value: {port}"),
        }
    }

    let hubspot = config.hubspot.get_or_insert_with(HubspotConfig::default);
    if let Ok(client_id) = env::var("HUBSPOT_CLIENT_ID") {
        if !client_id.is_empty() {
            hubspot.client_id = Some(client_id);
        }
    }
    if let Ok(client_secret) = env::var("HUBSPOT_CLIENT_SECRET") {
        if !client_secret.is_empty() {
            hubspot.client_secret = Some(client_secret);
        }
    }
    if let Ok(base_url) = env::var("HUBSPOT_BASE_URL") {
        if !base_url.is_empty() {
            hubspot.base_url = base_url;
        }
    }

    config
}
