pub mod config;
pub mod explain;
pub mod forecast;
pub mod news;
pub mod portfolio;
pub mod risk;
pub mod status;

use std::error::Error;

use investlens_core::{ApiClient, Config};

/// Tokio runtime for commands that call the backend.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn Error>> {
    Ok(tokio::runtime::Runtime::new()?)
}

/// API client built from the stored configuration.
pub(crate) fn client() -> Result<ApiClient, Box<dyn Error>> {
    let config = Config::load()?;
    Ok(ApiClient::from_config(&config)?)
}

/// Resolve an optional ticker argument against the configured default.
pub(crate) fn resolve_ticker(ticker: Option<String>) -> Result<String, Box<dyn Error>> {
    match ticker {
        Some(t) => Ok(t.trim().to_uppercase()),
        None => Ok(Config::load()?.dashboard.default_ticker),
    }
}
