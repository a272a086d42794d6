//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the PokeAPI (no trailing slash)
    pub api_base_url: String,
    /// Response cache TTL in seconds, also the reaper wake period
    pub cache_ttl_secs: u64,
}

/// Default PokeAPI base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_URL` - Base URL of the PokeAPI (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_TTL_SECS` - Cache TTL in seconds (default: 5)
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("POKEDEX_API_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            cache_ttl_secs: env::var("POKEDEX_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_ttl_secs: 5,
        }
    }
}
