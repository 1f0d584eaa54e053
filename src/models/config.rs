//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// When unset the service falls back to the built-in static directory.
    #[serde(default)]
    pub database_url: Option<String>,
}
