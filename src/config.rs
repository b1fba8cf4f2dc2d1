//! Server configuration.
//!
//! Compiled-in defaults match the reference deployment (loopback, port
//! 5002). An optional `config.toml` next to the binary or `CWSMS_`-prefixed
//! environment variables override them.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// IP address the HTTP listener binds to
    pub host: String,

    /// TCP port the HTTP listener binds to
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration, falling back to defaults when no file or
    /// environment overrides are present.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 5002)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("CWSMS"))
            .build()?
            .try_deserialize()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
