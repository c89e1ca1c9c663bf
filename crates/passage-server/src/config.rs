//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PASSAGE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3001),
        }
    }
}
