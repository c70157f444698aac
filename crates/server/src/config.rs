//! Server configuration read from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_PREVIEW_SIZE: usize = 3;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// JSON catalog file or directory; the built-in seed catalog when `None`
    pub catalog_path: Option<PathBuf>,
    pub preview_size: usize,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            catalog_path: None,
            preview_size: DEFAULT_PREVIEW_SIZE,
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

impl ServerConfig {
    /// Read `UMRAH_BIND_ADDR`, `UMRAH_CATALOG_PATH`, `UMRAH_PREVIEW_SIZE`
    /// and `UMRAH_REQUEST_TIMEOUT_MS`. Only a malformed bind address is an
    /// error; unparsable numbers fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let bind = env::var("UMRAH_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid UMRAH_BIND_ADDR '{bind}'"))?;

        let catalog_path = env::var("UMRAH_CATALOG_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            catalog_path,
            preview_size: env_usize("UMRAH_PREVIEW_SIZE", DEFAULT_PREVIEW_SIZE),
            request_timeout: Duration::from_millis(env_u64(
                "UMRAH_REQUEST_TIMEOUT_MS",
                DEFAULT_REQUEST_TIMEOUT_MS,
            )),
        })
    }
}
