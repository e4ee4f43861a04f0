use std::net::SocketAddr;
use std::path::PathBuf;

use log::warn;

use crate::storage::{is_valid_key, DEFAULT_LAYOUT_KEY};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Server settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Directory of the file-backed key-value store.
    pub data_dir: PathBuf,
    /// Key the garden layout is saved under.
    pub layout_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            layout_key: DEFAULT_LAYOUT_KEY.into(),
        }
    }
}

impl AppConfig {
    /// Reads `GARDEN_BIND_ADDR`, `GARDEN_DATA_DIR` and `GARDEN_LAYOUT_KEY`
    /// from the process environment. `main` loads `.env` beforehand.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Unset or empty
    /// variables keep their default; invalid ones are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(addr) = get("GARDEN_BIND_ADDR") {
            if addr.parse::<SocketAddr>().is_ok() {
                config.bind_addr = addr;
            } else {
                warn!(
                    "GARDEN_BIND_ADDR '{addr}' is not a socket address, using {DEFAULT_BIND_ADDR}"
                );
            }
        }
        if let Some(dir) = get("GARDEN_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(key) = get("GARDEN_LAYOUT_KEY") {
            if is_valid_key(&key) {
                config.layout_key = key;
            } else {
                warn!("GARDEN_LAYOUT_KEY '{key}' is not a valid key, using {DEFAULT_LAYOUT_KEY}");
            }
        }
        config
    }
}
