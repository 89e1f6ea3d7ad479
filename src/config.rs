//! Startup configuration read from the environment (and `.env`, if present).

use std::{fmt, path::PathBuf, time::Duration};

use crate::error::{Result, ServiceError};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct Config {
    pub bind_addr: String,
    /// JSON matrix of plant codes; the built-in layout is used when unset.
    pub layout_file: Option<PathBuf>,
    pub dialogflow_url: Option<String>,
    pub dialogflow_token: String,
    pub dialogflow_timeout: Duration,
}

impl Config {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = match get("DIALOGFLOW_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ServiceError::config(format!(
                    "DIALOGFLOW_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                ))
            })?,
        };

        Ok(Self {
            bind_addr: get("IRRIGATION_BIND_ADDR")
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            layout_file: get("IRRIGATION_LAYOUT_FILE").map(PathBuf::from),
            dialogflow_url: get("DIALOGFLOW_URL"),
            dialogflow_token: get("DIALOGFLOW_TOKEN").unwrap_or_default(),
            dialogflow_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bind_addr", &self.bind_addr)
            .field("layout_file", &self.layout_file)
            .field("dialogflow_url", &self.dialogflow_url)
            .field("dialogflow_token", &"<redacted>")
            .field("dialogflow_timeout", &self.dialogflow_timeout)
            .finish()
    }
}
