use crate::scrapers::SavedSearch;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Artificial delay applied to every search response so the UI's loading
/// state is exercised even when a tier answers instantly.
const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(1000);

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Key for the third-party search API. `None` disables that tier.
    pub rapidapi_key: Option<String>,
    pub response_delay: Duration,
    pub saved_searches_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            rapidapi_key: None,
            response_delay: DEFAULT_RESPONSE_DELAY,
            saved_searches_path: PathBuf::from("saved_searches.json"),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            // An empty key counts as unset.
            rapidapi_key: env::var("RAPIDAPI_KEY").ok().filter(|key| !key.is_empty()),
            response_delay: env::var("RESPONSE_DELAY_MS")
                .ok()
                .and_then(|ms| ms.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.response_delay),
            saved_searches_path: env::var("SAVED_SEARCHES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.saved_searches_path),
        }
    }

    /// Load saved searches from disk. Read once at startup; edits on disk
    /// are not picked up until restart. A missing or unreadable file is
    /// treated as "no saved searches".
    pub fn load_saved_searches(&self) -> Vec<SavedSearch> {
        let raw = match std::fs::read_to_string(&self.saved_searches_path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!(
                    "No saved searches file at {}",
                    self.saved_searches_path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(searches) => searches,
            Err(error) => {
                warn!(
                    %error,
                    path = %self.saved_searches_path.display(),
                    "Ignoring malformed saved searches file"
                );
                Vec::new()
            }
        }
    }
}
