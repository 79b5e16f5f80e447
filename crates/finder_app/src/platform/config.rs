use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use finder_engine::{ClientSettings, DEFAULT_BASE_URL};

/// Terminal movie search backed by the OMDb API.
#[derive(Debug, Clone, Parser)]
#[command(name = "movie_finder", version, about)]
pub struct Args {
    /// OMDb API key. Not validated; an empty key is sent as-is.
    #[arg(long, env = "API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Search endpoint.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Initial address bar, e.g. `http://localhost/?search=batman`.
    #[arg(long, default_value = "http://localhost/")]
    pub location: String,

    /// Quiet period before a typed term is searched.
    #[arg(long, default_value_t = 1000)]
    pub debounce_ms: u64,

    #[arg(long, default_value_t = 10)]
    pub connect_timeout_secs: u64,

    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    #[arg(long, default_value = "./movie_finder.log")]
    pub log_file: PathBuf,

    /// One of off, error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..ClientSettings::default()
        }
    }
}
