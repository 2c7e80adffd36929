use crate::feed::pagination::PAGE_SIZE;
use crate::feed::DEFAULT_DEBOUNCE;
use crate::flickr::client::{DEFAULT_FEED_URL, DEFAULT_JSONP_CALLBACK};
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Public feed endpoint
    pub feed_url: String,
    /// Callback name the feed wraps its JSON in
    pub jsonp_callback: String,
    /// Quiet period before a search is sent
    pub debounce: Duration,
    /// Photos per page; 0 shows the whole feed on one page
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            jsonp_callback: DEFAULT_JSONP_CALLBACK.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            page_size: PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            } else {
                info!("No .env file found, using environment only");
            }
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok());
        info!(
            "Feed endpoint {} (page size {}, debounce {:?})",
            config.feed_url, config.page_size, config.debounce
        );
        config
    }

    /// Build a config from any key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let debounce_ms: u64 = parse_or(
            &lookup,
            "FLICKR_DEBOUNCE_MS",
            defaults.debounce.as_millis() as u64,
        );

        Self {
            feed_url: lookup("FLICKR_FEED_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.feed_url),
            jsonp_callback: lookup("FLICKR_JSONP_CALLBACK")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.jsonp_callback),
            debounce: Duration::from_millis(debounce_ms),
            page_size: parse_or(&lookup, "FLICKR_PAGE_SIZE", defaults.page_size),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
            default
        }),
        None => default,
    }
}
