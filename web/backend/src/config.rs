use crate::wikipedia::DEFAULT_BASE_URL;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;
use wikirace_core::SearchConfig;

/// Server settings, read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub wikipedia_base_url: String,
    pub fetch_timeout: Duration,
    pub cache_capacity: u64,
    pub cache_ttl: Duration,
    pub search: SearchConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = SearchConfig::default();

        let search = SearchConfig::new(
            env_or("WIKIRACE_WORKERS", defaults.workers),
            env_or("WIKIRACE_FRONTIER_CAPACITY", defaults.frontier_capacity),
            Duration::from_secs(env_or(
                "WIKIRACE_TIME_BUDGET_SECS",
                defaults.time_budget.as_secs(),
            )),
            env_or("WIKIRACE_MAX_DEPTH", defaults.max_depth),
        );

        Self {
            bind_addr: env_or("WIKIRACE_BIND_ADDR", "0.0.0.0:8080".to_string()),
            wikipedia_base_url: env_or("WIKIPEDIA_BASE_URL", DEFAULT_BASE_URL.to_string()),
            fetch_timeout: Duration::from_secs(env_or("WIKIRACE_FETCH_TIMEOUT_SECS", 10)),
            cache_capacity: env_or("WIKIRACE_CACHE_CAPACITY", 50_000),
            cache_ttl: Duration::from_secs(env_or("WIKIRACE_CACHE_TTL_SECS", 60 * 60)),
            search,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Ignoring unparsable environment value");
            default
        }),
        Err(_) => default,
    }
}
