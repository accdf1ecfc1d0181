use crate::client::{FetchCache, HttpTransport, PokeApi};
use crate::config::Config;
use crate::prelude::{eprintln, *};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::sync::Arc;

pub mod browse;
pub mod list;
pub mod render;
pub mod search;
pub mod show;
pub mod types;

/// Build the API client every command shares: HTTP transport, one cache.
pub fn connect(config: &Config) -> Result<Arc<PokeApi>> {
    let transport = HttpTransport::new(config.timeout).context("Failed to build HTTP client")?;
    let cache = Arc::new(FetchCache::new(Arc::new(transport)));
    let api = PokeApi::new(config.api_base.clone(), cache);

    if config.verbose {
        eprintln!("PokéAPI base: {}", api.base());
        if let Some(timeout) = config.timeout {
            eprintln!("Request timeout: {}s", timeout.as_secs());
        }
        eprintln!();
    }

    Ok(Arc::new(api))
}

/// Progress spinner on stderr; callers clear it before printing results
pub fn new_spinner(message: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message(message.to_string());
    Ok(spinner)
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| eyre!("JSON serialization failed: {}", e))
}
