//! Runtime settings resolved from flags and `POKEDEX_*` variables

use crate::prelude::*;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API root without a trailing slash
    pub api_base: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    pub verbose: bool,
}

impl Config {
    pub fn from_global(global: &crate::Global) -> Result<Self> {
        let api_base = global.api_base.trim().trim_end_matches('/').to_string();
        if api_base.is_empty() {
            return Err(eyre!("API base URL cannot be empty (--api-base or POKEDEX_API_BASE)"));
        }
        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(eyre!("API base URL must be http(s): {}", api_base));
        }

        let timeout = match global.timeout {
            Some(0) => return Err(eyre!("Timeout must be at least 1 second")),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Self {
            api_base,
            timeout,
            verbose: global.verbose,
        })
    }
}

/// Reject a zero page size before it reaches the pagination math
pub fn page_size(limit: u64) -> Result<u64> {
    if limit == 0 {
        return Err(eyre!("Page size must be at least 1 (--limit or POKEDEX_PAGE_SIZE)"));
    }
    Ok(limit)
}
