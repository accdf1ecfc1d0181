//! Paginated catalog listing
//!
//! `idle → loading → ready | failed`, re-entering `loading` on every page
//! change or refetch. A page load fetches the stub listing for the page and
//! then the full entry for every stub.

use crate::client::PokeApi;
use crate::error::Error;
use log::{debug, info};
use pokedex_core::pagination::{self, is_page_in_range, page_offset, PageInfo};
use pokedex_core::state::{Phase, RequestTokens};
use pokedex_core::types::Pokemon;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListState {
    pub phase: Phase,
    pub pokemon: Vec<Pokemon>,
    pub error: Option<String>,
    pub total_count: u64,
    pub current_page: u64,
    pub page_size: u64,
}

impl ListState {
    fn new(page_size: u64, current_page: u64) -> Self {
        Self {
            phase: Phase::Idle,
            pokemon: Vec::new(),
            error: None,
            total_count: 0,
            current_page,
            page_size,
        }
    }

    /// 0 until the first listing reports a count
    pub fn total_pages(&self) -> u64 {
        pagination::total_pages(self.total_count, self.page_size)
    }

    pub fn page_info(&self) -> PageInfo {
        pagination::page_info(self.current_page, self.page_size, self.total_count)
    }
}

pub struct ListController {
    api: Arc<PokeApi>,
    page_size: u64,
    tokens: RequestTokens,
    state: RwLock<ListState>,
}

impl ListController {
    pub fn new(api: Arc<PokeApi>, page_size: u64) -> Self {
        Self::starting_at(api, page_size, 1)
    }

    /// Controller whose first [`ListController::load`] fetches `page`
    pub fn starting_at(api: Arc<PokeApi>, page_size: u64, page: u64) -> Self {
        let page_size = page_size.max(1);
        Self {
            api,
            page_size,
            tokens: RequestTokens::new(),
            state: RwLock::new(ListState::new(page_size, page.max(1))),
        }
    }

    pub async fn snapshot(&self) -> ListState {
        self.state.read().await.clone()
    }

    /// Load the current page
    pub async fn load(&self) {
        let page = self.state.read().await.current_page;
        self.fetch_page(page).await;
    }

    pub async fn refetch(&self) {
        self.load().await;
    }

    /// Move to `page` and load it.
    ///
    /// Returns `false` without touching state when `page` is outside
    /// `[1, total_pages]`, which includes every page before the first load.
    pub async fn go_to_page(&self, page: u64) -> bool {
        {
            let mut state = self.state.write().await;
            if !is_page_in_range(page, state.total_pages()) {
                debug!(
                    "page {page} rejected, {} pages available",
                    state.total_pages()
                );
                return false;
            }
            state.current_page = page;
        }

        self.fetch_page(page).await;
        true
    }

    pub async fn next_page(&self) -> bool {
        let current = self.state.read().await.current_page;
        self.go_to_page(current + 1).await
    }

    pub async fn prev_page(&self) -> bool {
        let current = self.state.read().await.current_page;
        self.go_to_page(current.saturating_sub(1)).await
    }

    async fn fetch_page(&self, page: u64) {
        let token = self.tokens.issue();
        {
            let mut state = self.state.write().await;
            state.phase = Phase::Loading;
            state.error = None;
        }

        let result = self.load_page(token, page).await;

        let mut state = self.state.write().await;
        if !self.tokens.is_current(token) {
            debug!("discarding superseded response for page {page}");
            return;
        }

        match result {
            Ok(pokemon) => {
                info!("page {page}: {} entries", pokemon.len());
                state.pokemon = pokemon;
                state.phase = Phase::Ready;
            }
            Err(e) => {
                state.pokemon.clear();
                state.error = Some(e.to_string());
                state.phase = Phase::Failed;
            }
        }
    }

    async fn load_page(&self, token: u64, page: u64) -> Result<Vec<Pokemon>, Error> {
        let offset = page_offset(page, self.page_size);
        let listing = self.api.list(offset, self.page_size).await?;

        {
            let mut state = self.state.write().await;
            if self.tokens.is_current(token) {
                state.total_count = listing.count;
            }
        }

        self.api.fetch_many(&listing.results).await
    }
}
