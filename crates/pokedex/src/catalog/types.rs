//! Type names offered as search filters

use crate::client::PokeApi;
use log::info;
use pokedex_core::state::{Phase, RequestTokens};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TypeFilterState {
    pub phase: Phase,
    pub names: Vec<String>,
    pub error: Option<String>,
}

pub struct TypeFilter {
    api: Arc<PokeApi>,
    tokens: RequestTokens,
    state: RwLock<TypeFilterState>,
}

impl TypeFilter {
    pub fn new(api: Arc<PokeApi>) -> Self {
        Self {
            api,
            tokens: RequestTokens::new(),
            state: RwLock::new(TypeFilterState::default()),
        }
    }

    pub async fn snapshot(&self) -> TypeFilterState {
        self.state.read().await.clone()
    }

    /// Fetch the user-facing type names. Once loaded, later calls are served
    /// from the fetch cache.
    pub async fn load(&self) {
        let token = self.tokens.issue();
        {
            let mut state = self.state.write().await;
            state.phase = Phase::Loading;
            state.error = None;
        }

        let result = self.api.types().await;

        let mut state = self.state.write().await;
        if !self.tokens.is_current(token) {
            return;
        }

        match result {
            Ok(list) => {
                state.names = list.results.into_iter().map(|t| t.name).collect();
                info!("{} filterable types", state.names.len());
                state.phase = Phase::Ready;
            }
            Err(e) => {
                state.names.clear();
                state.error = Some(e.to_string());
                state.phase = Phase::Failed;
            }
        }
    }

    /// Whether `name` is one of the loaded filter types
    pub async fn contains(&self, name: &str) -> bool {
        self.state.read().await.names.iter().any(|n| n == name)
    }
}
