//! Single-entry detail view with species data and the evolution chain
//!
//! Each step needs the previous step's output (species by entry id, chain
//! by the URL in the species record), so the steps run in sequence. Any
//! failure discards every partial result of that attempt.

use crate::client::evolution::evolution_stages;
use crate::client::PokeApi;
use crate::error::Error;
use log::{debug, info};
use pokedex_core::state::{Phase, RequestTokens};
use pokedex_core::types::{EvolutionStage, Pokemon, PokemonSpecies};
use pokedex_core::urls::IdOrName;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DetailState {
    pub phase: Phase,
    pub target: Option<IdOrName>,
    pub pokemon: Option<Pokemon>,
    pub species: Option<PokemonSpecies>,
    pub evolution: Vec<EvolutionStage>,
    pub error: Option<String>,
}

struct Detail {
    pokemon: Pokemon,
    species: PokemonSpecies,
    evolution: Vec<EvolutionStage>,
}

pub struct DetailController {
    api: Arc<PokeApi>,
    tokens: RequestTokens,
    state: RwLock<DetailState>,
}

impl DetailController {
    pub fn new(api: Arc<PokeApi>) -> Self {
        Self {
            api,
            tokens: RequestTokens::new(),
            state: RwLock::new(DetailState::default()),
        }
    }

    pub async fn snapshot(&self) -> DetailState {
        self.state.read().await.clone()
    }

    /// Point the view at `target`; `None` resets to idle with no data
    pub async fn select(&self, target: Option<IdOrName>) {
        match target {
            Some(target) => self.fetch(target).await,
            None => {
                self.tokens.issue();
                *self.state.write().await = DetailState::default();
            }
        }
    }

    /// Reload the current target, if any
    pub async fn refetch(&self) {
        let target = self.state.read().await.target.clone();
        self.select(target).await;
    }

    /// Navigate to the `index`-th evolution stage of the loaded chain.
    ///
    /// Returns `false` when there is no such stage or its id is unknown.
    pub async fn open_stage(&self, index: usize) -> bool {
        let id = {
            let state = self.state.read().await;
            match state.evolution.get(index) {
                Some(stage) if stage.id != 0 => stage.id,
                _ => return false,
            }
        };

        self.fetch(IdOrName::Id(id)).await;
        true
    }

    async fn fetch(&self, target: IdOrName) {
        let token = self.tokens.issue();
        {
            let mut state = self.state.write().await;
            state.target = Some(target.clone());
            state.phase = Phase::Loading;
            state.error = None;
        }

        let result = self.load(&target).await;

        let mut state = self.state.write().await;
        if !self.tokens.is_current(token) {
            debug!("discarding superseded detail response for {target}");
            return;
        }

        match result {
            Ok(detail) => {
                info!(
                    "{}: {} evolution stages",
                    detail.pokemon.name,
                    detail.evolution.len()
                );
                state.pokemon = Some(detail.pokemon);
                state.species = Some(detail.species);
                state.evolution = detail.evolution;
                state.phase = Phase::Ready;
            }
            Err(e) => {
                state.pokemon = None;
                state.species = None;
                state.evolution.clear();
                state.error = Some(e.to_string());
                state.phase = Phase::Failed;
            }
        }
    }

    async fn load(&self, target: &IdOrName) -> Result<Detail, Error> {
        let pokemon = self.api.pokemon(target).await?;
        let species = self.api.species(&IdOrName::Id(pokemon.id)).await?;
        let chain = self
            .api
            .evolution_chain_by_url(&species.evolution_chain.url)
            .await?;
        let evolution = evolution_stages(&self.api, &chain).await;

        Ok(Detail {
            pokemon,
            species,
            evolution,
        })
    }
}
