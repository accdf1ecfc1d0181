pub mod cache;
pub mod evolution;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use cache::FetchCache;
pub use transport::{HttpTransport, Transport};

use crate::error::Error;
use futures::future::join_all;
use log::debug;
use pokedex_core::search::user_facing_types;
use pokedex_core::types::{
    EvolutionChain, NamedResource, Pokemon, PokemonListResponse, PokemonSpecies, TypeDetail,
    TypeListResponse,
};
use pokedex_core::urls::{self, IdOrName};
use std::sync::Arc;

/// Typed accessors over the PokéAPI, all routed through one [`FetchCache`]
pub struct PokeApi {
    base: String,
    cache: Arc<FetchCache>,
}

impl PokeApi {
    pub fn new(base: impl Into<String>, cache: Arc<FetchCache>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            cache,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn cache(&self) -> &Arc<FetchCache> {
        &self.cache
    }

    /// One page of name/url stubs plus the catalog total
    pub async fn list(&self, offset: u64, limit: u64) -> Result<PokemonListResponse, Error> {
        self.cache
            .get(&urls::pokemon_list_url(&self.base, offset, limit))
            .await
    }

    pub async fn pokemon(&self, id_or_name: &IdOrName) -> Result<Pokemon, Error> {
        self.cache
            .get(&urls::pokemon_url(&self.base, id_or_name))
            .await
    }

    pub async fn species(&self, id_or_name: &IdOrName) -> Result<PokemonSpecies, Error> {
        self.cache
            .get(&urls::species_url(&self.base, id_or_name))
            .await
    }

    pub async fn evolution_chain(&self, id: u32) -> Result<EvolutionChain, Error> {
        self.cache
            .get(&urls::evolution_chain_url(&self.base, id))
            .await
    }

    /// Chain by the URL a species record embeds, fetched verbatim
    pub async fn evolution_chain_by_url(&self, url: &str) -> Result<EvolutionChain, Error> {
        self.cache.get(url).await
    }

    /// Type list without the `unknown` and `shadow` pseudo-types
    pub async fn types(&self) -> Result<TypeListResponse, Error> {
        let list: TypeListResponse = self.cache.get(&urls::type_list_url(&self.base)).await?;
        Ok(user_facing_types(list))
    }

    pub async fn pokemon_by_type(&self, type_name: &str) -> Result<TypeDetail, Error> {
        self.cache
            .get(&urls::type_url(&self.base, type_name))
            .await
    }

    /// Fetch full entries for `items` concurrently.
    ///
    /// Waits for every request, then returns entries in input order. If any
    /// request failed the whole batch fails with the first failure in input
    /// order.
    pub async fn fetch_many(&self, items: &[NamedResource]) -> Result<Vec<Pokemon>, Error> {
        debug!("fetching {} entries", items.len());

        let lookups = items.iter().map(|item| async move {
            self.pokemon(&IdOrName::Name(item.name.clone())).await
        });

        join_all(lookups).await.into_iter().collect()
    }
}
