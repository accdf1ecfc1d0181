use super::PokeApi;
use futures::future::join_all;
use log::warn;
use pokedex_core::evolution::{attach_sprites, flatten_chain};
use pokedex_core::types::{EvolutionChain, EvolutionStage};
use pokedex_core::urls::IdOrName;

/// Flatten `chain` and resolve every stage's sprite.
pub async fn evolution_stages(api: &PokeApi, chain: &EvolutionChain) -> Vec<EvolutionStage> {
    resolve_sprites(api, flatten_chain(&chain.chain)).await
}

/// Look up sprites for all stages concurrently, best-effort.
///
/// A stage whose lookup fails keeps no sprite and the rest of the chain is
/// unaffected. Stages with id 0 (unparseable species URL) are not looked up.
pub async fn resolve_sprites(api: &PokeApi, stages: Vec<EvolutionStage>) -> Vec<EvolutionStage> {
    let lookups = stages.iter().map(|stage| async move {
        if stage.id == 0 {
            return None;
        }

        match api.pokemon(&IdOrName::Id(stage.id)).await {
            Ok(pokemon) => pokemon.sprites.front_default,
            Err(e) => {
                warn!("no sprite for evolution stage {}: {e}", stage.name);
                None
            }
        }
    });

    let sprites = join_all(lookups).await;
    attach_sprites(stages, sprites)
}
