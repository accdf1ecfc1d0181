//! Evolution chain flattening
//!
//! The upstream chain is a tree rooted at the base form. The detail view
//! shows it as a flat row of stages, visited root first and then each
//! child subtree in listing order (pre-order depth-first).

use crate::types::{ChainLink, EvolutionStage};
use crate::urls::species_id_from_url;

/// Project a single node into a stage with no sprite.
///
/// Only the first evolution detail is surfaced; nodes that list several
/// alternative triggers show the first one. A level of 0 means no level.
pub fn stage_from_link(link: &ChainLink) -> EvolutionStage {
    let detail = link.evolution_details.first();

    EvolutionStage {
        id: species_id_from_url(&link.species.url),
        name: link.species.name.clone(),
        sprite: None,
        min_level: detail.and_then(|d| d.min_level).filter(|level| *level > 0),
        trigger: detail
            .and_then(|d| d.trigger.as_ref())
            .map(|t| t.name.clone()),
        item: detail.and_then(|d| d.item.as_ref()).map(|i| i.name.clone()),
    }
}

/// Flatten a chain into one stage per node in pre-order.
pub fn flatten_chain(root: &ChainLink) -> Vec<EvolutionStage> {
    let mut stages = Vec::new();
    let mut stack: Vec<&ChainLink> = vec![root];

    while let Some(link) = stack.pop() {
        stages.push(stage_from_link(link));
        // Reversed so the first child is popped next
        stack.extend(link.evolves_to.iter().rev());
    }

    stages
}

/// Pair each stage with its resolved sprite, positionally.
///
/// A missing sprite leaves the stage's sprite untouched.
pub fn attach_sprites(
    stages: Vec<EvolutionStage>,
    sprites: Vec<Option<String>>,
) -> Vec<EvolutionStage> {
    let mut sprites = sprites.into_iter();
    stages
        .into_iter()
        .map(|stage| match sprites.next().flatten() {
            Some(sprite) => EvolutionStage {
                sprite: Some(sprite),
                ..stage
            },
            None => stage,
        })
        .collect()
}
