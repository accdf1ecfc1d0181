//! Search planning and client-side filtering
//!
//! The upstream has no name search, so a name query scans the first
//! [`SEARCH_CATALOG_LIMIT`] catalog entries locally. Type filtering uses
//! the type endpoint when no name is given and a post-filter otherwise.

use crate::types::{NamedResource, Pokemon, TypeListResponse};

/// Catalog entries scanned for a name query
pub const SEARCH_CATALOG_LIMIT: u64 = 1000;

/// Detail fetches issued per search
pub const SEARCH_RESULT_CAP: usize = 40;

/// Built-in pseudo-types never offered as filters
pub const HIDDEN_TYPES: [&str; 2] = ["unknown", "shadow"];

/// Which upstream calls a search needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    /// Both inputs empty: equivalent to clearing the search
    Clear,
    /// Type members only
    ByType { type_name: String },
    /// Name scan, optionally narrowed by type after the details arrive
    ByName {
        query: String,
        type_name: Option<String>,
    },
}

/// Decide the plan for a query/type pair. Empty strings count as absent.
pub fn plan_search(query: &str, type_name: Option<&str>) -> SearchPlan {
    let type_name = type_name.filter(|t| !t.is_empty()).map(str::to_string);

    match (query.is_empty(), type_name) {
        (true, None) => SearchPlan::Clear,
        (true, Some(type_name)) => SearchPlan::ByType { type_name },
        (false, type_name) => SearchPlan::ByName {
            query: query.to_string(),
            type_name,
        },
    }
}

/// Case-insensitive substring match over names, first `cap` matches
pub fn filter_by_name(entries: &[NamedResource], query: &str, cap: usize) -> Vec<NamedResource> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .take(cap)
        .cloned()
        .collect()
}

/// Keep entries carrying the exact type tag
pub fn filter_by_type(pokemon: Vec<Pokemon>, type_name: &str) -> Vec<Pokemon> {
    pokemon
        .into_iter()
        .filter(|p| p.has_type(type_name))
        .collect()
}

pub fn is_hidden_type(name: &str) -> bool {
    HIDDEN_TYPES.contains(&name)
}

/// Drop the pseudo-types from a type listing; `count` is left as reported
pub fn user_facing_types(list: TypeListResponse) -> TypeListResponse {
    TypeListResponse {
        count: list.count,
        results: list
            .results
            .into_iter()
            .filter(|t| !is_hidden_type(&t.name))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PokemonSprites, PokemonTypeSlot};

    fn named(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{name}/"),
        }
    }

    fn pokemon(id: u32, name: &str, types: &[&str]) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            height: 1,
            weight: 1,
            sprites: PokemonSprites::default(),
            types: types
                .iter()
                .enumerate()
                .map(|(i, t)| PokemonTypeSlot {
                    slot: i as u8 + 1,
                    type_ref: named(t),
                })
                .collect(),
            stats: vec![],
            abilities: vec![],
            species: named(name),
        }
    }

    #[test]
    fn test_plan_empty_is_clear() {
        assert_eq!(plan_search("", None), SearchPlan::Clear);
        assert_eq!(plan_search("", Some("")), SearchPlan::Clear);
    }

    #[test]
    fn test_plan_type_only() {
        assert_eq!(
            plan_search("", Some("fire")),
            SearchPlan::ByType {
                type_name: "fire".to_string()
            }
        );
    }

    #[test]
    fn test_plan_query_with_and_without_type() {
        assert_eq!(
            plan_search("char", None),
            SearchPlan::ByName {
                query: "char".to_string(),
                type_name: None
            }
        );
        assert_eq!(
            plan_search("char", Some("fire")),
            SearchPlan::ByName {
                query: "char".to_string(),
                type_name: Some("fire".to_string())
            }
        );
    }

    #[test]
    fn test_filter_by_name_is_case_insensitive_substring() {
        let entries = vec![
            named("charmander"),
            named("bulbasaur"),
            named("charizard"),
            named("pikachu"),
        ];

        let hits = filter_by_name(&entries, "CHAR", SEARCH_RESULT_CAP);

        let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["charmander", "charizard"]);
    }

    #[test]
    fn test_filter_by_name_caps_in_listing_order() {
        let entries: Vec<NamedResource> = (0..100).map(|i| named(&format!("mon-{i}"))).collect();

        let hits = filter_by_name(&entries, "mon", SEARCH_RESULT_CAP);

        assert_eq!(hits.len(), 40);
        assert_eq!(hits[0].name, "mon-0");
        assert_eq!(hits[39].name, "mon-39");
    }

    #[test]
    fn test_filter_by_type_exact_membership() {
        let results = vec![
            pokemon(4, "charmander", &["fire"]),
            pokemon(6, "charizard", &["fire", "flying"]),
            pokemon(7, "squirtle", &["water"]),
        ];

        let flying = filter_by_type(results.clone(), "flying");
        assert_eq!(flying.len(), 1);
        assert_eq!(flying[0].id, 6);

        assert!(filter_by_type(results, "Fire").is_empty());
    }

    #[test]
    fn test_user_facing_types_drops_pseudo_types() {
        let list = TypeListResponse {
            count: 4,
            results: vec![named("normal"), named("unknown"), named("fire"), named("shadow")],
        };

        let filtered = user_facing_types(list);

        let names: Vec<&str> = filtered.results.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["normal", "fire"]);
        assert_eq!(filtered.count, 4);
    }
}
