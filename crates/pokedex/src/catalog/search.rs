//! Name and type search over the catalog

use crate::client::PokeApi;
use crate::error::Error;
use log::{debug, info};
use pokedex_core::search::{
    filter_by_name, filter_by_type, plan_search, SearchPlan, SEARCH_CATALOG_LIMIT,
    SEARCH_RESULT_CAP,
};
use pokedex_core::state::{Phase, RequestTokens};
use pokedex_core::types::{NamedResource, Pokemon};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SearchState {
    /// `false` is the idle state; `phase` only matters while searching
    pub searching: bool,
    pub phase: Phase,
    pub results: Vec<Pokemon>,
    pub error: Option<String>,
    pub query: String,
    pub type_name: Option<String>,
}

pub struct SearchController {
    api: Arc<PokeApi>,
    tokens: RequestTokens,
    state: RwLock<SearchState>,
}

impl SearchController {
    pub fn new(api: Arc<PokeApi>) -> Self {
        Self {
            api,
            tokens: RequestTokens::new(),
            state: RwLock::new(SearchState::default()),
        }
    }

    pub async fn snapshot(&self) -> SearchState {
        self.state.read().await.clone()
    }

    /// Run a search. Empty query and no type is the same as [`Self::clear`].
    pub async fn search(&self, query: &str, type_name: Option<&str>) {
        let plan = plan_search(query.trim(), type_name.map(str::trim));
        if plan == SearchPlan::Clear {
            self.clear().await;
            return;
        }

        let token = self.tokens.issue();
        {
            let mut state = self.state.write().await;
            state.searching = true;
            state.phase = Phase::Loading;
            state.error = None;
            state.query = query.trim().to_string();
            state.type_name = match &plan {
                SearchPlan::ByType { type_name } => Some(type_name.clone()),
                SearchPlan::ByName { type_name, .. } => type_name.clone(),
                SearchPlan::Clear => None,
            };
        }

        let result = self.run(&plan).await;

        let mut state = self.state.write().await;
        if !self.tokens.is_current(token) {
            debug!("discarding superseded search response for {plan:?}");
            return;
        }

        match result {
            Ok(results) => {
                info!("search matched {} entries", results.len());
                state.results = results;
                state.phase = Phase::Ready;
            }
            Err(e) => {
                state.results.clear();
                state.error = Some(e.to_string());
                state.phase = Phase::Failed;
            }
        }
    }

    /// Back to idle; a search still in flight is discarded when it lands
    pub async fn clear(&self) {
        self.tokens.issue();
        *self.state.write().await = SearchState::default();
    }

    async fn run(&self, plan: &SearchPlan) -> Result<Vec<Pokemon>, Error> {
        match plan {
            SearchPlan::Clear => Ok(Vec::new()),
            SearchPlan::ByType { type_name } => {
                let detail = self.api.pokemon_by_type(type_name).await?;
                let members: Vec<NamedResource> = detail
                    .pokemon
                    .into_iter()
                    .take(SEARCH_RESULT_CAP)
                    .map(|member| member.pokemon)
                    .collect();
                self.api.fetch_many(&members).await
            }
            SearchPlan::ByName { query, type_name } => {
                let catalog = self.api.list(0, SEARCH_CATALOG_LIMIT).await?;
                let matches = filter_by_name(&catalog.results, query, SEARCH_RESULT_CAP);
                debug!("{} catalog names match {query:?}", matches.len());

                let pokemon = self.api.fetch_many(&matches).await?;
                Ok(match type_name {
                    Some(type_name) => filter_by_type(pokemon, type_name),
                    None => pokemon,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FakeTransport, BASE};
    use crate::client::FetchCache;
    use serde_json::json;

    fn controller(transport: &Arc<FakeTransport>) -> SearchController {
        let cache = Arc::new(FetchCache::new(transport.clone()));
        SearchController::new(Arc::new(PokeApi::new(BASE, cache)))
    }

    fn catalog_url() -> String {
        format!("{BASE}/pokemon?offset=0&limit=1000")
    }

    /// 1000-entry catalog with 45 names containing "char" in mixed case
    fn seed_catalog(transport: &FakeTransport) {
        let mut names: Vec<String> = Vec::new();
        for i in 1..=45 {
            let name = if i % 2 == 0 {
                format!("Char-{i}")
            } else {
                format!("xchar-{i}")
            };
            names.push(name);
        }
        for i in 46..=1000 {
            names.push(format!("other-{i}"));
        }
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        transport.add_listing(0, 1000, 1302, &refs);

        for (i, name) in names.iter().take(45).enumerate() {
            let kind = if i % 3 == 0 { "fire" } else { "normal" };
            transport.add_pokemon(i as u32 + 1, name, &[kind]);
        }
    }

    fn seed_type(transport: &FakeTransport, type_name: &str, members: u32) {
        let members: Vec<_> = (1..=members)
            .map(|id| {
                json!({
                    "pokemon": { "name": format!("{type_name}-{id}"), "url": "" },
                    "slot": 1
                })
            })
            .collect();
        transport.respond(
            format!("{BASE}/type/{type_name}"),
            json!({ "id": 10, "name": type_name, "pokemon": members }),
        );
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let search = controller(&FakeTransport::new());

        let state = search.snapshot().await;

        assert!(!state.searching);
        assert!(state.results.is_empty());
    }

    #[tokio::test]
    async fn test_name_query_scans_catalog_and_caps_results() {
        let transport = FakeTransport::new();
        seed_catalog(&transport);
        let search = controller(&transport);

        search.search("char", None).await;

        let state = search.snapshot().await;
        assert!(state.searching);
        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.results.len(), 40);
        assert_eq!(state.results[0].name, "xchar-1");
        assert_eq!(state.results[1].name, "Char-2");
        assert_eq!(transport.request_count(&catalog_url()), 1);
        // one listing plus one detail per capped match
        assert_eq!(transport.total_requests(), 41);
    }

    #[tokio::test]
    async fn test_query_is_case_insensitive() {
        let transport = FakeTransport::new();
        seed_catalog(&transport);
        let search = controller(&transport);

        search.search("CHAR-4", None).await;

        let names: Vec<String> = search
            .snapshot()
            .await
            .results
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(
            names,
            vec!["Char-4", "Char-40", "xchar-41", "Char-42", "xchar-43", "Char-44", "xchar-45"]
        );
    }

    #[tokio::test]
    async fn test_type_only_uses_type_members() {
        let transport = FakeTransport::new();
        seed_type(&transport, "fire", 50);
        for id in 1..=50 {
            transport.add_pokemon(id, &format!("fire-{id}"), &["fire"]);
        }
        let search = controller(&transport);

        search.search("", Some("fire")).await;

        let state = search.snapshot().await;
        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.type_name.as_deref(), Some("fire"));
        assert_eq!(state.results.len(), 40);
        assert_eq!(state.results[39].name, "fire-40");
        assert_eq!(transport.request_count(&catalog_url()), 0);
    }

    #[tokio::test]
    async fn test_query_with_type_post_filters() {
        let transport = FakeTransport::new();
        seed_catalog(&transport);
        let search = controller(&transport);

        search.search("char", Some("fire")).await;

        let state = search.snapshot().await;
        assert_eq!(state.phase, Phase::Ready);
        assert!(state.results.iter().all(|p| p.has_type("fire")));
        // every third of the first 40 matches
        assert_eq!(state.results.len(), 14);
        assert_eq!(transport.request_count(&format!("{BASE}/type/fire")), 0);
    }

    #[tokio::test]
    async fn test_empty_inputs_clear() {
        let transport = FakeTransport::new();
        seed_catalog(&transport);
        let search = controller(&transport);
        search.search("char", None).await;

        search.search("  ", Some("")).await;

        assert_eq!(search.snapshot().await, SearchState::default());
    }

    #[tokio::test]
    async fn test_failure_is_reported() {
        let transport = FakeTransport::new();
        transport.fail(catalog_url(), 500, "Internal Server Error");
        let search = controller(&transport);

        search.search("char", None).await;

        let state = search.snapshot().await;
        assert!(state.searching);
        assert_eq!(state.phase, Phase::Failed);
        assert!(state.results.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("API Error: 500 Internal Server Error")
        );
    }

    #[tokio::test]
    async fn test_one_failed_detail_fails_the_search() {
        let transport = FakeTransport::new();
        seed_catalog(&transport);
        transport.fail(format!("{BASE}/pokemon/Char-2"), 503, "Service Unavailable");
        let search = controller(&transport);

        search.search("char", None).await;

        let state = search.snapshot().await;
        assert_eq!(state.phase, Phase::Failed);
        assert!(state.results.is_empty());
    }

    #[tokio::test]
    async fn test_clear_resets_to_idle() {
        let transport = FakeTransport::new();
        seed_catalog(&transport);
        let search = controller(&transport);
        search.search("char", None).await;

        search.clear().await;

        assert_eq!(search.snapshot().await, SearchState::default());
    }

    #[tokio::test]
    async fn test_clear_during_search_discards_late_results() {
        let transport = FakeTransport::new();
        seed_catalog(&transport);
        let gate = transport.hold(catalog_url());
        let search = controller(&transport);

        let running = search.search("char", None);
        let clearing = async {
            while transport.request_count(&catalog_url()) == 0 {
                tokio::task::yield_now().await;
            }
            search.clear().await;
            gate.notify_one();
        };

        tokio::join!(running, clearing);

        assert_eq!(search.snapshot().await, SearchState::default());
    }

    #[tokio::test]
    async fn test_newer_search_wins() {
        let transport = FakeTransport::new();
        seed_catalog(&transport);
        seed_type(&transport, "water", 2);
        transport.add_pokemon(901, "water-1", &["water"]);
        transport.add_pokemon(902, "water-2", &["water"]);
        let gate = transport.hold(catalog_url());
        let search = controller(&transport);

        let slow = search.search("char", None);
        let fast = async {
            while transport.request_count(&catalog_url()) == 0 {
                tokio::task::yield_now().await;
            }
            search.search("", Some("water")).await;
            gate.notify_one();
        };

        tokio::join!(slow, fast);

        let state = search.snapshot().await;
        assert_eq!(state.type_name.as_deref(), Some("water"));
        let names: Vec<&str> = state.results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["water-1", "water-2"]);
    }
}
