//! In-memory transport and fixture payloads for orchestration tests

use super::transport::Transport;
use crate::error::Error;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

pub const BASE: &str = "https://pokeapi.test/api/v2";

#[derive(Clone)]
enum Reply {
    Json(Value),
    Fail(Error),
}

/// Serves canned replies per URL and records every request.
///
/// Unknown URLs answer 404. A URL can be delayed or held until released,
/// which lets tests control completion order.
#[derive(Default)]
pub struct FakeTransport {
    replies: Mutex<HashMap<String, Reply>>,
    delays: Mutex<HashMap<String, Duration>>,
    holds: Mutex<HashMap<String, Arc<Notify>>>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, url: impl Into<String>, body: Value) {
        self.replies
            .lock()
            .unwrap()
            .insert(url.into(), Reply::Json(body));
    }

    pub fn fail(&self, url: impl Into<String>, status: u16, status_text: &str) {
        self.replies.lock().unwrap().insert(
            url.into(),
            Reply::Fail(Error::Http {
                status,
                status_text: status_text.to_string(),
            }),
        );
    }

    pub fn delay(&self, url: impl Into<String>, delay: Duration) {
        self.delays.lock().unwrap().insert(url.into(), delay);
    }

    /// Block replies for `url` until the returned handle is notified
    pub fn hold(&self, url: impl Into<String>) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.holds
            .lock()
            .unwrap()
            .insert(url.into(), Arc::clone(&notify));
        notify
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.as_str() == url)
            .count()
    }

    pub fn total_requests(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Register a full catalog entry under both its id and name URLs
    pub fn add_pokemon(&self, id: u32, name: &str, types: &[&str]) {
        let body = pokemon_json(id, name, types);
        self.respond(format!("{BASE}/pokemon/{id}"), body.clone());
        self.respond(format!("{BASE}/pokemon/{name}"), body);
    }

    /// Register a catalog listing of `names`, ids assigned from 1
    pub fn add_listing(&self, offset: u64, limit: u64, count: u64, names: &[&str]) {
        let results: Vec<Value> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                json!({
                    "name": name,
                    "url": format!("{BASE}/pokemon/{}/", offset + i as u64 + 1),
                })
            })
            .collect();

        self.respond(
            format!("{BASE}/pokemon?offset={offset}&limit={limit}"),
            json!({
                "count": count,
                "next": null,
                "previous": null,
                "results": results,
            }),
        );
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get_json(&self, url: &str) -> Result<Value, Error> {
        self.requests.lock().unwrap().push(url.to_string());

        let hold = self.holds.lock().unwrap().get(url).cloned();
        if let Some(notify) = hold {
            notify.notified().await;
        }

        let delay = self.delays.lock().unwrap().get(url).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.replies.lock().unwrap().get(url).cloned();
        match reply {
            Some(Reply::Json(body)) => Ok(body),
            Some(Reply::Fail(err)) => Err(err),
            None => Err(Error::Http {
                status: 404,
                status_text: "Not Found".to_string(),
            }),
        }
    }
}

pub fn pokemon_json(id: u32, name: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| {
            json!({
                "slot": i + 1,
                "type": { "name": t, "url": format!("{BASE}/type/{t}/") },
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "sprites": {
            "front_default": format!("https://sprites.test/{id}.png"),
            "front_shiny": null,
            "other": {
                "official-artwork": { "front_default": format!("https://sprites.test/art/{id}.png") }
            }
        },
        "types": types,
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "" } }
        ],
        "abilities": [
            { "ability": { "name": "overgrow", "url": "" }, "is_hidden": false, "slot": 1 }
        ],
        "species": { "name": name, "url": format!("{BASE}/pokemon-species/{id}/") }
    })
}

pub fn species_json(id: u32, name: &str, chain_id: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "evolution_chain": { "url": format!("{BASE}/evolution-chain/{chain_id}/") },
        "flavor_text_entries": [
            {
                "flavor_text": "A strange seed was\u{c}planted on its back.",
                "language": { "name": "en" },
                "version": { "name": "red" }
            }
        ],
        "genera": [{ "genus": "Seed Pokémon", "language": { "name": "en" } }]
    })
}

/// `(id, name, first-detail min level, children)` tree to chain JSON
pub fn chain_link_json(id: u32, name: &str, min_level: Option<u32>, children: Vec<Value>) -> Value {
    let details = match min_level {
        Some(level) => json!([{
            "min_level": level,
            "trigger": { "name": "level-up", "url": "" },
            "item": null
        }]),
        None => json!([]),
    };

    json!({
        "species": { "name": name, "url": format!("{BASE}/pokemon-species/{id}/") },
        "evolution_details": details,
        "evolves_to": children,
    })
}
