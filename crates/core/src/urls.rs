//! Canonical upstream URLs and identifier extraction
//!
//! Builders produce the exact strings the fetch cache keys on, so two
//! callers asking for the same resource always share one cache entry.
//! Extractors pull the trailing numeric id out of a resource URL and
//! return 0 when the URL does not have the expected shape.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Public PokéAPI root
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

static POKEMON_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/pokemon/(\d+)/").expect("valid pokemon id pattern"));
static EVOLUTION_CHAIN_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/evolution-chain/(\d+)/").expect("valid evolution chain id pattern")
});
static SPECIES_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/pokemon-species/(\d+)/").expect("valid species id pattern")
});

/// Target of a detail lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum IdOrName {
    Id(u32),
    Name(String),
}

impl IdOrName {
    /// Parse user input: all digits is an id, anything else a lowercase name
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<u32>() {
            Ok(id) => Some(IdOrName::Id(id)),
            Err(_) => Some(IdOrName::Name(trimmed.to_lowercase())),
        }
    }
}

impl fmt::Display for IdOrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdOrName::Id(id) => write!(f, "{id}"),
            IdOrName::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<u32> for IdOrName {
    fn from(id: u32) -> Self {
        IdOrName::Id(id)
    }
}

impl From<&str> for IdOrName {
    fn from(name: &str) -> Self {
        IdOrName::Name(name.to_string())
    }
}

fn segment(value: &IdOrName) -> String {
    match value {
        IdOrName::Id(id) => id.to_string(),
        IdOrName::Name(name) => urlencoding::encode(name).into_owned(),
    }
}

pub fn pokemon_list_url(base: &str, offset: u64, limit: u64) -> String {
    format!("{base}/pokemon?offset={offset}&limit={limit}")
}

pub fn pokemon_url(base: &str, id_or_name: &IdOrName) -> String {
    format!("{base}/pokemon/{}", segment(id_or_name))
}

pub fn species_url(base: &str, id_or_name: &IdOrName) -> String {
    format!("{base}/pokemon-species/{}", segment(id_or_name))
}

pub fn evolution_chain_url(base: &str, id: u32) -> String {
    format!("{base}/evolution-chain/{id}")
}

pub fn type_list_url(base: &str) -> String {
    format!("{base}/type")
}

pub fn type_url(base: &str, type_name: &str) -> String {
    format!("{base}/type/{}", urlencoding::encode(type_name))
}

fn capture_id(re: &Regex, url: &str) -> u32 {
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Id from `.../pokemon/{id}/`, 0 when absent
pub fn pokemon_id_from_url(url: &str) -> u32 {
    capture_id(&POKEMON_ID, url)
}

/// Id from `.../evolution-chain/{id}/`, 0 when absent
pub fn evolution_chain_id_from_url(url: &str) -> u32 {
    capture_id(&EVOLUTION_CHAIN_ID, url)
}

/// Id from `.../pokemon-species/{id}/`, 0 when absent
pub fn species_id_from_url(url: &str) -> u32 {
    capture_id(&SPECIES_ID, url)
}
