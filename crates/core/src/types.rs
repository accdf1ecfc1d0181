use serde::{Deserialize, Serialize};

/// A `{name, url}` pair, the upstream's generic link to another resource
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of `GET /pokemon?offset&limit`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PokemonListResponse {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Full catalog entry from `GET /pokemon/{idOrName}`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub sprites: PokemonSprites,
    pub types: Vec<PokemonTypeSlot>,
    pub stats: Vec<PokemonStat>,
    pub abilities: Vec<PokemonAbility>,
    pub species: NamedResource,
}

impl Pokemon {
    /// Type names in slot order
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.type_ref.name.as_str()).collect()
    }

    /// Exact type-tag membership
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.type_ref.name == type_name)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<SpriteVariant>,
    #[serde(default)]
    pub dream_world: Option<SpriteVariant>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct SpriteVariant {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PokemonAbility {
    pub ability: NamedResource,
    pub is_hidden: bool,
    pub slot: u8,
}

/// Species record from `GET /pokemon-species/{idOrName}`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    pub evolution_chain: ResourceUrl,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub genera: Vec<Genus>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ResourceUrl {
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LanguageRef {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: LanguageRef,
    pub version: LanguageRef,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Genus {
    pub genus: String,
    pub language: LanguageRef,
}

/// Evolution chain from `GET /evolution-chain/{id}`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

/// One node of the evolution tree
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
}

/// One alternative way of reaching a node. Upstream sends many more
/// fields; only the ones surfaced in a stage are decoded.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EvolutionDetail {
    pub min_level: Option<u32>,
    pub trigger: Option<TriggerRef>,
    pub item: Option<TriggerRef>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TriggerRef {
    pub name: String,
}

/// `GET /type`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TypeListResponse {
    pub count: u64,
    pub results: Vec<NamedResource>,
}

/// `GET /type/{name}`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TypeDetail {
    pub id: u32,
    pub name: String,
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TypeMember {
    pub pokemon: NamedResource,
    pub slot: u8,
}

/// Flattened projection of one evolution chain node
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvolutionStage {
    /// Species id parsed from the node's species URL, 0 when unparseable
    pub id: u32,
    pub name: String,
    pub sprite: Option<String>,
    pub min_level: Option<u32>,
    pub trigger: Option<String>,
    pub item: Option<String>,
}
