//! Core library for pokedex
//!
//! This crate is the **Functional Core** of the pokedex catalog browser: the
//! upstream PokéAPI data model and every transformation applied to it, with
//! no I/O of any kind.
//!
//! # Architecture Overview
//!
//! - **`pokedex_core`** (this crate): payload types and pure functions
//! - **`pokedex`**: transport, fetch cache, API client, the list/detail/search
//!   state machines and the terminal front end (the Imperative Shell)
//!
//! Everything here can be tested with fixture data. The shell decides which
//! requests to issue; this crate decides what the responses mean.
//!
//! # Module Organization
//!
//! - [`types`]: upstream payload shapes and the flattened evolution stage
//! - [`urls`]: canonical endpoint URLs and id extraction from resource URLs
//! - [`evolution`]: evolution tree flattening and sprite attachment
//! - [`pagination`]: offset/limit math and the pagination bar window
//! - [`search`]: search planning, name/type filters, hidden pseudo-types
//! - [`present`]: display formatting for entries, species and stats
//! - [`state`]: load phases and stale-response request tokens
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use pokedex_core::evolution::flatten_chain;
//!
//! let chain: EvolutionChain = serde_json::from_str(fixture)?;
//! let stages = flatten_chain(&chain.chain);
//!
//! assert_eq!(stages[0].name, "bulbasaur");
//! ```

pub mod evolution;
pub mod pagination;
pub mod present;
pub mod search;
pub mod state;
pub mod types;
pub mod urls;
