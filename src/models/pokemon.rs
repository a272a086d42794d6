//! Pokemon payloads
//!
//! Structure for the per-Pokemon detail (GET /pokemon/{name}), decoded down
//! to the fields the REPL displays and the catch roll consumes.

use serde::{Deserialize, Deserializer};

use super::NamedResource;

/// A Pokemon as returned by the API and as stored in the session Pokedex.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Drives the catch difficulty; null for some species, treated as 0
    #[serde(default, deserialize_with = "null_as_zero")]
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonTypeSlot>,
}

/// One base-stat entry (hp, attack, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One type slot (a Pokemon has one or two).
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

/// The API reports `base_experience: null` for some species.
fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}
