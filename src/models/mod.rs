//! Domain models for PokeAPI payloads
//!
//! Defines the structures decoded from raw cached response bodies.

mod locations;
mod pokemon;

pub use locations::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonTypeSlot};
