//! Location-area payloads
//!
//! Structures for the paginated location-area listing and the per-area
//! encounter detail.

use serde::Deserialize;

/// A name/URL pair, the unit of most PokeAPI listings.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the location-area listing (GET /location-area).
///
/// `next` and `previous` carry the full URLs of the adjacent pages and are
/// null at the ends of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail for a single location area (GET /location-area/{name}).
///
/// Only the encounter list is decoded; the rest of the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A single possible encounter within a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}
