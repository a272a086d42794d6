//! Pokedex CLI - an interactive client for the PokeAPI
//!
//! Caches raw response bodies in a time-expiring in-memory store so repeated
//! browsing does not re-fetch the same pages.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::ApiClient;
pub use cache::ResponseCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Repl;
