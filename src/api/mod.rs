//! API Module
//!
//! Cache-through HTTP client for the PokeAPI.

mod client;

pub use client::ApiClient;
