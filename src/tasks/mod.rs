//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of their owner.
//!
//! # Tasks
//! - Cache reaper: removes expired response-cache entries at a fixed interval

mod reaper;

pub use reaper::spawn_reaper;
