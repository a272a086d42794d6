//! REPL Module
//!
//! Interactive prompt: input tokenization, command dispatch, and session state.

mod commands;
mod input;

pub use commands::Repl;
pub use input::clean_input;
