//! Configuration module
//!
//! Provides types, discovery and parsing for `tilecode.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
