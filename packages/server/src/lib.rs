//! Server crate: configuration, HTTP surface, process wiring.
//!
//! The pipeline itself lives in the `research` library; this crate only
//! loads configuration, assembles the components, and maps HTTP requests
//! onto them.

pub mod config;
pub mod server;

pub use config::{Config, LlmProvider};
