//! Petcheck Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer, plus configuration loading and report rendering.

pub mod adapters;
pub mod persistence;
pub mod reporting;
pub mod serialization;
pub mod settings;

pub use adapters::ReqwestHttpClient;
pub use persistence::JsonFixtureReader;
pub use reporting::TextReporter;
pub use serialization::{SerializationError, from_json, from_json_bytes, to_json_stable};
pub use settings::{ConfigError, DEFAULT_CONFIG_FILE, ENV_PREFIX, HarnessConfig};
