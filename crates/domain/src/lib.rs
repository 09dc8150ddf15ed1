//! Petcheck Domain - Core harness types
//!
//! This crate defines the value model for the pet-inventory conformance
//! harness: inventory entities, problem-details contracts, dataset
//! snapshots, and the named checks a scenario produces.
//! All types here are pure Rust with no I/O dependencies.

pub mod dataset;
pub mod error;
pub mod pet;
pub mod problem;
pub mod request;
pub mod response;
pub mod scenario;
pub mod testing;

pub use dataset::Dataset;
pub use error::{DomainError, DomainResult};
pub use pet::{Breed, Gender, Money, PetEntity, PetField, PetId, PetType, Skin};
pub use problem::ErrorContract;
pub use request::{Header, Headers, HttpMethod, HttpRequest};
pub use response::HttpResponse;
pub use scenario::{BodyKind, DecodedBody, ScenarioResult};
pub use testing::{CheckResult, ScenarioOutcome, ScenarioReport, SuiteReport};
