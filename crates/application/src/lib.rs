//! Petcheck Application - Scenario engine
//!
//! This crate drives the conformance scenarios: it defines the ports the
//! engine needs, builds and sends one request per scenario, decodes the
//! answer, and turns what it sees into named checks.

pub mod checks;
pub mod context;
pub mod error;
pub mod identifiers;
pub mod operation;
pub mod ports;
pub mod scenario_runner;
pub mod scenarios;
pub mod suite;

#[cfg(test)]
mod test_support;

pub use checks::{ContractChecker, PRICE_TOLERANCE, StateDiffVerifier};
pub use context::HarnessContext;
pub use error::{SetupError, SetupResult};
pub use identifiers::{MISSING_ID_MARGIN, missing_id, next_free_id};
pub use operation::Operation;
pub use ports::{DataStoreError, DatasetReader, HttpClient, HttpClientError};
pub use scenario_runner::{ScenarioRunner, decode};
pub use scenarios::{ScenarioKind, UnknownScenario};
pub use suite::Suite;
