//! Application error types

use petcheck_domain::PetType;
use thiserror::Error;

use crate::ports::DataStoreError;

/// Errors that abort a scenario during setup, before any check runs.
#[derive(Debug, Clone, Error)]
pub enum SetupError {
    /// The baseline dataset could not be captured.
    #[error("baseline dataset unavailable: {0}")]
    DataStore(#[from] DataStoreError),

    /// The baseline has no entity the scenario can target.
    #[error("no {0} available in baseline dataset")]
    NoCandidate(PetType),

    /// The request for the scenario could not be built.
    #[error("cannot build request: {0}")]
    Request(String),
}

/// Result type alias for scenario setup.
pub type SetupResult<T> = Result<T, SetupError>;
