//! Dataset reader port

use std::future::Future;

use petcheck_domain::{Dataset, DomainError};
use thiserror::Error;

/// Errors raised while capturing a dataset snapshot.
#[derive(Debug, Clone, Error)]
pub enum DataStoreError {
    /// The fixture store could not be read.
    #[error("cannot read data store {location}: {message}")]
    Unreadable {
        /// Where the store lives (path or name).
        location: String,
        /// Underlying cause.
        message: String,
    },

    /// The store was read but its content is not an entity collection.
    #[error("malformed data store {location}: {message}")]
    Malformed {
        /// Where the store lives.
        location: String,
        /// Decoder message.
        message: String,
    },

    /// The collection decoded but breaks a dataset invariant.
    #[error("invalid dataset: {0}")]
    Invalid(#[from] DomainError),
}

/// Port for reading the current inventory baseline.
///
/// Implementations are purely observational: every call returns a fresh
/// snapshot and never mutates the store.
pub trait DatasetReader: Send + Sync {
    /// Reads the whole entity collection as it stands now.
    ///
    /// # Errors
    ///
    /// Returns a `DataStoreError` when the store is unreadable or malformed.
    fn read_dataset(&self) -> impl Future<Output = Result<Dataset, DataStoreError>> + Send;
}
