//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the scenario engine and its external
//! collaborators: the fixture store holding the inventory baseline and the
//! HTTP transport reaching the service under test. Adapters live in the
//! infrastructure layer.

mod dataset_reader;
mod http_client;

pub use dataset_reader::{DataStoreError, DatasetReader};
pub use http_client::{HttpClient, HttpClientError};
