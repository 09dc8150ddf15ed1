//! RFC 7807 problem-details contract.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured failure response returned by the inventory service.
///
/// `title` and `status` are required for a body to count as a contract;
/// `detail` and `instance` default to empty so a partial body still decodes
/// and the individual field checks report what is missing. Spring's legacy
/// `path` key is accepted for `instance`. Other members are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorContract {
    /// Short summary, e.g. "Bad Request".
    pub title: String,
    /// Human-readable explanation.
    #[serde(default)]
    pub detail: String,
    /// Request path that produced the problem.
    #[serde(default, alias = "path")]
    pub instance: String,
    /// HTTP status code.
    pub status: u16,
}

impl ErrorContract {
    /// Creates a contract value.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        detail: impl Into<String>,
        instance: impl Into<String>,
        status: u16,
    ) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            instance: instance.into(),
            status,
        }
    }

    /// 400 contract for the given path.
    #[must_use]
    pub fn bad_request(detail: impl Into<String>, instance: impl Into<String>) -> Self {
        Self::new("Bad Request", detail, instance, 400)
    }

    /// 404 contract for the given path.
    #[must_use]
    pub fn not_found(detail: impl Into<String>, instance: impl Into<String>) -> Self {
        Self::new("Not Found", detail, instance, 404)
    }
}

impl fmt::Display for ErrorContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {}: {}",
            self.status, self.title, self.instance, self.detail
        )
    }
}
