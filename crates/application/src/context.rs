//! Per-run harness settings handed to every scenario.

use std::time::Duration;

use petcheck_domain::{Headers, HttpRequest};
use url::Url;

/// Explicit configuration value shared by the scenarios of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessContext {
    /// Base URL of the service under test; always ends with `/`.
    pub base_url: Url,
    /// Headers sent with every request.
    pub headers: Headers,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HarnessContext {
    /// Creates a context with JSON headers and the default timeout.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            headers: Headers::json(),
            timeout: HttpRequest::DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the header set (builder pattern).
    #[must_use]
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Replaces the timeout (builder pattern).
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolves an absolute request path such as `/inventory/add` against
    /// the base URL, keeping any path prefix the base carries.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the joined URL is invalid.
    pub fn resolve(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
