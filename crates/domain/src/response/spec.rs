//! Received response value type

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::request::Headers;

/// Number of body characters kept in diagnostics.
const PREVIEW_CHARS: usize = 200;

/// HTTP response as observed by the harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body as string
    pub body: String,
    /// Response time
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

impl HttpResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: u16, headers: Headers, body: impl Into<String>, duration: Duration) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            duration,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the `Content-Type` header, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type")
    }

    /// Returns the body truncated for log and report output.
    #[must_use]
    pub fn body_preview(&self) -> String {
        preview(&self.body)
    }
}

/// Truncates `body` to a bounded number of characters.
#[must_use]
pub fn preview(body: &str) -> String {
    if body.chars().count() > PREVIEW_CHARS {
        let head: String = body.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Header;
    use pretty_assertions::assert_eq;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse::new(
            status,
            Headers::new().with(Header::new("Content-Type", "application/json")),
            body,
            Duration::from_millis(12),
        )
    }

    #[test]
    fn test_status_checks() {
        assert!(response(201, "").is_success());
        assert!(!response(404, "").is_success());
        assert!(!response(199, "").is_success());
    }

    #[test]
    fn test_content_type_lookup() {
        assert_eq!(response(200, "").content_type(), Some("application/json"));
    }

    #[test]
    fn test_body_preview_truncates() {
        let long = "x".repeat(500);
        let shown = response(500, &long).body_preview();
        assert!(shown.ends_with("..."));
        assert_eq!(shown.len(), PREVIEW_CHARS + 3);
        assert_eq!(response(500, "short").body_preview(), "short");
    }
}
