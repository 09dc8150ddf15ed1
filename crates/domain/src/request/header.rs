//! HTTP Header types

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// MIME type sent and accepted by every inventory call.
pub const APPLICATION_JSON: &str = "application/json";

/// A single HTTP header with name and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// The header name (e.g., "Content-Type")
    pub name: String,
    /// The header value (e.g., "application/json")
    pub value: String,
}

impl Header {
    /// Creates a new header.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An ordered collection of HTTP headers.
///
/// Used both for the header set a scenario sends and for the headers a
/// response carried back. Lookups are case-insensitive on the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    items: Vec<Header>,
}

impl Headers {
    /// Creates an empty header collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The default header set for inventory calls:
    /// `Content-Type` and `Accept` both set to `application/json`.
    #[must_use]
    pub fn json() -> Self {
        Self::new()
            .with(Header::new("Content-Type", APPLICATION_JSON))
            .with(Header::new("Accept", APPLICATION_JSON))
    }

    /// Adds a header to the collection.
    pub fn add(&mut self, header: Header) {
        self.items.push(header);
    }

    /// Adds a header (builder pattern).
    #[must_use]
    pub fn with(mut self, header: Header) -> Self {
        self.items.push(header);
        self
    }

    /// Adds a header after checking its name is usable.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHeaderName` for an empty name or one
    /// containing whitespace or a colon.
    pub fn try_add(&mut self, name: &str, value: impl Into<String>) -> DomainResult<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.contains(|c: char| c.is_whitespace() || c == ':') {
            return Err(DomainError::InvalidHeaderName(name.to_string()));
        }
        self.add(Header::new(trimmed, value));
        Ok(())
    }

    /// Returns the first value for `name`, compared case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Returns an iterator over the headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.items.iter()
    }

    /// Returns the number of headers.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::len is not const in stable
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no headers.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::is_empty is not const in stable
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Header> for Headers {
    fn from_iter<T: IntoIterator<Item = Header>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
