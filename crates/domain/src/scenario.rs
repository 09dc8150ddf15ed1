//! Decoded outcome of one scenario request.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pet::PetEntity;
use crate::problem::ErrorContract;
use crate::response::preview;

/// The body shape a response was expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// A [`PetEntity`].
    Entity,
    /// An [`ErrorContract`].
    Problem,
}

impl BodyKind {
    /// Human-readable name used in check names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Entity => "pet entity",
            Self::Problem => "error contract",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A response body after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodedBody {
    /// Success path body.
    Entity(PetEntity),
    /// Failure path body.
    Problem(ErrorContract),
    /// The body did not match the shape implied by the status.
    Undecodable {
        /// Shape that was attempted.
        expected: BodyKind,
        /// Decoder message.
        reason: String,
    },
}

/// Outcome of one HTTP operation paired with the raw status observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Observed status code.
    pub status: u16,
    /// Observed `Content-Type`, if any.
    pub content_type: Option<String>,
    /// Decoded body.
    pub body: DecodedBody,
    /// Raw body as received.
    pub raw_body: String,
}

impl ScenarioResult {
    /// The decoded entity, on the success path.
    #[must_use]
    pub const fn entity(&self) -> Option<&PetEntity> {
        match &self.body {
            DecodedBody::Entity(pet) => Some(pet),
            _ => None,
        }
    }

    /// The decoded contract, on the failure path.
    #[must_use]
    pub const fn problem(&self) -> Option<&ErrorContract> {
        match &self.body {
            DecodedBody::Problem(contract) => Some(contract),
            _ => None,
        }
    }

    /// What was actually received, for failed-check messages.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        let decoded = match &self.body {
            DecodedBody::Entity(_) => "decoded as pet entity".to_string(),
            DecodedBody::Problem(_) => "decoded as error contract".to_string(),
            DecodedBody::Undecodable { expected, reason } => {
                format!("expected {expected}: {reason}")
            }
        };
        format!(
            "status {}, {decoded}, body: {}",
            self.status,
            preview(&self.raw_body)
        )
    }
}
