//! Inventory operations a scenario can drive.

use std::fmt;

use petcheck_domain::{HttpMethod, PetId};

/// One of the two write operations exposed by the inventory service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `POST /inventory/add`
    Create,
    /// `PATCH /inventory/dog/{id}`
    UpdatePrice {
        /// Target entity.
        id: PetId,
    },
}

impl Operation {
    /// HTTP method used by the operation.
    #[must_use]
    pub const fn method(self) -> HttpMethod {
        match self {
            Self::Create => HttpMethod::Post,
            Self::UpdatePrice { .. } => HttpMethod::Patch,
        }
    }

    /// Absolute request path, also the `instance` of any error contract.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Create => "/inventory/add".to_string(),
            Self::UpdatePrice { id } => format!("/inventory/dog/{id}"),
        }
    }

    /// Status the service answers with on success.
    #[must_use]
    pub const fn success_status(self) -> u16 {
        match self {
            Self::Create => 201,
            Self::UpdatePrice { .. } => 200,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
