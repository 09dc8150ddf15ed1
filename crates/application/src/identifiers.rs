//! Identifier allocation against a dataset snapshot.
//!
//! Both helpers are deterministic: an identifier handed out for a new entity
//! is never one that already exists in the snapshot it was computed from.

use petcheck_domain::{Dataset, PetId};

/// Gap kept above the largest identifier when a missing one is needed.
pub const MISSING_ID_MARGIN: PetId = 100;

/// Returns `max(existing) + 1`, or `1` for an empty dataset.
#[must_use]
pub fn next_free_id(dataset: &Dataset) -> PetId {
    dataset.max_id().map_or(1, |max| max.saturating_add(1))
}

/// Returns an identifier strictly greater than `max(existing) + MISSING_ID_MARGIN`.
#[must_use]
pub fn missing_id(dataset: &Dataset) -> PetId {
    dataset
        .max_id()
        .unwrap_or(0)
        .saturating_add(MISSING_ID_MARGIN + 1)
}
