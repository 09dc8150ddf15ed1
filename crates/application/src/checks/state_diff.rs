//! Before/after state checks.

use petcheck_domain::{CheckResult, Dataset, Money, PetEntity, PetField, ScenarioResult};

use crate::ports::DataStoreError;

/// Largest accepted difference between requested and returned price.
pub const PRICE_TOLERANCE: f64 = 0.01;

const GREW_BY_ONE: &str = "Pet list increased by one";
const CONTAINS_NEW: &str = "Pet list contains the new pet";
const PRICE_UPDATED: &str = "Price updated correctly";
const OTHERS_UNCHANGED: &str = "Other fields unchanged";

/// Verifies what an operation did to the inventory.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateDiffVerifier;

impl StateDiffVerifier {
    /// Create path: the snapshot grew by exactly one and holds the created
    /// entity by value.
    #[must_use]
    pub fn verify_create(before: &Dataset, after: &Dataset, created: &PetEntity) -> Vec<CheckResult> {
        vec![Self::grew_by_one(before, after), Self::contains(after, created)]
    }

    /// Create path from a scenario result. A post-operation read failure or
    /// an undecodable body fails the affected checks instead of aborting.
    #[must_use]
    pub fn verify_create_result(
        before: &Dataset,
        after: Result<&Dataset, &DataStoreError>,
        result: &ScenarioResult,
    ) -> Vec<CheckResult> {
        let unavailable = |e: &DataStoreError| format!("post-operation dataset unavailable: {e}");
        let size = match after {
            Ok(after) => Self::grew_by_one(before, after),
            Err(e) => CheckResult::fail(GREW_BY_ONE, unavailable(e)),
        };
        let membership = match (after, result.entity()) {
            (Ok(after), Some(created)) => Self::contains(after, created),
            (Err(e), _) => CheckResult::fail(CONTAINS_NEW, unavailable(e)),
            (Ok(_), None) => CheckResult::fail(CONTAINS_NEW, result.diagnostic()),
        };
        vec![size, membership]
    }

    /// Update path: the cost moved to `requested` within [`PRICE_TOLERANCE`]
    /// and no other field changed.
    #[must_use]
    pub fn verify_price_update(
        before: &PetEntity,
        after: &PetEntity,
        requested: &Money,
    ) -> Vec<CheckResult> {
        let within = after
            .cost
            .distance(requested)
            .to_f64()
            .is_some_and(|d| d <= PRICE_TOLERANCE);
        let price = CheckResult::compared(
            PRICE_UPDATED,
            format!("{requested} (±{PRICE_TOLERANCE})"),
            &after.cost,
            within,
        );

        let changed = before.differing_fields(after, &[PetField::Cost]);
        let others = if changed.is_empty() {
            CheckResult::pass(OTHERS_UNCHANGED)
        } else {
            let detail: Vec<String> = changed
                .iter()
                .map(|f| {
                    format!(
                        "{}: {} -> {}",
                        f.wire_name(),
                        before.render(*f),
                        after.render(*f)
                    )
                })
                .collect();
            CheckResult::fail(OTHERS_UNCHANGED, format!("changed {}", detail.join(", ")))
        };

        vec![price, others]
    }

    /// Update path from a scenario result, using the entity decoded from the
    /// response rather than a store re-read.
    #[must_use]
    pub fn verify_price_update_result(
        before: &PetEntity,
        result: &ScenarioResult,
        requested: &Money,
    ) -> Vec<CheckResult> {
        match result.entity() {
            Some(after) => Self::verify_price_update(before, after, requested),
            None => {
                let diagnostic = result.diagnostic();
                vec![
                    CheckResult::fail(PRICE_UPDATED, diagnostic.clone()),
                    CheckResult::fail(OTHERS_UNCHANGED, diagnostic),
                ]
            }
        }
    }

    fn grew_by_one(before: &Dataset, after: &Dataset) -> CheckResult {
        let expected = before.len() + 1;
        CheckResult::equals(GREW_BY_ONE, &expected, &after.len())
    }

    fn contains(after: &Dataset, created: &PetEntity) -> CheckResult {
        if after.contains(created) {
            CheckResult::pass(CONTAINS_NEW)
        } else {
            let message = match after.find(created.pet_id) {
                Some(stored) => format!(
                    "pet {} is stored with different values: {stored:?}",
                    created.pet_id
                ),
                None => format!("no pet with id {} in post-operation dataset", created.pet_id),
            };
            CheckResult::fail(CONTAINS_NEW, message)
        }
    }
}
