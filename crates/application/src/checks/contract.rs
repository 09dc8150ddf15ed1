//! Error contract checks.

use petcheck_domain::{CheckResult, ErrorContract, ScenarioResult};

/// Compares an actual problem-details body against expected values.
///
/// Always produces four checks, in order: title, detail, instance, status.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractChecker;

impl ContractChecker {
    /// Check names in evaluation order.
    pub const NAMES: [&'static str; 4] = [
        "Error title matches",
        "Error detail matches",
        "Error instance matches",
        "Error status matches",
    ];

    /// Compares every contract field, without stopping at the first mismatch.
    #[must_use]
    pub fn check(expected: &ErrorContract, actual: &ErrorContract) -> Vec<CheckResult> {
        let [title, detail, instance, status] = Self::NAMES;
        vec![
            CheckResult::equals(title, expected.title.as_str(), actual.title.as_str()),
            CheckResult::equals(detail, expected.detail.as_str(), actual.detail.as_str()),
            CheckResult::equals(instance, expected.instance.as_str(), actual.instance.as_str()),
            CheckResult::equals(status, &expected.status, &actual.status),
        ]
    }

    /// Checks a scenario result. When the body did not decode as a contract,
    /// all four checks fail with what was actually received.
    #[must_use]
    pub fn check_result(expected: &ErrorContract, result: &ScenarioResult) -> Vec<CheckResult> {
        match result.problem() {
            Some(actual) => Self::check(expected, actual),
            None => {
                let diagnostic = result.diagnostic();
                Self::NAMES
                    .iter()
                    .map(|name| CheckResult::fail(*name, diagnostic.clone()))
                    .collect()
            }
        }
    }
}
