//! Named checks and scenario reports.
//!
//! A scenario yields an ordered list of [`CheckResult`]s. Every check is
//! evaluated and kept, so one report can show several simultaneous
//! violations.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of one independently reportable check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Display name of the check.
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Expected value (for display).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Actual value found (for display).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    /// Error message if failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckResult {
    /// Create a passed result.
    #[must_use]
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            expected: None,
            actual: None,
            message: None,
        }
    }

    /// Create a failed result.
    #[must_use]
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            expected: None,
            actual: None,
            message: Some(message.into()),
        }
    }

    /// Create a result from an equality comparison.
    #[must_use]
    pub fn equals<T>(name: impl Into<String>, expected: &T, actual: &T) -> Self
    where
        T: PartialEq + Display + ?Sized,
    {
        Self::compared(name, expected, actual, expected == actual)
    }

    /// Create a result from an arbitrary comparison outcome.
    #[must_use]
    pub fn compared(
        name: impl Into<String>,
        expected: impl Display,
        actual: impl Display,
        passed: bool,
    ) -> Self {
        let expected = expected.to_string();
        let actual = actual.to_string();
        let message = (!passed).then(|| format!("expected {expected}, got {actual}"));
        Self {
            name: name.into(),
            passed,
            expected: Some(expected),
            actual: Some(actual),
            message,
        }
    }
}

/// Results of one completed scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario display name.
    pub scenario: String,
    /// Checks, in evaluation order.
    pub checks: Vec<CheckResult>,
    /// Total number of checks.
    pub total: usize,
    /// Number of passed checks.
    pub passed: usize,
    /// Number of failed checks.
    pub failed: usize,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl ScenarioReport {
    /// Create a report, tallying the checks.
    #[must_use]
    pub fn new(scenario: impl Into<String>, checks: Vec<CheckResult>, duration_ms: u64) -> Self {
        let total = checks.len();
        let passed = checks.iter().filter(|c| c.passed).count();
        Self {
            scenario: scenario.into(),
            checks,
            total,
            passed,
            failed: total - passed,
            duration_ms,
        }
    }

    /// Check if all checks passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Iterate the failed checks.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// How a scenario ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScenarioOutcome {
    /// The scenario ran to completion; its checks may still have failed.
    Completed(ScenarioReport),
    /// Setup aborted the scenario before any check ran.
    SetupFailed {
        /// Scenario display name.
        scenario: String,
        /// Setup error message.
        error: String,
    },
}

impl ScenarioOutcome {
    /// Scenario display name.
    #[must_use]
    pub fn scenario(&self) -> &str {
        match self {
            Self::Completed(report) => &report.scenario,
            Self::SetupFailed { scenario, .. } => scenario,
        }
    }

    /// True only for a completed scenario whose checks all passed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        match self {
            Self::Completed(report) => report.all_passed(),
            Self::SetupFailed { .. } => false,
        }
    }
}

/// Results of a whole harness run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Unique identifier of the run.
    pub run_id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Scenario outcomes in execution order.
    pub outcomes: Vec<ScenarioOutcome>,
}

impl SuiteReport {
    /// Create an empty report stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            run_id: Uuid::now_v7(),
            started_at: Utc::now(),
            outcomes: Vec::new(),
        }
    }

    /// Append an outcome.
    pub fn push(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of checks across completed scenarios.
    #[must_use]
    pub fn total_checks(&self) -> usize {
        self.completed().map(|r| r.total).sum()
    }

    /// Number of failed checks across completed scenarios.
    #[must_use]
    pub fn failed_checks(&self) -> usize {
        self.completed().map(|r| r.failed).sum()
    }

    /// Number of scenarios aborted during setup.
    #[must_use]
    pub fn setup_failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ScenarioOutcome::SetupFailed { .. }))
            .count()
    }

    /// True when every scenario completed and every check passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(ScenarioOutcome::is_success)
    }

    fn completed(&self) -> impl Iterator<Item = &ScenarioReport> {
        self.outcomes.iter().filter_map(|o| match o {
            ScenarioOutcome::Completed(report) => Some(report),
            ScenarioOutcome::SetupFailed { .. } => None,
        })
    }
}

impl Default for SuiteReport {
    fn default() -> Self {
        Self::new()
    }
}
