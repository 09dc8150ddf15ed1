//! Suite driver.

use std::sync::Arc;
use std::time::Instant;

use petcheck_domain::{CheckResult, ScenarioOutcome, ScenarioReport, SuiteReport};
use tracing::{debug, error, info, warn};

use crate::ports::{DatasetReader, HttpClient};
use crate::scenario_runner::ScenarioRunner;
use crate::scenarios::ScenarioKind;

/// Runs scenarios one after another against a shared runner and reader.
///
/// Scenarios share no in-process state; each one captures its own baseline.
pub struct Suite<R: DatasetReader, C: HttpClient> {
    reader: Arc<R>,
    runner: ScenarioRunner<C>,
}

impl<R: DatasetReader, C: HttpClient> Suite<R, C> {
    /// Creates a suite over the given collaborators.
    pub const fn new(reader: Arc<R>, runner: ScenarioRunner<C>) -> Self {
        Self { reader, runner }
    }

    /// Runs `kinds` in order and collects their outcomes.
    pub async fn run(&self, kinds: &[ScenarioKind]) -> SuiteReport {
        let mut report = SuiteReport::new();
        info!(
            run_id = %report.run_id,
            scenarios = kinds.len(),
            base_url = %self.runner.context().base_url,
            "starting suite"
        );

        for kind in kinds {
            report.push(self.run_scenario(*kind).await);
        }

        info!(
            run_id = %report.run_id,
            checks = report.total_checks(),
            failed = report.failed_checks(),
            setup_failures = report.setup_failures(),
            "suite finished"
        );
        report
    }

    /// Runs a single scenario.
    pub async fn run_scenario(&self, kind: ScenarioKind) -> ScenarioOutcome {
        info!(scenario = kind.name(), "scenario started");
        let start = Instant::now();

        match kind.execute(&self.runner, self.reader.as_ref()).await {
            Ok(checks) => {
                checks.iter().for_each(|c| log_check(kind, c));
                let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                let report = ScenarioReport::new(kind.name(), checks, duration_ms);
                info!(
                    scenario = kind.name(),
                    passed = report.passed,
                    failed = report.failed,
                    duration_ms,
                    "scenario finished"
                );
                ScenarioOutcome::Completed(report)
            }
            Err(e) => {
                error!(scenario = kind.name(), error = %e, "scenario setup failed");
                ScenarioOutcome::SetupFailed {
                    scenario: kind.name().to_string(),
                    error: e.to_string(),
                }
            }
        }
    }
}

fn log_check(kind: ScenarioKind, check: &CheckResult) {
    if check.passed {
        debug!(scenario = kind.name(), check = %check.name, "check passed");
    } else {
        warn!(
            scenario = kind.name(),
            check = %check.name,
            expected = check.expected.as_deref().unwrap_or_default(),
            actual = check.actual.as_deref().unwrap_or_default(),
            message = check.message.as_deref().unwrap_or_default(),
            "check failed"
        );
    }
}
