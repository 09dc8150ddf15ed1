//! Plain-text report for terminals and CI logs.

use std::fmt::Write as _;

use petcheck_domain::{CheckResult, ScenarioOutcome, SuiteReport};

/// Renders a [`SuiteReport`] as one line per check, grouped by scenario,
/// followed by a totals line.
#[derive(Debug, Clone, Copy)]
pub struct TextReporter {
    verbose: bool,
}

impl TextReporter {
    /// Create a reporter that prints every check.
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: true }
    }

    /// Only print failed checks when `false`.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Render the report.
    #[must_use]
    pub fn render(&self, report: &SuiteReport) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "run {} started {}",
            report.run_id,
            report.started_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        for outcome in &report.outcomes {
            match outcome {
                ScenarioOutcome::Completed(scenario) => {
                    let _ = writeln!(
                        out,
                        "\n{} ({}/{} passed, {} ms)",
                        scenario.scenario, scenario.passed, scenario.total, scenario.duration_ms
                    );
                    for check in &scenario.checks {
                        if self.verbose || !check.passed {
                            let _ = writeln!(out, "  {}", Self::line(check));
                        }
                    }
                }
                ScenarioOutcome::SetupFailed { scenario, error } => {
                    let _ = writeln!(out, "\n{scenario}\n  SETUP FAILED {error}");
                }
            }
        }

        let verdict = if report.all_passed() { "PASSED" } else { "FAILED" };
        let _ = writeln!(
            out,
            "\n{verdict}: {} scenarios, {} checks, {} failed, {} setup failures",
            report.outcomes.len(),
            report.total_checks(),
            report.failed_checks(),
            report.setup_failures()
        );
        out
    }

    fn line(check: &CheckResult) -> String {
        if check.passed {
            return format!("PASS {}", check.name);
        }
        match &check.message {
            Some(message) => format!("FAIL {}: {message}", check.name),
            None => format!("FAIL {}", check.name),
        }
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}
