//! Petcheck - Main Entry Point
//!
//! Loads the layered configuration, runs the selected scenarios against the
//! pet-inventory service, prints the report on stdout, and exits non-zero
//! when any check or setup failed. Logs go to stderr.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use petcheck_application::{ScenarioKind, ScenarioRunner, Suite};
use petcheck_infrastructure::{
    HarnessConfig, JsonFixtureReader, ReqwestHttpClient, TextReporter, to_json_stable,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(name = "petcheck", version, about = "Conformance checks for the pet-inventory service")]
struct Cli {
    /// Configuration file; `petcheck.toml` is used when present.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Root URL of the service under test.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
    /// JSON fixture file the service persists its inventory to.
    #[arg(long, value_name = "PATH")]
    fixture: Option<PathBuf>,
    /// Scenario to run, by slug or display name; repeatable.
    #[arg(long = "scenario", value_name = "NAME")]
    scenarios: Vec<String>,
    /// Per-request timeout in milliseconds.
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,
    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Only print failed checks in text output.
    #[arg(long)]
    quiet: bool,
    /// Print the scenario catalog and exit.
    #[arg(long)]
    list: bool,
}

/// Report formats.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum OutputFormat {
    /// One line per check.
    Text,
    /// The full report as JSON.
    Json,
}

impl Cli {
    /// Applies flags on top of the loaded configuration.
    fn apply(&self, config: &mut HarnessConfig) {
        if let Some(url) = &self.base_url {
            config.base_url.clone_from(url);
        }
        if let Some(path) = &self.fixture {
            config.fixture_path.clone_from(path);
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        if !self.scenarios.is_empty() {
            config.scenarios.clone_from(&self.scenarios);
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.list {
        for kind in ScenarioKind::ALL {
            println!("{:<28} {}", kind.slug(), kind.name());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = HarnessConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    let kinds = config.scenario_kinds()?;
    let context = config.context()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %context.base_url,
        fixture = %config.fixture_path.display(),
        "starting petcheck"
    );

    let reader = Arc::new(JsonFixtureReader::new(&config.fixture_path));
    let client = Arc::new(ReqwestHttpClient::new()?);
    let suite = Suite::new(reader, ScenarioRunner::new(client, context));
    let report = suite.run(&kinds).await;

    let rendered = match cli.format {
        OutputFormat::Text => TextReporter::new().with_verbose(!cli.quiet).render(&report),
        OutputFormat::Json => to_json_stable(&report)?,
    };
    print!("{rendered}");

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
