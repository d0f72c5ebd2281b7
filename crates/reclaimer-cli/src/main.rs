//! Interactive terminal planner for the Bio-Nano Reclaimer.
//!
//! Asks for mission parameters on stdin, runs the allocation engine with
//! the built-in catalog and prints a plain-text report. Logs go to stderr
//! so they never interleave with the prompts.

mod error;
mod prompt;
mod report;
mod session;

use std::io;
use std::path::Path;

use anyhow::Context;
use reclaimer_core::config::CONFIG_FILE_NAME;
use reclaimer_core::{ReclaimerConfig, ReferenceCatalog};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::prompt::Prompter;
use crate::session::Session;

/// Log filter used when neither `RUST_LOG` nor the config file set one.
const QUIET_LEVEL: &str = "warn";

fn main() -> anyhow::Result<()> {
    let config = ReclaimerConfig::load_or_default(Path::new(CONFIG_FILE_NAME))
        .with_context(|| format!("loading {CONFIG_FILE_NAME}"))?;

    let level = if Path::new(CONFIG_FILE_NAME).exists() {
        config.logging.level.as_str()
    } else {
        QUIET_LEVEL
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let outcome = Session::new(prompter, ReferenceCatalog::standard(), &config)
        .run(&generated_at)
        .context("interactive session failed")?;

    info!(
        profile = %outcome.profile_name,
        total_cost_usd = outcome.summary.total_cost_usd,
        report_bytes = outcome.report.len(),
        saved_to = ?outcome.saved_to,
        "session finished"
    );
    Ok(())
}
