use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use patchup::{config::PatchupConfig, runner::PatchRunner};

/// Apply an ordered list of text patches to a document, idempotently.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the plan file (TOML: target document + ordered patches)
    plan: PathBuf,

    /// Load and patch in memory, report, but do not write the document back
    #[arg(long)]
    dry_run: bool,

    /// Emit the run report as JSON instead of console lines
    #[arg(long)]
    json: bool,

    /// Disable ANSI color codes in log output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    patchup::init_with_logger(!cli.no_color).context("Failed to initialize logging")?;

    if let Err(err) = run(&cli) {
        eprintln!("❌ {err:#}");
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = PatchupConfig::load(&cli.plan)
        .with_context(|| format!("Failed to load plan {}", cli.plan.display()))?;

    let runner = PatchRunner::new(config);
    let target = runner.target().to_path_buf();

    let report = if cli.dry_run {
        runner.dry_run()
    } else {
        runner.run()
    }
    .with_context(|| format!("Patch run failed for {}", target.display()))?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        print!("{}", report.render());
        println!(
            "✅ {} of {} patches applied to {}",
            report.applied_count(),
            report.outcomes.len(),
            target.display()
        );
    }

    Ok(())
}
