//! Patch runner: the orchestrator.
//!
//! One linear pipeline: load the document, apply every patch in plan order,
//! save the result, return a report of which patches fired. Any I/O failure
//! aborts the run and surfaces the typed error to the caller; there are no
//! retries and no rollback. A failure during save leaves the file in whatever
//! state the underlying write left it.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::config::PatchupConfig;
use crate::document;
use crate::error::PatchupResult;
use crate::patch::Patch;

/// Outcome of a single patch within a run.
#[derive(Debug, Clone, Serialize)]
pub struct PatchOutcome {
    pub label: String,
    pub applied: bool,
}

/// Ordered per-patch outcomes for a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<PatchOutcome>,
}

impl RunReport {
    /// Number of patches that changed the document
    pub fn applied_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.applied).count()
    }

    /// Render the report as console lines, one per patch.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for outcome in &self.outcomes {
            if outcome.applied {
                out.push_str(&format!("✓ {}\n", outcome.label));
            } else {
                out.push_str(&format!("· {} (not applied)\n", outcome.label));
            }
        }
        out
    }
}

/// Apply every patch in order to an in-memory document.
///
/// This is the pure core of the runner: no filesystem involved, so tests and
/// callers with their own I/O can drive it directly.
pub fn apply_all(content: &str, patches: &[Patch]) -> (String, RunReport) {
    let mut current = content.to_string();
    let mut outcomes = Vec::with_capacity(patches.len());

    for (index, patch) in patches.iter().enumerate() {
        let (next, applied) = patch.apply(current);
        current = next;

        debug!(
            "Patch {}/{} '{}': {}",
            index + 1,
            patches.len(),
            patch.label,
            if applied { "applied" } else { "not applied" }
        );

        outcomes.push(PatchOutcome {
            label: patch.label.clone(),
            applied,
        });
    }

    (current, RunReport { outcomes })
}

/// Drives one run of a plan against its target document.
pub struct PatchRunner {
    config: PatchupConfig,
}

impl PatchRunner {
    pub fn new(config: PatchupConfig) -> Self {
        Self { config }
    }

    /// The target document this runner operates on
    pub fn target(&self) -> &Path {
        &self.config.target
    }

    /// Load, patch, save, report.
    pub fn run(&self) -> PatchupResult<RunReport> {
        let (patched, report) = self.patch_document()?;

        debug!("Saving {}", self.config.target.display());
        document::save(&self.config.target, &patched)?;

        info!(
            "Applied {}/{} patches to {}",
            report.applied_count(),
            report.outcomes.len(),
            self.config.target.display()
        );
        Ok(report)
    }

    /// Load and patch, but never save. Lets authors preview a plan.
    pub fn dry_run(&self) -> PatchupResult<RunReport> {
        let (_, report) = self.patch_document()?;

        info!(
            "Dry run: {}/{} patches would apply to {}",
            report.applied_count(),
            report.outcomes.len(),
            self.config.target.display()
        );
        Ok(report)
    }

    fn patch_document(&self) -> PatchupResult<(String, RunReport)> {
        debug!("Loading {}", self.config.target.display());
        let content = document::load(&self.config.target)?;

        Ok(apply_all(&content, &self.config.patches))
    }
}
