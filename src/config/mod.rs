//! Plan configuration.
//!
//! A plan is a TOML file naming the target document and the ordered list of
//! patches to apply to it. Keeping the patch content in data instead of code
//! lets the same runner serve any document and lets tests exercise patches on
//! in-memory strings.
//!
//! ```toml
//! target = "src/pages/chapters/Chapter1.jsx"
//!
//! [[patches]]
//! label = "update stat card"
//! kind = "replace"
//! search = 'value="200+"'
//! replace = 'value="35,000"'
//!
//! [[patches]]
//! label = "insert citations"
//! kind = "guarded"
//! anchor = "</section>"
//! replacement = "<Citations />\n</section>"
//! marker = "<Citations />"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PatchupError, PatchupResult};
use crate::patch::Patch;

/// A patch plan: one target document plus the ordered patch list.
///
/// Order is load-bearing. A later patch may anchor on text introduced by an
/// earlier one, so the list is applied strictly in file order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PatchupConfig {
    /// Path to the document to patch. Relative paths resolve against the
    /// plan file's directory.
    pub target: PathBuf,

    /// Ordered patch list
    #[serde(default)]
    pub patches: Vec<Patch>,
}

impl PatchupConfig {
    /// Load and validate a plan from a TOML file.
    pub fn load(path: &Path) -> PatchupResult<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                PatchupError::resource_not_found(path)
            } else {
                PatchupError::io_error(err, Some(path))
            }
        })?;

        let mut config: PatchupConfig = toml::from_str(&content).map_err(|err| {
            PatchupError::invalid_plan(format!("{}: {}", path.display(), err))
        })?;

        for patch in &config.patches {
            patch.validate()?;
        }

        // A plan checked into a repo should work from any CWD.
        if config.target.is_relative() {
            if let Some(dir) = path.parent() {
                config.target = dir.join(&config.target);
            }
        }

        debug!(
            "Loaded plan {} with {} patches for {}",
            path.display(),
            config.patches.len(),
            config.target.display()
        );

        Ok(config)
    }
}
