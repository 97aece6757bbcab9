//! Patch data model and application engine.
//!
//! A patch is a single named text transformation. Two kinds exist:
//!
//! - `Replace`: exact substring substitution of every occurrence of a search
//!   string, applied unconditionally on every run.
//! - `Guarded`: substitution of every occurrence of an anchor string, applied
//!   only while a marker string is absent from the document. The marker is
//!   expected to be introduced by the replacement itself, which is what makes
//!   a guarded patch safe to re-run.
//!
//! If an anchor occurs more than once, substitution applies to all
//! occurrences. Anchor uniqueness is a precondition on patch authors, not a
//! runtime guarantee.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PatchupError, PatchupResult};

/// A single named patch operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Patch {
    /// Short human-readable label, used in the run report
    pub label: String,

    #[serde(flatten)]
    pub kind: PatchKind,
}

/// The two patch kinds, tagged as `kind = "replace"` / `kind = "guarded"`
/// in plan files.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatchKind {
    /// Unconditional literal replace of every occurrence of `search`.
    Replace { search: String, replace: String },

    /// Replace every occurrence of `anchor` with `replacement`, but only
    /// while `marker` is absent from the document.
    Guarded {
        anchor: String,
        replacement: String,
        marker: String,
    },
}

impl Patch {
    /// Apply this patch to the document, returning the (possibly unchanged)
    /// document and whether a change occurred.
    ///
    /// An unconditional replace reports changed=true iff the search string
    /// occurred at least once, even when search and replacement are textually
    /// identical. A guarded patch whose guard does not hold returns the
    /// document untouched with changed=false; that outcome is expected, never
    /// an error.
    pub fn apply(&self, content: String) -> (String, bool) {
        match &self.kind {
            PatchKind::Replace { search, replace } => {
                if content.contains(search.as_str()) {
                    (content.replace(search.as_str(), replace), true)
                } else {
                    (content, false)
                }
            }
            PatchKind::Guarded {
                anchor,
                replacement,
                marker,
            } => {
                if content.contains(anchor.as_str()) && !content.contains(marker.as_str()) {
                    (content.replace(anchor.as_str(), replacement), true)
                } else {
                    (content, false)
                }
            }
        }
    }

    /// Check the patch for authoring mistakes.
    ///
    /// Empty labels and empty search/anchor/marker strings are rejected: an
    /// empty pattern matches everywhere and would shred the document. Legal
    /// but suspicious constructions are logged as warnings instead of
    /// rejected, since they may be intentional.
    pub fn validate(&self) -> PatchupResult<()> {
        if self.label.trim().is_empty() {
            return Err(PatchupError::invalid_plan("patch with empty label"));
        }

        match &self.kind {
            PatchKind::Replace { search, replace } => {
                if search.is_empty() {
                    return Err(PatchupError::invalid_plan(format!(
                        "patch '{}': empty search string",
                        self.label
                    )));
                }
                if search == replace {
                    warn!(
                        "patch '{}' replaces text with an identical block; it will never change the document",
                        self.label
                    );
                }
            }
            PatchKind::Guarded {
                anchor,
                replacement,
                marker,
            } => {
                if anchor.is_empty() {
                    return Err(PatchupError::invalid_plan(format!(
                        "patch '{}': empty anchor string",
                        self.label
                    )));
                }
                if marker.is_empty() {
                    return Err(PatchupError::invalid_plan(format!(
                        "patch '{}': empty marker string",
                        self.label
                    )));
                }
                if !replacement.contains(marker.as_str()) {
                    warn!(
                        "patch '{}': marker is not contained in the replacement, so the patch may re-apply on every run",
                        self.label
                    );
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replace(label: &str, search: &str, replace: &str) -> Patch {
        Patch {
            label: label.to_string(),
            kind: PatchKind::Replace {
                search: search.to_string(),
                replace: replace.to_string(),
            },
        }
    }

    fn guarded(label: &str, anchor: &str, replacement: &str, marker: &str) -> Patch {
        Patch {
            label: label.to_string(),
            kind: PatchKind::Guarded {
                anchor: anchor.to_string(),
                replacement: replacement.to_string(),
                marker: marker.to_string(),
            },
        }
    }

    #[test]
    fn test_replace_all_occurrences() {
        let patch = replace("swap A for B", "A", "B");
        let (result, changed) = patch.apply("xAyAz".to_string());

        assert!(changed);
        assert_eq!(result, "xByBz");
        assert_eq!(result.matches('A').count(), 0);
        assert_eq!(result.matches('B').count(), 2);
    }

    #[test]
    fn test_replace_missing_search_is_noop() {
        let patch = replace("swap A for B", "A", "B");
        let (result, changed) = patch.apply("no match here".to_string());

        assert!(!changed);
        assert_eq!(result, "no match here");
    }

    #[test]
    fn test_replace_identical_block_reports_changed() {
        // A search equal to its replacement is a recorded no-op: the text
        // never changes, but the match is still reported.
        let patch = replace("recorded no-op", "same", "same");
        let (result, changed) = patch.apply("left same right".to_string());

        assert!(changed);
        assert_eq!(result, "left same right");
    }

    #[test]
    fn test_guarded_applies_when_anchor_present_marker_absent() {
        let patch = guarded("add footer", "END", "END <!-- footer -->", "<!-- footer -->");
        let (result, changed) = patch.apply("body END".to_string());

        assert!(changed);
        assert_eq!(result, "body END <!-- footer -->");
    }

    #[test]
    fn test_guarded_anchor_absent_leaves_document_byte_identical() {
        let patch = guarded("add footer", "END", "END <!-- footer -->", "<!-- footer -->");
        let original = "no anchor in sight".to_string();
        let (result, changed) = patch.apply(original.clone());

        assert!(!changed);
        assert_eq!(result, original);
    }

    #[test]
    fn test_guarded_marker_present_suppresses_reapplication() {
        let patch = guarded("add footer", "END", "END <!-- footer -->", "<!-- footer -->");
        let already_patched = "body END <!-- footer -->".to_string();
        let (result, changed) = patch.apply(already_patched.clone());

        assert!(!changed);
        assert_eq!(result, already_patched);
    }

    #[test]
    fn test_guarded_replaces_every_anchor_occurrence() {
        let patch = guarded("tag", "X", "X!", "!");
        let (result, changed) = patch.apply("X and X".to_string());

        assert!(changed);
        assert_eq!(result, "X! and X!");
    }

    #[test]
    fn test_validate_rejects_empty_search() {
        let patch = replace("bad", "", "something");
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_label() {
        let patch = replace("   ", "a", "b");
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_marker() {
        let patch = guarded("bad", "anchor", "replacement", "");
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_recorded_noop() {
        // Suspicious but legal; surfaced as a warning, not an error.
        let patch = replace("recorded no-op", "same", "same");
        assert!(patch.validate().is_ok());
    }
}
