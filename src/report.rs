//! Comparison outcomes, aggregate statistics, and errors.
//!
//! This module defines the types a caller consumes after driving a
//! comparison:
//! - [`DiffStats`]: per-slot pixel counters with a match percentage
//! - [`SlotSummary`] / [`ComparisonReport`]: serializable summaries
//! - [`CompareError`]: errors that can occur during a comparison

use crate::alignment::{PageIndex, SlotKind};
use crate::error_codes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Aggregate pixel counters for one matched slot.
///
/// Invariants: `matched + differ == total` and `white <= matched`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub total: u64,
    #[serde(rename = "match")]
    pub matched: u64,
    pub white: u64,
    pub differ: u64,
}

impl DiffStats {
    pub(crate) fn new(total: u64) -> Self {
        Self {
            total,
            matched: 0,
            white: 0,
            differ: 0,
        }
    }

    /// Percentage of matching pixels, `0.0` for an empty canvas.
    pub fn match_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.matched as f64 / self.total as f64 * 100.0
    }

    /// The match percentage rendered with two decimal places.
    pub fn match_percent_label(&self) -> String {
        format!("{:.2}", self.match_percent())
    }
}

impl std::fmt::Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}% ({} match · {} differ)",
            self.match_percent_label(),
            self.matched,
            self.differ
        )
    }
}

/// Errors produced by comparison APIs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompareError {
    #[error(
        "[PAGEDIFF_SRC_001] document is unreadable: {reason}. Suggestion: check that the input is a supported, uncorrupted document."
    )]
    UnreadableDocument { reason: String },

    #[error(
        "[PAGEDIFF_CMP_001] both documents report zero pages. Suggestion: check that the inputs were loaded correctly."
    )]
    EmptyDocumentSet,

    #[error(
        "[PAGEDIFF_CMP_002] alignment produced no slots for non-empty inputs ({left_pages} left pages, {right_pages} right pages). Suggestion: report a bug; this signals an invariant violation in the alignment solver."
    )]
    AlignmentUnresolved { left_pages: u32, right_pages: u32 },

    #[error(
        "[PAGEDIFF_CMP_003] slot index {index} out of range ({slots} slots). Suggestion: index slots from the sequence returned by the current comparison."
    )]
    SlotOutOfRange { index: usize, slots: usize },
}

impl CompareError {
    pub fn code(&self) -> &'static str {
        match self {
            CompareError::UnreadableDocument { .. } => error_codes::SRC_UNREADABLE_DOCUMENT,
            CompareError::EmptyDocumentSet => error_codes::CMP_EMPTY_DOCUMENT_SET,
            CompareError::AlignmentUnresolved { .. } => error_codes::CMP_ALIGNMENT_UNRESOLVED,
            CompareError::SlotOutOfRange { .. } => error_codes::CMP_SLOT_OUT_OF_RANGE,
        }
    }
}

/// Serializable summary of one alignment slot.
///
/// `stats` is `None` for one-sided slots (no comparison possible) and for
/// matched slots not yet materialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotSummary {
    pub index: usize,
    pub kind: SlotKind,
    pub left_page: Option<PageIndex>,
    pub right_page: Option<PageIndex>,
    pub stats: Option<DiffStats>,
}

/// Whole-comparison summary of the current session state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub slots: Vec<SlotSummary>,
}

pub fn serialize_report(report: &ComparisonReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}
