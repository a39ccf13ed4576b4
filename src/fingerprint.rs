//! Page fingerprints and the coarse similarity metric that compares them.
//!
//! A fingerprint is a deterministic, order-preserving normalized summary of
//! one page's text, used only for coarse similarity during page alignment,
//! never for exact comparison. Content is not lowercased here; case folding
//! is reserved for word-level normalization outside this crate.

use crate::config::CompareConfig;
use crate::page_text::{TextRun, lines_from_runs, normalize_text};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Normalized textual summary of one page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Fingerprint {
    fn from(value: String) -> Self {
        Fingerprint(value)
    }
}

impl From<&str> for Fingerprint {
    fn from(value: &str) -> Self {
        Fingerprint(value.to_owned())
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes the fingerprint of one page from its text runs.
///
/// Pure and idempotent: the same runs (same order, same values) always
/// produce the same fingerprint. Lines are joined with single spaces,
/// whitespace is collapsed once more, and the result is truncated to
/// `max_fingerprint_chars` to bound worst-case comparison cost.
pub fn fingerprint_page(runs: &[TextRun], config: &CompareConfig) -> Fingerprint {
    let lines = lines_from_runs(runs, config.line_y_tolerance);
    let joined = lines
        .iter()
        .map(|line| line.normalized.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let mut text = normalize_text(&joined);
    if let Some((idx, _)) = text.char_indices().nth(config.max_fingerprint_chars) {
        text.truncate(idx);
    }
    Fingerprint(text)
}

/// Asymmetric token-overlap similarity between two fingerprints.
///
/// Splits both fingerprints on whitespace; each occurrence of an `a` token
/// present in `b`'s token set counts once, and the count is normalized by
/// `max(|tokens(a)|, |tokens(b)|)`. The normalization by the larger token
/// count (not a Jaccard index) rewards coverage of the longer page and must
/// be preserved as-is. Two empty fingerprints are fully similar; exactly
/// one empty yields zero.
pub fn similarity(a: &Fingerprint, b: &Fingerprint) -> f64 {
    let tokens_a: Vec<&str> = a.as_str().split_whitespace().collect();
    let tokens_b: Vec<&str> = b.as_str().split_whitespace().collect();
    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 1.0;
    }
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }
    let set_b: FxHashSet<&str> = tokens_b.iter().copied().collect();
    let overlap = tokens_a.iter().filter(|t| set_b.contains(*t)).count();
    overlap as f64 / tokens_a.len().max(tokens_b.len()) as f64
}
