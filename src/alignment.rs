//! Page alignment between two fingerprint sequences.
//!
//! Computes an optimal global alignment with a similarity-weighted dynamic
//! program, mapping pages of the left document to pages of the right even
//! when pages were inserted or deleted. Each side's page indices appear in
//! increasing order across the resulting slot sequence; pages are never
//! reordered.

use crate::config::CompareConfig;
use crate::fingerprint::{Fingerprint, similarity};
use serde::{Deserialize, Serialize};

/// 1-based page number within one document.
pub type PageIndex = u32;

/// One unit of the page-correspondence result: a matched pair or a
/// one-sided (inserted/deleted) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlignmentSlot {
    Matched { left: PageIndex, right: PageIndex },
    LeftOnly { left: PageIndex },
    RightOnly { right: PageIndex },
}

/// Discriminant of an [`AlignmentSlot`], used in summaries and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Matched,
    LeftOnly,
    RightOnly,
}

impl AlignmentSlot {
    pub fn kind(&self) -> SlotKind {
        match self {
            AlignmentSlot::Matched { .. } => SlotKind::Matched,
            AlignmentSlot::LeftOnly { .. } => SlotKind::LeftOnly,
            AlignmentSlot::RightOnly { .. } => SlotKind::RightOnly,
        }
    }

    pub fn left(&self) -> Option<PageIndex> {
        match self {
            AlignmentSlot::Matched { left, .. } | AlignmentSlot::LeftOnly { left } => Some(*left),
            AlignmentSlot::RightOnly { .. } => None,
        }
    }

    pub fn right(&self) -> Option<PageIndex> {
        match self {
            AlignmentSlot::Matched { right, .. } | AlignmentSlot::RightOnly { right } => {
                Some(*right)
            }
            AlignmentSlot::LeftOnly { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Match,
    LeftOnly,
    RightOnly,
}

const UNREACHED: f64 = -1.0;

/// Aligns two fingerprint sequences into an ordered slot sequence.
///
/// A pairing `(i, j)` is offered to the dynamic program only when
/// `similarity >= match_threshold` (inclusive), scored `1 + similarity`;
/// consuming a page unmatched on either side scores zero. Cells keep the
/// strictly greatest score, so on ties the first writer wins and the
/// row-major fill order yields the priority match > left-only > right-only.
///
/// Every left index `1..=n1` and right index `1..=n2` appears exactly once
/// across the result, both strictly increasing. The result is empty only
/// when both inputs are empty; the caller reports that case as an error.
///
/// `O(n1 * n2)` time and space, acceptable for page counts in the tens to
/// low hundreds.
pub fn align(
    left: &[Fingerprint],
    right: &[Fingerprint],
    config: &CompareConfig,
) -> Vec<AlignmentSlot> {
    let n1 = left.len();
    let n2 = right.len();

    let mut scores = vec![vec![UNREACHED; n2 + 1]; n1 + 1];
    let mut steps: Vec<Vec<Option<Step>>> = vec![vec![None; n2 + 1]; n1 + 1];
    scores[0][0] = 0.0;

    for i in 0..=n1 {
        for j in 0..=n2 {
            let here = scores[i][j];
            if here < 0.0 {
                continue;
            }
            if i < n1 && j < n2 {
                let sim = similarity(&left[i], &right[j]);
                if sim >= config.match_threshold {
                    let score = here + 1.0 + sim;
                    if score > scores[i + 1][j + 1] {
                        scores[i + 1][j + 1] = score;
                        steps[i + 1][j + 1] = Some(Step::Match);
                    }
                }
            }
            if i < n1 && here > scores[i + 1][j] {
                scores[i + 1][j] = here;
                steps[i + 1][j] = Some(Step::LeftOnly);
            }
            if j < n2 && here > scores[i][j + 1] {
                scores[i][j + 1] = here;
                steps[i][j + 1] = Some(Step::RightOnly);
            }
        }
    }

    let mut slots = Vec::with_capacity(n1.max(n2));
    let mut i = n1;
    let mut j = n2;
    while i > 0 || j > 0 {
        match steps[i][j] {
            Some(Step::Match) => {
                slots.push(AlignmentSlot::Matched {
                    left: i as PageIndex,
                    right: j as PageIndex,
                });
                i -= 1;
                j -= 1;
            }
            Some(Step::LeftOnly) => {
                slots.push(AlignmentSlot::LeftOnly {
                    left: i as PageIndex,
                });
                i -= 1;
            }
            Some(Step::RightOnly) => {
                slots.push(AlignmentSlot::RightOnly {
                    right: j as PageIndex,
                });
                j -= 1;
            }
            None => {
                // Structurally unreachable given M[0][0] = 0 and the
                // monotone fill; kept as the original consumption order of
                // remaining left pages first, then right.
                debug_assert!(false, "backtrace reached a cell with no recorded step");
                if i > 0 {
                    slots.push(AlignmentSlot::LeftOnly {
                        left: i as PageIndex,
                    });
                    i -= 1;
                } else {
                    slots.push(AlignmentSlot::RightOnly {
                        right: j as PageIndex,
                    });
                    j -= 1;
                }
            }
        }
    }
    slots.reverse();

    debug_assert!(
        is_monotonic(&slots),
        "slot page indices must be strictly increasing on both sides"
    );

    slots
}

fn is_monotonic(slots: &[AlignmentSlot]) -> bool {
    let lefts: Vec<PageIndex> = slots.iter().filter_map(|s| s.left()).collect();
    let rights: Vec<PageIndex> = slots.iter().filter_map(|s| s.right()).collect();
    lefts.windows(2).all(|w| w[0] < w[1]) && rights.windows(2).all(|w| w[0] < w[1])
}
