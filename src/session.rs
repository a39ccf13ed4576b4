//! Comparison session: orchestration, caching, and lifetime.
//!
//! A [`ComparisonSession`] owns the two input documents and drives the
//! pipeline: per-page text runs are fingerprinted, the fingerprint
//! sequences are aligned once, and each aligned slot is rasterized and
//! diffed lazily on first access. Slot results are cached append-only for
//! the life of the session; starting a new comparison bumps the session
//! generation and drops the cache, so completions computed for a stale
//! generation are discarded instead of overwriting newer state.

use crate::alignment::{AlignmentSlot, SlotKind, align};
use crate::config::CompareConfig;
use crate::fingerprint::{Fingerprint, fingerprint_page};
use crate::progress::{NoProgress, ProgressCallback};
use crate::raster::Raster;
use crate::raster_diff::{DiffRaster, diff_rasters};
use crate::report::{CompareError, ComparisonReport, DiffStats, SlotSummary};
use crate::source::{DocumentSource, SourceError};
use futures::future;
use rustc_hash::FxHashMap;

/// Result of materializing one alignment slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotOutcome {
    /// Both pages rendered, normalized, and classified.
    Matched { diff: DiffRaster },
    /// Page present only in the left document; its own render passes
    /// through unmodified and no statistics exist.
    LeftOnly { raster: Raster },
    /// Page present only in the right document.
    RightOnly { raster: Raster },
}

impl SlotOutcome {
    pub fn kind(&self) -> SlotKind {
        match self {
            SlotOutcome::Matched { .. } => SlotKind::Matched,
            SlotOutcome::LeftOnly { .. } => SlotKind::LeftOnly,
            SlotOutcome::RightOnly { .. } => SlotKind::RightOnly,
        }
    }

    /// Pixel statistics, absent when no comparison was possible.
    pub fn stats(&self) -> Option<&DiffStats> {
        match self {
            SlotOutcome::Matched { diff } => Some(&diff.stats),
            SlotOutcome::LeftOnly { .. } | SlotOutcome::RightOnly { .. } => None,
        }
    }

    /// The raster to present for this slot: the annotated diff for matched
    /// slots, the lone page's render otherwise.
    pub fn raster(&self) -> &Raster {
        match self {
            SlotOutcome::Matched { diff } => &diff.pixels,
            SlotOutcome::LeftOnly { raster } | SlotOutcome::RightOnly { raster } => raster,
        }
    }
}

/// Fingerprints every page of one document, in page order.
pub async fn fingerprint_document<S: DocumentSource>(
    source: &S,
    config: &CompareConfig,
) -> Result<Vec<Fingerprint>, CompareError> {
    future::try_join_all((1..=source.page_count()).map(|page| async move {
        let runs = source.extract_runs(page).await.map_err(unreadable)?;
        Ok(fingerprint_page(&runs, config))
    }))
    .await
}

/// One comparison's mutable context: the two documents, their fingerprint
/// sequences, the alignment, and the per-slot result cache.
pub struct ComparisonSession<S: DocumentSource> {
    left: S,
    right: S,
    config: CompareConfig,
    fingerprints_left: Vec<Fingerprint>,
    fingerprints_right: Vec<Fingerprint>,
    slots: Vec<AlignmentSlot>,
    cache: FxHashMap<usize, SlotOutcome>,
    generation: u64,
}

impl<S: DocumentSource> ComparisonSession<S> {
    pub fn new(left: S, right: S, config: CompareConfig) -> Self {
        Self {
            left,
            right,
            config,
            fingerprints_left: Vec::new(),
            fingerprints_right: Vec::new(),
            slots: Vec::new(),
            cache: FxHashMap::default(),
            generation: 0,
        }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Incremented on every successful [`start_comparison`].
    ///
    /// [`start_comparison`]: ComparisonSession::start_comparison
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current alignment; empty before the first comparison starts.
    pub fn slots(&self) -> &[AlignmentSlot] {
        &self.slots
    }

    pub fn fingerprints(&self) -> (&[Fingerprint], &[Fingerprint]) {
        (&self.fingerprints_left, &self.fingerprints_right)
    }

    pub fn is_cached(&self, index: usize) -> bool {
        self.cache.contains_key(&index)
    }

    /// Fingerprints both documents, aligns them, and resets the slot cache.
    pub async fn start_comparison(&mut self) -> Result<(), CompareError> {
        self.start_comparison_with_progress(&NoProgress).await
    }

    pub async fn start_comparison_with_progress(
        &mut self,
        progress: &impl ProgressCallback,
    ) -> Result<(), CompareError> {
        let left_pages = self.left.page_count();
        let right_pages = self.right.page_count();
        if left_pages == 0 && right_pages == 0 {
            return Err(CompareError::EmptyDocumentSet);
        }

        let fingerprints_left = fingerprint_document(&self.left, &self.config).await?;
        progress.on_progress("fingerprint", 0.5);
        let fingerprints_right = fingerprint_document(&self.right, &self.config).await?;
        progress.on_progress("fingerprint", 1.0);

        let slots = align(&fingerprints_left, &fingerprints_right, &self.config);
        if slots.is_empty() {
            return Err(CompareError::AlignmentUnresolved {
                left_pages,
                right_pages,
            });
        }

        self.fingerprints_left = fingerprints_left;
        self.fingerprints_right = fingerprints_right;
        self.slots = slots;
        self.generation += 1;
        self.cache.clear();
        Ok(())
    }

    /// Returns the outcome for one slot, computing and caching it on first
    /// access. Cache entries are append-only; a stored outcome is never
    /// recomputed for the lifetime of the session.
    pub async fn get_slot(&mut self, index: usize) -> Result<&SlotOutcome, CompareError> {
        if index >= self.slots.len() {
            return Err(CompareError::SlotOutOfRange {
                index,
                slots: self.slots.len(),
            });
        }
        if !self.cache.contains_key(&index) {
            let outcome =
                compute_slot(&self.left, &self.right, self.slots[index], &self.config).await?;
            self.cache.insert(index, outcome);
        }
        Ok(&self.cache[&index])
    }

    /// Ensures every slot's outcome exists, fanning out the missing ones.
    pub async fn materialize_all(&mut self) -> Result<(), CompareError> {
        self.materialize_all_with_progress(&NoProgress).await
    }

    /// Like [`materialize_all`](ComparisonSession::materialize_all), with
    /// per-slot progress on the `"diff"` phase. Missing slots are computed
    /// independently and may complete in any order; completions tagged with
    /// a generation other than the session's current one are dropped at
    /// insert time.
    pub async fn materialize_all_with_progress(
        &mut self,
        progress: &impl ProgressCallback,
    ) -> Result<(), CompareError> {
        let generation = self.generation;
        let missing: Vec<usize> = (0..self.slots.len())
            .filter(|index| !self.cache.contains_key(index))
            .collect();
        let total = self.slots.len().max(1);
        let mut done = total - missing.len();

        let left = &self.left;
        let right = &self.right;
        let slots = &self.slots;
        let config = &self.config;
        let computed = future::join_all(missing.into_iter().map(|index| async move {
            let outcome = compute_slot(left, right, slots[index], config).await;
            (index, generation, outcome)
        }))
        .await;

        for (index, tag, outcome) in computed {
            let outcome = outcome?;
            if tag == self.generation {
                self.cache.entry(index).or_insert(outcome);
            }
            done += 1;
            progress.on_progress("diff", done as f32 / total as f32);
        }
        Ok(())
    }

    /// Serializable summary of the current alignment and any cached stats.
    pub fn report(&self) -> ComparisonReport {
        let slots = self
            .slots
            .iter()
            .enumerate()
            .map(|(index, slot)| SlotSummary {
                index,
                kind: slot.kind(),
                left_page: slot.left(),
                right_page: slot.right(),
                stats: self
                    .cache
                    .get(&index)
                    .and_then(|outcome| outcome.stats().copied()),
            })
            .collect();
        ComparisonReport { slots }
    }
}

/// Renders the page(s) of one slot and classifies matched pairs.
///
/// Both sides of a matched slot render concurrently; the diff runs once
/// both completions arrive. One-sided slots pass the lone render through.
async fn compute_slot<S: DocumentSource>(
    left: &S,
    right: &S,
    slot: AlignmentSlot,
    config: &CompareConfig,
) -> Result<SlotOutcome, CompareError> {
    match slot {
        AlignmentSlot::Matched {
            left: left_page,
            right: right_page,
        } => {
            let (raster_a, raster_b) = future::try_join(
                left.render_page(left_page, config.render_scale),
                right.render_page(right_page, config.render_scale),
            )
            .await
            .map_err(unreadable)?;
            Ok(SlotOutcome::Matched {
                diff: diff_rasters(&raster_a, &raster_b, config),
            })
        }
        AlignmentSlot::LeftOnly { left: page } => {
            let raster = left
                .render_page(page, config.render_scale)
                .await
                .map_err(unreadable)?;
            Ok(SlotOutcome::LeftOnly { raster })
        }
        AlignmentSlot::RightOnly { right: page } => {
            let raster = right
                .render_page(page, config.render_scale)
                .await
                .map_err(unreadable)?;
            Ok(SlotOutcome::RightOnly { raster })
        }
    }
}

fn unreadable(err: SourceError) -> CompareError {
    CompareError::UnreadableDocument {
        reason: err.to_string(),
    }
}
