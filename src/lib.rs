//! Page Diff: page alignment and raster comparison for paginated documents.
//!
//! This crate provides functionality for:
//! - Fingerprinting each page of a document from its positioned text runs
//! - Aligning two page sequences even when pages were inserted or deleted
//! - Classifying every pixel of two same-slot renderings as matching,
//!   matching-white, or differing
//! - Driving a cached, lazily-materialized comparison session
//!
//! Document decoding, rendering, and text extraction are external; callers
//! plug them in through the [`DocumentSource`] trait.
//!
//! # Quick Start
//!
//! ```ignore
//! use pagediff::{CompareConfig, ComparisonSession};
//!
//! let mut session = ComparisonSession::new(left_doc, right_doc, CompareConfig::default());
//! session.start_comparison().await?;
//! for index in 0..session.slots().len() {
//!     let outcome = session.get_slot(index).await?;
//!     println!("{:?}", outcome.stats());
//! }
//! ```

mod alignment;
mod config;
pub mod error_codes;
mod fingerprint;
mod page_text;
mod progress;
mod raster;
mod raster_diff;
mod report;
mod session;
mod source;

pub use alignment::{AlignmentSlot, PageIndex, SlotKind, align};
pub use config::{CompareConfig, CompareConfigBuilder};
pub use fingerprint::{Fingerprint, fingerprint_page, similarity};
pub use page_text::{Line, Rect, TextRun, lines_from_runs};
pub use progress::{NoProgress, ProgressCallback};
pub use raster::{Raster, normalize_pair};
pub use raster_diff::{DiffRaster, diff_rasters};
pub use report::{CompareError, ComparisonReport, DiffStats, SlotSummary, serialize_report};
pub use session::{ComparisonSession, SlotOutcome, fingerprint_document};
pub use source::{DocumentSource, SourceError};
