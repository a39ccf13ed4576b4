//! Boundary to the external document renderer and text extractor.
//!
//! Decoding the document container, rasterizing pages, and extracting
//! positioned text are delegated to an external collaborator behind
//! [`DocumentSource`]. This crate assumes nothing about the run order the
//! extractor returns; fingerprinting re-sorts runs itself.

use crate::alignment::PageIndex;
use crate::page_text::TextRun;
use crate::raster::Raster;
use thiserror::Error;

/// Failure reported by an external document collaborator.
///
/// Mapped to [`CompareError::UnreadableDocument`](crate::CompareError) at
/// the session boundary; never retried by this crate.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SourceError {
    pub message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One loaded document: page count plus per-page rendering and text
/// extraction.
///
/// Rendering and extraction are the comparison pipeline's only suspension
/// points. The scheduling model is a single logical worker with cooperative
/// suspension, so the returned futures carry no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Renders one page (1-based) at the given scale into an RGBA raster of
    /// stable dimensions for that page and scale.
    async fn render_page(&self, page: PageIndex, scale: f32) -> Result<Raster, SourceError>;

    /// Extracts the positioned text runs of one page (1-based).
    async fn extract_runs(&self, page: PageIndex) -> Result<Vec<TextRun>, SourceError>;
}
