//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use pagediff::{DocumentSource, PageIndex, Raster, SourceError, TextRun};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

pub fn block_on<F: Future>(future: F) -> F::Output {
    futures::executor::block_on(future)
}

pub fn run(text: &str, x: f32, y: f32) -> TextRun {
    TextRun::new(text, x, y, 10.0, 12.0)
}

pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Raster {
    RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

pub struct StaticPage {
    pub runs: Vec<TextRun>,
    pub raster: Raster,
}

/// Builds a one-run page whose raster is a solid color.
pub fn text_page(text: &str, rgb: [u8; 3]) -> StaticPage {
    StaticPage {
        runs: vec![run(text, 10.0, 700.0)],
        raster: solid(4, 4, rgb),
    }
}

/// In-memory [`DocumentSource`] with a shared render-call counter.
pub struct StaticDocument {
    pages: Vec<StaticPage>,
    pub render_calls: Rc<Cell<u32>>,
    pub fail_render: bool,
}

impl StaticDocument {
    pub fn new(pages: Vec<StaticPage>) -> Self {
        Self {
            pages,
            render_calls: Rc::new(Cell::new(0)),
            fail_render: false,
        }
    }

    pub fn failing(pages: Vec<StaticPage>) -> Self {
        Self {
            fail_render: true,
            ..Self::new(pages)
        }
    }

    pub fn counter(&self) -> Rc<Cell<u32>> {
        Rc::clone(&self.render_calls)
    }
}

impl DocumentSource for StaticDocument {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    async fn render_page(&self, page: PageIndex, _scale: f32) -> Result<Raster, SourceError> {
        self.render_calls.set(self.render_calls.get() + 1);
        if self.fail_render {
            return Err(SourceError::new("simulated render failure"));
        }
        self.pages
            .get(page as usize - 1)
            .map(|p| p.raster.clone())
            .ok_or_else(|| SourceError::new(format!("no page {page}")))
    }

    async fn extract_runs(&self, page: PageIndex) -> Result<Vec<TextRun>, SourceError> {
        self.pages
            .get(page as usize - 1)
            .map(|p| p.runs.clone())
            .ok_or_else(|| SourceError::new(format!("no page {page}")))
    }
}
