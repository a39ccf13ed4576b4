//! Positioned page text and line clustering.
//!
//! The external text extractor produces one [`TextRun`] per positioned
//! string on a page, in no meaningful order. This module re-sorts the runs
//! and clusters them into [`Line`]s by baseline, which is the only
//! reordering the fingerprinting pipeline ever performs.

use serde::{Deserialize, Serialize};

/// Atomic unit from the external text extractor: one positioned string.
///
/// `x`/`y` are the baseline origin in layout units; runs are immutable and
/// produced once per page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl TextRun {
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
        }
    }

    fn bounds(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y - self.height,
            width: self.width,
            height: self.height,
        }
    }
}

/// Axis-aligned bounding rectangle in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn union(self, other: Rect) -> Rect {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = (self.x + self.width).max(other.x + other.width);
        let y1 = (self.y + self.height).max(other.y + other.height);
        Rect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }
}

/// Ordered cluster of runs sharing a baseline within the tolerance band.
///
/// Built once per page from its runs and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Member run strings concatenated verbatim, no inserted separators.
    pub text: String,
    /// `text` trimmed with internal whitespace runs collapsed to one space.
    pub normalized: String,
    /// Union of the member runs' bounding rectangles.
    pub bounds: Rect,
}

/// Trims and collapses internal whitespace runs to a single space.
pub(crate) fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for token in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Clusters a page's runs into lines.
///
/// Runs are sorted by descending baseline-y, grouped into lines, and each
/// line is then sorted by ascending x. A new line starts whenever a run's
/// y differs from the current line's reference y (its topmost run) by more
/// than `tolerance`, so sub-pixel baseline jitter does not split lines.
/// Both sort keys are total orders over the run values alone, making the
/// result independent of extraction order. Empty-text runs are skipped
/// before grouping.
pub fn lines_from_runs(runs: &[TextRun], tolerance: f32) -> Vec<Line> {
    let mut sorted: Vec<&TextRun> = runs.iter().filter(|run| !run.text.is_empty()).collect();
    sorted.sort_by(|a, b| b.y.total_cmp(&a.y));

    let mut lines = Vec::new();
    let mut current: Vec<&TextRun> = Vec::new();
    let mut current_y = 0.0f32;

    for run in sorted {
        if current.is_empty() {
            current_y = run.y;
        } else if (run.y - current_y).abs() > tolerance {
            finish_line(&mut current, &mut lines);
            current_y = run.y;
        }
        current.push(run);
    }
    finish_line(&mut current, &mut lines);

    lines
}

fn finish_line(current: &mut Vec<&TextRun>, lines: &mut Vec<Line>) {
    current.sort_by(|a, b| a.x.total_cmp(&b.x));
    if let Some(line) = build_line(current) {
        lines.push(line);
    }
    current.clear();
}

fn build_line(runs: &[&TextRun]) -> Option<Line> {
    let first = runs.first()?;
    let mut text = String::new();
    let mut bounds = first.bounds();
    for run in runs {
        text.push_str(&run.text);
        bounds = bounds.union(run.bounds());
    }
    let normalized = normalize_text(&text);
    Some(Line {
        text,
        normalized,
        bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, x: f32, y: f32) -> TextRun {
        TextRun::new(text, x, y, 10.0, 12.0)
    }

    #[test]
    fn clusters_runs_on_one_baseline_left_to_right() {
        let runs = vec![run("world", 60.0, 700.0), run("hello ", 10.0, 700.0)];
        let lines = lines_from_runs(&runs, 3.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "hello world");
        assert_eq!(lines[0].normalized, "hello world");
    }

    #[test]
    fn splits_lines_beyond_tolerance() {
        let runs = vec![run("second", 10.0, 680.0), run("first", 10.0, 700.0)];
        let lines = lines_from_runs(&runs, 3.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].normalized, "first");
        assert_eq!(lines[1].normalized, "second");
    }

    #[test]
    fn baseline_jitter_within_tolerance_stays_one_line() {
        let runs = vec![
            run("a", 10.0, 700.0),
            run("b", 20.0, 702.5),
            run("c", 30.0, 699.8),
        ];
        let lines = lines_from_runs(&runs, 3.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "abc");
    }

    #[test]
    fn empty_runs_are_skipped() {
        let runs = vec![run("", 10.0, 700.0), run("kept", 20.0, 700.0)];
        let lines = lines_from_runs(&runs, 3.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "kept");
    }

    #[test]
    fn normalization_collapses_internal_whitespace() {
        assert_eq!(normalize_text("  a \t b\n\nc  "), "a b c");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn long_jitter_chain_of_baselines_clusters_without_panic() {
        // Baselines 2 units apart chain transitively inside the tolerance
        // band (a~b, b~c, but not a~c), which a tolerance-aware comparator
        // cannot order totally; clustering must stay well-defined over
        // hundreds of such runs with arbitrary x positions.
        let mut runs = Vec::new();
        let mut seed = 7u32;
        for i in 0..500u32 {
            seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
            runs.push(TextRun::new(
                format!("r{i}"),
                (seed % 100) as f32,
                800.0 - 2.0 * i as f32,
                10.0,
                12.0,
            ));
        }
        let lines = lines_from_runs(&runs, 3.0);
        // Bands form in pairs: the reference run plus the one 2 units below.
        assert_eq!(lines.len(), 250);
    }

    #[test]
    fn clustering_is_independent_of_extraction_order() {
        let mut runs = vec![
            run("c", 50.0, 701.0),
            run("a", 10.0, 700.0),
            run("d", 10.0, 650.0),
            run("b", 30.0, 699.0),
        ];
        let forward = lines_from_runs(&runs, 3.0);
        runs.reverse();
        let reversed = lines_from_runs(&runs, 3.0);
        assert_eq!(forward, reversed);
        assert_eq!(forward[0].text, "abc");
        assert_eq!(forward[1].text, "d");
    }

    #[test]
    fn line_bounds_cover_all_member_runs() {
        let runs = vec![run("a", 10.0, 700.0), run("b", 80.0, 700.0)];
        let lines = lines_from_runs(&runs, 3.0);
        let bounds = lines[0].bounds;
        assert_eq!(bounds.x, 10.0);
        assert_eq!(bounds.width, 80.0);
        assert_eq!(bounds.height, 12.0);
    }
}
