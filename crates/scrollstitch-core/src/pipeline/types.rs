use std::ops::Range;

use ndarray::{s, Array3, ArrayView3};

use crate::boundary::ContentBoundary;
use crate::frame::{BestMatch, ScrollDirection};

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug)]
pub enum PipelineStage {
    Reading,
    DetectingBoundary,
    Trimming,
    ResolvingDirection,
    Matching,
    Joining,
    Bordering,
    Dumping,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "Reading frames"),
            Self::DetectingBoundary => write!(f, "Detecting content"),
            Self::Trimming => write!(f, "Trimming duplicates"),
            Self::ResolvingDirection => write!(f, "Resolving direction"),
            Self::Matching => write!(f, "Matching frames"),
            Self::Joining => write!(f, "Joining frames"),
            Self::Bordering => write!(f, "Attaching borders"),
            Self::Dumping => write!(f, "Dumping crops"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations, and nothing
/// the pipeline computes depends on them.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (e.g., frame pairs), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Everything decided before any pixels are joined.
#[derive(Clone, Debug)]
pub struct StitchPlan<'a> {
    pub boundary: ContentBoundary,
    /// Input frames left after duplicate trimming.
    pub kept: Range<usize>,
    pub direction: ScrollDirection,
    /// Content crops of the kept frames, top of the page first.
    pub crops: Vec<ArrayView3<'a, u8>>,
    /// Input frame the border chrome is copied from.
    pub border_source: usize,
}

/// Summary of a finished run.
#[derive(Clone, Debug)]
pub struct StitchReport {
    pub boundary: ContentBoundary,
    pub frames_total: usize,
    pub kept: Range<usize>,
    pub direction: ScrollDirection,
    /// Alignment of each consecutive pair, in stitch order.
    pub matches: Vec<BestMatch>,
    /// Height of the joined content before borders are attached.
    pub content_height: usize,
    /// (height, width) of the final image.
    pub output_dim: (usize, usize),
}

#[derive(Clone, Debug)]
pub struct StitchOutput {
    pub image: Array3<u8>,
    pub report: StitchReport,
}

impl StitchOutput {
    /// The joined content inside the final image, without border chrome.
    pub fn content(&self) -> ArrayView3<'_, u8> {
        let b = &self.report.boundary;
        self.image.slice(s![
            b.top..b.top + self.report.content_height,
            b.left..b.right,
            ..
        ])
    }
}
