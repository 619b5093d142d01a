use thiserror::Error;

#[derive(Error, Debug)]
pub enum StitchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Empty frame sequence")]
    EmptySequence,

    #[error("Need at least 2 distinct frames to stitch, found {found}")]
    InsufficientFrames { found: usize },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Content boundary {left}..{right} x {top}..{bottom} encloses no area")]
    DegenerateBoundary {
        left: usize,
        right: usize,
        top: usize,
        bottom: usize,
    },

    #[error("Window of {window} rows does not fit in {available} rows")]
    WindowTooTall { window: usize, available: usize },

    #[error("Pair {pair}: match score {score:.6} is above threshold {threshold}")]
    AlignmentFailure {
        pair: usize,
        score: f64,
        threshold: f64,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, StitchError>;
