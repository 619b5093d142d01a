use ndarray::{Array3, ArrayView3};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single RGB screenshot.
/// Pixel values are u8, shape = (height, width, 3).
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width, channels)
    pub data: Array3<u8>,
    /// Optional per-frame metadata
    pub metadata: FrameMetadata,
}

impl Frame {
    pub fn new(data: Array3<u8>) -> Self {
        Self {
            data,
            metadata: FrameMetadata::default(),
        }
    }

    pub fn with_metadata(data: Array3<u8>, metadata: FrameMetadata) -> Self {
        Self { data, metadata }
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameMetadata {
    pub frame_index: usize,
    pub source: Option<PathBuf>,
}

/// Direction the captured window was scrolled in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
}

impl std::fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// Best alignment found for one pair of consecutive crops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BestMatch {
    /// Row of the reference crop at which the next crop's top slice lands.
    pub offset: usize,
    /// Cosine distance at that row; 0 is a perfect match.
    pub score: f64,
}
