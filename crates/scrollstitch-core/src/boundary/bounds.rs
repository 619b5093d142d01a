use ndarray::{Array2, ArrayView2, ArrayView3, Axis};
use tracing::debug;

use crate::consts::EMPTY_LINE_SENTINEL;
use crate::error::{Result, StitchError};

use super::mask::{denoise_mask, filter_mask};

/// Region shared by all frames that holds scrolling content.
/// `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentBoundary {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl ContentBoundary {
    pub fn width(&self) -> usize {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> usize {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_degenerate(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Check that the boundary encloses a non-empty area inside a
    /// `width` x `height` frame.
    pub fn validated(&self, width: usize, height: usize) -> Result<ContentBoundary> {
        if self.is_degenerate() {
            return Err(StitchError::DegenerateBoundary {
                left: self.left,
                right: self.right,
                top: self.top,
                bottom: self.bottom,
            });
        }

        if self.right > width || self.bottom > height {
            return Err(StitchError::ShapeMismatch(format!(
                "content boundary {self:?} exceeds frame dimensions ({width}x{height})"
            )));
        }

        Ok(*self)
    }
}

/// Detect the content boundary between two frames of the same shape.
///
/// The returned boundary is not validated: when the frames are identical it is
/// degenerate, and callers must run [`ContentBoundary::validated`] before
/// cropping with it.
pub fn detect_boundary(
    base: ArrayView3<'_, u8>,
    other: ArrayView3<'_, u8>,
    denoising_factor: f64,
) -> Result<ContentBoundary> {
    if !(0.0..1.0).contains(&denoising_factor) {
        return Err(StitchError::InvalidConfig(format!(
            "denoising factor must be in [0, 1), got {denoising_factor}"
        )));
    }

    let mask = filter_mask(base, other)?;
    let denoised = denoise_mask(&mask, denoising_factor);
    let boundary = find_boundary(&denoised);
    debug!(?boundary, denoising_factor, "Detected content boundary");
    Ok(boundary)
}

/// Bounding rectangle of a filter mask.
///
/// Each side is found per line: every row (for left/right) or column (for
/// top/bottom) reports its first active index, lines without one report
/// [`EMPTY_LINE_SENTINEL`], and the side is the minimum over all lines. The
/// far sides repeat this on the flipped mask and reflect the result back. An
/// all-false mask therefore yields `left = top = EMPTY_LINE_SENTINEL` and
/// `right = bottom = 0`.
pub fn find_boundary(mask: &Array2<bool>) -> ContentBoundary {
    let view = mask.view();
    ContentBoundary {
        left: normal_bound(view, Axis(1)),
        right: reverse_bound(view, Axis(1)),
        top: normal_bound(view, Axis(0)),
        bottom: reverse_bound(view, Axis(0)),
    }
}

/// Smallest first-active index over all lines running along `axis`.
fn normal_bound(mask: ArrayView2<'_, bool>, axis: Axis) -> usize {
    mask.lanes(axis)
        .into_iter()
        .map(|lane| {
            lane.iter()
                .position(|&active| active)
                .unwrap_or(EMPTY_LINE_SENTINEL)
        })
        .min()
        .unwrap_or(EMPTY_LINE_SENTINEL)
}

/// Exclusive far bound along `axis`, computed on the flipped mask.
fn reverse_bound(mask: ArrayView2<'_, bool>, axis: Axis) -> usize {
    let mut flipped = mask;
    flipped.invert_axis(axis);
    mask.len_of(axis)
        .saturating_sub(normal_bound(flipped, axis))
}
