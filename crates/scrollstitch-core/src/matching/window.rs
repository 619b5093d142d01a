use ndarray::{s, Array3, ArrayView3, Axis};
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_COLS_IN_CROP, DEFAULT_LEFT_CROP, DEFAULT_RIGHT_CROP, DEFAULT_ROWS_IN_CROP,
};
use crate::error::{Result, StitchError};

/// Geometry of the windows compared during matching.
///
/// A window keeps the outer `n_cols_in_crop` columns on each side of a crop
/// and cuts a column range out of each band, so the busy middle of a chat
/// view (avatars, timestamps) never takes part in alignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Rows in each top slice.
    pub n_rows_in_crop: usize,
    /// Width of each side band.
    pub n_cols_in_crop: usize,
    /// Start of the column range removed from the left band.
    pub left_crop_from: usize,
    /// End (exclusive) of the column range removed from the left band.
    pub left_crop_to: usize,
    /// Start of the column range removed from the right band.
    pub right_crop_from: usize,
    /// End (exclusive) of the column range removed from the right band.
    pub right_crop_to: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            n_rows_in_crop: DEFAULT_ROWS_IN_CROP,
            n_cols_in_crop: DEFAULT_COLS_IN_CROP,
            left_crop_from: DEFAULT_LEFT_CROP.0,
            left_crop_to: DEFAULT_LEFT_CROP.1,
            right_crop_from: DEFAULT_RIGHT_CROP.0,
            right_crop_to: DEFAULT_RIGHT_CROP.1,
        }
    }
}

impl WindowConfig {
    pub fn validate(&self) -> Result<()> {
        if self.n_rows_in_crop == 0 {
            return Err(StitchError::InvalidConfig(
                "n_rows_in_crop must be > 0".into(),
            ));
        }
        if self.n_cols_in_crop == 0 {
            return Err(StitchError::InvalidConfig(
                "n_cols_in_crop must be > 0".into(),
            ));
        }
        if self.left_crop_from > self.left_crop_to {
            return Err(StitchError::InvalidConfig(format!(
                "left crop range {}..{} is reversed",
                self.left_crop_from, self.left_crop_to
            )));
        }
        if self.right_crop_from > self.right_crop_to {
            return Err(StitchError::InvalidConfig(format!(
                "right crop range {}..{} is reversed",
                self.right_crop_from, self.right_crop_to
            )));
        }
        Ok(())
    }

    /// Validate and check that windows cut from crops `width` columns wide
    /// keep at least one column.
    pub fn validate_for_width(&self, width: usize) -> Result<()> {
        self.validate()?;
        if self.strip_columns(width).is_empty() {
            return Err(StitchError::InvalidConfig(format!(
                "window keeps no columns of a {width}-column crop \
                 (n_cols_in_crop={}, left cut {}..{}, right cut {}..{})",
                self.n_cols_in_crop,
                self.left_crop_from,
                self.left_crop_to,
                self.right_crop_from,
                self.right_crop_to
            )));
        }
        Ok(())
    }

    /// Source column indices, left band first, that survive in a window cut
    /// from an image `width` columns wide.
    pub fn strip_columns(&self, width: usize) -> Vec<usize> {
        let band = self.n_cols_in_crop.min(width);
        let right_start = width - band;

        let mut columns = kept_columns(band, self.left_crop_from, self.left_crop_to);
        columns.extend(
            kept_columns(band, self.right_crop_from, self.right_crop_to)
                .into_iter()
                .map(|c| right_start + c),
        );
        columns
    }
}

/// Columns of a `band`-wide band left after removing `from..to`; both ends
/// are clamped to the band.
fn kept_columns(band: usize, from: usize, to: usize) -> Vec<usize> {
    let from = from.min(band);
    let to = to.min(band).max(from);
    (0..from).chain(to..band).collect()
}

/// Full-height left+right band of `image` with the middle ranges removed.
pub fn reference_strip(image: ArrayView3<'_, u8>, config: &WindowConfig) -> Array3<u8> {
    let columns = config.strip_columns(image.dim().1);
    image.select(Axis(1), &columns)
}

/// The first `n_rows_in_crop` rows of `image`, windowed like
/// [`reference_strip`]. Images shorter than the window yield every row.
pub fn top_slice(image: ArrayView3<'_, u8>, config: &WindowConfig) -> Array3<u8> {
    let rows = config.n_rows_in_crop.min(image.dim().0);
    reference_strip(image.slice(s![..rows, .., ..]), config)
}
