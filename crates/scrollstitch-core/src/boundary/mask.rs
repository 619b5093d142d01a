use ndarray::{Array2, ArrayView1, ArrayView3, Axis, Zip};

use crate::consts::PIXEL_DIFF_THRESHOLD;
use crate::error::{Result, StitchError};

/// Build the filter mask of two frames: true wherever any channel differs by
/// at least [`PIXEL_DIFF_THRESHOLD`].
pub fn filter_mask(base: ArrayView3<'_, u8>, other: ArrayView3<'_, u8>) -> Result<Array2<bool>> {
    if base.dim() != other.dim() {
        return Err(StitchError::ShapeMismatch(format!(
            "cannot diff frames of shape {:?} and {:?}",
            base.dim(),
            other.dim()
        )));
    }

    let (h, w, _) = base.dim();
    let mut mask = Array2::from_elem((h, w), false);
    Zip::from(&mut mask)
        .and(base.lanes(Axis(2)))
        .and(other.lanes(Axis(2)))
        .for_each(|active, a, b| {
            *active = a
                .iter()
                .zip(b.iter())
                .any(|(&x, &y)| x.abs_diff(y) >= PIXEL_DIFF_THRESHOLD);
        });

    Ok(mask)
}

/// Clear every row and column whose fraction of active pixels is at or below
/// `denoising_factor`.
///
/// Row and column fractions are both measured on the input mask, so clearing
/// a row never changes which columns survive.
pub fn denoise_mask(mask: &Array2<bool>, denoising_factor: f64) -> Array2<bool> {
    let keep_rows: Vec<bool> = mask
        .rows()
        .into_iter()
        .map(|row| active_fraction(row) > denoising_factor)
        .collect();
    let keep_cols: Vec<bool> = mask
        .columns()
        .into_iter()
        .map(|col| active_fraction(col) > denoising_factor)
        .collect();

    let mut denoised = mask.clone();
    Zip::indexed(&mut denoised).for_each(|(row, col), active| {
        *active = *active && keep_rows[row] && keep_cols[col];
    });
    denoised
}

fn active_fraction(line: ArrayView1<'_, bool>) -> f64 {
    if line.is_empty() {
        return 0.0;
    }
    let active = line.iter().filter(|&&v| v).count();
    active as f64 / line.len() as f64
}
