use ndarray::{s, Array3, ArrayView3};
use tracing::{debug, info};

use crate::error::{Result, StitchError};

fn check_columns(newer: &ArrayView3<'_, u8>, older_dim: (usize, usize, usize)) -> Result<()> {
    let (_, w, c) = newer.dim();
    let (_, older_w, older_c) = older_dim;
    if w != older_w || c != older_c {
        return Err(StitchError::ShapeMismatch(format!(
            "cannot join a {w}-column, {c}-channel image onto a {older_w}-column, \
             {older_c}-channel image"
        )));
    }
    Ok(())
}

/// Row at which `newer` starts when joined onto an image of `older_height`
/// rows with the given offset.
fn placement(older_height: usize, offset: usize, newer_height: usize) -> Result<usize> {
    let canvas = older_height + offset;
    let at = canvas.checked_sub(newer_height).ok_or_else(|| {
        StitchError::ShapeMismatch(format!(
            "image of {newer_height} rows does not fit a {canvas}-row canvas \
             ({older_height} rows + offset {offset})"
        ))
    })?;
    if at > older_height {
        return Err(StitchError::ShapeMismatch(format!(
            "offset {offset} leaves rows {older_height}..{at} uncovered"
        )));
    }
    Ok(at)
}

/// Join `newer` below `older`.
///
/// The result has `older.height + offset` rows. `newer` fills the bottom
/// `newer.height` of them and `older` supplies everything above.
pub fn join_pair(
    newer: ArrayView3<'_, u8>,
    older: ArrayView3<'_, u8>,
    offset: usize,
) -> Result<Array3<u8>> {
    check_columns(&newer, older.dim())?;
    let (older_h, w, c) = older.dim();
    let newer_h = newer.dim().0;
    let at = placement(older_h, offset, newer_h)?;

    let mut canvas = Array3::<u8>::zeros((older_h + offset, w, c));
    canvas
        .slice_mut(s![..at, .., ..])
        .assign(&older.slice(s![..at, .., ..]));
    canvas.slice_mut(s![at.., .., ..]).assign(&newer);
    Ok(canvas)
}

/// Join all crops top to bottom; `offsets[i]` places `crops[i + 1]`.
///
/// Equivalent to folding [`join_pair`] over the sequence, but composed in one
/// growing row buffer. The result has `crops[0].height + sum(offsets)` rows.
pub fn join_sequence(crops: &[ArrayView3<'_, u8>], offsets: &[usize]) -> Result<Array3<u8>> {
    let first = crops.first().ok_or(StitchError::EmptySequence)?;
    if offsets.len() + 1 != crops.len() {
        return Err(StitchError::ShapeMismatch(format!(
            "{} crops need {} offsets, got {}",
            crops.len(),
            crops.len() - 1,
            offsets.len()
        )));
    }

    let (first_h, w, c) = first.dim();
    let row_len = w * c;
    let total: usize = first_h + offsets.iter().sum::<usize>();

    let mut buffer: Vec<u8> = Vec::with_capacity(total * row_len);
    buffer.extend(first.iter().copied());
    let mut height = first_h;

    for (i, (newer, &offset)) in crops[1..].iter().zip(offsets).enumerate() {
        check_columns(newer, (height, w, c))?;
        let at = placement(height, offset, newer.dim().0)?;
        buffer.truncate(at * row_len);
        buffer.extend(newer.iter().copied());
        height = at + newer.dim().0;
        debug!(image = i + 1, at, height, "Joined image");
    }

    info!(images = crops.len(), height, width = w, "Joined all images");
    Array3::from_shape_vec((height, w, c), buffer)
        .map_err(|e| StitchError::ShapeMismatch(e.to_string()))
}
