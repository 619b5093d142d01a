use ndarray::{Array2, ArrayView1, ArrayView3, Axis, Zip};
use rayon::prelude::*;

use crate::consts::{COLOR_CHANNEL_COUNT, LUMA_B, LUMA_G, LUMA_R, PARALLEL_OFFSET_THRESHOLD};
use crate::error::{Result, StitchError};
use crate::frame::BestMatch;

/// Luma of the first three channels, `0.2989 R + 0.5870 G + 0.1140 B`.
pub fn grayscale(image: ArrayView3<'_, u8>) -> Array2<f64> {
    let (h, w, _) = image.dim();
    let mut gray = Array2::<f64>::zeros((h, w));
    Zip::from(&mut gray)
        .and(image.lanes(Axis(2)))
        .for_each(|g, px| {
            *g = px[0] as f64 * LUMA_R + px[1] as f64 * LUMA_G + px[2] as f64 * LUMA_B;
        });
    gray
}

/// `1 - cos(a, b)` given both norms: 0 for vectors pointing the same way, up
/// to 2 for opposite ones.
///
/// Two all-zero vectors score 0; a zero vector against a non-zero one scores 1.
fn distance_with_norms(
    a: ArrayView1<'_, f64>,
    b: ArrayView1<'_, f64>,
    norm_a: f64,
    norm_b: f64,
) -> f64 {
    match (norm_a == 0.0, norm_b == 0.0) {
        (true, true) => 0.0,
        (true, false) | (false, true) => 1.0,
        (false, false) => 1.0 - a.dot(&b) / (norm_a * norm_b),
    }
}

/// Score `slice` against every `slice.height`-row window of `search_space`.
///
/// Element `k` of the result compares `slice` with rows `k..k + slice.height`;
/// there are `search.height - slice.height + 1` scores.
pub fn match_scores(
    slice: ArrayView3<'_, u8>,
    search_space: ArrayView3<'_, u8>,
) -> Result<Vec<f64>> {
    let (window, width, channels) = slice.dim();
    let (available, search_width, search_channels) = search_space.dim();

    if width != search_width || channels != search_channels {
        return Err(StitchError::ShapeMismatch(format!(
            "slice is {width} columns x {channels} channels, search space is \
             {search_width} columns x {search_channels} channels"
        )));
    }
    if channels < COLOR_CHANNEL_COUNT {
        return Err(StitchError::ShapeMismatch(format!(
            "matching needs {COLOR_CHANNEL_COUNT} channels, got {channels}"
        )));
    }
    if window == 0 {
        return Err(StitchError::ShapeMismatch("slice has no rows".into()));
    }
    if window > available {
        return Err(StitchError::WindowTooTall { window, available });
    }

    let slice_flat: Vec<f64> = grayscale(slice).iter().copied().collect();
    let search_flat: Vec<f64> = grayscale(search_space).iter().copied().collect();
    let slice_vec = ArrayView1::from(&slice_flat[..]);
    let slice_norm = slice_vec.dot(&slice_vec).sqrt();
    let window_len = window * width;

    let score_at = |offset: usize| {
        let start = offset * width;
        let candidate = ArrayView1::from(&search_flat[start..start + window_len]);
        let candidate_norm = candidate.dot(&candidate).sqrt();
        distance_with_norms(slice_vec, candidate, slice_norm, candidate_norm)
    };

    let offsets = available - window + 1;
    let scores: Vec<f64> = if offsets >= PARALLEL_OFFSET_THRESHOLD {
        (0..offsets).into_par_iter().map(score_at).collect()
    } else {
        (0..offsets).map(score_at).collect()
    };
    Ok(scores)
}

/// Lowest score and its offset; ties go to the smallest offset.
pub fn best_match(scores: &[f64]) -> Option<BestMatch> {
    let mut best: Option<BestMatch> = None;
    for (offset, &score) in scores.iter().enumerate() {
        match best {
            Some(b) if b.score <= score => {}
            _ => best = Some(BestMatch { offset, score }),
        }
    }
    best
}
