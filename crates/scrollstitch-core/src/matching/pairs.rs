use ndarray::ArrayView3;
use rayon::prelude::*;
use tracing::debug;

use crate::consts::PARALLEL_PAIR_THRESHOLD;
use crate::error::{Result, StitchError};
use crate::frame::BestMatch;

use super::score::{best_match, match_scores};
use super::window::{reference_strip, top_slice, WindowConfig};

/// Best alignment of each crop's top slice inside its predecessor's
/// reference strip. Element `i` aligns `crops[i + 1]` against `crops[i]`.
pub fn match_consecutive(
    window: &WindowConfig,
    crops: &[ArrayView3<'_, u8>],
) -> Result<Vec<BestMatch>> {
    if crops.len() < 2 {
        return Err(StitchError::InsufficientFrames { found: crops.len() });
    }

    let match_pair = |pair: usize| -> Result<BestMatch> {
        let slice = top_slice(crops[pair + 1].view(), window);
        let reference = reference_strip(crops[pair].view(), window);
        let scores = match_scores(slice.view(), reference.view())?;
        let best = best_match(&scores).ok_or(StitchError::WindowTooTall {
            window: slice.dim().0,
            available: reference.dim().0,
        })?;
        debug!(
            pair,
            offset = best.offset,
            score = best.score,
            "Matched pair"
        );
        Ok(best)
    };

    let pairs = crops.len() - 1;
    if pairs >= PARALLEL_PAIR_THRESHOLD {
        (0..pairs).into_par_iter().map(match_pair).collect()
    } else {
        (0..pairs).map(match_pair).collect()
    }
}
