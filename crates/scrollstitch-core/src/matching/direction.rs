use ndarray::ArrayView3;
use tracing::debug;

use crate::error::{Result, StitchError};
use crate::frame::ScrollDirection;

use super::score::{best_match, match_scores};
use super::window::{reference_strip, top_slice, WindowConfig};

/// Decide the scroll direction from the first two crops.
///
/// The top slice of each crop is searched in the other's reference strip.
/// If the second crop's top fits the first one better, content moved up the
/// screen and the capture scrolled down; otherwise (ties included) it
/// scrolled up.
pub fn resolve_direction(
    window: &WindowConfig,
    crops: &[ArrayView3<'_, u8>],
) -> Result<ScrollDirection> {
    let (first, second) = match crops {
        [first, second, ..] => (first, second),
        _ => return Err(StitchError::InsufficientFrames { found: crops.len() }),
    };

    let first_slice = top_slice(first.view(), window);
    let second_slice = top_slice(second.view(), window);
    let first_reference = reference_strip(first.view(), window);
    let second_reference = reference_strip(second.view(), window);

    let down_scores = match_scores(second_slice.view(), first_reference.view())?;
    let up_scores = match_scores(first_slice.view(), second_reference.view())?;

    let down = lowest_score(&down_scores);
    let up = lowest_score(&up_scores);
    debug!(down, up, "Compared scroll hypotheses");

    if down < up {
        Ok(ScrollDirection::Down)
    } else {
        Ok(ScrollDirection::Up)
    }
}

fn lowest_score(scores: &[f64]) -> f64 {
    best_match(scores).map_or(f64::INFINITY, |m| m.score)
}
