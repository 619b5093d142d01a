use tracing::warn;

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{Result, StitchError};
use crate::frame::{BestMatch, Frame};

/// Fail fast unless every frame has the shape of the first one.
pub(super) fn validate_shapes(frames: &[Frame]) -> Result<()> {
    let first = frames.first().ok_or(StitchError::EmptySequence)?;
    let expected = first.data.dim();

    if expected.2 != COLOR_CHANNEL_COUNT {
        return Err(StitchError::ShapeMismatch(format!(
            "frames must have {COLOR_CHANNEL_COUNT} channels, frame 0 has {}",
            expected.2
        )));
    }

    for (i, frame) in frames.iter().enumerate().skip(1) {
        if frame.data.dim() != expected {
            return Err(StitchError::ShapeMismatch(format!(
                "frame {i} is {}x{}x{}, frame 0 is {}x{}x{}",
                frame.width(),
                frame.height(),
                frame.channels(),
                expected.1,
                expected.0,
                expected.2
            )));
        }
    }
    Ok(())
}

/// Reject the run at the first pair whose best score exceeds `threshold`.
pub(super) fn check_match_threshold(matches: &[BestMatch], threshold: f64) -> Result<()> {
    match matches
        .iter()
        .enumerate()
        .find(|(_, m)| m.score > threshold)
    {
        Some((pair, m)) => {
            warn!(
                pair,
                score = m.score,
                threshold,
                "Match score above threshold"
            );
            Err(StitchError::AlignmentFailure {
                pair,
                score: m.score,
                threshold,
            })
        }
        None => Ok(()),
    }
}
