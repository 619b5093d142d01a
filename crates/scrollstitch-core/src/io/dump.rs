use std::path::Path;

use ndarray::ArrayView3;
use tracing::debug;

use crate::boundary::{denoise_mask, filter_mask};
use crate::error::{Result, StitchError};
use crate::frame::Frame;
use crate::matching::{reference_strip, top_slice};
use crate::pipeline::config::StitchConfig;
use crate::pipeline::StitchPlan;

use super::image_io::{save_mask, save_rgb};

/// Write the denoised filter mask plus the slice and reference crop of every
/// pair into `dir`, creating it if needed.
///
/// Files: `filter_mask.png`, `slice_crop_{i}.png` (top slice of crop `i + 1`)
/// and `reference_crop_{i}.png` (reference strip of crop `i`).
pub fn dump_intermediates(
    dir: &Path,
    frames: &[Frame],
    plan: &StitchPlan<'_>,
    config: &StitchConfig,
) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let (first, last) = match (frames.first(), frames.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(StitchError::EmptySequence),
    };
    let mask = denoise_mask(
        &filter_mask(last.view(), first.view())?,
        config.denoising_factor,
    );
    save_mask(&mask, &dir.join("filter_mask.png"))?;

    for (i, pair) in plan.crops.windows(2).enumerate() {
        let slice = top_slice(pair[1].view(), &config.window);
        let reference = reference_strip(pair[0].view(), &config.window);
        let slice_path = dir.join(format!("slice_crop_{i}.png"));
        let reference_path = dir.join(format!("reference_crop_{i}.png"));
        save_rgb(slice.view(), &slice_path)?;
        save_rgb(reference.view(), &reference_path)?;
    }

    let pairs = plan.crops.len().saturating_sub(1);
    debug!(dir = %dir.display(), pairs, "Dumped crops");
    Ok(())
}

/// Write the joined content, before borders are attached, as `content.png`.
pub fn dump_content(dir: &Path, content: ArrayView3<'_, u8>) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    save_rgb(content, &dir.join("content.png"))
}
