use std::sync::Arc;

use tracing::info;

use crate::boundary::{
    crop_frames, detect_boundary, extend_border_strips, extract_border_strips, trim_duplicate_crops,
};
use crate::error::{Result, StitchError};
use crate::frame::{Frame, ScrollDirection};
use crate::io::dump::{dump_content, dump_intermediates};
use crate::io::image_io::{load_frames, save_rgb};
use crate::matching::{match_consecutive, resolve_direction};
use crate::stitch::{attach_borders, join_sequence};

use super::config::StitchConfig;
use super::helpers::{check_match_threshold, validate_shapes};
use super::types::{
    NoOpReporter, PipelineStage, ProgressReporter, StitchOutput, StitchPlan, StitchReport,
};

/// Detect the content region, drop duplicate frames and put the remaining
/// crops in top-to-bottom order.
pub fn plan_stitch<'a>(
    frames: &'a [Frame],
    config: &StitchConfig,
    reporter: &dyn ProgressReporter,
) -> Result<StitchPlan<'a>> {
    config.validate()?;
    validate_shapes(frames)?;
    let (first, last) = match (frames.first(), frames.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(StitchError::EmptySequence),
    };
    info!(
        frames = frames.len(),
        width = first.width(),
        height = first.height(),
        "Planning stitch"
    );

    reporter.begin_stage(PipelineStage::DetectingBoundary, None);
    let boundary = detect_boundary(last.view(), first.view(), config.denoising_factor)?
        .validated(first.width(), first.height())?;
    info!(
        left = boundary.left,
        right = boundary.right,
        top = boundary.top,
        bottom = boundary.bottom,
        "Content boundary"
    );
    let crops = crop_frames(frames, &boundary)?;
    config.window.validate_for_width(boundary.width())?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Trimming, Some(crops.len()));
    let kept = trim_duplicate_crops(&crops);
    if kept.len() < 2 {
        return Err(StitchError::InsufficientFrames { found: kept.len() });
    }
    info!(
        removed = crops.len() - kept.len(),
        remaining = kept.len(),
        "Removed identical crops"
    );
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::ResolvingDirection, None);
    let mut ordered = crops[kept.clone()].to_vec();
    let direction = resolve_direction(&config.window, &ordered)?;
    let border_source = match direction {
        ScrollDirection::Down => 0,
        ScrollDirection::Up => {
            ordered.reverse();
            frames.len() - 1
        }
    };
    info!(%direction, "Resolved scroll direction");
    reporter.finish_stage();

    Ok(StitchPlan {
        boundary,
        kept,
        direction,
        crops: ordered,
        border_source,
    })
}

/// Align, join and frame the crops of a plan.
pub fn execute_plan(
    frames: &[Frame],
    plan: &StitchPlan<'_>,
    config: &StitchConfig,
    reporter: &dyn ProgressReporter,
) -> Result<StitchOutput> {
    let pairs = plan.crops.len().saturating_sub(1);
    reporter.begin_stage(PipelineStage::Matching, Some(pairs));
    let matches = match_consecutive(&config.window, &plan.crops)?;
    reporter.advance(pairs);
    check_match_threshold(&matches, config.match_score_threshold)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Joining, Some(plan.crops.len()));
    let offsets: Vec<usize> = matches.iter().map(|m| m.offset).collect();
    let content = join_sequence(&plan.crops, &offsets)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Bordering, None);
    let source = frames.get(plan.border_source).ok_or(StitchError::EmptySequence)?;
    let strips = extract_border_strips(source.view(), &plan.boundary)?;
    let strips = extend_border_strips(strips, content.dim().0)?;
    let image = attach_borders(content.view(), &strips)?;
    reporter.finish_stage();

    let (height, width, _) = image.dim();
    info!(height, width, "Stitched image");

    let report = StitchReport {
        boundary: plan.boundary,
        frames_total: frames.len(),
        kept: plan.kept.clone(),
        direction: plan.direction,
        matches,
        content_height: content.dim().0,
        output_dim: (height, width),
    };
    Ok(StitchOutput { image, report })
}

/// Stitch in-memory frames into one image.
pub fn stitch_frames(
    frames: &[Frame],
    config: &StitchConfig,
    reporter: &dyn ProgressReporter,
) -> Result<StitchOutput> {
    let plan = plan_stitch(frames, config, reporter)?;
    execute_plan(frames, &plan, config, reporter)
}

/// Run the full pipeline: read `config.input`, stitch, write `config.output`.
pub fn run_pipeline_reported(
    config: &StitchConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<StitchReport> {
    reporter.begin_stage(PipelineStage::Reading, None);
    let frames = load_frames(&config.input)?;
    info!(total_frames = frames.len(), input = %config.input.display(), "Read frames");
    reporter.finish_stage();

    let plan = plan_stitch(&frames, config, reporter.as_ref())?;

    if let Some(dir) = &config.dump_dir {
        reporter.begin_stage(PipelineStage::Dumping, None);
        dump_intermediates(dir, &frames, &plan, config)?;
        reporter.finish_stage();
    }

    let output = execute_plan(&frames, &plan, config, reporter.as_ref())?;

    if let Some(dir) = &config.dump_dir {
        dump_content(dir, output.content())?;
    }

    reporter.begin_stage(PipelineStage::Writing, None);
    save_rgb(output.image.view(), &config.output)?;
    info!(output = %config.output.display(), "Wrote stitched image");
    reporter.finish_stage();

    Ok(output.report)
}

/// Run the full pipeline without progress reporting.
pub fn run_pipeline(config: &StitchConfig) -> Result<StitchReport> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}
