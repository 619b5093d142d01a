pub mod config;
mod helpers;
mod orchestrator;
mod types;

pub use orchestrator::{
    execute_plan, plan_stitch, run_pipeline, run_pipeline_reported, stitch_frames,
};
pub use types::{
    NoOpReporter, PipelineStage, ProgressReporter, StitchOutput, StitchPlan, StitchReport,
};
