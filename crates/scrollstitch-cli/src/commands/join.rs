use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use scrollstitch_core::consts::{
    DEFAULT_COLS_IN_CROP, DEFAULT_DENOISING_FACTOR, DEFAULT_LEFT_CROP,
    DEFAULT_MATCH_SCORE_THRESHOLD, DEFAULT_RIGHT_CROP, DEFAULT_ROWS_IN_CROP,
};
use scrollstitch_core::matching::WindowConfig;
use scrollstitch_core::pipeline::config::StitchConfig;
use scrollstitch_core::pipeline::run_pipeline_reported;
use tracing::{debug, info};

use crate::progress::SpinnerReporter;
use crate::summary::{print_report, print_stitch_summary};

#[derive(Args)]
pub struct JoinArgs {
    /// Folder of screenshots, joined in file-name order
    pub input_folder: PathBuf,

    /// Output image path (format follows the extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stitch config file (TOML); matching flags below are ignored when given
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Rows in each alignment window
    #[arg(long, default_value_t = DEFAULT_ROWS_IN_CROP)]
    pub n_rows_in_crop: usize,

    /// Width of each side band used for matching
    #[arg(long, default_value_t = DEFAULT_COLS_IN_CROP)]
    pub n_cols_in_crop: usize,

    /// Line activation fraction at or below which boundary noise is dropped (0 disables)
    #[arg(long, default_value_t = DEFAULT_DENOISING_FACTOR)]
    pub denoising_factor: f64,

    /// Start of the column range cut out of the left band
    #[arg(long, default_value_t = DEFAULT_LEFT_CROP.0)]
    pub left_crop_from: usize,

    /// End of the column range cut out of the left band
    #[arg(long, default_value_t = DEFAULT_LEFT_CROP.1)]
    pub left_crop_to: usize,

    /// Start of the column range cut out of the right band
    #[arg(long, default_value_t = DEFAULT_RIGHT_CROP.0)]
    pub right_crop_from: usize,

    /// End of the column range cut out of the right band
    #[arg(long, default_value_t = DEFAULT_RIGHT_CROP.1)]
    pub right_crop_to: usize,

    /// Largest acceptable best match score before the run is declared failed
    #[arg(long, default_value_t = DEFAULT_MATCH_SCORE_THRESHOLD)]
    pub match_score_threshold: f64,

    /// Write the filter mask and every slice/reference crop to this folder
    #[arg(long)]
    pub dump_dir: Option<PathBuf>,
}

pub fn run(args: &JoinArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let mut config: StitchConfig =
            toml::from_str(&contents).context("Invalid stitch config")?;
        debug!(path = %config_path.display(), "Loaded stitch config");
        config.input = args.input_folder.clone();
        if let Some(ref output) = args.output {
            config.output = output.clone();
        }
        if args.dump_dir.is_some() {
            config.dump_dir = args.dump_dir.clone();
        }
        config
    } else {
        build_config_from_args(args)
    };

    print_stitch_summary(&config);

    let reporter = Arc::new(SpinnerReporter::new());
    let result = run_pipeline_reported(&config, reporter.clone());
    reporter.finish();

    let failed = format!("Failed to stitch {}", config.input.display());
    let report = result.context(failed)?;
    info!(
        height = report.output_dim.0,
        width = report.output_dim.1,
        output = %config.output.display(),
        "Stitch finished"
    );
    print_report(&report, &config);
    Ok(())
}

fn build_config_from_args(args: &JoinArgs) -> StitchConfig {
    StitchConfig {
        input: args.input_folder.clone(),
        output: args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from("out.jpg")),
        window: WindowConfig {
            n_rows_in_crop: args.n_rows_in_crop,
            n_cols_in_crop: args.n_cols_in_crop,
            left_crop_from: args.left_crop_from,
            left_crop_to: args.left_crop_to,
            right_crop_from: args.right_crop_from,
            right_crop_to: args.right_crop_to,
        },
        denoising_factor: args.denoising_factor,
        match_score_threshold: args.match_score_threshold,
        dump_dir: args.dump_dir.clone(),
    }
}
