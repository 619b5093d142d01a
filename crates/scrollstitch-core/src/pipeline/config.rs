use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DENOISING_FACTOR, DEFAULT_MATCH_SCORE_THRESHOLD};
use crate::error::{Result, StitchError};
use crate::matching::WindowConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StitchConfig {
    /// Directory holding the screenshots, stitched in file-name order.
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub window: WindowConfig,
    /// Row/column activation fraction at or below which a mask line is
    /// ignored when detecting the content boundary (0.0 disables).
    #[serde(default = "default_denoising_factor")]
    pub denoising_factor: f64,
    /// Largest best match score accepted for a pair before the run fails.
    #[serde(default = "default_match_score_threshold")]
    pub match_score_threshold: f64,
    /// Write intermediate masks and crops here.
    #[serde(default)]
    pub dump_dir: Option<PathBuf>,
}

fn default_input() -> PathBuf {
    PathBuf::from("screenshots")
}
fn default_output() -> PathBuf {
    PathBuf::from("out.jpg")
}
fn default_denoising_factor() -> f64 {
    DEFAULT_DENOISING_FACTOR
}
fn default_match_score_threshold() -> f64 {
    DEFAULT_MATCH_SCORE_THRESHOLD
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            window: WindowConfig::default(),
            denoising_factor: DEFAULT_DENOISING_FACTOR,
            match_score_threshold: DEFAULT_MATCH_SCORE_THRESHOLD,
            dump_dir: None,
        }
    }
}

impl StitchConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.denoising_factor) {
            return Err(StitchError::InvalidConfig(format!(
                "denoising_factor must be in [0, 1), got {}",
                self.denoising_factor
            )));
        }
        if !self.match_score_threshold.is_finite() || self.match_score_threshold < 0.0 {
            return Err(StitchError::InvalidConfig(format!(
                "match_score_threshold must be a non-negative number, got {}",
                self.match_score_threshold
            )));
        }
        self.window.validate()
    }
}
