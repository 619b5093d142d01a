use std::path::PathBuf;

use scrollstitch_core::consts::{DEFAULT_DENOISING_FACTOR, DEFAULT_MATCH_SCORE_THRESHOLD};
use scrollstitch_core::error::StitchError;
use scrollstitch_core::frame::ScrollDirection;
use scrollstitch_core::matching::WindowConfig;
use scrollstitch_core::pipeline::config::StitchConfig;
use scrollstitch_core::pipeline::PipelineStage;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_window() {
    let w = WindowConfig::default();
    assert_eq!(w.n_rows_in_crop, 25);
    assert_eq!(w.n_cols_in_crop, 200);
    assert_eq!((w.left_crop_from, w.left_crop_to), (20, 180));
    assert_eq!((w.right_crop_from, w.right_crop_to), (20, 200));
}

#[test]
fn test_default_stitch_config() {
    let c = StitchConfig::default();
    assert_eq!(c.denoising_factor, 0.10);
    assert_eq!(c.match_score_threshold, 0.10);
    assert_eq!(c.output, PathBuf::from("out.jpg"));
    assert!(c.dump_dir.is_none());
    assert!(c.validate().is_ok());
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_toml_roundtrip() {
    let config = StitchConfig {
        input: PathBuf::from("shots"),
        output: PathBuf::from("long.png"),
        dump_dir: Some(PathBuf::from("debug")),
        denoising_factor: 0.25,
        ..StitchConfig::default()
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: StitchConfig = toml::from_str(&text).unwrap();

    assert_eq!(parsed.input, config.input);
    assert_eq!(parsed.output, config.output);
    assert_eq!(parsed.dump_dir, config.dump_dir);
    assert_eq!(parsed.denoising_factor, 0.25);
    assert_eq!(parsed.window, config.window);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let text = r#"
input = "shots"
output = "long.png"

[window]
n_rows_in_crop = 40
"#;
    let parsed: StitchConfig = toml::from_str(text).unwrap();
    assert_eq!(parsed.window.n_rows_in_crop, 40);
    assert_eq!(parsed.window.n_cols_in_crop, 200);
    assert_eq!(parsed.denoising_factor, DEFAULT_DENOISING_FACTOR);
    assert_eq!(parsed.match_score_threshold, DEFAULT_MATCH_SCORE_THRESHOLD);
    assert!(parsed.dump_dir.is_none());
}

#[test]
fn test_toml_without_paths_uses_default_paths() {
    let parsed: StitchConfig = toml::from_str("denoising_factor = 0.2").unwrap();
    assert_eq!(parsed.input, PathBuf::from("screenshots"));
    assert_eq!(parsed.output, PathBuf::from("out.jpg"));
    assert_eq!(parsed.denoising_factor, 0.2);
    assert_eq!(parsed.window, WindowConfig::default());
}

#[test]
fn test_empty_toml_matches_default_config() {
    let parsed: StitchConfig = toml::from_str("").unwrap();
    let default = StitchConfig::default();
    assert_eq!(parsed.input, default.input);
    assert_eq!(parsed.output, default.output);
    assert_eq!(parsed.match_score_threshold, default.match_score_threshold);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_validate_denoising_range() {
    for bad in [-0.1, 1.0, 1.5, f64::NAN] {
        let c = StitchConfig {
            denoising_factor: bad,
            ..StitchConfig::default()
        };
        assert!(
            matches!(c.validate(), Err(StitchError::InvalidConfig(_))),
            "accepted denoising_factor {bad}"
        );
    }
    let zero = StitchConfig {
        denoising_factor: 0.0,
        ..StitchConfig::default()
    };
    assert!(zero.validate().is_ok());
}

#[test]
fn test_validate_threshold() {
    let c = StitchConfig {
        match_score_threshold: -0.5,
        ..StitchConfig::default()
    };
    assert!(matches!(c.validate(), Err(StitchError::InvalidConfig(_))));
}

#[test]
fn test_validate_window() {
    let c = StitchConfig {
        window: WindowConfig {
            left_crop_from: 50,
            left_crop_to: 10,
            ..WindowConfig::default()
        },
        ..StitchConfig::default()
    };
    assert!(matches!(c.validate(), Err(StitchError::InvalidConfig(_))));
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_scroll_direction_display() {
    assert_eq!(format!("{}", ScrollDirection::Up), "up");
    assert_eq!(format!("{}", ScrollDirection::Down), "down");
}

#[test]
fn test_pipeline_stage_display() {
    assert_eq!(format!("{}", PipelineStage::Matching), "Matching frames");
    assert_eq!(format!("{}", PipelineStage::Writing), "Writing output");
}
