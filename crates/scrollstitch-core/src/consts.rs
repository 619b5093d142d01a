/// Minimum number of candidate offsets before a score scan switches to Rayon.
pub const PARALLEL_OFFSET_THRESHOLD: usize = 64;

/// Minimum number of frame pairs before pairwise matching switches to Rayon.
pub const PARALLEL_PAIR_THRESHOLD: usize = 4;

/// Per-channel absolute difference at or above which a pixel counts as changed.
pub const PIXEL_DIFF_THRESHOLD: u8 = 10;

/// First-active index assigned to a mask line with no active pixel.
pub const EMPTY_LINE_SENTINEL: usize = usize::MAX;

/// Fraction of equal sample values above which two crops are treated as duplicates.
pub const DUPLICATE_SIMILARITY: f64 = 0.90;

/// Luma weight for the red channel used by similarity matching.
pub const LUMA_R: f64 = 0.2989;

/// Luma weight for the green channel used by similarity matching.
pub const LUMA_G: f64 = 0.5870;

/// Luma weight for the blue channel used by similarity matching.
pub const LUMA_B: f64 = 0.1140;

/// Number of channels in a frame (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Default number of rows in each alignment window.
pub const DEFAULT_ROWS_IN_CROP: usize = 25;

/// Default width of each side band used for matching.
pub const DEFAULT_COLS_IN_CROP: usize = 200;

/// Default column range cut out of the left band (start, end).
pub const DEFAULT_LEFT_CROP: (usize, usize) = (20, 180);

/// Default column range cut out of the right band (start, end).
pub const DEFAULT_RIGHT_CROP: (usize, usize) = (20, 200);

/// Default row/column activation fraction at or below which a mask line is cleared.
pub const DEFAULT_DENOISING_FACTOR: f64 = 0.10;

/// Default largest acceptable best match score for a pair.
pub const DEFAULT_MATCH_SCORE_THRESHOLD: f64 = 0.10;
