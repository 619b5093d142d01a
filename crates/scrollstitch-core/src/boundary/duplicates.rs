use std::ops::Range;

use ndarray::{ArrayView3, Zip};
use tracing::debug;

use crate::consts::DUPLICATE_SIMILARITY;

/// Fraction of sample values (over every pixel and channel) that are equal in
/// both crops. Crops of different shape have similarity 0.
pub fn crop_similarity(a: &ArrayView3<'_, u8>, b: &ArrayView3<'_, u8>) -> f64 {
    if a.dim() != b.dim() || a.is_empty() {
        return 0.0;
    }

    let mut equal = 0usize;
    Zip::from(a).and(b).for_each(|x, y| {
        if x == y {
            equal += 1;
        }
    });
    equal as f64 / a.len() as f64
}

fn is_duplicate(a: &ArrayView3<'_, u8>, b: &ArrayView3<'_, u8>) -> bool {
    crop_similarity(a, b) >= DUPLICATE_SIMILARITY
}

/// Range of `crops` left after dropping near-identical crops from both ends.
///
/// A leading crop is dropped while it matches its successor; a trailing crop
/// is dropped while it matches its predecessor. At least one crop always
/// remains when the input is non-empty.
pub fn trim_duplicate_crops(crops: &[ArrayView3<'_, u8>]) -> Range<usize> {
    let mut start = 0;
    let mut end = crops.len();

    while end - start >= 2 && is_duplicate(&crops[start], &crops[start + 1]) {
        start += 1;
    }
    while end - start >= 2 && is_duplicate(&crops[end - 1], &crops[end - 2]) {
        end -= 1;
    }

    debug!(
        leading = start,
        trailing = crops.len() - end,
        "Trimmed duplicate crops"
    );
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn solid(value: u8) -> Array3<u8> {
        Array3::from_elem((4, 5, 3), value)
    }

    #[test]
    fn test_similarity_counts_channels() {
        let a = solid(0);
        let mut b = solid(0);
        // One of 60 samples differs.
        b[[0, 0, 1]] = 7;
        let sim = crop_similarity(&a.view(), &b.view());
        assert!((sim - 59.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_trim_both_ends() {
        let frames = [solid(1), solid(1), solid(50), solid(90), solid(90), solid(90)];
        let views: Vec<_> = frames.iter().map(|f| f.view()).collect();
        assert_eq!(trim_duplicate_crops(&views), 1..4);
    }

    #[test]
    fn test_trim_all_identical_keeps_one() {
        let frames = [solid(3), solid(3), solid(3)];
        let views: Vec<_> = frames.iter().map(|f| f.view()).collect();
        let kept = trim_duplicate_crops(&views);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_trim_leaves_distinct_frames() {
        let frames = [solid(1), solid(2), solid(3)];
        let views: Vec<_> = frames.iter().map(|f| f.view()).collect();
        assert_eq!(trim_duplicate_crops(&views), 0..3);
    }

    #[test]
    fn test_trim_empty_input() {
        assert_eq!(trim_duplicate_crops(&[]), 0..0);
    }
}
