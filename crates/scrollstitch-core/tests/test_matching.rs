#[allow(dead_code)]
mod common;

use approx::assert_abs_diff_eq;
use ndarray::s;

use scrollstitch_core::error::StitchError;
use scrollstitch_core::frame::ScrollDirection;
use scrollstitch_core::matching::{
    best_match, match_consecutive, match_scores, reference_strip, resolve_direction, top_slice,
};

use common::{page, small_window};

#[test]
fn test_self_match_is_unique_minimum() {
    let page = page(120, 48);
    let window = small_window();
    let reference = reference_strip(page.view(), &window);
    let slice = reference.slice(s![37..43, .., ..]);

    let scores = match_scores(slice, reference.view()).unwrap();
    assert_eq!(scores.len(), 120 - 6 + 1);
    assert_abs_diff_eq!(scores[37], 0.0, epsilon = 1e-12);

    let best = best_match(&scores).unwrap();
    assert_eq!(best.offset, 37);
    for (i, &score) in scores.iter().enumerate() {
        if i != 37 {
            assert!(score > 0.1, "offset {i} scored {score}");
        }
    }
}

#[test]
fn test_parallel_and_serial_scans_agree() {
    // 200 offsets takes the parallel path; each score must equal a scan of
    // the single window at that offset.
    let page = page(205, 48);
    let window = small_window();
    let reference = reference_strip(page.view(), &window);
    let slice = top_slice(page.slice(s![50.., .., ..]), &window);

    let scores = match_scores(slice.view(), reference.view()).unwrap();
    assert_eq!(scores.len(), 200);
    for offset in [0usize, 49, 50, 133, 199] {
        let rows = reference.slice(s![offset..offset + 6, .., ..]);
        let single = match_scores(slice.view(), rows).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0], scores[offset]);
    }
    assert_eq!(best_match(&scores).unwrap().offset, 50);
}

#[test]
fn test_slice_taller_than_search_space() {
    let page = page(10, 48);
    let window = small_window();
    let reference = reference_strip(page.slice(s![..4, .., ..]), &window);
    let slice = top_slice(page.view(), &window);
    match match_scores(slice.view(), reference.view()) {
        Err(StitchError::WindowTooTall { window, available }) => {
            assert_eq!((window, available), (6, 4));
        }
        other => panic!("expected window too tall, got {other:?}"),
    }
}

#[test]
fn test_resolve_direction_both_ways() {
    let page = page(200, 48);
    let window = small_window();
    let upper = page.slice(s![0..60, .., ..]);
    let lower = page.slice(s![40..100, .., ..]);

    assert_eq!(
        resolve_direction(&window, &[upper, lower]).unwrap(),
        ScrollDirection::Down
    );
    assert_eq!(
        resolve_direction(&window, &[lower, upper]).unwrap(),
        ScrollDirection::Up
    );
}

#[test]
fn test_match_consecutive_offsets() {
    let page = page(300, 48);
    let window = small_window();
    let starts = [0usize, 35, 80, 120, 170, 220];
    let crops: Vec<_> = starts
        .iter()
        .map(|&st| page.slice(s![st..st + 60, .., ..]))
        .collect();

    let matches = match_consecutive(&window, &crops).unwrap();
    let offsets: Vec<usize> = matches.iter().map(|m| m.offset).collect();
    assert_eq!(offsets, vec![35, 45, 40, 50, 50]);
    for m in &matches {
        assert_abs_diff_eq!(m.score, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_match_consecutive_needs_two_crops() {
    let page = page(60, 48);
    assert!(matches!(
        match_consecutive(&small_window(), &[page.view()]),
        Err(StitchError::InsufficientFrames { found: 1 })
    ));
}

#[test]
fn test_identical_crops_resolve_up() {
    let page = page(60, 48);
    let crops = [page.view(), page.view()];
    assert_eq!(
        resolve_direction(&small_window(), &crops).unwrap(),
        ScrollDirection::Up
    );
}

#[test]
fn test_resolve_direction_needs_two_crops() {
    let page = page(60, 48);
    assert!(matches!(
        resolve_direction(&small_window(), &[page.view()]),
        Err(StitchError::InsufficientFrames { found: 1 })
    ));
}
