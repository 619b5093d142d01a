use ndarray::{s, Array3, ArrayView3};

use crate::error::{Result, StitchError};
use crate::frame::Frame;

use super::bounds::ContentBoundary;

/// The static chrome around the content region of one frame.
#[derive(Clone, Debug)]
pub struct BorderStrips {
    /// Rows `top..bottom`, columns `..left`.
    pub left: Array3<u8>,
    /// Rows `top..bottom`, columns `right..`.
    pub right: Array3<u8>,
    /// Rows `..top`, all columns.
    pub top: Array3<u8>,
    /// Rows `bottom..`, all columns.
    pub bottom: Array3<u8>,
}

fn check_fits(frame: &ArrayView3<'_, u8>, boundary: &ContentBoundary) -> Result<()> {
    let (h, w, _) = frame.dim();
    if boundary.is_degenerate() || boundary.right > w || boundary.bottom > h {
        return Err(StitchError::ShapeMismatch(format!(
            "content boundary {boundary:?} does not fit a {w}x{h} frame"
        )));
    }
    Ok(())
}

/// View of the content region of a single frame.
pub fn crop_frame<'a>(
    frame: ArrayView3<'a, u8>,
    boundary: &ContentBoundary,
) -> Result<ArrayView3<'a, u8>> {
    check_fits(&frame, boundary)?;
    Ok(frame.slice_move(s![
        boundary.top..boundary.bottom,
        boundary.left..boundary.right,
        ..
    ]))
}

/// Views of the content region of every frame, in input order.
pub fn crop_frames<'a>(
    frames: &'a [Frame],
    boundary: &ContentBoundary,
) -> Result<Vec<ArrayView3<'a, u8>>> {
    frames
        .iter()
        .map(|frame| crop_frame(frame.view(), boundary))
        .collect()
}

/// Copy the four chrome regions of `frame` that lie outside `boundary`.
pub fn extract_border_strips(
    frame: ArrayView3<'_, u8>,
    boundary: &ContentBoundary,
) -> Result<BorderStrips> {
    check_fits(&frame, boundary)?;
    let ContentBoundary {
        left,
        right,
        top,
        bottom,
    } = *boundary;

    Ok(BorderStrips {
        left: frame.slice(s![top..bottom, ..left, ..]).to_owned(),
        right: frame.slice(s![top..bottom, right.., ..]).to_owned(),
        top: frame.slice(s![..top, .., ..]).to_owned(),
        bottom: frame.slice(s![bottom.., .., ..]).to_owned(),
    })
}

/// Stretch the left and right strips to `new_height` rows by repeating their
/// last row. Top and bottom strips are returned unchanged.
pub fn extend_border_strips(strips: BorderStrips, new_height: usize) -> Result<BorderStrips> {
    Ok(BorderStrips {
        left: extend_vertically(strips.left, new_height)?,
        right: extend_vertically(strips.right, new_height)?,
        top: strips.top,
        bottom: strips.bottom,
    })
}

fn extend_vertically(strip: Array3<u8>, new_height: usize) -> Result<Array3<u8>> {
    let (h, w, c) = strip.dim();
    if h >= new_height {
        return Ok(strip);
    }
    if w == 0 || c == 0 {
        return Ok(Array3::zeros((new_height, w, c)));
    }
    if h == 0 {
        return Err(StitchError::ShapeMismatch(format!(
            "cannot extend an empty {w}-column border strip to {new_height} rows"
        )));
    }

    let mut extended = Array3::<u8>::zeros((new_height, w, c));
    extended.slice_mut(s![..h, .., ..]).assign(&strip);
    extended
        .slice_mut(s![h.., .., ..])
        .assign(&strip.slice(s![h - 1.., .., ..]));
    Ok(extended)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(h: usize, w: usize) -> Array3<u8> {
        Array3::from_shape_fn((h, w, 3), |(r, c, ch)| (r * 16 + c * 3 + ch) as u8)
    }

    #[test]
    fn test_crop_frame_extent() {
        let data = numbered(6, 8);
        let b = ContentBoundary {
            left: 2,
            right: 7,
            top: 1,
            bottom: 4,
        };
        let crop = crop_frame(data.view(), &b).unwrap();
        assert_eq!(crop.dim(), (3, 5, 3));
        assert_eq!(crop[[0, 0, 0]], data[[1, 2, 0]]);
        assert_eq!(crop[[2, 4, 2]], data[[3, 6, 2]]);
    }

    #[test]
    fn test_crop_frame_rejects_oversized_boundary() {
        let data = numbered(4, 4);
        let b = ContentBoundary {
            left: 0,
            right: 5,
            top: 0,
            bottom: 4,
        };
        assert!(crop_frame(data.view(), &b).is_err());
    }

    #[test]
    fn test_extract_border_strips_shapes() {
        let data = numbered(10, 8);
        let b = ContentBoundary {
            left: 1,
            right: 6,
            top: 2,
            bottom: 9,
        };
        let strips = extract_border_strips(data.view(), &b).unwrap();
        assert_eq!(strips.left.dim(), (7, 1, 3));
        assert_eq!(strips.right.dim(), (7, 2, 3));
        assert_eq!(strips.top.dim(), (2, 8, 3));
        assert_eq!(strips.bottom.dim(), (1, 8, 3));
        assert_eq!(strips.right[[0, 0, 0]], data[[2, 6, 0]]);
        assert_eq!(strips.bottom[[0, 7, 1]], data[[9, 7, 1]]);
    }

    #[test]
    fn test_extend_repeats_last_row() {
        let data = numbered(5, 6);
        let b = ContentBoundary {
            left: 2,
            right: 4,
            top: 1,
            bottom: 4,
        };
        let strips = extract_border_strips(data.view(), &b).unwrap();
        let top_before = strips.top.clone();
        let extended = extend_border_strips(strips, 7).unwrap();

        assert_eq!(extended.left.dim(), (7, 2, 3));
        assert_eq!(extended.right.dim(), (7, 2, 3));
        for row in 3..7 {
            assert_eq!(
                extended.left.slice(s![row, .., ..]),
                data.slice(s![3, ..2, ..])
            );
            assert_eq!(
                extended.right.slice(s![row, .., ..]),
                data.slice(s![3, 4.., ..])
            );
        }
        assert_eq!(extended.top, top_before);
    }

    #[test]
    fn test_extend_zero_width_strip() {
        let strips = BorderStrips {
            left: Array3::zeros((3, 0, 3)),
            right: Array3::zeros((3, 0, 3)),
            top: Array3::zeros((0, 4, 3)),
            bottom: Array3::zeros((0, 4, 3)),
        };
        let extended = extend_border_strips(strips, 9).unwrap();
        assert_eq!(extended.left.dim(), (9, 0, 3));
        assert_eq!(extended.right.dim(), (9, 0, 3));
    }
}
