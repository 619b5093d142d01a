use ndarray::{s, Array3, ArrayView3};

use crate::boundary::BorderStrips;
use crate::error::{Result, StitchError};

/// Frame `content` with border chrome: `top` and `bottom` span the full
/// width, `left` and `right` run alongside the content rows.
///
/// The side strips must already be as tall as `content`; see
/// [`extend_border_strips`](crate::boundary::extend_border_strips).
pub fn attach_borders(content: ArrayView3<'_, u8>, strips: &BorderStrips) -> Result<Array3<u8>> {
    let (content_h, content_w, channels) = content.dim();
    let (left_h, left_w, _) = strips.left.dim();
    let (right_h, right_w, _) = strips.right.dim();
    let (top_h, top_w, _) = strips.top.dim();
    let (bottom_h, bottom_w, _) = strips.bottom.dim();

    if left_h != content_h || right_h != content_h {
        return Err(StitchError::ShapeMismatch(format!(
            "side strips have {left_h} and {right_h} rows, content has {content_h}"
        )));
    }

    let width = left_w + content_w + right_w;
    if top_w != width || bottom_w != width {
        return Err(StitchError::ShapeMismatch(format!(
            "top/bottom strips are {top_w} and {bottom_w} columns wide, expected {width}"
        )));
    }

    let strip_channels = [
        strips.left.dim().2,
        strips.right.dim().2,
        strips.top.dim().2,
        strips.bottom.dim().2,
    ];
    if strip_channels.iter().any(|&c| c != channels) {
        return Err(StitchError::ShapeMismatch(format!(
            "border strips have {strip_channels:?} channels, content has {channels}"
        )));
    }

    let height = top_h + content_h + bottom_h;
    let content_end = top_h + content_h;
    let mut canvas = Array3::<u8>::zeros((height, width, channels));

    canvas
        .slice_mut(s![top_h..content_end, left_w..left_w + content_w, ..])
        .assign(&content);
    canvas
        .slice_mut(s![top_h..content_end, ..left_w, ..])
        .assign(&strips.left);
    canvas
        .slice_mut(s![top_h..content_end, left_w + content_w.., ..])
        .assign(&strips.right);
    canvas.slice_mut(s![..top_h, .., ..]).assign(&strips.top);
    canvas
        .slice_mut(s![content_end.., .., ..])
        .assign(&strips.bottom);

    Ok(canvas)
}
