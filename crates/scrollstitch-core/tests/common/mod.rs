use std::path::Path;

use ndarray::Array3;

use scrollstitch_core::frame::Frame;
use scrollstitch_core::io::image_io::save_rgb;
use scrollstitch_core::matching::WindowConfig;

/// Chrome rows above the content.
pub const TOP: usize = 6;
/// Chrome rows below the content.
pub const BOTTOM: usize = 4;
/// Chrome columns left of the content.
pub const LEFT: usize = 5;
/// Chrome columns right of the content.
pub const RIGHT: usize = 7;

fn mix(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Two-level pseudo-random texture: every pixel is dark or bright, with a
/// small per-channel tint so channels are not identical.
pub fn texture(row: usize, col: usize, ch: usize) -> u8 {
    let bright = mix((row as u64) << 32 | col as u64) & 1 == 1;
    let base: u8 = if bright { 230 } else { 20 };
    base + (ch as u8) * 5
}

/// A tall page of scrolling content, `rows` x `cols`.
pub fn page(rows: usize, cols: usize) -> Array3<u8> {
    Array3::from_shape_fn((rows, cols, 3), |(r, c, ch)| texture(r, c, ch))
}

/// Static window chrome. Side bars depend only on the column so they look
/// the same at any window height.
fn chrome(row: usize, col: usize, ch: usize, content_h: usize) -> u8 {
    if row < TOP {
        (100 + row * 7 + col * 3 + ch) as u8
    } else if row >= TOP + content_h {
        (60 + (row - TOP - content_h) * 11 + col + ch) as u8
    } else {
        (150 + col * 2 + ch) as u8
    }
}

/// One screenshot: chrome around page rows `start..start + content_h`.
pub fn screen(page: &Array3<u8>, start: usize, content_h: usize) -> Array3<u8> {
    let content_w = page.dim().1;
    let h = TOP + content_h + BOTTOM;
    let w = LEFT + content_w + RIGHT;
    Array3::from_shape_fn((h, w, 3), |(r, c, ch)| {
        let in_rows = (TOP..TOP + content_h).contains(&r);
        let in_cols = (LEFT..LEFT + content_w).contains(&c);
        if in_rows && in_cols {
            page[[start + r - TOP, c - LEFT, ch]]
        } else {
            chrome(r, c, ch, content_h)
        }
    })
}

/// Screenshots starting at each page row in `starts`.
pub fn screens(page: &Array3<u8>, starts: &[usize], content_h: usize) -> Vec<Frame> {
    starts
        .iter()
        .map(|&s| Frame::new(screen(page, s, content_h)))
        .collect()
}

/// Window geometry sized for the small synthetic screens (48 columns wide).
pub fn small_window() -> WindowConfig {
    WindowConfig {
        n_rows_in_crop: 6,
        n_cols_in_crop: 16,
        left_crop_from: 4,
        left_crop_to: 10,
        right_crop_from: 6,
        right_crop_to: 12,
    }
}

/// Write frames as `frame_00.png`, `frame_01.png`, ... into `dir`.
pub fn write_frames(dir: &Path, frames: &[Frame]) {
    for (i, frame) in frames.iter().enumerate() {
        save_rgb(frame.view(), &dir.join(format!("frame_{i:02}.png"))).expect("write frame");
    }
}
