use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat, Luma, RgbImage};
use ndarray::{Array2, Array3, ArrayView3};
use tracing::{debug, warn};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{Result, StitchError};
use crate::frame::{Frame, FrameMetadata};

/// Load an image file as an 8-bit RGB frame.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let img = image::open(path)?.to_rgb8();
    let (w, h) = img.dimensions();
    let shape = (h as usize, w as usize, COLOR_CHANNEL_COUNT);
    let data = Array3::from_shape_vec(shape, img.into_raw())
        .map_err(|e| StitchError::ShapeMismatch(e.to_string()))?;

    Ok(Frame::with_metadata(
        data,
        FrameMetadata {
            frame_index: 0,
            source: Some(path.to_path_buf()),
        },
    ))
}

/// Image files directly inside `dir`, sorted by file name.
///
/// Files whose extension is not a known image format are skipped.
pub fn list_frame_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if ImageFormat::from_path(&path).is_err() {
            warn!(path = %path.display(), "Skipping file that is not an image");
            continue;
        }
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

/// Load every image in `dir` in file-name order.
pub fn load_frames(dir: &Path) -> Result<Vec<Frame>> {
    let paths = list_frame_paths(dir)?;
    if paths.is_empty() {
        return Err(StitchError::EmptySequence);
    }

    paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            debug!(index = i, path = %path.display(), "Loading frame");
            let mut frame = load_frame(path)?;
            frame.metadata.frame_index = i;
            Ok(frame)
        })
        .collect()
}

/// Convert an RGB array to an `image` buffer.
pub fn to_rgb_image(data: ArrayView3<'_, u8>) -> Result<RgbImage> {
    let (h, w, c) = data.dim();
    if c != COLOR_CHANNEL_COUNT {
        return Err(StitchError::ShapeMismatch(format!(
            "cannot encode a {c}-channel array as RGB"
        )));
    }

    let pixels: Vec<u8> = data.iter().copied().collect();
    RgbImage::from_raw(w as u32, h as u32, pixels).ok_or_else(|| {
        StitchError::ShapeMismatch(format!("buffer does not match {w}x{h} RGB image"))
    })
}

/// Save an RGB array, choosing the format from the file extension.
pub fn save_rgb(data: ArrayView3<'_, u8>, path: &Path) -> Result<()> {
    to_rgb_image(data)?.save(path)?;
    Ok(())
}

/// Save a boolean mask as a black/white 8-bit grayscale image.
pub fn save_mask(mask: &Array2<bool>, path: &Path) -> Result<()> {
    let (h, w) = mask.dim();
    let mut img = GrayImage::new(w as u32, h as u32);
    for ((row, col), &active) in mask.indexed_iter() {
        let val = if active { 255 } else { 0 };
        img.put_pixel(col as u32, row as u32, Luma([val]));
    }
    img.save(path)?;
    Ok(())
}
