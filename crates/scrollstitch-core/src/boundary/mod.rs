mod bounds;
pub mod duplicates;
mod mask;
mod strips;

pub use bounds::{detect_boundary, find_boundary, ContentBoundary};
pub use duplicates::{crop_similarity, trim_duplicate_crops};
pub use mask::{denoise_mask, filter_mask};
pub use strips::{
    crop_frame, crop_frames, extend_border_strips, extract_border_strips, BorderStrips,
};
