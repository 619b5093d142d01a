mod direction;
mod pairs;
pub mod score;
pub mod window;

pub use direction::resolve_direction;
pub use pairs::match_consecutive;
pub use score::{best_match, grayscale, match_scores};
pub use window::{reference_strip, top_slice, WindowConfig};
