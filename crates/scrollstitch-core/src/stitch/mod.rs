mod borders;
mod join;

pub use borders::attach_borders;
pub use join::{join_pair, join_sequence};
