pub mod dump;
pub mod image_io;
