pub mod boundary;
pub mod consts;
pub mod error;
pub mod frame;
pub mod io;
pub mod matching;
pub mod pipeline;
pub mod stitch;
