pub mod config;
pub mod join;
