pub mod cli;
pub mod config;
pub mod demo;
pub mod pretty;

pub use cli::load_snapshot;
