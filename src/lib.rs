#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod diagram;
pub mod export;
pub mod flow;
pub mod notebook;
pub mod render;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
