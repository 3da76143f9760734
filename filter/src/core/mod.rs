//! Application core: CLI, configuration and constants

mod app;
pub mod cli;
pub mod config;
pub mod constants;

pub use app::CoreApp;
pub use config::FilterConfig;
