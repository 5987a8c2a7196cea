//! Core application functionality
//!
//! This module contains the application shell:
//! - CLI handling, the config file and resolved settings
//! - Error types shared by the data layer
//! - Request-scoped memoization
//! - Startup and error reporting

pub mod cli;
pub mod config_file;
pub mod errors;
pub mod platform;
pub mod request_scope;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use errors::CatalogError;
pub use request_scope::RequestScope;
pub use runner::run_app;
pub use settings::Settings;
