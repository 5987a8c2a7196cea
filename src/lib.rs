//! fontshelf
pub mod core;
pub mod data;
pub mod logging;
pub mod provider;
pub mod rendering;
pub mod server;
pub mod ui;
