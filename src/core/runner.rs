//! Application runner logic
//!
//! Resolves settings, sets up logging and runs the server.

use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::core::settings::Settings;
use crate::data::FixtureCatalog;
use crate::logging;
use crate::provider::{FamilyProvider, FixtureProvider, HttpProvider};
use crate::server::{self, ServerState};
use crate::ui::theme::ThemeContext;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Run the application with the given CLI arguments.
/// Handles special CLI flags and delegates to the server.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory(&ConfigFile::config_dir());
    }

    let config = ConfigFile::load();
    let settings = Settings::resolve(&cli_args, config.as_ref())?;

    let logs_dir = settings.log_to_file.then(ConfigFile::logs_dir);
    let _log_guard = logging::init_logging(logs_dir.as_deref())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;
    runtime.block_on(serve(settings))
}

/// Load the fixtures and serve until shutdown
pub async fn serve(settings: Settings) -> Result<()> {
    let catalog = Arc::new(match &settings.data_path {
        Some(path) => FixtureCatalog::load_from_path(path)?,
        None => FixtureCatalog::embedded()?,
    });
    info!("Catalog holds {} families", catalog.len());

    let pages: Arc<dyn FamilyProvider> = if settings.direct {
        Arc::new(FixtureProvider::new(catalog.clone()))
    } else {
        info!("Pages read the API at {}", settings.base_url);
        Arc::new(HttpProvider::new(settings.base_url.clone()))
    };

    let state = ServerState::new(catalog, pages, ThemeContext::new(settings.theme));
    server::serve(settings.bind_address, state).await
}
