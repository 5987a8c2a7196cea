//! Command line interface for fontshelf
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use crate::core::settings::BASE_URL_ENV;
use crate::ui::theme::ThemeVariant;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// fontshelf CLI arguments
///
/// Examples:
///   fontshelf                                   # Serve on 127.0.0.1:3000
///   fontshelf --bind 0.0.0.0:8080               # Listen elsewhere
///   fontshelf --base-url http://catalog:3000    # Read pages from another API host
///   fontshelf --data ./families.json            # Serve custom fixtures
///   fontshelf --direct                          # Pages read fixtures in-process
///   fontshelf --theme dark                      # Start pages in the dark theme
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "fontshelf",
    version,
    about = "A font foundry catalog served from Rust",
    long_about = "fontshelf serves a paginated catalog of font families and a preview page per family, together with the JSON API the pages read from."
)]
pub struct CliArgs {
    /// Address to listen on
    #[clap(
        long = "bind",
        short = 'b',
        help = "Address to listen on (default 127.0.0.1:3000)"
    )]
    pub bind: Option<SocketAddr>,

    /// Base URL of the catalog API the pages read from
    #[clap(
        long = "base-url",
        env = BASE_URL_ENV,
        help = "Base URL of the catalog API",
        long_help = "Base URL of the catalog API the pages read from. Defaults to this server's own address, derived from --bind."
    )]
    pub base_url: Option<String>,

    /// JSON fixture file with the family records to serve
    #[clap(
        long = "data",
        short = 'd',
        help = "Fixture JSON to serve instead of the embedded data"
    )]
    pub data: Option<PathBuf>,

    /// Theme the pages start in
    #[clap(
        long = "theme",
        short = 't',
        help = "Theme to use",
        long_help = "Theme the pages start in. Available themes: light, dark, system (default). Visitors can still switch themes in the browser."
    )]
    pub theme: Option<String>,

    /// Render pages from the fixtures directly, skipping the HTTP round trip
    #[clap(long = "direct", help = "Pages read fixtures in-process instead of over HTTP")]
    pub direct: bool,

    /// Also write logs to ~/.config/fontshelf/logs/
    #[clap(long = "log-file", help = "Also write logs to the config directory")]
    pub log_file: bool,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Initialize the ~/.config/fontshelf directory with a settings.json file holding the default theme, base URL and bind address."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that paths exist and values are usable before the server
    /// starts, providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.data {
            if !path.is_file() {
                return Err(format!(
                    "Fixture file does not exist: {}\nMake sure the path points to a JSON file.",
                    path.display()
                ));
            }
        }

        if let Some(base_url) = &self.base_url {
            match reqwest::Url::parse(base_url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                _ => {
                    return Err(format!(
                        "Invalid base URL: '{base_url}'\nExpected an http:// or https:// URL."
                    ));
                }
            }
        }

        if let Some(theme_name) = &self.theme {
            if ThemeVariant::parse(theme_name).is_none() {
                let available_themes = ThemeVariant::all_names().join(", ");
                return Err(format!(
                    "Unknown theme: '{theme_name}'\nAvailable themes: {available_themes}"
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let mut argv = vec!["fontshelf"];
        argv.extend_from_slice(args);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(parse(&[]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(parse(&["--theme", "strawberry"]).validate().is_err());
        assert!(parse(&["--base-url", "ftp://example.com"]).validate().is_err());
        assert!(parse(&["--data", "/definitely/not/here.json"]).validate().is_err());
    }

    #[test]
    fn test_bind_is_parsed_as_socket_address() {
        let args = parse(&["--bind", "0.0.0.0:8080"]);
        assert_eq!(args.bind.map(|a| a.port()), Some(8080));
        assert!(CliArgs::try_parse_from(["fontshelf", "--bind", "nowhere"]).is_err());
    }
}
