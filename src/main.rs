//! Marquee CLI entrypoint for the movie browser.

use std::io::{self, Write};
use std::process::ExitCode;

use marquee::{CatalogueError, MarqueeConfig};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CatalogueError> {
    let config = load_config()?;
    config.validate()?;

    if marquee::logging::init_logging(config.log_file.as_deref())? {
        tracing::debug!(?config, "logging initialised");
    }

    cli::movie_tui::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CatalogueError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<MarqueeConfig, CatalogueError> {
    MarqueeConfig::load().map_err(|error| CatalogueError::Configuration {
        message: error.to_string(),
    })
}
