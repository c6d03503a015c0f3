//! Storefront CLI entrypoint.
//!
//! Loads layered configuration, installs logging, and dispatches to the
//! handler for the selected operation mode.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use storefront::logging::{self, DEFAULT_DIRECTIVE, TUI_DIRECTIVE};
use storefront::{FetchError, OperationMode, StorefrontConfig};

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

async fn run() -> Result<(), FetchError> {
    let config = load_config()?;
    config.validate()?;

    let mode = config.operation_mode();
    let directive = if mode == OperationMode::Tui {
        TUI_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };
    logging::init(directive).map_err(|error| FetchError::Configuration {
        message: error.to_string(),
    })?;
    tracing::debug!(?mode, "starting storefront");

    let provider = cli::build_provider(&config)?;
    let telemetry = cli::build_telemetry(&config);

    match mode {
        OperationMode::Catalog => cli::catalog::run(provider.as_ref(), telemetry.as_ref()).await,
        OperationMode::ReviewFeed => {
            cli::review_feed::run(&config, provider.as_ref(), telemetry.as_ref()).await
        }
        OperationMode::SalesReport => {
            cli::sales_report::run(&config, provider.as_ref(), telemetry.as_ref()).await
        }
        OperationMode::Tui => cli::storefront_tui::run(&config, provider, telemetry).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<StorefrontConfig, FetchError> {
    StorefrontConfig::load().map_err(|error| FetchError::Configuration {
        message: error.to_string(),
    })
}
