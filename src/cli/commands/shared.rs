//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading and catalog loading used by
//! every subcommand.

use crate::app::services::catalog::Catalog;
use crate::cli::args::CommonArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level derived from `-v`/`-q`.
pub fn setup_logging(args: &CommonArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("piping_datasheets={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init();
    } else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    info!("Loading configuration");

    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults and environment variables");
    }

    let mut config = Config::load_layered(config_file).context("Failed to load configuration")?;
    apply_cli_overrides(&mut config, args);
    config.validate().context("Invalid configuration")?;

    debug!(
        "Templates: {}, output: {}",
        config.templates_dir().display(),
        config.output_dir().display()
    );
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &CommonArgs) {
    if let Some(project_root) = &args.project_root {
        config.paths.project_root = project_root.clone();
    }
    if let Some(output_path) = &args.output_path {
        config.paths.output_dir = Some(output_path.clone());
    }
}

/// Validate arguments, then load configuration and the catalog document
pub fn prepare(args: &CommonArgs) -> Result<(Config, Catalog)> {
    args.validate()?;
    let config = load_configuration(args)?;
    let catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;
    Ok((config, catalog))
}
