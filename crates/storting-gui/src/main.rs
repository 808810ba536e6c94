mod app;
mod panels;
mod theme;

use anyhow::{Context, Result};
use app::StortingApp;
use eframe::egui;
use storting_core::{config::CONFIG_ENV, StortingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = StortingConfig::from_env().context("failed to read configuration")?;
    config.window.validate().context("invalid window configuration")?;

    // stdout plus a plain-text log file
    let log_dir = config.logging.log_directory();
    let file_appender = tracing_appender::rolling::never(&log_dir, "storting.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    tracing::info!(
        "Stortingsvotering starting, logging to {}",
        log_dir.join("storting.log").display()
    );
    match &config.source {
        Some(path) => tracing::info!("Configuration read from {}", path.display()),
        None => tracing::info!("No {} set, using default configuration", CONFIG_ENV),
    }

    // Reject a broken dataset before any window opens
    let dataset = config
        .dataset
        .load()
        .context("dataset failed integrity checks")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([config.window.min_width, config.window.min_height])
            .with_title("Stortingsvotering"),
        ..Default::default()
    };

    eframe::run_native(
        "Stortingsvotering",
        options,
        Box::new(|_cc| Ok(Box::new(StortingApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI exited with error: {e}"))
}
