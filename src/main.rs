use anyhow::Context;
use eframe::NativeOptions;
use funding_dashboard::config::{ConfigManager, DEFAULT_CONFIG_FILE};
use funding_dashboard::data::CsvConnector;
use funding_dashboard::ui::{AppState, DashboardApp};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut manager = ConfigManager::new();
    manager
        .load_or_create(DEFAULT_CONFIG_FILE)
        .with_context(|| format!("Invalid configuration in {}", DEFAULT_CONFIG_FILE))?;
    let config = manager.into_config();

    // The dataset must load before any window opens.
    let csv_path = config.data.csv_path.clone();
    let (dataset, metadata) = CsvConnector::load_dataset(&csv_path, &config.data.date_formats)
        .with_context(|| format!("Cannot load funding data from {}", csv_path.display()))?;

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.display.width, config.display.height])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Startup Funding Analysis"),
        ..Default::default()
    };

    let state = AppState::new(config, dataset, metadata);
    eframe::run_native(
        "Startup Funding Analysis",
        native_options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {}", e))
}
