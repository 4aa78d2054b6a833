//! Tick Summary - console diagnostic for SpryWare print/quote files
//!
//! Loads the same configuration as the viewer and prints what the chart
//! would contain, without entering the TUI. Useful for checking a new
//! day's files before plotting them.

use anyhow::Result;
use tracing::info;

use tickplot::logging::init_tracing;
use tickplot::visualizer::App;
use tickplot::PlotConfig;
use tickplot_viewer::bin_common::{load_config_from_env, parse_args, ConfigType};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config_path = match parse_args().into_iter().next() {
        Some(path) => ConfigType::Custom(path).default_path().into(),
        None => load_config_from_env(ConfigType::Viewer),
    };
    info!("loading config from {}", config_path.display());

    let config = PlotConfig::load(&config_path)?;
    let app = App::load(&config)?;

    let series = &app.series;
    info!("session window {} - {}", config.session.start, config.session.end);
    info!(
        "{} prints and {} quotes loaded, {} prints plotted",
        app.trades_loaded,
        app.quotes_loaded,
        app.plotted_prints()
    );
    info!(
        "{} red prints (at bid), {} green prints (at offer), {} white",
        series.red_prints.len(),
        series.green_prints.len(),
        series.trades.len() - series.red_prints.len() - series.green_prints.len()
    );

    if let Some((lo, hi)) = series.y_extent() {
        info!("price range {:.4} - {:.4}", lo, hi);
    }
    if let Some((lo, hi)) = series.x_extent() {
        if config.uniform_time {
            info!("x axis: {:.0} - {:.0} (uniform intervals)", lo, hi);
        } else {
            info!(
                "x axis: {} - {} (wall time)",
                sprywarecsv::format_seconds(lo),
                sprywarecsv::format_seconds(hi)
            );
        }
    }

    Ok(())
}
