//! Tick plot application library
//!
//! Builds plottable series from SpryWare print/quote data and renders them
//! in an interactive terminal chart.
//!
//! - **config**: YAML configuration (file paths, time mode, session window)
//! - **series**: event merge, print coloring, coordinate building
//! - **visualizer**: ratatui application, viewport, and widgets

pub mod config;
pub mod logging;
pub mod series;
pub mod visualizer;

pub use config::PlotConfig;
pub use visualizer::App;
