//! Tick plot visualizer
//!
//! Terminal UI for the print/quote chart with pan and zoom controls.

pub mod app;
pub mod ui;
pub mod viewport;

pub use app::App;
pub use viewport::Viewport;
