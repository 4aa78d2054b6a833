//! Tick Plot Viewer - Main Library
//!
//! Reads SpryWare print and quote files for a single stock, colorizes the
//! prints, and displays the data in an interactive terminal chart.
//!
//! - **bin_common**: Common utilities for binary executables (CLI)
//! - **tickplot**: Series building and visualizer (re-exported)
//! - **sprywarecsv**: Vendor CSV parsing (re-exported)

// Re-export workspace libraries for convenience
pub use sprywarecsv;
pub use tickplot;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{load_config_from_env, parse_args, ConfigType};
}
