//! Configuration module for the dashboard.

mod chart;
mod debug;
mod persistence;
mod server;

pub use chart::{CHART_CONFIG, ChartConfig, ThemePalette};
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use server::{SERVER, ServerConfig};
