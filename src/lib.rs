#![allow(clippy::collapsible_if)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod app;
pub mod charts;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod locale;
pub mod models;
pub mod render;
pub mod theme;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod testing;

// Re-export commonly used types outside of crate (for run_scenario.rs)
pub use app::App;
pub use config::{PERSISTENCE, SERVER};
pub use data::{HttpSimulatorApi, SimulatorApi};
pub use domain::SimulationRequest;
pub use engine::{RenderPlan, interpret};
pub use error::DashboardError;
pub use locale::LanguageCatalog;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the simulation server
    #[arg(long, default_value = SERVER.default_base_url)]
    pub server: String,

    /// Initial language code (overrides the saved one)
    #[arg(long)]
    pub lang: Option<String>,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
