mod chart_view;
mod dashboard;
mod panels;
mod scene;
mod styles;
mod ui_config;

pub(crate) use dashboard::render_dashboard;
pub(crate) use panels::{UiAction, render_input_panel, render_top_panel};
pub use scene::DashboardScene;
pub(crate) use styles::{UiStyleExt, colored_heading};
pub(crate) use ui_config::UI_CONFIG;
