mod color;
mod number;
mod perf;
mod time_utils;

pub use color::{palette_color, parse_css_color, to_egui_color};
pub use number::to_fixed;
pub use time_utils::{AppInstant, format_duration_ms};
